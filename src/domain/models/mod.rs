pub mod catalog;
pub mod phase;
pub mod progress;
pub mod project;
pub mod workflow;

pub use catalog::{InclusionRule, PhaseSection, Role, StepDefinition, SubTaskDefinition, WorkflowCatalog};
pub use phase::Phase;
pub use progress::{PhaseProgress, ProgressResult, StepCounts, StepProgress, StepSummary};
pub use project::{NewProjectAttributes, Project, ProjectAttributes};
pub use workflow::{
    StepRecord, StepSpec, SubTaskRecord, SubTaskSpec, WorkflowInstance, WorkflowStatus,
};
