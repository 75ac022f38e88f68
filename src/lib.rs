//! Sitework - Weighted Workflow Progress Engine
//!
//! Sitework computes construction-project workflow progress: every project
//! advances through six fixed phases (Lead, Prospect, Approved, Execution,
//! 2nd Supplement, Completion), each phase composed of weighted steps and
//! unweighted sub-task checklists.
//!
//! # Architecture
//!
//! The crate is a pure computation core with thin infrastructure around it:
//!
//! - **Domain Layer** (`domain`): Phase/step catalog, project snapshots,
//!   workflow instances, progress result types
//! - **Service Layer** (`services`): Template generation, conditional
//!   inclusion, progress aggregation, phase/next-step resolution
//! - **Infrastructure Layer** (`infrastructure`): Catalog configuration
//!   loading and logging setup
//!
//! Persistence, HTTP routing, auth, and event broadcasting are external
//! collaborators; the engine only ever sees in-memory snapshots and never
//! performs I/O.
//!
//! # Example
//!
//! ```
//! use sitework::domain::models::{NewProjectAttributes, Project, WorkflowCatalog, WorkflowInstance};
//! use sitework::services::{PhaseResolver, ProgressEngine, TemplateGenerator};
//! use uuid::Uuid;
//!
//! let catalog = WorkflowCatalog::standard();
//! let generator = TemplateGenerator::new(&catalog);
//!
//! let specs = generator
//!     .generate_default_workflow_steps(&NewProjectAttributes {
//!         project_type: Some("roof_replacement".to_string()),
//!         is_insurance_claim: Some(true),
//!     })
//!     .unwrap();
//!
//! let project = Project {
//!     id: Uuid::new_v4(),
//!     project_type: Some("roof_replacement".to_string()),
//!     is_insurance_claim: true,
//!     workflow: Some(WorkflowInstance::from_specs(specs)),
//! };
//!
//! let progress = ProgressEngine::new(&catalog).calculate_project_progress(&project);
//! assert_eq!(progress.overall, 0);
//!
//! let resolver = PhaseResolver::new(&catalog);
//! assert_eq!(resolver.current_phase(&project), sitework::domain::models::Phase::Lead);
//! ```

pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{
    InclusionRule, NewProjectAttributes, Phase, PhaseProgress, Project, ProjectAttributes,
    ProgressResult, Role, StepCounts, StepDefinition, StepProgress, StepRecord, StepSpec,
    StepSummary, SubTaskDefinition, SubTaskRecord, SubTaskSpec, WorkflowCatalog, WorkflowInstance,
    WorkflowStatus,
};
pub use domain::WorkflowError;
pub use infrastructure::config::{CatalogError, CatalogLoader};
pub use infrastructure::logging::{LogConfig, LogFormat, Logger, RotationPolicy};
pub use services::{InclusionResolver, PhaseResolver, ProgressEngine, TemplateGenerator};
