//! Workflow catalog: the immutable phase/step/sub-task tables.
//!
//! The catalog is built once at process start (either the built-in
//! [`WorkflowCatalog::standard`] tables or a YAML override via the config
//! loader) and passed by reference into the generator and progress engine.
//! Nothing mutates it after construction.

use serde::{Deserialize, Serialize};

use super::phase::Phase;

/// Default role responsible for a step when a workflow is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Sales rep owning lead intake and agreements.
    Sales,
    /// Project manager coordinating the job.
    ProjectManager,
    /// Field crew performing the work.
    FieldCrew,
    /// Office admin handling paperwork and invoicing.
    OfficeAdmin,
    /// Specialist negotiating insurance supplements.
    SupplementCoordinator,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sales => "sales",
            Self::ProjectManager => "project_manager",
            Self::FieldCrew => "field_crew",
            Self::OfficeAdmin => "office_admin",
            Self::SupplementCoordinator => "supplement_coordinator",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Declarative inclusion predicate attached to a conditional step.
///
/// Rules are data, not code branches: adding a new conditional step means
/// adding a rule to the catalog table, not a new `match` arm in the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum InclusionRule {
    /// Step applies only to insurance-claim projects.
    InsuranceOnly,
    /// Step applies only to non-insurance (retail) projects.
    NonInsuranceOnly,
    /// Step applies only when the project type is in the allow-list.
    /// An absent or unrecognized project type excludes the step.
    ProjectTypeIn { allowed: Vec<String> },
}

/// Unweighted checklist item under a step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubTaskDefinition {
    /// Stable id, derived as `{step_id}_{n}` with n starting at 1.
    pub id: String,
    /// Human-readable label.
    pub display_name: String,
}

/// A weighted unit of work within a phase; the unit of progress measurement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDefinition {
    /// Stable string key, globally unique across all phases.
    pub id: String,
    /// Human-readable step name.
    pub display_name: String,
    /// Relative contribution to phase and overall progress. Always >= 1.
    pub weight: u32,
    /// Owning phase.
    pub phase: Phase,
    /// Stored phase label carried onto generated records. Usually the
    /// phase key; the non-insurance prospect branch keeps its own label.
    pub phase_label: String,
    /// Role assigned to the step when a workflow is generated.
    pub assigned_role: Role,
    /// Inclusion predicate. Absent means the step always counts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<InclusionRule>,
    /// Checklist items instantiated under the step (1..=10).
    pub sub_tasks: Vec<SubTaskDefinition>,
}

impl StepDefinition {
    /// Whether this step's inclusion depends on project attributes.
    pub fn is_conditional(&self) -> bool {
        self.condition.is_some()
    }
}

/// One phase section of the catalog: the phase plus its step table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseSection {
    pub phase: Phase,
    pub steps: Vec<StepDefinition>,
}

/// The immutable phase/step catalog.
///
/// Invariants (enforced by the config loader's validation):
/// - exactly six sections, one per [`Phase`], in canonical order;
/// - step ids globally unique;
/// - every weight >= 1;
/// - 1..=10 sub-tasks per step, ids `{step_id}_{n}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowCatalog {
    pub phases: Vec<PhaseSection>,
}

impl WorkflowCatalog {
    /// Phase sections in canonical order.
    pub fn sections(&self) -> impl Iterator<Item = &PhaseSection> {
        self.phases.iter()
    }

    /// Step definitions for one phase, in catalog order.
    pub fn steps_for(&self, phase: Phase) -> &[StepDefinition] {
        self.phases
            .iter()
            .find(|s| s.phase == phase)
            .map_or(&[], |s| s.steps.as_slice())
    }

    /// Look up a step definition by id.
    pub fn find_step(&self, step_id: &str) -> Option<&StepDefinition> {
        self.phases
            .iter()
            .flat_map(|s| s.steps.iter())
            .find(|step| step.id == step_id)
    }

    /// Total number of step definitions, both branches included.
    pub fn total_step_count(&self) -> usize {
        self.phases.iter().map(|s| s.steps.len()).sum()
    }

    /// The built-in production catalog.
    pub fn standard() -> Self {
        Self {
            phases: vec![
                lead_section(),
                prospect_section(),
                approved_section(),
                execution_section(),
                second_supplement_section(),
                completion_section(),
            ],
        }
    }
}

impl Default for WorkflowCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

// ============================================================================
// Built-in tables
// ============================================================================

/// Project types eligible for insurance supplements.
const SUPPLEMENT_TYPES: &[&str] = &["roof_replacement", "storm_restoration", "full_exterior"];

/// Project types whose supplements also require customer sign-off.
const SUPPLEMENT_APPROVAL_TYPES: &[&str] = &[
    "roof_replacement",
    "storm_restoration",
    "full_exterior",
    "siding_replacement",
];

fn step(
    id: &str,
    display_name: &str,
    weight: u32,
    phase: Phase,
    role: Role,
    sub_task_names: &[&str],
) -> StepDefinition {
    StepDefinition {
        id: id.to_string(),
        display_name: display_name.to_string(),
        weight,
        phase,
        phase_label: phase.as_str().to_string(),
        assigned_role: role,
        condition: None,
        sub_tasks: sub_tasks_for(id, sub_task_names),
    }
}

fn sub_tasks_for(step_id: &str, names: &[&str]) -> Vec<SubTaskDefinition> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| SubTaskDefinition {
            id: format!("{}_{}", step_id, i + 1),
            display_name: (*name).to_string(),
        })
        .collect()
}

fn lead_section() -> PhaseSection {
    let p = Phase::Lead;
    PhaseSection {
        phase: p,
        steps: vec![
            step("lead_1", "Initial Contact", 1, p, Role::Sales, &[
                "Log contact information",
                "Record lead source",
            ]),
            step("lead_2", "Qualify Lead", 1, p, Role::Sales, &[
                "Confirm property ownership",
                "Confirm scope of interest",
            ]),
            step("lead_3", "Schedule Site Visit", 1, p, Role::Sales, &[
                "Agree on visit date",
            ]),
            step("lead_4", "Collect Property Details", 1, p, Role::Sales, &[
                "Photograph property",
                "Measure roof and elevations",
                "Note access constraints",
            ]),
            step("lead_5", "Create Project File", 1, p, Role::OfficeAdmin, &[
                "Open project record",
                "Attach photos and measurements",
            ]),
        ],
    }
}

fn prospect_section() -> PhaseSection {
    let p = Phase::Prospect;
    let mut insurance = vec![
        step("prospect_1", "Site Inspection", 2, p, Role::ProjectManager, &[
            "Inspect damage with adjuster",
            "Document damage with photos",
        ]),
        step("prospect_2", "Write Estimate", 2, p, Role::ProjectManager, &[
            "Draft scope of work",
            "Price scope of work",
        ]),
        step("prospect_3", "Insurance Process", 2, p, Role::OfficeAdmin, &[
            "Submit estimate to carrier",
            "Reconcile carrier scope",
            "Receive approved loss statement",
        ]),
        step("prospect_4", "Agreement Preparation", 1, p, Role::OfficeAdmin, &[
            "Prepare contract packet",
        ]),
        step("prospect_5", "Agreement Signing", 1, p, Role::Sales, &[
            "Review contract with customer",
            "Collect signatures",
        ]),
    ];
    for s in &mut insurance {
        s.condition = Some(InclusionRule::InsuranceOnly);
    }

    // Retail projects skip the carrier loop entirely. The stored phase
    // label stays distinct so records show which branch was generated.
    let mut retail = vec![
        step("prospect_non_insurance_1", "Write Estimate", 4, p, Role::ProjectManager, &[
            "Draft scope of work",
            "Price scope of work",
            "Present estimate to customer",
        ]),
        step("prospect_non_insurance_2", "Agreement Signing", 3, p, Role::Sales, &[
            "Review contract with customer",
            "Collect signatures",
        ]),
    ];
    for s in &mut retail {
        s.condition = Some(InclusionRule::NonInsuranceOnly);
        s.phase_label = "prospect_non_insurance".to_string();
    }

    let mut steps = insurance;
    steps.append(&mut retail);
    PhaseSection { phase: p, steps }
}

fn approved_section() -> PhaseSection {
    let p = Phase::Approved;
    PhaseSection {
        phase: p,
        steps: vec![
            step("approved_1", "Administrative Setup", 1, p, Role::OfficeAdmin, &[
                "Collect deposit",
                "File permits",
            ]),
            step("approved_2", "Pre-Job Site Inspection", 1, p, Role::ProjectManager, &[
                "Verify measurements",
                "Confirm material colors",
            ]),
            step("approved_3", "Order Materials", 2, p, Role::ProjectManager, &[
                "Build material order",
                "Confirm delivery date",
            ]),
        ],
    }
}

fn execution_section() -> PhaseSection {
    let p = Phase::Execution;
    PhaseSection {
        phase: p,
        steps: vec![
            step("execution_1", "Schedule Crew", 2, p, Role::ProjectManager, &[
                "Assign crew",
                "Confirm start date with customer",
            ]),
            step("execution_2", "Material Delivery", 2, p, Role::FieldCrew, &[
                "Receive delivery",
                "Verify order against packing list",
            ]),
            step("execution_3", "Installation", 5, p, Role::FieldCrew, &[
                "Tear off",
                "Install",
                "Daily site cleanup",
            ]),
            step("execution_4", "Quality Inspection", 2, p, Role::ProjectManager, &[
                "Walk the job",
                "Photograph finished work",
            ]),
            step("execution_5", "Final Walkthrough", 2, p, Role::ProjectManager, &[
                "Walk the job with customer",
            ]),
            step("execution_6", "Punch List", 2, p, Role::FieldCrew, &[
                "Complete punch list items",
                "Customer sign-off on punch list",
            ]),
        ],
    }
}

fn second_supplement_section() -> PhaseSection {
    let p = Phase::SecondSupplement;
    let allow = |types: &[&str]| {
        Some(InclusionRule::ProjectTypeIn {
            allowed: types.iter().map(ToString::to_string).collect(),
        })
    };
    let mut steps = vec![
        step("second_supplement_1", "Identify Supplement Items", 2, p, Role::SupplementCoordinator, &[
            "Document items missed in original scope",
        ]),
        step("second_supplement_2", "Submit Supplement", 2, p, Role::SupplementCoordinator, &[
            "Price supplement items",
            "Submit supplement to carrier",
        ]),
        step("second_supplement_3", "Carrier Approval", 3, p, Role::SupplementCoordinator, &[
            "Negotiate with carrier",
            "Receive revised loss statement",
        ]),
        step("second_supplement_4", "Customer Approval", 3, p, Role::Sales, &[
            "Review revised scope with customer",
            "Collect change-order signature",
        ]),
    ];
    steps[0].condition = allow(SUPPLEMENT_TYPES);
    steps[1].condition = allow(SUPPLEMENT_TYPES);
    steps[2].condition = allow(SUPPLEMENT_TYPES);
    steps[3].condition = allow(SUPPLEMENT_APPROVAL_TYPES);
    PhaseSection { phase: p, steps }
}

fn completion_section() -> PhaseSection {
    let p = Phase::Completion;
    PhaseSection {
        phase: p,
        steps: vec![
            step("completion_1", "Final Invoice", 2, p, Role::OfficeAdmin, &[
                "Issue final invoice",
                "Send warranty documents",
            ]),
            step("completion_2", "Collect Payment", 3, p, Role::OfficeAdmin, &[
                "Collect final payment",
                "Close project record",
            ]),
        ],
    }
}
