//! Shared fixtures for integration tests.

use chrono::Utc;
use uuid::Uuid;

use sitework::domain::models::catalog::{
    PhaseSection, StepDefinition, SubTaskDefinition, WorkflowCatalog,
};
use sitework::domain::models::{NewProjectAttributes, Phase, Project, Role, WorkflowInstance};
use sitework::services::TemplateGenerator;

/// A minimal catalog with one step per phase and the canonical weight
/// distribution 2/7/3/15/10/10 (total 47) used by the dashboard fixtures.
pub fn fixture_catalog() -> WorkflowCatalog {
    let weights = [
        (Phase::Lead, 2),
        (Phase::Prospect, 7),
        (Phase::Approved, 3),
        (Phase::Execution, 15),
        (Phase::SecondSupplement, 10),
        (Phase::Completion, 10),
    ];
    WorkflowCatalog {
        phases: weights
            .into_iter()
            .map(|(phase, weight)| PhaseSection {
                phase,
                steps: vec![fixture_step(phase, weight)],
            })
            .collect(),
    }
}

fn fixture_step(phase: Phase, weight: u32) -> StepDefinition {
    let id = format!("{}_1", phase.as_str());
    StepDefinition {
        display_name: format!("{} work", phase.display_name()),
        weight,
        phase,
        phase_label: phase.as_str().to_string(),
        assigned_role: Role::ProjectManager,
        condition: None,
        sub_tasks: vec![SubTaskDefinition {
            id: format!("{id}_1"),
            display_name: "checklist item".to_string(),
        }],
        id,
    }
}

/// Generate a project with a fresh workflow instance from `catalog`, then
/// mark the given step ids completed.
pub fn project_with_completed(
    catalog: &WorkflowCatalog,
    project_type: Option<&str>,
    is_insurance_claim: bool,
    completed_step_ids: &[&str],
) -> Project {
    let generator = TemplateGenerator::new(catalog);
    let specs = generator
        .generate_default_workflow_steps(&NewProjectAttributes {
            project_type: project_type.map(ToString::to_string),
            is_insurance_claim: Some(is_insurance_claim),
        })
        .expect("fixture attributes are complete");

    let mut workflow = WorkflowInstance::from_specs(specs);
    let now = Utc::now();
    for step_id in completed_step_ids {
        assert!(
            workflow.complete_step(step_id, now),
            "fixture step {step_id} not found or already complete"
        );
    }

    Project {
        id: Uuid::new_v4(),
        project_type: project_type.map(ToString::to_string),
        is_insurance_claim,
        workflow: Some(workflow),
    }
}

/// A project with no workflow instance at all.
pub fn project_without_workflow() -> Project {
    Project {
        id: Uuid::new_v4(),
        project_type: Some("roof_replacement".to_string()),
        is_insurance_claim: true,
        workflow: None,
    }
}
