//! Workflow template generator.
//!
//! Builds the ordered step specs for a new project from the catalog tables,
//! branching on the insurance-claim flag to pick exactly one of the two
//! prospect subsets. Project-type-gated steps (the 2nd-supplement table)
//! are always instantiated; whether they count is decided at read time by
//! the inclusion resolver, so a project whose type changes later needs no
//! regeneration.
//!
//! The generator is a pure function of the project attributes: no clock,
//! no randomness, no catalog mutation. Same attributes, same specs.

use tracing::debug;

use crate::domain::error::WorkflowError;
use crate::domain::models::catalog::{InclusionRule, StepDefinition, WorkflowCatalog};
use crate::domain::models::project::NewProjectAttributes;
use crate::domain::models::workflow::{StepSpec, SubTaskSpec};

/// Generates default workflow step specs for new projects.
#[derive(Debug, Clone, Copy)]
pub struct TemplateGenerator<'a> {
    catalog: &'a WorkflowCatalog,
}

impl<'a> TemplateGenerator<'a> {
    pub const fn new(catalog: &'a WorkflowCatalog) -> Self {
        Self { catalog }
    }

    /// Produce the full, ordered step spec list for a new project.
    ///
    /// Steps form one linear chain: within a phase each step depends on its
    /// predecessor, and the first step of a phase depends on the last step
    /// emitted for the previous phase. Which step that is for APPROVED
    /// depends on the prospect branch taken.
    ///
    /// # Errors
    /// `WorkflowError::InvalidProjectAttributes` when the insurance-claim
    /// flag is absent.
    pub fn generate_default_workflow_steps(
        &self,
        attrs: &NewProjectAttributes,
    ) -> Result<Vec<StepSpec>, WorkflowError> {
        let validated = attrs.validated()?;
        let is_insurance_claim = validated.is_insurance_claim;

        let mut specs = Vec::with_capacity(self.catalog.total_step_count());
        let mut previous_step_id: Option<String> = None;

        for section in self.catalog.sections() {
            for step in &section.steps {
                if !Self::instantiated_for(step, is_insurance_claim) {
                    continue;
                }
                let dependencies = previous_step_id.clone().into_iter().collect();
                previous_step_id = Some(step.id.clone());
                specs.push(Self::spec_from(step, dependencies));
            }
        }

        debug!(
            step_count = specs.len(),
            is_insurance_claim, "generated default workflow steps"
        );
        Ok(specs)
    }

    /// Whether a catalog step is instantiated for this project at all.
    ///
    /// Only the prospect branch rules gate instantiation; project-type
    /// rules are evaluated per read, never here.
    fn instantiated_for(step: &StepDefinition, is_insurance_claim: bool) -> bool {
        match &step.condition {
            Some(InclusionRule::InsuranceOnly) => is_insurance_claim,
            Some(InclusionRule::NonInsuranceOnly) => !is_insurance_claim,
            Some(InclusionRule::ProjectTypeIn { .. }) | None => true,
        }
    }

    fn spec_from(step: &StepDefinition, dependencies: Vec<String>) -> StepSpec {
        StepSpec {
            step_id: step.id.clone(),
            phase: step.phase,
            phase_label: step.phase_label.clone(),
            display_name: step.display_name.clone(),
            weight: step.weight,
            dependencies,
            assigned_role: step.assigned_role,
            sub_tasks: step
                .sub_tasks
                .iter()
                .map(|st| SubTaskSpec {
                    sub_task_id: st.id.clone(),
                    display_name: st.display_name.clone(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(is_insurance_claim: Option<bool>) -> NewProjectAttributes {
        NewProjectAttributes {
            project_type: Some("roof_replacement".to_string()),
            is_insurance_claim,
        }
    }

    #[test]
    fn missing_claim_flag_is_rejected() {
        let catalog = WorkflowCatalog::standard();
        let generator = TemplateGenerator::new(&catalog);
        let err = generator
            .generate_default_workflow_steps(&attrs(None))
            .unwrap_err();
        assert!(matches!(err, WorkflowError::InvalidProjectAttributes(_)));
    }

    #[test]
    fn insurance_projects_get_the_five_step_prospect_branch() {
        let catalog = WorkflowCatalog::standard();
        let generator = TemplateGenerator::new(&catalog);
        let specs = generator
            .generate_default_workflow_steps(&attrs(Some(true)))
            .unwrap();

        let ids: Vec<&str> = specs.iter().map(|s| s.step_id.as_str()).collect();
        assert!(ids.contains(&"prospect_1"));
        assert!(ids.contains(&"prospect_5"));
        assert!(!ids.iter().any(|id| id.starts_with("prospect_non_insurance")));
    }

    #[test]
    fn chain_crosses_phase_boundaries() {
        let catalog = WorkflowCatalog::standard();
        let generator = TemplateGenerator::new(&catalog);
        let specs = generator
            .generate_default_workflow_steps(&attrs(Some(true)))
            .unwrap();

        let first = &specs[0];
        assert_eq!(first.step_id, "lead_1");
        assert!(first.dependencies.is_empty());

        let prospect_1 = specs.iter().find(|s| s.step_id == "prospect_1").unwrap();
        assert_eq!(prospect_1.dependencies, vec!["lead_5".to_string()]);

        let approved_1 = specs.iter().find(|s| s.step_id == "approved_1").unwrap();
        assert_eq!(approved_1.dependencies, vec!["prospect_5".to_string()]);
    }

    #[test]
    fn non_insurance_approved_depends_on_retail_branch() {
        let catalog = WorkflowCatalog::standard();
        let generator = TemplateGenerator::new(&catalog);
        let specs = generator
            .generate_default_workflow_steps(&attrs(Some(false)))
            .unwrap();

        let approved_1 = specs.iter().find(|s| s.step_id == "approved_1").unwrap();
        assert_eq!(
            approved_1.dependencies,
            vec!["prospect_non_insurance_2".to_string()]
        );
    }

    #[test]
    fn supplement_steps_are_always_instantiated() {
        let catalog = WorkflowCatalog::standard();
        let generator = TemplateGenerator::new(&catalog);
        for claim in [true, false] {
            let specs = generator
                .generate_default_workflow_steps(&NewProjectAttributes {
                    project_type: None,
                    is_insurance_claim: Some(claim),
                })
                .unwrap();
            let supplements = specs
                .iter()
                .filter(|s| s.step_id.starts_with("second_supplement"))
                .count();
            assert_eq!(supplements, 4);
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let catalog = WorkflowCatalog::standard();
        let generator = TemplateGenerator::new(&catalog);
        let a = generator
            .generate_default_workflow_steps(&attrs(Some(true)))
            .unwrap();
        let b = generator
            .generate_default_workflow_steps(&attrs(Some(true)))
            .unwrap();
        assert_eq!(a, b);
    }
}
