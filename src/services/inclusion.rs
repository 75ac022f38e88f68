//! Conditional inclusion resolver.
//!
//! Decides whether a catalog step counts for a given project at all. The
//! same predicate gates both the weight accumulation and the per-step
//! breakdown in the progress engine; there is exactly one code path, so
//! the denominator and the displayed steps can never diverge.

use crate::domain::models::catalog::{InclusionRule, StepDefinition};
use crate::domain::models::project::ProjectAttributes;

/// Pure predicate over catalog steps and project attributes.
#[derive(Debug, Clone, Copy, Default)]
pub struct InclusionResolver;

impl InclusionResolver {
    pub const fn new() -> Self {
        Self
    }

    /// Whether `step` counts toward phase and overall weight for this
    /// project. Unconditional steps always count.
    pub fn should_include(&self, step: &StepDefinition, attrs: &ProjectAttributes) -> bool {
        match &step.condition {
            None => true,
            Some(rule) => self.rule_applies(rule, attrs),
        }
    }

    fn rule_applies(&self, rule: &InclusionRule, attrs: &ProjectAttributes) -> bool {
        match rule {
            InclusionRule::InsuranceOnly => attrs.is_insurance_claim,
            InclusionRule::NonInsuranceOnly => !attrs.is_insurance_claim,
            InclusionRule::ProjectTypeIn { allowed } => attrs
                .project_type
                .as_ref()
                .is_some_and(|pt| allowed.iter().any(|a| a == pt)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::catalog::{Role, StepDefinition, SubTaskDefinition};
    use crate::domain::models::phase::Phase;

    fn step_with(condition: Option<InclusionRule>) -> StepDefinition {
        StepDefinition {
            id: "test_1".to_string(),
            display_name: "Test".to_string(),
            weight: 1,
            phase: Phase::SecondSupplement,
            phase_label: "second_supplement".to_string(),
            assigned_role: Role::ProjectManager,
            condition,
            sub_tasks: vec![SubTaskDefinition {
                id: "test_1_1".to_string(),
                display_name: "item".to_string(),
            }],
        }
    }

    fn attrs(project_type: Option<&str>, is_insurance_claim: bool) -> ProjectAttributes {
        ProjectAttributes {
            project_type: project_type.map(ToString::to_string),
            is_insurance_claim,
        }
    }

    #[test]
    fn unconditional_steps_always_included() {
        let resolver = InclusionResolver::new();
        let step = step_with(None);
        assert!(resolver.should_include(&step, &attrs(None, false)));
        assert!(resolver.should_include(&step, &attrs(Some("anything"), true)));
    }

    #[test]
    fn insurance_branch_rules_follow_claim_flag() {
        let resolver = InclusionResolver::new();
        let insurance = step_with(Some(InclusionRule::InsuranceOnly));
        let retail = step_with(Some(InclusionRule::NonInsuranceOnly));

        assert!(resolver.should_include(&insurance, &attrs(None, true)));
        assert!(!resolver.should_include(&insurance, &attrs(None, false)));
        assert!(!resolver.should_include(&retail, &attrs(None, true)));
        assert!(resolver.should_include(&retail, &attrs(None, false)));
    }

    #[test]
    fn project_type_rule_requires_allow_list_membership() {
        let resolver = InclusionResolver::new();
        let step = step_with(Some(InclusionRule::ProjectTypeIn {
            allowed: vec!["roof_replacement".to_string(), "full_exterior".to_string()],
        }));

        assert!(resolver.should_include(&step, &attrs(Some("roof_replacement"), true)));
        assert!(resolver.should_include(&step, &attrs(Some("full_exterior"), false)));
        assert!(!resolver.should_include(&step, &attrs(Some("gutters"), true)));
    }

    #[test]
    fn absent_project_type_excludes_gated_steps() {
        let resolver = InclusionResolver::new();
        let step = step_with(Some(InclusionRule::ProjectTypeIn {
            allowed: vec!["roof_replacement".to_string()],
        }));
        assert!(!resolver.should_include(&step, &attrs(None, true)));
    }
}
