//! Progress aggregation engine.
//!
//! Walks the catalog against a project's step records and produces the
//! weighted breakdown plus the unweighted step counts in one pass. The
//! computation is pure and synchronous: no I/O, no locking, no caching.
//! Every call recomputes from the snapshot it is handed.

use std::collections::HashMap;

use tracing::trace;

use crate::domain::models::catalog::WorkflowCatalog;
use crate::domain::models::progress::{
    PhaseProgress, ProgressResult, StepCounts, StepProgress,
};
use crate::domain::models::project::Project;
use crate::domain::models::workflow::StepRecord;

use super::inclusion::InclusionResolver;

/// Round-half-away-from-zero percentage, 0 when the denominator is 0.
///
/// A zero denominator is a normal state (phase fully excluded for this
/// project), never a division error.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn percentage(completed: u32, total: u32) -> u32 {
    if total == 0 {
        0
    } else {
        (f64::from(completed) / f64::from(total) * 100.0).round() as u32
    }
}

/// Computes weighted progress and step counts from a project snapshot.
#[derive(Debug, Clone, Copy)]
pub struct ProgressEngine<'a> {
    catalog: &'a WorkflowCatalog,
    resolver: InclusionResolver,
}

impl<'a> ProgressEngine<'a> {
    pub const fn new(catalog: &'a WorkflowCatalog) -> Self {
        Self {
            catalog,
            resolver: InclusionResolver::new(),
        }
    }

    /// Compute overall percentage, per-phase breakdown, and step counts.
    ///
    /// A project without a workflow instance yields the zero-value shape:
    /// `overall == 0`, empty phase map, zero counts. Callers always receive
    /// a well-formed result.
    pub fn calculate_project_progress(&self, project: &Project) -> ProgressResult {
        let Some(workflow) = &project.workflow else {
            return ProgressResult::empty();
        };

        let attrs = project.attributes();
        let records: HashMap<&str, &StepRecord> = workflow
            .steps
            .iter()
            .map(|r| (r.step_id.as_str(), r))
            .collect();

        let mut result = ProgressResult::empty();

        for section in self.catalog.sections() {
            let mut phase = PhaseProgress::default();

            for step in &section.steps {
                // One predicate gates both the weight sums and the step
                // list below; they cannot disagree.
                if !self.resolver.should_include(step, &attrs) {
                    continue;
                }

                let record = records.get(step.id.as_str());
                let is_completed = record.is_some_and(|r| r.is_completed);

                phase.weight += step.weight;
                if is_completed {
                    phase.completed_weight += step.weight;
                }
                phase.steps.push(StepProgress {
                    step_id: step.id.clone(),
                    display_name: step.display_name.clone(),
                    weight: step.weight,
                    is_completed,
                    is_conditional: step.is_conditional(),
                    has_record: record.is_some(),
                });
            }

            phase.percentage = percentage(phase.completed_weight, phase.weight);
            result.total_weight += phase.weight;
            result.completed_weight += phase.completed_weight;
            trace!(
                phase = %section.phase,
                weight = phase.weight,
                completed_weight = phase.completed_weight,
                percentage = phase.percentage,
                "aggregated phase"
            );
            result.phases.insert(section.phase, phase);
        }

        result.overall = percentage(result.completed_weight, result.total_weight);
        result.step_counts = Self::count_steps(workflow.steps.as_slice());
        result
    }

    /// Unweighted counts over all records, inclusion filtering ignored.
    /// This view intentionally may disagree with the weighted overall.
    fn count_steps(steps: &[StepRecord]) -> StepCounts {
        let mut counts = StepCounts {
            total: steps.len(),
            ..StepCounts::default()
        };
        for step in steps {
            if step.is_completed {
                counts.completed += 1;
            }
            counts.sub_tasks_total += step.sub_tasks.len();
            counts.sub_tasks_completed += step.sub_tasks.iter().filter(|st| st.is_completed).count();
        }
        counts
    }
}
