//! Current-phase and next-step resolution.
//!
//! Derives "where is this project" and "what can be worked on next" from
//! the aggregation engine's output. A phase whose steps are all excluded
//! for this project reports 0% and is therefore reported as current when
//! the scan reaches it; its next-step list is empty. That mirrors the
//! production behavior and is deliberately not special-cased.

use tracing::debug;

use crate::domain::models::catalog::WorkflowCatalog;
use crate::domain::models::phase::Phase;
use crate::domain::models::progress::{ProgressResult, StepSummary};
use crate::domain::models::project::Project;

use super::progress_engine::ProgressEngine;

/// Resolves the current phase and the actionable steps within it.
#[derive(Debug, Clone, Copy)]
pub struct PhaseResolver<'a> {
    catalog: &'a WorkflowCatalog,
    engine: ProgressEngine<'a>,
}

impl<'a> PhaseResolver<'a> {
    pub const fn new(catalog: &'a WorkflowCatalog) -> Self {
        Self {
            catalog,
            engine: ProgressEngine::new(catalog),
        }
    }

    /// The first phase, in canonical order, that is not at 100%.
    ///
    /// Returns `Lead` for projects without a workflow and `Completion`
    /// only when every phase is genuinely at 100%.
    pub fn current_phase(&self, project: &Project) -> Phase {
        if project.workflow.is_none() {
            return Phase::initial();
        }
        let progress = self.engine.calculate_project_progress(project);
        self.current_phase_from(&progress)
    }

    /// Same scan over an already computed result, for callers that need
    /// both the breakdown and the phase without recomputing.
    pub fn current_phase_from(&self, progress: &ProgressResult) -> Phase {
        for phase in Phase::ALL {
            if progress.phase_percentage(phase) < 100 {
                return phase;
            }
        }
        Phase::terminal()
    }

    /// Incomplete included steps of the current phase, in catalog order.
    ///
    /// Declared step dependencies are NOT checked here: a step whose
    /// dependency is still open is listed anyway. Dependencies are
    /// ordering hints, not gates.
    pub fn next_steps(&self, project: &Project) -> Vec<StepSummary> {
        if project.workflow.is_none() {
            return Vec::new();
        }
        let progress = self.engine.calculate_project_progress(project);
        let phase = self.current_phase_from(&progress);

        let Some(phase_progress) = progress.phases.get(&phase) else {
            return Vec::new();
        };

        let steps: Vec<StepSummary> = phase_progress
            .steps
            .iter()
            .filter(|s| !s.is_completed)
            .filter_map(|s| {
                self.catalog.find_step(&s.step_id).map(|def| StepSummary {
                    step_id: s.step_id.clone(),
                    display_name: s.display_name.clone(),
                    phase,
                    weight: s.weight,
                    is_conditional: s.is_conditional,
                    assigned_role: def.assigned_role,
                })
            })
            .collect();

        debug!(phase = %phase, next = steps.len(), "resolved next steps");
        steps
    }
}
