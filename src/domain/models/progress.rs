//! Progress result types produced by the aggregation engine.
//!
//! One engine produces both views: the weighted percentages that drive the
//! project dashboard, and the plain step counts shown as "12 of 25 steps".
//! The two can disagree numerically; that is intentional, the counts ignore
//! weights and inclusion filtering.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::catalog::Role;
use super::phase::Phase;

/// Weighted progress for a single phase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseProgress {
    /// Sum of weights of this phase's included steps (the denominator).
    pub weight: u32,
    /// Sum of weights of included steps marked completed.
    pub completed_weight: u32,
    /// `round(completed_weight / weight * 100)`, or 0 when weight is 0.
    pub percentage: u32,
    /// Included steps in catalog order, with completion state.
    pub steps: Vec<StepProgress>,
}

/// Per-step entry in a phase breakdown. Only steps passing the inclusion
/// resolver appear here; the same predicate gates the weight sums above.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepProgress {
    pub step_id: String,
    pub display_name: String,
    pub weight: u32,
    pub is_completed: bool,
    /// Whether the step carries an inclusion rule in the catalog.
    pub is_conditional: bool,
    /// Whether the workflow instance holds a record for this step. A
    /// definition with no record counts as incomplete.
    pub has_record: bool,
}

/// Unweighted counts over all step records, inclusion ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepCounts {
    pub total: usize,
    pub completed: usize,
    pub sub_tasks_total: usize,
    pub sub_tasks_completed: usize,
}

/// Full output of a progress computation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressResult {
    /// Overall weighted completion, 0..=100.
    pub overall: u32,
    /// Sum of included step weights across all phases.
    pub total_weight: u32,
    /// Sum of included, completed step weights across all phases.
    pub completed_weight: u32,
    /// Per-phase breakdown, keyed in canonical phase order. Empty when the
    /// project has no workflow instance.
    pub phases: BTreeMap<Phase, PhaseProgress>,
    /// Secondary unweighted view.
    pub step_counts: StepCounts,
}

impl ProgressResult {
    /// The zero-value shape returned for projects without a workflow.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Phase percentage, defaulting to 0 for phases missing from the map.
    pub fn phase_percentage(&self, phase: Phase) -> u32 {
        self.phases.get(&phase).map_or(0, |p| p.percentage)
    }
}

/// An actionable step surfaced by the next-step resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepSummary {
    pub step_id: String,
    pub display_name: String,
    pub phase: Phase,
    pub weight: u32,
    pub is_conditional: bool,
    pub assigned_role: Role,
}
