//! Workflow instance domain model.
//!
//! A [`WorkflowInstance`] is the concrete, per-project realization of the
//! catalog: one [`StepRecord`] per generated step, each owning its
//! [`SubTaskRecord`]s. Records are created in one batch at generation time
//! and only ever mutated by marking completion; the storage layer is
//! responsible for serializing the complete-then-recompute unit per
//! instance (the model itself carries no locking).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::catalog::Role;
use super::phase::Phase;
use super::progress::ProgressResult;

/// Status of a workflow instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStatus {
    /// Generated, nothing completed yet.
    #[default]
    NotStarted,
    /// At least one step completed.
    InProgress,
    /// Every included step completed.
    Completed,
}

impl std::fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotStarted => write!(f, "not_started"),
            Self::InProgress => write!(f, "in_progress"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// Sub-task specification emitted by the template generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubTaskSpec {
    pub sub_task_id: String,
    pub display_name: String,
}

/// Step specification emitted by the template generator, ready for the
/// persistence collaborator to turn into stored records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepSpec {
    pub step_id: String,
    pub phase: Phase,
    /// Stored phase label; differs from `phase.as_str()` only for the
    /// non-insurance prospect branch.
    pub phase_label: String,
    pub display_name: String,
    pub weight: u32,
    /// Sibling step ids this step waits on. Informational ordering hints;
    /// the progress engine does not enforce them.
    pub dependencies: Vec<String>,
    pub assigned_role: Role,
    pub sub_tasks: Vec<SubTaskSpec>,
}

/// Concrete checklist item under a step record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubTaskRecord {
    pub sub_task_id: String,
    pub display_name: String,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Concrete instantiation of a catalog step for one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    pub step_id: String,
    /// Stored phase label as generated (e.g. `prospect_non_insurance`).
    pub phase_label: String,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub dependencies: Vec<String>,
    pub assigned_role: Role,
    #[serde(default)]
    pub sub_tasks: Vec<SubTaskRecord>,
}

/// Per-project workflow state: the ordered step records plus advisory
/// cached fields refreshed after each recompute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowInstance {
    pub id: Uuid,
    pub status: WorkflowStatus,
    /// Last computed overall percentage. Advisory cache only; every read
    /// recomputes from the records.
    pub overall_progress: u32,
    /// Index of the first incomplete record. Advisory.
    pub current_step_index: usize,
    pub steps: Vec<StepRecord>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WorkflowInstance {
    /// Instantiate a workflow from generated step specs, all incomplete.
    pub fn from_specs(specs: Vec<StepSpec>) -> Self {
        let now = Utc::now();
        let steps = specs
            .into_iter()
            .map(|spec| StepRecord {
                step_id: spec.step_id,
                phase_label: spec.phase_label,
                is_completed: false,
                completed_at: None,
                dependencies: spec.dependencies,
                assigned_role: spec.assigned_role,
                sub_tasks: spec
                    .sub_tasks
                    .into_iter()
                    .map(|st| SubTaskRecord {
                        sub_task_id: st.sub_task_id,
                        display_name: st.display_name,
                        is_completed: false,
                        completed_at: None,
                    })
                    .collect(),
            })
            .collect();

        Self {
            id: Uuid::new_v4(),
            status: WorkflowStatus::NotStarted,
            overall_progress: 0,
            current_step_index: 0,
            steps,
            created_at: now,
            updated_at: now,
        }
    }

    /// Find a step record by id.
    pub fn find_step(&self, step_id: &str) -> Option<&StepRecord> {
        self.steps.iter().find(|s| s.step_id == step_id)
    }

    /// Mark a step completed, cascading every sub-task record under it.
    ///
    /// Returns `true` when the step transitioned; `false` when the id is
    /// unknown or the step was already completed. Records are never created
    /// here; an unknown id is a no-op for the caller to surface.
    pub fn complete_step(&mut self, step_id: &str, now: DateTime<Utc>) -> bool {
        let Some(step) = self.steps.iter_mut().find(|s| s.step_id == step_id) else {
            return false;
        };
        if step.is_completed {
            return false;
        }
        step.is_completed = true;
        step.completed_at = Some(now);
        for sub in &mut step.sub_tasks {
            if !sub.is_completed {
                sub.is_completed = true;
                sub.completed_at = Some(now);
            }
        }
        self.updated_at = now;
        true
    }

    /// Mark a single sub-task completed without touching its parent step.
    pub fn complete_sub_task(&mut self, step_id: &str, sub_task_id: &str, now: DateTime<Utc>) -> bool {
        let Some(step) = self.steps.iter_mut().find(|s| s.step_id == step_id) else {
            return false;
        };
        let Some(sub) = step
            .sub_tasks
            .iter_mut()
            .find(|st| st.sub_task_id == sub_task_id)
        else {
            return false;
        };
        if sub.is_completed {
            return false;
        }
        sub.is_completed = true;
        sub.completed_at = Some(now);
        self.updated_at = now;
        true
    }

    /// Refresh the advisory cached fields from a freshly computed result.
    pub fn apply_progress(&mut self, progress: &ProgressResult) {
        self.overall_progress = progress.overall;
        self.current_step_index = self
            .steps
            .iter()
            .position(|s| !s.is_completed)
            .unwrap_or(self.steps.len());
        self.status = if progress.total_weight > 0 && progress.completed_weight >= progress.total_weight
        {
            WorkflowStatus::Completed
        } else if self.steps.iter().any(|s| s.is_completed) {
            WorkflowStatus::InProgress
        } else {
            WorkflowStatus::NotStarted
        };
    }
}
