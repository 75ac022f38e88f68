use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::catalog::WorkflowCatalog;
use crate::domain::models::phase::Phase;

/// Catalog validation error types
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog must contain exactly 6 phase sections, found {0}")]
    WrongPhaseCount(usize),

    #[error("Phase section {position} is {found}, expected {expected}")]
    PhaseOrder {
        position: usize,
        found: Phase,
        expected: Phase,
    },

    #[error("Duplicate step id: {0}")]
    DuplicateStepId(String),

    #[error("Step {0} has zero weight. Weights must be >= 1")]
    ZeroWeight(String),

    #[error("Step {step_id} has {count} sub-tasks. Must be between 1 and 10")]
    SubTaskCount { step_id: String, count: usize },

    #[error("Sub-task id {found} under step {step_id} must be {expected}")]
    SubTaskIdFormat {
        step_id: String,
        found: String,
        expected: String,
    },

    #[error("Catalog validation failed: {0}")]
    ValidationFailed(String),
}

/// Catalog loader with hierarchical merging
pub struct CatalogLoader;

impl CatalogLoader {
    /// The built-in catalog, validated.
    ///
    /// Validation of the static tables is a startup assertion; it cannot
    /// fail unless the tables themselves are edited inconsistently.
    pub fn standard() -> Result<WorkflowCatalog> {
        let catalog = WorkflowCatalog::standard();
        Self::validate(&catalog).context("Built-in catalog failed validation")?;
        Ok(catalog)
    }

    /// Load the catalog with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Built-in tables (Serialized)
    /// 2. .sitework/catalog.yaml (project catalog override)
    /// 3. .sitework/local.yaml (local overrides, optional)
    /// 4. Environment variables (SITEWORK_* prefix, highest priority)
    pub fn load() -> Result<WorkflowCatalog> {
        let catalog: WorkflowCatalog = Figment::new()
            .merge(Serialized::defaults(WorkflowCatalog::standard()))
            .merge(Yaml::file(".sitework/catalog.yaml"))
            .merge(Yaml::file(".sitework/local.yaml"))
            .merge(Env::prefixed("SITEWORK_").split("__"))
            .extract()
            .context("Failed to extract catalog from figment")?;

        Self::validate(&catalog)?;
        Ok(catalog)
    }

    /// Load the catalog from a specific file
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<WorkflowCatalog> {
        let catalog: WorkflowCatalog = Figment::new()
            .merge(Serialized::defaults(WorkflowCatalog::standard()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load catalog from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&catalog)?;
        Ok(catalog)
    }

    /// Validate catalog invariants after loading
    pub fn validate(catalog: &WorkflowCatalog) -> Result<(), CatalogError> {
        if catalog.phases.len() != Phase::ALL.len() {
            return Err(CatalogError::WrongPhaseCount(catalog.phases.len()));
        }

        for (position, (section, expected)) in
            catalog.phases.iter().zip(Phase::ALL.iter()).enumerate()
        {
            if section.phase != *expected {
                return Err(CatalogError::PhaseOrder {
                    position,
                    found: section.phase,
                    expected: *expected,
                });
            }
        }

        let mut seen = std::collections::HashSet::new();
        for section in &catalog.phases {
            for step in &section.steps {
                if !seen.insert(step.id.clone()) {
                    return Err(CatalogError::DuplicateStepId(step.id.clone()));
                }

                if step.weight == 0 {
                    return Err(CatalogError::ZeroWeight(step.id.clone()));
                }

                if step.phase != section.phase {
                    return Err(CatalogError::ValidationFailed(format!(
                        "Step {} declares phase {} but sits in section {}",
                        step.id, step.phase, section.phase
                    )));
                }

                if !(1..=10).contains(&step.sub_tasks.len()) {
                    return Err(CatalogError::SubTaskCount {
                        step_id: step.id.clone(),
                        count: step.sub_tasks.len(),
                    });
                }

                for (i, sub) in step.sub_tasks.iter().enumerate() {
                    let expected = format!("{}_{}", step.id, i + 1);
                    if sub.id != expected {
                        return Err(CatalogError::SubTaskIdFormat {
                            step_id: step.id.clone(),
                            found: sub.id.clone(),
                            expected,
                        });
                    }
                }
            }
        }

        Ok(())
    }
}
