//! Project snapshot types consumed by the progress engine.
//!
//! The persistence collaborator owns the real project records; the engine
//! only sees an in-memory snapshot of the fields it needs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::workflow::WorkflowInstance;
use crate::domain::error::WorkflowError;

/// Attributes that drive conditional step inclusion at read time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectAttributes {
    /// Project type key (e.g. `roof_replacement`). Absent or unrecognized
    /// types exclude every project-type-gated step.
    #[serde(default)]
    pub project_type: Option<String>,
    /// Whether the project is funded through an insurance claim.
    #[serde(default)]
    pub is_insurance_claim: bool,
}

/// Read-side snapshot of a project, as handed over by the storage layer.
///
/// A missing `workflow` is a normal state for a freshly created project,
/// not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    #[serde(default)]
    pub project_type: Option<String>,
    #[serde(default)]
    pub is_insurance_claim: bool,
    #[serde(default)]
    pub workflow: Option<WorkflowInstance>,
}

impl Project {
    /// The attribute view used by the inclusion resolver.
    pub fn attributes(&self) -> ProjectAttributes {
        ProjectAttributes {
            project_type: self.project_type.clone(),
            is_insurance_claim: self.is_insurance_claim,
        }
    }
}

/// Attributes supplied by the workflow-creation collaborator.
///
/// Unlike the read-side snapshot these arrive before any defaults have been
/// applied, so the claim flag may genuinely be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProjectAttributes {
    #[serde(default)]
    pub project_type: Option<String>,
    #[serde(default)]
    pub is_insurance_claim: Option<bool>,
}

impl NewProjectAttributes {
    /// Validate that everything the template generator needs is present.
    pub fn validated(&self) -> Result<ProjectAttributes, WorkflowError> {
        let is_insurance_claim = self.is_insurance_claim.ok_or_else(|| {
            WorkflowError::InvalidProjectAttributes("is_insurance_claim is required".to_string())
        })?;
        Ok(ProjectAttributes {
            project_type: self.project_type.clone(),
            is_insurance_claim,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validated_requires_claim_flag() {
        let attrs = NewProjectAttributes {
            project_type: Some("roof_replacement".to_string()),
            is_insurance_claim: None,
        };
        let err = attrs.validated().unwrap_err();
        assert!(matches!(err, WorkflowError::InvalidProjectAttributes(_)));
    }

    #[test]
    fn validated_passes_through_fields() {
        let attrs = NewProjectAttributes {
            project_type: None,
            is_insurance_claim: Some(true),
        };
        let validated = attrs.validated().unwrap();
        assert!(validated.is_insurance_claim);
        assert_eq!(validated.project_type, None);
    }
}
