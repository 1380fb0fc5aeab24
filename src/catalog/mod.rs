// Catalog module for the dashboard's static reference data.
// Provides the built-in sample and loading of an alternate data set from JSON.

pub mod sample;
pub mod types;

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{DashError, Result};

pub use sample::sample_catalog;
pub use types::{
    ApiGroup, ChecklistStatus, ComplianceSection, ConsentStage, Endpoint, EndpointStatus,
    RoadmapPhase, ScaFlow, ScaMethod, ScaStrength,
};

/// The four read-only data sets plus programme metadata.
///
/// Built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Standard and version label shown in the header.
    pub standard: String,
    pub go_live: NaiveDate,
    pub endpoints: Vec<Endpoint>,
    pub consent_stages: Vec<ConsentStage>,
    pub sca_methods: Vec<ScaMethod>,
    pub compliance: Vec<ComplianceSection>,
    #[serde(default)]
    pub roadmap: Vec<RoadmapPhase>,
}

impl Catalog {
    /// Load a catalog from a JSON file and validate it.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let catalog: Catalog = serde_json::from_str(&contents)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check the invariants the view state relies on.
    pub fn validate(&self) -> Result<()> {
        if self.consent_stages.is_empty() {
            return Err(DashError::Catalog(
                "at least one consent stage is required".to_string(),
            ));
        }

        let mut ids: Vec<u32> = self.endpoints.iter().map(|e| e.id).collect();
        ids.sort_unstable();
        if let Some(pair) = ids.windows(2).find(|w| w[0] == w[1]) {
            return Err(DashError::Catalog(format!(
                "duplicate endpoint id {}",
                pair[0]
            )));
        }

        Ok(())
    }

    /// Look up an endpoint by id.
    pub fn endpoint(&self, id: u32) -> Option<&Endpoint> {
        self.endpoints.iter().find(|e| e.id == id)
    }

    /// Number of consent stages (N).
    pub fn stage_count(&self) -> usize {
        self.consent_stages.len()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        sample_catalog()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_sample_shape() {
        let catalog = sample_catalog();
        assert_eq!(catalog.endpoints.len(), 13);
        assert_eq!(catalog.stage_count(), 6);
        assert_eq!(catalog.sca_methods.len(), 3);
        assert_eq!(catalog.compliance.len(), 4);
        assert_eq!(catalog.roadmap.len(), 5);
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_endpoint_lookup() {
        let catalog = sample_catalog();
        assert_eq!(catalog.endpoint(8).unwrap().name, "POST /consents");
        assert!(catalog.endpoint(404).is_none());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("catalog.json");

        let mut catalog = sample_catalog();
        catalog.endpoints.truncate(2);
        fs::write(&path, serde_json::to_string_pretty(&catalog).unwrap()).unwrap();

        let loaded = Catalog::load(&path).unwrap();
        assert_eq!(loaded, catalog);
    }

    #[test]
    fn test_load_rejects_empty_stages() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("catalog.json");

        let mut catalog = sample_catalog();
        catalog.consent_stages.clear();
        fs::write(&path, serde_json::to_string(&catalog).unwrap()).unwrap();

        let err = Catalog::load(&path).unwrap_err();
        assert!(matches!(err, DashError::Catalog(_)));
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let mut catalog = sample_catalog();
        catalog.endpoints[1].id = catalog.endpoints[0].id;
        assert!(matches!(catalog.validate(), Err(DashError::Catalog(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = Catalog::load(&temp_dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, DashError::Io(_)));
    }
}
