//! Pipeline configuration.
//!
//! Everything an operator may need to touch lives in one struct, loadable
//! from TOML and overridable from the CLI.

use std::collections::BTreeSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Statuses treated as "active" by default. The full status vocabulary in
/// the source data is: ASIGNADO, ARCHIVADO, EN VISTA, PASE, CERRADO,
/// EN DESPACHO, ANULADO, INICIAL, MIGRACION, PRINCIPAL, RESUELTO,
/// EN TRAMITE, RADICADO, REMITIDO POR INCOMPETENCIA, PREARCHIVO.
///
/// Which labels truly count as active is still under review, which is why
/// this is a config default and not a constant inside the aggregator.
pub const DEFAULT_ACTIVE_STATUSES: [&str; 2] = ["INICIAL", "EN VISTA"];

/// Column holding the case status label in the raw dataset.
pub const DEFAULT_STATUS_COLUMN: &str = "est_descr";
/// Column holding the owning court id in the raw dataset.
pub const DEFAULT_ENTITY_COLUMN: &str = "org_cod_pri";

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SorteoConfig {
    /// Smoothing parameter: strictly positive. Larger values flatten the
    /// distribution toward uniform; small values favor low-load courts
    /// more aggressively.
    pub alfa: f64,
    /// Status labels counted as active case load.
    pub active_statuses: BTreeSet<String>,
    /// Name of the status column in the input dataset.
    pub status_column: String,
    /// Name of the court-id column in the input dataset.
    pub entity_column: String,
    /// Clamp the sampler's interpolated index into the table range.
    /// Turning this off makes out-of-range draws fail instead.
    pub clamp: bool,
    /// Fixed RNG seed for reproducible draws. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SorteoConfig {
    fn default() -> Self {
        Self {
            alfa: 1.0,
            active_statuses: DEFAULT_ACTIVE_STATUSES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            status_column: DEFAULT_STATUS_COLUMN.to_string(),
            entity_column: DEFAULT_ENTITY_COLUMN.to_string(),
            clamp: true,
            seed: None,
        }
    }
}

impl SorteoConfig {
    /// Read a TOML config file. Missing keys fall back to defaults.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: Self = toml::from_str(&text).map_err(|source| Error::Config {
            path: path.display().to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the pipeline stages rely on.
    pub fn validate(&self) -> Result<()> {
        if !self.alfa.is_finite() || self.alfa <= 0.0 {
            return Err(Error::NonPositiveAlfa { alfa: self.alfa });
        }
        if self.active_statuses.is_empty() {
            return Err(Error::NoActiveStatuses);
        }
        if self.status_column.is_empty() || self.entity_column.is_empty() {
            return Err(Error::InvalidConfig {
                reason: "column names must be non-empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SorteoConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.active_statuses.contains("INICIAL"));
        assert!(config.active_statuses.contains("EN VISTA"));
        assert_eq!(config.active_statuses.len(), 2);
        assert!(config.clamp);
    }

    #[test]
    fn rejects_non_positive_alfa() {
        let config = SorteoConfig {
            alfa: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::NonPositiveAlfa { .. })
        ));

        let config = SorteoConfig {
            alfa: -2.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = SorteoConfig {
            alfa: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_empty_status_set() {
        let config = SorteoConfig {
            active_statuses: BTreeSet::new(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::NoActiveStatuses)));
    }

    #[test]
    fn parses_partial_toml() {
        let config: SorteoConfig =
            toml::from_str("alfa = 0.5\nactive_statuses = [\"INICIAL\"]").unwrap();
        assert_eq!(config.alfa, 0.5);
        assert_eq!(config.active_statuses.len(), 1);
        // untouched keys keep their defaults
        assert_eq!(config.status_column, DEFAULT_STATUS_COLUMN);
        assert_eq!(config.entity_column, DEFAULT_ENTITY_COLUMN);
    }
}
