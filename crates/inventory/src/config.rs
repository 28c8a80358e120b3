//! Inventory configuration.

use serde::{Deserialize, Serialize};

use larder_core::{DomainError, DomainResult};

/// Capacity used when nothing else is configured.
pub const DEFAULT_CAPACITY: f64 = 100.0;

/// Environment variable overriding the inventory capacity.
pub const CAPACITY_ENV: &str = "LARDER_INVENTORY_CAPACITY";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// Upper bound on the summed weight of all items.
    pub capacity: f64,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl InventoryConfig {
    pub fn new(capacity: f64) -> Self {
        Self { capacity }
    }

    /// Capacity must be a finite, strictly positive number.
    pub fn validate(&self) -> DomainResult<()> {
        if !self.capacity.is_finite() || self.capacity <= 0.0 {
            return Err(DomainError::validation(format!(
                "capacity must be a finite positive number (got {})",
                self.capacity
            )));
        }
        Ok(())
    }

    /// Load from `LARDER_INVENTORY_CAPACITY`, falling back to the default.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(CAPACITY_ENV).ok().as_deref())
    }

    /// Interpret a raw environment value. Unset means default; anything that
    /// does not parse to a valid capacity is logged and replaced by the default.
    pub fn from_env_value(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };

        match Self::parse_capacity(raw) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(
                    value = raw,
                    error = %err,
                    "{CAPACITY_ENV} is invalid; using default capacity {DEFAULT_CAPACITY}"
                );
                Self::default()
            }
        }
    }

    fn parse_capacity(raw: &str) -> DomainResult<Self> {
        let capacity = raw
            .trim()
            .parse::<f64>()
            .map_err(|e| DomainError::validation(format!("{CAPACITY_ENV}: {e}")))?;
        let config = Self::new(capacity);
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_capacity_is_one_hundred() {
        assert_eq!(InventoryConfig::default().capacity, 100.0);
        assert!(InventoryConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_non_positive_and_non_finite() {
        for capacity in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            match InventoryConfig::new(capacity).validate() {
                Err(DomainError::Validation(_)) => {}
                other => panic!("expected validation error for {capacity}, got {other:?}"),
            }
        }
    }

    #[test]
    fn env_value_overrides_default() {
        assert_eq!(InventoryConfig::from_env_value(Some("250")).capacity, 250.0);
        assert_eq!(InventoryConfig::from_env_value(Some(" 42.5 ")).capacity, 42.5);
    }

    #[test]
    fn missing_or_bad_env_value_falls_back_to_default() {
        assert_eq!(InventoryConfig::from_env_value(None), InventoryConfig::default());
        assert_eq!(
            InventoryConfig::from_env_value(Some("heavy")),
            InventoryConfig::default()
        );
        assert_eq!(
            InventoryConfig::from_env_value(Some("-1")),
            InventoryConfig::default()
        );
    }

    #[test]
    fn deserializes_with_missing_fields_defaulted() {
        let config: InventoryConfig = serde_json::from_str(r#"{ "capacity": 12.0 }"#).unwrap();
        assert_eq!(config.capacity, 12.0);

        let config: InventoryConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, InventoryConfig::default());
    }
}
