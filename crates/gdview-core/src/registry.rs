//! Environment/bucket registry.
//!
//! Maps an environment name to its bucket roles (`ack`, `psr`, ...) and each
//! role to a concrete bucket id. Loaded once at startup from a JSON file and
//! immutable afterwards, so it can be shared across sessions without locking.
//!
//! Registry file format:
//!
//! ```json
//! {
//!   "QA":  { "ack": "gdg0-q-adapter-global-disbursements",
//!            "psr": "gdg0-q-bulk-global-disbursements" },
//!   "IST": { "ack": "gdg0-u-adapter-global-disbursements",
//!            "psr": "gdg0-u-bulk-global-disbursements" }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::AppError;
use crate::models::BucketOption;

type RoleMap = BTreeMap<String, String>;

/// Immutable environment -> role -> bucket-id mapping.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct Registry {
    environments: BTreeMap<String, RoleMap>,
}

impl Registry {
    /// Load the registry from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read registry file {}: {}", path.display(), e))
        })?;
        let registry: Registry = serde_json::from_str(&contents).map_err(|e| {
            AppError::Config(format!("Invalid registry file {}: {}", path.display(), e))
        })?;

        if registry.environments.is_empty() {
            return Err(AppError::Config(format!(
                "Registry file {} defines no environments",
                path.display()
            )));
        }
        for (env, roles) in &registry.environments {
            if roles.is_empty() {
                return Err(AppError::Config(format!(
                    "Environment '{}' defines no bucket roles",
                    env
                )));
            }
        }

        tracing::info!(
            environments = registry.environments.len(),
            "Bucket registry loaded"
        );
        Ok(registry)
    }

    /// Build a registry directly from a mapping (tests, embedded config).
    pub fn from_map(environments: BTreeMap<String, RoleMap>) -> Self {
        Registry { environments }
    }

    /// Environment names, sorted.
    pub fn environments(&self) -> Vec<String> {
        self.environments.keys().cloned().collect()
    }

    /// The (role, bucket-id) dropdown options for an environment.
    /// Unknown environments yield an empty option set.
    pub fn bucket_options(&self, environment: &str) -> Vec<BucketOption> {
        self.environments
            .get(environment)
            .map(|roles| {
                roles
                    .iter()
                    .map(|(role, bucket)| BucketOption {
                        label: role.clone(),
                        value: bucket.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Resolve the concrete bucket id for an environment and role.
    pub fn resolve(&self, environment: &str, role: &str) -> Option<&str> {
        self.environments
            .get(environment)
            .and_then(|roles| roles.get(role))
            .map(String::as_str)
    }

    /// Whether the bucket id belongs to any environment. Used to reject
    /// arbitrary bucket names submitted under direct resolution.
    pub fn contains_bucket(&self, bucket_id: &str) -> bool {
        self.environments
            .values()
            .any(|roles| roles.values().any(|b| b == bucket_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample() -> Registry {
        let mut qa = RoleMap::new();
        qa.insert("ack".into(), "gdg0-q-adapter-global-disbursements".into());
        qa.insert("psr".into(), "gdg0-q-bulk-global-disbursements".into());
        let mut ist = RoleMap::new();
        ist.insert("ack".into(), "gdg0-u-adapter-global-disbursements".into());
        ist.insert("psr".into(), "gdg0-u-bulk-global-disbursements".into());

        let mut envs = BTreeMap::new();
        envs.insert("QA".to_string(), qa);
        envs.insert("IST".to_string(), ist);
        Registry::from_map(envs)
    }

    #[test]
    fn options_are_role_id_pairs_for_every_environment() {
        let registry = sample();
        for env in registry.environments() {
            let options = registry.bucket_options(&env);
            assert_eq!(options.len(), 2);
            for option in &options {
                assert_eq!(
                    registry.resolve(&env, &option.label),
                    Some(option.value.as_str())
                );
            }
        }
    }

    #[test]
    fn unknown_environment_yields_empty_options() {
        assert!(sample().bucket_options("PROD").is_empty());
    }

    #[test]
    fn resolve_misses_return_none() {
        let registry = sample();
        assert!(registry.resolve("QA", "eod").is_none());
        assert!(registry.resolve("UAT", "ack").is_none());
    }

    #[test]
    fn contains_bucket_checks_all_environments() {
        let registry = sample();
        assert!(registry.contains_bucket("gdg0-u-bulk-global-disbursements"));
        assert!(!registry.contains_bucket("some-other-bucket"));
    }

    #[test]
    fn loads_registry_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"QA": {{"ack": "bucket-a", "psr": "bucket-p"}}}}"#
        )
        .unwrap();

        let registry = Registry::from_file(file.path()).unwrap();
        assert_eq!(registry.environments(), vec!["QA".to_string()]);
        assert_eq!(registry.resolve("QA", "ack"), Some("bucket-a"));
    }

    #[test]
    fn rejects_empty_registry_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{}}").unwrap();
        assert!(Registry::from_file(file.path()).is_err());
    }
}
