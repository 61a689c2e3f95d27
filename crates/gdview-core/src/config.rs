//! Configuration module
//!
//! Environment-variable configuration for the dashboard service: server
//! settings, registry location, storage backend selection, and the bucket
//! resolution policy.

use std::env;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Storage backend types
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    S3,
    Local,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "s3" => Ok(StorageBackend::S3),
            "local" => Ok(StorageBackend::Local),
            _ => Err(anyhow::anyhow!("Invalid storage backend: {}", s)),
        }
    }
}

impl Display for StorageBackend {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            StorageBackend::S3 => write!(f, "s3"),
            StorageBackend::Local => write!(f, "local"),
        }
    }
}

/// How the search endpoint resolves the target bucket.
///
/// The original tool shipped two inconsistent variants; this makes the
/// choice an explicit deployment setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketResolution {
    /// Use the bucket dropdown's submitted value verbatim (must still be a
    /// bucket known to the registry).
    Direct,
    /// Ignore the submitted bucket and derive it from the environment plus
    /// the document type's bucket role.
    ByRole,
}

impl FromStr for BucketResolution {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "direct" => Ok(BucketResolution::Direct),
            "by-role" | "by_role" => Ok(BucketResolution::ByRole),
            _ => Err(anyhow::anyhow!("Invalid bucket resolution policy: {}", s)),
        }
    }
}

/// Service configuration, loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server_port: u16,
    pub environment: String,
    pub cors_origins: Vec<String>,
    pub registry_path: String,
    pub storage_backend: StorageBackend,
    pub bucket_resolution: BucketResolution,
    // S3 backend settings
    pub s3_region: Option<String>,
    pub s3_endpoint: Option<String>,
    // Local backend settings
    pub local_storage_path: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins_str = env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string());
        let is_production =
            environment.to_lowercase() == "production" || environment.to_lowercase() == "prod";
        if is_production && cors_origins_str.trim() == "*" {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }
        let cors_origins: Vec<String> = cors_origins_str
            .split(',')
            .map(|s| s.trim().to_string())
            .collect();

        let registry_path = env::var("GDVIEW_REGISTRY_PATH")
            .map_err(|_| anyhow::anyhow!("GDVIEW_REGISTRY_PATH must be set"))?;

        let storage_backend = env::var("STORAGE_BACKEND")
            .unwrap_or_else(|_| "s3".to_string())
            .parse::<StorageBackend>()?;

        let bucket_resolution = env::var("BUCKET_RESOLUTION")
            .unwrap_or_else(|_| "direct".to_string())
            .parse::<BucketResolution>()?;

        Ok(AppConfig {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| "4000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            environment,
            cors_origins,
            registry_path,
            storage_backend,
            bucket_resolution,
            s3_region: env::var("S3_REGION")
                .or_else(|_| env::var("AWS_REGION"))
                .ok(),
            s3_endpoint: env::var("S3_ENDPOINT").ok(),
            local_storage_path: env::var("LOCAL_STORAGE_PATH").ok(),
        })
    }

    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }
}
