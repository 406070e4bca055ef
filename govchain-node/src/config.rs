use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use govchain_common::{GovError, Result, User, UserRole};
use govchain_engine::GovernanceConfig;

pub const DEFAULT_LOG_FILTER: &str = "info";

/// On-disk settings of the `govchain` binary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeConfig {
    /// Identity the session starts with.
    #[serde(default = "default_user")]
    pub user: User,

    /// Load the demo proposals on start.
    #[serde(default = "default_true")]
    pub seed_demo_data: bool,

    #[serde(flatten)]
    pub governance: GovernanceConfig,

    /// `tracing_subscriber::EnvFilter` directive, overridden by `RUST_LOG`.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_user() -> User {
    User::new("1", "0x1234567890abcdef", UserRole::Voter, 1500)
}

fn default_true() -> bool {
    true
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            user: default_user(),
            seed_demo_data: true,
            governance: GovernanceConfig::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl NodeConfig {
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        let parsed = serde_json::from_str::<NodeConfig>(&data)?;
        parsed.validate()?;
        Ok(parsed)
    }

    pub fn validate(&self) -> Result<()> {
        if self.user.address.trim().is_empty() {
            return Err(GovError::Config("user.address must not be empty".to_string()));
        }
        if self.log_filter.trim().is_empty() {
            return Err(GovError::Config("logFilter must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_fills_defaults() {
        let cfg: NodeConfig = serde_json::from_str(r#"{ "enforceEndDate": true }"#).unwrap();
        assert!(cfg.governance.enforce_end_date);
        assert!(cfg.seed_demo_data);
        assert_eq!(cfg.user.address, "0x1234567890abcdef");
        assert_eq!(cfg.user.voting_power, 1500);
        assert_eq!(cfg.log_filter, "info");
    }

    #[test]
    fn test_keys_are_camel_case_throughout() {
        let json = serde_json::to_value(NodeConfig::default()).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();

        for key in ["user", "seedDemoData", "enforceEndDate", "logFilter"] {
            assert!(keys.contains(&key), "missing key {}", key);
        }
        assert!(keys.iter().all(|k| !k.contains('_')));
        assert_eq!(json["user"]["votingPower"], 1500);
    }

    #[test]
    fn test_validate_rejects_blank_address() {
        let mut cfg = NodeConfig::default();
        cfg.user.address = " ".to_string();
        assert!(matches!(cfg.validate(), Err(GovError::Config(_))));
    }
}
