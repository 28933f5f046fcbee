use crate::core::authorization::RolePolicy;
use crate::core::capabilities::MlCapability;
use crate::core::license::MlLicense;
use crate::utils::error::{Error, Result};
use crate::utils::validation::{validate_required_field, validate_role_name, Validate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use std::sync::OnceLock;

/// Access policy for the ML providers.
///
/// ```toml
/// [license]
/// type = "platinum"
/// status = "active"
///
/// [security]
/// enabled = true
///
/// [roles]
/// machine_learning_user = ["canGetJobs", "canGetDatafeeds"]
/// machine_learning_admin = ["canGetJobs", "canCreateJob"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolicyConfig {
    pub license: Option<MlLicense>,
    pub security: Option<SecurityConfig>,
    #[serde(default)]
    pub roles: HashMap<String, Vec<MlCapability>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub enabled: bool,
}

impl PolicyConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(Error::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| Error::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ML_LICENSE_TYPE})
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<regex::Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            regex::Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    /// Security defaults to enabled when the section is absent.
    pub fn security_enabled(&self) -> bool {
        self.security.as_ref().map(|s| s.enabled).unwrap_or(true)
    }

    pub fn license(&self) -> Result<MlLicense> {
        validate_required_field("license", &self.license).copied()
    }

    pub fn role_policy(&self) -> RolePolicy {
        RolePolicy {
            security_enabled: self.security_enabled(),
            roles: self
                .roles
                .iter()
                .map(|(role, caps)| (role.clone(), caps.iter().copied().collect::<BTreeSet<_>>()))
                .collect(),
        }
    }

    pub fn validate_config(&self) -> Result<()> {
        for (role, capabilities) in &self.roles {
            validate_role_name("roles", role)?;
            if capabilities.is_empty() {
                tracing::warn!(role = %role, "Role grants no ML capabilities");
            }
        }

        if self.security_enabled() && self.roles.is_empty() {
            return Err(Error::ConfigValidationError {
                field: "roles".to_string(),
                message: "security is enabled but no role grants any capability".to_string(),
            });
        }

        Ok(())
    }
}

impl Validate for PolicyConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
