use crate::utils::error::LicenseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, RwLock};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenseType {
    Basic,
    Standard,
    Gold,
    Platinum,
    Enterprise,
    Trial,
}

impl fmt::Display for LicenseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LicenseType::Basic => "basic",
            LicenseType::Standard => "standard",
            LicenseType::Gold => "gold",
            LicenseType::Platinum => "platinum",
            LicenseType::Enterprise => "enterprise",
            LicenseType::Trial => "trial",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenseStatus {
    Active,
    Expired,
    Invalid,
}

impl fmt::Display for LicenseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LicenseStatus::Active => "active",
            LicenseStatus::Expired => "expired",
            LicenseStatus::Invalid => "invalid",
        };
        f.write_str(name)
    }
}

/// License tier an operation demands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LicenseLevel {
    /// Any active license.
    Minimum,
    /// Platinum, enterprise or trial.
    Full,
}

impl fmt::Display for LicenseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LicenseLevel::Minimum => f.write_str("An active"),
            LicenseLevel::Full => f.write_str("Platinum, Enterprise or trial"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MlLicense {
    #[serde(rename = "type")]
    pub license_type: LicenseType,
    pub status: LicenseStatus,
}

impl MlLicense {
    pub fn new(license_type: LicenseType, status: LicenseStatus) -> Self {
        Self {
            license_type,
            status,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == LicenseStatus::Active
    }

    pub fn is_minimum_license(&self) -> bool {
        self.is_active()
    }

    pub fn is_full_license(&self) -> bool {
        self.is_active()
            && matches!(
                self.license_type,
                LicenseType::Platinum | LicenseType::Enterprise | LicenseType::Trial
            )
    }

    pub fn satisfies(&self, level: LicenseLevel) -> bool {
        match level {
            LicenseLevel::Minimum => self.is_minimum_license(),
            LicenseLevel::Full => self.is_full_license(),
        }
    }

    fn require(&self, level: LicenseLevel) -> Result<(), LicenseError> {
        if self.satisfies(level) {
            Ok(())
        } else {
            Err(LicenseError {
                required: level,
                license_type: self.license_type,
                status: self.status,
            })
        }
    }
}

/// Synchronous license-tier check run before every gated operation.
pub trait LicenseCheck: Send + Sync {
    fn check(&self) -> Result<(), LicenseError>;
}

impl<F> LicenseCheck for F
where
    F: Fn() -> Result<(), LicenseError> + Send + Sync,
{
    fn check(&self) -> Result<(), LicenseError> {
        self()
    }
}

/// Shared, updatable view of the cluster license.
///
/// The host refreshes it when the license changes; checks always read the
/// latest snapshot.
#[derive(Debug, Clone)]
pub struct LicenseHandle {
    inner: Arc<RwLock<MlLicense>>,
}

impl LicenseHandle {
    pub fn new(license: MlLicense) -> Self {
        Self {
            inner: Arc::new(RwLock::new(license)),
        }
    }

    pub fn current(&self) -> MlLicense {
        // A poisoned lock still holds the last written snapshot.
        match self.inner.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    pub fn update(&self, license: MlLicense) {
        match self.inner.write() {
            Ok(mut guard) => *guard = license,
            Err(poisoned) => *poisoned.into_inner() = license,
        }
        tracing::info!(
            license_type = %license.license_type,
            status = %license.status,
            "ML license updated"
        );
    }
}

#[derive(Debug, Clone)]
pub struct FullLicenseCheck {
    license: LicenseHandle,
}

impl FullLicenseCheck {
    pub fn new(license: LicenseHandle) -> Self {
        Self { license }
    }
}

impl LicenseCheck for FullLicenseCheck {
    fn check(&self) -> Result<(), LicenseError> {
        self.license.current().require(LicenseLevel::Full)
    }
}

#[derive(Debug, Clone)]
pub struct MinimumLicenseCheck {
    license: LicenseHandle,
}

impl MinimumLicenseCheck {
    pub fn new(license: LicenseHandle) -> Self {
        Self { license }
    }
}

impl LicenseCheck for MinimumLicenseCheck {
    fn check(&self) -> Result<(), LicenseError> {
        self.license.current().require(LicenseLevel::Minimum)
    }
}
