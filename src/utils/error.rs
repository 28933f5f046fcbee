use crate::core::capabilities::MlCapability;
use crate::core::license::{LicenseLevel, LicenseStatus, LicenseType};
use thiserror::Error;

/// Errors raised while loading or validating the access policy.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

impl Error {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Error::IoError(_) => "Check that the policy file exists and is readable",
            Error::ConfigValidationError { .. } => {
                "Check the policy file syntax against the documented layout"
            }
            Error::InvalidConfigValueError { .. } => "Correct the highlighted value and retry",
            Error::MissingConfigError { .. } => "Add the missing field to the policy file",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// The current license does not reach the level an operation needs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{required} license needed, current license is {license_type} ({status})")]
pub struct LicenseError {
    pub required: LicenseLevel,
    pub license_type: LicenseType,
    pub status: LicenseStatus,
}

/// One or more required capabilities are not granted to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Insufficient ML capabilities, missing: {}", join_capabilities(.missing))]
pub struct CapabilityError {
    pub missing: Vec<MlCapability>,
}

impl CapabilityError {
    pub fn new(missing: Vec<MlCapability>) -> Self {
        Self { missing }
    }

    pub fn is_missing(&self, capability: MlCapability) -> bool {
        self.missing.contains(&capability)
    }
}

fn join_capabilities(capabilities: &[MlCapability]) -> String {
    capabilities
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Outcome of a gated provider call that did not succeed.
///
/// Denials are raised before the wrapped service is touched. Errors raised by
/// the wrapped service come back untouched in `Delegate`.
#[derive(Error, Debug)]
pub enum ProviderError<E> {
    #[error(transparent)]
    License(#[from] LicenseError),

    #[error(transparent)]
    Capability(#[from] CapabilityError),

    #[error(transparent)]
    Delegate(E),
}

impl<E> ProviderError<E> {
    /// True when the call was refused before delegation.
    pub fn is_denied(&self) -> bool {
        !matches!(self, ProviderError::Delegate(_))
    }

    /// HTTP status the host should answer with, when the facade decided it.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ProviderError::License(_) | ProviderError::Capability(_) => Some(403),
            ProviderError::Delegate(_) => None,
        }
    }

    pub fn into_delegate(self) -> Option<E> {
        match self {
            ProviderError::Delegate(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Error, Debug)]
    #[error("boom")]
    struct Boom;

    #[test]
    fn test_capability_error_lists_missing_names() {
        let err = CapabilityError::new(vec![MlCapability::CanGetJobs, MlCapability::CanCreateJob]);
        assert_eq!(
            err.to_string(),
            "Insufficient ML capabilities, missing: canGetJobs, canCreateJob"
        );
        assert!(err.is_missing(MlCapability::CanGetJobs));
        assert!(!err.is_missing(MlCapability::CanDeleteJob));
    }

    #[test]
    fn test_license_error_message() {
        let err = LicenseError {
            required: LicenseLevel::Full,
            license_type: LicenseType::Basic,
            status: LicenseStatus::Active,
        };
        assert_eq!(
            err.to_string(),
            "Platinum, Enterprise or trial license needed, current license is basic (active)"
        );
    }

    #[test]
    fn test_provider_error_classification() {
        let denied: ProviderError<Boom> = CapabilityError::new(vec![MlCapability::CanGetJobs]).into();
        assert!(denied.is_denied());
        assert_eq!(denied.status_code(), Some(403));

        let delegated: ProviderError<Boom> = ProviderError::Delegate(Boom);
        assert!(!delegated.is_denied());
        assert_eq!(delegated.status_code(), None);
        assert_eq!(delegated.to_string(), "boom");
        assert!(delegated.into_delegate().is_some());
    }
}
