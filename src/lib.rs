pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::PolicyConfig;
pub use core::authorization::{
    AuthorizationContext, CapabilityBinder, CapabilityCheck, RoleCapabilityResolver, RolePolicy,
};
pub use core::capabilities::{GatedOperation, MlCapability};
pub use core::guard::AccessGuard;
pub use core::license::{
    FullLicenseCheck, LicenseCheck, LicenseHandle, LicenseLevel, LicenseStatus, LicenseType,
    MinimumLicenseCheck, MlLicense,
};
pub use core::modules::{GatedModules, ModulesProvider};
pub use core::results::{GatedResults, ResultsServiceProvider};
pub use core::shared_services::{SharedServices, SharedServicesChecks};
pub use domain::ports::{DataRecognizer, ResultsService};
pub use utils::error::{CapabilityError, Error, LicenseError, ProviderError, Result};
