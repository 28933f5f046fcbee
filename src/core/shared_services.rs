use crate::config::toml_config::PolicyConfig;
use crate::core::authorization::{AuthorizationContext, CapabilityBinder, RoleCapabilityResolver};
use crate::core::guard::AccessGuard;
use crate::core::license::{FullLicenseCheck, LicenseCheck, LicenseHandle};
use crate::core::modules::ModulesProvider;
use crate::core::results::ResultsServiceProvider;
use crate::domain::ports::{DataRecognizer, ResultsService};
use crate::utils::error::Result;
use std::sync::Arc;

/// The two checks every gated operation runs, injected by the host.
#[derive(Clone)]
pub struct SharedServicesChecks {
    license: Arc<dyn LicenseCheck>,
    capabilities: Arc<dyn CapabilityBinder>,
}

impl SharedServicesChecks {
    pub fn new<L, B>(license: L, capabilities: B) -> Self
    where
        L: LicenseCheck + 'static,
        B: CapabilityBinder + 'static,
    {
        Self {
            license: Arc::new(license),
            capabilities: Arc::new(capabilities),
        }
    }

    /// Full-license check over the policy's `[license]` and role based
    /// capabilities from its `[roles]`.
    pub fn from_policy(policy: &PolicyConfig) -> Result<Self> {
        let license = LicenseHandle::new(policy.license()?);
        Ok(Self::from_policy_with_license(policy, license))
    }

    /// Same as [`from_policy`](Self::from_policy) but reading a license the
    /// host keeps up to date.
    pub fn from_policy_with_license(policy: &PolicyConfig, license: LicenseHandle) -> Self {
        Self::new(
            FullLicenseCheck::new(license),
            RoleCapabilityResolver::new(policy.role_policy()),
        )
    }

    pub fn guard_for(&self, context: &AuthorizationContext) -> AccessGuard {
        AccessGuard::new(self.license.clone(), self.capabilities.bind(context))
    }
}

impl std::fmt::Debug for SharedServicesChecks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedServicesChecks").finish_non_exhaustive()
    }
}

/// Entry point handed to other plugins: both gated providers sharing one set
/// of checks.
pub struct SharedServices<C, S, R, Q> {
    pub modules: ModulesProvider<C, S, R>,
    pub results: ResultsServiceProvider<C, Q>,
}

impl<C, S, R, Q> SharedServices<C, S, R, Q>
where
    R: DataRecognizer,
    Q: ResultsService,
{
    pub fn new<FR, FQ>(checks: SharedServicesChecks, recognizer_factory: FR, results_factory: FQ) -> Self
    where
        FR: Fn(C, S) -> R + Send + Sync + 'static,
        FQ: Fn(C) -> Q + Send + Sync + 'static,
    {
        tracing::debug!("Building ML shared service providers");
        Self {
            modules: ModulesProvider::new(checks.clone(), recognizer_factory),
            results: ResultsServiceProvider::new(checks, results_factory),
        }
    }
}

impl<C, S, R, Q> Clone for SharedServices<C, S, R, Q> {
    fn clone(&self) -> Self {
        Self {
            modules: self.modules.clone(),
            results: self.results.clone(),
        }
    }
}
