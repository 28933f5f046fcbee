use crate::core::authorization::CapabilityCheck;
use crate::core::capabilities::GatedOperation;
use crate::core::license::LicenseCheck;
use crate::utils::error::ProviderError;
use std::sync::Arc;

/// Per-request gate evaluated before any provider delegation.
///
/// The license is checked first and synchronously; the capability check only
/// runs once the license passed.
pub struct AccessGuard {
    license: Arc<dyn LicenseCheck>,
    capabilities: Box<dyn CapabilityCheck>,
}

impl AccessGuard {
    pub fn new(license: Arc<dyn LicenseCheck>, capabilities: Box<dyn CapabilityCheck>) -> Self {
        Self {
            license,
            capabilities,
        }
    }

    pub async fn authorize<E>(&self, operation: GatedOperation) -> Result<(), ProviderError<E>> {
        if let Err(e) = self.license.check() {
            tracing::warn!(operation = %operation, error = %e, "ML operation denied by license");
            return Err(e.into());
        }

        let required = operation.required_capabilities();
        if let Err(e) = self.capabilities.has_capabilities(required).await {
            tracing::warn!(operation = %operation, error = %e, "ML operation denied by capabilities");
            return Err(e.into());
        }

        tracing::debug!(operation = %operation, "ML operation authorized");
        Ok(())
    }
}

impl std::fmt::Debug for AccessGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessGuard").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::capabilities::MlCapability;
    use crate::core::license::{LicenseLevel, LicenseStatus, LicenseType};
    use crate::utils::error::{CapabilityError, LicenseError};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(thiserror::Error, Debug)]
    #[error("never")]
    struct Never;

    #[derive(Default)]
    struct RecordingCheck {
        calls: Arc<AtomicUsize>,
        seen: Arc<Mutex<Vec<MlCapability>>>,
        deny: bool,
    }

    #[async_trait]
    impl CapabilityCheck for RecordingCheck {
        async fn has_capabilities(&self, required: &[MlCapability]) -> Result<(), CapabilityError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen.lock().unwrap().extend_from_slice(required);
            if self.deny {
                Err(CapabilityError::new(required.to_vec()))
            } else {
                Ok(())
            }
        }
    }

    fn passing_license() -> Arc<dyn LicenseCheck> {
        Arc::new(|| -> Result<(), LicenseError> { Ok(()) })
    }

    fn failing_license() -> Arc<dyn LicenseCheck> {
        Arc::new(|| -> Result<(), LicenseError> {
            Err(LicenseError {
                required: LicenseLevel::Full,
                license_type: LicenseType::Gold,
                status: LicenseStatus::Active,
            })
        })
    }

    #[test]
    fn test_license_failure_skips_capability_check() {
        let check = RecordingCheck::default();
        let calls = check.calls.clone();
        let guard = AccessGuard::new(failing_license(), Box::new(check));

        let result = tokio_test::block_on(guard.authorize::<Never>(GatedOperation::ListModules));
        assert!(matches!(result, Err(ProviderError::License(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_capability_check_receives_operation_table() {
        let check = RecordingCheck::default();
        let seen = check.seen.clone();
        let guard = AccessGuard::new(passing_license(), Box::new(check));

        tokio_test::block_on(guard.authorize::<Never>(GatedOperation::SetupModuleItems)).unwrap();
        assert_eq!(*seen.lock().unwrap(), vec![MlCapability::CanCreateJob]);
    }

    #[test]
    fn test_capability_denial_is_reported() {
        let check = RecordingCheck {
            deny: true,
            ..Default::default()
        };
        let guard = AccessGuard::new(passing_license(), Box::new(check));

        match tokio_test::block_on(guard.authorize::<Never>(GatedOperation::GetModule)) {
            Err(ProviderError::Capability(e)) => {
                assert_eq!(e.missing, vec![MlCapability::CanGetJobs]);
                assert!(e.to_string().ends_with("missing: canGetJobs"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
