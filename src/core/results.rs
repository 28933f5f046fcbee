use crate::core::authorization::AuthorizationContext;
use crate::core::capabilities::GatedOperation;
use crate::core::guard::AccessGuard;
use crate::core::shared_services::SharedServicesChecks;
use crate::domain::model::{AnomaliesTableData, AnomaliesTableQuery};
use crate::domain::ports::ResultsService;
use crate::utils::error::ProviderError;
use std::sync::Arc;

/// Hands out gated views of a [`ResultsService`] built from a scoped
/// cluster client `C`.
pub struct ResultsServiceProvider<C, S> {
    checks: SharedServicesChecks,
    factory: Arc<dyn Fn(C) -> S + Send + Sync>,
}

impl<C, S> Clone for ResultsServiceProvider<C, S> {
    fn clone(&self) -> Self {
        Self {
            checks: self.checks.clone(),
            factory: self.factory.clone(),
        }
    }
}

impl<C, S: ResultsService> ResultsServiceProvider<C, S> {
    pub fn new<F>(checks: SharedServicesChecks, factory: F) -> Self
    where
        F: Fn(C) -> S + Send + Sync + 'static,
    {
        Self {
            checks,
            factory: Arc::new(factory),
        }
    }

    pub fn results_service_provider(
        &self,
        cluster_client: C,
        context: &AuthorizationContext,
    ) -> GatedResults<S> {
        GatedResults::new(self.checks.guard_for(context), (self.factory)(cluster_client))
    }
}

#[derive(Debug)]
pub struct GatedResults<S> {
    guard: AccessGuard,
    service: S,
}

impl<S: ResultsService> GatedResults<S> {
    pub fn new(guard: AccessGuard, service: S) -> Self {
        Self { guard, service }
    }

    pub async fn get_anomalies_table_data(
        &self,
        query: AnomaliesTableQuery,
    ) -> Result<AnomaliesTableData, ProviderError<S::Error>> {
        self.guard
            .authorize::<S::Error>(GatedOperation::GetAnomaliesTableData)
            .await?;
        self.service
            .get_anomalies_table_data(query)
            .await
            .map_err(ProviderError::Delegate)
    }
}
