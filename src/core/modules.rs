use crate::core::authorization::AuthorizationContext;
use crate::core::capabilities::GatedOperation;
use crate::core::guard::AccessGuard;
use crate::core::shared_services::SharedServicesChecks;
use crate::domain::model::{DataRecognizerConfigResponse, Module, RecognizeResult, SetupModuleRequest};
use crate::domain::ports::DataRecognizer;
use crate::utils::error::ProviderError;
use std::sync::Arc;

type RecognizerFactory<C, S, R> = dyn Fn(C, S) -> R + Send + Sync;

/// Hands out license and capability gated views of a [`DataRecognizer`].
///
/// `C` is the scoped ML cluster client and `S` the saved objects client the
/// recognizer is built from; both belong to the caller.
pub struct ModulesProvider<C, S, R> {
    checks: SharedServicesChecks,
    factory: Arc<RecognizerFactory<C, S, R>>,
}

impl<C, S, R> Clone for ModulesProvider<C, S, R> {
    fn clone(&self) -> Self {
        Self {
            checks: self.checks.clone(),
            factory: self.factory.clone(),
        }
    }
}

impl<C, S, R: DataRecognizer> ModulesProvider<C, S, R> {
    pub fn new<F>(checks: SharedServicesChecks, factory: F) -> Self
    where
        F: Fn(C, S) -> R + Send + Sync + 'static,
    {
        Self {
            checks,
            factory: Arc::new(factory),
        }
    }

    pub fn modules_provider(
        &self,
        cluster_client: C,
        context: &AuthorizationContext,
        saved_objects_client: S,
    ) -> GatedModules<R> {
        let guard = self.checks.guard_for(context);
        let recognizer = (self.factory)(cluster_client, saved_objects_client);
        GatedModules::new(guard, recognizer)
    }
}

/// Request-scoped module operations.
#[derive(Debug)]
pub struct GatedModules<R> {
    guard: AccessGuard,
    recognizer: R,
}

impl<R: DataRecognizer> GatedModules<R> {
    pub fn new(guard: AccessGuard, recognizer: R) -> Self {
        Self { guard, recognizer }
    }

    /// Finds the modules whose query matches `index_pattern`.
    pub async fn recognize(
        &self,
        index_pattern: &str,
        query: Option<&serde_json::Value>,
    ) -> Result<Vec<RecognizeResult>, ProviderError<R::Error>> {
        self.guard.authorize::<R::Error>(GatedOperation::Recognize).await?;
        self.recognizer
            .find_matches(index_pattern, query)
            .await
            .map_err(ProviderError::Delegate)
    }

    pub async fn get_module(&self, module_id: &str) -> Result<Module, ProviderError<R::Error>> {
        self.guard.authorize::<R::Error>(GatedOperation::GetModule).await?;
        self.recognizer
            .get_module(module_id)
            .await
            .map_err(ProviderError::Delegate)
    }

    pub async fn list_modules(&self) -> Result<Vec<Module>, ProviderError<R::Error>> {
        self.guard.authorize::<R::Error>(GatedOperation::ListModules).await?;
        self.recognizer
            .list_modules()
            .await
            .map_err(ProviderError::Delegate)
    }

    /// Creates the module's jobs, datafeeds and saved objects.
    pub async fn setup_module_items(
        &self,
        request: SetupModuleRequest,
    ) -> Result<DataRecognizerConfigResponse, ProviderError<R::Error>> {
        self.guard.authorize::<R::Error>(GatedOperation::SetupModuleItems).await?;
        self.recognizer
            .setup_module_items(request)
            .await
            .map_err(ProviderError::Delegate)
    }
}
