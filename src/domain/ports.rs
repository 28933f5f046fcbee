use crate::domain::model::{
    AnomaliesTableData, AnomaliesTableQuery, DataRecognizerConfigResponse, Module,
    RecognizeResult, SetupModuleRequest,
};
use async_trait::async_trait;

/// Module recognition and setup, backed by the ML cluster and saved objects.
#[async_trait]
pub trait DataRecognizer: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn find_matches(
        &self,
        index_pattern: &str,
        query: Option<&serde_json::Value>,
    ) -> Result<Vec<RecognizeResult>, Self::Error>;

    async fn get_module(&self, module_id: &str) -> Result<Module, Self::Error>;

    async fn list_modules(&self) -> Result<Vec<Module>, Self::Error>;

    async fn setup_module_items(
        &self,
        request: SetupModuleRequest,
    ) -> Result<DataRecognizerConfigResponse, Self::Error>;
}

/// Read access to anomaly detection results.
#[async_trait]
pub trait ResultsService: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn get_anomalies_table_data(
        &self,
        query: AnomaliesTableQuery,
    ) -> Result<AnomaliesTableData, Self::Error>;
}
