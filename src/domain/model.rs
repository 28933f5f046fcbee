use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A module whose query matched the inspected index pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognizeResult {
    pub id: String,
    pub title: String,
    pub query: serde_json::Value,
    pub description: String,
    pub logo: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub module_type: String,
    pub logo: Option<serde_json::Value>,
    pub default_index_pattern: String,
    pub query: serde_json::Value,
    #[serde(default)]
    pub jobs: Vec<serde_json::Value>,
    #[serde(default)]
    pub datafeeds: Vec<serde_json::Value>,
    #[serde(default)]
    pub kibana: serde_json::Value,
}

/// Arguments for creating the jobs, datafeeds and saved objects of a module.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupModuleRequest {
    pub module_id: String,
    pub prefix: Option<String>,
    pub groups: Option<Vec<String>>,
    pub index_pattern_name: Option<String>,
    pub query: Option<serde_json::Value>,
    pub use_dedicated_index: Option<bool>,
    pub start_datafeed: Option<bool>,
    pub start: Option<i64>,
    pub end: Option<i64>,
    pub job_overrides: Option<serde_json::Value>,
    pub datafeed_overrides: Option<serde_json::Value>,
    pub estimate_model_memory: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponse {
    pub id: String,
    pub success: bool,
    pub error: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataRecognizerConfigResponse {
    pub jobs: Vec<ItemResponse>,
    pub datafeeds: Vec<ItemResponse>,
    pub kibana: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriteriaField {
    pub field_name: String,
    pub field_value: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnomaliesTableQuery {
    pub job_ids: Vec<String>,
    #[serde(default)]
    pub criteria_fields: Vec<CriteriaField>,
    #[serde(default)]
    pub influencers: Vec<serde_json::Value>,
    pub aggregation_interval: String,
    pub threshold: f64,
    pub earliest_ms: i64,
    pub latest_ms: i64,
    pub date_format_tz: String,
    pub max_records: usize,
    pub max_examples: usize,
    pub influencers_filter_query: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnomaliesTableData {
    pub anomalies: Vec<serde_json::Value>,
    pub interval: String,
    #[serde(default)]
    pub examples_by_job_id: HashMap<String, serde_json::Value>,
}
