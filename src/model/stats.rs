use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Counters shared by a single country and the global totals.
///
/// Every field is optional: the API omits or nulls figures it does not have,
/// and an unknown figure must never be confused with zero.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CaseCounts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cases: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub today_cases: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deaths: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub today_deaths: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovered: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub today_recovered: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub critical: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tests: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub population: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cases_per_one_million: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deaths_per_one_million: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tests_per_one_million: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_per_one_million: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovered_per_one_million: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub critical_per_one_million: Option<f64>,
}

/// Global totals from the `/all` endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<i64>,
    #[serde(flatten)]
    pub counts: CaseCounts,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affected_countries: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
