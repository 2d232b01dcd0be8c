//! Wire Models
//! Transactions, analysis summaries and forecast points as the services send them.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// One analyzed transaction.
///
/// Columns the client does not interpret are kept in `extra` so the
/// transaction can be sent back to the forecast service unchanged. The
/// service echoes the uploaded columns, so `id` is only there if the file
/// had one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "Amount")]
    pub amount: f64,
    pub category: String,
    #[serde(
        deserialize_with = "deserialize_fraud_flag",
        serialize_with = "serialize_fraud_flag"
    )]
    pub is_fraud: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
impl Transaction {
    pub fn new(
        id: i64,
        description: Option<&str>,
        amount: f64,
        category: &str,
        is_fraud: bool,
    ) -> Self {
        Self {
            id: Some(id),
            description: description.map(str::to_string),
            amount,
            category: category.to_string(),
            is_fraud,
            extra: Map::new(),
        }
    }
}

/// The service reports fraud as `1`/`0`; only an exact `1` (or `true`) counts.
fn deserialize_fraud_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
        Float(f64),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(flag) => flag,
        Flag::Int(value) => value == 1,
        Flag::Float(value) => value == 1.0,
    })
}

fn serialize_fraud_flag<S>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u8(u8::from(*flag))
}

/// Result of one successful analysis upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    #[serde(rename = "total_transactions")]
    pub total_count: u64,
    #[serde(rename = "transactions_flagged_as_fraud")]
    pub fraud_count: u64,
    #[serde(rename = "all_transactions")]
    pub transactions: Vec<Transaction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories_found: Vec<String>,
}

/// One day of the spend forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    #[serde(rename = "ds")]
    pub date: String,
    #[serde(rename = "yhat")]
    pub predicted: f64,
    #[serde(rename = "yhat_lower")]
    pub lower_bound: f64,
    #[serde(rename = "yhat_upper")]
    pub upper_bound: f64,
}

/// Success body of the forecast service.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub forecast: Vec<ForecastPoint>,
}
