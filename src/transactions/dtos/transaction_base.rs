use serde::{Deserialize, Serialize};

use crate::app::util::de::{deserialize_lenient_bool, deserialize_lenient_f64};

/// Fields accepted when creating or replacing a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionBase {
    #[serde(deserialize_with = "deserialize_lenient_f64")]
    pub amount: f64,
    pub category: String,
    pub description: String,
    #[serde(deserialize_with = "deserialize_lenient_bool")]
    pub is_income: bool,
    pub date: String,
}
