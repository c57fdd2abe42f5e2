use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::{
    app::util::de::{deserialize_lenient_bool, deserialize_lenient_f64},
    transactions::dtos::transaction_base::TransactionBase,
};

/// A stored transaction: every [`TransactionBase`] field plus its row id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct TransactionModel {
    pub id: i64,
    #[serde(deserialize_with = "deserialize_lenient_f64")]
    pub amount: f64,
    pub category: String,
    pub description: String,
    #[serde(deserialize_with = "deserialize_lenient_bool")]
    pub is_income: bool,
    pub date: String,
}

impl TransactionModel {
    pub fn new(id: i64, dto: &TransactionBase) -> Self {
        return Self {
            id,
            amount: dto.amount,
            category: dto.category.to_string(),
            description: dto.description.to_string(),
            is_income: dto.is_income,
            date: dto.date.to_string(),
        };
    }

    #[cfg(test)]
    pub fn base(&self) -> TransactionBase {
        TransactionBase {
            amount: self.amount,
            category: self.category.to_string(),
            description: self.description.to_string(),
            is_income: self.is_income,
            date: self.date.to_string(),
        }
    }
}
