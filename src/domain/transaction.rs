use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::money::Money;

/// One income or expense entry, stored under the `transacoes` key.
///
/// The amount is always positive; `kind` carries the sign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "valor")]
    pub amount: Money,
    #[serde(rename = "tipo")]
    pub kind: TxKind,
    #[serde(rename = "data")]
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxKind {
    #[serde(rename = "receita")]
    Income,
    #[serde(rename = "despesa")]
    Expense,
}

impl TxKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxKind::Income => "income",
            TxKind::Expense => "expense",
        }
    }
}

impl Transaction {
    pub fn new(
        id: String,
        description: String,
        amount: Money,
        kind: TxKind,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            description,
            amount,
            kind,
            timestamp,
        }
    }

    /// Amount with the kind's sign applied: positive for income, negative for expense.
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TxKind::Income => self.amount,
            TxKind::Expense => Money::zero() - self.amount,
        }
    }
}
