use serde::{Deserialize, Serialize};

use crate::common::{error::ValidationError, money::Money};

/// A savings goal, stored under the `metas` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "valorDesejado")]
    pub target_amount: Money,
    #[serde(rename = "progresso")]
    pub progress: Money,
}

impl Goal {
    pub fn new(id: String, title: String, target_amount: Money) -> Self {
        Self {
            id,
            title,
            target_amount,
            progress: Money::zero(),
        }
    }

    /// Adds `delta` to the saved amount. Fails without changing anything
    /// when the result would go past [`Money::MAX`].
    pub fn add_progress(&mut self, delta: Money) -> Result<(), ValidationError> {
        self.progress = self
            .progress
            .checked_add(delta)
            .ok_or_else(|| ValidationError::AmountTooLarge(delta.to_string()))?;
        Ok(())
    }

    /// `progress / target * 100`, not clamped.
    ///
    /// Progress past the target yields more than 100. A zero target gives
    /// a non-finite result (infinity, or NaN when progress is zero too).
    pub fn percentage(&self) -> f64 {
        self.progress.as_i64() as f64 * 100.0 / self.target_amount.as_i64() as f64
    }
}
