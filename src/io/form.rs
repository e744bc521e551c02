use chrono::{DateTime, Utc};

use crate::{
    common::{command::Command, error::ValidationError, money::Money},
    domain::transaction::{Transaction, TxKind},
};

/// Parses a typed amount and requires it to be greater than zero and at
/// most [`Money::MAX`].
///
/// `,` works as the decimal separator, so `"10,5"` is ten and a half.
///
/// # Examples
///
/// ```
/// use finance_tracker::io::form::parse_amount;
///
/// assert_eq!(parse_amount("10,5").unwrap().to_string(), "10.50");
/// assert!(parse_amount("ten").is_err());
/// assert!(parse_amount("0").is_err());
/// assert!(parse_amount("100000000001").is_err());
/// ```
pub fn parse_amount(raw: &str) -> Result<Money, ValidationError> {
    let amount =
        Money::parse_input(raw).map_err(|_| ValidationError::InvalidAmount(raw.trim().to_string()))?;
    if !amount.is_positive() {
        return Err(ValidationError::NonPositiveAmount(raw.trim().to_string()));
    }
    if amount > Money::MAX {
        return Err(ValidationError::AmountTooLarge(raw.trim().to_string()));
    }
    Ok(amount)
}

fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(value)
    }
}

/// Field state of the transaction form. Used for both creating and editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionForm {
    pub description: String,
    pub amount: String,
    pub kind: TxKind,
}

impl Default for TransactionForm {
    fn default() -> Self {
        Self {
            description: String::new(),
            amount: String::new(),
            kind: TxKind::Income,
        }
    }
}

impl TransactionForm {
    /// Prefills the form from a stored record, as when opening it for editing.
    pub fn from_transaction(tx: &Transaction) -> Self {
        Self {
            description: tx.description.clone(),
            amount: tx.amount.to_string_2dp(),
            kind: tx.kind,
        }
    }

    fn validate(&self) -> Result<(String, Money), ValidationError> {
        let description = required(&self.description, "description")?;
        required(&self.amount, "amount")?;
        let amount = parse_amount(&self.amount)?;
        Ok((description.to_string(), amount))
    }

    /// Builds the create command and clears the fields. On a validation
    /// error nothing is cleared.
    pub fn submit_new(&mut self, at: DateTime<Utc>) -> Result<Command, ValidationError> {
        let (description, amount) = self.validate()?;
        let command = Command::AddTransaction {
            description,
            amount,
            kind: self.kind,
            at,
        };
        self.reset();
        Ok(command)
    }

    pub fn submit_edit(&mut self, id: &str) -> Result<Command, ValidationError> {
        let (description, amount) = self.validate()?;
        let command = Command::EditTransaction {
            id: id.to_string(),
            description,
            amount,
            kind: self.kind,
        };
        self.reset();
        Ok(command)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalForm {
    pub title: String,
    pub target: String,
}

impl GoalForm {
    pub fn submit(&mut self, at: DateTime<Utc>) -> Result<Command, ValidationError> {
        let title = required(&self.title, "title")?;
        required(&self.target, "target amount")?;
        let target = parse_amount(&self.target)?;
        let command = Command::AddGoal {
            title: title.to_string(),
            target,
            at,
        };
        *self = Self::default();
        Ok(command)
    }
}

/// The "add progress" dialog: bound to one goal, holding the typed value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressForm {
    pub goal_id: String,
    pub value: String,
}

impl ProgressForm {
    pub fn open(goal_id: &str) -> Self {
        Self {
            goal_id: goal_id.to_string(),
            value: String::new(),
        }
    }

    pub fn submit(&mut self) -> Result<Command, ValidationError> {
        let delta = parse_amount(&self.value)?;
        let command = Command::AddProgress {
            id: self.goal_id.clone(),
            delta,
        };
        *self = Self::default();
        Ok(command)
    }
}
