use chrono::{DateTime, Utc};

use crate::{
    common::{
        error::{AppError, ValidationError},
        money::Money,
    },
    domain::{
        book::Book,
        id::next_id,
        transaction::{Transaction, TxKind},
    },
};

/// Creates a transaction stamped with `at` and puts it first in the list.
/// Returns the new id.
pub fn handle(
    book: &mut Book,
    description: String,
    amount: Money,
    kind: TxKind,
    at: DateTime<Utc>,
) -> Result<String, AppError> {
    if !amount.is_positive() {
        return Err(ValidationError::NonPositiveAmount(amount.to_string()).into());
    }
    if amount > Money::MAX {
        return Err(ValidationError::AmountTooLarge(amount.to_string()).into());
    }

    let id = next_id(at, book.transactions.iter().map(|t| t.id.as_str()));
    book.transactions
        .insert(0, Transaction::new(id.clone(), description, amount, kind, at));
    Ok(id)
}
