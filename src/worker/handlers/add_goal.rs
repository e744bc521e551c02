use chrono::{DateTime, Utc};

use crate::{
    common::{
        error::{AppError, ValidationError},
        money::Money,
    },
    domain::{book::Book, goal::Goal, id::next_id},
};

/// Creates a goal with zero progress and puts it first. Returns the new id.
pub fn handle(
    book: &mut Book,
    title: String,
    target: Money,
    at: DateTime<Utc>,
) -> Result<String, AppError> {
    if !target.is_positive() {
        return Err(ValidationError::NonPositiveAmount(target.to_string()).into());
    }
    if target > Money::MAX {
        return Err(ValidationError::AmountTooLarge(target.to_string()).into());
    }

    let id = next_id(at, book.goals.iter().map(|g| g.id.as_str()));
    book.goals.insert(0, Goal::new(id.clone(), title, target));
    Ok(id)
}
