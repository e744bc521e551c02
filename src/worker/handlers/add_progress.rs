use crate::{
    common::{
        error::{AppError, ValidationError},
        money::Money,
    },
    domain::book::Book,
};

/// Adds `delta` to a goal's progress. Progress may pass the target.
pub fn handle(book: &mut Book, id: &str, delta: Money) -> Result<(), AppError> {
    if !delta.is_positive() {
        return Err(ValidationError::NonPositiveAmount(delta.to_string()).into());
    }

    book.goal_mut(id)
        .ok_or_else(|| AppError::NotFound(id.to_string()))?
        .add_progress(delta)?;
    Ok(())
}
