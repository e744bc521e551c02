use crate::{common::error::AppError, domain::book::Book};

pub fn handle(book: &mut Book, id: &str) -> Result<(), AppError> {
    let before = book.transactions.len();
    book.transactions.retain(|t| t.id != id);
    if book.transactions.len() == before {
        return Err(AppError::NotFound(id.to_string()));
    }
    Ok(())
}
