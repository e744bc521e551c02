use crate::{common::error::AppError, domain::book::Book};

pub fn handle(book: &mut Book, id: &str) -> Result<(), AppError> {
    let before = book.goals.len();
    book.goals.retain(|g| g.id != id);
    if book.goals.len() == before {
        return Err(AppError::NotFound(id.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{common::money::Money, domain::goal::Goal};

    #[test]
    fn removes_matching_goal() {
        let mut book = Book::new(
            Vec::new(),
            vec![
                Goal::new("b".into(), "Bike".into(), Money::new(10_000)),
                Goal::new("a".into(), "Car".into(), Money::new(10_000)),
            ],
        );
        handle(&mut book, "a").unwrap();
        assert_eq!(book.goals.len(), 1);
        assert_eq!(book.goals[0].id, "b");
    }

    #[test]
    fn unknown_goal_is_not_found() {
        let mut book = Book::default();
        assert!(matches!(handle(&mut book, "a"), Err(AppError::NotFound(_))));
    }
}
