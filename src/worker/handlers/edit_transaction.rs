use crate::{
    common::{
        error::{AppError, ValidationError},
        money::Money,
    },
    domain::{book::Book, transaction::TxKind},
};

/// Replaces description, amount and kind of the transaction with `id`.
/// Id and timestamp are kept.
pub fn handle(
    book: &mut Book,
    id: &str,
    description: String,
    amount: Money,
    kind: TxKind,
) -> Result<(), AppError> {
    if !amount.is_positive() {
        return Err(ValidationError::NonPositiveAmount(amount.to_string()).into());
    }
    if amount > Money::MAX {
        return Err(ValidationError::AmountTooLarge(amount.to_string()).into());
    }

    let tx = book
        .transaction_mut(id)
        .ok_or_else(|| AppError::NotFound(id.to_string()))?;
    tx.description = description;
    tx.amount = amount;
    tx.kind = kind;
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::domain::transaction::Transaction;

    fn money(v: i64) -> Money {
        Money::new(v * 10_000)
    }

    fn seeded() -> Book {
        let ts = Utc.with_ymd_and_hms(2025, 1, 5, 8, 0, 0).unwrap();
        Book::new(
            vec![
                Transaction::new("2".into(), "Coffee".into(), money(3), TxKind::Expense, ts),
                Transaction::new("1".into(), "Salary".into(), money(100), TxKind::Income, ts),
            ],
            Vec::new(),
        )
    }

    #[test]
    fn replaces_fields_in_place() {
        let mut book = seeded();
        let before = book.transactions[1].clone();

        handle(&mut book, "1", "Bonus".into(), money(120), TxKind::Income).unwrap();

        let rec = &book.transactions[1];
        assert_eq!(rec.id, "1");
        assert_eq!(rec.description, "Bonus");
        assert_eq!(rec.amount, money(120));
        assert_eq!(rec.timestamp, before.timestamp);
        // the other record and the order are untouched
        assert_eq!(book.transactions[0].description, "Coffee");
    }

    #[test]
    fn kind_can_flip() {
        let mut book = seeded();
        handle(&mut book, "2", "Coffee refund".into(), money(3), TxKind::Income).unwrap();
        assert_eq!(book.transactions[0].kind, TxKind::Income);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut book = seeded();
        let original = book.clone();
        let err = handle(&mut book, "nope", "x".into(), money(1), TxKind::Income).unwrap_err();
        assert!(matches!(err, AppError::NotFound(id) if id == "nope"));
        assert_eq!(book, original);
    }

    #[test]
    fn non_positive_amount_is_rejected() {
        let mut book = seeded();
        assert!(handle(&mut book, "1", "x".into(), Money::zero(), TxKind::Income).is_err());
        assert_eq!(book.transactions[1].amount, money(100));
    }
}
