use std::io::Write;

use crate::{
    common::money::Money,
    domain::{
        goal::Goal,
        summary::{MonthGroup, Totals},
    },
};

#[derive(serde::Serialize)]
/// One transaction line of the month-grouped listing.
///
/// Headers written (in this order): `month,id,description,kind,amount,date`.
struct TransactionRow<'a> {
    month: &'a str,
    id: &'a str,
    description: &'a str,
    kind: &'static str,
    amount: String,
    date: String,
}

#[derive(serde::Serialize)]
struct GoalRow<'a> {
    id: &'a str,
    title: &'a str,
    target: String,
    progress: String,
    percent: String,
}

#[derive(serde::Serialize)]
struct TotalsRow<'a> {
    month: &'a str,
    income: String,
    expense: String,
    balance: String,
}

fn csv_writer<W: Write>(writer: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer)
}

/// Writes transactions grouped by month, groups and rows in the given order.
///
/// Amounts are formatted with 2 decimal places; expenses get a leading `-`.
///
/// # Errors
///
/// Returns a `csv::Error` if writing/serializing any row fails.
pub fn write_transaction_groups<W: Write>(
    writer: W,
    groups: &[MonthGroup<'_>],
) -> Result<(), csv::Error> {
    let mut wtr = csv_writer(writer);

    for group in groups {
        for tx in &group.transactions {
            wtr.serialize(TransactionRow {
                month: &group.label,
                id: &tx.id,
                description: &tx.description,
                kind: tx.kind.as_str(),
                amount: tx.signed_amount().to_string_2dp(),
                date: tx.timestamp.to_rfc3339(),
            })?;
        }
    }

    wtr.flush()?;
    Ok(())
}

/// Writes goals with their completion percentage rounded to a whole number.
pub fn write_goals<W: Write>(writer: W, goals: &[Goal]) -> Result<(), csv::Error> {
    let mut wtr = csv_writer(writer);

    for goal in goals {
        wtr.serialize(GoalRow {
            id: &goal.id,
            title: &goal.title,
            target: goal.target_amount.to_string_2dp(),
            progress: goal.progress.to_string_2dp(),
            percent: format!("{:.0}", goal.percentage()),
        })?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes a single totals row; `month` is the filter label or `all`.
pub fn write_totals<W: Write>(writer: W, month: &str, totals: &Totals) -> Result<(), csv::Error> {
    let mut wtr = csv_writer(writer);
    wtr.serialize(TotalsRow {
        month,
        income: totals.income.to_string_2dp(),
        expense: totals.expense.to_string_2dp(),
        balance: totals.balance().to_string_2dp(),
    })?;
    wtr.flush()?;
    Ok(())
}

pub fn write_balance<W: Write>(writer: W, balance: Money) -> Result<(), csv::Error> {
    let mut wtr = csv_writer(writer);
    wtr.write_record(["balance"])?;
    wtr.write_record([balance.to_string_2dp()])?;
    wtr.flush()?;
    Ok(())
}

pub fn write_months<W: Write>(writer: W, months: &[String]) -> Result<(), csv::Error> {
    let mut wtr = csv_writer(writer);
    wtr.write_record(["month"])?;
    for month in months {
        wtr.write_record([month])?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::domain::{
        summary::{group_by_month, totals},
        transaction::{Transaction, TxKind},
    };

    // Helper: runs a writer into a Vec<u8> and returns the lines.
    fn lines_of(write: impl FnOnce(&mut Vec<u8>) -> Result<(), csv::Error>) -> Vec<String> {
        let mut out = Vec::new();
        write(&mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction::new(
                "3".into(),
                "Rent, March".into(),
                Money::new(400_000),
                TxKind::Expense,
                Utc.with_ymd_and_hms(2025, 3, 2, 9, 0, 0).unwrap(),
            ),
            Transaction::new(
                "1".into(),
                "Salary".into(),
                Money::new(1_000_000),
                TxKind::Income,
                Utc.with_ymd_and_hms(2025, 2, 28, 9, 0, 0).unwrap(),
            ),
        ]
    }

    #[test]
    fn writes_grouped_transactions() {
        let txs = sample();
        let groups = group_by_month(&txs, &Utc);
        let lines = lines_of(|out| write_transaction_groups(out, &groups));

        assert_eq!(lines[0], "month,id,description,kind,amount,date");
        assert_eq!(
            lines[1],
            "March 2025,3,\"Rent, March\",expense,-40.00,2025-03-02T09:00:00+00:00"
        );
        assert_eq!(
            lines[2],
            "February 2025,1,Salary,income,100.00,2025-02-28T09:00:00+00:00"
        );
    }

    #[test]
    fn writes_goals_with_percentage() {
        let mut goal = Goal::new("g".into(), "Trip".into(), Money::new(5_000_000));
        goal.add_progress(Money::new(1_500_000)).unwrap();

        let lines = lines_of(|out| write_goals(out, &[goal]));
        assert_eq!(lines[0], "id,title,target,progress,percent");
        assert_eq!(lines[1], "g,Trip,500.00,150.00,30");
    }

    #[test]
    fn writes_totals() {
        let t = totals(&sample());
        let lines = lines_of(|out| write_totals(out, "all", &t));
        assert_eq!(lines, vec!["month,income,expense,balance", "all,100.00,40.00,60.00"]);
    }

    #[test]
    fn writes_negative_balance() {
        let lines = lines_of(|out| write_balance(out, Money::new(-125_000)));
        assert_eq!(lines, vec!["balance", "-12.50"]);
    }

    #[test]
    fn writes_months() {
        let months = vec!["March 2025".to_string(), "February 2025".to_string()];
        let lines = lines_of(|out| write_months(out, &months));
        assert_eq!(lines, vec!["month", "March 2025", "February 2025"]);
    }

    #[test]
    fn empty_lists_write_nothing_but_header_for_months() {
        let lines = lines_of(|out| write_goals(out, &[]));
        assert!(lines.is_empty());
        let lines = lines_of(|out| write_months(out, &[]));
        assert_eq!(lines, vec!["month"]);
    }
}
