//! Pure aggregations over transaction lists: balance, income and expense
//! totals, monthly labels and month grouping.
//!
//! Everything here works on borrowed records and keeps input order, so the
//! newest-first order of the stored collection carries through to groups
//! and filter options. Month boundaries are taken in the timezone passed
//! in; the command line uses the local one.

use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};

use crate::{
    common::money::Money,
    domain::transaction::{Transaction, TxKind},
};

/// "Month Year" label of a timestamp in `tz`, e.g. `"January 2025"`.
pub fn month_label<Tz>(timestamp: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    timestamp.with_timezone(tz).format("%B %Y").to_string()
}

/// Income minus expenses.
pub fn balance<'a, I>(txs: I) -> Money
where
    I: IntoIterator<Item = &'a Transaction>,
{
    txs.into_iter().map(Transaction::signed_amount).sum()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub income: Money,
    pub expense: Money,
}

impl Totals {
    pub fn balance(&self) -> Money {
        self.income - self.expense
    }
}

pub fn totals<'a, I>(txs: I) -> Totals
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut totals = Totals::default();
    for tx in txs {
        match tx.kind {
            TxKind::Income => totals.income += tx.amount,
            TxKind::Expense => totals.expense += tx.amount,
        }
    }
    totals
}

/// Distinct month labels in first-seen order.
pub fn distinct_months<'a, I, Tz>(txs: I, tz: &Tz) -> Vec<String>
where
    I: IntoIterator<Item = &'a Transaction>,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut months: Vec<String> = Vec::new();
    for tx in txs {
        let label = month_label(&tx.timestamp, tz);
        if !months.contains(&label) {
            months.push(label);
        }
    }
    months
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MonthFilter {
    #[default]
    All,
    Month(String),
}

impl MonthFilter {
    pub fn from_option(label: Option<String>) -> Self {
        match label {
            Some(label) => MonthFilter::Month(label),
            None => MonthFilter::All,
        }
    }

    pub fn matches<Tz>(&self, tx: &Transaction, tz: &Tz) -> bool
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        match self {
            MonthFilter::All => true,
            MonthFilter::Month(label) => month_label(&tx.timestamp, tz) == *label,
        }
    }

    pub fn apply<'a, Tz>(&self, txs: &'a [Transaction], tz: &Tz) -> Vec<&'a Transaction>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        txs.iter().filter(|tx| self.matches(tx, tz)).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthGroup<'a> {
    pub label: String,
    pub transactions: Vec<&'a Transaction>,
}

/// Partitions records by month label. Groups appear in the order their
/// month is first met; records keep their input order inside a group.
pub fn group_by_month<'a, I, Tz>(txs: I, tz: &Tz) -> Vec<MonthGroup<'a>>
where
    I: IntoIterator<Item = &'a Transaction>,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut groups: Vec<MonthGroup<'a>> = Vec::new();
    for tx in txs {
        let label = month_label(&tx.timestamp, tz);
        match groups.iter_mut().find(|g| g.label == label) {
            Some(group) => group.transactions.push(tx),
            None => groups.push(MonthGroup {
                label,
                transactions: vec![tx],
            }),
        }
    }
    groups
}
