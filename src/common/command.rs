use chrono::{DateTime, Utc};

use crate::{common::money::Money, domain::transaction::TxKind};

/// A single user action, built by the forms and applied by the processor.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddTransaction {
        description: String,
        amount: Money,
        kind: TxKind,
        at: DateTime<Utc>,
    },
    EditTransaction {
        id: String,
        description: String,
        amount: Money,
        kind: TxKind,
    },
    DeleteTransaction {
        id: String,
    },
    AddGoal {
        title: String,
        target: Money,
        at: DateTime<Utc>,
    },
    AddProgress {
        id: String,
        delta: Money,
    },
    DeleteGoal {
        id: String,
    },
}
