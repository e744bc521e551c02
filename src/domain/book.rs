use crate::domain::{goal::Goal, transaction::Transaction};

/// In-memory copy of both stored collections, newest record first.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Book {
    pub transactions: Vec<Transaction>,
    pub goals: Vec<Goal>,
}

/// Which stored collection a change touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Transactions,
    Goals,
}

impl Book {
    pub fn new(transactions: Vec<Transaction>, goals: Vec<Goal>) -> Self {
        Self {
            transactions,
            goals,
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn transaction_mut(&mut self, id: &str) -> Option<&mut Transaction> {
        self.transactions.iter_mut().find(|t| t.id == id)
    }

    pub fn goal_mut(&mut self, id: &str) -> Option<&mut Goal> {
        self.goals.iter_mut().find(|g| g.id == id)
    }
}
