use log::info;

use crate::{
    common::{
        command::Command,
        error::{AppError, StorageError},
    },
    domain::book::{Book, Collection},
    storage::{
        kv::KeyValueStore,
        service::{PersistenceService, GOALS_KEY, TRANSACTIONS_KEY},
    },
    worker::handlers::{
        add_goal, add_progress, add_transaction, delete_goal, delete_transaction,
        edit_transaction,
    },
};

/// What a processed command changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub collection: Collection,
    /// Id of the record the command created or touched.
    pub id: String,
}

/// Applies commands to a [`Book`] and writes back the collection they touched.
///
/// A command runs against a copy of the book; the copy replaces the book
/// only once the save went through, so memory never shows a change the
/// store did not keep.
#[derive(Debug)]
pub struct Processor<S> {
    service: PersistenceService<S>,
}

impl<S: KeyValueStore> Processor<S> {
    pub fn new(service: PersistenceService<S>) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &PersistenceService<S> {
        &self.service
    }

    /// Reads both collections fresh from the store. Unreadable documents
    /// come back as empty lists.
    pub fn load_book(&self) -> Book {
        Book::new(self.service.get_transactions(), self.service.get_goals())
    }

    /// Like [`load_book`](Self::load_book) but fails on a document that
    /// exists and cannot be read, so it is never saved over.
    pub fn open_book(&self) -> Result<Book, StorageError> {
        let transactions = self.service.try_load(TRANSACTIONS_KEY)?.unwrap_or_default();
        let goals = self.service.try_load(GOALS_KEY)?.unwrap_or_default();
        Ok(Book::new(transactions, goals))
    }

    pub fn process(&mut self, book: &mut Book, command: Command) -> Result<Outcome, AppError> {
        let mut working = book.clone();

        let outcome = match command {
            Command::AddTransaction {
                description,
                amount,
                kind,
                at,
            } => Outcome {
                collection: Collection::Transactions,
                id: add_transaction::handle(&mut working, description, amount, kind, at)?,
            },
            Command::EditTransaction {
                id,
                description,
                amount,
                kind,
            } => {
                edit_transaction::handle(&mut working, &id, description, amount, kind)?;
                Outcome {
                    collection: Collection::Transactions,
                    id,
                }
            }
            Command::DeleteTransaction { id } => {
                delete_transaction::handle(&mut working, &id)?;
                Outcome {
                    collection: Collection::Transactions,
                    id,
                }
            }
            Command::AddGoal { title, target, at } => Outcome {
                collection: Collection::Goals,
                id: add_goal::handle(&mut working, title, target, at)?,
            },
            Command::AddProgress { id, delta } => {
                add_progress::handle(&mut working, &id, delta)?;
                Outcome {
                    collection: Collection::Goals,
                    id,
                }
            }
            Command::DeleteGoal { id } => {
                delete_goal::handle(&mut working, &id)?;
                Outcome {
                    collection: Collection::Goals,
                    id,
                }
            }
        };

        match outcome.collection {
            Collection::Transactions => self.service.save_transactions(&working.transactions)?,
            Collection::Goals => self.service.save_goals(&working.goals)?,
        }
        info!("{:?} updated, record {}", outcome.collection, outcome.id);

        *book = working;
        Ok(outcome)
    }
}
