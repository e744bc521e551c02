use log::{debug, error, warn};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    common::error::StorageError,
    domain::{goal::Goal, transaction::Transaction},
    storage::kv::KeyValueStore,
};

pub const TRANSACTIONS_KEY: &str = "transacoes";
pub const GOALS_KEY: &str = "metas";

/// Reads and writes whole collections as JSON arrays.
///
/// A collection is the unit of storage: `load` returns every record and
/// `save` replaces every record. Reads never fail; an absent key, an
/// unreadable store or a malformed document all come back as an empty
/// list. Writes log and return their failure so the caller can tell the
/// user that a change was not kept.
#[derive(Debug)]
pub struct PersistenceService<S> {
    store: S,
}

impl<S: KeyValueStore> PersistenceService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn save<T: Serialize>(&self, key: &str, collection: &[T]) -> Result<(), StorageError> {
        let json = serde_json::to_string(collection).map_err(|source| StorageError::Encode {
            key: key.to_string(),
            source,
        });
        let result = json.and_then(|json| self.store.set(key, &json));
        match &result {
            Ok(()) => debug!("saved {} records under '{key}'", collection.len()),
            Err(e) => error!("failed to save '{key}': {e}"),
        }
        result
    }

    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        match self.try_load(key) {
            Ok(Some(records)) => records,
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("failed to load '{key}', using an empty list: {e}");
                Vec::new()
            }
        }
    }

    /// Like [`load`](Self::load) but tells absence (`Ok(None)`) apart from
    /// read and parse failures.
    pub fn try_load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<Vec<T>>, StorageError> {
        let Some(raw) = self.store.get(key)? else {
            debug!("no document under '{key}'");
            return Ok(None);
        };
        let records: Vec<T> = serde_json::from_str(&raw).map_err(|source| StorageError::Decode {
            key: key.to_string(),
            source,
        })?;
        debug!("loaded {} records from '{key}'", records.len());
        Ok(Some(records))
    }

    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.store
            .remove(key)
            .inspect_err(|e| error!("failed to remove '{key}': {e}"))
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.store
            .clear()
            .inspect_err(|e| error!("failed to clear storage: {e}"))
    }

    pub fn get_transactions(&self) -> Vec<Transaction> {
        self.load(TRANSACTIONS_KEY)
    }

    pub fn save_transactions(&self, transactions: &[Transaction]) -> Result<(), StorageError> {
        self.save(TRANSACTIONS_KEY, transactions)
    }

    pub fn get_goals(&self) -> Vec<Goal> {
        self.load(GOALS_KEY)
    }

    pub fn save_goals(&self, goals: &[Goal]) -> Result<(), StorageError> {
        self.save(GOALS_KEY, goals)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::{
        common::money::Money,
        domain::transaction::TxKind,
        storage::kv::MemoryStore,
    };

    /// Store whose every operation fails, to exercise the error paths.
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Err(broken(key))
        }
        fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(broken(key))
        }
        fn remove(&self, key: &str) -> Result<(), StorageError> {
            Err(broken(key))
        }
        fn clear(&self) -> Result<(), StorageError> {
            Err(broken("*"))
        }
    }

    fn broken(key: &str) -> StorageError {
        StorageError::Io {
            key: key.to_string(),
            source: std::io::Error::other("disk gone"),
        }
    }

    fn service() -> PersistenceService<MemoryStore> {
        PersistenceService::new(MemoryStore::new())
    }

    fn tx(id: &str, amount: i64, kind: TxKind) -> Transaction {
        Transaction::new(
            id.into(),
            "entry".into(),
            Money::new(amount * 10_000),
            kind,
            Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap(),
        )
    }

    #[test]
    fn save_then_load_returns_same_collection() {
        let svc = service();
        let txs = vec![tx("2", 40, TxKind::Expense), tx("1", 100, TxKind::Income)];
        svc.save_transactions(&txs).unwrap();
        assert_eq!(svc.get_transactions(), txs);
    }

    #[test]
    fn never_written_key_loads_empty() {
        let svc = service();
        assert!(svc.get_transactions().is_empty());
        assert!(svc.get_goals().is_empty());
        assert!(svc.try_load::<Goal>(GOALS_KEY).unwrap().is_none());
    }

    #[test]
    fn malformed_document_loads_empty() {
        let svc = service();
        svc.store().set(GOALS_KEY, "{not json").unwrap();

        assert!(svc.get_goals().is_empty());
        assert!(matches!(
            svc.try_load::<Goal>(GOALS_KEY),
            Err(StorageError::Decode { .. })
        ));
    }

    #[test]
    fn empty_collection_round_trips() {
        let svc = service();
        svc.save_goals(&[]).unwrap();
        assert_eq!(svc.store().get(GOALS_KEY).unwrap().as_deref(), Some("[]"));
        assert_eq!(svc.try_load::<Goal>(GOALS_KEY).unwrap(), Some(Vec::new()));
    }

    #[test]
    fn collections_live_under_fixed_keys() {
        let svc = service();
        svc.save_transactions(&[tx("1", 5, TxKind::Income)]).unwrap();
        svc.save_goals(&[Goal::new("g".into(), "Car".into(), Money::new(10_000))])
            .unwrap();

        let raw_tx = svc.store().get("transacoes").unwrap().unwrap();
        assert!(raw_tx.contains("\"descricao\""));
        let raw_goals = svc.store().get("metas").unwrap().unwrap();
        assert!(raw_goals.contains("\"valorDesejado\""));
    }

    #[test]
    fn remove_and_clear() {
        let svc = service();
        svc.save_transactions(&[tx("1", 5, TxKind::Income)]).unwrap();
        svc.save_goals(&[Goal::new("g".into(), "Car".into(), Money::new(10_000))])
            .unwrap();

        svc.remove(GOALS_KEY).unwrap();
        assert!(svc.get_goals().is_empty());
        assert_eq!(svc.get_transactions().len(), 1);

        svc.clear().unwrap();
        assert!(svc.get_transactions().is_empty());
    }

    #[test]
    fn io_failures_surface_on_write_and_vanish_on_read() {
        let svc = PersistenceService::new(BrokenStore);

        assert!(svc.get_transactions().is_empty());
        assert!(svc.try_load::<Transaction>(TRANSACTIONS_KEY).is_err());
        assert!(matches!(
            svc.save_goals(&[]),
            Err(StorageError::Io { .. })
        ));
        assert!(svc.remove(GOALS_KEY).is_err());
        assert!(svc.clear().is_err());
    }
}
