//! Personal finance tracking: income and expense transactions, savings
//! goals and monthly summaries, kept as JSON collections in a key-value
//! store.

pub mod app;
pub mod config;

pub mod common {
    pub mod command;
    pub mod error;
    pub mod money;
}

pub mod domain {
    pub mod book;
    pub mod goal;
    pub mod id;
    pub mod summary;
    pub mod transaction;
}

pub mod io {
    pub mod form;
    pub mod writer;
}

pub mod storage {
    pub mod file;
    pub mod kv;
    pub mod service;
}

pub mod worker {
    pub mod processor;

    pub mod handlers {
        pub mod add_goal;
        pub mod add_progress;
        pub mod add_transaction;
        pub mod delete_goal;
        pub mod delete_transaction;
        pub mod edit_transaction;
    }
}
