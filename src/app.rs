use std::{
    fmt::Display,
    io::{stdout, BufWriter, Write},
};

use chrono::{DateTime, Local, TimeZone, Utc};
use clap::{Subcommand, ValueEnum};
use log::info;

use crate::{
    common::{command::Command, error::AppError},
    config::Config,
    domain::{
        summary::{self, MonthFilter},
        transaction::TxKind,
    },
    io::{
        form::{GoalForm, ProgressForm, TransactionForm},
        writer,
    },
    storage::{file::FileStore, kv::KeyValueStore, service::PersistenceService},
    worker::processor::Processor,
};

/// The four screens of the application, plus storage reset.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Screen {
    /// Show the current balance
    Home,
    /// List and edit transactions
    Transactions {
        #[command(subcommand)]
        action: TransactionsAction,
    },
    /// List and edit savings goals
    Goals {
        #[command(subcommand)]
        action: GoalsAction,
    },
    /// Income, expense and balance totals
    Summary {
        /// Only count transactions of this month, e.g. "January 2025"
        #[arg(long)]
        month: Option<String>,
    },
    /// Delete stored data: one collection, or everything
    Reset {
        #[arg(long)]
        key: Option<String>,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum TransactionsAction {
    /// List transactions grouped by month
    List {
        #[arg(long)]
        month: Option<String>,
    },
    /// List the months that have transactions
    Months,
    Add {
        #[arg(long)]
        description: String,
        #[arg(long)]
        amount: String,
        #[arg(long, value_enum, default_value_t = KindArg::Income)]
        kind: KindArg,
    },
    /// Change a transaction; fields not given keep their value
    Edit {
        id: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        amount: Option<String>,
        #[arg(long, value_enum)]
        kind: Option<KindArg>,
    },
    Delete {
        id: String,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum GoalsAction {
    List,
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        target: String,
    },
    /// Add saved money to a goal
    Progress {
        id: String,
        value: String,
    },
    Delete {
        id: String,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindArg {
    Income,
    Expense,
}

impl From<KindArg> for TxKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Income => TxKind::Income,
            KindArg::Expense => TxKind::Expense,
        }
    }
}

impl Screen {
    /// True for actions that save a collection.
    pub fn writes(&self) -> bool {
        match self {
            Screen::Transactions { action } => !matches!(
                action,
                TransactionsAction::List { .. } | TransactionsAction::Months
            ),
            Screen::Goals { action } => !matches!(action, GoalsAction::List),
            Screen::Home | Screen::Summary { .. } | Screen::Reset { .. } => false,
        }
    }
}

pub fn run(screen: Screen, config: &Config) -> Result<(), AppError> {
    let store = FileStore::new(&config.storage.data_dir);
    info!("using data directory {}", store.root().display());
    let mut processor = Processor::new(PersistenceService::new(store));

    let stdout = stdout();
    let mut out = BufWriter::new(stdout.lock());
    dispatch(&mut processor, screen, &mut out, Utc::now(), &Local)?;
    out.flush()?;
    Ok(())
}

/// Runs one screen action against a fresh load of the stored collections.
///
/// Months are labelled in `tz`. Actions that save refuse to start when a
/// stored document exists but cannot be read.
pub fn dispatch<S, W, Tz>(
    processor: &mut Processor<S>,
    screen: Screen,
    mut out: W,
    now: DateTime<Utc>,
    tz: &Tz,
) -> Result<(), AppError>
where
    S: KeyValueStore,
    W: Write,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut book = if screen.writes() {
        processor.open_book()?
    } else {
        processor.load_book()
    };

    match screen {
        Screen::Home => {
            writer::write_balance(out, summary::balance(book.transactions()))?;
        }
        Screen::Summary { month } => {
            let filter = MonthFilter::from_option(month);
            let label = match &filter {
                MonthFilter::All => "all",
                MonthFilter::Month(label) => label.as_str(),
            };
            let totals = summary::totals(filter.apply(book.transactions(), tz));
            writer::write_totals(out, label, &totals)?;
        }
        Screen::Transactions { action } => match action {
            TransactionsAction::List { month } => {
                let filter = MonthFilter::from_option(month);
                let groups = summary::group_by_month(filter.apply(book.transactions(), tz), tz);
                writer::write_transaction_groups(out, &groups)?;
            }
            TransactionsAction::Months => {
                writer::write_months(out, &summary::distinct_months(book.transactions(), tz))?;
            }
            TransactionsAction::Add {
                description,
                amount,
                kind,
            } => {
                let mut form = TransactionForm {
                    description,
                    amount,
                    kind: kind.into(),
                };
                let outcome = processor.process(&mut book, form.submit_new(now)?)?;
                writeln!(out, "{}", outcome.id)?;
            }
            TransactionsAction::Edit {
                id,
                description,
                amount,
                kind,
            } => {
                let current = book
                    .transactions()
                    .iter()
                    .find(|t| t.id == id)
                    .ok_or_else(|| AppError::NotFound(id.clone()))?;
                let mut form = TransactionForm::from_transaction(current);
                if let Some(description) = description {
                    form.description = description;
                }
                if let Some(amount) = amount {
                    form.amount = amount;
                }
                if let Some(kind) = kind {
                    form.kind = kind.into();
                }
                let outcome = processor.process(&mut book, form.submit_edit(&id)?)?;
                writeln!(out, "{}", outcome.id)?;
            }
            TransactionsAction::Delete { id } => {
                processor.process(&mut book, Command::DeleteTransaction { id })?;
            }
        },
        Screen::Goals { action } => match action {
            GoalsAction::List => {
                writer::write_goals(out, book.goals())?;
            }
            GoalsAction::Add { title, target } => {
                let mut form = GoalForm { title, target };
                let outcome = processor.process(&mut book, form.submit(now)?)?;
                writeln!(out, "{}", outcome.id)?;
            }
            GoalsAction::Progress { id, value } => {
                let mut form = ProgressForm::open(&id);
                form.value = value;
                processor.process(&mut book, form.submit()?)?;
                if let Some(goal) = book.goals().iter().find(|g| g.id == id) {
                    writeln!(out, "{:.0}%", goal.percentage())?;
                }
            }
            GoalsAction::Delete { id } => {
                processor.process(&mut book, Command::DeleteGoal { id })?;
            }
        },
        Screen::Reset { key } => match key {
            Some(key) => processor.service().remove(&key)?,
            None => processor.service().clear()?,
        },
    }
    Ok(())
}
