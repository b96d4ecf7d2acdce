pub mod db_types;
pub mod generator;
pub mod loader;

pub use db_types::{RawTransactionRow, RowRejection, TransactionRecord};
pub use loader::{LoadedTable, load_transactions, load_transactions_from_path};
