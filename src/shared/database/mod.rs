/// SQLite接続管理
pub mod connection;

pub use connection::{create_tables, initialize_database, initialize_in_memory_database};
