pub mod tables_loader;

pub use tables_loader::{load_tables, resolve_tables};
