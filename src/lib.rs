pub mod config;
pub mod error;
pub mod db;
pub mod gedcom;
pub mod model;
pub mod store;
pub mod resolve;
pub mod import;
pub mod render;
pub mod http;

pub use config::Config;
pub use error::{GedviewError, Result};
pub use model::{Family, Individual};
pub use resolve::{Link, Resolver};
pub use store::{MemoryStore, RecordStore, SqliteStore};
