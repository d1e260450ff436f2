use rusqlite::Connection;
use std::path::Path;
use tokio::task;
use crate::error::{Result, GedviewError};

// WAL for concurrent readers while an import runs, foreign keys for integrity.
const CONNECTION_PRAGMAS: &str = "PRAGMA journal_mode = WAL; \
     PRAGMA synchronous = NORMAL; \
     PRAGMA foreign_keys = ON; \
     PRAGMA temp_store = MEMORY; \
     PRAGMA cache_size = -16384;";

/// Database connection wrapper
#[derive(Debug, Clone)]
pub struct Db {
    path: std::path::PathBuf,
}

impl Db {
    /// Create a new database connection manager
    pub fn new<P: AsRef<Path>>(db_path: P) -> Self {
        Self {
            path: db_path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a new database connection with the standard pragmas
    pub fn open_connection(&self) -> Result<Connection> {
        let conn = Connection::open(&self.path)
            .map_err(GedviewError::Database)?;
        conn.execute_batch(CONNECTION_PRAGMAS)?;
        Ok(conn)
    }

    /// Execute a closure with a database connection in a blocking task
    pub async fn with_connection<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Connection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db = self.clone();
        task::spawn_blocking(move || {
            let mut conn = db.open_connection()?;
            f(&mut conn)
        })
        .await
        .map_err(|e| GedviewError::Store(format!("blocking database task failed: {}", e)))?
    }

    /// Apply pending migrations from `migrations_dir`
    pub async fn migrate<P: AsRef<Path>>(&self, migrations_dir: P) -> Result<()> {
        let migrations_dir = migrations_dir.as_ref().to_path_buf();
        self.with_connection(move |conn| migrate::run_migrations(conn, &migrations_dir))
            .await
    }
}

pub mod migrate;
