use rusqlite::Connection;
use std::cell::RefCell;

use crate::errors::AppError;

const SCHEMA_SQL: &str = include_str!("../../sql/schema.sql");

// Thread-local connection slot, keyed by path so two handles in the
// same thread (tests do this) don't hand out each other's connection.
thread_local! {
    static DB_CONN: RefCell<Option<(String, Connection)>> = RefCell::new(None);
}

/// Cheap, cloneable handle to the inventory store. Cloning copies the
/// path only; the actual connection is opened lazily per thread.
#[derive(Clone)]
pub struct Database {
    path: String,
}

impl Database {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Provides a mutable connection to the closure.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, AppError>
    where
        F: FnOnce(&mut Connection) -> Result<T, AppError>,
    {
        DB_CONN
            .try_with(|cell| {
                let mut slot = cell.borrow_mut();
                let reopen = match slot.as_ref() {
                    Some((path, _)) => path != &self.path,
                    None => true,
                };
                if reopen {
                    let conn = Connection::open(&self.path)
                        .map_err(|e| AppError::StoreInit(format!("open {} failed: {e}", self.path)))?;
                    *slot = Some((self.path.clone(), conn));
                }
                let (_, conn) = slot.as_mut().unwrap();
                f(conn)
            })
            .map_err(|_| AppError::Db("thread-local connection unavailable".into()))?
    }
}

/// Apply the embedded schema. Every statement is CREATE ... IF NOT
/// EXISTS, so this is safe to call repeatedly and from concurrent
/// requests; only the first successful call has any effect.
pub fn init_store(db: &Database) -> Result<(), AppError> {
    db.with_conn(|conn| {
        conn.execute_batch(SCHEMA_SQL)
            .map_err(|e| AppError::StoreInit(format!("apply schema failed: {e}")))
    })
}
