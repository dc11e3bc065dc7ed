// File: crates/tally-store/src/sqlite.rs
// Summary: SQLite-backed store; one table per domain, created on open.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::{params, Connection, ErrorCode};
use tally_core::{Domain, Entry, Uuid};

use crate::error::{Result, StoreError};
use crate::EntryStore;

pub struct SqliteStore {
    conn: Mutex<Connection>,
    domain: Domain,
}

impl SqliteStore {
    /// Open (or create) the database file at `path`.
    pub fn open(path: impl AsRef<Path>, domain: Domain) -> Result<Self> {
        let conn = Connection::open(path.as_ref())?;
        conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get::<_, String>(0))?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        tracing::info!(path = %path.as_ref().display(), table = domain.table, "opened sqlite store");
        Self::with_connection(conn, domain)
    }

    pub fn open_in_memory(domain: Domain) -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?, domain)
    }

    fn with_connection(conn: Connection, domain: Domain) -> Result<Self> {
        create_table(&conn, &domain)?;
        Ok(Self { conn: Mutex::new(conn), domain })
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StoreError::Poisoned)
    }
}

// Identifiers come from the static Domain profiles, never from user input.
fn create_table(conn: &Connection, d: &Domain) -> Result<()> {
    conn.execute(
        &format!(
            "CREATE TABLE IF NOT EXISTS {table} (
                id TEXT PRIMARY KEY,
                {name} TEXT NOT NULL,
                {value} REAL NOT NULL,
                {label} TEXT NOT NULL,
                date TEXT
            )",
            table = d.table,
            name = d.name_field,
            value = d.value_field,
            label = d.label_field,
        ),
        [],
    )?;
    Ok(())
}

impl EntryStore for SqliteStore {
    fn list_all(&self) -> Result<Vec<Entry>> {
        let d = &self.domain;
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT id, {name}, {value}, {label}, date FROM {table} ORDER BY rowid",
            table = d.table,
            name = d.name_field,
            value = d.value_field,
            label = d.label_field,
        ))?;

        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, f64>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, Option<String>>(4)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(id, name, value, label, date)| {
                let id = Uuid::parse_str(&id).map_err(|e| StoreError::Corrupt {
                    column: "id",
                    reason: format!("{id:?}: {e}"),
                })?;
                Ok(Entry { id, name, value, label, date })
            })
            .collect()
    }

    fn insert(&self, entry: &Entry) -> Result<()> {
        let d = &self.domain;
        let conn = self.lock()?;
        let sql = format!(
            "INSERT INTO {table} (id, {name}, {value}, {label}, date) VALUES (?1, ?2, ?3, ?4, ?5)",
            table = d.table,
            name = d.name_field,
            value = d.value_field,
            label = d.label_field,
        );
        let res = conn.execute(
            &sql,
            params![entry.id.to_string(), entry.name, entry.value, entry.label, entry.date],
        );
        match res {
            Ok(_) => Ok(()),
            Err(rusqlite::Error::SqliteFailure(err, _)) if err.code == ErrorCode::ConstraintViolation => {
                Err(StoreError::DuplicateId(entry.id))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn delete_by_id(&self, id: Uuid) -> Result<bool> {
        let conn = self.lock()?;
        let removed = conn.execute(
            &format!("DELETE FROM {} WHERE id = ?1", self.domain.table),
            params![id.to_string()],
        )?;
        Ok(removed > 0)
    }

    fn count(&self) -> Result<usize> {
        let conn = self.lock()?;
        let n: i64 = conn.query_row(&format!("SELECT COUNT(*) FROM {}", self.domain.table), [], |row| {
            row.get(0)
        })?;
        Ok(n as usize)
    }
}
