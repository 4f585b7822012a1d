use std::path::Path;

use rand::seq::SliceRandom;
use rusqlite::{
    params,
    Connection,
    OptionalExtension,
};

use crate::core::{
    models::{
        Language,
        WordPair,
    },
    OrbError,
};

pub mod cycle;
pub mod saved_log;

#[cfg(test)]
mod store_tests;

pub use cycle::PredictionCycle;
pub use saved_log::SavedLog;

pub const WORDS_DB_FILE: &str = "predictions.db";

/// The local word table. Owns the SQLite connection; nothing else writes
/// to the table.
pub struct WordStore {
    conn: Connection,
}

impl WordStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, OrbError> {
        let conn = Connection::open(path)?;
        Self::initialize(conn)
    }

    /// In-memory database, used by tests.
    pub fn open_in_memory() -> Result<Self, OrbError> {
        let conn = Connection::open_in_memory()?;
        Self::initialize(conn)
    }

    fn initialize(conn: Connection) -> Result<Self, OrbError> {
        let store = Self { conn };
        store.ensure_table()?;
        Ok(store)
    }

    fn ensure_table(&self) -> Result<(), OrbError> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS Words (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                word TEXT NOT NULL,
                translation TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    /// Inserts `pairs` as fresh rows, one statement per row, with no
    /// wrapping transaction: rows written before a failure stay behind.
    /// Earlier batches are never cleared either, so the table grows with
    /// every refresh; `recreate` is the explicit way to start over.
    pub fn refresh(&mut self, pairs: &[WordPair]) -> Result<usize, OrbError> {
        self.ensure_table()?;

        let mut inserted = 0;
        for pair in pairs {
            self.conn.execute(
                "INSERT INTO Words (word, translation) VALUES (?1, ?2)",
                params![pair.word, pair.translation],
            )?;
            inserted += 1;
        }

        Ok(inserted)
    }

    /// Every row projected by `language`, freshly shuffled on each call.
    /// The shuffle is unseeded; callers must not rely on the order.
    pub fn all_rows(&self, language: Language) -> Result<Vec<String>, OrbError> {
        let sql = match language {
            Language::En => "SELECT word FROM Words ORDER BY id ASC",
            Language::Ru => "SELECT translation FROM Words ORDER BY id ASC",
        };

        let mut stmt = self.conn.prepare(sql)?;
        let mut rows: Vec<String> =
            stmt.query_map([], |row| row.get(0))?.collect::<Result<_, _>>()?;

        rows.shuffle(&mut rand::rng());
        Ok(rows)
    }

    /// Counterpart field for a displayed prediction, if it is still in the
    /// table.
    pub fn lookup_translation(
        &self,
        text: &str,
        language: Language,
    ) -> Result<Option<String>, OrbError> {
        let sql = match language {
            Language::En => "SELECT translation FROM Words WHERE word = ?1 LIMIT 1",
            Language::Ru => "SELECT word FROM Words WHERE translation = ?1 LIMIT 1",
        };

        let counterpart =
            self.conn.query_row(sql, params![text], |row| row.get(0)).optional()?;
        Ok(counterpart)
    }

    pub fn row_count(&self) -> Result<usize, OrbError> {
        let count: i64 = self.conn.query_row("SELECT COUNT(*) FROM Words", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Drops and recreates the table, releasing rows accumulated across
    /// refresh cycles.
    pub fn recreate(&mut self) -> Result<(), OrbError> {
        self.conn.execute("DROP TABLE IF EXISTS Words", [])?;
        self.ensure_table()
    }
}
