//! SQLite-backed leaderboard.
//!
//! Keeps the best score per player and mode in a local database file.
//! Opening the database can fail (read-only disk, corrupt file); the
//! store then runs disabled and every call becomes a logged no-op so
//! the game itself keeps working.

use rusqlite::{Connection, params};

use crate::consts::TOP_N;
use crate::sim::GameMode;

/// One row of the leaderboard, as read back from the database.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRow {
    pub name: String,
    pub score: i32,
    pub time: f32,
    pub mode: String,
}

/// Handle to the score database. `conn` is `None` when opening failed.
pub struct Leaderboard {
    conn: Option<Connection>,
}

impl Leaderboard {
    /// Opens (or creates) the database at `path`.
    pub fn open(path: &str) -> Self {
        let conn = Connection::open(path).and_then(|conn| {
            Self::ensure_schema(&conn)?;
            Ok(conn)
        });
        match conn {
            Ok(conn) => {
                log::info!("Leaderboard database ready at {}", path);
                Self { conn: Some(conn) }
            }
            Err(e) => {
                log::warn!("Leaderboard unavailable ({}); scores will not be saved", e);
                Self { conn: None }
            }
        }
    }

    /// In-memory database, used by tests.
    pub fn open_in_memory() -> Self {
        let conn = Connection::open_in_memory().and_then(|conn| {
            Self::ensure_schema(&conn)?;
            Ok(conn)
        });
        Self { conn: conn.ok() }
    }

    /// A store with no backing database. Every call is a no-op.
    pub fn disabled() -> Self {
        Self { conn: None }
    }

    pub fn is_available(&self) -> bool {
        self.conn.is_some()
    }

    fn ensure_schema(conn: &Connection) -> rusqlite::Result<()> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS leaderboard (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                score INTEGER NOT NULL,
                time REAL NOT NULL,
                mode TEXT NOT NULL
            );
            CREATE UNIQUE INDEX IF NOT EXISTS leaderboard_name_mode
                ON leaderboard(name, mode);",
        )
    }

    /// Records a finished session. Keeps only the best score per
    /// player and mode; a lower or equal score leaves the row alone.
    pub fn submit(&self, name: &str, score: i32, time: f32, mode: GameMode) {
        let Some(conn) = &self.conn else { return };

        let result = conn.execute(
            "INSERT INTO leaderboard (name, score, time, mode)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(name, mode) DO UPDATE
             SET score = excluded.score, time = excluded.time
             WHERE excluded.score > leaderboard.score",
            params![name, score, time as f64, mode.as_str()],
        );
        match result {
            Ok(0) => log::info!(
                "Score {} for {} in {} did not improve the board",
                score,
                name,
                mode.as_str()
            ),
            Ok(_) => log::info!("Recorded {} for {} in {}", score, name, mode.as_str()),
            Err(e) => log::warn!("Failed to record score for {}: {}", name, e),
        }
    }

    /// The `n` best rows for `mode`, highest score first. Ties keep
    /// the earlier entry on top.
    pub fn top_n(&self, mode: GameMode, n: usize) -> Vec<ScoreRow> {
        let Some(conn) = &self.conn else {
            return Vec::new();
        };

        let mut stmt = match conn.prepare(
            "SELECT name, score, time, mode FROM leaderboard
             WHERE mode = ?1
             ORDER BY score DESC, id ASC
             LIMIT ?2",
        ) {
            Ok(stmt) => stmt,
            Err(e) => {
                log::warn!("Failed to query leaderboard: {}", e);
                return Vec::new();
            }
        };

        let rows = stmt.query_map(params![mode.as_str(), n as i64], |row| {
            Ok(ScoreRow {
                name: row.get(0)?,
                score: row.get(1)?,
                time: row.get::<_, f64>(2)? as f32,
                mode: row.get(3)?,
            })
        });
        match rows {
            Ok(rows) => rows
                .filter_map(|row| match row {
                    Ok(row) => Some(row),
                    Err(e) => {
                        log::warn!("Skipping malformed leaderboard row: {}", e);
                        None
                    }
                })
                .collect(),
            Err(e) => {
                log::warn!("Failed to query leaderboard: {}", e);
                Vec::new()
            }
        }
    }

    /// The standard top five for `mode`.
    pub fn top(&self, mode: GameMode) -> Vec<ScoreRow> {
        self.top_n(mode, TOP_N)
    }
}
