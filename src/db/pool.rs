//! SQLite connection wrapper (lightweight for CLI usage).
//! One connection per period store; no cross-process locking is attempted.

use crate::db::initialize::init_db;
use crate::errors::AppResult;
use crate::utils::path::period_db_path;
use rusqlite::{Connection, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub struct DbPool {
    pub conn: Connection,
    pub path: Option<PathBuf>,
}

impl DbPool {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path.as_ref())?;
        Ok(Self {
            conn,
            path: Some(path.as_ref().to_path_buf()),
        })
    }

    /// Open (and lazily create) the store of a period folder.
    pub fn open_period(folder: &Path) -> AppResult<Self> {
        fs::create_dir_all(folder)?;
        let pool = Self::new(period_db_path(folder))?;
        init_db(&pool.conn)?;
        Ok(pool)
    }

    /// Fully migrated store that lives only in memory.
    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        init_db(&conn)?;
        Ok(Self { conn, path: None })
    }
}
