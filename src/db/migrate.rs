use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Schema steps, applied in order and recorded in the `log` table.
/// Column comments carry the Chinese sheet headers.
const MIGRATIONS: &[(&str, &str, &str)] = &[
    (
        "20250901_0001_create_staff",
        "Created staff table",
        r#"
        CREATE TABLE IF NOT EXISTS staff (
            id    INTEGER PRIMARY KEY AUTOINCREMENT,
            name  TEXT NOT NULL UNIQUE              -- 姓名
        );
        "#,
    ),
    (
        "20250901_0002_create_expected",
        "Created expected worktime table",
        r#"
        CREATE TABLE IF NOT EXISTS expected (
            id     INTEGER PRIMARY KEY AUTOINCREMENT,
            name   TEXT NOT NULL UNIQUE,            -- 姓名
            hours  REAL NOT NULL DEFAULT 0          -- 應到工時
        );
        "#,
    ),
    (
        "20250901_0003_create_events",
        "Created attendance events table",
        r#"
        CREATE TABLE IF NOT EXISTS events (
            id      INTEGER PRIMARY KEY AUTOINCREMENT,
            name    TEXT NOT NULL,                   -- 姓名
            action  TEXT NOT NULL CHECK(action IN ('簽到','簽退')), -- 動作
            date    TEXT NOT NULL,                   -- 日期 YYYY-MM-DD
            time    TEXT NOT NULL                    -- 時間 YYYY-MM-DD HH:MM:SS
        );

        CREATE INDEX IF NOT EXISTS idx_events_name ON events(name, id);
        "#,
    ),
];

/// Ensure that the `log` table exists; it also tracks applied migrations.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, version: &str, message: &str, sql: &str) -> AppResult<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(sql)
        .map_err(|e| AppError::Migration(format!("{version}: {e}")))?;

    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;

    tx.commit()?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for (version, message, sql) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }
        apply(conn, version, message, sql)?;
        applied += 1;
    }

    if applied > 0 {
        success(format!("Period store ready ({applied} migration(s) applied)."));
    }

    Ok(())
}

/// Number of migrations still pending, used by `db --info`.
pub fn pending_count(conn: &Connection) -> AppResult<usize> {
    ensure_log_table(conn)?;
    let mut n = 0;
    for (version, _, _) in MIGRATIONS {
        if !is_applied(conn, version)? {
            n += 1;
        }
    }
    Ok(n)
}
