use crate::errors::{AppError, AppResult};
use crate::models::action::AttendanceAction;
use crate::models::event::AttendanceEvent;
use crate::models::expected::ExpectedWorktime;
use crate::utils::date::{parse_date, parse_timestamp};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn conversion_error(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
}

/// Mapping DB → (row id, AttendanceEvent).
pub fn map_event_row(row: &Row) -> Result<(i64, AttendanceEvent)> {
    let id: i64 = row.get("id")?;
    let name: String = row.get("name")?;
    let action_str: String = row.get("action")?;
    let date_str: String = row.get("date")?;
    let time_str: String = row.get("time")?;

    let action = AttendanceAction::from_db_str(&action_str)
        .ok_or_else(|| conversion_error(AppError::InvalidAction(action_str.clone())))?;
    let date = parse_date(&date_str)
        .ok_or_else(|| conversion_error(AppError::InvalidDate(date_str.clone())))?;
    let timestamp = parse_timestamp(&time_str)
        .ok_or_else(|| conversion_error(AppError::InvalidTimestamp(time_str.clone())))?;

    Ok((
        id,
        AttendanceEvent {
            name,
            action,
            date,
            timestamp,
        },
    ))
}

// ---------------------------
// Roster
// ---------------------------

pub fn load_staff(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare("SELECT name FROM staff ORDER BY id ASC")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn staff_exists(conn: &Connection, name: &str) -> AppResult<bool> {
    let found: Option<i64> = conn
        .query_row("SELECT id FROM staff WHERE name = ?1", [name], |row| {
            row.get(0)
        })
        .optional()?;
    Ok(found.is_some())
}

pub fn insert_staff(conn: &Connection, name: &str) -> AppResult<()> {
    conn.execute("INSERT INTO staff (name) VALUES (?1)", [name])?;
    Ok(())
}

pub fn delete_staff(conn: &Connection, name: &str) -> AppResult<bool> {
    let n = conn.execute("DELETE FROM staff WHERE name = ?1", [name])?;
    Ok(n > 0)
}

// ---------------------------
// Expected worktime
// ---------------------------

pub fn load_expected(conn: &Connection) -> AppResult<ExpectedWorktime> {
    let mut stmt = conn.prepare("SELECT name, hours FROM expected ORDER BY id ASC")?;
    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, Option<f64>>(1)?.unwrap_or(0.0),
        ))
    })?;

    let mut pairs = Vec::new();
    for r in rows {
        pairs.push(r?);
    }
    Ok(pairs.into_iter().collect())
}

/// Update in place by name, or append when absent.
pub fn upsert_expected(conn: &Connection, name: &str, hours: f64) -> AppResult<()> {
    conn.execute(
        "INSERT INTO expected (name, hours) VALUES (?1, ?2)
         ON CONFLICT(name) DO UPDATE SET hours = excluded.hours",
        params![name, hours],
    )?;
    Ok(())
}

// ---------------------------
// Ledgers
// ---------------------------

/// Ledger rows of one person in append order, with their row ids.
pub fn load_ledger_rows(conn: &Connection, name: &str) -> AppResult<Vec<(i64, AttendanceEvent)>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, action, date, time FROM events
         WHERE name = ?1
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([name], map_event_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Names owning at least one ledger row, in order of their first event.
pub fn ledger_names(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare("SELECT name FROM events GROUP BY name ORDER BY MIN(id) ASC")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_event(conn: &Connection, ev: &AttendanceEvent) -> AppResult<()> {
    conn.execute(
        "INSERT INTO events (name, action, date, time) VALUES (?1, ?2, ?3, ?4)",
        params![ev.name, ev.action.to_db_str(), ev.date_str(), ev.time_str()],
    )?;
    Ok(())
}

pub fn delete_event_by_id(conn: &Connection, id: i64) -> AppResult<()> {
    conn.execute("DELETE FROM events WHERE id = ?1", [id])?;
    Ok(())
}

// ---------------------------
// Internal log
// ---------------------------

/// Rows of the internal log: (id, date, operation, target, message).
pub fn load_log(conn: &Connection) -> AppResult<Vec<(i64, String, String, String, String)>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, date, operation, IFNULL(target, ''), message FROM log ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get(0)?,
            row.get(1)?,
            row.get(2)?,
            row.get(3)?,
            row.get(4)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
