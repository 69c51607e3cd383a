use crate::db::migrate::pending_count;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;
use std::path::Path;

pub fn print_db_info(pool: &DbPool, db_path: &Path) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!(
        "{}• File:{} {}{}{}",
        CYAN,
        RESET,
        YELLOW,
        db_path.display(),
        RESET
    );
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) COUNTS
    //
    let staff: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM staff", [], |row| row.get(0))?;
    let ledgers: i64 =
        pool.conn
            .query_row("SELECT COUNT(DISTINCT name) FROM events", [], |row| {
                row.get(0)
            })?;
    let events: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM events", [], |row| row.get(0))?;

    println!("{}• Staff:{} {}{}{}", CYAN, RESET, GREEN, staff, RESET);
    println!("{}• Ledgers:{} {}{}{}", CYAN, RESET, GREEN, ledgers, RESET);
    println!("{}• Events:{} {}{}{}", CYAN, RESET, GREEN, events, RESET);

    //
    // 3) DATE RANGE
    //
    let first_date: Option<String> = pool
        .conn
        .query_row("SELECT MIN(date) FROM events", [], |row| {
            row.get::<_, Option<String>>(0)
        })
        .optional()?
        .flatten();
    let last_date: Option<String> = pool
        .conn
        .query_row("SELECT MAX(date) FROM events", [], |row| {
            row.get::<_, Option<String>>(0)
        })
        .optional()?
        .flatten();

    println!("{}• Date range:{}", CYAN, RESET);
    println!(
        "    from: {}",
        first_date.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );
    println!(
        "    to:   {}",
        last_date.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );

    //
    // 4) SCHEMA
    //
    println!(
        "{}• Pending migrations:{} {}",
        CYAN,
        RESET,
        pending_count(&pool.conn)?
    );

    println!();
    Ok(())
}
