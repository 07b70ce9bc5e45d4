use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Schema step: version tag, apply function, log message.
type Migration = (&'static str, fn(&Connection) -> Result<()>, &'static str);

const MIGRATIONS: &[Migration] = &[
    (
        "20251018_0001_create_attendance",
        create_attendance_tables,
        "Created attendance and sessions tables",
    ),
    (
        "20251018_0002_sessions_open_index",
        create_open_session_index,
        "Added index on open sessions",
    ),
];

/// Ensure that the `log` table exists.
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

/// Create the per-day header table and the sessions table.
fn create_attendance_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS attendance (
            user_id              TEXT NOT NULL,
            date                 TEXT NOT NULL,
            status               TEXT NOT NULL DEFAULT 'OFFLINE'
                                 CHECK(status IN ('OFFLINE','WORKING','ON_BREAK','ON_LUNCH')),
            total_work_minutes   INTEGER NOT NULL DEFAULT 0,
            total_break_minutes  INTEGER NOT NULL DEFAULT 0,
            updated_at           TEXT NOT NULL,
            PRIMARY KEY (user_id, date)
        );

        CREATE TABLE IF NOT EXISTS sessions (
            id          TEXT PRIMARY KEY,
            user_id     TEXT NOT NULL,
            date        TEXT NOT NULL,
            seq         INTEGER NOT NULL,
            kind        TEXT NOT NULL CHECK(kind IN ('WORK','BREAK','LUNCH')),
            start_time  TEXT NOT NULL,
            end_time    TEXT,
            UNIQUE (user_id, date, seq)
        );

        CREATE INDEX IF NOT EXISTS idx_sessions_user_date ON sessions(user_id, date);
        "#,
    )?;
    Ok(())
}

fn create_open_session_index(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_sessions_open ON sessions(user_id) WHERE end_time IS NULL;",
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

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    for &(version, apply, message) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }

        apply(conn)?;

        conn.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'), 'migration_applied', ?1, ?2)",
            [version, message],
        )?;

        success(format!("Migration applied: {} → {}", version, message));
    }

    Ok(())
}
