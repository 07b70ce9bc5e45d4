use crate::db::pool::DbPool;
use crate::db::queries::{load_attendance, load_attendance_dates};
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::model::rows_for_day;
use crate::export::writer::{export_json, export_yaml};
use crate::export::{ExportFormat, SessionExport};
use crate::utils::date::resolve_period;
use std::io;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Rows for every stored day of `user_id`, restricted to `range` when given.
    pub fn collect_rows(
        pool: &mut DbPool,
        user_id: &str,
        range: &Option<String>,
    ) -> AppResult<Vec<SessionExport>> {
        let mut dates = load_attendance_dates(&pool.conn, user_id)?;

        if let Some(r) = range {
            let wanted = resolve_period(r).map_err(AppError::InvalidDate)?;
            dates.retain(|d| wanted.contains(d));
        }

        let mut rows = Vec::new();
        for d in &dates {
            if let Some(rec) = load_attendance(&pool.conn, user_id, d)? {
                rows.extend(rows_for_day(&rec));
            }
        }

        Ok(rows)
    }

    pub fn export(
        pool: &mut DbPool,
        user_id: &str,
        format: &ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<usize> {
        let rows = Self::collect_rows(pool, user_id, range)?;

        if rows.is_empty() {
            let scope = match range {
                Some(r) => format!("{} in {}", user_id, r),
                None => user_id.to_string(),
            };
            return Err(AppError::NoRecords(scope));
        }

        let path = Path::new(file);
        ensure_writable(path, force, &mut io::stdin().lock())?;

        match format {
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Yaml => export_yaml(&rows, path)?,
        }

        Ok(rows.len())
    }
}
