//! Forecast operations
//!
//! Forecast rows are written by the external prediction job; this side
//! only reads the most recent one per user.

use rusqlite::{params, OptionalExtension};

use super::{parse_datetime, Database};
use crate::error::Result;
use crate::models::Forecast;

impl Database {
    /// The authoritative (most recent) forecast for a user, if any
    pub fn latest_forecast(&self, user_id: i64) -> Result<Option<Forecast>> {
        let conn = self.conn()?;
        let forecast = conn
            .query_row(
                "SELECT id, user_id, predicted_amount, created_at FROM forecasts
                 WHERE user_id = ? ORDER BY created_at DESC, id DESC LIMIT 1",
                params![user_id],
                row_to_forecast,
            )
            .optional()?;

        Ok(forecast)
    }

    /// Record a forecast. Used by the CLI and tests to stand in for the
    /// external prediction job.
    pub fn insert_forecast(&self, user_id: i64, predicted_amount: f64) -> Result<Forecast> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO forecasts (user_id, predicted_amount) VALUES (?, ?)",
            params![user_id, predicted_amount],
        )?;
        let id = conn.last_insert_rowid();

        let record = conn.query_row(
            "SELECT id, user_id, predicted_amount, created_at FROM forecasts WHERE id = ?",
            params![id],
            row_to_forecast,
        )?;

        Ok(record)
    }
}

fn row_to_forecast(row: &rusqlite::Row<'_>) -> rusqlite::Result<Forecast> {
    let created_at_str: String = row.get(3)?;
    Ok(Forecast {
        id: row.get(0)?,
        user_id: row.get(1)?,
        predicted_amount: row.get(2)?,
        created_at: parse_datetime(&created_at_str),
    })
}
