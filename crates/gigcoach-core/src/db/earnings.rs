//! Earnings series operations

use chrono::NaiveDate;
use rusqlite::params;

use super::{parse_datetime, Database};
use crate::error::Result;
use crate::models::{EarningsRecord, NewEarnings};

impl Database {
    /// Insert one earnings entry for a user
    pub fn insert_earnings(&self, user_id: i64, entry: &NewEarnings) -> Result<EarningsRecord> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO earnings (user_id, date, amount) VALUES (?, ?, ?)",
            params![user_id, entry.date.to_string(), entry.amount],
        )?;
        let id = conn.last_insert_rowid();

        let record = conn.query_row(
            "SELECT id, user_id, date, amount, created_at FROM earnings WHERE id = ?",
            params![id],
            row_to_earnings,
        )?;

        Ok(record)
    }

    /// Full earnings history for a user, date ascending
    pub fn list_earnings(&self, user_id: i64) -> Result<Vec<EarningsRecord>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, user_id, date, amount, created_at FROM earnings
             WHERE user_id = ? ORDER BY date",
        )?;

        let records = stmt
            .query_map(params![user_id], row_to_earnings)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(records)
    }

    /// Just the amounts of a user's series, date ascending. This is what
    /// the metrics engine consumes.
    pub fn earnings_amounts(&self, user_id: i64) -> Result<Vec<f64>> {
        let conn = self.conn()?;
        let mut stmt =
            conn.prepare("SELECT amount FROM earnings WHERE user_id = ? ORDER BY date")?;

        let amounts = stmt
            .query_map(params![user_id], |row| row.get(0))?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(amounts)
    }

    /// Total earnings on/after a date (the fiscal window filter lives
    /// here; the tax engine receives pre-filtered totals)
    pub fn total_earnings_since(&self, user_id: i64, since: NaiveDate) -> Result<f64> {
        let conn = self.conn()?;
        let total: Option<f64> = conn.query_row(
            "SELECT SUM(amount) FROM earnings WHERE user_id = ? AND date >= ?",
            params![user_id, since.to_string()],
            |row| row.get(0),
        )?;
        Ok(total.unwrap_or(0.0))
    }
}

fn row_to_earnings(row: &rusqlite::Row<'_>) -> rusqlite::Result<EarningsRecord> {
    let date_str: String = row.get(2)?;
    let created_at_str: String = row.get(4)?;
    Ok(EarningsRecord {
        id: row.get(0)?,
        user_id: row.get(1)?,
        date: date_str.parse().unwrap_or_default(),
        amount: row.get(3)?,
        created_at: parse_datetime(&created_at_str),
    })
}
