//! Expense operations

use chrono::NaiveDate;
use rusqlite::params;

use super::{parse_datetime, Database};
use crate::error::Result;
use crate::models::{ExpenseRecord, NewExpense};

impl Database {
    /// Insert one expense for a user
    pub fn insert_expense(&self, user_id: i64, expense: &NewExpense) -> Result<ExpenseRecord> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO expenses (user_id, category, amount, expense_date, description)
             VALUES (?, ?, ?, ?, ?)",
            params![
                user_id,
                expense.category,
                expense.amount,
                expense.expense_date.to_string(),
                expense.description
            ],
        )?;
        let id = conn.last_insert_rowid();

        let record = conn.query_row(
            "SELECT id, user_id, category, amount, expense_date, description, created_at
             FROM expenses WHERE id = ?",
            params![id],
            row_to_expense,
        )?;

        Ok(record)
    }

    /// List a user's expenses, newest first
    pub fn list_expenses(&self, user_id: i64) -> Result<Vec<ExpenseRecord>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, user_id, category, amount, expense_date, description, created_at
             FROM expenses WHERE user_id = ? ORDER BY expense_date DESC",
        )?;

        let records = stmt
            .query_map(params![user_id], row_to_expense)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(records)
    }

    /// Total deductible expenses on/after a date
    pub fn total_expenses_since(&self, user_id: i64, since: NaiveDate) -> Result<f64> {
        let conn = self.conn()?;
        let total: Option<f64> = conn.query_row(
            "SELECT SUM(amount) FROM expenses WHERE user_id = ? AND expense_date >= ?",
            params![user_id, since.to_string()],
            |row| row.get(0),
        )?;
        Ok(total.unwrap_or(0.0))
    }
}

fn row_to_expense(row: &rusqlite::Row<'_>) -> rusqlite::Result<ExpenseRecord> {
    let date_str: String = row.get(4)?;
    let created_at_str: String = row.get(6)?;
    Ok(ExpenseRecord {
        id: row.get(0)?,
        user_id: row.get(1)?,
        category: row.get(2)?,
        amount: row.get(3)?,
        expense_date: date_str.parse().unwrap_or_default(),
        description: row.get(5)?,
        created_at: parse_datetime(&created_at_str),
    })
}
