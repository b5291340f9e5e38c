//! Logged loan operations

use rusqlite::params;

use super::{parse_datetime, Database};
use crate::error::Result;
use crate::models::{Loan, NewLoan};

impl Database {
    /// Log a loan for a user
    pub fn insert_loan(&self, user_id: i64, loan: &NewLoan) -> Result<Loan> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO user_loans (user_id, lender_name, total_amount, outstanding_amount, interest_rate, due_date)
             VALUES (?, ?, ?, ?, ?, ?)",
            params![
                user_id,
                loan.lender_name,
                loan.total_amount,
                loan.outstanding_amount,
                loan.interest_rate,
                loan.due_date.map(|d| d.to_string())
            ],
        )?;
        let id = conn.last_insert_rowid();

        let record = conn.query_row(
            "SELECT id, user_id, lender_name, total_amount, outstanding_amount, interest_rate, due_date, created_at
             FROM user_loans WHERE id = ?",
            params![id],
            row_to_loan,
        )?;

        Ok(record)
    }

    /// List a user's loans, earliest due date first
    pub fn list_loans(&self, user_id: i64) -> Result<Vec<Loan>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, user_id, lender_name, total_amount, outstanding_amount, interest_rate, due_date, created_at
             FROM user_loans WHERE user_id = ? ORDER BY due_date ASC",
        )?;

        let loans = stmt
            .query_map(params![user_id], row_to_loan)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(loans)
    }
}

fn row_to_loan(row: &rusqlite::Row<'_>) -> rusqlite::Result<Loan> {
    let due_date_str: Option<String> = row.get(6)?;
    let created_at_str: String = row.get(7)?;
    Ok(Loan {
        id: row.get(0)?,
        user_id: row.get(1)?,
        lender_name: row.get(2)?,
        total_amount: row.get(3)?,
        outstanding_amount: row.get(4)?,
        interest_rate: row.get(5)?,
        due_date: due_date_str.and_then(|s| s.parse().ok()),
        created_at: parse_datetime(&created_at_str),
    })
}
