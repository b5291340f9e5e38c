//! Savings goal operations
//!
//! Concurrent updates to the same goal are last-write-wins; the store
//! provides no additional ordering.

use rusqlite::{params, OptionalExtension};

use super::{parse_datetime, Database};
use crate::error::{Error, Result};
use crate::models::{Goal, NewGoal};

impl Database {
    /// Create a goal for a user
    pub fn create_goal(&self, user_id: i64, goal: &NewGoal) -> Result<Goal> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO goals (user_id, goal_name, target_amount, target_date)
             VALUES (?, ?, ?, ?)",
            params![
                user_id,
                goal.goal_name,
                goal.target_amount,
                goal.target_date.map(|d| d.to_string())
            ],
        )?;
        let id = conn.last_insert_rowid();
        drop(conn);

        self.get_goal(id)?
            .ok_or_else(|| Error::NotFound(format!("Goal {} just created", id)))
    }

    /// Get a goal by id
    pub fn get_goal(&self, id: i64) -> Result<Option<Goal>> {
        let conn = self.conn()?;
        let goal = conn
            .query_row(
                "SELECT id, user_id, goal_name, target_amount, current_amount, target_date, created_at
                 FROM goals WHERE id = ?",
                params![id],
                row_to_goal,
            )
            .optional()?;

        Ok(goal)
    }

    /// List a user's goals, newest first
    pub fn list_goals(&self, user_id: i64) -> Result<Vec<Goal>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, user_id, goal_name, target_amount, current_amount, target_date, created_at
             FROM goals WHERE user_id = ? ORDER BY created_at DESC, id DESC",
        )?;

        let goals = stmt
            .query_map(params![user_id], row_to_goal)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(goals)
    }

    /// Add saved money to a goal (`current_amount += delta`)
    pub fn add_goal_savings(&self, id: i64, delta: f64) -> Result<Goal> {
        let conn = self.conn()?;
        let updated = conn.execute(
            "UPDATE goals SET current_amount = current_amount + ? WHERE id = ?",
            params![delta, id],
        )?;
        if updated == 0 {
            return Err(Error::NotFound(format!("Goal {}", id)));
        }
        drop(conn);

        self.get_goal(id)?
            .ok_or_else(|| Error::NotFound(format!("Goal {}", id)))
    }

    /// Replace a goal's name and target wholesale
    pub fn update_goal(&self, id: i64, goal_name: &str, target_amount: f64) -> Result<Goal> {
        let conn = self.conn()?;
        let updated = conn.execute(
            "UPDATE goals SET goal_name = ?, target_amount = ? WHERE id = ?",
            params![goal_name, target_amount, id],
        )?;
        if updated == 0 {
            return Err(Error::NotFound(format!("Goal {}", id)));
        }
        drop(conn);

        self.get_goal(id)?
            .ok_or_else(|| Error::NotFound(format!("Goal {}", id)))
    }

    /// Delete a goal permanently
    pub fn delete_goal(&self, id: i64) -> Result<()> {
        let conn = self.conn()?;
        let deleted = conn.execute("DELETE FROM goals WHERE id = ?", params![id])?;
        if deleted == 0 {
            return Err(Error::NotFound(format!("Goal {}", id)));
        }
        Ok(())
    }
}

fn row_to_goal(row: &rusqlite::Row<'_>) -> rusqlite::Result<Goal> {
    let target_date_str: Option<String> = row.get(5)?;
    let created_at_str: String = row.get(6)?;
    Ok(Goal {
        id: row.get(0)?,
        user_id: row.get(1)?,
        goal_name: row.get(2)?,
        target_amount: row.get(3)?,
        current_amount: row.get(4)?,
        target_date: target_date_str.and_then(|s| s.parse().ok()),
        created_at: parse_datetime(&created_at_str),
    })
}
