//! User operations

use rusqlite::{params, OptionalExtension};

use super::{parse_datetime, Database};
use crate::error::{Error, Result};
use crate::models::User;

impl Database {
    /// Look up a user by phone number
    pub fn find_user_by_phone(&self, phone_number: &str) -> Result<Option<User>> {
        let conn = self.conn()?;
        let user = conn
            .query_row(
                "SELECT id, phone_number, created_at FROM users WHERE phone_number = ?",
                params![phone_number],
                |row| {
                    let created_at_str: String = row.get(2)?;
                    Ok(User {
                        id: row.get(0)?,
                        phone_number: row.get(1)?,
                        created_at: parse_datetime(&created_at_str),
                    })
                },
            )
            .optional()?;

        Ok(user)
    }

    /// Create a user for a phone number
    pub fn create_user(&self, phone_number: &str) -> Result<User> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO users (phone_number) VALUES (?)",
            params![phone_number],
        )?;
        let id = conn.last_insert_rowid();
        drop(conn);

        self.find_user_by_phone(phone_number)?
            .ok_or_else(|| Error::NotFound(format!("User {} just created", id)))
    }

    /// Find a user, creating them on first contact
    pub fn find_or_create_user(&self, phone_number: &str) -> Result<User> {
        if let Some(user) = self.find_user_by_phone(phone_number)? {
            return Ok(user);
        }
        self.create_user(phone_number)
    }

    /// Resolve a phone number to a user id, erroring when unknown
    pub fn user_id_for_phone(&self, phone_number: &str) -> Result<i64> {
        self.find_user_by_phone(phone_number)?
            .map(|u| u.id)
            .ok_or_else(|| Error::NotFound(format!("No user with phone {}", phone_number)))
    }

    /// List all users, oldest first
    pub fn list_users(&self) -> Result<Vec<User>> {
        let conn = self.conn()?;
        let mut stmt =
            conn.prepare("SELECT id, phone_number, created_at FROM users ORDER BY id")?;

        let users = stmt
            .query_map([], |row| {
                let created_at_str: String = row.get(2)?;
                Ok(User {
                    id: row.get(0)?,
                    phone_number: row.get(1)?,
                    created_at: parse_datetime(&created_at_str),
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(users)
    }
}
