//! Note table operations

use chrono::{DateTime, Utc};
use rusqlite::{params, OptionalExtension, Result as SqliteResult, Row};

use super::super::Database;
use crate::models::{Note, NoteFilter, SortOrder};

fn row_to_note(row: &Row) -> rusqlite::Result<Note> {
    let created_at_str: String = row.get(3)?;
    let created_at = DateTime::parse_from_rfc3339(&created_at_str)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e))
        })?;

    Ok(Note {
        id: row.get(0)?,
        title: row.get(1)?,
        text: row.get(2)?,
        created_at,
    })
}

impl Database {
    /// Look up a single note by id
    pub fn find_note(&self, id: i64) -> SqliteResult<Option<Note>> {
        let conn = self.conn.lock().unwrap();

        let mut stmt =
            conn.prepare("SELECT id, title, text, created_at FROM notes WHERE id = ?1")?;

        stmt.query_row(params![id], row_to_note).optional()
    }

    /// List notes, applying each filter field only when present.
    ///
    /// Search is a case-sensitive substring match against `text`
    /// (`instr`, not `LIKE` — SQLite's LIKE is case-insensitive for
    /// ASCII). Ordering is always by `created_at`; RFC 3339 strings
    /// sort chronologically, with id as a tiebreaker for equal
    /// timestamps.
    pub fn list_notes(&self, filter: &NoteFilter) -> SqliteResult<Vec<Note>> {
        let conn = self.conn.lock().unwrap();

        let mut sql = String::from("SELECT id, title, text, created_at FROM notes");
        let mut query_params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(search) = &filter.search {
            query_params.push(Box::new(search.clone()));
            sql.push_str(&format!(" WHERE instr(text, ?{}) > 0", query_params.len()));
        }

        sql.push_str(match filter.order {
            SortOrder::Ascending => " ORDER BY created_at ASC, id ASC",
            SortOrder::Descending => " ORDER BY created_at DESC, id DESC",
        });

        if let Some(limit) = filter.limit {
            query_params.push(Box::new(limit));
            sql.push_str(&format!(" LIMIT ?{}", query_params.len()));
        }

        let mut stmt = conn.prepare(&sql)?;
        let params_ref: Vec<&dyn rusqlite::ToSql> =
            query_params.iter().map(|p| p.as_ref()).collect();

        stmt.query_map(params_ref.as_slice(), row_to_note)?
            .collect::<SqliteResult<Vec<_>>>()
    }

    /// Insert a note and return it with its assigned id
    pub fn create_note(
        &self,
        title: &str,
        text: &str,
        created_at: DateTime<Utc>,
    ) -> SqliteResult<Note> {
        let conn = self.conn.lock().unwrap();

        conn.execute(
            "INSERT INTO notes (title, text, created_at) VALUES (?1, ?2, ?3)",
            params![title, text, created_at.to_rfc3339()],
        )?;

        let id = conn.last_insert_rowid();

        Ok(Note {
            id,
            title: title.to_string(),
            text: text.to_string(),
            created_at,
        })
    }

    /// Overwrite a note's title and text; `created_at` is never touched.
    /// Returns false when no row matched the id.
    pub fn update_note(&self, note: &Note) -> SqliteResult<bool> {
        let conn = self.conn.lock().unwrap();

        let rows = conn.execute(
            "UPDATE notes SET title = ?1, text = ?2 WHERE id = ?3",
            params![note.title, note.text, note.id],
        )?;

        Ok(rows > 0)
    }

    /// Delete a note by id; returns false when no row matched
    pub fn delete_note(&self, id: i64) -> SqliteResult<bool> {
        let conn = self.conn.lock().unwrap();

        let rows = conn.execute("DELETE FROM notes WHERE id = ?1", params![id])?;

        Ok(rows > 0)
    }

    /// Count all notes
    pub fn count_notes(&self) -> SqliteResult<i64> {
        let conn = self.conn.lock().unwrap();

        conn.query_row("SELECT COUNT(*) FROM notes", [], |row| row.get(0))
    }
}
