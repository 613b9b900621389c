//! Demo fixture notes with staggered ages.

use chrono::{Duration, Utc};
use rusqlite::Result as SqliteResult;

use super::Database;

const DEMO_NOTES: [(&str, &str, i64); 3] = [
    ("First Note", "The text of the first note.", 3),
    ("Second Note", "The text of the second note.", 2),
    ("Third Note", "The text of the third note.", 1),
];

impl Database {
    /// Insert the demo notes, unless the table already has rows.
    /// Returns how many notes were inserted.
    pub fn seed_demo_notes(&self) -> SqliteResult<usize> {
        if self.count_notes()? > 0 {
            return Ok(0);
        }

        let now = Utc::now();
        for (title, text, age_in_days) in DEMO_NOTES {
            self.create_note(title, text, now - Duration::days(age_in_days))?;
        }

        Ok(DEMO_NOTES.len())
    }
}
