// src/feedback.rs
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// One sidebar feedback submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedbackEntry {
    pub name: String,
    pub comment: String,
}

impl FeedbackEntry {
    /// Plain-text record, blank line terminated.
    pub fn to_record(&self) -> String {
        format!("Name: {}\nComment: {}\n\n", self.name, self.comment)
    }
}

/// Append one entry to the feedback log, creating the file if needed.
/// No locking: concurrent submissions may interleave.
pub fn append_feedback(path: impl AsRef<Path>, entry: &FeedbackEntry) -> io::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path.as_ref())?;
    file.write_all(entry.to_record().as_bytes())?;
    Ok(())
}
