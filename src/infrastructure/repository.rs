use crate::domain::DiaryEntry;
use anyhow::Result;

/// Whole-diary persistence: everything is read at startup and written back in one go.
pub trait EntryRepository {
    fn load(&self) -> Result<Vec<DiaryEntry>>;
    fn save(&self, entries: &[DiaryEntry]) -> Result<()>;
}
