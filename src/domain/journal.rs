use crate::domain::{DateRange, DiaryEntry, EntryId};
use chrono::NaiveDate;

/// In-memory collection of every entry for the current run.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Diary {
    entries: Vec<DiaryEntry>,
}

impl Diary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<DiaryEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[DiaryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One past the highest id currently stored, or 1 for an empty diary.
    /// `None` once the highest id is `EntryId::MAX`.
    pub fn next_id(&self) -> Option<EntryId> {
        self.entries
            .iter()
            .map(|e| e.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
    }

    pub fn add(&mut self, date: NaiveDate, content: impl Into<String>) -> Option<&DiaryEntry> {
        let entry = DiaryEntry::new(self.next_id()?, date, content);
        self.entries.push(entry);
        self.entries.last()
    }

    pub fn get(&self, id: EntryId) -> Option<&DiaryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: EntryId) -> Option<&mut DiaryEntry> {
        self.entries.iter_mut().find(|e| e.id == id)
    }

    pub fn remove(&mut self, id: EntryId) -> Option<DiaryEntry> {
        let position = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(position))
    }

    pub fn sort_by_date(&mut self) {
        self.entries.sort_by_key(|e| e.date);
    }

    pub fn in_range(&self, range: DateRange) -> Vec<&DiaryEntry> {
        self.entries
            .iter()
            .filter(|e| range.contains(e.date))
            .collect()
    }

    pub fn containing(&self, text: &str) -> Vec<&DiaryEntry> {
        self.entries
            .iter()
            .filter(|e| e.contains_text(text))
            .collect()
    }

    /// Ids that appear on more than one entry.
    pub fn duplicate_ids(&self) -> Vec<EntryId> {
        let mut ids: Vec<EntryId> = self.entries.iter().map(|e| e.id).collect();
        ids.sort_unstable();
        let mut duplicates: Vec<EntryId> = ids
            .windows(2)
            .filter(|pair| pair[0] == pair[1])
            .map(|pair| pair[0])
            .collect();
        duplicates.dedup();
        duplicates
    }
}
