use chrono::NaiveDate;

pub type EntryId = u32;

#[derive(Debug, Clone, PartialEq)]
pub struct DiaryEntry {
    pub id: EntryId,
    pub date: NaiveDate,
    pub content: String,
}

impl DiaryEntry {
    pub fn new(id: EntryId, date: NaiveDate, content: impl Into<String>) -> Self {
        Self {
            id,
            date,
            content: content.into(),
        }
    }

    pub fn contains_text(&self, text: &str) -> bool {
        self.content.contains(text)
    }
}
