use crate::domain::{DiaryEntry, EntryId};
use crate::infrastructure::{DateParser, EntryRepository};
use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const HEADER: [&str; 3] = ["Id", "Date", "Content"];

#[derive(Debug, Serialize, Deserialize)]
struct EntryRecord {
    #[serde(rename = "Id")]
    id: EntryId,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Content")]
    content: String,
}

/// Stores the diary as a CSV file with an `Id,Date,Content` header row.
pub struct CsvRepository {
    path: PathBuf,
    parser: DateParser,
}

impl CsvRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            parser: DateParser::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn to_entry(&self, record: EntryRecord) -> Result<DiaryEntry> {
        let date = self
            .parser
            .parse_stored(&record.date)
            .with_context(|| format!("Invalid date for entry {}", record.id))?;
        Ok(DiaryEntry::new(record.id, date, record.content))
    }

    fn to_record(&self, entry: &DiaryEntry) -> EntryRecord {
        EntryRecord {
            id: entry.id,
            date: self.parser.format_stored(entry.date),
            content: entry.content.clone(),
        }
    }
}

impl EntryRepository for CsvRepository {
    fn load(&self) -> Result<Vec<DiaryEntry>> {
        if !self.path.exists() {
            debug!("No diary file at {}, starting empty", self.path.display());
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)
            .with_context(|| format!("Failed to open diary file {}", self.path.display()))?;

        let mut entries = Vec::new();
        for record in reader.deserialize::<EntryRecord>() {
            let record = record
                .with_context(|| format!("Failed to read diary file {}", self.path.display()))?;
            entries.push(self.to_entry(record)?);
        }

        info!("Loaded {} entries from {}", entries.len(), self.path.display());
        Ok(entries)
    }

    fn save(&self, entries: &[DiaryEntry]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        // Header is written by hand so an empty diary still gets one
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)
            .with_context(|| format!("Failed to create diary file {}", self.path.display()))?;

        writer.write_record(HEADER)?;
        for entry in entries {
            writer
                .serialize(self.to_record(entry))
                .with_context(|| format!("Failed to write entry {}", entry.id))?;
        }
        writer
            .flush()
            .with_context(|| format!("Failed to flush diary file {}", self.path.display()))?;

        info!("Saved {} entries to {}", entries.len(), self.path.display());
        Ok(())
    }
}
