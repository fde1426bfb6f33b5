use crate::application::{Console, TextStyle};
use crate::domain::{DateRange, Diary, DiaryEntry, EntryId, Segment, highlight};
use crate::infrastructure::DateParser;
use anyhow::Result;
use chrono::NaiveDate;
use log::debug;

const DATE_PROMPT_HINT: &str = "(yyyy/MM/dd)";

fn prompt(console: &mut dyn Console, message: &str) -> Result<String> {
    console.write_line(message)?;
    Ok(console.read_line()?.unwrap_or_default())
}

fn prompt_date(console: &mut dyn Console, message: &str) -> Result<Option<NaiveDate>> {
    let input = prompt(console, &format!("{message} {DATE_PROMPT_HINT}:"))?;
    let date = DateParser::new().parse_input(&input);
    if date.is_none() {
        debug!("Rejected date input {:?}", input);
        console.write_line("Invalid date format.")?;
    }
    Ok(date)
}

/// Reads an id line. Non-numeric input is reported and yields `None`.
fn prompt_id(console: &mut dyn Console, message: &str) -> Result<Option<i64>> {
    let input = prompt(console, message)?;
    match input.trim().parse::<i64>() {
        Ok(id) => Ok(Some(id)),
        Err(_) => {
            debug!("Rejected id input {:?}", input);
            console.write_line("Invalid ID.")?;
            Ok(None)
        }
    }
}

fn entry_id(raw: i64) -> Option<EntryId> {
    EntryId::try_from(raw).ok()
}

fn write_entry_body(console: &mut dyn Console, entry: &DiaryEntry) -> Result<()> {
    let parser = DateParser::new();
    console.write_line(&format!("Date: {}", parser.format_display(entry.date)))?;
    console.write_line(&entry.content)?;
    console.write_line("")
}

pub fn add_entry(diary: &mut Diary, console: &mut dyn Console) -> Result<()> {
    let Some(date) = prompt_date(console, "Enter the date")? else {
        return Ok(());
    };

    let content = prompt(console, "Enter the diary content:")?;
    if content.trim().is_empty() {
        console.write_line("The diary content is empty. The entry was not added.")?;
        return Ok(());
    }

    let Some(id) = diary.add(date, content).map(|entry| entry.id) else {
        return console.write_line("No entry IDs are left. The entry was not added.");
    };
    debug!("Added entry {} for {}", id, date);
    console.write_line("Entry added.")
}

pub fn list_entries(diary: &mut Diary, console: &mut dyn Console) -> Result<()> {
    let parser = DateParser::new();
    diary.sort_by_date();

    console.write_line("Diary entries:")?;
    for entry in diary.entries() {
        console.write_line(&format!(
            "({}) Date: {}",
            entry.id,
            parser.format_display(entry.date)
        ))?;
        console.write_line(&entry.content)?;
        console.write_line("")?;
    }
    Ok(())
}

/// Replaces the content of an entry. Unlike adding, empty content is accepted.
pub fn edit_entry(diary: &mut Diary, console: &mut dyn Console) -> Result<()> {
    let Some(raw_id) = prompt_id(console, "Enter the ID of the entry to edit:")? else {
        return Ok(());
    };

    let Some(entry) = entry_id(raw_id).and_then(|id| diary.get_mut(id)) else {
        return console.write_line("No entry with that ID was found.");
    };

    console.write_line(&format!("Current content: {}", entry.content))?;
    let content = prompt(console, "Enter the new content:")?;
    entry.content = content;

    debug!("Edited entry {}", raw_id);
    console.write_line(&format!("Entry ID {raw_id} was updated."))
}

pub fn delete_entry(diary: &mut Diary, console: &mut dyn Console) -> Result<()> {
    let Some(raw_id) = prompt_id(console, "Enter the ID of the entry to delete:")? else {
        return Ok(());
    };

    match entry_id(raw_id).and_then(|id| diary.remove(id)) {
        Some(_) => {
            debug!("Deleted entry {}", raw_id);
            console.write_line(&format!("Entry ID {raw_id} was deleted."))
        }
        None => console.write_line("No entry with that ID was found."),
    }
}

pub fn search_by_date(diary: &mut Diary, console: &mut dyn Console) -> Result<()> {
    let Some(start) = prompt_date(console, "Enter the start date")? else {
        return Ok(());
    };
    let Some(end) = prompt_date(console, "Enter the end date")? else {
        return Ok(());
    };

    let range = DateRange::new(start, end);
    let matches = diary.in_range(range);
    debug!(
        "Date search {}..={} matched {} entries (inverted: {})",
        start,
        end,
        matches.len(),
        range.is_inverted()
    );

    if matches.is_empty() {
        return console.write_line("No entries were found in that date range.");
    }

    let parser = DateParser::new();
    console.write_line(&format!(
        "Entries ({}-{}):",
        parser.format_display(range.start()),
        parser.format_display(range.end())
    ))?;
    for entry in matches {
        write_entry_body(console, entry)?;
    }
    Ok(())
}

/// Filters case-sensitively, then highlights every case-insensitive occurrence.
pub fn search_by_text(diary: &mut Diary, console: &mut dyn Console) -> Result<()> {
    let text = prompt(console, "Enter the text to search for:")?;

    let matches = diary.containing(&text);
    debug!("Text search {:?} matched {} entries", text, matches.len());

    if matches.is_empty() {
        return console.write_line("No entries containing that text were found.");
    }

    let parser = DateParser::new();
    console.write_line(&format!("Entries containing \"{text}\":"))?;
    for entry in matches {
        console.write_line(&format!("Date: {}", parser.format_display(entry.date)))?;
        write_highlighted(console, &entry.content, &text)?;
        console.write_line("")?;
    }
    Ok(())
}

fn write_highlighted(console: &mut dyn Console, text: &str, term: &str) -> Result<()> {
    for segment in highlight(text, term) {
        match segment {
            Segment::Plain(run) => console.write(run)?,
            Segment::Match(run) => console.write_styled(run, TextStyle::Highlight)?,
        }
    }
    console.write_line("")
}
