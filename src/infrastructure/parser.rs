use anyhow::{Result, anyhow};
use chrono::{NaiveDate, NaiveDateTime};

const INPUT_DATE_FORMATS: [&str; 3] = ["%Y/%m/%d", "%Y-%m-%d", "%Y.%m.%d"];
const INPUT_TIME_SUFFIXES: [&str; 4] = [" %H:%M", " %H:%M:%S", "T%H:%M", "T%H:%M:%S"];

pub const DISPLAY_FORMAT: &str = "%Y/%m/%d";
pub const STORED_FORMAT: &str = "%Y-%m-%d";
// Invariant-culture timestamps written by earlier versions of the diary file
const LEGACY_STORED_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

/// Converts dates between what users type, what the console shows and what
/// the diary file stores.
#[derive(Debug, Default, Clone, Copy)]
pub struct DateParser;

impl DateParser {
    pub fn new() -> Self {
        Self
    }

    /// Parses a date typed at a prompt. Any time of day is accepted and dropped.
    pub fn parse_input(&self, input: &str) -> Option<NaiveDate> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        for format in INPUT_DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(input, format) {
                return Some(date);
            }

            for suffix in INPUT_TIME_SUFFIXES {
                let with_time = format!("{format}{suffix}");
                if let Ok(datetime) = NaiveDateTime::parse_from_str(input, &with_time) {
                    return Some(datetime.date());
                }
            }
        }

        None
    }

    pub fn format_display(&self, date: NaiveDate) -> String {
        date.format(DISPLAY_FORMAT).to_string()
    }

    pub fn format_stored(&self, date: NaiveDate) -> String {
        date.format(STORED_FORMAT).to_string()
    }

    pub fn parse_stored(&self, value: &str) -> Result<NaiveDate> {
        let value = value.trim();
        NaiveDate::parse_from_str(value, STORED_FORMAT)
            .or_else(|_| {
                NaiveDateTime::parse_from_str(value, LEGACY_STORED_FORMAT).map(|dt| dt.date())
            })
            .map_err(|_| anyhow!("Unrecognised stored date: {:?}", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_input_accepts_common_separators() {
        let parser = DateParser::new();

        assert_eq!(parser.parse_input("2024/01/10"), Some(date(2024, 1, 10)));
        assert_eq!(parser.parse_input("2024-01-10"), Some(date(2024, 1, 10)));
        assert_eq!(parser.parse_input("2024.01.10"), Some(date(2024, 1, 10)));
        assert_eq!(parser.parse_input("2024/1/5"), Some(date(2024, 1, 5)));
        assert_eq!(parser.parse_input("  2024/01/10 \n"), Some(date(2024, 1, 10)));
    }

    #[test]
    fn test_parse_input_drops_time_of_day() {
        let parser = DateParser::new();

        assert_eq!(parser.parse_input("2024/01/10 23:59"), Some(date(2024, 1, 10)));
        assert_eq!(
            parser.parse_input("2024-01-10 08:30:15"),
            Some(date(2024, 1, 10))
        );
        assert_eq!(
            parser.parse_input("2024-01-10T08:30:15"),
            Some(date(2024, 1, 10))
        );
    }

    #[test]
    fn test_parse_input_rejects_garbage() {
        let parser = DateParser::new();

        assert_eq!(parser.parse_input(""), None);
        assert_eq!(parser.parse_input("yesterday"), None);
        assert_eq!(parser.parse_input("2024/13/01"), None);
        assert_eq!(parser.parse_input("2023/02/29"), None);
    }

    #[test]
    fn test_display_format() {
        assert_eq!(DateParser::new().format_display(date(2024, 3, 7)), "2024/03/07");
    }

    #[test]
    fn test_parse_stored_accepts_iso_and_legacy() {
        let parser = DateParser::new();

        assert_eq!(parser.format_stored(date(2024, 3, 7)), "2024-03-07");
        assert_eq!(parser.parse_stored("2024-03-07").unwrap(), date(2024, 3, 7));
        assert_eq!(
            parser.parse_stored("03/07/2024 00:00:00").unwrap(),
            date(2024, 3, 7)
        );
        assert!(parser.parse_stored("7 March").is_err());
    }
}
