/// Test utilities for CSV-backed storage
///
/// Each `TestStorage` owns a fresh temporary directory with a diary path inside
/// it. The file itself is not created until something saves to it, so tests can
/// also exercise the "no file yet" startup path.
///
/// ```rust,ignore
/// let storage = TestStorage::new();
/// storage.repository().save(&entries)?;
/// // Directory is removed when `storage` is dropped
/// ```
#[cfg(test)]
pub mod test_harness {
    use crate::domain::DiaryEntry;
    use crate::infrastructure::{CsvRepository, EntryRepository};
    use anyhow::Result;
    use chrono::NaiveDate;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    pub struct TestStorage {
        repository: CsvRepository,
        temp_dir: TempDir,
    }

    impl TestStorage {
        pub fn new() -> Self {
            let temp_dir = TempDir::new().expect("Failed to create temp directory");
            let repository = CsvRepository::new(temp_dir.path().join("diary.csv"));

            Self {
                repository,
                temp_dir,
            }
        }

        pub fn repository(&self) -> &CsvRepository {
            &self.repository
        }

        pub fn path(&self) -> &Path {
            self.repository.path()
        }

        pub fn path_buf(&self) -> PathBuf {
            self.repository.path().to_path_buf()
        }

        pub fn dir(&self) -> &Path {
            self.temp_dir.path()
        }

        /// Writes three entries out of date order and returns them.
        pub fn create_sample_file(&self) -> Result<Vec<DiaryEntry>> {
            let entries = vec![
                DiaryEntry::new(1, date(2024, 1, 20), "walked the dog"),
                DiaryEntry::new(2, date(2024, 1, 5), "new year, new notebook"),
                DiaryEntry::new(3, date(2024, 1, 12), "the cat knocked over a plant"),
            ];
            self.repository.save(&entries)?;
            Ok(entries)
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    pub fn with_test_storage<F, R>(test_fn: F) -> R
    where
        F: FnOnce(&TestStorage) -> R,
    {
        let test_storage = TestStorage::new();
        test_fn(&test_storage)
    }
}

#[cfg(test)]
mod tests {
    use super::test_harness::*;
    use crate::infrastructure::EntryRepository;

    #[test]
    fn test_harness_sample_file() {
        with_test_storage(|storage| {
            let written = storage.create_sample_file().unwrap();
            let loaded = storage.repository().load().unwrap();
            assert_eq!(loaded, written);
        });
    }

    #[test]
    fn test_harness_isolation() {
        let first = TestStorage::new();
        let second = TestStorage::new();

        first.create_sample_file().unwrap();

        assert_ne!(first.path(), second.path());
        assert!(second.repository().load().unwrap().is_empty());
    }
}
