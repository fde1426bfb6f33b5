use crate::application::{Config, Console, handlers};
use crate::domain::Diary;
use crate::infrastructure::{CsvRepository, EntryRepository};
use anyhow::Result;
use log::{debug, info, warn};

const MENU: [&str; 8] = [
    "Diary",
    "1. Add a new entry",
    "2. Show entries",
    "3. Edit an entry",
    "4. Delete an entry",
    "5. Search by date",
    "6. Search by text",
    "7. Exit",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Edit,
    Delete,
    SearchByDate,
    SearchByText,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::List),
            "3" => Some(Self::Edit),
            "4" => Some(Self::Delete),
            "5" => Some(Self::SearchByDate),
            "6" => Some(Self::SearchByText),
            "7" => Some(Self::Exit),
            _ => None,
        }
    }
}

pub struct DiaryApp {
    diary: Diary,
    repository: Box<dyn EntryRepository>,
}

impl DiaryApp {
    pub fn open(config: &Config) -> Result<Self> {
        let repository = CsvRepository::new(config.data_file.clone());
        Self::with_repository(Box::new(repository))
    }

    pub fn with_repository(repository: Box<dyn EntryRepository>) -> Result<Self> {
        let diary = Diary::from_entries(repository.load()?);

        let duplicates = diary.duplicate_ids();
        if !duplicates.is_empty() {
            warn!("Diary file contains duplicate ids: {:?}", duplicates);
        }

        Ok(Self { diary, repository })
    }

    pub fn diary(&self) -> &Diary {
        &self.diary
    }

    /// Shows the menu until the user exits or input runs out, then saves once.
    pub fn run(&mut self, console: &mut dyn Console) -> Result<()> {
        loop {
            for line in MENU {
                console.write_line(line)?;
            }

            let Some(input) = console.read_line()? else {
                info!("Input closed, exiting");
                break;
            };

            let Some(choice) = MenuChoice::parse(&input) else {
                debug!("Unrecognised menu choice {:?}", input);
                console.write_line("Invalid choice. Please try again.")?;
                continue;
            };

            debug!("Menu choice {:?}", choice);
            match choice {
                MenuChoice::Add => handlers::add_entry(&mut self.diary, console)?,
                MenuChoice::List => handlers::list_entries(&mut self.diary, console)?,
                MenuChoice::Edit => handlers::edit_entry(&mut self.diary, console)?,
                MenuChoice::Delete => handlers::delete_entry(&mut self.diary, console)?,
                MenuChoice::SearchByDate => handlers::search_by_date(&mut self.diary, console)?,
                MenuChoice::SearchByText => handlers::search_by_text(&mut self.diary, console)?,
                MenuChoice::Exit => {
                    console.write_line("Exiting the diary.")?;
                    break;
                }
            }
        }

        self.save()
    }

    pub fn save(&self) -> Result<()> {
        self.repository.save(self.diary.entries())
    }
}
