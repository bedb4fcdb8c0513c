use crate::error::{StorageError, StorageResult};
use crate::models::AddressBook;
use crate::repositories::traits::AddressBookRepository;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Address book repository backed by a pretty-printed JSON file.
///
/// A missing file means nothing has been saved yet and loads as an empty
/// book. Every phone, birthday and record is re-validated on load.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository reading and writing `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The data file location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl AddressBookRepository for JsonFileRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(
                    "No address book at {}, starting empty",
                    self.path.display()
                );
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let book: AddressBook = serde_json::from_str(&contents)?;
        tracing::info!(
            "Loaded {} contacts from {}",
            book.len(),
            self.path.display()
        );
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        let json = serde_json::to_string_pretty(book)?;
        fs::write(&self.path, json).map_err(|e| self.io_error(e))?;

        tracing::info!("Saved {} contacts to {}", book.len(), self.path.display());
        Ok(())
    }
}
