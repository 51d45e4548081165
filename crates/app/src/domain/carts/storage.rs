//! Cart persistence backends.

use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

/// Fixed store name the cart document is persisted under.
pub const STORE_NAME: &str = "cart-store";

/// Where the serialized cart document lives between sessions.
pub trait CartStorage: Send + Sync {
    /// Load the persisted document, or `None` when nothing was saved yet.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend cannot be read.
    fn load(&self) -> io::Result<Option<String>>;

    /// Replace the persisted document.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend cannot be written.
    fn save(&self, document: &str) -> io::Result<()>;
}

/// A `<store name>.json` document in a caller-chosen directory.
#[derive(Debug, Clone)]
pub struct FileCartStorage {
    path: PathBuf,
}

impl FileCartStorage {
    /// Storage under the default store name in `dir`.
    #[must_use]
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self::with_name(dir, STORE_NAME)
    }

    /// Storage under a custom store name in `dir`.
    #[must_use]
    pub fn with_name(dir: impl AsRef<Path>, name: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{name}.json")),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CartStorage for FileCartStorage {
    fn load(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(document) => Ok(Some(document)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error),
        }
    }

    fn save(&self, document: &str) -> io::Result<()> {
        fs::write(&self.path, document)
    }
}

/// In-memory backend for tests. Clones share the same document.
#[derive(Debug, Clone, Default)]
pub struct MemoryCartStorage {
    document: Arc<Mutex<Option<String>>>,
}

impl MemoryCartStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStorage for MemoryCartStorage {
    fn load(&self) -> io::Result<Option<String>> {
        self.document
            .lock()
            .map_err(|_poisoned| io::Error::other("cart storage lock poisoned"))
            .map(|guard| guard.clone())
    }

    fn save(&self, document: &str) -> io::Result<()> {
        let mut guard = self
            .document
            .lock()
            .map_err(|_poisoned| io::Error::other("cart storage lock poisoned"))?;

        *guard = Some(document.to_string());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn file_storage_uses_the_fixed_store_name() {
        let storage = FileCartStorage::new("/tmp/carts");

        assert!(storage.path().ends_with("cart-store.json"));
    }

    #[test]
    fn file_storage_load_before_first_save_is_none() -> TestResult {
        let dir = tempfile::tempdir()?;
        let storage = FileCartStorage::new(dir.path());

        assert_eq!(storage.load()?, None);

        Ok(())
    }

    #[test]
    fn file_storage_round_trips_a_document() -> TestResult {
        let dir = tempfile::tempdir()?;
        let storage = FileCartStorage::new(dir.path());

        storage.save("{\"products\":[]}")?;

        assert_eq!(storage.load()?, Some("{\"products\":[]}".to_string()));

        Ok(())
    }

    #[test]
    fn memory_storage_clones_share_the_document() -> TestResult {
        let storage = MemoryCartStorage::new();
        let twin = storage.clone();

        storage.save("doc")?;

        assert_eq!(twin.load()?, Some("doc".to_string()));

        Ok(())
    }
}
