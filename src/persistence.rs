use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use crate::codec;
use crate::document::Document;
use crate::error::{PersistenceError, PersistenceResult};

/// Restores a document from a persisted blob, or starts a blank one.
///
/// An absent or unusable blob never fails the session; it is discarded with a
/// warning and a fresh document is returned.
pub fn restore_or_default(blob: Option<&str>) -> Document {
    match blob {
        Some(blob) => codec::decode(blob).unwrap_or_else(|err| {
            log::warn!("Discarding persisted document: {}", err);
            Document::new()
        }),
        None => Document::new(),
    }
}

/// Stores the single persisted blob of an editing session on disk
#[derive(Debug, Clone)]
pub struct SessionStore {
    /// Directory where the blob is stored
    state_dir: PathBuf,
    /// File name of the blob inside `state_dir`
    file_name: String,
}

impl SessionStore {
    pub fn new(state_dir: impl Into<PathBuf>) -> Self {
        Self {
            state_dir: state_dir.into(),
            file_name: "document.json".to_string(),
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn path(&self) -> PathBuf {
        self.state_dir.join(&self.file_name)
    }

    /// Writes the encoded document, replacing any previous blob
    pub fn save(&self, doc: &Document) -> PersistenceResult<()> {
        let blob = codec::encode(doc).map_err(PersistenceError::Encode)?;

        fs::create_dir_all(&self.state_dir)?;

        // Write next to the target and rename so a crash never leaves half a blob
        let path = self.path();
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, blob)?;
        fs::rename(&tmp, &path)?;

        log::info!("Saved document to {}", path.display());
        Ok(())
    }

    /// Loads the stored document, `Ok(None)` if nothing was saved yet
    pub fn load(&self) -> PersistenceResult<Option<Document>> {
        let path = self.path();
        let blob = match fs::read_to_string(&path) {
            Ok(blob) => blob,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let doc = codec::decode(&blob)?;
        log::info!("Loaded document from {}", path.display());
        Ok(Some(doc))
    }

    /// Loads the stored document, falling back to a blank one on any failure
    pub fn restore(&self) -> Document {
        match self.load() {
            Ok(Some(doc)) => doc,
            Ok(None) => Document::new(),
            Err(err) => {
                log::warn!("Starting with a blank document: {}", err);
                Document::new()
            }
        }
    }

    /// Removes the stored blob. Missing files are not an error.
    pub fn clear(&self) -> PersistenceResult<()> {
        match fs::remove_file(self.path()) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    pub fn state_dir(&self) -> &Path {
        &self.state_dir
    }
}
