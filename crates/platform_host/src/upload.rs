//! Host file-handle contracts consumed by batch uploads.

/// One user-selected file as exposed by the host picker.
pub trait UploadSource {
    /// Raw file name.
    fn name(&self) -> String;

    /// Path relative to the picked folder, when the file came from a folder upload.
    fn relative_path(&self) -> Option<String>;

    /// Reported MIME type; may be empty.
    fn mime_type(&self) -> String;

    /// Size in bytes.
    fn size(&self) -> u64;

    /// Creates a revocable in-memory handle (object URL) resolving to the file contents.
    ///
    /// # Errors
    ///
    /// Returns an error when the host cannot expose the file contents.
    fn create_content_handle(&self) -> Result<String, String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// In-memory upload source for tests and non-browser targets.
pub struct MemoryUploadSource {
    name: String,
    relative_path: Option<String>,
    mime_type: String,
    size: u64,
    failure: Option<String>,
}

impl MemoryUploadSource {
    /// Creates a source with no relative path that succeeds.
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            relative_path: None,
            mime_type: mime_type.into(),
            size,
            failure: None,
        }
    }

    /// Sets the folder-relative path.
    pub fn with_relative_path(mut self, path: impl Into<String>) -> Self {
        self.relative_path = Some(path.into());
        self
    }

    /// Makes handle creation fail with `reason`.
    pub fn failing(mut self, reason: impl Into<String>) -> Self {
        self.failure = Some(reason.into());
        self
    }
}

impl UploadSource for MemoryUploadSource {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn relative_path(&self) -> Option<String> {
        self.relative_path.clone()
    }

    fn mime_type(&self) -> String {
        self.mime_type.clone()
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn create_content_handle(&self) -> Result<String, String> {
        match &self.failure {
            Some(reason) => Err(reason.clone()),
            None => Ok(format!("blob:memory/{}", self.name)),
        }
    }
}
