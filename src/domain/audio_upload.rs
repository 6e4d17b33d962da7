/// Raw audio accepted at the service boundary.
///
/// The upload is an explicit value, not a duck-typed "file-like" object: a
/// nameless or empty upload is rejected before any provider call is made.
#[derive(Debug, Clone)]
pub struct AudioUpload {
    pub filename: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl AudioUpload {
    pub fn new(filename: impl Into<String>, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            content_type,
            bytes,
        }
    }

    /// MIME type for the multipart part sent upstream.
    pub fn mime_type(&self) -> &str {
        self.content_type.as_deref().unwrap_or("audio/wav")
    }
}
