//! File payload value objects for uploads and downloads.

use std::io;
use std::path::Path;

/// A file selected for upload (resume or cover letter)
#[derive(Debug, Clone, PartialEq)]
pub struct FileUpload {
    /// Name presented to the server (part of the multipart form)
    pub file_name: String,

    /// Raw file content
    pub bytes: Vec<u8>,
}

impl FileUpload {
    /// Creates an upload from an in-memory buffer
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Reads a file from disk into an upload
    ///
    /// The file name sent to the server is the path's final component.
    pub async fn from_path(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::InvalidInput, "path has no file name")
            })?
            .to_string();
        let bytes = tokio::fs::read(path).await?;

        Ok(Self { file_name, bytes })
    }

    /// Size of the file content in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the file content is empty
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// A file fetched from the API (resume or cover letter download)
#[derive(Debug, Clone, PartialEq)]
pub struct FileDownload {
    /// Raw file content
    pub bytes: Vec<u8>,

    /// Content type reported by the server
    pub content_type: Option<String>,

    /// File name from the Content-Disposition header, when the server set one
    pub file_name: Option<String>,
}

impl FileDownload {
    /// Creates a download from its parts
    pub fn new(bytes: Vec<u8>, content_type: Option<String>, file_name: Option<String>) -> Self {
        Self {
            bytes,
            content_type,
            file_name,
        }
    }
}
