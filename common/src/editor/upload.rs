//! Validation and lifecycle of uploaded files.
//!
//! `UploadPolicy::accept` turns a user-selected file into an `Attachment`
//! backed by a session-scoped resource from a `TransientStore`. The
//! attachment is released with `release` exactly once, when the record that
//! owns it leaves the collection. Built-in assets are never released.

use std::path::Path;

use crate::error::EditorError;
use crate::model::attachment::{Attachment, AttachmentSource, TransientHandle};

/// A file as handed over by the file input, with its bytes already read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    /// Media type as declared by the platform; may be empty.
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Creates and revokes session-scoped references to binary content.
pub trait TransientStore {
    /// Returns a URL-like reference to `bytes`.
    fn create(&mut self, bytes: &[u8], mime: &str) -> Result<String, EditorError>;
    fn revoke(&mut self, reference: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadPolicy {
    /// Accepted media types, lowercase.
    pub allowed: &'static [&'static str],
    /// Human name of the accepted format, used in rejections.
    pub label: &'static str,
    /// Value for the `accept` attribute of the file input.
    pub accept_attr: &'static str,
}

pub const JPEG_ONLY: UploadPolicy = UploadPolicy {
    allowed: &["image/jpeg", "image/jpg", "image/pjpeg"],
    label: "JPG",
    accept_attr: ".jpg,.jpeg",
};

impl UploadPolicy {
    /// Effective media type: the declared one without parameters, or a guess
    /// from the file extension when nothing was declared.
    pub fn media_type(file: &SelectedFile) -> String {
        let declared = file
            .mime
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        if declared.is_empty() {
            mime_guess::from_path(&file.name)
                .first_raw()
                .unwrap_or_default()
                .to_string()
        } else {
            declared
        }
    }

    pub fn allows(&self, file: &SelectedFile) -> bool {
        let media_type = Self::media_type(file);
        self.allowed.contains(&media_type.as_str())
    }

    /// Validates `file` and creates its transient reference. Nothing is
    /// created when the type is rejected.
    pub fn accept(
        &self,
        file: &SelectedFile,
        store: &mut impl TransientStore,
    ) -> Result<Attachment, EditorError> {
        let media_type = Self::media_type(file);
        if !self.allowed.contains(&media_type.as_str()) {
            return Err(EditorError::UnsupportedFileType {
                declared: file.mime.clone(),
            });
        }
        let url = store.create(&file.bytes, &media_type)?;
        Ok(Attachment::transient(
            TransientHandle::new(url),
            display_name(&file.name),
        ))
    }

    pub fn rejection(&self) -> String {
        format!("Please upload a {} file", self.label)
    }
}

/// File name without its final extension.
pub fn display_name(file_name: &str) -> String {
    Path::new(file_name)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(file_name)
        .to_string()
}

/// Consumes the attachment, revoking its reference if it is transient.
pub fn release(attachment: Attachment, store: &mut impl TransientStore) {
    if let AttachmentSource::Transient(handle) = attachment.source() {
        store.revoke(handle.as_str());
    }
}

/// In-memory store for tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    next: u64,
    live: Vec<String>,
    revoked: Vec<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn live(&self) -> &[String] {
        &self.live
    }

    pub fn revoked(&self) -> &[String] {
        &self.revoked
    }
}

impl TransientStore for MemoryStore {
    fn create(&mut self, _bytes: &[u8], _mime: &str) -> Result<String, EditorError> {
        self.next += 1;
        let url = format!("blob:memory/{}", self.next);
        self.live.push(url.clone());
        Ok(url)
    }

    fn revoke(&mut self, reference: &str) {
        self.live.retain(|u| u != reference);
        self.revoked.push(reference.to_string());
    }
}
