//! Binary content referenced by a record field.
//!
//! An attachment either points at a permanent asset bundled with the page or
//! at a transient, session-scoped resource created from an upload. Only the
//! latter must be released, and only once; `Attachment` is deliberately not
//! `Clone` so the owning record is the single holder of the handle.

/// Session-scoped reference created by a `TransientStore`.
#[derive(Debug, PartialEq, Eq)]
pub struct TransientHandle(String);

impl TransientHandle {
    pub(crate) fn new(url: String) -> Self {
        Self(url)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum AttachmentSource {
    /// Asset shipped with the page, e.g. `/images/atax-airdale.jpeg`.
    BuiltIn(String),
    Transient(TransientHandle),
}

#[derive(Debug, PartialEq, Eq)]
pub struct Attachment {
    name: String,
    source: AttachmentSource,
}

impl Attachment {
    pub fn built_in(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: AttachmentSource::BuiltIn(path.into()),
        }
    }

    pub(crate) fn transient(handle: TransientHandle, name: String) -> Self {
        Self {
            name,
            source: AttachmentSource::Transient(handle),
        }
    }

    /// Display name derived from the file name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> &AttachmentSource {
        &self.source
    }

    /// Value suitable for an `<img src>`.
    pub fn url(&self) -> &str {
        match &self.source {
            AttachmentSource::BuiltIn(path) => path,
            AttachmentSource::Transient(handle) => handle.as_str(),
        }
    }

    pub fn is_transient(&self) -> bool {
        matches!(self.source, AttachmentSource::Transient(_))
    }
}
