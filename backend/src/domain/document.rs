//! Document aggregate and its validation rule.
//!
//! A document is identified by a store-assigned [`DocumentId`]. Its title and
//! signee are free text that must be non-empty once surrounding whitespace is
//! trimmed; the optional [`DocumentContent`] is unconstrained.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Error;

/// Store-assigned document identifier.
///
/// # Examples
/// ```
/// use documents_backend::domain::DocumentId;
///
/// let id = DocumentId::new(42);
/// assert_eq!(id.get(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(i64);

impl DocumentId {
    /// Wrap a raw identifier.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Return the raw identifier.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for DocumentId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Structured body of a document.
///
/// Persisted as a single serialised JSON value, so the shape can evolve
/// without touching the table definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentContent {
    /// Short heading shown above the body.
    #[serde(default)]
    pub header: String,
    /// Free-form body text.
    #[serde(default)]
    pub data: String,
}

impl DocumentContent {
    /// Build content from a header and body.
    pub fn new(header: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            data: data.into(),
        }
    }
}

/// Document fields supplied by a client before the store assigns an id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentDraft {
    /// Document title.
    pub title: String,
    /// Optional structured content.
    pub content: Option<DocumentContent>,
    /// Name of the person signing the document.
    pub signee: String,
}

impl DocumentDraft {
    /// Build a draft without content.
    pub fn new(title: impl Into<String>, signee: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: None,
            signee: signee.into(),
        }
    }

    /// Attach structured content.
    #[must_use]
    pub fn with_content(mut self, content: DocumentContent) -> Self {
        self.content = Some(content);
        self
    }

    /// Trim the title and signee, rejecting the draft when either is empty.
    ///
    /// The title is checked first, so a draft with both fields blank fails
    /// with [`crate::domain::ErrorCode::InvalidTitle`].
    ///
    /// # Examples
    /// ```
    /// use documents_backend::domain::{DocumentDraft, ErrorCode};
    ///
    /// let draft = DocumentDraft::new("  Lease  ", " Ana ").validate().expect("valid");
    /// assert_eq!(draft.title, "Lease");
    /// assert_eq!(draft.signee, "Ana");
    ///
    /// let err = DocumentDraft::new(" ", "Ana").validate().expect_err("blank title");
    /// assert_eq!(err.code(), ErrorCode::InvalidTitle);
    /// ```
    pub fn validate(mut self) -> Result<Self, Error> {
        trim_in_place(&mut self.title);
        trim_in_place(&mut self.signee);
        if self.title.is_empty() {
            return Err(Error::invalid_title());
        }
        if self.signee.is_empty() {
            return Err(Error::invalid_signee());
        }
        Ok(self)
    }

    /// Attach the store-assigned identifier.
    pub fn into_document(self, id: DocumentId) -> Document {
        let Self {
            title,
            content,
            signee,
        } = self;
        Document {
            id,
            title,
            content,
            signee,
        }
    }
}

/// A persisted document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Store-assigned identifier.
    pub id: DocumentId,
    /// Document title.
    pub title: String,
    /// Optional structured content.
    pub content: Option<DocumentContent>,
    /// Name of the person signing the document.
    pub signee: String,
}

impl Document {
    /// Apply the draft validation rule to an existing document.
    ///
    /// The identifier is carried through untouched.
    pub fn validate(self) -> Result<Self, Error> {
        let id = self.id;
        self.into_draft().validate().map(|draft| draft.into_document(id))
    }

    /// Drop the identifier, keeping the client-editable fields.
    pub fn into_draft(self) -> DocumentDraft {
        let Self {
            id: _,
            title,
            content,
            signee,
        } = self;
        DocumentDraft {
            title,
            content,
            signee,
        }
    }
}

fn trim_in_place(value: &mut String) {
    let trimmed = value.trim();
    if trimmed.len() != value.len() {
        *value = trimmed.to_owned();
    }
}
