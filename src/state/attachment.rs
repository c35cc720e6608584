//! Attachment selection rules for the consultation form.
//!
//! Sizes come straight from the DOM `File` object and stay `f64` the way
//! the browser reports them.

#[cfg(test)]
#[path = "attachment_test.rs"]
mod attachment_test;

use thiserror::Error;

/// Hard cap on attachment size.
pub const MAX_ATTACHMENT_BYTES: f64 = 5.0 * 1024.0 * 1024.0;

/// MIME types accepted directly. `application/octet-stream` stays in the
/// list because some browsers report Word documents that way.
const ACCEPTED_MIME_TYPES: [&str; 4] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/octet-stream",
];

/// Extensions accepted even when the reported MIME type is unknown.
const ACCEPTED_EXTENSIONS: [&str; 3] = ["pdf", "doc", "docx"];

/// Metadata for the one selectable attachment, held between selection and
/// submission.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub size_bytes: f64,
    pub mime_type: String,
}

/// Why a picked file was refused. The `Display` text is shown verbatim as
/// the rejection toast description.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AttachmentError {
    #[error("{name} is not a PDF or Word document.")]
    UnsupportedType { name: String },
    #[error("{name} is larger than the 5MB attachment limit.")]
    TooLarge { name: String },
}

/// Lowercased substring after the last `.`; empty when there is none.
#[must_use]
pub fn file_extension(name: &str) -> String {
    name.rfind('.')
        .map(|idx| name[idx + 1..].to_ascii_lowercase())
        .unwrap_or_default()
}

/// Acceptance rules applied on picker change. MIME type and extension are
/// a permissive OR: either one matching suffices.
///
/// # Errors
///
/// Returns the rejection reason, naming the offending file.
pub fn validate(file: &SelectedFile) -> Result<(), AttachmentError> {
    let mime_ok = ACCEPTED_MIME_TYPES.contains(&file.mime_type.as_str());
    let ext = file_extension(&file.name);
    let ext_ok = ACCEPTED_EXTENSIONS.contains(&ext.as_str());
    if !mime_ok && !ext_ok {
        return Err(AttachmentError::UnsupportedType { name: file.name.clone() });
    }
    if file.size_bytes > MAX_ATTACHMENT_BYTES {
        return Err(AttachmentError::TooLarge { name: file.name.clone() });
    }
    Ok(())
}
