use super::*;

fn file(name: &str, size_bytes: f64, mime_type: &str) -> SelectedFile {
    SelectedFile {
        name: name.to_owned(),
        size_bytes,
        mime_type: mime_type.to_owned(),
    }
}

// =============================================================
// Extension extraction
// =============================================================

#[test]
fn extension_lowercases_after_last_dot() {
    assert_eq!(file_extension("Resume.PDF"), "pdf");
    assert_eq!(file_extension("archive.tar.gz"), "gz");
}

#[test]
fn extension_empty_without_dot() {
    assert_eq!(file_extension("README"), "");
    assert_eq!(file_extension("trailing."), "");
}

#[test]
fn extension_of_dotfile() {
    assert_eq!(file_extension(".docx"), "docx");
}

// =============================================================
// Acceptance matrix
// =============================================================

#[test]
fn accepts_known_mime_with_odd_extension() {
    let scan = file("scan.bin", 1024.0, "application/pdf");
    assert_eq!(validate(&scan), Ok(()));
}

#[test]
fn accepts_known_extension_with_odd_mime() {
    let brief = file("brief.docx", 1024.0, "text/plain");
    assert_eq!(validate(&brief), Ok(()));
}

#[test]
fn accepts_octet_stream_mime() {
    let blob = file("proposal.unknown", 1024.0, "application/octet-stream");
    assert_eq!(validate(&blob), Ok(()));
}

#[test]
fn rejects_when_neither_matches() {
    let shot = file("screenshot.png", 1024.0, "image/png");
    assert_eq!(
        validate(&shot),
        Err(AttachmentError::UnsupportedType { name: "screenshot.png".to_owned() })
    );
    assert!(
        validate(&shot)
            .expect_err("png should be rejected")
            .to_string()
            .contains("screenshot.png")
    );
}

// =============================================================
// Size cap
// =============================================================

#[test]
fn accepts_file_exactly_at_limit() {
    let brief = file("brief.pdf", MAX_ATTACHMENT_BYTES, "application/pdf");
    assert_eq!(validate(&brief), Ok(()));
}

#[test]
fn rejects_one_byte_over_limit() {
    let brief = file("brief.pdf", MAX_ATTACHMENT_BYTES + 1.0, "application/pdf");
    assert_eq!(
        validate(&brief),
        Err(AttachmentError::TooLarge { name: "brief.pdf".to_owned() })
    );
}

#[test]
fn wrong_type_reported_before_size() {
    let huge = file("movie.mp4", MAX_ATTACHMENT_BYTES * 2.0, "video/mp4");
    assert_eq!(
        validate(&huge),
        Err(AttachmentError::UnsupportedType { name: "movie.mp4".to_owned() })
    );
}
