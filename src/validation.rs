// SPDX-License-Identifier: MPL-2.0
//! Client-side checks run before an analysis request leaves the app.
//!
//! Submission is validated in a fixed order, stopping at the first
//! failure. Nothing here touches the network: a failed check surfaces
//! a localized message and leaves the form editable.

use std::path::{Path, PathBuf};

/// Largest accepted resume upload, in bytes.
pub const MAX_CV_BYTES: u64 = 10 * 1024 * 1024;

/// A resume file the user picked, with its size captured at selection
/// time so validation does not have to re-stat the file on every keypress.
#[derive(Debug, Clone, PartialEq)]
pub struct CvSelection {
    pub path: PathBuf,
    pub size: u64,
}

impl CvSelection {
    /// File name component used for display and as the multipart part name.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// First validation failure found for a submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormIssue {
    UrlRequired,
    UrlInvalid,
    CvRequired,
    CvNotPdf,
    CvEmpty,
    CvTooLarge,
}

impl FormIssue {
    pub fn i18n_key(&self) -> &'static str {
        match self {
            FormIssue::UrlRequired => "error-url-required",
            FormIssue::UrlInvalid => "error-url-invalid",
            FormIssue::CvRequired => "error-cv-required",
            FormIssue::CvNotPdf => "error-cv-type",
            FormIssue::CvEmpty => "error-cv-empty",
            FormIssue::CvTooLarge => "error-cv-size",
        }
    }
}

/// Returns true when the string parses as an absolute URL with an
/// `http` or `https` scheme. Any other scheme is rejected even if the
/// URL itself is well formed.
pub fn is_valid_job_url(raw: &str) -> bool {
    match reqwest::Url::parse(raw) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// Returns true when the file name ends in `.pdf`, compared
/// case-insensitively so `CV.PDF` is accepted.
pub fn has_pdf_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

/// Validates a submission attempt in fixed order: URL present, URL
/// well formed, file attached, file is a PDF, file non-empty, file
/// within the size limit. The first failed check wins.
pub fn validate_submission(
    job_url: &str,
    cv: Option<&CvSelection>,
) -> std::result::Result<(), FormIssue> {
    let trimmed = job_url.trim();
    if trimmed.is_empty() {
        return Err(FormIssue::UrlRequired);
    }
    if !is_valid_job_url(trimmed) {
        return Err(FormIssue::UrlInvalid);
    }
    let Some(selection) = cv else {
        return Err(FormIssue::CvRequired);
    };
    if !has_pdf_extension(&selection.path) {
        return Err(FormIssue::CvNotPdf);
    }
    // A 0-byte PDF has nothing to parse server-side.
    if selection.size == 0 {
        return Err(FormIssue::CvEmpty);
    }
    if selection.size > MAX_CV_BYTES {
        return Err(FormIssue::CvTooLarge);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf(size: u64) -> CvSelection {
        CvSelection {
            path: PathBuf::from("/home/user/resume.pdf"),
            size,
        }
    }

    #[test]
    fn accepts_http_and_https_urls() {
        assert!(is_valid_job_url("http://example.com/jobs/42"));
        assert!(is_valid_job_url("https://example.com/jobs/42"));
    }

    #[test]
    fn rejects_other_schemes_and_garbage() {
        assert!(!is_valid_job_url("ftp://example.com/jobs"));
        assert!(!is_valid_job_url("file:///etc/passwd"));
        assert!(!is_valid_job_url("not a url"));
        assert!(!is_valid_job_url("example.com/jobs"));
    }

    #[test]
    fn pdf_extension_is_case_insensitive() {
        assert!(has_pdf_extension(Path::new("resume.pdf")));
        assert!(has_pdf_extension(Path::new("RESUME.PDF")));
        assert!(has_pdf_extension(Path::new("Resume.Pdf")));
        assert!(!has_pdf_extension(Path::new("resume.docx")));
        assert!(!has_pdf_extension(Path::new("resume")));
    }

    #[test]
    fn empty_url_fails_before_anything_else() {
        let cv = pdf(1024);
        assert_eq!(
            validate_submission("   ", Some(&cv)),
            Err(FormIssue::UrlRequired)
        );
    }

    #[test]
    fn invalid_url_reported_before_missing_file() {
        assert_eq!(
            validate_submission("nonsense", None),
            Err(FormIssue::UrlInvalid)
        );
    }

    #[test]
    fn missing_file_reported_when_url_is_fine() {
        assert_eq!(
            validate_submission("https://example.com/jobs/1", None),
            Err(FormIssue::CvRequired)
        );
    }

    #[test]
    fn wrong_extension_reported_before_size() {
        let cv = CvSelection {
            path: PathBuf::from("/home/user/resume.docx"),
            size: MAX_CV_BYTES + 1,
        };
        assert_eq!(
            validate_submission("https://example.com/jobs/1", Some(&cv)),
            Err(FormIssue::CvNotPdf)
        );
    }

    #[test]
    fn empty_file_rejected() {
        let cv = pdf(0);
        assert_eq!(
            validate_submission("https://example.com/jobs/1", Some(&cv)),
            Err(FormIssue::CvEmpty)
        );
    }

    #[test]
    fn oversized_file_rejected() {
        let cv = pdf(MAX_CV_BYTES + 1);
        assert_eq!(
            validate_submission("https://example.com/jobs/1", Some(&cv)),
            Err(FormIssue::CvTooLarge)
        );
    }

    #[test]
    fn file_at_exact_limit_is_accepted() {
        let cv = pdf(MAX_CV_BYTES);
        assert_eq!(validate_submission("https://example.com/jobs/1", Some(&cv)), Ok(()));
    }

    #[test]
    fn issue_keys_cover_every_variant() {
        let issues = [
            FormIssue::UrlRequired,
            FormIssue::UrlInvalid,
            FormIssue::CvRequired,
            FormIssue::CvNotPdf,
            FormIssue::CvEmpty,
            FormIssue::CvTooLarge,
        ];
        for issue in issues {
            assert!(issue.i18n_key().starts_with("error-"));
        }
    }
}
