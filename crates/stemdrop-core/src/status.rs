//! The single status banner shown above the drop zone.
//!
//! Exactly one status is displayed at a time; every upload lifecycle
//! event overwrites it. With several uploads in flight the last event
//! to land wins -- there is no per-file banner.

use std::fmt;

/// Severity of the status banner, mapped to a CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// A transfer has started and the server has not answered yet.
    Pending,
    /// The server accepted and processed the file.
    Success,
    /// Validation, transport, or server failure.
    Error,
}

impl StatusKind {
    /// CSS class for the banner element.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Pending => "status",
            Self::Success => "status success",
            Self::Error => "status error",
        }
    }
}

/// Banner text plus severity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    /// Text shown to the user.
    pub text: String,
    /// Severity, mapped to a CSS class.
    pub kind: StatusKind,
}

impl Status {
    /// Banner set immediately before a transfer is issued.
    #[must_use]
    pub fn sending() -> Self {
        Self {
            text: "Processing file... This may take a few minutes.".to_owned(),
            kind: StatusKind::Pending,
        }
    }

    /// Banner for a completed upload.
    #[must_use]
    pub fn success() -> Self {
        Self {
            text: "File processed successfully! Check the stems list below.".to_owned(),
            kind: StatusKind::Success,
        }
    }

    /// Banner for a failed upload or rejected file.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            text: message.into(),
            kind: StatusKind::Error,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_classes_match_stylesheet() {
        assert_eq!(StatusKind::Pending.css_class(), "status");
        assert_eq!(StatusKind::Success.css_class(), "status success");
        assert_eq!(StatusKind::Error.css_class(), "status error");
    }

    #[test]
    fn sending_banner_is_pending() {
        let status = Status::sending();
        assert_eq!(status.kind, StatusKind::Pending);
        assert_eq!(
            status.text,
            "Processing file... This may take a few minutes."
        );
    }

    #[test]
    fn success_banner_has_fixed_text() {
        let status = Status::success();
        assert_eq!(status.kind, StatusKind::Success);
        assert_eq!(
            status.text,
            "File processed successfully! Check the stems list below."
        );
    }

    #[test]
    fn error_banner_carries_the_message() {
        let status = Status::error("disk full");
        assert_eq!(status.kind, StatusKind::Error);
        assert_eq!(status.text, "disk full");
        assert_eq!(status.to_string(), "disk full");
    }
}
