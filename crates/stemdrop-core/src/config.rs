//! Upload configuration and client-side file acceptance.

/// File extensions the server can split into stems.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["mp3", "wav", "flac", "ogg", "m4a", "aac"];

/// Configuration for the upload widget.
///
/// Defaults match the server's expectations: multipart field `file`,
/// 100 MB cap, and a three minute timeout to cover the separation run
/// that happens while the request is held open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadConfig {
    /// Upload endpoint path.
    pub endpoint: &'static str,
    /// Multipart form field name for the file bytes.
    pub field_name: &'static str,
    /// Lowercase extension allow-list, matched case-insensitively.
    pub accepted_extensions: &'static [&'static str],
    /// Reject files larger than this before any network call.
    pub max_file_size_mb: u64,
    /// Abort an in-flight transfer after this many milliseconds.
    pub timeout_ms: u32,
    /// Static text shown in the empty drop zone.
    pub placeholder: &'static str,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            endpoint: "/upload",
            field_name: "file",
            accepted_extensions: ACCEPTED_EXTENSIONS,
            max_file_size_mb: 100,
            timeout_ms: 180_000,
            placeholder: "Drop audio files here to split into stems",
        }
    }
}

impl UploadConfig {
    /// Size cap in bytes.
    #[must_use]
    pub const fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_mb * 1024 * 1024
    }

    /// Render the allow-list as an `accept` attribute value
    /// (e.g. `".mp3,.wav,.flac"`).
    #[must_use]
    pub fn accept_attr(&self) -> String {
        self.accepted_extensions
            .iter()
            .map(|ext| format!(".{ext}"))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Check whether a filename carries an accepted extension.
    #[must_use]
    pub fn accepts_filename(&self, name: &str) -> bool {
        name.rsplit_once('.').is_some_and(|(_, ext)| {
            self.accepted_extensions
                .iter()
                .any(|a| a.eq_ignore_ascii_case(ext))
        })
    }

    /// Validate a file before any network call.
    ///
    /// # Errors
    ///
    /// Returns [`AcceptError::UnsupportedType`] for filenames outside the
    /// extension allow-list and [`AcceptError::TooLarge`] for files over
    /// the size cap.
    pub fn check_file(&self, name: &str, size_bytes: u64) -> Result<(), AcceptError> {
        if !self.accepts_filename(name) {
            return Err(AcceptError::UnsupportedType {
                filename: name.to_owned(),
            });
        }
        if size_bytes > self.max_file_size_bytes() {
            return Err(AcceptError::TooLarge {
                filename: name.to_owned(),
                limit_mb: self.max_file_size_mb,
            });
        }
        Ok(())
    }
}

/// Client-side rejection of a dropped file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AcceptError {
    /// The filename has no accepted audio extension.
    #[error("Unsupported file type: {filename}")]
    UnsupportedType {
        /// Name of the rejected file.
        filename: String,
    },
    /// The file exceeds the size cap.
    #[error("{filename} is larger than the {limit_mb} MB limit")]
    TooLarge {
        /// Name of the rejected file.
        filename: String,
        /// The cap it exceeded, in megabytes.
        limit_mb: u64,
    },
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_server_expectations() {
        let config = UploadConfig::default();
        assert_eq!(config.endpoint, "/upload");
        assert_eq!(config.field_name, "file");
        assert_eq!(config.max_file_size_mb, 100);
        assert_eq!(config.timeout_ms, 180_000);
    }

    #[test]
    fn accepts_all_listed_extensions() {
        let config = UploadConfig::default();
        for ext in ACCEPTED_EXTENSIONS {
            let name = format!("track.{ext}");
            assert!(
                config.accepts_filename(&name),
                "{name} should be accepted"
            );
        }
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let config = UploadConfig::default();
        assert!(config.accepts_filename("track.MP3"));
        assert!(config.accepts_filename("track.Flac"));
    }

    #[test]
    fn rejects_unlisted_or_missing_extensions() {
        let config = UploadConfig::default();
        assert!(!config.accepts_filename("notes.txt"));
        assert!(!config.accepts_filename("archive.tar.gz"));
        assert!(!config.accepts_filename("no-extension"));
        // The extension must follow a dot; a bare "mp3" is not one.
        assert!(!config.accepts_filename("mp3"));
    }

    #[test]
    fn check_file_rejects_wrong_type_before_size() {
        let config = UploadConfig::default();
        let result = config.check_file("movie.mkv", 1);
        assert!(matches!(
            result,
            Err(AcceptError::UnsupportedType { .. })
        ));
    }

    #[test]
    fn check_file_size_boundary() {
        let config = UploadConfig::default();
        let cap = config.max_file_size_bytes();
        // Exactly at the cap is still accepted; one byte over is not.
        assert_eq!(config.check_file("track.wav", cap), Ok(()));
        assert!(matches!(
            config.check_file("track.wav", cap + 1),
            Err(AcceptError::TooLarge { .. })
        ));
    }

    #[test]
    fn accept_error_messages_name_the_file() {
        let config = UploadConfig::default();
        let Err(err) = config.check_file("movie.mkv", 1) else {
            panic!("expected rejection");
        };
        assert_eq!(err.to_string(), "Unsupported file type: movie.mkv");

        let Err(err) = config.check_file("track.wav", u64::MAX) else {
            panic!("expected rejection");
        };
        assert_eq!(
            err.to_string(),
            "track.wav is larger than the 100 MB limit"
        );
    }

    #[test]
    fn accept_attr_lists_dotted_extensions() {
        let config = UploadConfig::default();
        assert_eq!(config.accept_attr(), ".mp3,.wav,.flac,.ogg,.m4a,.aac");
    }
}
