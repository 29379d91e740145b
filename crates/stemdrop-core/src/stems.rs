//! The downloadable stems list.
//!
//! `GET /stems` returns a JSON array of artifact names, ordered by the
//! server. Names are relative paths under the server's output directory
//! (the separator is `/`), so download links encode the whole name as a
//! single path component.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Path prefix for artifact downloads.
pub const DOWNLOAD_PATH: &str = "/download";

/// Characters escaped when a stem name becomes a path component.
///
/// Matches `encodeURIComponent`: everything but alphanumerics and
/// `- _ . ! ~ * ' ( )` is percent-encoded, including `/`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// One server-side artifact available for download.
///
/// Nothing but the name is known client-side. Deserializes from the
/// bare JSON string the server returns.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(transparent)]
pub struct StemEntry {
    name: String,
}

impl StemEntry {
    /// Wrap a server-provided artifact name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The raw name, as rendered in the list.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Href for the download anchor: `/download/{percent-encoded name}`.
    #[must_use]
    pub fn download_href(&self) -> String {
        format!(
            "{DOWNLOAD_PATH}/{}",
            utf8_percent_encode(&self.name, COMPONENT)
        )
    }
}

/// A `/stems` body that did not parse as an array of strings.
#[derive(Debug, thiserror::Error)]
#[error("malformed stems list: {0}")]
pub struct StemsError(#[from] serde_json::Error);

/// Parse a `/stems` response body.
///
/// Entry order is preserved as returned; the server attaches no meaning
/// to it and neither do we.
///
/// # Errors
///
/// Returns [`StemsError`] when the body is not a JSON array of strings.
pub fn parse_list(body: &str) -> Result<Vec<StemEntry>, StemsError> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_array_parses_to_no_entries() {
        let entries = parse_list("[]").unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn entries_keep_response_order() {
        let entries = parse_list(r#"["drums.wav","bass.wav"]"#).unwrap();
        let names: Vec<&str> = entries.iter().map(StemEntry::name).collect();
        assert_eq!(names, ["drums.wav", "bass.wav"]);
    }

    #[test]
    fn malformed_bodies_are_rejected() {
        assert!(parse_list("not json").is_err());
        assert!(parse_list(r#"{"files":[]}"#).is_err());
        assert!(parse_list("[1,2]").is_err());
    }

    #[test]
    fn plain_name_is_not_escaped() {
        let entry = StemEntry::new("drums.wav");
        assert_eq!(entry.download_href(), "/download/drums.wav");
    }

    #[test]
    fn reserved_characters_are_escaped() {
        let entry = StemEntry::new("drums & bass.wav");
        assert_eq!(entry.download_href(), "/download/drums%20%26%20bass.wav");
    }

    #[test]
    fn directory_separator_is_escaped() {
        // The server returns paths relative to its output directory.
        let entry = StemEntry::new("my song/vocals.wav");
        assert_eq!(
            entry.download_href(),
            "/download/my%20song%2Fvocals.wav"
        );
    }

    #[test]
    fn unreserved_punctuation_survives() {
        // encodeURIComponent leaves - _ . ! ~ * ' ( ) alone.
        let entry = StemEntry::new("it's_(a)_mix!.wav");
        assert_eq!(entry.download_href(), "/download/it's_(a)_mix!.wav");
    }
}
