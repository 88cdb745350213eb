/// Marker used when none is configured.
///
/// Matching the year-free prefix keeps files compliant across year boundaries.
pub const DEFAULT_MARKER: &str = "Copyright (c)";

/// Decides header compliance by plain substring search.
///
/// The marker may appear anywhere in the file; position is irrelevant. This is
/// what makes fix mode idempotent: an inserted header contains the marker, so
/// the next run classifies the file as compliant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMarker {
    text: String,
}

impl HeaderMarker {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns true if `content` contains the marker.
    ///
    /// Works on raw bytes so non-UTF-8 files are classified too.
    #[must_use]
    pub fn is_compliant(&self, content: &[u8]) -> bool {
        let needle = self.text.as_bytes();
        if needle.is_empty() {
            return true;
        }
        content.windows(needle.len()).any(|window| window == needle)
    }
}

impl Default for HeaderMarker {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER)
    }
}

#[cfg(test)]
#[path = "marker_tests.rs"]
mod tests;
