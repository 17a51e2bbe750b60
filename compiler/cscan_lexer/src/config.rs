//! Scanner configuration.

/// Options for one scan.
///
/// `Default` enables every check and accepts any source the position
/// types can address.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LexerConfig {
    /// Largest accepted source, in bytes. Capped at `u32::MAX`.
    pub max_source_len: usize,
    /// Track `( ) { } [ ]` balance and report unmatched delimiters.
    pub track_delimiters: bool,
    /// Report `.` surrounded by whitespace between identifiers (`x . y`).
    pub flag_spaced_member_access: bool,
}

impl LexerConfig {
    /// Effective size limit after capping at `u32::MAX`.
    pub fn source_limit(&self) -> usize {
        self.max_source_len.min(u32::MAX as usize)
    }

    #[must_use]
    pub fn with_max_source_len(mut self, max_source_len: usize) -> Self {
        self.max_source_len = max_source_len;
        self
    }

    #[must_use]
    pub fn with_delimiter_tracking(mut self, enabled: bool) -> Self {
        self.track_delimiters = enabled;
        self
    }

    #[must_use]
    pub fn with_spaced_member_access_check(mut self, enabled: bool) -> Self {
        self.flag_spaced_member_access = enabled;
        self
    }
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig {
            max_source_len: u32::MAX as usize,
            track_delimiters: true,
            flag_spaced_member_access: true,
        }
    }
}
