use std::fmt;

/// Maximum number of characters kept from a compiler or linker diagnostic.
pub const INFO_LOG_CAPACITY: usize = 512;

/// Bounded diagnostic text produced by shader compilation or linking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfoLog(String);

impl InfoLog {
    /// Creates a log, keeping at most [`INFO_LOG_CAPACITY`] characters.
    pub fn new(text: impl Into<String>) -> Self {
        let mut text = text.into();
        if let Some((cut, _)) = text.char_indices().nth(INFO_LOG_CAPACITY) {
            text.truncate(cut);
        }
        Self(text)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for InfoLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.trim_end())
    }
}
