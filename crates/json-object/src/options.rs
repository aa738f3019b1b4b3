//! Parser configuration.

/// Knobs for [`parse_with`](crate::parse_with) and
/// [`parse_document_with`](crate::parse_document_with).
///
/// ```
/// use json_object::ParseOptions;
///
/// let options = ParseOptions::new().max_depth(8).allow_trailing(true);
/// assert_eq!(options.max_depth, 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Deepest container nesting accepted. The root container is depth 1.
    pub max_depth: usize,
    /// Let `parse_document_with` ignore content after the first value.
    pub allow_trailing: bool,
}

impl ParseOptions {
    pub const DEFAULT_MAX_DEPTH: usize = 128;

    pub const fn new() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            allow_trailing: false,
        }
    }

    pub const fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub const fn allow_trailing(mut self, allow_trailing: bool) -> Self {
        self.allow_trailing = allow_trailing;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::new()
    }
}
