use crate::constants::{DEFAULT_MAX_DEPTH, DEFAULT_SCRATCH_CAPACITY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Accept `'...'` strings (values and object keys) next to `"..."`.
    pub allow_single_quoted_strings: bool,
    pub max_depth: usize,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_single_quoted_strings(mut self, allow: bool) -> Self {
        self.allow_single_quoted_strings = allow;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            allow_single_quoted_strings: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions {
    /// Byte capacity of the private arena used to decode pattern literals.
    pub scratch_capacity: usize,
    pub max_depth: usize,
}

impl MatchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scratch_capacity(mut self, scratch_capacity: usize) -> Self {
        self.scratch_capacity = scratch_capacity;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Options the matcher hands to the parser for literals and keys.
    pub(crate) fn literal_options(&self) -> ParseOptions {
        ParseOptions::new()
            .with_single_quoted_strings(true)
            .with_max_depth(self.max_depth)
    }
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            scratch_capacity: DEFAULT_SCRATCH_CAPACITY,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
