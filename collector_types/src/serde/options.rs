use crate::serde::TagDialect;

pub const DEFAULT_MAX_DEPTH: usize = 64;
/// Hard ceiling on [`DecodeOptions::max_depth`]. Larger settings are clamped.
pub const MAX_DEPTH_LIMIT: usize = 512;

/// Knobs for one decode call.
#[derive(Clone, Copy, Debug)]
pub struct DecodeOptions {
    /// Deepest allowed list/set nesting. A top-level field value is at depth 1.
    /// Never more than [`MAX_DEPTH_LIMIT`] takes effect.
    pub max_depth: usize,
    pub dialect: TagDialect,
    /// When set, running out of bytes at a field boundary is a truncation
    /// rather than an implicit end of record.
    pub require_end_marker: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            dialect: TagDialect::default(),
            require_end_marker: false,
        }
    }
}

impl DecodeOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.min(MAX_DEPTH_LIMIT);
        self
    }

    /// The bound actually enforced, even when `max_depth` was assigned directly.
    pub fn effective_max_depth(&self) -> usize {
        self.max_depth.min(MAX_DEPTH_LIMIT)
    }

    pub fn with_dialect(mut self, dialect: TagDialect) -> Self {
        self.dialect = dialect;
        self
    }
    pub fn with_require_end_marker(mut self, require_end_marker: bool) -> Self {
        self.require_end_marker = require_end_marker;
        self
    }
}
