// Configuration constants for the parser module
pub const DEFAULT_MAX_DEPTH: usize = 512;
// Bounds operator chains; evaluation and rendering recurse once per tree level
pub const DEFAULT_MAX_TREE_DEPTH: usize = 2048;
