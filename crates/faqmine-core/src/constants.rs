/// faqmine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Subcluster count reported for a parent group that produced no valid split.
/// Such a group contributes nothing to the global pool.
pub const SKIP_SENTINEL_K: usize = 1;

/// Separator placed between items when ordered texts are flattened into one field.
pub const ITEM_DELIMITER: &str = "|||";

/// Escape character protecting literal pipes and backslashes inside joined items.
pub const ESCAPE_CHAR: char = '\\';
