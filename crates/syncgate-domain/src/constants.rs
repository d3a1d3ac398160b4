//! Domain layer constants

/// Store name used for browsing history
pub const HISTORY_STORE: &str = "history";

/// Store name used for bookmarks
pub const BOOKMARKS_STORE: &str = "bookmarks";

