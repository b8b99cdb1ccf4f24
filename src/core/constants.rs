/// Application-wide constants to avoid magic values throughout the codebase.
///
/// The original tool hard-coded its root, extension and patterns; they live
/// here as defaults and are overridden through configuration.
/// Output format constants
pub mod output_formats {
    /// Text output format - one notice per rewritten file plus a summary line
    pub const TEXT: &str = "text";
    /// JSON output format - a single run summary object for automation
    pub const JSON: &str = "json";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 2] = [TEXT, JSON];
}

/// Default configuration values
pub mod defaults {
    /// Directory walked when neither the CLI nor a config file names one
    pub const ROOT: &str = "src/app/pages";
    /// File-name suffix of candidate files
    pub const EXTENSION: &str = ".html";

    /// Marker comment followed by the header block
    pub const MARKED_HEADER_PATTERN: &str =
        r#"(?s)\s*<!-- Top Header -->\s*<header class="top-header">.*?</header>"#;
    /// Header block on its own
    pub const BARE_HEADER_PATTERN: &str = r#"(?s)\s*<header class="top-header">.*?</header>"#;

    /// Removal patterns, applied in this order
    pub const PATTERNS: [&str; 2] = [MARKED_HEADER_PATTERN, BARE_HEADER_PATTERN];
}

/// Configuration file lookup
pub mod config_files {
    /// Name of the configuration file searched for in standard locations
    pub const FILE_NAME: &str = ".headerstrip.toml";
    /// How many parent directories are searched after the current one
    pub const MAX_PARENT_LEVELS: usize = 3;
}

/// Console messages
pub mod messages {
    /// Prefix of the notice printed for every rewritten file
    pub const REMOVED_HEADER: &str = "Removed header from";
}
