use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::constants::defaults;
use crate::core::error::{HeaderStripError, Result};

use std::borrow::Cow;

static DEFAULT_RULES: Lazy<Vec<Regex>> = Lazy::new(|| {
    defaults::PATTERNS
        .iter()
        .map(|pattern| Regex::new(pattern).expect("Failed to compile default header pattern"))
        .collect()
});

/// Ordered list of patterns whose matches are cut out of a file's text.
#[derive(Debug, Clone)]
pub struct RemovalRules {
    patterns: Vec<Regex>,
}

impl Default for RemovalRules {
    fn default() -> Self {
        Self {
            patterns: DEFAULT_RULES.clone(),
        }
    }
}

impl RemovalRules {
    /// Compile `patterns` in order. Fails on the first invalid pattern or an
    /// empty list.
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|pattern| Regex::new(pattern.as_ref()))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        if patterns.is_empty() {
            return Err(HeaderStripError::Config(
                "At least one removal pattern is required".to_string(),
            ));
        }

        Ok(Self { patterns })
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(Regex::as_str)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Run every pattern over `text`, each on the output of the previous one.
    ///
    /// Returns `Cow::Borrowed` when nothing matched, so callers can skip the
    /// write by checking the variant or comparing with the input.
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        let mut current = Cow::Borrowed(text);
        for pattern in &self.patterns {
            let stripped = match strip_matches(pattern, &current) {
                Cow::Borrowed(_) => continue,
                Cow::Owned(stripped) => stripped,
            };
            current = Cow::Owned(stripped);
        }
        current
    }
}

/// Remove every match of `pattern` from `text`, leftmost-first.
///
/// Whitespace before a block belongs to the pattern. When nothing has been
/// kept ahead of a removed block, the whitespace after it is dropped too so
/// the file does not start with a blank line.
fn strip_matches<'t>(pattern: &Regex, text: &'t str) -> Cow<'t, str> {
    let mut matches = pattern.find_iter(text).peekable();
    if matches.peek().is_none() {
        return Cow::Borrowed(text);
    }

    let mut stripped = String::with_capacity(text.len());
    let mut kept_until = 0;

    for found in matches {
        let start = found.start().max(kept_until);
        stripped.push_str(&text[kept_until..start]);
        kept_until = found.end().max(kept_until);

        // Empty matches remove nothing and must not trim either
        if found.end() > found.start() && stripped.is_empty() {
            let rest = &text[kept_until..];
            kept_until += rest.len() - rest.trim_start().len();
        }
    }
    stripped.push_str(&text[kept_until..]);

    Cow::Owned(stripped)
}
