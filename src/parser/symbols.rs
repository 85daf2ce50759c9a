//! Fixed symbol set for one library.
//!
//! The set holds every qualified member name (`"<prefix>.<member>"`) that
//! counts as a genuine library entry point. It is supplied explicitly, either
//! as a member list or as a file with one member per line.

use crate::utils::error::LoadError;
use log::debug;
use std::collections::HashSet;
use std::path::Path;

/// Qualified member names of one library, plus its prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolSet {
    prefix: String,
    symbols: HashSet<String>,
}

impl SymbolSet {
    /// Create an empty set for `prefix`
    ///
    /// # Errors
    /// * `LoadError::InvalidPrefix` - prefix is empty or contains whitespace
    pub fn new(prefix: impl Into<String>) -> Result<Self, LoadError> {
        let prefix = prefix.into();
        validate_prefix(&prefix)?;

        Ok(Self {
            prefix,
            symbols: HashSet::new(),
        })
    }

    /// Build a set from member names, qualifying each with `prefix`
    pub fn from_members<I, S>(prefix: impl Into<String>, members: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new(prefix)?;
        set.extend(members);
        Ok(set)
    }

    /// Load members from a file: one per line, `#` comments and blanks ignored
    ///
    /// # Errors
    /// * `LoadError::ReadFailed` - file missing or unreadable
    pub fn load(prefix: impl Into<String>, path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let mut set = Self::new(prefix)?;

        debug!("Loading symbols for '{}' from: {}", set.prefix, path.display());

        let content = std::fs::read_to_string(path).map_err(|source| LoadError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;

        set.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        );

        Ok(set)
    }

    /// Add members; names already carrying `"<prefix>."` are kept as-is
    pub fn extend<I, S>(&mut self, members: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for member in members {
            let member = member.as_ref().trim();
            if member.is_empty() {
                continue;
            }

            let qualified = if self.is_qualified(member) {
                member.to_string()
            } else {
                self.qualify(member)
            };
            self.symbols.insert(qualified);
        }
    }

    /// Library prefix used for qualification
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Render `name` as `"<prefix>.<name>"`
    pub fn qualify(&self, name: &str) -> String {
        format!("{}.{}", self.prefix, name)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.symbols.contains(symbol)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    fn is_qualified(&self, member: &str) -> bool {
        member
            .strip_prefix(self.prefix.as_str())
            .is_some_and(|rest| rest.starts_with('.'))
    }
}

fn validate_prefix(prefix: &str) -> Result<(), LoadError> {
    if prefix.is_empty() || prefix.chars().any(char::is_whitespace) {
        return Err(LoadError::InvalidPrefix(prefix.to_string()));
    }
    Ok(())
}
