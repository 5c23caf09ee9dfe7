use std::{collections::BTreeSet, path::Path};

use tracing::debug;

use crate::{
    core::{append_string, try_read_to_string},
    Result,
};

/// Teams already picked in earlier rounds, stored lowercase.
///
/// The backing file holds one team name per line and is only ever appended to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionHistory {
    names: BTreeSet<String>,
}

impl SelectionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse history file contents: one name per line, trimmed and lowercased.
    /// Blank lines are skipped.
    pub fn parse(contents: &str) -> Self {
        let names = contents
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|line| !line.is_empty())
            .collect();
        Self { names }
    }

    /// Read the whole history file. A missing file is an empty history.
    pub fn load(path: &Path) -> Result<Self> {
        match try_read_to_string(path)? {
            Some(contents) => {
                let history = Self::parse(&contents);
                debug!(path = %path.display(), count = history.len(), "loaded selection history");
                Ok(history)
            }
            None => {
                debug!(path = %path.display(), "no selection history yet");
                Ok(Self::new())
            }
        }
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&name.trim().to_lowercase())
    }

    /// Add a team in memory only.
    pub fn insert(&mut self, name: &str) -> bool {
        self.names.insert(name.trim().to_lowercase())
    }

    /// Append `name` (lowercased, newline-terminated) to the history file and
    /// remember it.
    pub fn record(&mut self, path: &Path, name: &str) -> Result<()> {
        let name = name.trim().to_lowercase();
        append_string(path, &format!("{name}\n"))?;
        debug!(path = %path.display(), team = %name, "recorded selection");
        self.names.insert(name);
        Ok(())
    }

    /// Stored names in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for SelectionHistory {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut history = Self::new();
        for name in iter {
            history.insert(name.as_ref());
        }
        history
    }
}
