use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, warn};

pub const DEFAULT_SKIP_FILE: &str = "skip_names.txt";

/// Buyer ids that never receive a reminder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkipSet {
    names: HashSet<String>,
}

impl SkipSet {
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names
                .into_iter()
                .map(|n| {
                    let name: String = n.into();
                    name.trim().to_string()
                })
                .filter(|n| !n.is_empty())
                .collect(),
        }
    }

    /// One buyer id per line; blank lines are ignored.
    pub fn parse(contents: &str) -> Self {
        Self::from_names(contents.lines())
    }

    pub fn load(path: &Path) -> std::io::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let set = Self::parse(&contents);
        debug!("Loaded {} names from {}", set.len(), path.display());
        Ok(set)
    }

    /// Combine the `--skip-names` list with the skip file.
    ///
    /// The file replaces the flag list outright; the flag names only survive
    /// when no file contents are given.
    pub fn resolve(flag_names: &[String], file: Option<SkipSet>) -> Self {
        match file {
            Some(file_set) => {
                if !flag_names.is_empty() {
                    warn!(
                        "Ignoring {} name(s) from --skip-names: the skip file takes precedence",
                        flag_names.len()
                    );
                }
                file_set
            }
            None => Self::from_names(flag_names.iter().cloned()),
        }
    }

    pub fn contains(&self, buyer: &str) -> bool {
        self.names.contains(buyer)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
