// file: src/models/path_collection.rs
// description: ordered collection of discovered file path entries
// reference: internal data structures

/// Paths in discovery order. Duplicates are kept, empty entries never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathCollection {
    entries: Vec<String>,
}

impl PathCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the entry was empty and therefore skipped.
    pub fn push(&mut self, entry: impl Into<String>) -> bool {
        let entry = entry.into();
        if entry.is_empty() {
            return false;
        }
        self.entries.push(entry);
        true
    }

    pub fn extend<I, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for entry in entries {
            self.push(entry);
        }
    }

    /// Splits raw command output into entries, dropping blank lines.
    pub fn from_lines(raw: &str) -> Self {
        let mut collection = Self::new();
        collection.extend(raw.lines());
        collection
    }

    /// Splits `-z` / `-print0` style output. Names may hold quotes, tabs or newlines.
    pub fn from_nul_separated(raw: &[u8]) -> Self {
        let mut collection = Self::new();
        collection.extend(
            raw.split(|&b| b == 0)
                .map(|chunk| String::from_utf8_lossy(chunk).into_owned()),
        );
        collection
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.entries
    }
}
