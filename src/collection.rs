//! Ordered list of pane URLs; the single source of truth for what is persisted.
//!
//! Order is display order: entry `i` is rendered by slot `i`. An empty string
//! stands for a blank pane. Removing an entry shifts every later entry down
//! by one.

/// Pane URLs in slot order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaneCollection {
    entries: Vec<String>,
}

impl PaneCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collection holding `urls` in order
    pub fn from_urls(urls: Vec<String>) -> Self {
        Self { entries: urls }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Index of the first entry equal to `url`
    pub fn position(&self, url: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry == url)
    }

    /// Add an entry at the end and return its index
    pub fn append(&mut self, url: impl Into<String>) -> usize {
        self.entries.push(url.into());
        self.entries.len() - 1
    }

    /// Remove the first entry equal to `url`, returning its former index
    pub fn remove_by_url(&mut self, url: &str) -> Option<usize> {
        let index = self.position(url)?;
        self.entries.remove(index);
        Some(index)
    }

    /// Remove the entry at `index`, returning it
    pub fn remove_by_index(&mut self, index: usize) -> Option<String> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }

    pub fn close_all(&mut self) {
        self.entries.clear();
    }

    /// Replace the entry at `index`; `false` when out of range
    pub fn set_url(&mut self, index: usize, url: impl Into<String>) -> bool {
        match self.entries.get_mut(index) {
            Some(entry) => {
                *entry = url.into();
                true
            }
            None => false,
        }
    }
}
