//! Ordered, de-duplicated list of competitor URLs collected by the form.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlList {
    items: Vec<String>,
}

impl UrlList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a trimmed URL. Returns `false` (and leaves the list alone) when
    /// the input is blank or already present.
    pub fn add(&mut self, input: &str) -> bool {
        let url = input.trim();
        if url.is_empty() || self.contains(url) {
            return false;
        }
        self.items.push(url.to_string());
        true
    }

    /// Remove the URL at `index`. Out-of-range indices are ignored.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn contains(&self, url: &str) -> bool {
        self.items.iter().any(|u| u == url)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.items.clone()
    }
}
