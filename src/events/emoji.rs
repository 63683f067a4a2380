use std::collections::HashMap;

/// Category to decorative prefix lookup. Keys are matched case-insensitively.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmojiMap {
    by_category: HashMap<String, String>,
}

impl EmojiMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: &str, prefix: impl Into<String>) {
        let prefix = prefix.into();
        let key = normalize_category(category);
        if key.is_empty() || prefix.trim().is_empty() {
            return;
        }
        self.by_category.insert(key, prefix.trim().to_string());
    }

    /// Prefix for `category`; unknown or empty categories yield `None`.
    pub fn prefix_for(&self, category: &str) -> Option<&str> {
        self.by_category
            .get(&normalize_category(category))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_category.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_category.is_empty()
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for EmojiMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k.as_ref(), v);
        }
        map
    }
}

fn normalize_category(category: &str) -> String {
    category.trim().to_lowercase()
}
