/// Case-insensitive substring filter over item content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    query: String,
    needle: String,
}

impl Filter {
    /// Returns `None` for a blank query, which callers treat as "no filter".
    pub fn new(query: &str) -> Option<Self> {
        if query.trim().is_empty() {
            return None;
        }
        Some(Self {
            query: query.to_string(),
            needle: query.to_lowercase(),
        })
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn matches(&self, content: &str) -> bool {
        content.to_lowercase().contains(&self.needle)
    }
}
