/// Bounded record of committed queries, most recent first.
///
/// Backs the search-history screen: blank queries are skipped and a query
/// equal to the most recent entry is not recorded twice in a row.
#[derive(Clone, Debug)]
pub struct QueryHistory {
    entries: Vec<String>,
    max_entries: usize,
}

impl QueryHistory {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_entries,
        }
    }

    pub fn record(&mut self, query: &str) {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return;
        }
        if self.entries.first().is_some_and(|latest| latest == trimmed) {
            return;
        }
        self.entries.insert(0, trimmed.to_string());
        self.entries.truncate(self.max_entries);
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
