#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use super::ResultItem;

pub const DEFAULT_RESULT_LIMIT: usize = 15;

/// Shared session state: the current result set, the active semantic query,
/// and the requested result count. The result set is always the last
/// successful response verbatim; nothing is ever merged across requests.
pub struct SessionState {
    results: Vec<ResultItem>,
    pub active_query: String,
    pub result_limit: usize,
    seq: u64,
}

impl Default for SessionState {
    fn default() -> SessionState {
        return SessionState::new(DEFAULT_RESULT_LIMIT);
    }
}

impl SessionState {
    pub fn new(result_limit: usize) -> SessionState {
        return SessionState {
            results: vec![],
            active_query: "".to_string(),
            result_limit,
            seq: 0,
        };
    }

    pub fn results(&self) -> &[ResultItem] {
        return &self.results;
    }

    pub fn has_results(&self) -> bool {
        return !self.results.is_empty();
    }

    /// Wholesale replacement. Concurrent searches resolve last-writer-wins;
    /// the sequence number records each overwrite.
    pub fn replace_results(&mut self, results: Vec<ResultItem>) {
        self.results = results;
        self.seq += 1;
    }

    pub fn seq(&self) -> u64 {
        return self.seq;
    }
}
