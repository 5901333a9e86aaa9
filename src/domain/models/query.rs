#[cfg(test)]
#[path = "query_test.rs"]
mod tests;

use serde_derive::Serialize;
use strum::EnumIter;

use super::SearchRequest;

/// The retrieval methods a query fragment can target. Serialized lowercase to
/// match the backend's method names and endpoint prefixes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, EnumIter, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum QueryType {
    Semantic,
    Ocr,
    Asr,
}

impl QueryType {
    pub fn endpoint(&self) -> String {
        return format!("{self}_search");
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryFragment {
    pub qtype: QueryType,
    pub value: String,
}

impl QueryFragment {
    pub fn new(qtype: QueryType) -> QueryFragment {
        return QueryFragment {
            qtype,
            value: "".to_string(),
        };
    }
}

/// The editable set of query fragments. Fragment order is the order types
/// were activated in; a freshly toggled-on type always starts empty.
pub struct QueryForm {
    fragments: Vec<QueryFragment>,
    pub focused: usize,
}

impl Default for QueryForm {
    fn default() -> QueryForm {
        return QueryForm {
            fragments: vec![QueryFragment::new(QueryType::Semantic)],
            focused: 0,
        };
    }
}

impl QueryForm {
    pub fn fragments(&self) -> &[QueryFragment] {
        return &self.fragments;
    }

    pub fn is_active(&self, qtype: QueryType) -> bool {
        return self.fragments.iter().any(|fragment| {
            return fragment.qtype == qtype;
        });
    }

    /// Activates a fresh empty fragment for `qtype`, or removes the existing
    /// one. Returns whether the type is active afterwards.
    pub fn toggle(&mut self, qtype: QueryType) -> bool {
        let position = self.fragments.iter().position(|fragment| {
            return fragment.qtype == qtype;
        });

        if let Some(idx) = position {
            self.fragments.remove(idx);
            if self.focused >= self.fragments.len() {
                self.focused = self.fragments.len().saturating_sub(1);
            }
            return false;
        }

        self.fragments.push(QueryFragment::new(qtype));
        self.focused = self.fragments.len() - 1;
        return true;
    }

    pub fn focus_next(&mut self) {
        if self.focused + 1 < self.fragments.len() {
            self.focused += 1;
        }
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.saturating_sub(1);
    }

    pub fn insert_char(&mut self, input: char) {
        if let Some(fragment) = self.fragments.get_mut(self.focused) {
            fragment.value.push(input);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(fragment) = self.fragments.get_mut(self.focused) {
            fragment.value.pop();
        }
    }

    pub fn semantic_value(&self) -> Option<&str> {
        return self
            .fragments
            .iter()
            .find(|fragment| {
                return fragment.qtype == QueryType::Semantic;
            })
            .map(|fragment| {
                return fragment.value.as_str();
            });
    }

    /// Builds the outgoing search request from the non-empty fragments.
    /// Returns `None` when every fragment is empty, in which case nothing
    /// must be dispatched.
    pub fn compose(&self, topk: usize) -> Option<SearchRequest> {
        let filled = self
            .fragments
            .iter()
            .filter(|fragment| {
                return !fragment.value.is_empty();
            })
            .collect::<Vec<&QueryFragment>>();

        if filled.is_empty() {
            return None;
        }

        if filled.len() == 1 {
            return Some(SearchRequest::Single {
                method: filled[0].qtype,
                query: filled[0].value.to_string(),
                topk,
            });
        }

        return Some(SearchRequest::Combined {
            queries: filled
                .iter()
                .map(|fragment| {
                    return fragment.value.to_string();
                })
                .collect(),
            methods: filled
                .iter()
                .map(|fragment| {
                    return fragment.qtype;
                })
                .collect(),
            topk,
        });
    }
}
