//! Domain types for the quote store.

use serde::{Deserialize, Serialize};

/// A person a quote is attributed to. Names are case-sensitive unique keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: i64,
    pub name: String,
}

/// A stored quote, referencing its author by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub id: i64,
    pub author_id: i64,
    pub content: String,
}

/// A quote joined with its author's name, as returned by the listing query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteEntry {
    pub author: String,
    pub content: String,
}

impl std::fmt::Display for QuoteEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]: \"{}\"", self.author, self.content)
    }
}
