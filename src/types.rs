use std::collections::{BTreeMap, HashMap};

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token as an owned `String`. Tokens are the basic units used for processing text.
/// Token identity is the exact character sequence; no case folding or normalization is applied.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// A unique identifier for an ingested document. Ids are dense integers assigned sequentially
/// from 0 in insertion order and are never reused.
pub type DocumentId = usize;

/// The fraction of a document's tokens (after stop-word filtering) equal to a given token.
/// Computed once at ingestion time; always within `(0, 1]` for stored entries.
pub type TermFrequency = f64;

/// The accumulated TF-IDF relevance of one document for one query. Exists only transiently
/// while a query is answered.
pub type RelevanceScore = f64;

/// A map of tokens to their occurrence counts within a single document.
/// The key is the `Token`, and the value is the number of occurrences.
pub type TokenFrequencyMap = HashMap<Token, usize>;

/// The per-query relevance accumulator, keyed by `DocumentId`. A `BTreeMap` so that iteration
/// always visits document ids in ascending order, which keeps tie handling deterministic.
pub type DocumentRelevanceMap = BTreeMap<DocumentId, RelevanceScore>;
