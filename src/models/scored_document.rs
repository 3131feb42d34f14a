use crate::types::{DocumentId, RelevanceScore};

/// A document id paired with its accumulated relevance for one query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredDocument {
    pub document_id: DocumentId,
    pub relevance: RelevanceScore,
}
