use crate::models::ScoredDocument;
use crate::types::DocumentRelevanceMap;

/// Sorts a per-query relevance accumulator into ranked results.
///
/// This function takes a `DocumentRelevanceMap`, which maps document ids to
/// their accumulated relevance for one query, and returns a sorted vector of
/// `ScoredDocument` entries.
///
/// ### Sorting Order:
/// - **Primary:** Sorts by relevance in descending order (higher relevance first).
/// - **Secondary:** If two documents have the same relevance, sorts by
///   document id in ascending order for deterministic ordering.
///
/// ### Example:
/// ```rust
/// use search_server::types::DocumentRelevanceMap;
/// use search_server::{sort_results, ScoredDocument};
///
/// let mut document_to_relevance = DocumentRelevanceMap::new();
/// document_to_relevance.insert(0, 0.25);
/// document_to_relevance.insert(1, 0.75);
/// document_to_relevance.insert(2, 0.25);
///
/// let sorted = sort_results(document_to_relevance);
/// assert_eq!(sorted, vec![
///     ScoredDocument { document_id: 1, relevance: 0.75 },
///     ScoredDocument { document_id: 0, relevance: 0.25 },
///     ScoredDocument { document_id: 2, relevance: 0.25 },
/// ]);
/// ```
pub fn sort_results(document_to_relevance: DocumentRelevanceMap) -> Vec<ScoredDocument> {
    let mut sorted_results: Vec<ScoredDocument> = document_to_relevance
        .into_iter()
        .map(|(document_id, relevance)| ScoredDocument {
            document_id,
            relevance,
        })
        .collect();

    sorted_results.sort_by(|a, b| {
        b.relevance
            .partial_cmp(&a.relevance) // Sort by relevance (descending)
            .unwrap_or(std::cmp::Ordering::Equal) // Handle NaN gracefully
            .then_with(|| a.document_id.cmp(&b.document_id)) // Secondary sort by document id (ascending)
    });

    sorted_results
}
