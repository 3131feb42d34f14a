mod constants;
pub use constants::MAX_RESULT_DOCUMENT_COUNT;
pub mod models;
pub use models::{Error, Query, ScoredDocument, SearchServer, StopWordSet};
pub mod types;
mod utils;
pub use types::{
    DocumentId, DocumentRelevanceMap, RelevanceScore, TermFrequency, Token, TokenFrequencyMap,
    TokenRef,
};
pub use utils::{count_token_frequencies, sort_results, split_into_words};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Builds a search engine over `documents` and answers a single query.
///
/// The stop-word set is frozen from `stop_word_text` before ingestion;
/// documents receive sequential ids starting at 0 in slice order. Returns
/// the ranked results, capped at [`MAX_RESULT_DOCUMENT_COUNT`] entries.
///
/// # Example
/// ```
/// use search_server::search_corpus;
///
/// let results = search_corpus(
///     "a the",
///     &["a cat sat", "the dog ran", "cat and dog played"],
///     "cat -dog",
/// ).unwrap();
///
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].document_id, 0);
/// ```
pub fn search_corpus(
    stop_word_text: &str,
    documents: &[&str],
    query: &str,
) -> Result<Vec<ScoredDocument>, Error> {
    let mut search_server = SearchServer::new(StopWordSet::from_text(stop_word_text));

    for (document_id, document) in documents.iter().enumerate() {
        search_server.add_document(document_id, document);
    }

    search_server.find_top_documents(query)
}
