use crate::constants::MAX_RESULT_DOCUMENT_COUNT;
use crate::models::{Error, Query, ScoredDocument, StopWordSet};
use crate::types::{DocumentId, DocumentRelevanceMap, TermFrequency, Token, TokenRef};
use crate::utils::{count_token_frequencies, sort_results, split_into_words};
use std::collections::BTreeMap;

/// In-memory TF-IDF search engine over a bulk-loaded document corpus.
///
/// The engine owns an inverted index mapping each token to the documents
/// containing it, together with the token's per-document term frequency.
/// Stop words are frozen at construction, documents are then ingested with
/// dense sequential ids, and finally queries are served. Relevance scoring
/// reads the live document count and per-term document counts, so ingestion
/// must be complete before the first query for cross-document scores to be
/// meaningful. The engine is a single-owner, single-thread structure with no
/// internal synchronization.
#[derive(Debug)]
pub struct SearchServer {
    /// token -> document id -> term frequency. Ordered maps keep the
    /// term-to-document traversal deterministic with ascending document ids.
    word_to_document_frequencies: BTreeMap<Token, BTreeMap<DocumentId, TermFrequency>>,
    stop_words: StopWordSet,
    document_count: usize,
}

impl SearchServer {
    pub fn new(stop_words: StopWordSet) -> Self {
        SearchServer {
            word_to_document_frequencies: BTreeMap::new(),
            stop_words,
            document_count: 0,
        }
    }

    /// Total number of ingested documents, including documents whose content
    /// was empty after stop-word filtering.
    pub fn document_count(&self) -> usize {
        self.document_count
    }

    /// Ingests one document body under the given id.
    ///
    /// Ids are caller-assigned, sequential from 0 in insertion order; the
    /// engine does not validate them. Each distinct surviving token gets an
    /// index entry holding its term frequency (occurrences divided by the
    /// document's filtered token count). A document that is empty after
    /// stop-word filtering still counts toward the corpus size but writes no
    /// index entries.
    pub fn add_document(&mut self, document_id: DocumentId, text: &str) {
        let words = self.split_into_words_no_stop(text);
        self.document_count += 1;
        if words.is_empty() {
            return;
        }
        let total_words = words.len() as f64;
        for (word, occurrences) in count_token_frequencies(&words) {
            let term_frequency = occurrences as f64 / total_words;
            self.word_to_document_frequencies
                .entry(word)
                .or_default()
                .insert(document_id, term_frequency);
        }
    }

    /// Ranks the corpus against a free-text query.
    ///
    /// Every plus term present in the index contributes
    /// `tf * ln(document_count / documents_containing_term)` to the score of
    /// each document listing it; every minus term present in the index
    /// removes its documents from the results outright. Terms absent from
    /// the index contribute nothing. Results are sorted by descending
    /// relevance (ties broken by ascending document id) and capped at
    /// `MAX_RESULT_DOCUMENT_COUNT` entries; an empty query or a query with
    /// no matches returns an empty vector.
    ///
    /// Querying before any document was ingested is a usage error: the IDF
    /// denominator would be undefined, so it is reported as
    /// `Error::EmptyCorpusError` instead of producing non-finite scores.
    pub fn find_top_documents(&self, query_text: &str) -> Result<Vec<ScoredDocument>, Error> {
        if self.document_count == 0 {
            return Err(Error::EmptyCorpusError(
                "cannot answer queries before any document is ingested".to_string(),
            ));
        }

        let mut matched_documents = sort_results(self.find_all_documents(query_text));
        matched_documents.truncate(MAX_RESULT_DOCUMENT_COUNT);

        Ok(matched_documents)
    }

    /// True if the word survived stop-word filtering in at least one
    /// ingested document.
    pub fn contains_term(&self, word: &TokenRef) -> bool {
        self.word_to_document_frequencies.contains_key(word)
    }

    /// The stored term frequency for a (word, document) pair, if any.
    pub fn term_frequency(
        &self,
        word: &TokenRef,
        document_id: DocumentId,
    ) -> Option<TermFrequency> {
        self.word_to_document_frequencies
            .get(word)?
            .get(&document_id)
            .copied()
    }

    /// Number of documents containing the word, i.e. the IDF denominator.
    pub fn term_document_count(&self, word: &TokenRef) -> usize {
        self.word_to_document_frequencies
            .get(word)
            .map_or(0, BTreeMap::len)
    }

    fn split_into_words_no_stop(&self, text: &str) -> Vec<Token> {
        self.stop_words.filter(split_into_words(text))
    }

    fn parse_query(&self, query_text: &str) -> Query {
        Query::parse(self.split_into_words_no_stop(query_text))
    }

    fn find_all_documents(&self, query_text: &str) -> DocumentRelevanceMap {
        let query = self.parse_query(query_text);
        let mut document_to_relevance = DocumentRelevanceMap::new();

        for word in &query.plus {
            if let Some(document_frequencies) = self.word_to_document_frequencies.get(word) {
                let inverse_document_frequency =
                    (self.document_count as f64 / document_frequencies.len() as f64).ln();
                for (&document_id, &term_frequency) in document_frequencies {
                    *document_to_relevance.entry(document_id).or_insert(0.0) +=
                        term_frequency * inverse_document_frequency;
                }
            }
        }

        for word in &query.minus {
            if let Some(document_frequencies) = self.word_to_document_frequencies.get(word) {
                for &document_id in document_frequencies.keys() {
                    document_to_relevance.remove(&document_id);
                }
            }
        }

        document_to_relevance
    }
}
