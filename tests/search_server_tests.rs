use search_server::{
    search_corpus, Error, Query, SearchServer, StopWordSet, MAX_RESULT_DOCUMENT_COUNT,
};

#[cfg(test)]
mod query_parsing_tests {
    use super::*;

    #[test]
    fn test_parse_partitions_plus_and_minus_terms() {
        let words = vec!["cat".to_string(), "-dog".to_string(), "bird".to_string()];

        let query = Query::parse(words);
        assert_eq!(query.plus, vec!["cat", "bird"]);
        assert_eq!(query.minus, vec!["dog"]);
    }

    #[test]
    fn test_parse_strips_only_the_leading_minus() {
        let query = Query::parse(vec!["--dog".to_string()]);
        assert_eq!(query.minus, vec!["-dog"]);
    }

    #[test]
    fn test_parse_keeps_bare_minus_as_empty_minus_term() {
        let query = Query::parse(vec!["-".to_string()]);
        assert!(query.plus.is_empty());
        assert_eq!(query.minus, vec![""]);
    }

    #[test]
    fn test_parse_treats_empty_tokens_as_plus_terms() {
        let query = Query::parse(vec!["".to_string(), "cat".to_string()]);
        assert_eq!(query.plus, vec!["", "cat"]);
        assert!(query.minus.is_empty());
    }
}

#[cfg(test)]
mod search_server_tests {
    use super::*;

    fn pets_search_server() -> SearchServer {
        let mut search_server = SearchServer::new(StopWordSet::from_text("a the"));
        search_server.add_document(0, "a cat sat");
        search_server.add_document(1, "the dog ran");
        search_server.add_document(2, "cat and dog played");
        search_server
    }

    fn result_ids(results: &[search_server::ScoredDocument]) -> Vec<usize> {
        results.iter().map(|scored| scored.document_id).collect()
    }

    #[test]
    fn test_term_frequencies_sum_to_one_per_document() {
        let search_server = pets_search_server();

        let document_0_sum = search_server.term_frequency("cat", 0).unwrap()
            + search_server.term_frequency("sat", 0).unwrap();
        assert!((document_0_sum - 1.0).abs() < 1e-9);

        let document_2_sum = ["cat", "and", "dog", "played"]
            .iter()
            .map(|word| search_server.term_frequency(word, 2).unwrap())
            .sum::<f64>();
        assert!((document_2_sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_term_frequency_is_none_for_absent_pairs() {
        let search_server = pets_search_server();

        assert_eq!(search_server.term_frequency("cat", 0), Some(0.5));
        assert_eq!(search_server.term_frequency("cat", 1), None);
        assert_eq!(search_server.term_frequency("zebra", 0), None);
    }

    #[test]
    fn test_stop_words_are_never_indexed() {
        let search_server = pets_search_server();

        assert!(!search_server.contains_term("a"));
        assert!(!search_server.contains_term("the"));
        assert!(search_server.contains_term("cat"));
        assert_eq!(search_server.term_document_count("cat"), 2);
    }

    #[test]
    fn test_query_is_idempotent_on_unmodified_server() {
        let search_server = pets_search_server();

        let first = search_server.find_top_documents("cat dog played").unwrap();
        let second = search_server.find_top_documents("cat dog played").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_shared_term_document_scores_at_least_as_high_as_single_matches() {
        let search_server = pets_search_server();

        let results = search_server.find_top_documents("cat dog").unwrap();
        assert_eq!(results.len(), 3);

        let relevance_of = |document_id: usize| {
            results
                .iter()
                .find(|scored| scored.document_id == document_id)
                .unwrap()
                .relevance
        };
        assert!(relevance_of(2) >= relevance_of(0));
        assert!(relevance_of(2) >= relevance_of(1));
    }

    #[test]
    fn test_scores_are_monotonically_non_increasing() {
        let search_server = pets_search_server();

        let results = search_server.find_top_documents("cat dog played").unwrap();
        assert_eq!(results[0].document_id, 2);
        for pair in results.windows(2) {
            assert!(pair[0].relevance >= pair[1].relevance);
        }
    }

    #[test]
    fn test_minus_term_excludes_document_with_positive_score() {
        let search_server = pets_search_server();

        // Document 2 contains both the plus term and the minus term.
        let results = search_server.find_top_documents("cat -dog").unwrap();
        assert_eq!(result_ids(&results), vec![0]);
    }

    #[test]
    fn test_minus_terms_matching_every_document_empty_the_results() {
        let search_server = pets_search_server();

        let results = search_server
            .find_top_documents("cat dog -cat -dog")
            .unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_absent_term_is_equivalent_to_removing_it_from_the_query() {
        let search_server = pets_search_server();

        let with_absent_term = search_server.find_top_documents("cat zebra").unwrap();
        let without = search_server.find_top_documents("cat").unwrap();
        assert_eq!(with_absent_term, without);
    }

    #[test]
    fn test_bare_minus_token_matches_nothing() {
        let search_server = pets_search_server();

        let with_bare_minus = search_server.find_top_documents("cat -").unwrap();
        let without = search_server.find_top_documents("cat").unwrap();
        assert_eq!(with_bare_minus, without);
        assert_eq!(result_ids(&with_bare_minus), vec![0, 2]);
    }

    #[test]
    fn test_empty_query_returns_no_results() {
        let search_server = pets_search_server();

        let results = search_server.find_top_documents("").unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_querying_an_empty_corpus_is_a_usage_error() {
        let search_server = SearchServer::new(StopWordSet::new());

        let result = search_server.find_top_documents("cat");
        assert!(matches!(result, Err(Error::EmptyCorpusError(_))));
    }

    #[test]
    fn test_document_empty_after_filtering_still_counts_toward_corpus() {
        let mut search_server = SearchServer::new(StopWordSet::from_text("a the"));
        search_server.add_document(0, "a the");
        search_server.add_document(1, "cat");

        assert_eq!(search_server.document_count(), 2);
        assert!(!search_server.contains_term("a"));

        let results = search_server.find_top_documents("cat").unwrap();
        assert_eq!(result_ids(&results), vec![1]);
    }
}

#[cfg(test)]
mod search_corpus_tests {
    use super::*;

    #[test]
    fn test_results_never_exceed_the_cap() {
        let documents = [
            "fish one",
            "fish two",
            "fish three",
            "fish four",
            "fish five",
            "fish six",
            "fish seven",
            "fish eight",
        ];

        let results = search_corpus("the", &documents, "fish").unwrap();
        assert_eq!(results.len(), MAX_RESULT_DOCUMENT_COUNT);

        // A term present in every document has zero inverse document
        // frequency, so all scores tie and ascending id order decides.
        let ids: Vec<usize> = results.iter().map(|scored| scored.document_id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_documents_receive_sequential_ids_in_slice_order() {
        let results = search_corpus("the", &["cat", "dog", "dog ran"], "ran").unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].document_id, 2);
    }
}
