use search_server::{search_corpus, DocumentId};
use std::error::Error;
use std::fs;

/// One ranked-search test case parsed from a directive-style corpus file.
pub struct CorpusTestCase {
    pub stop_word_text: String,
    pub documents: Vec<String>,
    pub query: String,
    pub expected_document_ids: Vec<DocumentId>,
}

/// Utility to load a corpus test case from a text file for testing and benchmarking.
///
/// Recognized directives, one per line: `STOP_WORDS:`, `DOCUMENT:` (repeated,
/// in ingestion order), `QUERY:`, `EXPECTED:` (the ranked document ids, space
/// separated; an empty list means no results) and `COMMENT:` (ignored).
pub fn load_corpus_from_file(file_path: &str) -> Result<CorpusTestCase, Box<dyn Error>> {
    let content = fs::read_to_string(file_path)?;

    let mut stop_word_text = String::new();
    let mut documents = Vec::new();
    let mut query = String::new();
    let mut expected_document_ids = Vec::new();

    for line in content.lines() {
        if let Some(rest) = line.strip_prefix("STOP_WORDS:") {
            stop_word_text = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix("DOCUMENT:") {
            documents.push(rest.trim().to_string());
        } else if let Some(rest) = line.strip_prefix("QUERY:") {
            query = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix("EXPECTED:") {
            for id in rest.split_whitespace() {
                expected_document_ids.push(id.parse::<DocumentId>()?);
            }
        } else if line.starts_with("COMMENT:") || line.trim().is_empty() {
            continue;
        } else {
            eprintln!("Skipping unrecognized line: {:?}", line);
        }
    }

    Ok(CorpusTestCase {
        stop_word_text,
        documents,
        query,
        expected_document_ids,
    })
}

/// Helper function to run the ranked search for a corpus file and check the
/// result order against its `EXPECTED:` ids.
///
/// Returns the number of discrepancies; with `use_assertions` set,
/// discrepancies panic instead so test failures carry context.
pub fn run_test_for_file(test_file_path: &str, use_assertions: bool) -> usize {
    let corpus = load_corpus_from_file(test_file_path).expect("Failed to load corpus test file");
    let document_refs: Vec<&str> = corpus.documents.iter().map(String::as_str).collect();

    // Log the file being processed
    eprintln!("Testing file: {}", test_file_path);

    let results = search_corpus(&corpus.stop_word_text, &document_refs, &corpus.query)
        .expect("Failed to search test corpus");
    let result_ids: Vec<DocumentId> = results.iter().map(|scored| scored.document_id).collect();

    let mut error_count = 0;

    if result_ids != corpus.expected_document_ids {
        error_count += 1; // Increment error count for ranking mismatch
    }

    // Relevance must never increase down the ranked list.
    for pair in results.windows(2) {
        if pair[0].relevance < pair[1].relevance {
            error_count += 1;
        }
    }

    if use_assertions {
        assert_eq!(
            result_ids, corpus.expected_document_ids,
            "{} - Expected ranking: {:?}, but got: {:?}",
            test_file_path, corpus.expected_document_ids, result_ids
        );

        for pair in results.windows(2) {
            assert!(
                pair[0].relevance >= pair[1].relevance,
                "{} - Results are not sorted by descending relevance: {:?}",
                test_file_path,
                results
            );
        }
    }

    error_count
}
