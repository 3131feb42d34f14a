use crate::types::{Token, TokenFrequencyMap};

/// Counts the occurrences of each token in the given slice.
///
/// # Arguments
/// * `tokens` - A slice of tokens to analyze.
///
/// # Returns
/// * A `TokenFrequencyMap` where the keys are tokens and the values are
///   their respective occurrence counts.
///
/// # Example
/// ```
/// use search_server::count_token_frequencies;
///
/// let tokens = vec!["cat".to_string(), "dog".to_string(), "cat".to_string()];
/// let frequencies = count_token_frequencies(&tokens);
/// assert_eq!(frequencies.get("cat"), Some(&2));
/// assert_eq!(frequencies.get("dog"), Some(&1));
/// ```
pub fn count_token_frequencies(tokens: &[Token]) -> TokenFrequencyMap {
    let mut frequencies = TokenFrequencyMap::new();

    for token in tokens {
        *frequencies.entry(token.clone()).or_insert(0) += 1;
    }

    frequencies
}
