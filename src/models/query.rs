use crate::types::Token;

/// A free-text query split into its required and excluding terms.
///
/// Plus terms raise the relevance of documents containing them; minus terms
/// exclude matching documents from the results entirely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub plus: Vec<Token>,
    pub minus: Vec<Token>,
}

impl Query {
    /// Partitions already-filtered query tokens into plus and minus terms.
    ///
    /// A token with a leading `-` is a minus term and is stored with the
    /// marker stripped; a bare `-` yields an empty minus term, kept
    /// literally. Every other token is a plus term, including empty tokens
    /// produced by doubled spaces in the query line.
    pub fn parse(words: Vec<Token>) -> Query {
        let mut query = Query::default();
        for word in words {
            match word.strip_prefix('-') {
                Some(stripped) => query.minus.push(stripped.to_string()),
                None => query.plus.push(word),
            }
        }
        query
    }
}
