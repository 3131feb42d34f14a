pub mod error;
pub use error::Error;

pub mod query;
pub use query::Query;

pub mod scored_document;
pub use scored_document::ScoredDocument;

pub mod search_server;
pub use search_server::SearchServer;

pub mod stop_word_set;
pub use stop_word_set::StopWordSet;
