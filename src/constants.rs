/// Maximum number of ranked documents a single query returns.
pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;
