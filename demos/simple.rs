use search_server::search_corpus;

fn main() {
    #[cfg(feature = "logger-support")]
    env_logger::init();

    let stop_words = "a the and";
    let documents = ["a cat sat", "the dog ran", "cat and dog played"];
    let query = "cat dog";

    let results = search_corpus(stop_words, &documents, query).unwrap();

    println!("Top documents for the query \"{}\"", query);
    for scored in results {
        println!("{}: {:.2}", scored.document_id, scored.relevance);
    }
}
