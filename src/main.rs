use log::{error, info};
use search_server::{Error, SearchServer, StopWordSet};
use std::io::{self, BufRead};

/// Console driver: reads one stop-word line, a document count `N`, then `N`
/// document body lines and a single query line from stdin, and prints the
/// ranked results.
fn main() {
    // Initialize the logger
    #[cfg(feature = "logger-support")]
    env_logger::init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let stop_words = StopWordSet::from_text(&read_line(&mut lines)?);
    let mut search_server = SearchServer::new(stop_words);

    let document_count = read_line_with_number(&mut lines)?;
    for document_id in 0..document_count {
        search_server.add_document(document_id, &read_line(&mut lines)?);
    }
    info!("indexed {} documents", search_server.document_count());

    let query = read_line(&mut lines)?;
    for scored in search_server.find_top_documents(&query)? {
        println!(
            "{{ document_id = {}, relevance = {} }}",
            scored.document_id, scored.relevance
        );
    }

    Ok(())
}

fn read_line(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<String, Error> {
    match lines.next() {
        Some(line) => Ok(line?),
        None => Err(Error::ParserError("unexpected end of input".to_string())),
    }
}

fn read_line_with_number(
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<usize, Error> {
    let line = read_line(lines)?;
    line.trim()
        .parse()
        .map_err(|err| Error::ParserError(format!("invalid document count {:?}: {}", line, err)))
}
