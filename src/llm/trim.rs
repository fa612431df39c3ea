const SENTENCE_BREAK: &str = ". ";

/// Caps a reply at two sentences.
///
/// Splits on the literal `". "`, so abbreviations and decimals can cut early.
pub fn trim_to_two_sentences(text: &str) -> String {
    let pieces: Vec<&str> = text.split(SENTENCE_BREAK).collect();
    if pieces.len() <= 2 {
        return text.to_string();
    }

    let joined = pieces[..2].join(SENTENCE_BREAK);
    format!("{}.", joined.trim_end_matches('.'))
}
