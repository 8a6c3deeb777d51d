/// First-word heuristic for gerund titles ("Running ...", "Taking ...").
///
/// Returns `None` when the title has no words at all.
pub fn is_infinitive_form(title: &str) -> Option<bool> {
    title
        .split_whitespace()
        .next()
        .map(|first_word| first_word.ends_with("ing"))
}
