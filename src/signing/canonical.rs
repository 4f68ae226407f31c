//! JSON body canonicalization.
//!
//! A single lexical pass that drops whitespace outside string literals. Keys
//! are not reordered, numbers are not reformatted and the input is not
//! validated: malformed JSON is scanned the same way and only shows up later
//! as a signature the gateway rejects.

/// Scanner state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Plain,
    InString,
    Escaped,
}

/// Remove structural whitespace from a serialized JSON body.
///
/// Empty or whitespace-only input is returned unchanged.
pub fn canonicalize(raw: &str) -> String {
    if raw.trim().is_empty() {
        return raw.to_string();
    }

    let mut out = String::with_capacity(raw.len());
    let mut state = State::Plain;

    for c in raw.chars() {
        state = match (state, c) {
            (State::Escaped, _) => {
                out.push(c);
                State::InString
            }
            (State::InString, '\\') => {
                out.push(c);
                State::Escaped
            }
            (State::InString, '"') => {
                out.push(c);
                State::Plain
            }
            (State::InString, _) => {
                out.push(c);
                State::InString
            }
            (State::Plain, '"') => {
                out.push(c);
                State::InString
            }
            (State::Plain, _) if c.is_whitespace() => State::Plain,
            (State::Plain, _) => {
                out.push(c);
                State::Plain
            }
        };
    }

    out
}
