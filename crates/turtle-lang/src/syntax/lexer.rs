use crate::syntax::token::Token;

/// Split source text into word tokens. `[` and `]` always stand alone, so
/// `repeat 4[fd 10]` and `repeat 4 [ fd 10 ]` tokenize identically.
/// There is no comment syntax and no failure mode.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut padded = String::with_capacity(source.len() + 16);
    for ch in source.chars() {
        match ch {
            '[' | ']' => {
                padded.push(' ');
                padded.push(ch);
                padded.push(' ');
            }
            _ => padded.push(ch),
        }
    }
    padded.split_whitespace().map(Token::new).collect()
}

// ─── Tests ───────────────────────────────────────────────────────────────────
