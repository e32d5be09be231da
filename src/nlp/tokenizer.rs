//! Question tokenizer.
//!
//! Whitespace tokenization with the possessive clitic `'s` split into
//! its own token. Other punctuation stays attached to its word, which
//! the query builder relies on when matching column mentions exactly.

/// A token from a question, keeping both original and lowercased text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token as written in the question.
    pub text: String,
    /// Lowercased form used for lexicon and column matching.
    pub lower: String,
}

impl Token {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            lower: text.to_lowercase(),
        }
    }

    /// Returns true if the token is written in title case: an uppercase
    /// first letter with no further uppercase letters.
    pub fn is_title_case(&self) -> bool {
        let mut chars = self.text.chars();
        match chars.next() {
            Some(first) if first.is_uppercase() => chars.all(|c| !c.is_uppercase()),
            _ => false,
        }
    }

    /// Returns true if the token is a numeric literal: ASCII digits
    /// with at most one decimal point.
    pub fn is_number(&self) -> bool {
        let mut seen_digit = false;
        let mut seen_dot = false;
        for c in self.text.chars() {
            match c {
                '0'..='9' => seen_digit = true,
                '.' if !seen_dot => seen_dot = true,
                _ => return false,
            }
        }
        seen_digit
    }
}

/// Splits a question into tokens.
pub fn tokenize(question: &str) -> Vec<Token> {
    let mut tokens = Vec::new();

    for chunk in question.split_whitespace() {
        if let Some(stem) = strip_possessive(chunk) {
            if !stem.is_empty() {
                tokens.push(Token::new(stem));
            }
            tokens.push(Token::new(&chunk[stem.len()..]));
        } else {
            tokens.push(Token::new(chunk));
        }
    }

    tokens
}

/// Returns the stem of a possessive form ("Alice's" -> "Alice"), or
/// None when the chunk is not possessive.
fn strip_possessive(chunk: &str) -> Option<&str> {
    let lower = chunk.to_lowercase();
    for clitic in ["'s", "\u{2019}s"] {
        if lower.ends_with(clitic) && lower.len() > clitic.len() {
            return Some(&chunk[..chunk.len() - clitic.len()]);
        }
    }
    None
}

/// Capitalizes a word: first letter uppercase, the rest lowercase.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
