//! Lexical tokens for selector expressions.

use std::fmt;

/// A lexical token. Literal-carrying variants keep the raw text where the
/// literal compilers need it (numerics) or the decoded content (strings).
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    Identifier(String),
    String(String),
    ExactNumeric(String),
    ApproxNumeric(String),

    // Keywords (case-insensitive reserved words)
    True,
    False,
    Null,
    Not,
    And,
    Or,
    Between,
    Like,
    In,
    Is,
    Escape,

    // Operators
    Equal,
    NotEqual,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    Plus,
    Minus,
    Star,
    Slash,

    // Delimiters
    LeftParen,
    RightParen,
    Comma,

    // Special
    Eof,
}

impl Token {
    /// Convert a word to a keyword token if it matches a reserved word.
    pub fn keyword_from_str(s: &str) -> Option<Token> {
        match s.to_uppercase().as_str() {
            "TRUE" => Some(Token::True),
            "FALSE" => Some(Token::False),
            "NULL" => Some(Token::Null),
            "NOT" => Some(Token::Not),
            "AND" => Some(Token::And),
            "OR" => Some(Token::Or),
            "BETWEEN" => Some(Token::Between),
            "LIKE" => Some(Token::Like),
            "IN" => Some(Token::In),
            "IS" => Some(Token::Is),
            "ESCAPE" => Some(Token::Escape),
            _ => None,
        }
    }

    /// The literal text of the token as it appeared in the input, used in
    /// error messages. `Eof` has no text.
    pub fn text(&self) -> String {
        match self {
            Token::Identifier(s) | Token::String(s) => s.clone(),
            Token::ExactNumeric(s) | Token::ApproxNumeric(s) => s.clone(),
            Token::Eof => String::new(),
            other => other.symbol().to_string(),
        }
    }

    fn symbol(&self) -> &'static str {
        match self {
            Token::True => "TRUE",
            Token::False => "FALSE",
            Token::Null => "NULL",
            Token::Not => "NOT",
            Token::And => "AND",
            Token::Or => "OR",
            Token::Between => "BETWEEN",
            Token::Like => "LIKE",
            Token::In => "IN",
            Token::Is => "IS",
            Token::Escape => "ESCAPE",
            Token::Equal => "=",
            Token::NotEqual => "<>",
            Token::Less => "<",
            Token::Greater => ">",
            Token::LessEqual => "<=",
            Token::GreaterEqual => ">=",
            Token::Plus => "+",
            Token::Minus => "-",
            Token::Star => "*",
            Token::Slash => "/",
            Token::LeftParen => "(",
            Token::RightParen => ")",
            Token::Comma => ",",
            _ => "",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_from_str() {
        assert_eq!(Token::keyword_from_str("BETWEEN"), Some(Token::Between));
        assert_eq!(Token::keyword_from_str("between"), Some(Token::Between));
        assert_eq!(Token::keyword_from_str("Escape"), Some(Token::Escape));
        assert_eq!(Token::keyword_from_str("price"), None);
    }

    #[test]
    fn test_token_text() {
        assert_eq!(Token::Identifier("price".to_string()).text(), "price");
        assert_eq!(Token::ExactNumeric("0x1F".to_string()).text(), "0x1F");
        assert_eq!(Token::NotEqual.text(), "<>");
        assert_eq!(Token::Eof.text(), "");
    }
}
