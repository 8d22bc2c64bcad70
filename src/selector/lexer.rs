//! Selector lexer - tokenizes selector expression text.

use crate::selector::token::Token;
use crate::selector::{Result, SelectorError};

pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Get the next token from the input.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace();

        let ch = match self.current_char() {
            Some(ch) => ch,
            None => return Ok(Token::Eof),
        };

        match ch {
            '+' => {
                self.advance();
                Ok(Token::Plus)
            }
            '-' => {
                self.advance();
                Ok(Token::Minus)
            }
            '*' => {
                self.advance();
                Ok(Token::Star)
            }
            '/' => {
                self.advance();
                Ok(Token::Slash)
            }
            '=' => {
                self.advance();
                Ok(Token::Equal)
            }
            '<' => {
                self.advance();
                if self.current_char() == Some('=') {
                    self.advance();
                    Ok(Token::LessEqual)
                } else if self.current_char() == Some('>') {
                    self.advance();
                    Ok(Token::NotEqual)
                } else {
                    Ok(Token::Less)
                }
            }
            '>' => {
                self.advance();
                if self.current_char() == Some('=') {
                    self.advance();
                    Ok(Token::GreaterEqual)
                } else {
                    Ok(Token::Greater)
                }
            }
            '(' => {
                self.advance();
                Ok(Token::LeftParen)
            }
            ')' => {
                self.advance();
                Ok(Token::RightParen)
            }
            ',' => {
                self.advance();
                Ok(Token::Comma)
            }
            '\'' => self.read_string(),
            '.' if self.peek(1).is_some_and(|c| c.is_ascii_digit()) => self.read_number(),
            c if c.is_ascii_alphabetic() || c == '_' || c == '$' => Ok(self.read_identifier()),
            c if c.is_ascii_digit() => self.read_number(),
            c => Err(SelectorError::parse(c.to_string(), "unexpected character")),
        }
    }

    /// Tokenize the entire input, terminated by `Eof`.
    pub fn tokenize(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token == Token::Eof;
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Read an identifier or keyword: initial `[A-Za-z_$]`, then
    /// `[A-Za-z0-9_$.]`.
    fn read_identifier(&mut self) -> Token {
        let mut word = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_ascii_alphanumeric() || ch == '_' || ch == '$' || ch == '.' {
                word.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        Token::keyword_from_str(&word).unwrap_or(Token::Identifier(word))
    }

    /// Read a single-quoted string literal; `''` embeds a quote.
    fn read_string(&mut self) -> Result<Token> {
        self.advance(); // Skip opening quote
        let mut string = String::new();

        while let Some(ch) = self.current_char() {
            if ch == '\'' {
                if self.peek(1) == Some('\'') {
                    string.push('\'');
                    self.advance();
                    self.advance();
                } else {
                    self.advance(); // Skip closing quote
                    return Ok(Token::String(string));
                }
            } else {
                string.push(ch);
                self.advance();
            }
        }

        Err(SelectorError::parse(string, "unterminated string literal"))
    }

    /// Read a numeric literal, classifying it as exact or approximate.
    ///
    /// Exact forms: `0x`/`0X` hex, `0b`/`0B` binary, digit runs (octal when
    /// the leading digit is `0`), with `_` separators and an optional
    /// `l`/`L` suffix. Approximate forms carry a decimal point and/or an
    /// exponent, with an optional `f`/`F`/`d`/`D` suffix.
    fn read_number(&mut self) -> Result<Token> {
        let start = self.position;

        if self.current_char() == Some('0') && matches!(self.peek(1), Some('x') | Some('X')) {
            self.advance();
            self.advance();
            if self.read_digits(|c| c.is_ascii_hexdigit()) == 0 {
                return Err(SelectorError::parse(
                    self.text_from(start),
                    "malformed numeric literal",
                ));
            }
            self.read_suffix(&['l', 'L']);
            return Ok(Token::ExactNumeric(self.text_from(start)));
        }

        if self.current_char() == Some('0') && matches!(self.peek(1), Some('b') | Some('B')) {
            self.advance();
            self.advance();
            if self.read_digits(|c| c == '0' || c == '1') == 0 {
                return Err(SelectorError::parse(
                    self.text_from(start),
                    "malformed numeric literal",
                ));
            }
            self.read_suffix(&['l', 'L']);
            return Ok(Token::ExactNumeric(self.text_from(start)));
        }

        let int_digits = self.read_digits(|c| c.is_ascii_digit());
        let mut approx = false;

        if self.current_char() == Some('.') {
            // Either "digits . digits?" or a leading-dot fraction; the
            // caller only routes here when a digit is adjacent.
            approx = true;
            self.advance();
            let frac_digits = self.read_digits(|c| c.is_ascii_digit());
            if int_digits == 0 && frac_digits == 0 {
                return Err(SelectorError::parse(
                    self.text_from(start),
                    "malformed numeric literal",
                ));
            }
        }

        if self.exponent_follows() {
            approx = true;
            self.advance(); // e/E
            if matches!(self.current_char(), Some('+') | Some('-')) {
                self.advance();
            }
            self.read_digits(|c| c.is_ascii_digit());
        }

        if approx {
            self.read_suffix(&['f', 'F', 'd', 'D']);
            Ok(Token::ApproxNumeric(self.text_from(start)))
        } else {
            self.read_suffix(&['l', 'L']);
            Ok(Token::ExactNumeric(self.text_from(start)))
        }
    }

    /// Consume digits matching `pred`, allowing `_` separators; returns the
    /// number of real digits consumed.
    fn read_digits(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let mut count = 0;
        while let Some(ch) = self.current_char() {
            if pred(ch) {
                count += 1;
                self.advance();
            } else if ch == '_' {
                self.advance();
            } else {
                break;
            }
        }
        count
    }

    /// True when the cursor sits on a well-formed exponent (`e`/`E`, an
    /// optional sign, and at least one digit). A bare trailing `e` is left
    /// for the identifier lexer instead.
    fn exponent_follows(&self) -> bool {
        if !matches!(self.current_char(), Some('e') | Some('E')) {
            return false;
        }
        match self.peek(1) {
            Some(c) if c.is_ascii_digit() => true,
            Some('+') | Some('-') => self.peek(2).is_some_and(|c| c.is_ascii_digit()),
            _ => false,
        }
    }

    fn read_suffix(&mut self, allowed: &[char]) {
        if let Some(ch) = self.current_char() {
            if allowed.contains(&ch) {
                self.advance();
            }
        }
    }

    fn text_from(&self, start: usize) -> String {
        self.input[start..self.position].iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(input: &str) -> Vec<Token> {
        Lexer::new(input).tokenize().unwrap()
    }

    #[test]
    fn test_keywords_case_insensitive() {
        assert_eq!(
            lex("and OR Not between LIKE in IS null TRUE false escape"),
            vec![
                Token::And,
                Token::Or,
                Token::Not,
                Token::Between,
                Token::Like,
                Token::In,
                Token::Is,
                Token::Null,
                Token::True,
                Token::False,
                Token::Escape,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            lex("= <> < > <= >= + - * / ( ) ,"),
            vec![
                Token::Equal,
                Token::NotEqual,
                Token::Less,
                Token::Greater,
                Token::LessEqual,
                Token::GreaterEqual,
                Token::Plus,
                Token::Minus,
                Token::Star,
                Token::Slash,
                Token::LeftParen,
                Token::RightParen,
                Token::Comma,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_identifiers() {
        assert_eq!(
            lex("price my_prop $sys amqp.priority"),
            vec![
                Token::Identifier("price".to_string()),
                Token::Identifier("my_prop".to_string()),
                Token::Identifier("$sys".to_string()),
                Token::Identifier("amqp.priority".to_string()),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_string_literals() {
        assert_eq!(
            lex("'hello world' 'it''s fine'"),
            vec![
                Token::String("hello world".to_string()),
                Token::String("it's fine".to_string()),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_unterminated_string() {
        let err = Lexer::new("'oops").tokenize().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Illegal selector: 'oops': unterminated string literal"
        );
    }

    #[test]
    fn test_exact_numerics() {
        assert_eq!(
            lex("123 0x1F 0b101 017 1_000 42L"),
            vec![
                Token::ExactNumeric("123".to_string()),
                Token::ExactNumeric("0x1F".to_string()),
                Token::ExactNumeric("0b101".to_string()),
                Token::ExactNumeric("017".to_string()),
                Token::ExactNumeric("1_000".to_string()),
                Token::ExactNumeric("42L".to_string()),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_approx_numerics() {
        assert_eq!(
            lex("1.5 .5 1. 2e10 3.25E-2 1_0.5 2.5f"),
            vec![
                Token::ApproxNumeric("1.5".to_string()),
                Token::ApproxNumeric(".5".to_string()),
                Token::ApproxNumeric("1.".to_string()),
                Token::ApproxNumeric("2e10".to_string()),
                Token::ApproxNumeric("3.25E-2".to_string()),
                Token::ApproxNumeric("1_0.5".to_string()),
                Token::ApproxNumeric("2.5f".to_string()),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_bare_e_is_not_an_exponent() {
        assert_eq!(
            lex("123e"),
            vec![
                Token::ExactNumeric("123".to_string()),
                Token::Identifier("e".to_string()),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_unexpected_character() {
        let err = Lexer::new("a ; b").tokenize().unwrap_err();
        assert_eq!(err.to_string(), "Illegal selector: ';': unexpected character");
    }

    #[test]
    fn test_malformed_radix_literal() {
        let err = Lexer::new("0x").tokenize().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Illegal selector: '0x': malformed numeric literal"
        );
    }

    #[test]
    fn test_full_selector() {
        assert_eq!(
            lex("price > 18 AND status = 'active'"),
            vec![
                Token::Identifier("price".to_string()),
                Token::Greater,
                Token::ExactNumeric("18".to_string()),
                Token::And,
                Token::Identifier("status".to_string()),
                Token::Equal,
                Token::String("active".to_string()),
                Token::Eof,
            ]
        );
    }
}
