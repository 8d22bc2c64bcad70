//! Recursive-descent parser for the selector grammar.
//!
//! Precedence, loosest first: OR, AND, comparison (including the special
//! IS [NOT] NULL, [NOT] LIKE, [NOT] BETWEEN and [NOT] IN forms), additive,
//! multiplicative, unary. Parsing stops at the first error.

use crate::property::Value;
use crate::selector::ast::Expression;
use crate::selector::lexer::Lexer;
use crate::selector::like::LikePattern;
use crate::selector::literal;
use crate::selector::operator::{BinaryOperator, UnaryOperator};
use crate::selector::token::Token;
use crate::selector::{Result, SelectorError};

pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    pub fn new(input: &str) -> Result<Self> {
        let tokens = Lexer::new(input).tokenize()?;
        Ok(Parser {
            tokens,
            position: 0,
        })
    }

    /// Parse a complete selector. Empty input is the literal `true`;
    /// anything left over after one full expression is an error.
    pub fn parse(&mut self) -> Result<Expression> {
        if self.current_token() == &Token::Eof {
            return Ok(Expression::Literal(Value::Bool(true)));
        }
        let expression = self.parse_or()?;
        if self.current_token() != &Token::Eof {
            return Err(self.error_here("extra input"));
        }
        Ok(expression)
    }

    fn current_token(&self) -> &Token {
        // The token stream always ends with Eof, so the cursor stays in
        // bounds for any sequence of advances the grammar performs.
        &self.tokens[self.position.min(self.tokens.len() - 1)]
    }

    fn advance(&mut self) {
        if self.position < self.tokens.len() - 1 {
            self.position += 1;
        }
    }

    /// Check if the current token matches without consuming it.
    fn match_token(&self, token: &Token) -> bool {
        self.current_token() == token
    }

    /// An error blaming the token the cursor is stuck on.
    fn error_here(&self, reason: &str) -> SelectorError {
        SelectorError::parse(self.current_token().text(), reason)
    }

    fn parse_or(&mut self) -> Result<Expression> {
        let mut expression = self.parse_and()?;
        while self.match_token(&Token::Or) {
            self.advance();
            let rhs = self.parse_and()?;
            expression = Expression::Or(Box::new(expression), Box::new(rhs));
        }
        Ok(expression)
    }

    fn parse_and(&mut self) -> Result<Expression> {
        let mut expression = self.parse_comparison()?;
        while self.match_token(&Token::And) {
            self.advance();
            let rhs = self.parse_comparison()?;
            expression = Expression::And(Box::new(expression), Box::new(rhs));
        }
        Ok(expression)
    }

    fn parse_comparison(&mut self) -> Result<Expression> {
        // Prefix NOT negates a whole comparison; the suffix form after an
        // operand instead modifies LIKE/BETWEEN/IN below.
        if self.match_token(&Token::Not) {
            self.advance();
            let operand = self.parse_comparison()?;
            return Ok(operand.not());
        }

        let left = self.parse_addition()?;

        match self.current_token() {
            Token::Is => {
                self.advance();
                if self.match_token(&Token::Null) {
                    self.advance();
                    return Ok(Expression::Unary {
                        op: UnaryOperator::IsNull,
                        operand: Box::new(left),
                    });
                }
                if self.match_token(&Token::Not) {
                    self.advance();
                    if self.match_token(&Token::Null) {
                        self.advance();
                        return Ok(Expression::Unary {
                            op: UnaryOperator::IsNonNull,
                            operand: Box::new(left),
                        });
                    }
                }
                return Err(self.error_here("expected NULL or NOT NULL after IS"));
            }
            Token::Not => {
                self.advance();
                return self.parse_special_comparison(left, true);
            }
            Token::Like | Token::Between | Token::In => {
                return self.parse_special_comparison(left, false);
            }
            _ => {}
        }

        let op = match self.current_token() {
            Token::Equal => BinaryOperator::Equal,
            Token::NotEqual => BinaryOperator::NotEqual,
            Token::Less => BinaryOperator::Less,
            Token::Greater => BinaryOperator::Greater,
            Token::LessEqual => BinaryOperator::LessEqual,
            Token::GreaterEqual => BinaryOperator::GreaterEqual,
            _ => return Ok(left),
        };
        self.advance();
        let right = self.parse_addition()?;
        Ok(Expression::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// The multi-keyword comparison forms. `negated` is set when a suffix
    /// NOT was consumed: NOT LIKE and NOT BETWEEN wrap their node in NOT,
    /// while NOT IN is a distinct form with its own list semantics.
    fn parse_special_comparison(&mut self, left: Expression, negated: bool) -> Result<Expression> {
        match self.current_token() {
            Token::Like => {
                self.advance();
                let pattern = match self.current_token() {
                    Token::String(s) => s.clone(),
                    _ => return Err(self.error_here("expected string after LIKE")),
                };
                self.advance();
                let escape = if self.match_token(&Token::Escape) {
                    self.advance();
                    let escape = match self.current_token() {
                        Token::String(s) => s.clone(),
                        _ => return Err(self.error_here("expected string after ESCAPE")),
                    };
                    if escape.chars().count() != 1 {
                        return Err(
                            self.error_here("single character string required after ESCAPE")
                        );
                    }
                    if escape == "%" || escape == "_" {
                        return Err(
                            self.error_here("'%' and '_' are not allowed as ESCAPE characters")
                        );
                    }
                    self.advance();
                    escape.chars().next()
                } else {
                    None
                };
                let like = Expression::Like {
                    operand: Box::new(left),
                    pattern: LikePattern::compile(&pattern, escape)?,
                };
                Ok(if negated { like.not() } else { like })
            }
            Token::Between => {
                self.advance();
                let lower = self.parse_addition()?;
                if !self.match_token(&Token::And) {
                    return Err(self.error_here("expected AND after BETWEEN"));
                }
                self.advance();
                let upper = self.parse_addition()?;
                let between = Expression::Between {
                    operand: Box::new(left),
                    lower: Box::new(lower),
                    upper: Box::new(upper),
                };
                Ok(if negated { between.not() } else { between })
            }
            Token::In => {
                self.advance();
                if !self.match_token(&Token::LeftParen) {
                    return Err(self.error_here("missing '(' after IN"));
                }
                self.advance();
                let mut list = vec![self.parse_addition()?];
                while self.match_token(&Token::Comma) {
                    self.advance();
                    list.push(self.parse_addition()?);
                }
                if !self.match_token(&Token::RightParen) {
                    return Err(self.error_here("missing ',' or ')' after IN"));
                }
                self.advance();
                Ok(Expression::In {
                    operand: Box::new(left),
                    list,
                    negated,
                })
            }
            _ => Err(self.error_here("expected LIKE, IN or BETWEEN")),
        }
    }

    fn parse_addition(&mut self) -> Result<Expression> {
        let mut expression = self.parse_multiplication()?;
        loop {
            let op = match self.current_token() {
                Token::Plus => BinaryOperator::Add,
                Token::Minus => BinaryOperator::Subtract,
                _ => return Ok(expression),
            };
            self.advance();
            let rhs = self.parse_multiplication()?;
            expression = Expression::Binary {
                op,
                left: Box::new(expression),
                right: Box::new(rhs),
            };
        }
    }

    fn parse_multiplication(&mut self) -> Result<Expression> {
        let mut expression = self.parse_unary()?;
        loop {
            let op = match self.current_token() {
                Token::Star => BinaryOperator::Multiply,
                Token::Slash => BinaryOperator::Divide,
                _ => return Ok(expression),
            };
            self.advance();
            let rhs = self.parse_unary()?;
            expression = Expression::Binary {
                op,
                left: Box::new(expression),
                right: Box::new(rhs),
            };
        }
    }

    fn parse_unary(&mut self) -> Result<Expression> {
        match self.current_token().clone() {
            Token::LeftParen => {
                self.advance();
                let expression = self.parse_or()?;
                if !self.match_token(&Token::RightParen) {
                    return Err(self.error_here("missing ')' after '('"));
                }
                self.advance();
                Ok(expression)
            }
            Token::Plus => {
                self.advance();
                self.parse_unary()
            }
            Token::Minus => {
                self.advance();
                // A minus directly against an exact numeric is folded into
                // the literal, which admits -9223372036854775808.
                if let Token::ExactNumeric(text) = self.current_token().clone() {
                    self.advance();
                    return Ok(Expression::Literal(literal::parse_exact_numeric(
                        &text, true,
                    )?));
                }
                let operand = self.parse_unary()?;
                Ok(Expression::Unary {
                    op: UnaryOperator::Negate,
                    operand: Box::new(operand),
                })
            }
            _ => self.parse_primary(),
        }
    }

    fn parse_primary(&mut self) -> Result<Expression> {
        let expression = match self.current_token().clone() {
            Token::Identifier(name) => Expression::Identifier(name),
            Token::String(s) => Expression::Literal(Value::String(s)),
            Token::True => Expression::Literal(Value::Bool(true)),
            Token::False => Expression::Literal(Value::Bool(false)),
            Token::ExactNumeric(text) => {
                Expression::Literal(literal::parse_exact_numeric(&text, false)?)
            }
            Token::ApproxNumeric(text) => {
                Expression::Literal(literal::parse_approx_numeric(&text)?)
            }
            _ => return Err(self.error_here("expected literal or identifier")),
        };
        self.advance();
        Ok(expression)
    }
}
