//! The expression tree built by the parser.

use std::fmt;

use crate::property::Value;
use crate::selector::like::LikePattern;
use crate::selector::operator::{BinaryOperator, UnaryOperator};

/// A node of the compiled expression tree.
///
/// Nodes are either value-producing (literal, identifier, arithmetic) or
/// boolean-producing (everything else); a boolean node used in value
/// context yields its tri-state result as a boolean value, and a value
/// node used in boolean context is `Unknown` unless it holds a boolean.
///
/// `NOT LIKE` and `NOT BETWEEN` parse as a `Not` wrapper; `NOT IN` is its
/// own form because its list evaluation differs from negated `In`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal(Value),
    Identifier(String),
    Unary {
        op: UnaryOperator,
        operand: Box<Expression>,
    },
    Binary {
        op: BinaryOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    And(Box<Expression>, Box<Expression>),
    Or(Box<Expression>, Box<Expression>),
    Like {
        operand: Box<Expression>,
        pattern: LikePattern,
    },
    Between {
        operand: Box<Expression>,
        lower: Box<Expression>,
        upper: Box<Expression>,
    },
    In {
        operand: Box<Expression>,
        list: Vec<Expression>,
        negated: bool,
    },
}

impl Expression {
    pub(crate) fn not(self) -> Expression {
        Expression::Unary {
            op: UnaryOperator::Not,
            operand: Box::new(self),
        }
    }
}

/// Canonical textual form, used for diagnostics and structural comparison.
/// It is deterministic but not re-parseable: identifiers carry an `I:` tag
/// and LIKE nodes render their compiled regex rather than the original
/// pattern.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Literal(v) => write!(f, "{}", v),
            Expression::Identifier(name) => write!(f, "I:{}", name),
            Expression::Unary { op, operand } => write!(f, "{}({})", op, operand),
            Expression::Binary { op, left, right } => write!(f, "({}{}{})", left, op, right),
            Expression::And(left, right) => write!(f, "({} AND {})", left, right),
            Expression::Or(left, right) => write!(f, "({} OR {})", left, right),
            Expression::Like { operand, pattern } => {
                write!(f, "{} REGEX_MATCH '{}'", operand, pattern.regex_source())
            }
            Expression::Between {
                operand,
                lower,
                upper,
            } => write!(f, "{} BETWEEN {} AND {}", operand, lower, upper),
            Expression::In {
                operand,
                list,
                negated,
            } => {
                write!(
                    f,
                    "{}{} IN (",
                    operand,
                    if *negated { " NOT" } else { "" }
                )?;
                for (i, item) in list.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(name: &str) -> Expression {
        Expression::Identifier(name.to_string())
    }

    fn int(i: i64) -> Expression {
        Expression::Literal(Value::Int(i))
    }

    #[test]
    fn test_comparison_rendering() {
        let e = Expression::Binary {
            op: BinaryOperator::GreaterEqual,
            left: Box::new(ident("price")),
            right: Box::new(int(10)),
        };
        assert_eq!(e.to_string(), "(I:price>=10)");
    }

    #[test]
    fn test_boolean_rendering() {
        let cmp = Expression::Binary {
            op: BinaryOperator::Equal,
            left: Box::new(ident("a")),
            right: Box::new(int(1)),
        };
        let e = Expression::And(
            Box::new(cmp.clone().not()),
            Box::new(Expression::Or(
                Box::new(cmp.clone()),
                Box::new(Expression::Literal(Value::Bool(true))),
            )),
        );
        assert_eq!(e.to_string(), "(NOT((I:a=1)) AND ((I:a=1) OR true))");
    }

    #[test]
    fn test_special_form_rendering() {
        let between = Expression::Between {
            operand: Box::new(ident("n")),
            lower: Box::new(int(1)),
            upper: Box::new(int(9)),
        };
        assert_eq!(between.to_string(), "I:n BETWEEN 1 AND 9");

        let in_list = Expression::In {
            operand: Box::new(ident("colour")),
            list: vec![
                Expression::Literal(Value::String("red".to_string())),
                Expression::Literal(Value::String("blue".to_string())),
            ],
            negated: true,
        };
        assert_eq!(in_list.to_string(), "I:colour NOT IN ('red', 'blue')");
    }

    #[test]
    fn test_like_renders_compiled_regex() {
        let e = Expression::Like {
            operand: Box::new(ident("name")),
            pattern: LikePattern::compile("ab%", None).unwrap(),
        };
        assert_eq!(e.to_string(), "I:name REGEX_MATCH '^ab.*$'");
    }

    #[test]
    fn test_unary_arithmetic_rendering() {
        let e = Expression::Unary {
            op: UnaryOperator::Negate,
            operand: Box::new(ident("x")),
        };
        assert_eq!(e.to_string(), "-(I:x)");
    }
}
