//! Operator kinds used by expression nodes.
//!
//! Operators carry no state; nodes hold a `Copy` kind and dispatch through
//! exhaustive matches in the evaluator.

use std::fmt;

/// Binary operators: the six SQL comparisons plus the four arithmetic
/// operators. Comparisons produce a tri-state boolean, arithmetic produces
/// a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Equal,
    NotEqual,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    pub fn is_comparison(self) -> bool {
        !matches!(
            self,
            BinaryOperator::Add
                | BinaryOperator::Subtract
                | BinaryOperator::Multiply
                | BinaryOperator::Divide
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOperator::Equal => "=",
            BinaryOperator::NotEqual => "<>",
            BinaryOperator::Less => "<",
            BinaryOperator::Greater => ">",
            BinaryOperator::LessEqual => "<=",
            BinaryOperator::GreaterEqual => ">=",
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unary operators. `Not`, `IsNull` and `IsNonNull` are boolean; `Negate`
/// is arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Not,
    IsNull,
    IsNonNull,
    Negate,
}

impl UnaryOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            UnaryOperator::Not => "NOT",
            UnaryOperator::IsNull => "IsNull",
            UnaryOperator::IsNonNull => "IsNonNull",
            UnaryOperator::Negate => "-",
        }
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparison_predicate() {
        assert!(BinaryOperator::Equal.is_comparison());
        assert!(BinaryOperator::GreaterEqual.is_comparison());
        assert!(!BinaryOperator::Add.is_comparison());
        assert!(!BinaryOperator::Divide.is_comparison());
    }

    #[test]
    fn test_rendering() {
        assert_eq!(BinaryOperator::NotEqual.to_string(), "<>");
        assert_eq!(BinaryOperator::Multiply.to_string(), "*");
        assert_eq!(UnaryOperator::IsNonNull.to_string(), "IsNonNull");
        assert_eq!(UnaryOperator::Negate.to_string(), "-");
    }
}
