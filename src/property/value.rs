//! Typed values carried by message properties.

use std::cmp::Ordering;
use std::fmt;
use std::mem;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A typed property value.
///
/// `Unknown` stands in for an absent property or for the result of an
/// operation that is undefined over its operands. It is never equal to
/// anything, including itself, so it behaves like SQL NULL under every
/// comparison.
#[derive(Debug, Clone)]
pub enum Value {
    Unknown,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl Value {
    pub fn is_unknown(&self) -> bool {
        matches!(self, Value::Unknown)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    /// True when both values carry the same type tag.
    pub fn same_type(&self, other: &Value) -> bool {
        mem::discriminant(self) == mem::discriminant(other)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl PartialEq for Value {
    /// Mixed `Int`/`Float` pairs compare numerically; any other pair of
    /// differing types is unequal, and `Unknown` equals nothing.
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
                *a as f64 == *b
            }
            (Value::String(a), Value::String(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialOrd for Value {
    /// Ordering is defined within numerics (with `Int`→`Float` promotion),
    /// strings, and bools. Incompatible or unknown pairs are unordered, so
    /// every relational operator applied to them yields `false`.
    fn partial_cmp(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
            (Value::Int(a), Value::Float(b)) => (*a as f64).partial_cmp(b),
            (Value::Float(a), Value::Int(b)) => a.partial_cmp(&(*b as f64)),
            (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
            (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl Add for &Value {
    type Output = Value;

    fn add(self, rhs: &Value) -> Value {
        match (self, rhs) {
            (Value::Int(a), Value::Int(b)) => Value::Int(a.wrapping_add(*b)),
            (Value::Float(a), Value::Float(b)) => Value::Float(a + b),
            (Value::Int(a), Value::Float(b)) => Value::Float(*a as f64 + b),
            (Value::Float(a), Value::Int(b)) => Value::Float(a + *b as f64),
            _ => Value::Unknown,
        }
    }
}

impl Sub for &Value {
    type Output = Value;

    fn sub(self, rhs: &Value) -> Value {
        match (self, rhs) {
            (Value::Int(a), Value::Int(b)) => Value::Int(a.wrapping_sub(*b)),
            (Value::Float(a), Value::Float(b)) => Value::Float(a - b),
            (Value::Int(a), Value::Float(b)) => Value::Float(*a as f64 - b),
            (Value::Float(a), Value::Int(b)) => Value::Float(a - *b as f64),
            _ => Value::Unknown,
        }
    }
}

impl Mul for &Value {
    type Output = Value;

    fn mul(self, rhs: &Value) -> Value {
        match (self, rhs) {
            (Value::Int(a), Value::Int(b)) => Value::Int(a.wrapping_mul(*b)),
            (Value::Float(a), Value::Float(b)) => Value::Float(a * b),
            (Value::Int(a), Value::Float(b)) => Value::Float(*a as f64 * b),
            (Value::Float(a), Value::Int(b)) => Value::Float(a * *b as f64),
            _ => Value::Unknown,
        }
    }
}

impl Div for &Value {
    type Output = Value;

    /// Integer division by zero yields `Unknown`; float division follows
    /// IEEE semantics.
    fn div(self, rhs: &Value) -> Value {
        match (self, rhs) {
            (Value::Int(_), Value::Int(0)) => Value::Unknown,
            (Value::Int(a), Value::Int(b)) => Value::Int(a.wrapping_div(*b)),
            (Value::Float(a), Value::Float(b)) => Value::Float(a / b),
            (Value::Int(a), Value::Float(b)) => Value::Float(*a as f64 / b),
            (Value::Float(a), Value::Int(b)) => Value::Float(a / *b as f64),
            _ => Value::Unknown,
        }
    }
}

impl Neg for &Value {
    type Output = Value;

    fn neg(self) -> Value {
        match self {
            Value::Int(i) => Value::Int(i.wrapping_neg()),
            Value::Float(f) => Value::Float(-f),
            _ => Value::Unknown,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unknown => write!(f, "UNKNOWN"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::String(s) => write!(f, "'{}'", s),
        }
    }
}

/// Three-valued boolean per SQL-92 NULL semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolOrNone {
    False,
    True,
    Unknown,
}

impl BoolOrNone {
    /// Logical negation: `Unknown` is a fixed point.
    pub fn not(self) -> BoolOrNone {
        match self {
            BoolOrNone::False => BoolOrNone::True,
            BoolOrNone::True => BoolOrNone::False,
            BoolOrNone::Unknown => BoolOrNone::Unknown,
        }
    }

    /// Collapse to a native boolean: only `True` reports `true`.
    pub fn is_true(self) -> bool {
        self == BoolOrNone::True
    }
}

impl From<bool> for BoolOrNone {
    fn from(b: bool) -> Self {
        if b {
            BoolOrNone::True
        } else {
            BoolOrNone::False
        }
    }
}

impl From<BoolOrNone> for Value {
    /// A known boolean becomes `Value::Bool`; `Unknown` stays unknown when
    /// a boolean result is used in value context.
    fn from(b: BoolOrNone) -> Self {
        match b {
            BoolOrNone::False => Value::Bool(false),
            BoolOrNone::True => Value::Bool(true),
            BoolOrNone::Unknown => Value::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_promotion_equality() {
        assert_eq!(Value::Int(5), Value::Float(5.0));
        assert_eq!(Value::Float(5.0), Value::Int(5));
        assert_ne!(Value::Int(5), Value::Float(5.5));
    }

    #[test]
    fn test_cross_type_equality_is_false() {
        assert_ne!(Value::Int(5), Value::String("5".to_string()));
        assert_ne!(Value::Bool(true), Value::Int(1));
        assert_ne!(Value::Unknown, Value::Unknown);
    }

    #[test]
    fn test_ordering() {
        assert!(Value::Int(3) < Value::Int(5));
        assert!(Value::Int(3) < Value::Float(3.5));
        assert!(Value::String("abc".to_string()) < Value::String("abd".to_string()));

        // Incompatible pairs are unordered: every relational op is false.
        assert!(!(Value::Int(3) < Value::String("5".to_string())));
        assert!(!(Value::Int(3) > Value::String("5".to_string())));
        assert!(!(Value::Unknown < Value::Int(1)));
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(&Value::Int(3) + &Value::Int(4), Value::Int(7));
        assert_eq!(&Value::Int(3) * &Value::Float(2.0), Value::Float(6.0));
        assert_eq!(&Value::Int(10) / &Value::Int(3), Value::Int(3));
        assert_eq!(&Value::Float(1.0) - &Value::Int(2), Value::Float(-1.0));
        assert_eq!(-&Value::Int(7), Value::Int(-7));
    }

    #[test]
    fn test_arithmetic_unknown_propagation() {
        assert!((&Value::Unknown + &Value::Int(1)).is_unknown());
        assert!((&Value::Int(1) + &Value::String("x".to_string())).is_unknown());
        assert!((-&Value::String("x".to_string())).is_unknown());
        assert!((-&Value::Unknown).is_unknown());
    }

    #[test]
    fn test_integer_division_by_zero_is_unknown() {
        assert!((&Value::Int(1) / &Value::Int(0)).is_unknown());
        // Float division by zero follows IEEE.
        assert_eq!(
            &Value::Float(1.0) / &Value::Float(0.0),
            Value::Float(f64::INFINITY)
        );
    }

    #[test]
    fn test_predicates() {
        assert!(Value::Unknown.is_unknown());
        assert!(!Value::Bool(false).is_unknown());
        assert!(Value::Int(1).is_numeric());
        assert!(Value::Float(1.0).is_numeric());
        assert!(!Value::String("1".to_string()).is_numeric());
        assert!(Value::Int(1).same_type(&Value::Int(2)));
        assert!(!Value::Int(1).same_type(&Value::Float(1.0)));
    }

    #[test]
    fn test_bool_or_none() {
        assert_eq!(BoolOrNone::from(true), BoolOrNone::True);
        assert_eq!(BoolOrNone::from(false), BoolOrNone::False);
        assert_eq!(BoolOrNone::True.not(), BoolOrNone::False);
        assert_eq!(BoolOrNone::Unknown.not(), BoolOrNone::Unknown);
        assert!(BoolOrNone::True.is_true());
        assert!(!BoolOrNone::Unknown.is_true());
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Int(-3).to_string(), "-3");
        assert_eq!(Value::String("hi".to_string()).to_string(), "'hi'");
        assert_eq!(Value::Unknown.to_string(), "UNKNOWN");
    }
}
