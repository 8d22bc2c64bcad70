//! Three-valued evaluation of compiled expressions.
//!
//! Evaluation is total: type mismatches, missing properties and undefined
//! operations surface as `Unknown` rather than errors.

use crate::property::{BoolOrNone, Env, Value};
use crate::selector::ast::Expression;
use crate::selector::operator::{BinaryOperator, UnaryOperator};

/// Evaluate an expression in value context. Boolean-producing nodes yield
/// their tri-state result as a boolean value, with `Unknown` staying
/// unknown.
pub fn eval_value<E: Env + ?Sized>(expr: &Expression, env: &E) -> Value {
    match expr {
        Expression::Literal(v) => v.clone(),
        Expression::Identifier(name) => env.value(name),
        Expression::Binary { op, left, right } => match op {
            BinaryOperator::Add => &eval_value(left, env) + &eval_value(right, env),
            BinaryOperator::Subtract => &eval_value(left, env) - &eval_value(right, env),
            BinaryOperator::Multiply => &eval_value(left, env) * &eval_value(right, env),
            BinaryOperator::Divide => &eval_value(left, env) / &eval_value(right, env),
            _ => eval_bool(expr, env).into(),
        },
        Expression::Unary {
            op: UnaryOperator::Negate,
            operand,
        } => -&eval_value(operand, env),
        _ => eval_bool(expr, env).into(),
    }
}

/// Evaluate an expression in boolean context. A value-producing node is
/// its boolean value when it holds one and `Unknown` otherwise.
pub fn eval_bool<E: Env + ?Sized>(expr: &Expression, env: &E) -> BoolOrNone {
    match expr {
        Expression::And(left, right) => {
            let a = eval_bool(left, env);
            if a == BoolOrNone::False {
                return BoolOrNone::False;
            }
            let b = eval_bool(right, env);
            if b == BoolOrNone::False {
                return BoolOrNone::False;
            }
            if a == BoolOrNone::True && b == BoolOrNone::True {
                BoolOrNone::True
            } else {
                BoolOrNone::Unknown
            }
        }
        Expression::Or(left, right) => {
            let a = eval_bool(left, env);
            if a == BoolOrNone::True {
                return BoolOrNone::True;
            }
            let b = eval_bool(right, env);
            if b == BoolOrNone::True {
                return BoolOrNone::True;
            }
            if a == BoolOrNone::False && b == BoolOrNone::False {
                BoolOrNone::False
            } else {
                BoolOrNone::Unknown
            }
        }
        Expression::Unary {
            op: UnaryOperator::Not,
            operand,
        } => eval_bool(operand, env).not(),
        Expression::Unary {
            op: UnaryOperator::IsNull,
            operand,
        } => eval_value(operand, env).is_unknown().into(),
        Expression::Unary {
            op: UnaryOperator::IsNonNull,
            operand,
        } => (!eval_value(operand, env).is_unknown()).into(),
        Expression::Binary { op, left, right } if op.is_comparison() => {
            let v1 = eval_value(left, env);
            if v1.is_unknown() {
                return BoolOrNone::Unknown;
            }
            let v2 = eval_value(right, env);
            if v2.is_unknown() {
                return BoolOrNone::Unknown;
            }
            let result = match op {
                BinaryOperator::Equal => v1 == v2,
                BinaryOperator::NotEqual => v1 != v2,
                BinaryOperator::Less => v1 < v2,
                BinaryOperator::Greater => v1 > v2,
                BinaryOperator::LessEqual => v1 <= v2,
                BinaryOperator::GreaterEqual => v1 >= v2,
                _ => return BoolOrNone::Unknown,
            };
            result.into()
        }
        Expression::Like { operand, pattern } => match eval_value(operand, env) {
            Value::String(s) => pattern.matches(&s).into(),
            _ => BoolOrNone::Unknown,
        },
        Expression::Between {
            operand,
            lower,
            upper,
        } => {
            let v = eval_value(operand, env);
            let lo = eval_value(lower, env);
            let hi = eval_value(upper, env);
            if v.is_unknown() || lo.is_unknown() || hi.is_unknown() {
                return BoolOrNone::Unknown;
            }
            (v >= lo && v <= hi).into()
        }
        Expression::In {
            operand,
            list,
            negated: false,
        } => {
            let v = eval_value(operand, env);
            if v.is_unknown() {
                return BoolOrNone::Unknown;
            }
            let mut result = BoolOrNone::False;
            for item in list {
                let candidate = eval_value(item, env);
                if candidate.is_unknown() {
                    result = BoolOrNone::Unknown;
                    continue;
                }
                if v == candidate {
                    return BoolOrNone::True;
                }
            }
            result
        }
        Expression::In {
            operand,
            list,
            negated: true,
        } => {
            let v = eval_value(operand, env);
            if v.is_unknown() {
                return BoolOrNone::Unknown;
            }
            let mut result = BoolOrNone::True;
            for item in list {
                let candidate = eval_value(item, env);
                if candidate.is_unknown() {
                    result = BoolOrNone::Unknown;
                    continue;
                }
                // A known candidate of an incompatible type rules this
                // item out; it drags the result toward False unless a
                // later unknown reopens the question.
                if result != BoolOrNone::Unknown
                    && !v.same_type(&candidate)
                    && !(v.is_numeric() && candidate.is_numeric())
                {
                    result = BoolOrNone::False;
                    continue;
                }
                if v == candidate {
                    return BoolOrNone::False;
                }
            }
            result
        }
        _ => match eval_value(expr, env) {
            Value::Bool(b) => b.into(),
            _ => BoolOrNone::Unknown,
        },
    }
}
