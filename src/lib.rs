//! SQL-92 message selector expressions.
//!
//! A selector such as `price > 10 AND colour IN ('red', 'blue')` is compiled
//! once into an expression tree and then evaluated, typically millions of
//! times, against the typed properties of individual messages. Evaluation
//! follows SQL-92 three-valued logic: a missing or mistyped property never
//! fails a filter, it simply does not match.
//!
//! ```
//! use selector::{compile, Properties, Value};
//!
//! let s = compile("price > 10 AND colour = 'red'").unwrap();
//! let msg = Properties::new()
//!     .with("price", Value::Int(12))
//!     .with("colour", Value::from("red"));
//! assert!(s.evaluate(&msg));
//! ```

pub mod property;
pub mod selector;

pub use property::{BoolOrNone, Env, Properties, Value};
pub use selector::{compile, Selector, SelectorError};
