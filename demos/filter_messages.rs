//! Compile a selector once and filter a batch of messages with it.
//!
//! Run with: cargo run --example filter_messages

use selector::{compile, Properties};

fn main() {
    env_logger::init();

    let selector = match compile("price > 10 AND colour IN ('red', 'blue') AND name LIKE 'sku-%'") {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    println!("compiled: {}", selector);

    let messages = vec![
        Properties::new()
            .with("name", "sku-100")
            .with("price", 12i64)
            .with("colour", "red"),
        Properties::new()
            .with("name", "sku-101")
            .with("price", 8i64)
            .with("colour", "blue"),
        Properties::new()
            .with("name", "misc-1")
            .with("price", 20i64)
            .with("colour", "blue"),
        Properties::new()
            .with("name", "sku-102")
            .with("price", 15i64),
    ];

    for (i, msg) in messages.iter().enumerate() {
        let verdict = if selector.evaluate(msg) {
            "deliver"
        } else {
            "skip"
        };
        println!("message {}: {}", i, verdict);
    }
}
