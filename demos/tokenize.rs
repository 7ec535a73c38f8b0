//! Example: Print the token stream of a source file
//!
//! Usage: cargo run --example tokenize [script.lisp]
//!
//! Without an argument a built-in sample program is used.

use anyhow::Context;
use lispfront::Lexer;
use std::env;
use std::fs;

const SAMPLE: &str = r#"
(defn hello (n)
  (if (< n 10)
      (print (str "small: " n))
      (print (str "big: " n))))

;; comment
(hello 5)
"#;

fn main() -> anyhow::Result<()> {
    let source = match env::args().nth(1) {
        Some(path) => {
            fs::read_to_string(&path).with_context(|| format!("reading '{}'", path))?
        }
        None => SAMPLE.to_string(),
    };

    for token in Lexer::new(&source) {
        let token = token.context("lexing failed")?;
        println!("{}", token);
    }

    Ok(())
}
