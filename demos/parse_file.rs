//! Example: Parse a source file and print its tree
//!
//! Usage: cargo run --example parse_file [--json | --typed] [script.lisp]
//!
//! - default: indented parse tree
//! - `--json`: parse tree as pretty-printed JSON
//! - `--typed`: lowered typed AST
//!
//! Without a path a built-in sample program is used.

use anyhow::Context;
use lispfront::{ast, Parser};
use std::env;
use std::fs;
use std::process;

const SAMPLE: &str = r#"
(defn hello (n)
  (if (< n 10)
      (print (str "small: " n))
      (print (str "big: " n))))
(hello 5)
"#;

enum Output {
    Tree,
    Json,
    Typed,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let mut output = Output::Tree;
    let mut path = None;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--json" => output = Output::Json,
            "--typed" => output = Output::Typed,
            _ if arg.starts_with("--") => anyhow::bail!("unknown flag '{}'", arg),
            _ => path = Some(arg),
        }
    }

    let source = match &path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading '{}'", path))?
        }
        None => SAMPLE.to_string(),
    };

    let mut parser = Parser::from_source(&source)?;
    let tree = parser.parse()?;

    match output {
        Output::Tree => println!("{}", tree),
        Output::Json => println!("{}", serde_json::to_string_pretty(&tree)?),
        Output::Typed => println!("{}", ast::Program::from_node(&tree)?),
    }

    Ok(())
}
