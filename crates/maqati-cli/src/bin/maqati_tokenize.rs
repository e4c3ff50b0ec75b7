// maqati-tokenize: split text into word, whitespace and punctuation
// tokens.
//
// Reads lines from stdin (or the arguments joined with spaces) and
// prints one token per line as "TYPE<TAB>text".
//
// Usage:
//   maqati-tokenize [TEXT...]

use std::io::{self, BufRead, Write};

use maqati_core::enums::TokenType;

fn token_type_name(t: TokenType) -> &'static str {
    match t {
        TokenType::None => "NONE",
        TokenType::Word => "WORD",
        TokenType::Punctuation => "PUNCT",
        TokenType::Whitespace => "SPACE",
        TokenType::Unknown => "UNKNOWN",
    }
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if maqati_cli::wants_help(&args) {
        println!("maqati-tokenize: Split text into tokens.");
        println!();
        println!("Usage: maqati-tokenize [TEXT...]");
        println!();
        println!("If TEXT arguments are given, tokenizes them joined by spaces.");
        println!("Otherwise reads lines from stdin.");
        println!();
        println!("Prints one token per line as TYPE<TAB>text.");
        return;
    }

    let handle = maqati_cli::new_handle();

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let mut print_tokens = |text: &str| {
        for token in handle.tokens(text) {
            let _ = writeln!(out, "{}\t{}", token_type_name(token.token_type), token.text);
        }
    };

    if args.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            print_tokens(&line);
        }
    } else {
        print_tokens(&args.join(" "));
    }
}
