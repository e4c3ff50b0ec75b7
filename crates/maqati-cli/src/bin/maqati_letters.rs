// maqati-letters: split Arabic words into letter units.
//
// Each unit is a base character with the marks written on it, so
// diacritics are never shown detached from their letter.
//
// Usage:
//   maqati-letters [OPTIONS] [WORD...]
//
// Options:
//   --separator SEP   Separator between units (default: space)
//   -h, --help        Print help

use std::io::{self, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if maqati_cli::wants_help(&args) {
        println!("maqati-letters: Split Arabic words into letter units.");
        println!();
        println!("Usage: maqati-letters [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, splits each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  --separator SEP   Separator between units (default: space)");
        println!("  -h, --help        Print this help");
        return;
    }

    let mut separator = " ".to_string();
    let mut words: Vec<String> = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        match arg.as_str() {
            "--separator" => {
                if i + 1 < args.len() {
                    separator = args[i + 1].clone();
                    skip_next = true;
                }
            }
            s if !s.starts_with('-') => words.push(arg.clone()),
            _ => {}
        }
    }

    let handle = maqati_cli::new_handle();

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    maqati_cli::for_each_input(&words, |word| {
        let units = handle.letter_units(word);
        let _ = writeln!(out, "{}", units.join(&separator));
    });
}
