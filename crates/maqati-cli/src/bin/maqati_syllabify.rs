// maqati-syllabify: split Arabic words into syllables.
//
// Reads words from the command line or stdin (one per line) and prints
// the syllable breakdown, one word per line.
//
// Usage:
//   maqati-syllabify [OPTIONS] [WORD...]
//
// Options:
//   --separator SEP   Separator between syllables (default: -)
//   --patterns        Append the CV-pattern tags after each word
//   --suggest         Show the vocalized form of inferred syllables
//   --no-infer        Disable default-vowel inference
//   -h, --help        Print help

use std::io::{self, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if maqati_cli::wants_help(&args) {
        println!("maqati-syllabify: Split Arabic words into syllables.");
        println!();
        println!("Usage: maqati-syllabify [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, syllabifies each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  --separator SEP   Separator between syllables (default: -)");
        println!("  --patterns        Append the CV-pattern tags after each word");
        println!("  --suggest         Show the vocalized form of inferred syllables");
        println!("  --no-infer        Disable default-vowel inference");
        println!("  -h, --help        Print this help");
        return;
    }

    let mut separator = "-".to_string();
    let mut show_patterns = false;
    let mut suggest = false;
    let mut no_infer = false;
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
            "--patterns" => show_patterns = true,
            "--suggest" => suggest = true,
            "--no-infer" => no_infer = true,
            s if !s.starts_with('-') => words.push(arg.clone()),
            _ => {}
        }
    }

    let mut handle = maqati_cli::new_handle();
    if no_infer {
        handle.set_infer_missing_vowels(false);
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    maqati_cli::for_each_input(&words, |word| {
        let syllables = handle.syllabify(word);

        let rendered: Vec<&str> = syllables
            .iter()
            .map(|s| {
                if suggest {
                    s.suggestion.as_deref().unwrap_or(&s.text)
                } else {
                    s.text.as_str()
                }
            })
            .collect();
        let mut line = rendered.join(&separator);

        if show_patterns {
            let tags: Vec<&str> = syllables.iter().map(|s| s.pattern.as_str()).collect();
            line.push('\t');
            line.push_str(&tags.join(&separator));
        }

        let _ = writeln!(out, "{line}");
    });
}
