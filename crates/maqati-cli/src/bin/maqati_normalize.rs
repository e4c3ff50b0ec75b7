// maqati-normalize: strip vocalization from Arabic words.
//
// Usage:
//   maqati-normalize [OPTIONS] [WORD...]
//
// Options:
//   --keep-article   Strip harakat only, keep a leading definite article
//   -h, --help       Print help

use std::io::{self, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if maqati_cli::wants_help(&args) {
        println!("maqati-normalize: Strip vocalization from Arabic words.");
        println!();
        println!("Usage: maqati-normalize [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, normalizes each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  --keep-article   Strip harakat only, keep a leading definite article");
        println!("  -h, --help       Print this help");
        return;
    }

    let mut keep_article = false;
    let mut words: Vec<String> = Vec::new();

    for arg in &args {
        match arg.as_str() {
            "--keep-article" => keep_article = true,
            s if !s.starts_with('-') => words.push(arg.clone()),
            _ => {}
        }
    }

    let handle = maqati_cli::new_handle();

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    maqati_cli::for_each_input(&words, |word| {
        let normalized = if keep_article {
            handle.strip_harakat(word)
        } else {
            handle.normalize(word)
        };
        let _ = writeln!(out, "{normalized}");
    });
}
