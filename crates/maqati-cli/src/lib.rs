// maqati-cli: shared utilities for CLI tools.

use std::io::{self, BufRead};
use std::process;

use maqati_ar::handle::MaqatiHandle;

/// Check whether the arguments ask for help.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "-h" || a == "--help")
}

/// Print an error message and exit with status 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1)
}

/// Create the Arabic handle.
pub fn new_handle() -> MaqatiHandle {
    MaqatiHandle::new("ar").unwrap_or_else(|e| fatal(&e.to_string()))
}

/// Run `f` over each input word: the positional arguments if any were
/// given, otherwise stdin lines (trimmed; blank lines skipped).
pub fn for_each_input<F: FnMut(&str)>(words: &[String], mut f: F) {
    if words.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            f(word);
        }
    } else {
        for word in words {
            f(word);
        }
    }
}
