//! Print the module references of a JavaScript/TypeScript file.
//!
//! Usage: `cargo run --example list_imports -- path/to/file.js`

use std::env;
use std::fs;
use std::process::ExitCode;

fn main() -> ExitCode {
    let Some(path) = env::args().nth(1) else {
        eprintln!("usage: list_imports <file.js>");
        return ExitCode::FAILURE;
    };

    let source = match fs::read_to_string(&path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("reading {path}: {err}");
            return ExitCode::FAILURE;
        }
    };

    match jsimports::extract(&source) {
        Ok(paths) => {
            for p in paths {
                println!("{p}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("extracting from {path}: {err}");
            ExitCode::FAILURE
        }
    }
}
