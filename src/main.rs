//! CLI entry point for paths
//!
//! This provides a command-line interface for checking, formatting and
//! playing `.paths` story files.

use paths::cli;
use paths::library::troll_adventure;
use std::path::PathBuf;
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = &args[1];

    match command.as_str() {
        "check" => {
            let file_path = require_file(&args);
            match cli::check::run_check(&file_path) {
                Ok(true) => {}
                Ok(false) => process::exit(1),
                Err(err) => fail("Check failed", err),
            }
        }
        "fmt" => {
            let file_path = require_file(&args);
            if let Err(err) = cli::check::run_fmt(&file_path) {
                fail("Formatting failed", err);
            }
        }
        "play" => {
            let debug = args.iter().skip(2).any(|arg| arg == "--debug");
            let file = args.iter().skip(2).find(|arg| !arg.starts_with("--"));
            let story = match file {
                Some(path) => cli::load_story_file(&PathBuf::from(path)),
                None => troll_adventure().map_err(anyhow::Error::from),
            };
            let result = story.and_then(|story| cli::play::run_play(story, debug));
            if let Err(err) = result {
                fail("Player mode failed", err);
            }
        }
        "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("Error: Unknown command '{}'", command);
            eprintln!();
            print_usage();
            process::exit(1);
        }
    }
}

fn require_file(args: &[String]) -> PathBuf {
    match args.get(2) {
        Some(path) => PathBuf::from(path),
        None => {
            eprintln!("Error: Missing story file path");
            eprintln!();
            print_usage();
            process::exit(1);
        }
    }
}

fn fail(what: &str, err: anyhow::Error) -> ! {
    eprintln!("Error: {}", what);
    eprintln!("Reason: {:#}", err);
    process::exit(1);
}

fn print_usage() {
    println!("paths - Narrative Story Engine");
    println!();
    println!("USAGE:");
    println!("    paths <command> [<story.paths>] [--debug]");
    println!();
    println!("COMMANDS:");
    println!("    check <file>            Parse and lint a story file");
    println!("    fmt <file>              Print the canonical form of a story file");
    println!("    play [<file>] [--debug] Play a story (the built-in story without a file)");
    println!("    --help, -h              Show this help message");
    println!();
    println!("ENVIRONMENT:");
    println!("    PATHS_STRICT    When set, warnings make 'check' fail");
    println!();
    println!("EXAMPLES:");
    println!("    paths check stories/haunted_house.paths");
    println!("    paths play stories/haunted_house.paths --debug");
}
