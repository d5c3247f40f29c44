//! CRi interpreter CLI.

use std::io;
use std::path::Path;

use cric::commands::{dump_ast, dump_tokens};
use cric::{
    exit_on_interrupt, init_tracing, read_source, run_file, CriError, Interpreter, Repl,
};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    let Some(command) = args.get(1) else {
        run_repl();
        return;
    };

    match command.as_str() {
        "--tokens" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: cri --tokens <file.cri>");
                std::process::exit(1);
            };
            print_dump(read_source(Path::new(path)).and_then(|source| dump_tokens(&source)));
        }
        "--ast" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: cri --ast <file.cri>");
                std::process::exit(1);
            };
            print_dump(read_source(Path::new(path)).and_then(|source| dump_ast(&source)));
        }
        "--help" | "-h" => {
            print_usage();
        }
        "--version" | "-V" => {
            println!("CRi Language Interpreter {}", env!("CARGO_PKG_VERSION"));
        }
        path if !path.starts_with('-') => {
            if let Err(err) = run_file(path, &mut Interpreter::new()) {
                exit_with(&err);
            }
        }
        _ => {
            eprintln!("Unknown option: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn run_repl() {
    if let Err(err) = exit_on_interrupt() {
        tracing::warn!(%err, "Ctrl-C will not print a farewell");
    }

    let stdin = io::stdin();
    if let Err(err) = Repl::new().run(stdin.lock(), io::stdout()) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn print_dump(result: Result<String, CriError>) {
    match result {
        Ok(text) => print!("{text}"),
        Err(err) => exit_with(&err),
    }
}

fn exit_with(err: &CriError) -> ! {
    eprintln!("Error: {err}");
    std::process::exit(1);
}

fn print_usage() {
    println!("CRi Language Interpreter");
    println!();
    println!("Usage: cri [file.cri]");
    println!();
    println!("With no file, starts interactive mode (REPL).");
    println!();
    println!("Options:");
    println!("  --tokens <file>   Tokenize and display tokens");
    println!("  --ast <file>      Parse and display the program tree");
    println!("  --help, -h        Show this help message");
    println!("  --version, -V     Show version information");
    println!();
    println!("Environment:");
    println!("  RUST_LOG          Enable logging, e.g. RUST_LOG=cri_parse=trace");
}
