// Entrypoint for the CLI application.
// - Keeps `main` small: parse the arguments and hand them to the submit flow.
// - A malformed invocation exits with status 1; runtime failures are
//   printed and the process still exits 0, matching the original tool.

use deserpoc_cli::cli::{self, Invocation};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let program = args
        .first()
        .map(String::as_str)
        .unwrap_or("deserpoc-cli");

    let inv = match Invocation::parse(args.get(1..).unwrap_or(&[])) {
        Some(inv) => inv,
        None => {
            cli::print_usage(program);
            std::process::exit(1);
        }
    };

    // File and network errors are caught broadly and reported with the
    // underlying error text; no retry is attempted.
    if let Err(e) = cli::run(&inv) {
        println!();
        println!("[!] Error: {:#}", e);
    }
}
