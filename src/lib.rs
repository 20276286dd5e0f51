// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to implement the one-shot submit flow.
//
// Module responsibilities:
// - `api`: Encapsulates the HTTP interaction with the target endpoint
//   (multipart upload of the payload with the auth cookie attached).
// - `cli`: Parses the positional arguments and prints the report.
//
// Keeping this separation makes the request-building logic testable
// against a local mock server without going through the binary.
pub mod api;
pub mod cli;
