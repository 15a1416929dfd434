//! glint - Colors, styles, frames and emoji for terminal text
//!
//! This is the main entry point; argument parsing and dispatch live in
//! the `glint-cli` crate.

use std::process::ExitCode;

fn main() -> ExitCode {
    glint_cli::run()
}
