//! Error text capture.
//!
//! Precedence: explicit argument, then piped stdin, then the system
//! clipboard (for logs copied out of a terminal). Blank text at any
//! stage falls through to the next; if every source is blank the caller
//! gets the no-input error before any network call is made.

use std::io::{IsTerminal, Read};
use std::process::{Command, Stdio};

use bugsage_core::analysis::ErrorReport;
use bugsage_core::{BugsageError, BugsageResult};

/// Capture the error text to analyze.
pub fn capture(arg: Option<String>) -> BugsageResult<ErrorReport> {
    if let Some(text) = arg {
        if !text.trim().is_empty() {
            return ErrorReport::new(text);
        }
    }

    if let Some(text) = read_piped_stdin()? {
        if !text.trim().is_empty() {
            return ErrorReport::new(text);
        }
    }

    if let Some(text) = read_clipboard() {
        if !text.trim().is_empty() {
            return ErrorReport::new(text);
        }
    }

    Err(BugsageError::EmptyReport)
}

/// Read stdin only when it is a pipe, never when interactive.
fn read_piped_stdin() -> BugsageResult<Option<String>> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }

    let mut text = String::new();
    stdin.lock().read_to_string(&mut text)?;
    Ok(Some(text))
}

/// Read the system clipboard via whichever native tool is present.
/// Tries wl-paste on Wayland, then xclip, xsel, and pbpaste.
fn read_clipboard() -> Option<String> {
    let try_command = |cmd: &str, args: &[&str]| -> Option<String> {
        let output = Command::new(cmd)
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .ok()?;
        if output.status.success() {
            String::from_utf8(output.stdout).ok()
        } else {
            None
        }
    };

    if std::env::var("WAYLAND_DISPLAY").is_ok() {
        if let Some(text) = try_command("wl-paste", &["--no-newline"]) {
            return Some(text);
        }
    }

    try_command("xclip", &["-selection", "clipboard", "-o"])
        .or_else(|| try_command("xsel", &["--clipboard", "--output"]))
        .or_else(|| try_command("pbpaste", &[]))
}
