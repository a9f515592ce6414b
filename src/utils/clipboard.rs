//! Clipboard access for generated passwords.
//!
//! X11 and Wayland only keep a selection alive while its owner runs, so on
//! Linux the copy is handed to a detached `trivpass hold-clipboard` process
//! that owns the selection until the timeout expires (which also clears
//! it). Other platforms keep clipboard contents after exit; macOS schedules
//! a separate clear.

#[cfg(any(target_os = "linux", test))]
use std::io::BufRead;
#[cfg(target_os = "linux")]
use std::io::{BufReader, Write};
#[cfg(not(target_os = "windows"))]
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// Line the holder process prints once it owns the clipboard
#[cfg(any(target_os = "linux", test))]
const READY: &str = "ok";
/// Prefix of the line printed when the holder cannot take the clipboard
#[cfg(any(target_os = "linux", test))]
const FAILED: &str = "error: ";

/// Destination for a copied password
pub trait ClipboardSink {
    /// Place `text` on the clipboard
    fn copy(&mut self, text: &str) -> Result<()>;

    /// Seconds until the copied text is cleared, if it will be
    fn clear_after(&self) -> Option<u64>;
}

/// The host clipboard, cleared after a timeout
///
/// On Linux the current executable must be `trivpass`, which provides the
/// `hold-clipboard` helper command.
pub struct SecureClipboard {
    timeout_seconds: u64,
}

impl SecureClipboard {
    /// A timeout of zero leaves the text in place
    pub fn new(timeout_seconds: u64) -> Self {
        Self { timeout_seconds }
    }
}

impl ClipboardSink for SecureClipboard {
    #[cfg(target_os = "linux")]
    fn copy(&mut self, text: &str) -> Result<()> {
        let exe = std::env::current_exe().map_err(|e| {
            Error::ClipboardUnavailable(format!("cannot locate clipboard helper: {}", e))
        })?;

        let mut child = Command::new(exe)
            .arg("hold-clipboard")
            .arg("--timeout")
            .arg(self.timeout_seconds.to_string())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                Error::ClipboardUnavailable(format!("cannot start clipboard helper: {}", e))
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes())?;
        }

        let stdout = child.stdout.take().ok_or_else(|| {
            Error::ClipboardUnavailable("clipboard helper has no output".to_string())
        })?;

        // The child keeps running after we return
        read_handshake(BufReader::new(stdout))?;
        tracing::debug!(pid = child.id(), timeout = self.timeout_seconds, "clipboard held");
        Ok(())
    }

    #[cfg(not(target_os = "linux"))]
    fn copy(&mut self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new().map_err(unavailable)?;
        clipboard.set_text(text).map_err(unavailable)?;

        if self.timeout_seconds > 0 {
            schedule_clear(self.timeout_seconds);
        }
        Ok(())
    }

    fn clear_after(&self) -> Option<u64> {
        if cfg!(target_os = "windows") || self.timeout_seconds == 0 {
            None
        } else {
            Some(self.timeout_seconds)
        }
    }
}

fn unavailable(e: arboard::Error) -> Error {
    Error::ClipboardUnavailable(e.to_string())
}

/// Take the clipboard with text read from stdin and hold it
///
/// Runs in the detached helper process. Reports readiness on stdout, then
/// serves the selection until the timeout passes, or until another
/// application takes it when the timeout is zero.
#[cfg(target_os = "linux")]
pub fn hold_from_stdin(timeout_seconds: u64) -> Result<()> {
    use arboard::SetExtLinux;
    use std::io::Read;
    use std::time::{Duration, Instant};
    use zeroize::Zeroize;

    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;

    let mut stdout = std::io::stdout();
    let mut clipboard = match arboard::Clipboard::new() {
        Ok(c) => c,
        Err(e) => {
            writeln!(stdout, "{}{}", FAILED, e)?;
            text.zeroize();
            return Err(unavailable(e));
        }
    };

    // Non-blocking set first so failures reach the parent
    if let Err(e) = clipboard.set_text(text.as_str()) {
        writeln!(stdout, "{}{}", FAILED, e)?;
        text.zeroize();
        return Err(unavailable(e));
    }
    writeln!(stdout, "{}", READY)?;
    stdout.flush()?;

    let set = clipboard.set();
    let held = if timeout_seconds > 0 {
        set.wait_until(Instant::now() + Duration::from_secs(timeout_seconds))
            .text(text.as_str())
    } else {
        set.wait().text(text.as_str())
    };
    text.zeroize();

    held.map_err(unavailable)
}

/// Read the holder's single status line
#[cfg(any(target_os = "linux", test))]
fn read_handshake<R: BufRead>(mut reader: R) -> Result<()> {
    let mut line = String::new();
    reader.read_line(&mut line)?;

    match line.trim_end() {
        READY => Ok(()),
        "" => Err(Error::ClipboardUnavailable(
            "clipboard helper exited without taking the clipboard".to_string(),
        )),
        status => Err(Error::ClipboardUnavailable(
            status.strip_prefix(FAILED).unwrap_or(status).to_string(),
        )),
    }
}

#[cfg(not(any(target_os = "linux", target_os = "windows")))]
fn schedule_clear(timeout_seconds: u64) {
    let spawned = Command::new("sh")
        .arg("-c")
        .arg(format!("sleep {} && printf '' | pbcopy", timeout_seconds))
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    if let Err(e) = spawned {
        tracing::warn!(error = %e, "could not schedule clipboard clear");
    }
}

#[cfg(target_os = "windows")]
fn schedule_clear(timeout_seconds: u64) {
    tracing::warn!(timeout_seconds, "clipboard auto-clear not supported on this platform");
}
