pub mod clipboard;
pub mod secure_string;

pub use clipboard::{ClipboardSink, SecureClipboard};
pub use secure_string::SecureString;
