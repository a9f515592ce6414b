use zeroize::{Zeroize, ZeroizeOnDrop};

/// A secure string wrapper that zeroizes its contents when dropped
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecureString {
    inner: Vec<u8>,
}

impl SecureString {
    /// Encode characters into a SecureString, wiping the source buffer
    pub fn from_chars(chars: &mut Vec<char>) -> Self {
        let mut inner = Vec::with_capacity(chars.iter().map(|c| c.len_utf8()).sum());
        let mut buf = [0u8; 4];
        for c in chars.iter() {
            inner.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
        }
        buf.zeroize();
        chars.zeroize();
        Self { inner }
    }

    /// Get a string representation (use sparingly, only when needed for display)
    pub fn as_str(&self) -> Result<&str, std::str::Utf8Error> {
        std::str::from_utf8(&self.inner)
    }
}

// Never print the contents
impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(<{} bytes>)", self.inner.len())
    }
}
