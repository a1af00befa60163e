use crate::error::{GitverError, Result};
use std::fmt;
use std::str::FromStr;

/// Width of an object identifier in bytes (SHA-1)
pub const OBJECT_ID_LEN: usize = 20;

/// Opaque, fixed-width identifier of a git object (commit or tag)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ObjectId([u8; OBJECT_ID_LEN]);

impl ObjectId {
    /// Create an identifier from raw bytes
    pub const fn new(bytes: [u8; OBJECT_ID_LEN]) -> Self {
        ObjectId(bytes)
    }

    /// The all-zero identifier, used when no commit applies
    pub const fn zero() -> Self {
        ObjectId([0; OBJECT_ID_LEN])
    }

    /// Create an identifier from a byte slice of exactly 20 bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let raw: [u8; OBJECT_ID_LEN] = bytes.try_into().map_err(|_| {
            GitverError::parse(format!(
                "object id must be {} bytes, got {}",
                OBJECT_ID_LEN,
                bytes.len()
            ))
        })?;
        Ok(ObjectId(raw))
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    pub fn as_bytes(&self) -> &[u8; OBJECT_ID_LEN] {
        &self.0
    }

    /// Full lowercase hex rendering (40 characters)
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{:02x}", b)).collect()
    }

    /// First `len` hex characters, capped at the full width
    pub fn short_hex(&self, len: usize) -> String {
        let mut hex = self.to_hex();
        hex.truncate(len);
        hex
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl FromStr for ObjectId {
    type Err = GitverError;

    fn from_str(s: &str) -> Result<Self> {
        if s.len() != OBJECT_ID_LEN * 2 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(GitverError::parse(format!(
                "invalid object id '{}': expected {} hex characters",
                s,
                OBJECT_ID_LEN * 2
            )));
        }

        let mut raw = [0u8; OBJECT_ID_LEN];
        for (i, byte) in raw.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&s[i * 2..i * 2 + 2], 16)
                .map_err(|e| GitverError::parse(format!("invalid object id '{}': {}", s, e)))?;
        }
        Ok(ObjectId(raw))
    }
}

impl From<git2::Oid> for ObjectId {
    fn from(oid: git2::Oid) -> Self {
        let mut raw = [0u8; OBJECT_ID_LEN];
        raw.copy_from_slice(&oid.as_bytes()[..OBJECT_ID_LEN]);
        ObjectId(raw)
    }
}

impl TryFrom<ObjectId> for git2::Oid {
    type Error = git2::Error;

    fn try_from(id: ObjectId) -> std::result::Result<Self, Self::Error> {
        git2::Oid::from_bytes(&id.0)
    }
}
