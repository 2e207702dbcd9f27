//! Object-id style identifiers for projects.
//!
//! An id is 12 bytes rendered as 24 lowercase hex characters:
//!
//! | bytes | content                                  |
//! |-------|------------------------------------------|
//! | 0..4  | seconds since the UNIX epoch, big-endian |
//! | 4..9  | per-process random value                 |
//! | 9..12 | wrapping counter, big-endian             |
//!
//! Ids generated by one process are unique and roughly ordered by creation
//! time. Parsing accepts upper- or lowercase hex; display is always lowercase.

use crate::{CoreError, Result as CoreErrorResult};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU32, Ordering};

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Length of the hex form of an id
pub const OBJECT_ID_HEX_LEN: usize = 24;

const COUNTER_MASK: u32 = 0x00ff_ffff;

static PROCESS_UNIQUE: OnceLock<[u8; 5]> = OnceLock::new();
static COUNTER: OnceLock<AtomicU32> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId([u8; 12]);

impl ObjectId {
    /// Generate a fresh id stamped with the current time.
    pub fn new() -> Self {
        Self::with_timestamp(Utc::now())
    }

    /// Generate a fresh id stamped with `at` (seconds precision).
    pub fn with_timestamp(at: DateTime<Utc>) -> Self {
        let seconds = at.timestamp() as u32;
        let process = PROCESS_UNIQUE.get_or_init(rand::random::<[u8; 5]>);
        let count = COUNTER
            .get_or_init(|| AtomicU32::new(rand::random::<u32>() & COUNTER_MASK))
            .fetch_add(1, Ordering::Relaxed)
            & COUNTER_MASK;

        let mut bytes = [0u8; 12];
        bytes[0..4].copy_from_slice(&seconds.to_be_bytes());
        bytes[4..9].copy_from_slice(process);
        bytes[9..12].copy_from_slice(&count.to_be_bytes()[1..4]);
        Self(bytes)
    }

    /// Format-level check only; says nothing about existence.
    pub fn is_valid(value: &str) -> bool {
        value.len() == OBJECT_ID_HEX_LEN && value.bytes().all(|b| b.is_ascii_hexdigit())
    }

    #[track_caller]
    pub fn parse_str(value: &str) -> CoreErrorResult<Self> {
        if !Self::is_valid(value) {
            return Err(CoreError::InvalidId {
                value: value.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut bytes = [0u8; 12];
        hex::decode_to_slice(value, &mut bytes).map_err(|_| CoreError::InvalidId {
            value: value.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;
        Ok(Self(bytes))
    }

    /// Creation time embedded in the id
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        let seconds = u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]]);
        DateTime::from_timestamp(i64::from(seconds), 0)
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for ObjectId {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        Self::parse_str(s)
    }
}

impl Serialize for ObjectId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ObjectId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse_str(&s).map_err(|_| {
            serde::de::Error::custom(format!("{} is not a valid id", s))
        })
    }
}
