//! Snowflake ID - structured 64-bit unique identifier
//!
//! Structure:
//! - Bits 63-22: Timestamp (milliseconds since custom epoch, 42 bits)
//! - Bits 21-17: Worker ID (0-31)
//! - Bits 16-12: Process ID (0-31)
//! - Bits 11-0:  Sequence number (0-4095)

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::atomic::{AtomicU16, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Structured 64-bit identifier (unsigned, full range)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Snowflake(u64);

impl Snowflake {
    /// Custom epoch: 2015-01-01 00:00:00 UTC (milliseconds)
    pub const EPOCH: u64 = 1_420_070_400_000;

    const TIMESTAMP_SHIFT: u32 = 22;
    const WORKER_SHIFT: u32 = 17;
    const PROCESS_SHIFT: u32 = 12;
    const WORKER_MASK: u64 = 0x1F;
    const PROCESS_MASK: u64 = 0x1F;
    const SEQUENCE_MASK: u64 = 0xFFF;

    /// Create a new Snowflake from a raw u64 value
    #[inline]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the inner u64 value
    #[inline]
    pub const fn into_inner(self) -> u64 {
        self.0
    }

    /// Check if the Snowflake is zero (uninitialized)
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Extract timestamp (milliseconds since Unix epoch)
    #[inline]
    pub const fn timestamp_millis(&self) -> u64 {
        (self.0 >> Self::TIMESTAMP_SHIFT) + Self::EPOCH
    }

    /// Extract worker ID (0-31)
    #[inline]
    pub const fn worker_id(&self) -> u8 {
        ((self.0 >> Self::WORKER_SHIFT) & Self::WORKER_MASK) as u8
    }

    /// Extract process ID (0-31)
    #[inline]
    pub const fn process_id(&self) -> u8 {
        ((self.0 >> Self::PROCESS_SHIFT) & Self::PROCESS_MASK) as u8
    }

    /// Extract sequence number (0-4095)
    #[inline]
    pub const fn sequence(&self) -> u16 {
        (self.0 & Self::SEQUENCE_MASK) as u16
    }

    /// Split into the four embedded fields
    pub const fn deconstruct(&self) -> SnowflakeParts {
        SnowflakeParts {
            timestamp_millis: self.timestamp_millis(),
            worker_id: self.worker_id(),
            process_id: self.process_id(),
            sequence: self.sequence(),
        }
    }

    /// Assemble a Snowflake from its four fields
    ///
    /// Inverse of [`Snowflake::deconstruct`]: `from_parts(x.deconstruct()) == x`
    /// holds for every valid id.
    pub const fn from_parts(parts: SnowflakeParts) -> Self {
        let elapsed = parts.timestamp_millis.saturating_sub(Self::EPOCH);
        Self(
            (elapsed << Self::TIMESTAMP_SHIFT)
                | ((parts.worker_id as u64 & Self::WORKER_MASK) << Self::WORKER_SHIFT)
                | ((parts.process_id as u64 & Self::PROCESS_MASK) << Self::PROCESS_SHIFT)
                | (parts.sequence as u64 & Self::SEQUENCE_MASK),
        )
    }

    /// Convert the embedded timestamp to DateTime<Utc>
    pub fn created_at(&self) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(self.timestamp_millis() as i64)
            .single()
            .unwrap_or_else(|| DateTime::<Utc>::UNIX_EPOCH)
    }

    /// Check structural plausibility: the embedded timestamp must be
    /// strictly in the past and every field within its bit width.
    ///
    /// This does not determine whether the id exists on the remote side.
    pub fn is_valid(&self) -> bool {
        let parts = self.deconstruct();
        parts.timestamp_millis < current_millis()
            && u64::from(parts.worker_id) <= Self::WORKER_MASK
            && u64::from(parts.process_id) <= Self::PROCESS_MASK
            && u64::from(parts.sequence) <= Self::SEQUENCE_MASK
    }

    /// Parse from string representation
    pub fn parse(s: &str) -> Result<Self, SnowflakeParseError> {
        s.parse::<u64>()
            .map(Snowflake)
            .map_err(|_| SnowflakeParseError::InvalidFormat)
    }
}

/// The four fields embedded in a Snowflake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnowflakeParts {
    /// Absolute milliseconds since the Unix epoch
    pub timestamp_millis: u64,
    /// Worker ID (5 bits)
    pub worker_id: u8,
    /// Process ID (5 bits)
    pub process_id: u8,
    /// Per-generator sequence number (12 bits)
    pub sequence: u16,
}

/// Error when parsing a Snowflake from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SnowflakeParseError {
    #[error("invalid snowflake format")]
    InvalidFormat,
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Snowflake {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<Snowflake> for u64 {
    fn from(id: Snowflake) -> Self {
        id.0
    }
}

impl std::str::FromStr for Snowflake {
    type Err = SnowflakeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Snowflake::parse(s)
    }
}

// Serialize as string for JSON (JavaScript BigInt safety)
impl Serialize for Snowflake {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

// Deserialize from string or number
impl<'de> Deserialize<'de> for Snowflake {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct SnowflakeVisitor;

        impl<'de> Visitor<'de> for SnowflakeVisitor {
            type Value = Snowflake;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or integer representing a snowflake ID")
            }

            fn visit_u64<E>(self, value: u64) -> Result<Snowflake, E>
            where
                E: de::Error,
            {
                Ok(Snowflake(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Snowflake, E>
            where
                E: de::Error,
            {
                u64::try_from(value)
                    .map(Snowflake)
                    .map_err(|_| de::Error::custom("negative snowflake"))
            }

            fn visit_str<E>(self, value: &str) -> Result<Snowflake, E>
            where
                E: de::Error,
            {
                value
                    .parse::<u64>()
                    .map(Snowflake)
                    .map_err(|_| de::Error::custom("invalid snowflake string"))
            }
        }

        deserializer.deserialize_any(SnowflakeVisitor)
    }
}

fn current_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Snowflake ID generator
///
/// A client process constructs exactly one generator and passes it by
/// handle; the 12-bit sequence counter is owned by the instance and wraps
/// from 4095 back to 0.
pub struct SnowflakeGenerator {
    worker_id: u8,
    process_id: u8,
    sequence: AtomicU16,
}

impl SnowflakeGenerator {
    /// Create a new generator with the given worker and process IDs
    ///
    /// # Panics
    /// Panics if either id does not fit its 5-bit field.
    pub fn new(worker_id: u8, process_id: u8) -> Self {
        assert!(worker_id < 32, "Worker ID must be < 32");
        assert!(process_id < 32, "Process ID must be < 32");
        Self {
            worker_id,
            process_id,
            sequence: AtomicU16::new(0),
        }
    }

    /// Create the generator a single-process client uses: worker ID 1,
    /// process ID 0. Uniqueness rests on the millisecond timestamp plus
    /// the sequence counter; there is no multi-process coordination.
    pub fn new_client() -> Self {
        Self::new(1, 0)
    }

    /// Generate a new Snowflake from the current time
    pub fn generate(&self) -> Snowflake {
        // AtomicU16 wraps at 65536, a multiple of 4096, so the masked
        // sequence cycles 0..=4095 without discontinuity.
        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed) & 0xFFF;
        Snowflake::from_parts(SnowflakeParts {
            timestamp_millis: current_millis(),
            worker_id: self.worker_id,
            process_id: self.process_id,
            sequence,
        })
    }

    /// Get the worker ID of this generator
    pub fn worker_id(&self) -> u8 {
        self.worker_id
    }

    /// Get the process ID of this generator
    pub fn process_id(&self) -> u8 {
        self.process_id
    }
}

impl Default for SnowflakeGenerator {
    fn default() -> Self {
        Self::new_client()
    }
}
