use crate::id::layout::{FieldLayout, write_bit_layout_debug};
use crate::{DISCORD_EPOCH_MILLIS, DecodeError, TimeSource, decimal, years_between};
use core::fmt;
use core::str::FromStr;
#[cfg(feature = "tracing")]
use tracing::instrument;

/// A 64-bit Discord Snowflake.
///
/// - 42 bits timestamp (ms since [`DISCORD_EPOCH`])
/// - 5 bits internal worker ID
/// - 5 bits internal process ID
/// - 12 bits increment (IDs created in the same millisecond)
///
/// ```text
///  Bit Index:  63             22 21           17 16            12 11              0
///              +----------------+---------------+----------------+----------------+
///  Field:      | timestamp (42) | worker ID (5) | process ID (5) | increment (12) |
///              +----------------+---------------+----------------+----------------+
///              |<----- MSB ---------------- 64 bits ----------------- LSB ----->|
/// ```
///
/// The four fields cover all 64 bits, so decoding never discards information:
/// [`Snowflake::from_components`] applied to the decoded fields rebuilds the
/// original value exactly.
///
/// # Example
///
/// ```
/// use cordkit::Snowflake;
///
/// let id = Snowflake::decode("175928847299117063").unwrap();
/// assert_eq!(id.timestamp_millis(), 1_462_015_105_796);
/// assert_eq!(id.worker_id(), 1);
/// assert_eq!(id.process_id(), 0);
/// assert_eq!(id.increment(), 7);
/// ```
/// [`DISCORD_EPOCH`]: crate::DISCORD_EPOCH
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Snowflake {
    id: u64,
}

impl Snowflake {
    /// Bitmask for extracting the 42-bit timestamp field. Occupies bits 22
    /// through 63.
    pub const TIMESTAMP_MASK: u64 = (1 << 42) - 1;

    /// Bitmask for extracting the 5-bit worker ID field. Occupies bits 17
    /// through 21.
    pub const WORKER_ID_MASK: u64 = (1 << 5) - 1;

    /// Bitmask for extracting the 5-bit process ID field. Occupies bits 12
    /// through 16.
    pub const PROCESS_ID_MASK: u64 = (1 << 5) - 1;

    /// Bitmask for extracting the 12-bit increment field. Occupies bits 0
    /// through 11.
    pub const INCREMENT_MASK: u64 = (1 << 12) - 1;

    /// Number of bits to shift the timestamp to its correct position (bit 22).
    pub const TIMESTAMP_SHIFT: u64 = 22;

    /// Number of bits to shift the worker ID to its correct position (bit 17).
    pub const WORKER_ID_SHIFT: u64 = 17;

    /// Number of bits to shift the process ID to its correct position (bit 12).
    pub const PROCESS_ID_SHIFT: u64 = 12;

    /// Number of bits to shift the increment field (bit 0).
    pub const INCREMENT_SHIFT: u64 = 0;

    /// Wraps a raw 64-bit value. Every `u64` is a structurally valid Snowflake.
    pub const fn from_raw(id: u64) -> Self {
        Self { id }
    }

    /// Returns the raw 64-bit value.
    pub const fn to_raw(&self) -> u64 {
        self.id
    }

    /// Decodes a decimal Snowflake string.
    ///
    /// The input must match `^[0-9]+$`. Anything else (empty input, signs,
    /// whitespace, letters) is [`DecodeError::InvalidFormat`]. Digit strings
    /// whose value is `2^64` or more are rejected with
    /// [`DecodeError::OutOfRange`] instead of being truncated.
    ///
    /// `"0"` is accepted and decodes to the epoch itself with every other
    /// field zero.
    ///
    /// # Errors
    ///
    /// See above.
    #[cfg_attr(feature = "tracing", instrument(level = "trace"))]
    pub fn decode(input: &str) -> Result<Self, DecodeError> {
        let id = decimal::parse_u64(input)?;
        Ok(Self::from_raw(id))
    }

    /// Packs the four fields back into a Snowflake.
    ///
    /// `timestamp_millis` is an absolute UNIX timestamp; timestamps before
    /// the Discord epoch saturate to the epoch. Each field is masked to its
    /// width, so out-of-range inputs wrap rather than bleed into neighbouring
    /// fields.
    pub const fn from_components(
        timestamp_millis: u64,
        worker_id: u64,
        process_id: u64,
        increment: u64,
    ) -> Self {
        let timestamp = (timestamp_millis.saturating_sub(DISCORD_EPOCH_MILLIS)
            & Self::TIMESTAMP_MASK)
            << Self::TIMESTAMP_SHIFT;
        let worker_id = (worker_id & Self::WORKER_ID_MASK) << Self::WORKER_ID_SHIFT;
        let process_id = (process_id & Self::PROCESS_ID_MASK) << Self::PROCESS_ID_SHIFT;
        let increment = (increment & Self::INCREMENT_MASK) << Self::INCREMENT_SHIFT;
        Self {
            id: timestamp | worker_id | process_id | increment,
        }
    }

    /// Milliseconds since the Discord epoch (the raw 42-bit field).
    pub const fn timestamp(&self) -> u64 {
        (self.id >> Self::TIMESTAMP_SHIFT) & Self::TIMESTAMP_MASK
    }

    /// Creation time in milliseconds since the UNIX epoch.
    pub const fn timestamp_millis(&self) -> u64 {
        self.timestamp() + DISCORD_EPOCH_MILLIS
    }

    /// Creation time in whole seconds since the UNIX epoch.
    pub const fn unix_seconds(&self) -> u64 {
        self.timestamp_millis() / 1000
    }

    /// Extracts the internal worker ID.
    pub const fn worker_id(&self) -> u64 {
        (self.id >> Self::WORKER_ID_SHIFT) & Self::WORKER_ID_MASK
    }

    /// Extracts the internal process ID.
    pub const fn process_id(&self) -> u64 {
        (self.id >> Self::PROCESS_ID_SHIFT) & Self::PROCESS_ID_MASK
    }

    /// Extracts the per-millisecond increment.
    pub const fn increment(&self) -> u64 {
        (self.id >> Self::INCREMENT_SHIFT) & Self::INCREMENT_MASK
    }

    /// Whole years between creation and `now_millis`, never negative.
    pub const fn age_in_years(&self, now_millis: u64) -> u64 {
        years_between(self.timestamp_millis(), now_millis)
    }

    /// Like [`Snowflake::age_in_years`], reading "now" from `clock`.
    pub fn age_in_years_with<T>(&self, clock: &T) -> u64
    where
        T: TimeSource<u64>,
    {
        self.age_in_years(clock.current_millis())
    }

    /// Creation time as a UTC `DateTime`.
    ///
    /// Always `Some` for real Snowflakes; the 42-bit timestamp field cannot
    /// reach chrono's upper bound.
    #[cfg(feature = "chrono")]
    pub fn created_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        let millis = i64::try_from(self.timestamp_millis()).ok()?;
        chrono::DateTime::from_timestamp_millis(millis)
    }

    /// Returns the ID as a zero-padded 20-digit string.
    pub fn to_padded_string(&self) -> String {
        format!("{:020}", self.id)
    }

    /// The bit fields from most to least significant.
    pub const fn fields(&self) -> [FieldLayout; 4] {
        [
            FieldLayout {
                name: "timestamp",
                bits: 42,
                value: self.timestamp(),
            },
            FieldLayout {
                name: "worker_id",
                bits: 5,
                value: self.worker_id(),
            },
            FieldLayout {
                name: "process_id",
                bits: 5,
                value: self.process_id(),
            },
            FieldLayout {
                name: "increment",
                bits: 12,
                value: self.increment(),
            },
        ]
    }
}

/// Decodes a decimal Snowflake string. See [`Snowflake::decode`].
///
/// # Errors
///
/// [`DecodeError::InvalidFormat`] or [`DecodeError::OutOfRange`].
pub fn decode(input: &str) -> Result<Snowflake, DecodeError> {
    Snowflake::decode(input)
}

/// Whole years from the creation of `snowflake` to `now_millis`, clamped at
/// zero.
pub const fn age_in_years(snowflake: &Snowflake, now_millis: u64) -> u64 {
    snowflake.age_in_years(now_millis)
}

impl FromStr for Snowflake {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl TryFrom<&str> for Snowflake {
    type Error = DecodeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::decode(value)
    }
}

impl From<u64> for Snowflake {
    fn from(id: u64) -> Self {
        Self::from_raw(id)
    }
}

impl From<Snowflake> for u64 {
    fn from(id: Snowflake) -> Self {
        id.to_raw()
    }
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl fmt::Debug for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bit_layout_debug(
            f,
            "Snowflake",
            self.id,
            &self.to_padded_string(),
            &self.fields(),
        )
    }
}
