use crate::{DecodeError, Error, Permission, Result, decimal};
use core::fmt;
use core::str::FromStr;
#[cfg(feature = "tracing")]
use tracing::instrument;

/// Flips `flag` in `current`.
///
/// If every bit of `flag` is already set, exactly those bits are cleared.
/// Otherwise they are all set, and every other bit is preserved. For a
/// composite flag that is only partially present this means the first toggle
/// completes it and the second clears it.
pub const fn toggle(current: u64, flag: u64) -> u64 {
    if is_set(current, flag) {
        current & !flag
    } else {
        current | flag
    }
}

/// Whether every bit of `flag` is set in `value`.
pub const fn is_set(value: u64, flag: u64) -> bool {
    value & flag == flag
}

/// Exact decimal form of a permission integer, as Discord's API expects it.
pub fn serialize(value: u64) -> String {
    value.to_string()
}

/// A union of permission flags.
///
/// Starts empty, is mutated by [`PermissionSet::toggle`] and reset by
/// [`PermissionSet::clear`]. The value is a plain `u64`, so every flag up to
/// bit 63 is represented exactly.
///
/// The set is not tied to a catalog. [`PermissionSet::from_bits`],
/// [`PermissionSet::toggle_bits`], parsing and deserialization keep bits that
/// no catalog entry names, and every operation preserves them. Use
/// [`PermissionSet::unknown_bits`] to inspect them or
/// [`PermissionSet::validate`] to reject them.
///
/// # Example
///
/// ```
/// use cordkit::{PERMISSIONS, PermissionSet, lookup};
///
/// let admin = lookup(PERMISSIONS, "Administrator").unwrap();
/// let mut set = PermissionSet::new();
/// set.toggle(admin);
/// assert_eq!(set.to_string(), "8");
/// set.toggle(admin);
/// assert!(set.is_empty());
/// ```
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PermissionSet {
    value: u64,
}

impl PermissionSet {
    /// An empty set.
    pub const fn new() -> Self {
        Self { value: 0 }
    }

    /// Wraps a raw permission integer.
    pub const fn from_bits(value: u64) -> Self {
        Self { value }
    }

    /// Returns the raw permission integer.
    pub const fn bits(&self) -> u64 {
        self.value
    }

    /// Whether no bit is set.
    pub const fn is_empty(&self) -> bool {
        self.value == 0
    }

    /// Toggles `permission`, returning the new value.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self), fields(before = self.value)))]
    pub fn toggle(&mut self, permission: &Permission) -> u64 {
        self.toggle_bits(permission.value)
    }

    /// Toggles a raw flag value, returning the new value.
    pub const fn toggle_bits(&mut self, flag: u64) -> u64 {
        self.value = toggle(self.value, flag);
        self.value
    }

    /// Whether every bit of `permission` is present.
    pub const fn contains(&self, permission: &Permission) -> bool {
        is_set(self.value, permission.value)
    }

    /// Whether every bit of `flag` is present.
    pub const fn contains_bits(&self, flag: u64) -> bool {
        is_set(self.value, flag)
    }

    /// Resets the set to zero.
    pub const fn clear(&mut self) {
        self.value = 0;
    }

    /// Catalog entries fully contained in this set, in catalog order.
    pub fn granted<'a>(&self, catalog: &'a [Permission]) -> impl Iterator<Item = &'a Permission> {
        let value = self.value;
        catalog
            .iter()
            .filter(move |permission| is_set(value, permission.value))
    }

    /// Bits set here that no entry of `catalog` covers.
    pub fn unknown_bits(&self, catalog: &[Permission]) -> u64 {
        let known = catalog.iter().fold(0, |acc, permission| acc | permission.value);
        self.value & !known
    }

    /// Returns the set unchanged if it is a union of `catalog` values.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownPermissionBits`] carrying the uncovered bits.
    pub fn validate(self, catalog: &[Permission]) -> Result<Self> {
        match self.unknown_bits(catalog) {
            0 => Ok(self),
            bits => Err(Error::UnknownPermissionBits { bits }),
        }
    }

    /// Parses a decimal permission integer.
    ///
    /// # Errors
    ///
    /// [`DecodeError::InvalidFormat`] for anything but ASCII digits,
    /// [`DecodeError::OutOfRange`] past `u64::MAX`.
    pub fn decode(input: &str) -> Result<Self, DecodeError> {
        decimal::parse_u64(input).map(Self::from_bits)
    }
}

impl<'a> FromIterator<&'a Permission> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = &'a Permission>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a> Extend<&'a Permission> for PermissionSet {
    /// Sets every bit of each permission. Unlike [`PermissionSet::toggle`],
    /// this never clears anything.
    fn extend<I: IntoIterator<Item = &'a Permission>>(&mut self, iter: I) {
        for permission in iter {
            self.value |= permission.value;
        }
    }
}

impl FromStr for PermissionSet {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl From<u64> for PermissionSet {
    fn from(value: u64) -> Self {
        Self::from_bits(value)
    }
}

impl From<PermissionSet> for u64 {
    fn from(set: PermissionSet) -> Self {
        set.bits()
    }
}

impl fmt::Display for PermissionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl fmt::Debug for PermissionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PermissionSet({} = 0x{:x})", self.value, self.value)
    }
}
