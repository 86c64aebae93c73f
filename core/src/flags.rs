//! Behavior modifiers attached to an [`ArgOption`](crate::ArgOption).

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

use crate::OptionError;

/// Set of behavior flags for an option.
///
/// Flags are combined with `|`. [`HAS_MULTIPLE_VALUE`](Self::HAS_MULTIPLE_VALUE)
/// is not a bit of its own: it is the union of
/// [`HAS_VALUE`](Self::HAS_VALUE) and [`REPEATABLE`](Self::REPEATABLE).
///
/// # Examples
///
/// ```
/// use verbargs_core::OptionFlags;
///
/// let flags = OptionFlags::DEFAULT | OptionFlags::HAS_MULTIPLE_VALUE;
/// assert!(flags.contains(OptionFlags::HAS_VALUE));
/// assert!(flags.contains(OptionFlags::REPEATABLE));
/// assert!(!flags.contains(OptionFlags::REQUIRED));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct OptionFlags(u8);

impl OptionFlags {
    /// No flags.
    pub const NONE: Self = Self(0b0000_0000);
    /// Receives bare positional tokens that are not verb names.
    pub const DEFAULT: Self = Self(0b0000_0001);
    /// Consumes the following token as its value.
    pub const HAS_VALUE: Self = Self(0b0000_0010);
    /// May be given more than once.
    pub const REPEATABLE: Self = Self(0b0000_0100);
    /// Takes a value each time it is given.
    pub const HAS_MULTIPLE_VALUE: Self = Self(Self::HAS_VALUE.0 | Self::REPEATABLE.0);
    /// Left out of rendered help text.
    pub const HIDDEN: Self = Self(0b0000_1000);
    /// Must be given somewhere along the matched verb path.
    pub const REQUIRED: Self = Self(0b0001_0000);
    /// Ends parsing once matched (help/version style flags).
    pub const STOPS_PARSING: Self = Self(0b0010_0000);
    /// Does not close off sub-verb dispatch for later tokens.
    pub const ALLOW_VERBS_AFTER: Self = Self(0b0100_0000);

    const NAMED: [(Self, &'static str); 7] = [
        (Self::DEFAULT, "DEFAULT"),
        (Self::HAS_VALUE, "HAS_VALUE"),
        (Self::REPEATABLE, "REPEATABLE"),
        (Self::HIDDEN, "HIDDEN"),
        (Self::REQUIRED, "REQUIRED"),
        (Self::STOPS_PARSING, "STOPS_PARSING"),
        (Self::ALLOW_VERBS_AFTER, "ALLOW_VERBS_AFTER"),
    ];

    /// Every bit that has a meaning.
    pub const ALL: Self = Self(
        Self::DEFAULT.0
            | Self::HAS_VALUE.0
            | Self::REPEATABLE.0
            | Self::HIDDEN.0
            | Self::REQUIRED.0
            | Self::STOPS_PARSING.0
            | Self::ALLOW_VERBS_AFTER.0,
    );

    /// Returns the raw bits.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Builds a set from raw bits, or `None` if an undefined bit is set.
    ///
    /// # Examples
    ///
    /// ```
    /// use verbargs_core::OptionFlags;
    ///
    /// assert_eq!(OptionFlags::from_bits(0b11), Some(OptionFlags::DEFAULT | OptionFlags::HAS_VALUE));
    /// assert_eq!(OptionFlags::from_bits(0x80), None);
    /// ```
    pub const fn from_bits(bits: u8) -> Option<Self> {
        if bits & !Self::ALL.0 == 0 { Some(Self(bits)) } else { None }
    }

    /// Returns `true` if every bit of `other` is set in `self`.
    ///
    /// `contains(NONE)` is always `true`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `true` if no flag is set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for OptionFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for OptionFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl TryFrom<u8> for OptionFlags {
    type Error = OptionError;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        Self::from_bits(bits)
            .ok_or_else(|| OptionError::InvalidFlags(format!("undefined flag bits in {bits:#010b}")))
    }
}

impl From<OptionFlags> for u8 {
    fn from(flags: OptionFlags) -> Self {
        flags.0
    }
}

impl fmt::Debug for OptionFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("OptionFlags(NONE)");
        }
        let names: Vec<&str> = Self::NAMED
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        write!(f, "OptionFlags({})", names.join(" | "))
    }
}
