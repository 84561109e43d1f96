//! The recipient capacity limit (`max`).
//!
//! Builder and opener agree on `max` out of band. It bounds how many
//! recipients an envelope may address and how many slots the opener probes.
//! A `Capacity` is validated on construction, so every function taking one
//! can rely on `1 <= max <= 255`.

use core::fmt::{self, Display};

use crate::core::error::{MultiboxError, MultiboxResult};

/// A validated capacity limit in `1..=255`.
///
/// # Example
///
/// ```rust
/// use multibox::Capacity;
///
/// assert_eq!(Capacity::default().get(), 7);
/// assert!(Capacity::new(255).is_ok());
/// assert!(Capacity::new(0).is_err());
/// assert!(Capacity::new(256).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Capacity(u8);

impl Capacity {
    /// The default limit of 7 recipients.
    pub const DEFAULT: Self = Self(7);

    /// The largest limit the single count byte can express.
    pub const MAX: Self = Self(u8::MAX);

    /// Creates a capacity limit.
    ///
    /// # Errors
    ///
    /// Returns `MultiboxError::InvalidConfig` if `max` is outside `1..=255`.
    pub fn new(max: i64) -> MultiboxResult<Self> {
        match u8::try_from(max) {
            Ok(value) if value > 0 => Ok(Self(value)),
            _ => Err(MultiboxError::InvalidConfig { max }),
        }
    }

    /// Returns the limit.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Checks that `count` recipients fit within the limit.
    ///
    /// # Errors
    ///
    /// Returns `MultiboxError::CapacityExceeded` if `count > max`.
    pub fn check(self, count: usize) -> MultiboxResult<()> {
        if count > usize::from(self.0) {
            return Err(MultiboxError::CapacityExceeded {
                count,
                max: self.0,
            });
        }
        Ok(())
    }
}

impl Default for Capacity {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for Capacity {
    type Error = MultiboxError;

    fn try_from(max: i64) -> Result<Self, Self::Error> {
        Self::new(max)
    }
}

impl TryFrom<usize> for Capacity {
    type Error = MultiboxError;

    fn try_from(max: usize) -> Result<Self, Self::Error> {
        Self::new(i64::try_from(max).unwrap_or(i64::MAX))
    }
}

impl From<Capacity> for u8 {
    fn from(capacity: Capacity) -> Self {
        capacity.0
    }
}

impl Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
