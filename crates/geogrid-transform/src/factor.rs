//! Scale factors
//!
//! A [`ScaleFactor`] is a validated (y, x) pair. The signed convention used
//! at the boundary (positive grows, negative shrinks, zero leaves the
//! matrix alone) is resolved once, here, into a tagged variant so that the
//! scaling code never sees a mixed-direction pair.

use crate::{TransformError, TransformResult};
use geogrid_core::Error;
use std::fmt;
use std::num::{IntErrorKind, NonZeroU32};
use std::str::FromStr;

/// Validated per-axis integer scale factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScaleFactor {
    /// Leave the matrix unchanged
    NoOp,
    /// Replicate every cell into a `y x x` block
    Up { y: NonZeroU32, x: NonZeroU32 },
    /// Average every `y x x` block into one cell
    Down { y: NonZeroU32, x: NonZeroU32 },
}

/// Magnitude of one signed component as a non-zero `u32`.
fn magnitude(v: i64) -> TransformResult<NonZeroU32> {
    u32::try_from(v.unsigned_abs())
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or_else(|| {
            TransformError::Core(Error::InvalidParameter(format!(
                "scale factor {v} exceeds {}",
                u32::MAX
            )))
        })
}

impl ScaleFactor {
    /// Build a scale factor from signed per-axis components.
    ///
    /// Both positive scales up, both negative scales down, both zero is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns `TransformError::InvalidScaleDirection` for any other sign
    /// combination (including exactly one zero), and
    /// `TransformError::Core` with `Error::InvalidParameter` if a magnitude
    /// exceeds `u32::MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// use geogrid_transform::ScaleFactor;
    ///
    /// assert!(matches!(ScaleFactor::new(-3, -2).unwrap(), ScaleFactor::Down { .. }));
    /// assert!(ScaleFactor::new(2, -2).is_err());
    /// ```
    pub fn new(y: i64, x: i64) -> TransformResult<Self> {
        match (y.signum(), x.signum()) {
            (0, 0) => Ok(Self::NoOp),
            (1, 1) => Ok(Self::Up {
                y: magnitude(y)?,
                x: magnitude(x)?,
            }),
            (-1, -1) => Ok(Self::Down {
                y: magnitude(y)?,
                x: magnitude(x)?,
            }),
            _ => Err(TransformError::InvalidScaleDirection { y, x }),
        }
    }

    /// Same signed factor on both axes
    pub fn uniform(scale: i64) -> TransformResult<Self> {
        Self::new(scale, scale)
    }

    /// Build a scale factor from floating-point components.
    ///
    /// # Errors
    ///
    /// Returns `TransformError::InvalidScaleType` if a component is not a
    /// finite integral value, and otherwise the errors of [`ScaleFactor::new`].
    pub fn from_f64(y: f64, x: f64) -> TransformResult<Self> {
        let to_int = |v: f64| -> TransformResult<i64> {
            if !v.is_finite() || v.fract() != 0.0 {
                return Err(TransformError::InvalidScaleType(format!(
                    "{v} is not an integer"
                )));
            }
            // Saturates; anything this large is rejected as out of range.
            Ok(v as i64)
        };
        Self::new(to_int(y)?, to_int(x)?)
    }

    /// Whether this factor leaves the matrix unchanged
    pub fn is_noop(&self) -> bool {
        matches!(self, Self::NoOp)
    }

    /// The signed (y, x) form of this factor
    pub fn to_signed(&self) -> (i64, i64) {
        match *self {
            Self::NoOp => (0, 0),
            Self::Up { y, x } => (y.get() as i64, x.get() as i64),
            Self::Down { y, x } => (-(y.get() as i64), -(x.get() as i64)),
        }
    }
}

impl TryFrom<(i64, i64)> for ScaleFactor {
    type Error = TransformError;

    fn try_from((y, x): (i64, i64)) -> TransformResult<Self> {
        Self::new(y, x)
    }
}

impl TryFrom<i64> for ScaleFactor {
    type Error = TransformError;

    fn try_from(scale: i64) -> TransformResult<Self> {
        Self::uniform(scale)
    }
}

impl FromStr for ScaleFactor {
    type Err = TransformError;

    /// Parse `"s"` (both axes) or `"y,x"` / `"yxx"` such as `"-3,-2"` or
    /// `"-3x-2"`.
    fn from_str(s: &str) -> TransformResult<Self> {
        let parse = |part: &str| -> TransformResult<i64> {
            let part = part.trim();
            part.parse::<i64>().map_err(|e| match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    TransformError::Core(Error::InvalidParameter(format!(
                        "scale factor '{part}' out of range"
                    )))
                }
                _ => TransformError::InvalidScaleType(format!("'{part}' is not an integer")),
            })
        };

        match s.split_once([',', 'x']) {
            Some((y, x)) => Self::new(parse(y)?, parse(x)?),
            None => Self::uniform(parse(s)?),
        }
    }
}

impl fmt::Display for ScaleFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (y, x) = self.to_signed();
        write!(f, "{y},{x}")
    }
}
