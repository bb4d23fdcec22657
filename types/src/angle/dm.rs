//! The angle rounded to the whole arc minutes.
//!
//! Only the total (signed) number of minutes is stored,
//! so the value is always normalized: the minutes part is in the range `[0..60)`
//! and the zero angle has no sign.
//! <https://en.wikipedia.org/wiki/Minute_and_second_of_arc>

use std::{convert::TryFrom, fmt, ops::Neg};

use log::{debug, trace};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::utils::div_mod;

use super::{
    consts::{ARC_MINUTE_SIGN, DEGREE_SIGN, MINUTES_IN_DEGREE, NEGATIVE_SIGN},
    errors::AngleNotInRange,
};

/// Signed angle with the precision of one arc minute.
///
/// The length of the Earth's equator arc minute is one nautical mile (~1852 m),
/// which is enough to display a position for a human but not to store it.
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Default, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "i64", into = "i64"))]
pub struct DegreeMinutes {
    minutes: i64,
}

impl DegreeMinutes {
    /// The biggest number of minutes in either direction.
    /// Keeping the range symmetric makes the negation always valid.
    const MAX_MINUTES: i64 = i64::MAX;

    fn minutes_in_deg() -> u64 {
        u64::from(MINUTES_IN_DEGREE)
    }

    /// Construct the angle from the total number of arc minutes.
    ///
    /// Saturates at `±i64::MAX` minutes.
    pub fn with_minutes(total: i64) -> Self {
        Self {
            minutes: total.max(-Self::MAX_MINUTES),
        }
    }

    /// Construct the angle from its parts.
    ///
    /// The `negative` flag is ignored for the zero angle.
    ///
    /// # Errors
    /// When the minutes part is out of `[0..60)` range, the `ArcMinutes` returned.
    /// When the whole angle is too big to fit the minutes counter, the `Degrees` returned.
    pub fn with_deg_min(degrees: u64, minutes: u8, negative: bool) -> Result<Self, AngleNotInRange> {
        if minutes >= MINUTES_IN_DEGREE {
            return Err(AngleNotInRange::ArcMinutes);
        }

        let total = degrees
            .checked_mul(Self::minutes_in_deg())
            .and_then(|deg_minutes| deg_minutes.checked_add(u64::from(minutes)))
            .and_then(|total| i64::try_from(total).ok())
            .ok_or(AngleNotInRange::Degrees)?;

        let total = if negative { -total } else { total };
        Ok(Self::with_minutes(total))
    }

    /// The signed number of arc minutes in the angle
    pub const fn total_minutes(self) -> i64 {
        self.minutes
    }

    /// The whole number of degrees in the angle (without the sign)
    pub fn degrees(self) -> u64 {
        self.deg_min().0
    }

    /// The arc minutes component of the angle (without the sign)
    pub fn arc_minutes(self) -> u8 {
        self.deg_min().1
    }

    /// Is the angle less than zero?
    ///
    /// The zero angle is never negative.
    pub const fn is_negative(self) -> bool {
        self.minutes < 0
    }

    /// No angle
    pub const fn is_zero(self) -> bool {
        self.minutes == 0
    }

    /// Convert back to the decimal degrees.
    ///
    /// Use with caution: the floating numbers has bad precision in the fraction part
    #[allow(clippy::cast_precision_loss)]
    pub fn to_decimal(self) -> f64 {
        self.minutes as f64 / f64::from(MINUTES_IN_DEGREE)
    }

    fn deg_min(self) -> (u64, u8) {
        let (deg, min) = div_mod(self.minutes.unsigned_abs(), Self::minutes_in_deg());
        let min = min.try_into().expect("Remainder of 60 fits into u8");
        (deg, min)
    }
}

impl TryFrom<f64> for DegreeMinutes {
    type Error = AngleNotInRange;

    /// Round the decimal degrees to the nearest arc minute
    /// (the halfway cases are rounded away from zero).
    ///
    /// The values too big for the minutes counter (including infinities)
    /// get saturated, so the only failure is the NaN.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value.is_nan() {
            trace!("Not a number cannot be rounded to arc minutes");
            return Err(AngleNotInRange::NotANumber);
        }

        // `f64::round` breaks ties away from zero unlike the `round_ties_even`
        let total = (value * f64::from(MINUTES_IN_DEGREE)).round();

        #[allow(clippy::cast_precision_loss)]
        let limit = Self::MAX_MINUTES as f64;
        if total.abs() >= limit {
            debug!("The angle {value}° saturates the arc minutes counter");
        }

        // float to int `as` conversion saturates
        #[allow(clippy::cast_possible_truncation)]
        let total = total as i64;
        Ok(Self::with_minutes(total))
    }
}

impl TryFrom<f32> for DegreeMinutes {
    type Error = AngleNotInRange;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::try_from(f64::from(value))
    }
}

/// The total number of arc minutes (saturating at `±i64::MAX`)
impl From<i64> for DegreeMinutes {
    fn from(total: i64) -> Self {
        Self::with_minutes(total)
    }
}

impl From<DegreeMinutes> for i64 {
    fn from(angle: DegreeMinutes) -> Self {
        angle.total_minutes()
    }
}

impl Neg for DegreeMinutes {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::with_minutes(self.minutes.saturating_neg())
    }
}

impl fmt::Display for DegreeMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "{NEGATIVE_SIGN}")?;
        }

        let (deg, arc_min) = self.deg_min();
        write!(f, "{deg}{DEGREE_SIGN}")?;

        if arc_min == 0 {
            Ok(())
        } else {
            write!(f, "{arc_min}{ARC_MINUTE_SIGN}")
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn serialize_as_total_minutes() {
        let angle = DegreeMinutes::with_deg_min(4, 30, true).unwrap();
        assert_eq!(serde_json::to_string(&angle).unwrap(), "-270");
    }

    #[test]
    fn round_trip() {
        let angle = DegreeMinutes::with_deg_min(66, 33, false).unwrap();
        let json = serde_json::to_string(&angle).unwrap();
        let restored: DegreeMinutes = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, angle);
    }

    #[test]
    fn deserialize_min_is_clamped() {
        let json = i64::MIN.to_string();
        let restored: DegreeMinutes = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, DegreeMinutes::with_minutes(i64::MIN));
        assert_eq!(restored.total_minutes(), -i64::MAX);
        assert_eq!(restored.to_string(), "-153722867280912930°7'");
    }
}
