use std::{error::Error, fmt};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// The reasons the [`DegreeMinutes`](crate::DegreeMinutes) cannot be constructed
pub enum AngleNotInRange {
    /// The floating number is not a number at all
    NotANumber,
    /// The whole angle does not fit into the minutes counter
    Degrees,
    /// The minutes part is 60 or more
    ArcMinutes,
}

impl fmt::Display for AngleNotInRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::NotANumber => "Cannot represent NaN as an angle",
            Self::Degrees => "Too big value for degrees part of an angle",
            Self::ArcMinutes => "Angle's arc minute value not in range [0..60)",
        };

        write!(f, "{msg}")
    }
}

impl Error for AngleNotInRange {}
