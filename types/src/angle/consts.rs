pub(crate) const MINUTES_IN_DEGREE: u8 = 60;

pub(crate) const DEGREE_SIGN: char = '°';
pub(crate) const ARC_MINUTE_SIGN: char = '\'';
pub(crate) const NEGATIVE_SIGN: char = '-';

/// Printed instead of an angle for the not-a-number input
pub(crate) const NOT_A_NUMBER: &str = "NaN";
