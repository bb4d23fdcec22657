//! Printing the decimal degrees in the degree-minute notation

use num_traits::{AsPrimitive, PrimInt};

use crate::angle::{dm::DegreeMinutes, NOT_A_NUMBER};

/// Round the decimal degrees to the whole arc minutes and print them as `D°M'`.
///
/// The minutes are omitted when zero and the sign is only printed
/// for the angles which are still negative after the rounding.
/// The not-a-number value is printed as `NaN`.
///
/// ```
/// # use degmin_types::format_deg_min;
/// assert_eq!(format_deg_min(0.251), "0°15'");
/// assert_eq!(format_deg_min(-4.499), "-4°30'");
/// assert_eq!(format_deg_min(-0.001), "0°");
/// ```
pub fn format_deg_min(value: f64) -> String {
    DegreeMinutes::try_from(value).map_or_else(
        |_not_a_number| NOT_A_NUMBER.to_string(),
        |angle| angle.to_string(),
    )
}

/// Print the whole number of degrees the same way as [`format_deg_min`] does.
///
/// The number gets converted to the floating point first,
/// so the huge values lose their precision the same way.
pub fn format_deg_min_int<I>(value: I) -> String
where
    I: PrimInt + AsPrimitive<f64>,
{
    format_deg_min(value.as_())
}

/// The numbers which can be printed as decimal degrees in the degree-minute notation
pub trait ToDegMin {
    /// Represent the number as the `D°M'` string
    fn to_deg_min(self) -> String;
}

impl ToDegMin for f64 {
    fn to_deg_min(self) -> String {
        format_deg_min(self)
    }
}

impl ToDegMin for f32 {
    fn to_deg_min(self) -> String {
        format_deg_min(f64::from(self))
    }
}

macro_rules! impl_int_to_deg_min {
    ($($t: ty),+) => {
        $(
            impl ToDegMin for $t {
                fn to_deg_min(self) -> String {
                    format_deg_min_int(self)
                }
            }
        )+
    };
}

impl_int_to_deg_min!(i8, i16, i32, i64, i128, isize);
impl_int_to_deg_min!(u8, u16, u32, u64, u128, usize);
