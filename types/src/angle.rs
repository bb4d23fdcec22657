//! The signed angle rounded to whole arc minutes

mod consts;
pub mod dm;
mod errors;

pub use errors::AngleNotInRange;

pub(crate) use consts::NOT_A_NUMBER;
