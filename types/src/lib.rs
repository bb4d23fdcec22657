//! Angles in the degree-minute notation.
//!
//! The decimal degree value (e.g. latitude or longitude) gets rounded
//! to the whole arc minutes and printed as `D°M'`:
//!
//! ```
//! use degmin_types::{format_deg_min, format_deg_min_int, ToDegMin};
//!
//! assert_eq!(format_deg_min(4.501), "4°30'");
//! assert_eq!(format_deg_min(-0.251), "-0°15'");
//! assert_eq!(format_deg_min(f64::NAN), "NaN");
//! assert_eq!(format_deg_min_int(-4), "-4°");
//! assert_eq!(12_u8.to_deg_min(), "12°");
//! ```

// do not warn on older Rust versions
#![allow(unknown_lints)]
//
// The following list was generated with the command
//   $ rustc -W help | grep ' allow ' | awk '{print $1}' | tr - _ | sort | xargs -I{} echo '#![warn({})]'
//
#![warn(absolute_paths_not_starting_with_crate)]
#![warn(anonymous_parameters)]
#![warn(deprecated_in_future)]
#![warn(elided_lifetimes_in_paths)]
#![warn(explicit_outlives_requirements)]
#![warn(invalid_html_tags)]
#![warn(keyword_idents)]
#![warn(macro_use_extern_crate)]
#![warn(meta_variable_misuse)]
#![warn(missing_copy_implementations)]
#![warn(missing_crate_level_docs)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(private_doc_tests)]
#![warn(single_use_lifetimes)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
// conflicts with the `clippy::redundant_pub_crate`
#![allow(unreachable_pub)]
// !!! NO UNSAFE
#![forbid(unsafe_code)]
#![warn(unstable_features)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]
#![warn(unused_labels)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]
#![warn(unused_results)]
#![warn(variant_size_differences)]
//
// additional recommendations
#![deny(clippy::mem_forget)]
// suppress some pedantic warnings
#![allow(clippy::non_ascii_literal)]
#![allow(clippy::must_use_candidate)]
// `use super::*` in tests
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub use angle::{dm::DegreeMinutes, AngleNotInRange};
pub use format::{format_deg_min, format_deg_min_int, ToDegMin};

mod angle;
mod format;
mod utils;
