#[cfg(test)]
#[macro_use]
extern crate assert_float_eq;

pub mod astro_math;
pub mod config;
pub mod dms;
mod util;

pub use util::*;
