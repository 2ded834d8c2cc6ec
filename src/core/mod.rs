//! Board primitives:
//!
//! - [`coord`]: signed (file, rank) coordinates and the knight jump set.
//! - [`square`]: a named, colored square of the 8×8 board and its validation.

pub mod coord;
pub mod square;
