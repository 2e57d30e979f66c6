//! A bounds-checked 2D grid container with independently sized rows.
//!
//! The grid is jagged: every row owns its slot storage, and two rows of
//! the same grid may differ in length. Slots start out absent and are
//! filled through the checked accessors, which report out-of-range
//! indices as errors carrying the offending coordinate and the grid's
//! current shape instead of panicking.
#![deny(clippy::all, clippy::if_not_else, clippy::enum_glob_use)]

pub mod grid;
pub mod index;

pub use crate::grid::{Error, Grid, GridIterator, Indexed, Row};
pub use crate::index::{Column, Line, Point};
