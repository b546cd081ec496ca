//! Puzzle addressing
//!
//! Maps a validated day number to the remote input URL and the local file
//! the input is stored in.

mod day;

pub(crate) use day::Day;
