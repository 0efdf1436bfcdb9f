//! Core data types for the aoc helper
//!
//! A puzzle is identified by a [`Coordinate`] (year, day); a [`Part`] selects
//! which of the two solution entry points to run.

use std::fmt;

use clap::ValueEnum;

/// Identifies one puzzle: a (year, day) pair
///
/// No range validation is performed; an out-of-range pair simply produces a
/// request the website will reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub year: u32,
    pub day: u32,
}

impl Coordinate {
    pub fn new(year: u32, day: u32) -> Self {
        Self { year, day }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "year {} day {}", self.year, self.day)
    }
}

/// Selects one of the two per-day solution entry points
///
/// Absent on the command line means both parts run, first then second. Any
/// value other than `1` or `2` is rejected at argument-parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Part {
    #[value(name = "1")]
    One,
    #[value(name = "2")]
    Two,
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::One => write!(f, "1"),
            Part::Two => write!(f, "2"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_display() {
        let coordinate = Coordinate::new(2023, 5);
        assert_eq!(coordinate.to_string(), "year 2023 day 5");
    }

    #[test]
    fn test_part_parses_only_one_and_two() {
        assert_eq!(Part::from_str("1", false), Ok(Part::One));
        assert_eq!(Part::from_str("2", false), Ok(Part::Two));
        assert!(Part::from_str("3", false).is_err());
        assert!(Part::from_str("one", false).is_err());
    }
}
