use std::{error::Error, fmt, num::ParseFloatError};

use crate::enum_trivial_from_impl;

/// The reasons a value cannot be rendered in the sexagesimal notation
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FormatError {
    /// The requested width cannot fit the mandatory separators and digits
    /// of the selected notation (holds the offending width).
    WidthTooSmall(usize),
    /// NaN or infinity cannot be split into sexagesimal components
    NotFinite,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WidthTooSmall(width) => write!(
                f,
                "Width {} is too small for the sexagesimal notation \
                 (plain needs at least 7 fixed columns, symbolic at least 10)",
                width
            ),
            Self::NotFinite => write!(f, "Not a finite value"),
        }
    }
}

impl Error for FormatError {}

/// The reasons a string does not read as a sexagesimal value
#[derive(Debug, Clone, PartialEq)]
pub enum ParseHexagesimalError {
    /// No fields found in the input (empty or separators only)
    EmptyString,
    /// A field is not a valid real-number literal
    Float(ParseFloatError),
    /// More fields than whole-part, minutes and seconds
    TooManyFields,
}

enum_trivial_from_impl!(ParseFloatError => ParseHexagesimalError:Float);

impl fmt::Display for ParseHexagesimalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot parse hexagesimal value: ")?;
        match self {
            Self::EmptyString => write!(f, "no fields found"),
            Self::Float(inner) => write!(f, "{}", inner),
            Self::TooManyFields => {
                write!(f, "more than whole-part, minutes and seconds fields")
            }
        }
    }
}

impl Error for ParseHexagesimalError {}
