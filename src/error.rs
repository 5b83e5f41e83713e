//! # Error Types
//!
//! This module defines the error types produced while interpreting NMEA fields.
//!
//! Errors never leave [`Parser::feed`](crate::Parser::feed): a stream decoder has
//! no caller to hand them to mid-sentence. They are logged and tallied in the
//! parser statistics instead.

use nom::error::{ErrorKind, FromExternalError, ParseError};
use std::fmt::{self, Debug, Display};

/// Holds the result of field parsing functions.
///
/// It depends on the input type `I`, the output type `O`, and the error type `E`
/// (by default `nom::error::Error<I>`).
///
/// The `Ok` side is a pair containing the remainder of the input (the part of the data that
/// was not parsed) and the produced value. The `Err` side contains an instance of `nom::Err`.
pub type IResult<I, O, E = nom::error::Error<I>> = nom::IResult<I, O, Error<E>>;

/// Represents the failures the checksum stage of a sentence can report.
#[derive(Debug, PartialEq)]
pub enum Error<E> {
    /// The checksum of the sentence was corrupt or incorrect.
    ///
    /// Contains both the expected checksum (accumulated over the sentence content)
    /// and the checksum transmitted after the `*` marker.
    ChecksumMismatch {
        /// The checksum calculated from the sentence content
        expected: u8,
        /// The checksum found in the sentence
        found: u8,
    },

    /// A field could not be parsed because its format was invalid.
    ///
    /// The numeric data fields never produce this; only the checksum field is
    /// strict about its shape.
    ParsingError(E),
}

impl<I, E> ParseError<I> for Error<E>
where
    E: ParseError<I>,
{
    fn from_error_kind(input: I, kind: ErrorKind) -> Self {
        Error::ParsingError(E::from_error_kind(input, kind))
    }

    fn append(_: I, _: ErrorKind, other: Self) -> Self {
        other
    }
}

impl<I, E, EX> FromExternalError<I, EX> for Error<E>
where
    E: FromExternalError<I, EX>,
{
    fn from_external_error(input: I, kind: ErrorKind, e: EX) -> Self {
        Error::ParsingError(E::from_external_error(input, kind, e))
    }
}

impl<E: Debug> Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ChecksumMismatch { expected, found } => write!(
                f,
                "checksum mismatch: calculated {expected:02X}, transmitted {found:02X}"
            ),
            Error::ParsingError(e) => write!(f, "malformed checksum field: {e:?}"),
        }
    }
}
