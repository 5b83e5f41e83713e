//! # NMEA 0183 Stream Decoder
//!
//! This library decodes navigation fixes from the character stream of a GPS
//! receiver, one byte at a time, in the NMEA 0183 format:
//! `$HHHHH,D1,D2,...,Dn*CC\r\n`
//!
//! The decoder:
//! - Never buffers more than one (bounded) field
//! - Verifies the checksum of every sentence before publishing anything from it
//! - Publishes a sentence's values all at once, or not at all
//! - Resynchronizes at the next `$` after garbage or truncated input
//! - Behaves identically whether fed byte by byte or in chunks
//!
//! Four sentences are interpreted: `GPRMC`, `GPGGA`, `GPVTG` and `GPZDA`. Other
//! sentences are framed and checksummed, and their fields ignored.
//!
//! ## Usage
//!
//! ```rust
//! use nmea0183_stream::Parser;
//!
//! let mut parser = Parser::new();
//! let stream = b"$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A\r\n";
//!
//! if parser.feed_bytes(stream) > 0 {
//!     let fix = parser.fix();
//!     assert_eq!(fix.time(), Some(12_351_900));
//!     assert_eq!(fix.latitude(), Some(48_117_300));
//!     assert_eq!(fix.course_degrees(), Some(84.4));
//! }
//! assert_eq!(parser.stats().sentences, 1);
//! ```

mod clock;
pub mod error;
mod field;
mod fix;
pub mod navigation;
mod nmea0183;
pub mod parsing;
mod sentence;

pub use clock::{Clock, MonotonicClock};
pub use error::{Error, IResult};
pub use field::{FIELD_CAPACITY, FieldBuffer};
pub use fix::Fix;
pub use nmea0183::*;
pub use sentence::SentenceKind;

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;

#[cfg(test)]
mod tests {
    mod checksum;
    mod navigation;
    mod parsing;
    mod sentences;
    mod stream;
    mod support;
    mod truncation;
}
