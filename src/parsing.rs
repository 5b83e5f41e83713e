//! # Field Parsers
//!
//! Fixed-point parsers for the numeric NMEA fields, built from nom combinators.
//!
//! The data parsers ([`decimal`], [`degrees`], [`integer`]) never fail: they read
//! as far as the field looks like a number and stop at the first character that
//! does not fit, so a garbled field degrades to a (possibly zero) value instead of
//! a fault. Only [`checksum_field`] rejects malformed input.
//!
//! All arithmetic wraps on overflow, matching the 32-bit accumulators GPS
//! firmware traditionally uses.

use nom::{
    Err, Input, Mode, OutputMode, PResult, Parser,
    bytes::complete::take_while_m_n,
    character::complete::{char, digit0},
    combinator::opt,
    error::{ErrorKind, ParseError},
    number::complete::hex_u32,
    sequence::preceded,
};

use crate::IResult;

/// Parses a `[-]digits[.digits]` field into a value scaled by 100.
///
/// Only the first two fractional digits contribute; anything after the
/// hundredths place is dropped without rounding. The sign is recognised only
/// as a leading `-`.
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::parsing::decimal;
///
/// assert_eq!(decimal(b"123.45"), 12345);
/// assert_eq!(decimal(b"-0.5"), -50);
/// assert_eq!(decimal(b"7"), 700);
/// assert_eq!(decimal(b"1.239"), 123);
/// ```
pub fn decimal(field: &[u8]) -> i32 {
    let Ok((_, (negative, whole, fraction))) = signed_fixed_point(field) else {
        return 0;
    };

    let mut value = accumulate(whole).wrapping_mul(100);
    let mut fraction = fraction.unwrap_or_default().iter();
    if let Some(&tenths) = fraction.next() {
        value = value.wrapping_add(10 * u32::from(tenths - b'0'));
        if let Some(&hundredths) = fraction.next() {
            value = value.wrapping_add(u32::from(hundredths - b'0'));
        }
    }

    let value = value as i32;
    if negative { value.wrapping_neg() } else { value }
}

/// Parses a `dddmm.mmmm` field into decimal degrees scaled by 1,000,000.
///
/// The integer part is split into whole degrees (`/ 100`) and whole minutes
/// (`% 100`). Minutes are accumulated in hundred-thousandths, then converted to
/// millionths of a degree by dividing by 6, rounding half up.
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::parsing::degrees;
///
/// assert_eq!(degrees(b"4807.038"), 48_117_300);
/// assert_eq!(degrees(b"01131.000"), 11_516_667);
/// ```
pub fn degrees(field: &[u8]) -> i32 {
    let Ok((_, (whole, fraction))) = fixed_point(field) else {
        return 0;
    };

    let whole = accumulate(whole);
    let mut minutes = (whole % 100) * 100_000;
    let mut weight = 10_000u32;
    for &digit in fraction.unwrap_or_default() {
        minutes = minutes.wrapping_add(weight * u32::from(digit - b'0'));
        weight /= 10;
    }

    (whole / 100)
        .wrapping_mul(1_000_000)
        .wrapping_add(minutes.wrapping_add(3) / 6) as i32
}

/// Parses the leading unsigned integer of a field, stopping at the first non-digit.
///
/// ```rust
/// use nmea0183_stream::parsing::integer;
///
/// assert_eq!(integer(b"07"), 7);
/// assert_eq!(integer(b"12x"), 12);
/// assert_eq!(integer(b"x"), 0);
/// ```
pub fn integer(field: &[u8]) -> u32 {
    let digits: IResult<&[u8], &[u8]> = digit0(field);
    digits.map_or(0, |(_, digits)| accumulate(digits))
}

/// Parses the checksum field: exactly two hexadecimal digits, either case.
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::parsing::checksum_field;
///
/// assert_eq!(checksum_field(b"6A").map(|(_, cc)| cc), Ok(0x6A));
/// assert_eq!(checksum_field(b"6a").map(|(_, cc)| cc), Ok(0x6A));
/// assert!(checksum_field(b"6").is_err());
/// assert!(checksum_field(b"6AB").is_err());
/// assert!(checksum_field(b"G1").is_err());
/// ```
pub fn checksum_field(i: &[u8]) -> IResult<&[u8], u8> {
    consumed(
        take_while_m_n(2, 2, |c: u8| c.is_ascii_hexdigit()),
        ErrorKind::Count,
    )
    .and_then(hex_u32)
    .map(|cc| cc as u8)
    .parse(i)
}

fn signed_fixed_point(i: &[u8]) -> IResult<&[u8], (bool, &[u8], Option<&[u8]>)> {
    (opt(char('-')), fixed_point)
        .map(|(sign, (whole, fraction))| (sign.is_some(), whole, fraction))
        .parse(i)
}

fn fixed_point(i: &[u8]) -> IResult<&[u8], (&[u8], Option<&[u8]>)> {
    (digit0, opt(preceded(char('.'), digit0))).parse(i)
}

fn accumulate(digits: &[u8]) -> u32 {
    digits.iter().fold(0u32, |acc, &digit| {
        acc.wrapping_mul(10).wrapping_add(u32::from(digit - b'0'))
    })
}

/// Ensures that the parser consumes all input.
///
/// Runs `f` and fails with `e` if anything is left over.
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::parsing::consumed;
/// use nom::{IResult, Parser, bytes::complete::take, error::ErrorKind};
///
/// let mut parser = consumed(take(3u8), ErrorKind::Count);
/// let result: IResult<_, _> = parser.parse("abc");
/// assert!(result.is_ok());
///
/// let result: IResult<_, _> = parser.parse("abcd");
/// assert!(result.is_err());
/// ```
pub fn consumed<I, E: ParseError<I>, F>(
    f: F,
    e: ErrorKind,
) -> impl Parser<I, Output = <F as Parser<I>>::Output, Error = E>
where
    I: Input,
    F: Parser<I, Error = E>,
{
    Consumed { f, e }
}

struct Consumed<F> {
    f: F,
    e: ErrorKind,
}

impl<I, F> Parser<I> for Consumed<F>
where
    I: Input,
    F: Parser<I>,
{
    type Output = <F as Parser<I>>::Output;
    type Error = <F as Parser<I>>::Error;

    fn process<OM: OutputMode>(&mut self, i: I) -> PResult<OM, I, Self::Output, Self::Error> {
        let (i, o) = self.f.process::<OM>(i)?;

        if i.input_len() != 0 {
            return Err(Err::Error(OM::Error::bind(|| {
                <F as Parser<I>>::Error::from_error_kind(i, self.e)
            })));
        }

        Ok((i, o))
    }
}
