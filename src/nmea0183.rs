//! # NMEA 0183 Stream Decoder
//!
//! This module provides the stateful, character-at-a-time decoder for NMEA 0183
//! sentences of the form `$HHHHH,D1,D2,...,Dn*CC\r\n`.
//!
//! The decoder never buffers more than one field. Each character is classified
//! as it arrives:
//!
//! - `$` starts a new sentence and abandons whatever was in progress.
//! - `,` closes the current field and is part of the checksum.
//! - `*`, `\r` and `\n` close the current field without being part of the
//!   checksum; `*` additionally marks the next field as the checksum.
//! - Anything else is field data.
//!
//! When a field closes, its value is staged according to the sentence type and
//! the field's position. Staged values only become visible in the [`Fix`] once
//! the sentence's checksum matches and the sentence reports a valid fix.

use nom::Finish;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Clock, Error, Fix, MonotonicClock, SentenceKind,
    field::FieldBuffer,
    fix::Pending,
    parsing::{checksum_field, decimal, degrees, integer},
};

/// Defines how the decoder treats sentences without a checksum.
///
/// NMEA 0183 sentences can include a checksum in the format `*CC` where CC is a
/// two-digit hexadecimal value representing the XOR of all bytes between the
/// `$` prefix and the `*` delimiter.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum ChecksumMode {
    /// A sentence is only published after its checksum has been verified.
    ///
    /// Sentences that reach their line ending without a `*CC` field are dropped.
    #[default]
    Required,

    /// A sentence without a checksum is published when its line ending arrives.
    ///
    /// A checksum that is present must still match.
    ///
    /// Use this mode with legacy equipment that does not always send checksums.
    Optional,
}

/// Counters describing what the decoder has seen so far.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    /// Characters passed to [`Parser::feed`], delimiters included.
    pub characters: u64,
    /// Sentences that were published into the fix.
    pub sentences: u32,
    /// Sentences whose checksum field was malformed or did not match.
    pub failed_checksums: u32,
}

/// Creates a configured [`Parser`].
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::{ChecksumMode, ParserBuilder};
///
/// let mut parser = ParserBuilder::new()
///     .checksum_mode(ChecksumMode::Optional)
///     .clock(|| 1_000u64)
///     .build();
///
/// let published = parser.feed_bytes(b"$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K\r\n");
/// assert_eq!(published, 1);
/// assert_eq!(parser.fix().speed(), Some(550));
/// ```
#[must_use]
pub struct ParserBuilder<C = MonotonicClock> {
    /// Checksum mode for the parser.
    checksum_mode: ChecksumMode,

    /// Timestamp source for time and position fixes.
    clock: C,
}

impl ParserBuilder {
    /// Creates a new builder with default settings.
    ///
    /// The default settings are:
    /// - Checksum mode: [`ChecksumMode::Required`]
    /// - Clock: [`MonotonicClock`], started now
    pub fn new() -> Self {
        ParserBuilder {
            checksum_mode: ChecksumMode::Required,
            clock: MonotonicClock::new(),
        }
    }
}

impl Default for ParserBuilder {
    fn default() -> Self {
        ParserBuilder::new()
    }
}

impl<C: Clock> ParserBuilder<C> {
    /// Sets the checksum mode for the parser.
    pub fn checksum_mode(mut self, mode: ChecksumMode) -> Self {
        self.checksum_mode = mode;
        self
    }

    /// Replaces the clock used to stamp fixes.
    pub fn clock<D: Clock>(self, clock: D) -> ParserBuilder<D> {
        ParserBuilder {
            checksum_mode: self.checksum_mode,
            clock,
        }
    }

    pub fn build(self) -> Parser<C> {
        Parser {
            field: FieldBuffer::new(),
            field_index: 0,
            parity: 0,
            in_checksum_field: false,
            sentence_closed: false,
            kind: SentenceKind::Other,
            pending: Pending::default(),
            fix: Fix::default(),
            stats: Stats::default(),
            checksum_mode: self.checksum_mode,
            clock: self.clock,
        }
    }
}

/// Streaming decoder for `GPRMC`, `GPGGA`, `GPVTG` and `GPZDA` sentences.
///
/// One parser serves one character stream. It must not be shared between
/// streams, and calls on one instance must not overlap.
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::Parser;
///
/// let mut parser = Parser::new();
/// let sentence = b"$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A\r\n";
///
/// let mut published = false;
/// for &byte in sentence {
///     published = parser.feed(byte);
///     if published {
///         break;
///     }
/// }
///
/// assert!(published);
/// assert_eq!(parser.fix().latitude(), Some(48_117_300));
/// assert_eq!(parser.fix().longitude(), Some(11_516_667));
/// assert_eq!(parser.fix().course(), Some(8440));
/// ```
pub struct Parser<C = MonotonicClock> {
    field: FieldBuffer,
    field_index: u8,
    parity: u8,
    in_checksum_field: bool,
    sentence_closed: bool,
    kind: SentenceKind,
    pending: Pending,
    fix: Fix,
    stats: Stats,
    checksum_mode: ChecksumMode,
    clock: C,
}

impl Parser {
    /// Creates a parser with the default configuration, see [`ParserBuilder::new`].
    pub fn new() -> Self {
        ParserBuilder::new().build()
    }
}

impl Default for Parser {
    fn default() -> Self {
        Parser::new()
    }
}

impl<C: Clock> Parser<C> {
    /// Consumes one character of the stream.
    ///
    /// Returns `true` if and only if this character completed a sentence that
    /// was verified and published into [`Parser::fix`].
    pub fn feed(&mut self, byte: u8) -> bool {
        self.stats.characters = self.stats.characters.saturating_add(1);

        match byte {
            b'$' => {
                self.start_sentence();
                false
            }
            b',' => {
                self.parity ^= byte;
                self.close_field(false)
            }
            b'*' => self.close_field(true),
            b'\r' | b'\n' => {
                let published = self.close_field(false);
                self.end_sentence() || published
            }
            _ => {
                self.field.push(byte);
                if !self.in_checksum_field {
                    self.parity ^= byte;
                }
                false
            }
        }
    }

    /// Feeds every byte of `bytes` and returns how many fixes were published.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> usize {
        bytes.iter().filter(|&&byte| self.feed(byte)).count()
    }

    /// The last published fix.
    pub fn fix(&self) -> &Fix {
        &self.fix
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Type of the sentence currently being received.
    pub fn sentence_kind(&self) -> SentenceKind {
        self.kind
    }

    /// Milliseconds since the last published time fix.
    pub fn time_fix_age(&self) -> Option<u64> {
        let fixed = self.fix.last_time_fix()?;
        Some(self.clock.now().saturating_sub(fixed))
    }

    /// Milliseconds since the last published position fix.
    pub fn position_fix_age(&self) -> Option<u64> {
        let fixed = self.fix.last_position_fix()?;
        Some(self.clock.now().saturating_sub(fixed))
    }

    fn start_sentence(&mut self) {
        self.field.clear();
        self.field_index = 0;
        self.parity = 0;
        self.in_checksum_field = false;
        self.sentence_closed = false;
        self.kind = SentenceKind::Other;
        self.pending = Pending::default();
    }

    /// Publishes an unchecked sentence at its line ending, if allowed.
    fn end_sentence(&mut self) -> bool {
        let unchecked = !self.sentence_closed && self.checksum_mode == ChecksumMode::Optional;
        self.sentence_closed = true;
        unchecked && self.publish()
    }

    fn close_field(&mut self, checksum_follows: bool) -> bool {
        let published = self.field.is_terminated() && self.complete_field();

        self.field_index = self.field_index.saturating_add(1);
        self.field.clear();
        self.in_checksum_field = checksum_follows;

        published
    }

    fn complete_field(&mut self) -> bool {
        if self.in_checksum_field {
            self.sentence_closed = true;
            return self.verify_checksum();
        }

        if self.field_index == 0 {
            self.kind = SentenceKind::classify(self.field.as_bytes());
            self.pending.valid = self.kind.starts_valid();
            log::trace!("sentence {:?}", self.kind);
        } else if self.kind != SentenceKind::Other && !self.field.is_empty() {
            self.stage_field();
        }

        false
    }

    fn verify_checksum(&mut self) -> bool {
        match compare_checksum(self.field.as_bytes(), self.parity) {
            Ok(()) => self.publish(),
            Err(e) => {
                log::debug!("dropping {:?} sentence: {e}", self.kind);
                self.stats.failed_checksums = self.stats.failed_checksums.saturating_add(1);
                false
            }
        }
    }

    fn publish(&mut self) -> bool {
        if !self.pending.valid {
            log::trace!("{:?} sentence carries no valid fix", self.kind);
            return false;
        }

        self.fix.apply(self.kind, &self.pending);
        self.stats.sentences = self.stats.sentences.saturating_add(1);
        log::trace!("published {:?} fix: {:?}", self.kind, self.fix);

        true
    }

    fn stage_field(&mut self) {
        use SentenceKind::{Gga, Rmc, Vtg, Zda};

        let field = self.field.as_bytes();
        let pending = &mut self.pending;

        match (self.kind, self.field_index) {
            (Rmc | Zda, 1) => {
                pending.time = Some(decimal(field) as u32);
                pending.time_fix = Some(self.clock.now());
            }
            (Zda, 2) => pending.day = Some(integer(field) as u8),
            (Zda, 3) => pending.month = Some(integer(field) as u8),
            (Zda, 4) => pending.year = Some(decimal(field) / 100),
            (Rmc, 2) => pending.valid = field == b"A",
            (Rmc, 3) | (Gga, 2) => {
                pending.latitude = Some(degrees(field));
                pending.position_fix = Some(self.clock.now());
            }
            (Rmc, 4) | (Gga, 3) if field == b"S" => pending.negate_latitude(),
            (Rmc, 5) | (Gga, 4) => pending.longitude = Some(degrees(field)),
            (Rmc, 6) | (Gga, 5) if field == b"W" => pending.negate_longitude(),
            (Vtg, 5) => pending.speed = Some(decimal(field)),
            (Rmc, 8) => pending.course = Some(decimal(field)),
            (Gga, 6) => pending.valid = field.first().is_some_and(|&quality| quality > b'0'),
            (Gga, 8) => pending.hdop = Some(decimal(field)),
            _ => {}
        }
    }
}

/// Compares a checksum field against the checksum accumulated over the sentence.
fn compare_checksum(
    field: &[u8],
    expected: u8,
) -> Result<(), Error<nom::error::Error<&[u8]>>> {
    let (_, found) = checksum_field(field).finish()?;

    if found != expected {
        return Err(Error::ChecksumMismatch { expected, found });
    }

    Ok(())
}

/// Calculates the NMEA 0183 checksum of sentence content.
///
/// The checksum is the XOR of every byte between the `$` prefix and the `*`
/// delimiter, both excluded. [`Parser`] accumulates the same value one
/// character at a time.
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::checksum;
///
/// assert_eq!(checksum(b"GPGGA,123456,data"), 0x41);
/// ```
pub fn checksum(content: &[u8]) -> u8 {
    content
        .iter()
        .fold(0u8, |accumulated_xor, &byte| accumulated_xor ^ byte)
}

/// Formats a checksum value as a two-digit uppercase hexadecimal string.
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::format_checksum;
///
/// assert_eq!(format_checksum(0x41), "41");
/// assert_eq!(format_checksum(0x0A), "0A");
/// ```
pub fn format_checksum(checksum: u8) -> String {
    format!("{checksum:02X}")
}
