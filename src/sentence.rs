//! # Sentence Kinds
//!
//! The sentence types this decoder interprets, resolved from field 0.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sentence type of the sentence currently being received.
///
/// Resolved once the identifier field is complete and kept until the next `$`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SentenceKind {
    /// `GPRMC` - Recommended Minimum Navigation Information
    Rmc,
    /// `GPZDA` - Time & Date
    Zda,
    /// `GPGGA` - Global Positioning System Fix Data
    Gga,
    /// `GPVTG` - Track made good and Ground speed
    Vtg,
    /// Any other identifier. Framing and checksum are still checked, fields are ignored.
    #[default]
    Other,
}

impl SentenceKind {
    /// Classifies a sentence identifier. The match is exact and case-sensitive.
    ///
    /// ```rust
    /// use nmea0183_stream::SentenceKind;
    ///
    /// assert_eq!(SentenceKind::classify(b"GPRMC"), SentenceKind::Rmc);
    /// assert_eq!(SentenceKind::classify(b"gprmc"), SentenceKind::Other);
    /// assert_eq!(SentenceKind::classify(b"GNRMC"), SentenceKind::Other);
    /// ```
    pub fn classify(identifier: &[u8]) -> Self {
        match identifier {
            b"GPRMC" => SentenceKind::Rmc,
            b"GPZDA" => SentenceKind::Zda,
            b"GPGGA" => SentenceKind::Gga,
            b"GPVTG" => SentenceKind::Vtg,
            _ => SentenceKind::Other,
        }
    }

    /// Whether a sentence of this kind is valid before any of its fields are seen.
    ///
    /// RMC (status) and GGA (fix quality) stay invalid until a field says
    /// otherwise. ZDA and VTG carry no validity field.
    pub(crate) fn starts_valid(self) -> bool {
        matches!(self, SentenceKind::Zda | SentenceKind::Vtg)
    }
}
