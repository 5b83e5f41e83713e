//! # Fix State
//!
//! Two groups of navigation values live side by side in a [`Parser`](crate::Parser):
//!
//! - `Pending` holds what the sentence in progress has parsed so far. It is
//!   cleared at every `$` and is never visible outside the crate.
//! - [`Fix`] holds what the last accepted sentences published. It only changes
//!   through `Fix::apply`, which copies a whole sentence's worth of pending
//!   values in one step.
//!
//! All values keep the fixed-point scaling of the field parsers:
//!
//! | Value | Scale |
//! |---|---|
//! | time | `hhmmss` × 100 |
//! | latitude, longitude | degrees × 1,000,000 |
//! | speed | knots × 100 |
//! | course | degrees × 100 |
//! | HDOP | × 100 |

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::SentenceKind;

/// Values staged by the sentence currently being received.
#[derive(Debug, Default, Clone)]
pub(crate) struct Pending {
    pub valid: bool,
    pub time: Option<u32>,
    pub day: Option<u8>,
    pub month: Option<u8>,
    pub year: Option<i32>,
    pub latitude: Option<i32>,
    pub longitude: Option<i32>,
    pub speed: Option<i32>,
    pub course: Option<i32>,
    pub hdop: Option<i32>,
    pub time_fix: Option<u64>,
    pub position_fix: Option<u64>,
}

impl Pending {
    pub fn negate_latitude(&mut self) {
        if let Some(latitude) = &mut self.latitude {
            *latitude = latitude.wrapping_neg();
        }
    }

    pub fn negate_longitude(&mut self) {
        if let Some(longitude) = &mut self.longitude {
            *longitude = longitude.wrapping_neg();
        }
    }
}

/// The last published navigation fix.
///
/// Every accessor returns `None` until a sentence carrying that value has been
/// accepted.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Fix {
    time: Option<u32>,
    day: Option<u8>,
    month: Option<u8>,
    year: Option<i32>,
    latitude: Option<i32>,
    longitude: Option<i32>,
    speed: Option<i32>,
    course: Option<i32>,
    hdop: Option<i32>,
    last_time_fix: Option<u64>,
    last_position_fix: Option<u64>,
}

impl Fix {
    /// Publishes the values `kind` is responsible for.
    ///
    /// Values the sentence left empty keep their previous committed value.
    pub(crate) fn apply(&mut self, kind: SentenceKind, pending: &Pending) {
        fn merge<T: Copy>(committed: &mut Option<T>, staged: Option<T>) {
            if staged.is_some() {
                *committed = staged;
            }
        }

        match kind {
            SentenceKind::Rmc => {
                merge(&mut self.time, pending.time);
                merge(&mut self.latitude, pending.latitude);
                merge(&mut self.longitude, pending.longitude);
                merge(&mut self.course, pending.course);
            }
            SentenceKind::Gga => {
                merge(&mut self.latitude, pending.latitude);
                merge(&mut self.longitude, pending.longitude);
                merge(&mut self.hdop, pending.hdop);
            }
            SentenceKind::Vtg => {
                merge(&mut self.speed, pending.speed);
            }
            SentenceKind::Zda => {
                merge(&mut self.time, pending.time);
                merge(&mut self.day, pending.day);
                merge(&mut self.month, pending.month);
                merge(&mut self.year, pending.year);
            }
            SentenceKind::Other => return,
        }

        merge(&mut self.last_time_fix, pending.time_fix);
        merge(&mut self.last_position_fix, pending.position_fix);
    }

    /// UTC time of day as `hhmmsscc`.
    pub fn time(&self) -> Option<u32> {
        self.time
    }

    pub fn day(&self) -> Option<u8> {
        self.day
    }

    pub fn month(&self) -> Option<u8> {
        self.month
    }

    pub fn year(&self) -> Option<i32> {
        self.year
    }

    /// Latitude in millionths of a degree, negative south of the equator.
    pub fn latitude(&self) -> Option<i32> {
        self.latitude
    }

    /// Longitude in millionths of a degree, negative west of Greenwich.
    pub fn longitude(&self) -> Option<i32> {
        self.longitude
    }

    /// Speed over ground in hundredths of a knot.
    pub fn speed(&self) -> Option<i32> {
        self.speed
    }

    /// Course over ground in hundredths of a degree.
    pub fn course(&self) -> Option<i32> {
        self.course
    }

    /// Horizontal dilution of precision, scaled by 100.
    pub fn hdop(&self) -> Option<i32> {
        self.hdop
    }

    /// Clock reading at which the last published time was received.
    pub fn last_time_fix(&self) -> Option<u64> {
        self.last_time_fix
    }

    /// Clock reading at which the last published position was received.
    pub fn last_position_fix(&self) -> Option<u64> {
        self.last_position_fix
    }

    /// The published time of day as a calendar time.
    ///
    /// `None` if no time was published or it is not a valid time of day.
    #[cfg(feature = "time")]
    pub fn utc_time(&self) -> Option<time::Time> {
        let hhmmsscc = self.time?;
        let hour = u8::try_from(hhmmsscc / 1_000_000).ok()?;
        let minute = u8::try_from(hhmmsscc / 10_000 % 100).ok()?;
        let second = u8::try_from(hhmmsscc / 100 % 100).ok()?;
        let millisecond = u16::try_from(hhmmsscc % 100 * 10).ok()?;

        time::Time::from_hms_milli(hour, minute, second, millisecond).ok()
    }

    /// The published day, month and year as a calendar date.
    ///
    /// `None` unless all three were published and form a real date.
    #[cfg(feature = "time")]
    pub fn utc_date(&self) -> Option<time::Date> {
        let month = time::Month::try_from(self.month?).ok()?;

        time::Date::from_calendar_date(self.year?, month, self.day?).ok()
    }
}
