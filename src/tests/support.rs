use std::{cell::Cell, rc::Rc};

use crate::{checksum, format_checksum};

/// Frames `content` as a complete sentence with a correct checksum and CRLF.
pub fn sentence(content: &str) -> Vec<u8> {
    format!(
        "${content}*{}\r\n",
        format_checksum(checksum(content.as_bytes()))
    )
    .into_bytes()
}

/// Frames `content` with a checksum that is off by one.
pub fn corrupted(content: &str) -> Vec<u8> {
    format!(
        "${content}*{}\r\n",
        format_checksum(checksum(content.as_bytes()).wrapping_add(1))
    )
    .into_bytes()
}

/// A clock whose reading the test controls.
pub fn manual_clock() -> (Rc<Cell<u64>>, impl Fn() -> u64) {
    let now = Rc::new(Cell::new(0u64));
    let reading = Rc::clone(&now);
    (now, move || reading.get())
}

pub const RMC: &str = "GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W";
pub const RMC_VOID: &str = "GPRMC,123519,V,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W";
pub const GGA: &str = "GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,";
pub const GGA_NO_FIX: &str = "GPGGA,123519,4807.038,S,01131.000,W,0,08,0.9,545.4,M,46.9,M,,";
pub const VTG: &str = "GPVTG,054.7,T,034.4,M,005.5,N,010.2,K";
pub const ZDA: &str = "GPZDA,201530.00,04,07,2002,00,00";
pub const GSV: &str = "GPGSV,3,2,12,01,40,083,45";
