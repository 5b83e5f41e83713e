use crate::{Fix, Parser, ParserBuilder, SentenceKind};

use super::support::{GGA, RMC, VTG, ZDA, manual_clock, sentence};

#[test]
fn test_gga_southern_western() {
    let mut parser = Parser::new();
    let gga = "GPGGA,123519,4807.038,S,01131.000,W,1,08,0.9,545.4,M,46.9,M,,";

    assert_eq!(parser.feed_bytes(&sentence(gga)), 1);

    let fix = parser.fix();
    assert_eq!(fix.time(), None);
    assert_eq!(fix.latitude(), Some(-48_117_300));
    assert_eq!(fix.longitude(), Some(-11_516_667));
    assert_eq!(fix.hdop(), Some(90));
    assert_eq!(fix.speed(), None);
    assert_eq!(fix.course(), None);
}

#[test]
fn test_gga_fix_quality() {
    for (quality, published) in [("0", 0), ("1", 1), ("2", 1), ("6", 1)] {
        let mut parser = Parser::new();
        let gga =
            format!("GPGGA,123519,4807.038,N,01131.000,E,{quality},08,0.9,545.4,M,46.9,M,,");

        assert_eq!(parser.feed_bytes(&sentence(&gga)), published, "quality {quality}");
    }
}

#[test]
fn test_rmc_western() {
    let mut parser = Parser::new();
    let rmc = "GPRMC,225446,A,4916.45,N,12311.12,W,000.5,054.7,191194,020.3,E";

    assert_eq!(parser.feed_bytes(&sentence(rmc)), 1);

    let fix = parser.fix();
    assert_eq!(fix.time(), Some(22_544_600));
    assert_eq!(fix.latitude(), Some(49_274_167));
    assert_eq!(fix.longitude(), Some(-123_185_333));
    assert_eq!(fix.speed(), None);
    assert_eq!(fix.course(), Some(5470));
}

#[test]
fn test_rmc_status_must_be_exact() {
    let mut parser = Parser::new();
    let rmc = "GPRMC,123519,AA,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W";

    assert_eq!(parser.feed_bytes(&sentence(rmc)), 0);
}

#[test]
fn test_rmc_empty_position() {
    let mut parser = Parser::new();
    let rmc = "GPRMC,123519,A,,S,,W,,,230394,,";

    assert_eq!(parser.feed_bytes(&sentence(rmc)), 1);

    let fix = parser.fix();
    assert_eq!(fix.time(), Some(12_351_900));
    assert_eq!(fix.latitude(), None);
    assert_eq!(fix.longitude(), None);
    assert_eq!(fix.last_position_fix(), None);
    assert!(fix.last_time_fix().is_some());
}

#[test]
fn test_zda() {
    let mut parser = Parser::new();

    assert_eq!(parser.feed_bytes(&sentence(ZDA)), 1);

    let fix = parser.fix();
    assert_eq!(fix.time(), Some(20_153_000));
    assert_eq!(fix.day(), Some(4));
    assert_eq!(fix.month(), Some(7));
    assert_eq!(fix.year(), Some(2002));
    assert_eq!(fix.latitude(), None);
    assert_eq!(fix.last_position_fix(), None);
}

#[test]
fn test_vtg() {
    let mut parser = Parser::new();

    assert_eq!(parser.feed_bytes(&sentence(VTG)), 1);
    assert_eq!(parser.fix().speed(), Some(550));
    assert_eq!(parser.fix().course(), None);
    assert_eq!(parser.fix().last_time_fix(), None);
}

#[test]
fn test_vtg_ignores_mode_indicator() {
    let mut parser = Parser::new();

    let not_valid = "GPVTG,054.7,T,034.4,M,005.5,N,010.2,K,N";
    assert_eq!(parser.feed_bytes(&sentence(not_valid)), 1);
    assert_eq!(parser.fix().speed(), Some(550));

    let autonomous = "GPVTG,054.7,T,034.4,M,006.5,N,012.0,K,A";
    assert_eq!(parser.feed_bytes(&sentence(autonomous)), 1);
    assert_eq!(parser.fix().speed(), Some(650));
}

#[test]
fn test_zda_time_survives_gga() {
    let (now, clock) = manual_clock();
    let mut parser = ParserBuilder::new().clock(clock).build();

    now.set(100);
    assert_eq!(parser.feed_bytes(&sentence(ZDA)), 1);
    now.set(200);
    assert_eq!(parser.feed_bytes(&sentence(GGA)), 1);

    let fix = parser.fix();
    assert_eq!(fix.time(), Some(20_153_000));
    assert_eq!(fix.last_time_fix(), Some(100));
    assert_eq!(fix.last_position_fix(), Some(200));
}

#[test]
fn test_rmc_speed_is_ignored() {
    let mut parser = Parser::new();
    parser.feed_bytes(&sentence(VTG));
    assert_eq!(parser.fix().speed(), Some(550));

    assert_eq!(parser.feed_bytes(&sentence(RMC)), 1);
    assert_eq!(parser.fix().speed(), Some(550));
    assert_eq!(parser.fix().course(), Some(8440));
}

#[test]
fn test_identifier_is_case_sensitive() {
    let mut parser = Parser::new();
    let rmc = "gprmc,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W";

    assert_eq!(parser.feed_bytes(&sentence(rmc)), 0);
    assert_eq!(parser.fix(), &Fix::default());
    assert_eq!(parser.stats().failed_checksums, 0);
}

#[test]
fn test_classify() {
    assert_eq!(SentenceKind::classify(b"GPRMC"), SentenceKind::Rmc);
    assert_eq!(SentenceKind::classify(b"GPZDA"), SentenceKind::Zda);
    assert_eq!(SentenceKind::classify(b"GPGGA"), SentenceKind::Gga);
    assert_eq!(SentenceKind::classify(b"GPVTG"), SentenceKind::Vtg);
    assert_eq!(SentenceKind::classify(b"GPGGAX"), SentenceKind::Other);
    assert_eq!(SentenceKind::classify(b"GPGG"), SentenceKind::Other);
    assert_eq!(SentenceKind::classify(b""), SentenceKind::Other);
}

#[cfg(feature = "time")]
#[test]
fn test_calendar_values() {
    let mut parser = Parser::new();
    parser.feed_bytes(&sentence(ZDA));

    let fix = parser.fix();
    assert_eq!(
        fix.utc_time(),
        time::Time::from_hms_milli(20, 15, 30, 0).ok()
    );
    assert_eq!(
        fix.utc_date(),
        time::Date::from_calendar_date(2002, time::Month::July, 4).ok()
    );
}

#[cfg(feature = "time")]
#[test]
fn test_calendar_values_out_of_range() {
    let mut parser = Parser::new();
    parser.feed_bytes(&sentence("GPZDA,250000,31,02,2002,00,00"));

    assert_eq!(parser.fix().time(), Some(25_000_000));
    assert_eq!(parser.fix().utc_time(), None);
    assert_eq!(parser.fix().utc_date(), None);
}
