//! End-to-end: form input through report, submission and share text.

use chrono::{TimeZone, Utc};
use saju_rs::*;

#[test]
fn engine_self_check_passes() {
    assert!(verify_engine());
}

#[test]
fn reference_forms() {
    let cases = [
        ((1995, 3, 30, 5, 32), "乙亥 己卯 庚申 己卯", "경신일주"),
        ((2005, 11, 18, 23, 44), "乙酉 丁亥 丁未 庚子", "정미일주"),
        ((1983, 1, 3, 10, 25), "壬戌 壬子 辛卯 癸巳", "신묘일주"),
    ];
    for ((y, m, d, h, min), hanja, day_label) in cases {
        let r = report_for(&BirthInput::new("테스트", y, m, d).with_time(h, min)).unwrap();
        let got = format!(
            "{} {} {} {}",
            r.pillars.year_han, r.pillars.month_han, r.pillars.day_han, r.pillars.hour_han
        );
        assert_eq!(got, hanja);
        assert_eq!(r.day_pillar_name, day_label);
        assert!(r.verified);
    }
}

#[test]
fn same_day_midnight_config_flows_through() {
    let input = BirthInput::new("a", 2005, 11, 18).with_time(23, 44);
    let r = report_for_with(
        &input,
        &ValidationConfig::default(),
        &PillarConfig {
            midnight: MidnightPolicy::SameDay,
        },
    )
    .unwrap();
    assert_eq!(r.pillars.day_han, "丙午");
    assert_eq!(r.pillars.hour_han, "戊子");
}

#[test]
fn lenient_validation_reaches_engine() {
    let input = BirthInput::new("a", 2023, 2, 30);
    assert!(matches!(
        report_for(&input),
        Err(SajuError::Time(TimeError::InvalidDate { .. }))
    ));

    let lenient = ValidationConfig {
        strict_calendar: false,
        ..ValidationConfig::default()
    };
    let r = report_for_with(&input, &lenient, &PillarConfig::default()).unwrap();
    // Feb 30 behaves as Mar 2
    let mar2 = report_for(&BirthInput::new("a", 2023, 3, 2)).unwrap();
    assert_eq!(r.pillars.day_han, mar2.pillars.day_han);
}

#[test]
fn full_pipeline() {
    let input = BirthInput::new("홍길동", 1995, 3, 30)
        .with_time(5, 32)
        .with_gender(Gender::Male);
    let moment = input.validate().unwrap();
    let report = report_for_moment(&moment, &PillarConfig::default());

    let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let payload = SubmissionPayload::build(&input, &moment, &report, at);
    assert_eq!(payload.result_type, "을해년 기묘월 경신일 기묘시");
    assert_eq!(payload.result_title, "의리의 혁명가, 세상을 바꾸는 경신일주");
    assert_eq!(payload.birth_date, "1995-03-30");
    assert_eq!(payload.birth_time, "05:32");

    let msg = share_message(&input.name, &report, "https://saju.example");
    assert!(msg.contains("홍길동님은"));
    assert!(msg.contains(&report.title));
    assert!(msg.ends_with("https://saju.example"));
}

#[test]
fn every_day_of_a_year_reports() {
    let mut notable = 0;
    for ordinal in 1..=366 {
        let date = chrono::NaiveDate::from_yo_opt(2024, ordinal).unwrap();
        let m = BirthMoment::from(date.and_hms_opt(12, 0, 0).unwrap());
        let r = report_for_moment(&m, &PillarConfig::default());
        if r.is_notable_day {
            notable += 1;
            assert_eq!(r.pillars.day_han, "庚申");
        }
        assert!(!r.keywords.is_empty());
    }
    // 366 days span six full cycles plus a remainder
    assert!((6..=7).contains(&notable));
}
