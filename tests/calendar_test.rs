use chrono::{Days, NaiveDate};
use tw_toolbox::{
    convert_edit, format_calendar_date, parse_calendar_date, Calendar, CalendarDate, DatePair,
    ToolError,
};

#[test]
fn test_minguo_round_trip_over_supported_range() {
    let mut date = NaiveDate::from_ymd_opt(1912, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2099, 12, 31).unwrap();

    while date <= end {
        let d = CalendarDate::from(date);
        let minguo = format_calendar_date(d, Calendar::Minguo);
        let parsed = parse_calendar_date(&minguo, Calendar::Minguo).unwrap();
        assert_eq!(parsed, Some(d), "round trip failed for {minguo}");

        let western = format_calendar_date(d, Calendar::Western);
        let parsed = parse_calendar_date(&western, Calendar::Western).unwrap();
        assert_eq!(parsed, Some(d), "round trip failed for {western}");

        date = date + Days::new(1);
    }
}

#[test]
fn test_minguo_114_is_2025() {
    let date = parse_calendar_date("114/10/27", Calendar::Minguo)
        .unwrap()
        .unwrap();
    assert_eq!(format_calendar_date(date, Calendar::Western), "2025/10/27");
    assert_eq!(convert_edit(Calendar::Minguo, "114/10/27").unwrap(), "2025/10/27");
    assert_eq!(convert_edit(Calendar::Western, "2025/10/27").unwrap(), "114/10/27");
}

#[test]
fn test_february_30_is_rejected() {
    let err = parse_calendar_date("2025/02/30", Calendar::Western).unwrap_err();
    assert!(matches!(
        err,
        ToolError::InvalidDateFormat {
            calendar: Calendar::Western,
            hint: "2025/10/27"
        }
    ));
}

#[test]
fn test_empty_input_clears_without_error() {
    assert_eq!(parse_calendar_date("", Calendar::Western).unwrap(), None);

    let mut pair = DatePair::from_date(CalendarDate::from_ymd(2025, 10, 27).unwrap());
    pair.edit(Calendar::Western, "").unwrap();
    assert_eq!(pair, DatePair::default());
}

#[test]
fn test_leap_day() {
    assert!(parse_calendar_date("2024/02/29", Calendar::Western).unwrap().is_some());
    assert!(parse_calendar_date("2023/02/29", Calendar::Western).is_err());
    // 民國 113 = 2024
    assert!(parse_calendar_date("113/02/29", Calendar::Minguo).unwrap().is_some());
    assert!(parse_calendar_date("112/02/29", Calendar::Minguo).is_err());
}

#[test]
fn test_only_edited_side_is_validated() {
    let mut pair = DatePair {
        western: "garbage".to_string(),
        minguo: String::new(),
    };
    pair.edit(Calendar::Minguo, "1/01/01").unwrap();
    assert_eq!(pair.western, "1912/01/01");

    let err = pair.edit(Calendar::Western, "1912/1").unwrap_err();
    assert!(matches!(err, ToolError::InvalidDateFormat { calendar: Calendar::Western, .. }));
    assert_eq!(pair.western, "1912/1");
    assert_eq!(pair.minguo, "");
}

#[test]
fn test_today_fields_agree() {
    let pair = DatePair::today();
    assert_eq!(convert_edit(Calendar::Western, &pair.western).unwrap(), pair.minguo);
}
