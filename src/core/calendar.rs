//! 西元年與民國年日期互轉。

use crate::utils::error::{Result, ToolError};
use chrono::{Datelike, Local, NaiveDate};
use std::fmt;

/// Minguo year 1 is Western year 1912.
pub const MINGUO_OFFSET: i32 = 1911;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Calendar {
    Western,
    Minguo,
}

impl Calendar {
    pub fn label(self) -> &'static str {
        match self {
            Calendar::Western => "西元年",
            Calendar::Minguo => "民國年",
        }
    }

    /// Example input shown when parsing fails.
    pub fn format_hint(self) -> &'static str {
        match self {
            Calendar::Western => "2025/10/27",
            Calendar::Minguo => "114/10/27",
        }
    }

    pub fn other(self) -> Calendar {
        match self {
            Calendar::Western => Calendar::Minguo,
            Calendar::Minguo => Calendar::Western,
        }
    }
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Calendar::Western => f.write_str("western"),
            Calendar::Minguo => f.write_str("minguo"),
        }
    }
}

/// A valid proleptic Gregorian date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Builds a date from a Western (year, month, day) triple.
    ///
    /// Returns `None` unless the triple survives calendar normalization
    /// unchanged, which rejects month 13, 30 February, 31 April and so on.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        (date.year() == year && date.month() == month && date.day() == day).then_some(Self(date))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn minguo_year(&self) -> i32 {
        self.0.year() - MINGUO_OFFSET
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

fn invalid(calendar: Calendar) -> ToolError {
    ToolError::InvalidDateFormat {
        calendar,
        hint: calendar.format_hint(),
    }
}

fn parse_year(part: &str) -> Option<i32> {
    let part = part.trim();
    let digits = part.strip_prefix('-').unwrap_or(part);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

fn parse_unsigned(part: &str) -> Option<u32> {
    let part = part.trim();
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Parses `Y/MM/DD` text in the given calendar.
///
/// Blank input yields `Ok(None)` so the caller can clear the paired field.
pub fn parse_calendar_date(text: &str, calendar: Calendar) -> Result<Option<CalendarDate>> {
    if text.trim().is_empty() {
        return Ok(None);
    }

    let parts: Vec<&str> = text.split('/').collect();
    let [year, month, day] = parts.as_slice() else {
        tracing::debug!("{} date '{}' does not have three parts", calendar, text);
        return Err(invalid(calendar));
    };

    let (Some(mut year), Some(month), Some(day)) =
        (parse_year(year), parse_unsigned(month), parse_unsigned(day))
    else {
        return Err(invalid(calendar));
    };

    if calendar == Calendar::Minguo {
        year = year.checked_add(MINGUO_OFFSET).ok_or_else(|| invalid(calendar))?;
    }

    CalendarDate::from_ymd(year, month, day)
        .map(Some)
        .ok_or_else(|| invalid(calendar))
}

pub fn format_calendar_date(date: CalendarDate, calendar: Calendar) -> String {
    match calendar {
        Calendar::Western => format!("{:04}/{:02}/{:02}", date.year(), date.month(), date.day()),
        Calendar::Minguo => format!("{}/{:02}/{:02}", date.minguo_year(), date.month(), date.day()),
    }
}

/// Re-derives the counterpart field after `edited` changed to `text`.
///
/// Blank input clears the counterpart without an error.
pub fn convert_edit(edited: Calendar, text: &str) -> Result<String> {
    let converted = parse_calendar_date(text, edited)?
        .map(|date| format_calendar_date(date, edited.other()))
        .unwrap_or_default();
    tracing::debug!("{} '{}' -> {} '{}'", edited, text, edited.other(), converted);
    Ok(converted)
}

/// The two text fields of the year converter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatePair {
    pub western: String,
    pub minguo: String,
}

impl DatePair {
    pub fn from_date(date: CalendarDate) -> Self {
        Self {
            western: format_calendar_date(date, Calendar::Western),
            minguo: format_calendar_date(date, Calendar::Minguo),
        }
    }

    pub fn today() -> Self {
        Self::from_date(CalendarDate(Local::now().date_naive()))
    }

    fn field_mut(&mut self, calendar: Calendar) -> &mut String {
        match calendar {
            Calendar::Western => &mut self.western,
            Calendar::Minguo => &mut self.minguo,
        }
    }

    /// Stores the edited field and regenerates the other one.
    ///
    /// On failure the other field is cleared and the error is returned; the
    /// untouched field is never validated on its own.
    pub fn edit(&mut self, side: Calendar, text: &str) -> Result<()> {
        *self.field_mut(side) = text.to_string();
        match convert_edit(side, text) {
            Ok(converted) => {
                *self.field_mut(side.other()) = converted;
                Ok(())
            }
            Err(e) => {
                self.field_mut(side.other()).clear();
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn western(text: &str) -> Result<Option<CalendarDate>> {
        parse_calendar_date(text, Calendar::Western)
    }

    #[test]
    fn test_minguo_to_western() {
        let date = parse_calendar_date("114/10/27", Calendar::Minguo)
            .unwrap()
            .unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2025, 10, 27));
        assert_eq!(format_calendar_date(date, Calendar::Western), "2025/10/27");
    }

    #[test]
    fn test_minguo_format_uses_natural_width() {
        let date = CalendarDate::from_ymd(1921, 3, 5).unwrap();
        assert_eq!(format_calendar_date(date, Calendar::Minguo), "10/03/05");
        let date = CalendarDate::from_ymd(1912, 1, 1).unwrap();
        assert_eq!(format_calendar_date(date, Calendar::Minguo), "1/01/01");
    }

    #[test]
    fn test_rejects_impossible_dates() {
        for text in ["2025/02/30", "2025/13/01", "2025/04/31", "2025/00/10", "2025/01/00"] {
            assert!(
                matches!(western(text), Err(ToolError::InvalidDateFormat { .. })),
                "{text} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_malformed_text() {
        for text in ["2025/10", "2025/10/27/1", "2025-10-27", "abc/10/27", "2025/1a/27", "2025//27"] {
            assert!(western(text).is_err(), "{text} should be rejected");
        }
    }

    #[test]
    fn test_leap_years() {
        assert!(western("2024/02/29").unwrap().is_some());
        assert!(western("2023/02/29").is_err());
        assert!(western("2000/02/29").unwrap().is_some());
        assert!(western("1900/02/29").is_err());
    }

    #[test]
    fn test_blank_input_is_empty_result() {
        assert_eq!(western("").unwrap(), None);
        assert_eq!(western("   ").unwrap(), None);
        assert_eq!(convert_edit(Calendar::Minguo, "").unwrap(), "");
    }

    #[test]
    fn test_unpadded_parts_are_accepted() {
        let date = western("2025/1/5").unwrap().unwrap();
        assert_eq!(format_calendar_date(date, Calendar::Minguo), "114/01/05");
    }

    #[test]
    fn test_date_pair_edit_updates_other_side() {
        let mut pair = DatePair::default();
        pair.edit(Calendar::Western, "2025/10/27").unwrap();
        assert_eq!(pair.minguo, "114/10/27");

        let err = pair.edit(Calendar::Minguo, "114/02/30").unwrap_err();
        assert_eq!(pair.minguo, "114/02/30");
        assert_eq!(pair.western, "");
        assert!(matches!(
            err,
            ToolError::InvalidDateFormat {
                calendar: Calendar::Minguo,
                hint: "114/10/27"
            }
        ));
    }
}
