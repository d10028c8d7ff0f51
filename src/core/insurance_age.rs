//! 實際足歲與保險年齡計算。

use crate::core::calendar::Calendar;
use crate::utils::error::{Result, ToolError};
use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeResult {
    pub actual_age: i32,
    pub insurance_age: i32,
}

/// Adds whole months to (year, month) and then `day - 1` days, so a day past
/// the end of the target month rolls into the next month.
fn add_months_overflowing(year: i32, month: u32, day: u32, months: u32) -> Option<NaiveDate> {
    let zero_based = month - 1 + months;
    let year = year + (zero_based / 12) as i32;
    let month = zero_based % 12 + 1;
    NaiveDate::from_ymd_opt(year, month, 1)?.checked_add_days(Days::new(u64::from(day - 1)))
}

/// The birthday as observed in `year`; 29 February becomes 1 March in
/// common years.
fn birthday_in(birth: NaiveDate, year: i32) -> Option<NaiveDate> {
    add_months_overflowing(year, birth.month(), birth.day(), 0)
}

pub fn calculate_ages(birth: NaiveDate, on: NaiveDate) -> Result<AgeResult> {
    if birth > on {
        return Err(ToolError::BirthAfterCalculationDate { birth, on });
    }

    let out_of_range = || ToolError::InvalidDateFormat {
        calendar: Calendar::Western,
        hint: Calendar::Western.format_hint(),
    };

    let this_year_birthday = birthday_in(birth, on.year()).ok_or_else(out_of_range)?;
    let mut actual_age = on.year() - birth.year();
    let last_birthday = if on < this_year_birthday {
        actual_age -= 1;
        birthday_in(birth, on.year() - 1).ok_or_else(out_of_range)?
    } else {
        this_year_birthday
    };

    let six_months_after = add_months_overflowing(
        last_birthday.year(),
        last_birthday.month(),
        last_birthday.day(),
        6,
    )
    .ok_or_else(out_of_range)?;

    // 滿六個月當天即加一歲
    let insurance_age = if on >= six_months_after {
        actual_age + 1
    } else {
        actual_age
    };

    tracing::debug!(
        "Ages for birth {} on {}: actual {}, insurance {} (six-month mark {})",
        birth,
        on,
        actual_age,
        insurance_age,
        six_months_after
    );

    Ok(AgeResult {
        actual_age,
        insurance_age,
    })
}
