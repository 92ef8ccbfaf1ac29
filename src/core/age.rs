use crate::input::validators::DATE_FORMAT;
use chrono::{Datelike, Local, NaiveDate};

/// Whole years completed between `birth` and `today`: year difference,
/// minus one if this year's birthday is still ahead.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

/// Age as of the current date, from a `YYYY-MM-DD` string. Returns `None`
/// for unparseable input; well-formedness is checked upstream by the
/// birth-date validator.
pub fn derive_age(value: &str) -> Option<i32> {
    let birth = NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()?;
    Some(age_on(birth, Local::now().date_naive()))
}
