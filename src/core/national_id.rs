//! Birth dates and ages derived from 14-digit national identifiers.
//!
//! Layout of the identifier prefix:
//!
//! | Position | Meaning |
//! |----------|---------|
//! | 0 | Century: `2` = 1900s, `3` = 2000s |
//! | 1–2 | Year within the century |
//! | 3–4 | Month (01–12) |
//! | 5–6 | Day of month |
//!
//! The remaining seven digits are not interpreted here. Any identifier that
//! does not decode to a real calendar date yields `None`; callers treat that
//! as "age unknown" and never see why.

use chrono::{Datelike, Local, NaiveDate};

/// Exact length of a national identifier.
pub const NATIONAL_ID_LEN: usize = 14;

/// Decode the birth date embedded in a national identifier.
///
/// Returns `None` for anything that is not 14 ASCII digits, has a century
/// digit other than `2` or `3`, or names an impossible date such as
/// February 30th.
pub fn birth_date_from_national_id(id: &str) -> Option<NaiveDate> {
    let digits = id.as_bytes();
    if digits.len() != NATIONAL_ID_LEN || !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }

    let century_base = match digits[0] {
        b'2' => 1900,
        b'3' => 2000,
        _ => return None,
    };
    let year = century_base + two_digits(digits[1], digits[2]) as i32;
    let month = two_digits(digits[3], digits[4]);
    let day = two_digits(digits[5], digits[6]);

    // from_ymd_opt rejects month 0/13+, day 0, and days past the month's end
    NaiveDate::from_ymd_opt(year, month, day)
}

fn two_digits(tens: u8, ones: u8) -> u32 {
    u32::from(tens - b'0') * 10 + u32::from(ones - b'0')
}

/// Whether the identifier decodes to a real birth date.
///
/// This does not check that the date is in the past; use
/// [`age_from_national_id`] for that.
pub fn is_valid_national_id(id: &str) -> bool {
    birth_date_from_national_id(id).is_some()
}

/// Whole years elapsed between `birth` and `today`.
///
/// Returns `None` if `birth` is after `today`.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> Option<u32> {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    u32::try_from(age).ok()
}

/// Age of the identifier's holder as of `today`, or `None` when unknown.
///
/// ```
/// use chrono::NaiveDate;
/// use familyaid::core::age_from_national_id;
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
/// assert_eq!(age_from_national_id("29901010123456", today), Some(34));
/// assert_eq!(age_from_national_id("30102300000000", today), None); // Feb 30th
/// assert_eq!(age_from_national_id("123", today), None);
/// ```
pub fn age_from_national_id(id: &str, today: NaiveDate) -> Option<u32> {
    birth_date_from_national_id(id).and_then(|birth| age_on(birth, today))
}

/// Age as of the local wall-clock date.
///
/// Prefer [`age_from_national_id`] with an explicit date wherever the result
/// must be reproducible.
pub fn current_age(id: &str) -> Option<u32> {
    age_from_national_id(id, Local::now().date_naive())
}
