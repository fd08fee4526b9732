#![no_main]

use chrono::NaiveDate;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        // Any input resolves to an age or to unknown, never a panic
        let age = familyaid::age_from_national_id(s, today);
        if age.is_some() {
            assert!(familyaid::is_valid_national_id(s));
        }
    }
});
