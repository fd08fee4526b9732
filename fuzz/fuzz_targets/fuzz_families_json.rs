#![no_main]

use chrono::NaiveDate;
use familyaid::reports::{ReportContext, family_status_rows, member_roster_rows};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    // Errors are fine, panics are bugs.
    let Ok(families) = familyaid::json::families_from_json(s) else {
        return;
    };
    for family in &families {
        let summary = familyaid::aggregate_family(family);
        assert_eq!(summary.total, familyaid::total_aid(family));
    }
    let ctx = ReportContext::new(
        familyaid::Language::En,
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
    );
    let _ = familyaid::csv::to_csv(&family_status_rows(&families, &ctx), &Default::default());
    let _ = member_roster_rows(&families, &ctx);
});
