use chrono::NaiveDate;
use familyaid::core::*;
use familyaid::reports::*;
use rust_decimal_macros::dec;

fn main() {
    let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();

    let family = FamilyBuilder::new("Ahmed Hassan", "28501150100011")
        .phone("01012345678")
        .income(dec!(1800))
        .job("Driver")
        .social_status(SocialStatus::Married)
        .add_aid(
            AidBuilder::family("Food box", dec!(100), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
                .recurrence(Recurrence::Monthly)
                .build(),
        )
        .add_member(
            MemberBuilder::new("Mona Ahmed", Role::Daughter)
                .id("m1")
                .national_id("31003050100022")
                .education_level("Primary")
                .add_aid(
                    AidBuilder::individual(
                        "School fees",
                        dec!(50),
                        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                    )
                    .member("m1")
                    .build(),
                )
                .build(),
        )
        .build()
        .expect("family valid");

    // ── 1. Aid summary ───────────────────────────────────────────────
    println!("=== Aid for {} ===", family.full_name);
    let summary = aggregate_family(&family);
    for entry in &summary.entries {
        println!(
            "  {}  {:<12} {:<14} {:>8}",
            entry.date.format("%Y-%m-%d"),
            entry.beneficiary_name,
            entry.description,
            entry.amount
        );
    }
    println!("  Total: {}", summary.total);

    // ── 2. Member roster in both languages ───────────────────────────
    for language in [Language::En, Language::Ar] {
        let ctx = ReportContext::new(language, today);
        println!("\n=== Members ({}, {:?}) ===", language.code(), language.direction());
        for row in member_roster_rows(std::slice::from_ref(&family), &ctx) {
            let line: Vec<String> = row
                .cells()
                .iter()
                .map(|(label, cell)| format!("{label}={cell:?}"))
                .collect();
            println!("  {}", line.join(" | "));
        }
    }

    // ── 3. Validation ────────────────────────────────────────────────
    println!("\n=== Validation ===");
    let broken = FamilyBuilder::new("", "12345").phone("0101").build_unchecked();
    for error in validate_family(&broken) {
        println!("  {error}");
    }
}
