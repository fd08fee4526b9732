use chrono::{NaiveDate, TimeZone, Utc};
use familyaid::core::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn hassan() -> FamilyRecord {
    FamilyBuilder::new("Ahmed Hassan", "28501150100011")
        .id("f1")
        .phone("01012345678")
        .income(dec!(1800))
        .add_aid(AidBuilder::family("Food box", dec!(100), date(2024, 1, 1)).build())
        .add_aid(
            AidBuilder::individual("Glasses", dec!(350.75), date(2024, 3, 15))
                .recurrence(Recurrence::None)
                .build(),
        )
        .add_member(
            MemberBuilder::new("Mona Ahmed", Role::Daughter)
                .id("m1")
                .national_id("31003050100022")
                .add_aid(
                    AidBuilder::individual("School fees", dec!(50), date(2024, 6, 1))
                        .member("m1")
                        .recurrence(Recurrence::Yearly)
                        .build(),
                )
                .build(),
        )
        .add_member(MemberBuilder::new("Youssef Ahmed", Role::Son).id("m2").build())
        .build()
        .unwrap()
}

fn saleh() -> FamilyRecord {
    FamilyBuilder::new("Mahmoud Saleh", "27203220100033")
        .id("f2")
        .add_aid(
            AidBuilder::family("Monthly stipend", dec!(500), date(2024, 2, 1))
                .recurrence(Recurrence::Monthly)
                .build(),
        )
        .add_aid(
            AidBuilder::family("Monthly stipend", dec!(500), date(2024, 3, 1))
                .recurrence(Recurrence::Monthly)
                .build(),
        )
        .build()
        .unwrap()
}

// --- Identifier age resolver ---

#[test]
fn age_from_national_id_examples() {
    let today = date(2025, 3, 1);
    assert_eq!(age_from_national_id("29901010123456", today), Some(35));
    assert_eq!(age_from_national_id("30102300000000", today), None);
}

#[test]
fn age_changes_only_at_birthday() {
    let id = "29006150100000"; // 1990-06-15
    assert_eq!(age_from_national_id(id, date(2024, 6, 14)), Some(33));
    assert_eq!(age_from_national_id(id, date(2024, 6, 15)), Some(34));
    assert_eq!(age_from_national_id(id, date(2025, 6, 14)), Some(34));
}

#[test]
fn wall_clock_age_matches_explicit_today() {
    let today = chrono::Local::now().date_naive();
    assert_eq!(
        current_age("28501150100011"),
        age_from_national_id("28501150100011", today)
    );
}

// --- Aggregation ---

#[test]
fn family_and_member_aid_merge() {
    let summary = aggregate_family(&hassan());

    assert_eq!(summary.total, dec!(500.75));
    let names: Vec<_> = summary
        .entries
        .iter()
        .map(|e| (e.beneficiary_name.as_str(), e.kind))
        .collect();
    assert_eq!(
        names,
        [
            ("Mona Ahmed", AidKind::Individual),
            ("Ahmed Hassan", AidKind::Individual),
            ("Ahmed Hassan", AidKind::Family),
        ]
    );
    assert_eq!(summary.entries[0].recurrence, Recurrence::Yearly);
}

#[test]
fn aggregation_is_idempotent() {
    let family = hassan();
    assert_eq!(aggregate_family(&family), aggregate_family(&family));
}

#[test]
fn total_matches_aggregate_total() {
    for family in [hassan(), saleh()] {
        assert_eq!(total_aid(&family), aggregate_family(&family).total);
    }
}

#[test]
fn family_without_aid() {
    let family = FamilyBuilder::new("Empty", "28501150100011")
        .add_member(MemberBuilder::new("Child", Role::Son).build())
        .build()
        .unwrap();
    let summary = aggregate_family(&family);
    assert!(summary.entries.is_empty());
    assert_eq!(summary.total, Decimal::ZERO);
}

#[test]
fn intraday_timestamps_order_entries() {
    let morning = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
    let evening = Utc.with_ymd_and_hms(2024, 5, 1, 20, 0, 0).unwrap();
    let family = FamilyBuilder::new("Ahmed Hassan", "28501150100011")
        .add_aid(AidBuilder::family("morning", dec!(1), date(2024, 5, 1)).at(morning).build())
        .add_aid(AidBuilder::family("evening", dec!(1), date(2024, 5, 1)).at(evening).build())
        .build_unchecked();
    let summary = aggregate_family(&family);
    assert_eq!(summary.entries[0].description, "evening");
}

// --- Beneficiary resolution ---

#[test]
fn beneficiary_resolution() {
    let family = hassan();
    let member_aid = &family.members[0].individual_aids[0];
    assert!(matches!(
        member_aid.beneficiary(&family),
        Beneficiary::Member(m) if m.name == "Mona Ahmed"
    ));
    assert_eq!(family.family_aids[0].beneficiary(&family), Beneficiary::Family);
    assert_eq!(family.family_aids[1].beneficiary(&family), Beneficiary::Head);
    assert_eq!(family.household_size(), 3);
}

#[test]
fn member_targeted_family_aid_is_credited_to_the_member() {
    let family = FamilyBuilder::new("Ahmed Hassan", "28501150100011")
        .add_member(MemberBuilder::new("Sara Ahmed", Role::Daughter).id("m1").build())
        .add_aid(
            AidBuilder::individual("Glasses", dec!(200), date(2024, 4, 1))
                .member("m1")
                .build(),
        )
        .build()
        .unwrap();

    assert!(matches!(
        family.family_aids[0].beneficiary(&family),
        Beneficiary::Member(m) if m.name == "Sara Ahmed"
    ));
    assert_eq!(aggregate_family(&family).entries[0].beneficiary_name, "Sara Ahmed");

    let history = all_history(std::slice::from_ref(&family), &HistoryFilter::All).unwrap();
    assert_eq!(history[0].member_name.as_deref(), Some("Sara Ahmed"));
    assert_eq!(history[0].beneficiary_name(), "Sara Ahmed");
    assert_eq!(history[0].beneficiary_label(), "Sara Ahmed (Ahmed Hassan)");
}

// --- History ---

#[test]
fn history_spans_all_families() {
    let families = [hassan(), saleh()];
    let history = all_history(&families, &HistoryFilter::All).unwrap();
    assert_eq!(history.len(), 5);
    let dates: Vec<_> = history.iter().map(|e| e.date.date_naive()).collect();
    assert_eq!(
        dates,
        [
            date(2024, 6, 1),
            date(2024, 3, 15),
            date(2024, 3, 1),
            date(2024, 2, 1),
            date(2024, 1, 1)
        ]
    );
    assert_eq!(history[0].beneficiary_label(), "Mona Ahmed (Ahmed Hassan)");
    assert_eq!(history[0].beneficiary_name(), "Mona Ahmed");
    assert_eq!(history[1].beneficiary_label(), "Ahmed Hassan");
    assert_eq!(history[2].family_id.as_deref(), Some("f2"));
}

#[test]
fn history_month_filter() {
    let families = [hassan(), saleh()];
    let march = all_history(&families, &HistoryFilter::month_year(3, 2024)).unwrap();
    assert_eq!(march.len(), 2);
    assert!(march.iter().all(|e| e.date.date_naive() >= date(2024, 3, 1)));
}

#[test]
fn history_date_range_filter() {
    let families = [hassan(), saleh()];
    let filter = HistoryFilter::date_range(Some(date(2024, 2, 1)), Some(date(2024, 3, 15)));
    let entries = all_history(&families, &filter).unwrap();
    let amounts: Vec<_> = entries.iter().map(|e| e.amount).collect();
    assert_eq!(amounts, [dec!(350.75), dec!(500), dec!(500)]);
}

#[test]
fn history_pages() {
    let families = [hassan(), saleh()];
    let query = HistoryQuery::default().page_size(2);

    let first = query_history(&families, &query).unwrap();
    assert_eq!(first.total, 5);
    assert_eq!(first.total_pages, 3);
    assert_eq!(first.items.len(), 2);
    assert!(first.has_next_page());

    let last = query_history(&families, &query.page(3)).unwrap();
    assert_eq!(last.items.len(), 1);
    assert_eq!(last.items[0].description, "Food box");
    assert!(!last.has_next_page());

    let beyond = query_history(&families, &query.page(4)).unwrap();
    assert!(beyond.items.is_empty());
}

#[test]
fn history_rejects_bad_queries() {
    let families = [hassan()];
    let bad_month = HistoryQuery::new(HistoryFilter::month_year(13, 2024));
    assert!(matches!(
        query_history(&families, &bad_month),
        Err(AidError::Query(_))
    ));
    let reversed = HistoryFilter::date_range(Some(date(2024, 5, 1)), Some(date(2024, 4, 1)));
    assert!(all_history(&families, &reversed).is_err());
}

// --- Builders and validation ---

#[test]
fn builder_rejects_invalid_family() {
    let err = FamilyBuilder::new("", "99999999999999").build().unwrap_err();
    let msg = err.to_string();
    assert!(msg.starts_with("validation failed:"), "{msg}");
    assert!(msg.contains("[FAM-01]"), "{msg}");
    assert!(msg.contains("[FAM-02]"), "{msg}");
}

#[test]
fn validation_error_display() {
    let err = ValidationError::with_rule("phone", "bad", "FAM-03");
    assert_eq!(err.to_string(), "[FAM-03] phone: bad");
    assert_eq!(ValidationError::new("x", "y").to_string(), "x: y");
}

// --- Search ---

#[test]
fn search_by_name_or_id() {
    let families = [hassan(), saleh()];
    assert_eq!(search_families(&families, "saleh").len(), 1);
    assert_eq!(search_families(&families, "2850115")[0].full_name, "Ahmed Hassan");
}

// --- Concurrency ---

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn records_are_shareable_across_threads() {
    assert_send_sync::<FamilyRecord>();
    assert_send_sync::<FamilyAidSummary>();
    assert_send_sync::<Page<HistoryEntry>>();

    let families = std::sync::Arc::new(vec![hassan(), saleh()]);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let families = std::sync::Arc::clone(&families);
            std::thread::spawn(move || families.iter().map(total_aid).sum::<Decimal>())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), dec!(1500.75));
    }
}
