use chrono::NaiveDate;
use familyaid::core::*;
use familyaid::csv::*;
use familyaid::reports::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn main() {
    let families: Vec<FamilyRecord> = (1..=3u32)
        .map(|n| {
            let mut builder = FamilyBuilder::new(format!("Family {n}"), "28501150100011");
            for month in 1..=6 {
                let amount = dec!(250) * Decimal::from(n);
                builder = builder.add_aid(
                    AidBuilder::family("Monthly stipend", amount, date(2024, month, n))
                        .recurrence(Recurrence::Monthly)
                        .build(),
                );
            }
            builder.build_unchecked()
        })
        .collect();

    // Page through March 2024, three entries at a time
    let mut query = HistoryQuery::new(HistoryFilter::month_year(3, 2024)).page_size(3);
    loop {
        let page = query_history(&families, &query).expect("query valid");
        println!("Page {}/{} ({} entries)", page.page, page.total_pages, page.total);
        for entry in &page.items {
            println!(
                "  {} {} {}",
                entry.date.format("%Y-%m-%d"),
                entry.beneficiary_label(),
                entry.amount
            );
        }
        if !page.has_next_page() {
            break;
        }
        query = query.page(page.page + 1);
    }

    // Export the full first half-year as CSV
    let ctx = ReportContext::new(Language::En, date(2025, 1, 1));
    let filter = HistoryFilter::date_range(Some(date(2024, 1, 1)), Some(date(2024, 6, 30)));
    let entries = all_history(&families, &filter).expect("filter valid");
    let csv = to_csv(&history_rows(&entries, &ctx), &CsvConfig::default());

    let path = std::env::temp_dir().join(report_file_name(ReportKind::AidHistory));
    std::fs::write(&path, &csv).expect("write CSV");
    println!("\nWrote {} entries to {}", entries.len(), path.display());
}
