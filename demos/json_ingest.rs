use chrono::NaiveDate;
use familyaid::core::*;
use familyaid::json::*;
use familyaid::reports::*;

const PAYLOAD: &str = r#"{"data": [
  {"id": 1, "fullName": "Ahmed Hassan", "nationalId": "28501150100011", "phone": "01012345678",
   "income": "1800", "socialStatus": "Married",
   "familyAids": [{"type": "FAMILY", "description": "Food box", "amount": 100,
                   "date": "2024-01-01T00:00:00.000Z", "recurrenceType": "MONTHLY"}],
   "members": [{"id": 5, "name": "Mona Ahmed", "role": "Daughter",
                "individualAids": [{"type": "INDIVIDUAL", "description": "School fees",
                                    "amount": "50", "date": "2024-06-01", "memberId": 5}]}]},
  {"id": 2, "fullName": "Mahmoud Saleh", "nationalId": "27203220100033",
   "members": null, "familyAids": null}
]}"#;

fn main() {
    let families = families_from_json(PAYLOAD).expect("payload valid");

    let mut prefs = preferences_from_json(r#"{"language": "en"}"#).expect("preferences valid");
    let ctx = ReportContext::from_preferences(&prefs, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());

    println!("=== Family status ===");
    for status in families.iter().map(family_status) {
        println!(
            "  {:<16} members={} total={}",
            status.full_name, status.members_count, status.total_aid
        );
    }

    println!("\n=== Search 'hassan' ===");
    for family in search_families(&families, "hassan") {
        println!("  {} ({})", family.full_name, family.national_id);
    }

    println!("\n=== Clothing sheet ===");
    for row in clothing_rows(&families, &ctx, &ClothingOptions { include_head: true }) {
        println!("  {:?}", row.cells());
    }

    prefs.toggle_language();
    println!("\nStored preferences: {}", preferences_to_json(&prefs).expect("serializable"));
}
