use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::*;

/// One aid disbursement flattened for display, tagged with who received it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedAidEntry {
    pub date: DateTime<Utc>,
    /// Family name for family-level aid, member name for member aid.
    pub beneficiary_name: String,
    pub kind: AidKind,
    pub recurrence: Recurrence,
    pub description: String,
    pub amount: Decimal,
}

impl AggregatedAidEntry {
    fn from_record(record: &AidRecord, beneficiary_name: &str) -> Self {
        Self {
            date: record.date,
            beneficiary_name: beneficiary_name.to_string(),
            kind: record.kind,
            recurrence: record.recurrence,
            description: record.description.clone(),
            amount: record.amount,
        }
    }
}

/// A family's merged aid history and its exact total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyAidSummary {
    /// Newest first; entries with equal dates keep their recorded order.
    pub entries: Vec<AggregatedAidEntry>,
    pub total: Decimal,
}

impl FamilyAidSummary {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Merge a family's own aid and every member's individual aid into one
/// history, newest first, and sum the amounts.
///
/// Member records are credited to the member's name. Family-level records are
/// credited to the member their `member_id` names, or to the family's full
/// name. A family with no aid yields an empty history and a zero total.
pub fn aggregate_family(family: &FamilyRecord) -> FamilyAidSummary {
    let mut entries = flatten_family(family);
    let total = sum_amounts(&entries);
    sort_newest_first(&mut entries, |e| e.date);

    tracing::trace!(
        family = %family.full_name,
        entries = entries.len(),
        %total,
        "aggregated family aid"
    );

    FamilyAidSummary { entries, total }
}

/// Total aid received by a family and all of its members.
pub fn total_aid(family: &FamilyRecord) -> Decimal {
    let family_total: Decimal = family.family_aids.iter().map(|a| a.amount).sum();
    let member_total: Decimal = family
        .members
        .iter()
        .flat_map(|m| m.individual_aids.iter())
        .map(|a| a.amount)
        .sum();
    family_total + member_total
}

/// Family aid first, then each member's aid, in stored order.
fn flatten_family(family: &FamilyRecord) -> Vec<AggregatedAidEntry> {
    let family_entries = family.family_aids.iter().map(|aid| {
        let name = credited_member(family, None, aid)
            .map_or(family.full_name.as_str(), |m| m.name.as_str());
        AggregatedAidEntry::from_record(aid, name)
    });
    let member_entries = family.members.iter().flat_map(|member| {
        member
            .individual_aids
            .iter()
            .map(|aid| AggregatedAidEntry::from_record(aid, &member.name))
    });
    family_entries.chain(member_entries).collect()
}

/// Member credited with `aid`. Aid stored on a member belongs to that member;
/// aid stored on the family belongs to the member its `member_id` names, if any.
pub(crate) fn credited_member<'a>(
    family: &'a FamilyRecord,
    owner: Option<&'a MemberRecord>,
    aid: &AidRecord,
) -> Option<&'a MemberRecord> {
    owner.or_else(|| match aid.beneficiary(family) {
        Beneficiary::Member(member) => Some(member),
        Beneficiary::Family | Beneficiary::Head => None,
    })
}

fn sum_amounts(entries: &[AggregatedAidEntry]) -> Decimal {
    entries.iter().map(|e| e.amount).sum()
}

/// Stable sort, most recent date first.
pub(crate) fn sort_newest_first<T, F>(items: &mut [T], date: F)
where
    F: Fn(&T) -> DateTime<Utc>,
{
    items.sort_by(|a, b| date(b).cmp(&date(a)));
}
