use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Cell, Column, ReportContext, Row};
use crate::core::{FamilyAidSummary, FamilyRecord, aggregate_family};

/// Financial status of one family: who they are, what they earn, and how
/// much aid they have received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyStatusRow {
    pub full_name: String,
    pub phone: Option<String>,
    pub national_id: String,
    pub income: Option<Decimal>,
    pub total_aid: Decimal,
    /// Stored members, excluding the head.
    pub members_count: usize,
    /// Full merged history behind `total_aid`, newest first.
    pub aid: FamilyAidSummary,
}

/// Status of a single family.
pub fn family_status(family: &FamilyRecord) -> FamilyStatusRow {
    let aid = aggregate_family(family);
    FamilyStatusRow {
        full_name: family.full_name.clone(),
        phone: family.phone.clone(),
        national_id: family.national_id.clone(),
        income: family.income,
        total_aid: aid.total,
        members_count: family.members.len(),
        aid,
    }
}

/// Family status sheet: one row per family with its aid total.
pub fn family_status_rows(families: &[FamilyRecord], ctx: &ReportContext) -> Vec<Row> {
    families
        .iter()
        .map(family_status)
        .map(|status| {
            Row::new()
                .with(ctx.label(Column::FamilyName), status.full_name)
                .with(ctx.label(Column::Phone), status.phone)
                .with(ctx.label(Column::NationalId), status.national_id)
                .with(ctx.label(Column::Income), status.income)
                .with(ctx.label(Column::TotalAid), status.total_aid)
                .with(
                    ctx.label(Column::MembersCount),
                    Cell::Integer(status.members_count as i64),
                )
        })
        .collect()
}
