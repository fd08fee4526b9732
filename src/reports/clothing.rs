use serde::{Deserialize, Serialize};

use super::{Cell, Column, ReportContext, Row, role_label};
use crate::core::{FamilyRecord, Role};

/// Options for the clothing sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClothingOptions {
    /// Emit a row for the head of family before the members. Off by default:
    /// the sheet has historically listed stored members only.
    pub include_head: bool,
}

/// Clothing sheet: family name, person, role, size, and size details.
pub fn clothing_rows(
    families: &[FamilyRecord],
    ctx: &ReportContext,
    options: &ClothingOptions,
) -> Vec<Row> {
    let mut rows = Vec::new();
    for family in families {
        if options.include_head {
            rows.push(clothing_row(
                ctx,
                &family.full_name,
                &family.full_name,
                Role::Head,
                family.clothing_size.as_deref(),
                family.clothing_details.as_deref(),
            ));
        }
        for member in &family.members {
            rows.push(clothing_row(
                ctx,
                &family.full_name,
                &member.name,
                member.role,
                member.clothing_size.as_deref(),
                member.clothing_details.as_deref(),
            ));
        }
    }
    rows
}

fn clothing_row(
    ctx: &ReportContext,
    family_name: &str,
    name: &str,
    role: Role,
    size: Option<&str>,
    details: Option<&str>,
) -> Row {
    Row::new()
        .with(ctx.label(Column::FamilyName), family_name)
        .with(ctx.label(Column::Member), name)
        .with(ctx.label(Column::Role), role_label(role, ctx.language))
        .with(ctx.label(Column::Size), Cell::text_or_empty(size))
        .with(ctx.label(Column::SizeDetails), Cell::text_or_empty(details))
}
