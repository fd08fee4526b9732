use super::{Column, ReportContext, Row, kind_label, recurrence_label};
use crate::core::HistoryEntry;

/// Aid history sheet: one row per disbursement, in the order given (usually
/// newest first, as produced by [`all_history`](crate::core::all_history)).
pub fn history_rows(entries: &[HistoryEntry], ctx: &ReportContext) -> Vec<Row> {
    entries
        .iter()
        .map(|entry| {
            Row::new()
                .with(ctx.label(Column::Date), entry.date.date_naive())
                .with(ctx.label(Column::Type), kind_label(entry.kind, ctx.language))
                .with(
                    ctx.label(Column::Recurrence),
                    recurrence_label(entry.recurrence, ctx.language),
                )
                .with(ctx.label(Column::Beneficiary), entry.beneficiary_label())
                .with(ctx.label(Column::Description), entry.description.as_str())
                .with(ctx.label(Column::Amount), entry.amount)
        })
        .collect()
}
