use chrono::{DateTime, Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::aggregate::{credited_member, sort_newest_first};
use super::error::AidError;
use super::types::*;

/// Default number of history entries per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// An aid disbursement in the organization-wide history, with the family it
/// belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub aid_id: Option<String>,
    pub family_id: Option<String>,
    pub family_name: String,
    /// Set when the aid is credited to a stored member.
    pub member_name: Option<String>,
    pub date: DateTime<Utc>,
    pub kind: AidKind,
    pub recurrence: Recurrence,
    pub description: String,
    pub amount: Decimal,
}

impl HistoryEntry {
    /// Name of the person (or family) credited with the aid.
    pub fn beneficiary_name(&self) -> &str {
        match self.kind {
            AidKind::Family => &self.family_name,
            AidKind::Individual => self.member_name.as_deref().unwrap_or(&self.family_name),
        }
    }

    /// Beneficiary as shown in exports: `"Member (Family)"` for member aid,
    /// the family name otherwise.
    pub fn beneficiary_label(&self) -> String {
        match (self.kind, &self.member_name) {
            (AidKind::Individual, Some(member)) => format!("{member} ({})", self.family_name),
            _ => self.family_name.clone(),
        }
    }

    fn new(family: &FamilyRecord, owner: Option<&MemberRecord>, aid: &AidRecord) -> Self {
        Self {
            aid_id: aid.id.clone(),
            family_id: family.id.clone().or_else(|| aid.family_id.clone()),
            family_name: family.full_name.clone(),
            member_name: credited_member(family, owner, aid).map(|m| m.name.clone()),
            date: aid.date,
            kind: aid.kind,
            recurrence: aid.recurrence,
            description: aid.description.clone(),
            amount: aid.amount,
        }
    }
}

/// Which disbursements to include in the history.
///
/// The date-range and month/year modes are mutually exclusive: choosing one
/// replaces the other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryFilter {
    #[default]
    All,
    /// Inclusive calendar-date bounds; either side may be open.
    DateRange {
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    },
    /// Disbursements made in the given calendar month.
    MonthYear { month: u32, year: i32 },
}

impl HistoryFilter {
    pub fn date_range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self::DateRange { start, end }
    }

    pub fn month_year(month: u32, year: i32) -> Self {
        Self::MonthYear { month, year }
    }

    /// Check the filter's parameters.
    pub fn validate(&self) -> Result<(), AidError> {
        match *self {
            Self::All => Ok(()),
            Self::DateRange {
                start: Some(start),
                end: Some(end),
            } if start > end => Err(AidError::Query(format!(
                "start date {start} is after end date {end}"
            ))),
            Self::DateRange { .. } => Ok(()),
            Self::MonthYear { month, .. } if !(1..=12).contains(&month) => Err(AidError::Query(
                format!("month {month} is outside 1-12"),
            )),
            Self::MonthYear { .. } => Ok(()),
        }
    }

    /// Whether a disbursement on `date` passes the filter.
    pub fn matches(&self, date: NaiveDate) -> bool {
        match *self {
            Self::All => true,
            Self::DateRange { start, end } => {
                start.is_none_or(|s| date >= s) && end.is_none_or(|e| date <= e)
            }
            Self::MonthYear { month, year } => date.month() == month && date.year() == year,
        }
    }
}

/// A page request over the aid history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryQuery {
    pub filter: HistoryFilter,
    /// 1-based page number.
    pub page: usize,
    pub page_size: usize,
}

impl Default for HistoryQuery {
    fn default() -> Self {
        Self {
            filter: HistoryFilter::All,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl HistoryQuery {
    pub fn new(filter: HistoryFilter) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }

    /// Replace the filter and go back to the first page.
    pub fn with_filter(mut self, filter: HistoryFilter) -> Self {
        self.filter = filter;
        self.page = 1;
        self
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    fn validate(&self) -> Result<(), AidError> {
        if self.page == 0 {
            return Err(AidError::Query("page numbers start at 1".into()));
        }
        if self.page_size == 0 {
            return Err(AidError::Query("page size must be at least 1".into()));
        }
        self.filter.validate()
    }
}

/// One page of results with pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number.
    pub page: usize,
    pub page_size: usize,
    /// Number of items matching the filter across all pages.
    pub total: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    /// Cut page `page` (1-based) out of `items`. Pages past the end are empty.
    pub fn from_items(items: Vec<T>, page: usize, page_size: usize) -> Self {
        let total = items.len();
        let total_pages = if page_size == 0 {
            0
        } else {
            total.div_ceil(page_size)
        };
        let offset = page.saturating_sub(1).saturating_mul(page_size);
        let items = items.into_iter().skip(offset).take(page_size).collect();
        Self {
            items,
            page,
            page_size,
            total,
            total_pages,
        }
    }

    pub fn has_next_page(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_prev_page(&self) -> bool {
        self.page > 1
    }
}

/// Every disbursement across `families` that passes `filter`, newest first.
///
/// Families contribute in the order given; within a family, family-level aid
/// precedes member aid. Entries on the same date keep that order.
pub fn all_history(
    families: &[FamilyRecord],
    filter: &HistoryFilter,
) -> Result<Vec<HistoryEntry>, AidError> {
    filter.validate().inspect_err(|e| tracing::debug!(%e, "rejected history filter"))?;

    let mut entries: Vec<HistoryEntry> = families
        .iter()
        .flat_map(history_entries)
        .filter(|entry| filter.matches(entry.date.date_naive()))
        .collect();
    sort_newest_first(&mut entries, |e| e.date);

    tracing::debug!(
        families = families.len(),
        matched = entries.len(),
        ?filter,
        "built aid history"
    );
    Ok(entries)
}

/// One page of the organization-wide aid history.
///
/// ```
/// use familyaid::core::*;
///
/// let page = query_history(&[], &HistoryQuery::default()).unwrap();
/// assert!(page.items.is_empty());
/// assert_eq!(page.total_pages, 0);
/// ```
pub fn query_history(
    families: &[FamilyRecord],
    query: &HistoryQuery,
) -> Result<Page<HistoryEntry>, AidError> {
    query
        .validate()
        .inspect_err(|e| tracing::debug!(%e, "rejected history query"))?;
    let entries = all_history(families, &query.filter)?;
    Ok(Page::from_items(entries, query.page, query.page_size))
}

fn history_entries(family: &FamilyRecord) -> impl Iterator<Item = HistoryEntry> + '_ {
    let family_entries = family
        .family_aids
        .iter()
        .map(move |aid| HistoryEntry::new(family, None, aid));
    let member_entries = family.members.iter().flat_map(move |member| {
        member
            .individual_aids
            .iter()
            .map(move |aid| HistoryEntry::new(family, Some(member), aid))
    });
    family_entries.chain(member_entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn date_range_is_inclusive() {
        let filter = HistoryFilter::date_range(Some(date(2024, 1, 1)), Some(date(2024, 1, 31)));
        assert!(filter.matches(date(2024, 1, 1)));
        assert!(filter.matches(date(2024, 1, 31)));
        assert!(!filter.matches(date(2023, 12, 31)));
        assert!(!filter.matches(date(2024, 2, 1)));
    }

    #[test]
    fn open_date_range_bounds() {
        let from = HistoryFilter::date_range(Some(date(2024, 6, 1)), None);
        assert!(from.matches(date(2030, 1, 1)));
        assert!(!from.matches(date(2024, 5, 31)));
        let until = HistoryFilter::date_range(None, Some(date(2024, 6, 1)));
        assert!(until.matches(date(1990, 1, 1)));
        assert!(HistoryFilter::date_range(None, None).matches(date(2024, 6, 1)));
    }

    #[test]
    fn month_year_matches_calendar_month() {
        let filter = HistoryFilter::month_year(2, 2024);
        assert!(filter.matches(date(2024, 2, 29)));
        assert!(!filter.matches(date(2023, 2, 1)));
        assert!(!filter.matches(date(2024, 3, 1)));
    }

    #[test]
    fn invalid_filters_are_rejected() {
        assert!(HistoryFilter::month_year(0, 2024).validate().is_err());
        assert!(HistoryFilter::month_year(13, 2024).validate().is_err());
        assert!(
            HistoryFilter::date_range(Some(date(2024, 2, 1)), Some(date(2024, 1, 1)))
                .validate()
                .is_err()
        );
        assert!(HistoryFilter::All.validate().is_ok());
    }

    #[test]
    fn switching_filter_resets_page() {
        let query = HistoryQuery::new(HistoryFilter::month_year(5, 2024))
            .page(4)
            .with_filter(HistoryFilter::date_range(Some(date(2024, 1, 1)), None));
        assert_eq!(query.page, 1);
        assert!(matches!(query.filter, HistoryFilter::DateRange { .. }));
    }

    #[test]
    fn page_metadata() {
        let page = Page::from_items((1..=25).collect::<Vec<_>>(), 3, 10);
        assert_eq!(page.items, vec![21, 22, 23, 24, 25]);
        assert_eq!(page.total, 25);
        assert_eq!(page.total_pages, 3);
        assert!(!page.has_next_page());
        assert!(page.has_prev_page());

        let past_end = Page::from_items((1..=25).collect::<Vec<_>>(), 9, 10);
        assert!(past_end.items.is_empty());
        assert_eq!(past_end.total_pages, 3);
    }

    #[test]
    fn zero_page_or_size_is_rejected() {
        assert!(query_history(&[], &HistoryQuery::default().page(0)).is_err());
        assert!(query_history(&[], &HistoryQuery::default().page_size(0)).is_err());
    }
}
