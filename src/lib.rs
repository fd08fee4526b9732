//! # familyaid
//!
//! Case-management core for a charitable-aid organization: families, their
//! members, and the financial or material aid disbursed to them.
//!
//! The crate resolves ages from 14-digit national identifiers, merges
//! family-level and member-level aid into chronological histories with exact
//! totals, and shapes the results into flat report rows ready for export.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! Nothing here reads the wall clock unless asked to: every age computation
//! takes `today` as an explicit argument.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use familyaid::core::*;
//! use rust_decimal_macros::dec;
//!
//! let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
//! let family = FamilyBuilder::new("Ahmed Hassan", "28501150100011")
//!     .add_aid(AidBuilder::family("Ramadan food box", dec!(100), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()).build())
//!     .add_member(
//!         MemberBuilder::new("Mona Ahmed", Role::Daughter)
//!             .add_aid(AidBuilder::individual("School fees", dec!(50), NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()).build())
//!             .build(),
//!     )
//!     .build()
//!     .unwrap();
//!
//! let summary = aggregate_family(&family);
//! assert_eq!(summary.total, dec!(150));
//! assert_eq!(summary.entries[0].beneficiary_name, "Mona Ahmed");
//! assert_eq!(age_from_national_id(&family.national_id, today), Some(40));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Records, national-ID ages, aggregation, history queries, validation |
//! | `reports` (default) | Clothing, aid history, family status and roster rows |
//! | `csv` (default) | Render report rows as CSV text |
//! | `json` | Ingest API payloads and session preferences |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "reports")]
pub mod reports;

#[cfg(feature = "csv")]
pub mod csv;

#[cfg(feature = "json")]
pub mod json;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
