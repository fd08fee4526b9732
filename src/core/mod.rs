//! Core family and aid types, national-ID ages, aggregation, and validation.
//!
//! Everything in this module is pure computation over records that the
//! persistence layer has already materialized. Reads never fail: missing
//! collections count as empty and malformed identifiers resolve to an
//! unknown age.

mod aggregate;
mod builder;
mod error;
mod history;
pub mod national_id;
mod preferences;
mod search;
mod serde_helpers;
mod types;
mod validation;

pub use aggregate::*;
pub use builder::*;
pub use error::*;
pub use history::*;
pub use national_id::{
    NATIONAL_ID_LEN, age_from_national_id, age_on, birth_date_from_national_id, current_age,
    is_valid_national_id,
};
pub use preferences::*;
pub use search::*;
pub use types::*;
pub use validation::*;
