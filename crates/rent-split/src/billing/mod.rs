//! Bill splitting: validate a submitted form, then divide rent and bills per person.

pub mod batch;
pub mod calculator;
pub mod domain;
pub mod format;
pub mod router;
pub mod session;
pub mod validation;

#[cfg(test)]
mod tests;

pub use batch::{BatchEntry, BatchImportError, BatchImporter, BatchOutcome, BatchReport};
pub use calculator::{occupancy_fraction, split, REFERENCE_MONTH_DAYS};
pub use domain::{
    BillField, BillInput, BillResult, RawBillForm, RawValue, SEED_DAYS, SEED_PERSON, SEED_RENT,
};
pub use format::{format_brl, FormattedShares, SplitView};
pub use router::split_router;
pub use session::{BillSplitSession, Submission};
pub use validation::{validate, FieldValidationError, ValidationErrors};
