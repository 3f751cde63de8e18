//! Rent and utility bill splitting for people sharing a rented space.
//!
//! The [`billing`] module holds the pure core: a validator that turns raw form values into a
//! [`billing::BillInput`] and a calculator that splits it into per-person shares. The remaining
//! modules carry the configuration, error, and telemetry plumbing used by the service binary.

pub mod billing;
pub mod config;
pub mod error;
pub mod telemetry;
