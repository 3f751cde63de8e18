use super::domain::{BillInput, BillResult};

/// Days in the month that occupancy is measured against, whatever the calendar says.
pub const REFERENCE_MONTH_DAYS: f64 = 30.0;

/// Share of the reference month the tenants actually used.
pub fn occupancy_fraction(input: &BillInput) -> f64 {
    f64::from(input.days()) / REFERENCE_MONTH_DAYS
}

/// Splits a validated submission into one person's shares.
///
/// Rent is prorated by the occupied fraction of the month before it is divided. Utility and
/// other bills are divided as they are, since each bill already covers the period used.
pub fn split(input: &BillInput) -> BillResult {
    let person = f64::from(input.person());

    let rent_share = (input.rent() * occupancy_fraction(input)) / person;
    let bills_share = (input.water_bill()
        + input.energy_bill()
        + input.internet_bill()
        + input.others())
        / person;

    BillResult {
        rent_share,
        bills_share,
    }
}
