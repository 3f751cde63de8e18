use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The seven inputs of the split form, declared in the order the form presents them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BillField {
    Person,
    Days,
    Rent,
    WaterBill,
    EnergyBill,
    InternetBill,
    Others,
}

impl BillField {
    pub const ALL: [BillField; 7] = [
        BillField::Person,
        BillField::Days,
        BillField::Rent,
        BillField::WaterBill,
        BillField::EnergyBill,
        BillField::InternetBill,
        BillField::Others,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BillField::Person => "person",
            BillField::Days => "days",
            BillField::Rent => "rent",
            BillField::WaterBill => "waterBill",
            BillField::EnergyBill => "energyBill",
            BillField::InternetBill => "internetBill",
            BillField::Others => "others",
        }
    }

    /// Exact wire-name lookup, used for JSON keys.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    /// Spreadsheet header lookup: trimmed and case-insensitive.
    pub fn from_header(header: &str) -> Option<Self> {
        let header = header.trim();
        Self::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(header))
    }

    /// Label shown next to the input on the form.
    pub fn label(self) -> &'static str {
        match self {
            BillField::Person => "Dividir por quantas pessoas?",
            BillField::Days => "Quantos dias foram usados?",
            BillField::Rent => "Valor do aluguel",
            BillField::WaterBill => "Valor da conta de água",
            BillField::EnergyBill => "Valor da conta de energia",
            BillField::InternetBill => "Valor da conta de internet",
            BillField::Others => "Outros gastos",
        }
    }

    /// Utility and miscellaneous expenses, split without day proration.
    pub fn is_bill(self) -> bool {
        matches!(
            self,
            BillField::WaterBill | BillField::EnergyBill | BillField::InternetBill | BillField::Others
        )
    }
}

impl fmt::Display for BillField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value as the form delivered it, before any coercion.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RawValue {
    Text(String),
    Number(f64),
    /// Anything that is neither text nor a number (booleans, arrays, objects).
    Unsupported,
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<u32> for RawValue {
    fn from(value: u32) -> Self {
        RawValue::Number(f64::from(value))
    }
}

/// Seed values of a fresh form, as the user would see them typed in.
pub const SEED_PERSON: &str = "3";
pub const SEED_DAYS: &str = "8";
pub const SEED_RENT: &str = "1000";

/// Field name to raw value, as collected on submission. Unset fields are simply absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RawBillForm {
    values: BTreeMap<BillField, RawValue>,
}

impl RawBillForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// The form as first shown: three people, eight days, rent of 1000, bills unset.
    pub fn seeded() -> Self {
        Self::new()
            .with(BillField::Person, SEED_PERSON)
            .with(BillField::Days, SEED_DAYS)
            .with(BillField::Rent, SEED_RENT)
    }

    pub fn with(mut self, field: BillField, value: impl Into<RawValue>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: BillField, value: impl Into<RawValue>) {
        self.values.insert(field, value.into());
    }

    pub fn remove(&mut self, field: BillField) -> Option<RawValue> {
        self.values.remove(&field)
    }

    pub fn get(&self, field: BillField) -> Option<&RawValue> {
        self.values.get(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (BillField, &RawValue)> {
        self.values.iter().map(|(field, value)| (*field, value))
    }
}

impl FromIterator<(BillField, RawValue)> for RawBillForm {
    fn from_iter<I: IntoIterator<Item = (BillField, RawValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<'de> Deserialize<'de> for RawBillForm {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, Value>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .filter_map(|(name, value)| {
                let field = BillField::from_name(&name)?;
                let value = match value {
                    Value::Null => return None,
                    Value::String(text) => RawValue::Text(text),
                    Value::Number(number) => match number.as_f64() {
                        Some(number) => RawValue::Number(number),
                        None => RawValue::Unsupported,
                    },
                    Value::Bool(_) | Value::Array(_) | Value::Object(_) => RawValue::Unsupported,
                };
                Some((field, value))
            })
            .collect())
    }
}

/// A submission that passed validation. Only the validator constructs one, so every field is
/// inside its domain: `days` in 1..=30, `person` in 1..=4, amounts finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillInput {
    days: u8,
    person: u8,
    rent: f64,
    water_bill: f64,
    energy_bill: f64,
    internet_bill: f64,
    others: f64,
}

impl BillInput {
    pub(crate) fn new(
        days: u8,
        person: u8,
        rent: f64,
        water_bill: f64,
        energy_bill: f64,
        internet_bill: f64,
        others: f64,
    ) -> Self {
        Self {
            days,
            person,
            rent,
            water_bill,
            energy_bill,
            internet_bill,
            others,
        }
    }

    pub fn days(&self) -> u8 {
        self.days
    }

    pub fn person(&self) -> u8 {
        self.person
    }

    pub fn rent(&self) -> f64 {
        self.rent
    }

    pub fn water_bill(&self) -> f64 {
        self.water_bill
    }

    pub fn energy_bill(&self) -> f64 {
        self.energy_bill
    }

    pub fn internet_bill(&self) -> f64 {
        self.internet_bill
    }

    pub fn others(&self) -> f64 {
        self.others
    }
}

/// One person's shares. Values are unrounded; rounding happens at display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillResult {
    pub rent_share: f64,
    pub bills_share: f64,
}

impl BillResult {
    pub fn total(&self) -> f64 {
        self.rent_share + self.bills_share
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_round_trip_through_lookup() {
        for field in BillField::ALL {
            assert_eq!(BillField::from_name(field.name()), Some(field));
        }
        assert_eq!(BillField::from_name("WATERBILL"), None);
        assert_eq!(BillField::from_name("gasBill"), None);
        assert_eq!(BillField::from_header(" WATERBILL "), Some(BillField::WaterBill));
        assert_eq!(BillField::from_header("gasBill"), None);
    }

    #[test]
    fn seeded_form_leaves_bills_unset() {
        let form = RawBillForm::seeded();

        assert_eq!(form.get(BillField::Person), Some(&RawValue::from("3")));
        assert_eq!(form.get(BillField::Days), Some(&RawValue::from("8")));
        assert_eq!(form.get(BillField::Rent), Some(&RawValue::from("1000")));
        assert!(BillField::ALL
            .into_iter()
            .filter(|field| field.is_bill())
            .all(|field| form.get(field).is_none()));
    }

    #[test]
    fn deserializes_mixed_json_values() {
        let form: RawBillForm = serde_json::from_str(
            r#"{"person":"2","days":15,"rent":null,"others":true,"garage":"10"}"#,
        )
        .expect("form parses");

        assert_eq!(
            form.get(BillField::Person),
            Some(&RawValue::Text("2".to_string()))
        );
        assert_eq!(form.get(BillField::Days), Some(&RawValue::Number(15.0)));
        assert!(form.get(BillField::Rent).is_none());
        assert_eq!(form.get(BillField::Others), Some(&RawValue::Unsupported));
        assert_eq!(form.iter().count(), 3);
    }

    #[test]
    fn json_keys_match_wire_names_exactly() {
        let form: RawBillForm =
            serde_json::from_str(r#"{"person":"2","PERSON":"9","Days":"5"}"#).expect("form parses");

        assert_eq!(form.get(BillField::Person), Some(&RawValue::from("2")));
        assert!(form.get(BillField::Days).is_none());
        assert_eq!(form.iter().count(), 1);
    }

    #[test]
    fn serializes_with_wire_names() {
        let form = RawBillForm::new()
            .with(BillField::WaterBill, "100")
            .with(BillField::Person, 2u32);

        let json = serde_json::to_value(&form).expect("form serializes");

        assert_eq!(json, serde_json::json!({ "person": 2.0, "waterBill": "100" }));
    }
}
