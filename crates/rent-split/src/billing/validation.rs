use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::debug;

use super::domain::{BillField, BillInput, RawBillForm, RawValue};

/// A rejected field and the message shown beside its input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct FieldValidationError {
    pub field: BillField,
    pub message: String,
}

/// Every field that failed on a submission, in form order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors {
    errors: Vec<FieldValidationError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldValidationError> {
        self.errors.iter()
    }

    pub fn get(&self, field: BillField) -> Option<&FieldValidationError> {
        self.errors.iter().find(|error| error.field == field)
    }

    pub fn message(&self, field: BillField) -> Option<&str> {
        self.get(field).map(|error| error.message.as_str())
    }

    pub fn fields(&self) -> Vec<BillField> {
        self.errors.iter().map(|error| error.field).collect()
    }

    fn push(&mut self, field: BillField, violation: Violation) {
        self.errors.push(FieldValidationError {
            field,
            message: violation.message(field),
        });
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "invalid bill form ({joined})")
    }
}

impl std::error::Error for ValidationErrors {}

impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for error in &self.errors {
            map.serialize_entry(error.field.name(), &error.message)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Violation {
    Missing,
    NotANumber,
    NotAnInteger,
    OutOfRange,
    Negative,
}

impl Violation {
    fn message(self, field: BillField) -> String {
        match field {
            BillField::Person => match self {
                Violation::Missing => "Informe por quantas pessoas dividir".to_string(),
                Violation::NotANumber => "Informe um número de pessoas válido".to_string(),
                Violation::NotAnInteger => {
                    "O número de pessoas deve ser um número inteiro".to_string()
                }
                Violation::OutOfRange | Violation::Negative => {
                    "Divida entre 1 e 4 pessoas".to_string()
                }
            },
            BillField::Days => match self {
                Violation::Missing => "Informe quantos dias foram usados".to_string(),
                Violation::NotANumber => "Informe uma quantidade de dias válida".to_string(),
                Violation::NotAnInteger => {
                    "A quantidade de dias deve ser um número inteiro".to_string()
                }
                Violation::OutOfRange | Violation::Negative => {
                    "Os dias usados devem estar entre 1 e 30".to_string()
                }
            },
            amount => {
                let noun = amount_noun(amount);
                match self {
                    Violation::Missing => format!("Informe {noun}"),
                    Violation::NotANumber | Violation::NotAnInteger => {
                        format!("Digite um número válido para {noun}")
                    }
                    Violation::OutOfRange | Violation::Negative => {
                        format!("{} não pode ser negativo", capitalize(noun))
                    }
                }
            }
        }
    }
}

fn amount_noun(field: BillField) -> &'static str {
    match field {
        BillField::Rent => "o valor do aluguel",
        BillField::WaterBill => "o valor da conta de água",
        BillField::EnergyBill => "o valor da conta de energia",
        BillField::InternetBill => "o valor da conta de internet",
        _ => "o valor dos outros gastos",
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Debug, Clone, Copy)]
enum Constraint {
    Integer { min: u8, max: u8 },
    Amount,
}

struct FieldRule {
    field: BillField,
    constraint: Constraint,
}

const RULES: [FieldRule; 7] = [
    FieldRule {
        field: BillField::Person,
        constraint: Constraint::Integer { min: 1, max: 4 },
    },
    FieldRule {
        field: BillField::Days,
        constraint: Constraint::Integer { min: 1, max: 30 },
    },
    FieldRule {
        field: BillField::Rent,
        constraint: Constraint::Amount,
    },
    FieldRule {
        field: BillField::WaterBill,
        constraint: Constraint::Amount,
    },
    FieldRule {
        field: BillField::EnergyBill,
        constraint: Constraint::Amount,
    },
    FieldRule {
        field: BillField::InternetBill,
        constraint: Constraint::Amount,
    },
    FieldRule {
        field: BillField::Others,
        constraint: Constraint::Amount,
    },
];

/// Coerces a raw value to a finite number. Blank text counts as absent.
fn coerce_number(raw: Option<&RawValue>) -> Result<f64, Violation> {
    let value = match raw {
        None => return Err(Violation::Missing),
        Some(RawValue::Unsupported) => return Err(Violation::NotANumber),
        Some(RawValue::Number(number)) => *number,
        Some(RawValue::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Err(Violation::Missing);
            }
            trimmed
                .parse::<f64>()
                .map_err(|_| Violation::NotANumber)?
        }
    };

    if value.is_finite() {
        Ok(value)
    } else {
        Err(Violation::NotANumber)
    }
}

fn check(raw: Option<&RawValue>, constraint: Constraint) -> Result<f64, Violation> {
    let value = coerce_number(raw)?;
    match constraint {
        Constraint::Integer { min, max } => {
            if value.fract() != 0.0 {
                return Err(Violation::NotAnInteger);
            }
            if value < f64::from(min) || value > f64::from(max) {
                return Err(Violation::OutOfRange);
            }
            Ok(value)
        }
        Constraint::Amount => {
            if value < 0.0 {
                Err(Violation::Negative)
            } else {
                Ok(value)
            }
        }
    }
}

/// Validates a submitted form. Each field is checked on its own; the result is either a
/// complete [`BillInput`] or one error per failing field.
pub fn validate(form: &RawBillForm) -> Result<BillInput, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    let mut values = [0.0_f64; 7];

    for (slot, rule) in values.iter_mut().zip(RULES.iter()) {
        match check(form.get(rule.field), rule.constraint) {
            Ok(value) => *slot = value,
            Err(violation) => errors.push(rule.field, violation),
        }
    }

    if !errors.is_empty() {
        debug!(rejected = ?errors.fields(), "bill form rejected");
        return Err(errors);
    }

    let [person, days, rent, water_bill, energy_bill, internet_bill, others] = values;

    // Integral and within 1..=30 / 1..=4 by now.
    Ok(BillInput::new(
        days as u8,
        person as u8,
        rent,
        water_bill,
        energy_bill,
        internet_bill,
        others,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_counts_as_missing() {
        assert_eq!(
            coerce_number(Some(&RawValue::Text("   ".to_string()))),
            Err(Violation::Missing)
        );
        assert_eq!(coerce_number(None), Err(Violation::Missing));
    }

    #[test]
    fn non_finite_text_is_not_a_number() {
        for raw in ["NaN", "inf", "-infinity", "1e400"] {
            assert_eq!(
                coerce_number(Some(&RawValue::Text(raw.to_string()))),
                Err(Violation::NotANumber),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn integer_rule_checks_integrality_before_range() {
        let rule = Constraint::Integer { min: 1, max: 4 };
        assert_eq!(check(Some(&RawValue::Number(0.5)), rule), Err(Violation::NotAnInteger));
        assert_eq!(check(Some(&RawValue::Number(5.0)), rule), Err(Violation::OutOfRange));
        assert_eq!(check(Some(&RawValue::Text("4.0".into())), rule), Ok(4.0));
    }

    #[test]
    fn amount_messages_name_the_expense() {
        assert_eq!(
            Violation::Negative.message(BillField::WaterBill),
            "O valor da conta de água não pode ser negativo"
        );
        assert_eq!(
            Violation::Missing.message(BillField::Others),
            "Informe o valor dos outros gastos"
        );
    }
}
