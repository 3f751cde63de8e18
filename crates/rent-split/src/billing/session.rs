use super::calculator::split;
use super::domain::{BillField, BillInput, BillResult, RawBillForm, RawValue};
use super::validation::{validate, ValidationErrors};

/// An accepted submission: what was validated and what it split into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Submission {
    pub input: BillInput,
    pub result: BillResult,
}

/// Holds the form being edited and the last result shown for it.
///
/// A failed submission leaves the previous result in place, so whatever was on screen stays there
/// until a valid submission replaces it.
#[derive(Debug, Clone, Default)]
pub struct BillSplitSession {
    form: RawBillForm,
    last: Option<Submission>,
}

impl BillSplitSession {
    pub fn new(form: RawBillForm) -> Self {
        Self {
            form,
            last: None,
        }
    }

    pub fn seeded() -> Self {
        Self::new(RawBillForm::seeded())
    }

    pub fn form(&self) -> &RawBillForm {
        &self.form
    }

    pub fn last_result(&self) -> Option<&BillResult> {
        self.last.as_ref().map(|submission| &submission.result)
    }

    pub fn last_submission(&self) -> Option<&Submission> {
        self.last.as_ref()
    }

    pub fn set(&mut self, field: BillField, value: impl Into<RawValue>) {
        self.form.insert(field, value);
    }

    pub fn clear(&mut self, field: BillField) {
        self.form.remove(field);
    }

    pub fn submit(&mut self) -> Result<Submission, ValidationErrors> {
        let input = validate(&self.form)?;
        let submission = Submission {
            input,
            result: split(&input),
        };
        self.last = Some(submission);
        Ok(submission)
    }
}
