use super::common::*;
use crate::billing::domain::BillField;
use crate::billing::session::BillSplitSession;

#[test]
fn seeded_session_starts_without_result() {
    let session = BillSplitSession::seeded();

    assert!(session.last_result().is_none());
    assert!(session.form().get(BillField::Person).is_some());
}

#[test]
fn successful_submit_replaces_result() {
    let mut session = BillSplitSession::new(shared_flat_form());

    let first = session.submit().expect("first submit");
    session.set(BillField::Person, 1u32);
    let second = session.submit().expect("second submit");

    assert_ne!(first.result, second.result);
    assert_eq!(second.input.person(), 1);
    assert_eq!(session.last_result(), Some(&second.result));
    assert_eq!(session.last_submission(), Some(&second));
}

#[test]
fn failed_submit_keeps_previous_result() {
    let mut session = BillSplitSession::new(shared_flat_form());
    let shown = session.submit().expect("valid submit");

    session.set(BillField::Days, "31");
    session.clear(BillField::Rent);
    let errors = session.submit().expect_err("invalid submit");

    assert_eq!(errors.fields(), vec![BillField::Days, BillField::Rent]);
    assert_eq!(session.last_result(), Some(&shown.result));
}
