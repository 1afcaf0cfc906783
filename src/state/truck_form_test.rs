use futures::executor::block_on;

use super::*;
use crate::net::error::FailureBody;
use crate::net::fake_api::FakeApi;
use crate::state::form::FIX_FORM_ERRORS;
use crate::state::toast::ToastKind;

// =============================================================
// Helpers
// =============================================================

fn existing_truck() -> Truck {
    Truck {
        id: Some(17),
        driver_id: Some(4),
        name: "Tanker B".to_owned(),
        description: Some("Night shift".to_owned()),
        truck_number: "TN-02".to_owned(),
        quantity: Some(33000.0),
        compartment: Some(4.0),
        calibrate_one: Some(12.5),
        calibrate_two: Some(0.0),
        calibrate_three: None,
        status: TruckStatus::Maintenance,
        movement_status: MovementStatus::Delivered,
    }
}

fn tanker_a() -> TruckFormState {
    let mut form = TruckFormState::new(None);
    form.set_field(TruckField::Name, "Tanker A".to_owned());
    form.set_field(TruckField::TruckNumber, "TN-01".to_owned());
    form.set_field(TruckField::Quantity, "500".to_owned());
    form.set_field(TruckField::Compartment, "3".to_owned());
    form
}

fn driver(id: i64, first: &str) -> Driver {
    serde_json::from_value(serde_json::json!({ "id": id, "first_name": first, "last_name": "Test" })).unwrap()
}

// =============================================================
// DriverChoice
// =============================================================

#[test]
fn unassigned_round_trips_through_control_value() {
    assert_eq!(DriverChoice::Unassigned.control_value(), UNASSIGNED);
    assert_eq!(DriverChoice::from_control_value(UNASSIGNED), Some(DriverChoice::Unassigned));
    assert_eq!(DriverChoice::Unassigned.driver_id(), None);
}

#[test]
fn concrete_driver_round_trips_through_control_value() {
    let choice = DriverChoice::Driver(42);
    assert_eq!(choice.control_value(), "42");
    assert_eq!(DriverChoice::from_control_value("42"), Some(choice));
    assert_eq!(choice.driver_id(), Some(42));
}

#[test]
fn garbage_control_value_is_rejected() {
    assert_eq!(DriverChoice::from_control_value(""), None);
    assert_eq!(DriverChoice::from_control_value("Unassigned"), None);
    assert_eq!(DriverChoice::from_control_value("4x"), None);
}

#[test]
fn set_driver_control_ignores_unknown_values() {
    let mut form = TruckFormState::new(None);
    form.set_driver_control("9");
    assert_eq!(form.driver, DriverChoice::Driver(9));
    form.set_driver_control("bogus");
    assert_eq!(form.driver, DriverChoice::Driver(9));
    form.set_driver_control(UNASSIGNED);
    assert_eq!(form.driver, DriverChoice::Unassigned);
}

// =============================================================
// Initialization
// =============================================================

#[test]
fn create_mode_starts_with_defaults() {
    let form = TruckFormState::new(None);
    assert_eq!(form.mode, TruckMode::Create);
    assert_eq!(form.driver, DriverChoice::Unassigned);
    assert_eq!(form.name, "");
    assert_eq!(form.truck_number, "");
    assert_eq!(form.description, "");
    for field in TruckField::NUMERIC {
        assert_eq!(form.value(field), "0", "{field:?}");
    }
    assert_eq!(form.status, TruckStatus::Pending);
    assert_eq!(form.movement_status, MovementStatus::Pending);
    assert!(!form.submitting);
    assert!(form.errors.is_empty());
}

#[test]
fn edit_mode_seeds_every_field_from_record() {
    let truck = existing_truck();
    let form = TruckFormState::new(Some(&truck));
    assert_eq!(form.mode, TruckMode::Edit { id: 17 });
    assert_eq!(form.driver, DriverChoice::Driver(4));
    assert_eq!(form.name, "Tanker B");
    assert_eq!(form.truck_number, "TN-02");
    assert_eq!(form.description, "Night shift");
    assert_eq!(form.quantity, "33000");
    assert_eq!(form.compartment, "4");
    assert_eq!(form.calibrate_one, "12.5");
    assert_eq!(form.calibrate_two, "0");
    assert_eq!(form.calibrate_three, "0");
    assert_eq!(form.status, TruckStatus::Maintenance);
    assert_eq!(form.movement_status, MovementStatus::Delivered);
}

#[test]
fn record_without_driver_seeds_unassigned() {
    let truck = Truck { driver_id: None, ..existing_truck() };
    let form = TruckFormState::new(Some(&truck));
    assert_eq!(form.driver, DriverChoice::Unassigned);
    assert_eq!(form.driver.control_value(), UNASSIGNED);
}

// =============================================================
// Validation
// =============================================================

#[test]
fn name_and_number_are_required() {
    let errors = TruckFormState::new(None).validate();
    assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["name", "truck_number"]);
}

#[test]
fn negative_or_non_numeric_values_flag_their_field() {
    for field in TruckField::NUMERIC {
        for bad in ["-1", "abc", ""] {
            let mut form = tanker_a();
            form.set_field(field, bad.to_owned());
            let errors = form.validate();
            assert_eq!(errors.get(field.key()), Some(INVALID_NUMBER), "{field:?} = {bad:?}");
            assert_eq!(errors.len(), 1);
        }
    }
}

#[test]
fn zero_and_positive_values_pass() {
    for field in TruckField::NUMERIC {
        for good in ["0", "7", "3.25"] {
            let mut form = tanker_a();
            form.set_field(field, good.to_owned());
            assert!(form.validate().is_empty(), "{field:?} = {good:?}");
        }
    }
}

// =============================================================
// Payload
// =============================================================

#[test]
fn unassigned_driver_becomes_null_in_payload() {
    let payload = tanker_a().payload().unwrap();
    assert_eq!(payload.driver_id, None);
    let json = serde_json::to_value(&payload).unwrap();
    assert!(json["driver_id"].is_null());
    assert_ne!(json["driver_id"], serde_json::json!(UNASSIGNED));
}

#[test]
fn selected_driver_becomes_numeric_id_in_payload() {
    let mut form = tanker_a();
    form.set_driver_control("12");
    let json = serde_json::to_value(form.payload().unwrap()).unwrap();
    assert_eq!(json["driver_id"], serde_json::json!(12));
}

#[test]
fn payload_is_none_for_unparseable_numbers() {
    let mut form = tanker_a();
    form.set_field(TruckField::CalibrateTwo, "x".to_owned());
    assert!(form.payload().is_none());
}

// =============================================================
// Submission
// =============================================================

#[test]
fn create_mode_submission_posts_numeric_payload() {
    let api = FakeApi::default();
    let mut form = tanker_a();
    let mut fired = 0;
    let outcome = block_on(form.submit(&api, || fired += 1)).unwrap();

    assert_eq!(fired, 1);
    assert_eq!(outcome.notice, Notice::success("Truck created successfully"));
    let requests = api.truck_requests.borrow();
    assert_eq!(requests.len(), 1);
    let (mode, payload) = &requests[0];
    assert_eq!(*mode, TruckMode::Create);
    assert_eq!(mode.method(), crate::net::api::HttpMethod::Post);
    assert_eq!(payload.driver_id, None);
    let json = serde_json::to_value(payload).unwrap();
    for key in ["quantity", "compartment", "calibrate_one", "calibrate_two", "calibrate_three"] {
        assert!(json[key].is_number(), "{key} should be a number");
    }
    assert_eq!(payload.quantity, 500.0);
    assert_eq!(payload.compartment, 3.0);
    assert!(!form.submitting);
}

#[test]
fn edit_mode_submission_updates_by_id() {
    let api = FakeApi::default();
    let truck = existing_truck();
    let mut form = TruckFormState::new(Some(&truck));
    let outcome = block_on(form.submit(&api, || {})).unwrap();

    assert_eq!(outcome.notice.message, "Truck updated successfully");
    let requests = api.truck_requests.borrow();
    assert_eq!(requests[0].0, TruckMode::Edit { id: 17 });
    assert_eq!(requests[0].0.path(), "/transporters/trucks/17");
    assert_eq!(requests[0].1.driver_id, Some(4));
}

#[test]
fn invalid_truck_never_reaches_network() {
    let api = FakeApi::default();
    let mut form = TruckFormState::new(None);
    let mut fired = 0;
    assert_eq!(block_on(form.submit(&api, || fired += 1)), None);
    assert_eq!(api.request_count(), 0);
    assert_eq!(fired, 0);
}

#[test]
fn backend_field_error_attaches_to_truck_number() {
    let api = FakeApi {
        save_truck: Err(ApiError::Status {
            status: 422,
            failure: FailureBody {
                message: Some("The given data was invalid.".to_owned()),
                field_errors: Some([("truck_number".to_owned(), "already taken".to_owned())].into_iter().collect()),
            },
        }),
        ..FakeApi::default()
    };
    let mut form = tanker_a();
    let mut fired = 0;
    let outcome = block_on(form.submit(&api, || fired += 1)).unwrap();

    assert_eq!(form.errors.get("truck_number"), Some("already taken"));
    assert!(!form.submitting);
    assert_eq!(fired, 0);
    assert_eq!(outcome.notice.message, FIX_FORM_ERRORS);
    assert_eq!(outcome.notice.kind, ToastKind::Error);
}

#[test]
fn generic_failure_uses_server_message_or_fallback() {
    let mut form = tanker_a();
    form.begin_submit().unwrap();
    let outcome = form.finish_submit(Err(ApiError::Status {
        status: 500,
        failure: FailureBody { message: Some("Database unavailable".to_owned()), field_errors: None },
    }));
    assert_eq!(outcome.notice.message, "Database unavailable");

    form.begin_submit().unwrap();
    let outcome = form.finish_submit(Err(ApiError::Transport("offline".to_owned())));
    assert_eq!(outcome.notice.message, TRUCK_SAVE_FAILED);
    assert!(form.errors.is_empty());
}

#[test]
fn editing_field_after_server_error_clears_it() {
    let mut form = tanker_a();
    form.begin_submit().unwrap();
    form.finish_submit(Err(ApiError::Status {
        status: 422,
        failure: FailureBody {
            message: None,
            field_errors: Some([("truck_number".to_owned(), "already taken".to_owned())].into_iter().collect()),
        },
    }));
    form.set_field(TruckField::TruckNumber, "TN-99".to_owned());
    assert!(form.errors.is_empty());
}

// =============================================================
// Driver list
// =============================================================

#[test]
fn driver_list_loads_into_options() {
    let api = FakeApi { drivers: Ok(vec![driver(1, "Amaka"), driver(2, "Tunde")]), ..FakeApi::default() };
    let mut form = TruckFormState::new(None);
    assert_eq!(block_on(form.load_drivers(&api)), None);
    assert_eq!(form.drivers.len(), 2);
}

#[test]
fn driver_list_failure_notifies_and_leaves_form_usable() {
    let api = FakeApi { drivers: Err(ApiError::Transport("offline".to_owned())), ..FakeApi::default() };
    let mut form = tanker_a();
    let notice = block_on(form.load_drivers(&api));
    assert_eq!(notice, Some(Notice::error(DRIVERS_LOAD_FAILED)));
    assert!(form.drivers.is_empty());
    assert!(form.begin_submit().is_some());
}

// =============================================================
// Responses after unmount
// =============================================================

#[test]
fn detached_outcome_keeps_edit_mode_message() {
    let mode = TruckMode::Edit { id: 17 };
    let outcome = TruckFormState::detached_outcome(mode, Ok(()));
    assert!(outcome.succeeded);
    assert_eq!(outcome.notice.message, "Truck updated successfully");

    let mut live = TruckFormState::new(Some(&existing_truck()));
    live.begin_submit().unwrap();
    assert_eq!(outcome, live.finish_submit(Ok(())));
}

#[test]
fn detached_outcome_reports_failures_without_a_form() {
    let err = ApiError::Status {
        status: 422,
        failure: FailureBody { message: Some("Truck number already taken".to_owned()), field_errors: None },
    };
    let outcome = TruckFormState::detached_outcome(TruckMode::Create, Err(err));
    assert!(!outcome.succeeded);
    assert_eq!(outcome.notice.kind, ToastKind::Error);
    assert_eq!(outcome.notice.message, "Truck number already taken");
}
