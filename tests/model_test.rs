//! Shape validation and status translation.

use hwbot::error::Error;
use hwbot::model::{Status, check_response, parse_status};
use serde_json::json;

// ---------------------------------------------------------------------------
// check_response
// ---------------------------------------------------------------------------

#[test]
fn check_response_accepts_homework_list() {
    let response = json!({
        "homeworks": [{"homework_name": "hw1", "status": "approved"}],
        "current_date": 2000
    });

    let homeworks = check_response(&response).unwrap();
    assert_eq!(homeworks.len(), 1);
}

#[test]
fn check_response_accepts_empty_list() {
    let response = json!({"homeworks": [], "current_date": 2000});
    assert!(check_response(&response).unwrap().is_empty());
}

#[test]
fn check_response_rejects_non_object_top_level() {
    for bad in [json!([1, 2]), json!("text"), json!(42), json!(null)] {
        match check_response(&bad) {
            Err(Error::Shape { expected, .. }) => assert_eq!(expected, "object"),
            other => panic!("expected shape error, got {other:?}"),
        }
    }
}

#[test]
fn check_response_rejects_missing_homeworks_field() {
    let response = json!({"current_date": 2000});
    assert!(matches!(
        check_response(&response),
        Err(Error::Shape { .. })
    ));
}

#[test]
fn check_response_rejects_non_list_homeworks() {
    let response = json!({"homeworks": {"homework_name": "hw1"}});
    match check_response(&response) {
        Err(Error::Shape { actual, .. }) => assert_eq!(actual, "object"),
        other => panic!("expected shape error, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// parse_status
// ---------------------------------------------------------------------------

#[test]
fn parse_status_formats_approved_verdict() {
    let homework = json!({"homework_name": "hw1", "status": "approved"});
    assert_eq!(
        parse_status(&homework).unwrap(),
        "Изменился статус проверки работы \"hw1\". \
         Работа проверена: ревьюеру всё понравилось. Ура!"
    );
}

#[test]
fn parse_status_covers_all_verdicts() {
    for (status, verdict) in [
        ("approved", "Работа проверена: ревьюеру всё понравилось. Ура!"),
        ("reviewing", "Работа взята на проверку ревьюером."),
        ("rejected", "Работа проверена: у ревьюера есть замечания."),
    ] {
        let homework = json!({"homework_name": "hw", "status": status});
        let message = parse_status(&homework).unwrap();
        assert!(message.ends_with(verdict), "bad message: {message}");
    }
}

#[test]
fn parse_status_requires_both_fields() {
    let no_status = json!({"homework_name": "hw1"});
    assert!(matches!(
        parse_status(&no_status),
        Err(Error::MissingData("status"))
    ));

    let no_name = json!({"status": "approved"});
    assert!(matches!(
        parse_status(&no_name),
        Err(Error::MissingData("homework_name"))
    ));
}

#[test]
fn parse_status_rejects_unknown_status() {
    let homework = json!({"homework_name": "hw1", "status": "pending"});
    match parse_status(&homework) {
        Err(Error::UnknownStatus(s)) => assert_eq!(s, "pending"),
        other => panic!("expected unknown status error, got {other:?}"),
    }
}

#[test]
fn status_parses_from_known_strings() {
    assert_eq!("approved".parse::<Status>().unwrap(), Status::Approved);
    assert_eq!("reviewing".parse::<Status>().unwrap(), Status::Reviewing);
    assert_eq!("rejected".parse::<Status>().unwrap(), Status::Rejected);
    assert!("APPROVED".parse::<Status>().is_err());
}
