use super::*;

#[test]
fn check_status_accepts_whole_2xx_range() {
    assert_eq!(check_status(200), Ok(()));
    assert_eq!(check_status(201), Ok(()));
    assert_eq!(check_status(299), Ok(()));
}

#[test]
fn check_status_rejects_everything_else() {
    assert_eq!(check_status(199), Err(ApiError::Status(199)));
    assert_eq!(check_status(304), Err(ApiError::Status(304)));
    assert_eq!(check_status(422), Err(ApiError::Status(422)));
    assert_eq!(check_status(503), Err(ApiError::Status(503)));
}

#[test]
fn decode_registrations_accepts_empty_array() {
    assert_eq!(decode_registrations("[]"), Ok(Vec::new()));
}

#[test]
fn decode_registrations_reads_records_in_order() {
    let body = r#"[
        {"firstName":"A","surname":"One","registrationDate":"2024-01-01T00:00:00Z"},
        {"firstName":"B","surname":"Two","registrationDate":"2024-01-02T00:00:00Z"}
    ]"#;
    let records = decode_registrations(body).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].entry.first_name, "A");
    assert_eq!(records[1].entry.surname, "Two");
}

#[test]
fn decode_registrations_rejects_invalid_json() {
    assert!(matches!(decode_registrations("<html>502</html>"), Err(ApiError::Decode(_))));
}

#[test]
fn decode_registrations_rejects_non_array() {
    assert!(matches!(
        decode_registrations(r#"{"error":"database offline"}"#),
        Err(ApiError::Decode(_))
    ));
}

#[test]
fn error_messages_are_descriptive() {
    assert_eq!(ApiError::Status(500).to_string(), "unexpected status: 500");
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}

#[test]
fn submit_request_posts_json_to_register_endpoint() {
    let config = ApiConfig::new("http://localhost:4000/");
    let mut registration = Registration::default();
    registration.first_name = "Amani".to_owned();
    registration.engine_cc = "1998".to_owned();

    let req = build_submit_request(&config, &registration).unwrap();
    assert_eq!(req.method, "POST");
    assert_eq!(req.url, "http://localhost:4000/api/register");
    assert_eq!(req.content_type, "application/json");

    let body: serde_json::Value = serde_json::from_str(&req.body).unwrap();
    assert_eq!(body["firstName"], "Amani");
    assert_eq!(body["engineCC"], "1998");
    assert_eq!(body.as_object().map(serde_json::Map::len), Some(19));
}

#[cfg(not(feature = "hydrate"))]
#[tokio::test]
async fn calls_are_unavailable_off_browser() {
    let config = ApiConfig::default();
    let submit = submit_registration(&config, &Registration::default()).await;
    assert_eq!(submit, Err(ApiError::Unavailable));
    let fetch = fetch_registrations(&config).await;
    assert_eq!(fetch, Err(ApiError::Unavailable));
}
