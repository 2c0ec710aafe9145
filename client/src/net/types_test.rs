use super::*;

fn sample() -> Registration {
    Registration {
        first_name: "Amani".to_owned(),
        surname: "Mollel".to_owned(),
        racing_team_name: "Kilimanjaro Kings".to_owned(),
        date_of_birth: "1994-03-12".to_owned(),
        nationality: "Tanzanian".to_owned(),
        id_number: "19940312-12345-00001-22".to_owned(),
        address: "Plot 12, Msasani, Dar es Salaam".to_owned(),
        mobile: "+255712000111".to_owned(),
        email: "amani@example.com".to_owned(),
        driving_license: "DL-4000123".to_owned(),
        dl_expiry_date: "2027-01-31".to_owned(),
        car_make: "Subaru".to_owned(),
        car_model: "Impreza WRX".to_owned(),
        manufacture_year: "2008".to_owned(),
        registration_no: "T 123 ABC".to_owned(),
        engine_cc: "2457".to_owned(),
        estimated_hp: "300".to_owned(),
        color: "Blue".to_owned(),
        braking_system: "ABS disc".to_owned(),
    }
}

#[test]
fn registration_serializes_with_backend_keys() {
    let json = serde_json::to_value(sample()).unwrap();
    let obj = json.as_object().unwrap();
    assert_eq!(obj.len(), 19);
    for field in FieldName::ALL {
        assert!(obj.contains_key(field.key()), "missing key {}", field.key());
    }
    assert_eq!(obj["engineCC"], "2457");
    assert_eq!(obj["estimatedHP"], "300");
    assert_eq!(obj["dlExpiryDate"], "2027-01-31");
}

#[test]
fn empty_registration_has_every_field_blank() {
    for field in FieldName::ALL {
        assert_eq!(EMPTY_REGISTRATION.get(field), "");
    }
    assert_eq!(EMPTY_REGISTRATION, Registration::default());
}

#[test]
fn set_then_get_touches_only_the_named_field() {
    let mut reg = EMPTY_REGISTRATION;
    reg.set(FieldName::CarMake, "Toyota".to_owned());
    assert_eq!(reg.get(FieldName::CarMake), "Toyota");
    assert_eq!(reg.car_make, "Toyota");
    for field in FieldName::ALL.into_iter().filter(|f| *f != FieldName::CarMake) {
        assert_eq!(reg.get(field), "");
    }
}

#[test]
fn field_keys_are_unique() {
    let mut keys: Vec<_> = FieldName::ALL.iter().map(|f| f.key()).collect();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), FieldName::ALL.len());
}

#[test]
fn record_decodes_numbers_nulls_and_missing_fields() {
    let raw = r#"{
        "_id": "65a1f0",
        "firstName": "Neema",
        "surname": null,
        "manufactureYear": 2015,
        "engineCC": 1998,
        "estimatedHP": 240.5,
        "registrationDate": "2024-11-02T09:15:00.000Z"
    }"#;
    let record: RegistrationRecord = serde_json::from_str(raw).unwrap();
    assert_eq!(record.entry.first_name, "Neema");
    assert_eq!(record.entry.surname, "");
    assert_eq!(record.entry.manufacture_year, "2015");
    assert_eq!(record.entry.engine_cc, "1998");
    assert_eq!(record.entry.estimated_hp, "240.5");
    assert_eq!(record.entry.email, "");
    assert_eq!(record.registration_date, "2024-11-02T09:15:00.000Z");
}

#[test]
fn record_decodes_full_entry() {
    let mut value = serde_json::to_value(sample()).unwrap();
    value["registrationDate"] = serde_json::json!("2024-10-01T12:00:00Z");
    let record: RegistrationRecord = serde_json::from_value(value).unwrap();
    assert_eq!(record.entry, sample());
    assert_eq!(record.registration_date, "2024-10-01T12:00:00Z");
}
