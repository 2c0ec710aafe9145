//! Wire types shared by the registration form and list views.
//!
//! DESIGN
//! ======
//! The backend speaks camelCase JSON. Outgoing registrations are always plain
//! strings; incoming records are decoded leniently because the backend may
//! echo numeric fields (`manufactureYear`, `engineCC`, `estimatedHP`) as
//! numbers, or omit fields it did not store.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// One participant's entry as typed into the form and sent to the backend.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    #[serde(default, deserialize_with = "lenient_string")]
    pub first_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub surname: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub racing_team_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub date_of_birth: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub nationality: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub id_number: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub address: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub mobile: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub driving_license: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub dl_expiry_date: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub car_make: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub car_model: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub manufacture_year: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub registration_no: String,
    #[serde(rename = "engineCC", default, deserialize_with = "lenient_string")]
    pub engine_cc: String,
    #[serde(rename = "estimatedHP", default, deserialize_with = "lenient_string")]
    pub estimated_hp: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub color: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub braking_system: String,
}

/// Blank registration. Initial form state and the post-submit reset value.
pub const EMPTY_REGISTRATION: Registration = Registration {
    first_name: String::new(),
    surname: String::new(),
    racing_team_name: String::new(),
    date_of_birth: String::new(),
    nationality: String::new(),
    id_number: String::new(),
    address: String::new(),
    mobile: String::new(),
    email: String::new(),
    driving_license: String::new(),
    dl_expiry_date: String::new(),
    car_make: String::new(),
    car_model: String::new(),
    manufacture_year: String::new(),
    registration_no: String::new(),
    engine_cc: String::new(),
    estimated_hp: String::new(),
    color: String::new(),
    braking_system: String::new(),
};

/// A registration as returned by the list endpoint, with the server-assigned
/// submission timestamp.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRecord {
    #[serde(flatten)]
    pub entry: Registration,
    #[serde(default, deserialize_with = "lenient_string")]
    pub registration_date: String,
}

/// Addressable registration fields, in form order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldName {
    FirstName,
    Surname,
    RacingTeamName,
    DateOfBirth,
    Nationality,
    IdNumber,
    Address,
    Mobile,
    Email,
    DrivingLicense,
    DlExpiryDate,
    CarMake,
    CarModel,
    ManufactureYear,
    RegistrationNo,
    EngineCc,
    EstimatedHp,
    Color,
    BrakingSystem,
}

impl FieldName {
    pub const ALL: [FieldName; 19] = [
        FieldName::FirstName,
        FieldName::Surname,
        FieldName::RacingTeamName,
        FieldName::DateOfBirth,
        FieldName::Nationality,
        FieldName::IdNumber,
        FieldName::Address,
        FieldName::Mobile,
        FieldName::Email,
        FieldName::DrivingLicense,
        FieldName::DlExpiryDate,
        FieldName::CarMake,
        FieldName::CarModel,
        FieldName::ManufactureYear,
        FieldName::RegistrationNo,
        FieldName::EngineCc,
        FieldName::EstimatedHp,
        FieldName::Color,
        FieldName::BrakingSystem,
    ];

    /// JSON key, also used as the input's `id` and `name`.
    pub fn key(self) -> &'static str {
        match self {
            FieldName::FirstName => "firstName",
            FieldName::Surname => "surname",
            FieldName::RacingTeamName => "racingTeamName",
            FieldName::DateOfBirth => "dateOfBirth",
            FieldName::Nationality => "nationality",
            FieldName::IdNumber => "idNumber",
            FieldName::Address => "address",
            FieldName::Mobile => "mobile",
            FieldName::Email => "email",
            FieldName::DrivingLicense => "drivingLicense",
            FieldName::DlExpiryDate => "dlExpiryDate",
            FieldName::CarMake => "carMake",
            FieldName::CarModel => "carModel",
            FieldName::ManufactureYear => "manufactureYear",
            FieldName::RegistrationNo => "registrationNo",
            FieldName::EngineCc => "engineCC",
            FieldName::EstimatedHp => "estimatedHP",
            FieldName::Color => "color",
            FieldName::BrakingSystem => "brakingSystem",
        }
    }
}

impl Registration {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::FirstName => &self.first_name,
            FieldName::Surname => &self.surname,
            FieldName::RacingTeamName => &self.racing_team_name,
            FieldName::DateOfBirth => &self.date_of_birth,
            FieldName::Nationality => &self.nationality,
            FieldName::IdNumber => &self.id_number,
            FieldName::Address => &self.address,
            FieldName::Mobile => &self.mobile,
            FieldName::Email => &self.email,
            FieldName::DrivingLicense => &self.driving_license,
            FieldName::DlExpiryDate => &self.dl_expiry_date,
            FieldName::CarMake => &self.car_make,
            FieldName::CarModel => &self.car_model,
            FieldName::ManufactureYear => &self.manufacture_year,
            FieldName::RegistrationNo => &self.registration_no,
            FieldName::EngineCc => &self.engine_cc,
            FieldName::EstimatedHp => &self.estimated_hp,
            FieldName::Color => &self.color,
            FieldName::BrakingSystem => &self.braking_system,
        }
    }

    pub fn set(&mut self, field: FieldName, value: String) {
        let slot = match field {
            FieldName::FirstName => &mut self.first_name,
            FieldName::Surname => &mut self.surname,
            FieldName::RacingTeamName => &mut self.racing_team_name,
            FieldName::DateOfBirth => &mut self.date_of_birth,
            FieldName::Nationality => &mut self.nationality,
            FieldName::IdNumber => &mut self.id_number,
            FieldName::Address => &mut self.address,
            FieldName::Mobile => &mut self.mobile,
            FieldName::Email => &mut self.email,
            FieldName::DrivingLicense => &mut self.driving_license,
            FieldName::DlExpiryDate => &mut self.dl_expiry_date,
            FieldName::CarMake => &mut self.car_make,
            FieldName::CarModel => &mut self.car_model,
            FieldName::ManufactureYear => &mut self.manufacture_year,
            FieldName::RegistrationNo => &mut self.registration_no,
            FieldName::EngineCc => &mut self.engine_cc,
            FieldName::EstimatedHp => &mut self.estimated_hp,
            FieldName::Color => &mut self.color,
            FieldName::BrakingSystem => &mut self.braking_system,
        };
        *slot = value;
    }
}

/// Accept a string, number, bool, or null and normalize it to a `String`.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => String::new(),
        Some(serde_json::Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}
