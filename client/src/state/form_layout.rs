//! Declarative layout of the registration form.
//!
//! Every input is described by a `FieldSpec` and grouped into titled
//! sections; the form page renders them all through one `FormField`
//! component.

#[cfg(test)]
#[path = "form_layout_test.rs"]
mod form_layout_test;

use crate::net::types::FieldName;

/// Native input type; the browser supplies the only validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputType {
    Text,
    Date,
    Email,
    Tel,
    Number,
}

impl InputType {
    pub fn as_str(self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Date => "date",
            InputType::Email => "email",
            InputType::Tel => "tel",
            InputType::Number => "number",
        }
    }
}

/// Decorative glyph shown inside the input's left edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldIcon {
    User,
    Calendar,
    Mail,
    Phone,
    Key,
    Car,
}

impl FieldIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            FieldIcon::User => "👤",
            FieldIcon::Calendar => "📅",
            FieldIcon::Mail => "✉",
            FieldIcon::Phone => "☎",
            FieldIcon::Key => "🔑",
            FieldIcon::Car => "🚗",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: FieldName,
    pub label: &'static str,
    pub input_type: InputType,
    pub placeholder: Option<&'static str>,
    pub icon: Option<FieldIcon>,
    /// Span both grid columns.
    pub full_width: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormSection {
    pub title: &'static str,
    pub fields: &'static [FieldSpec],
}

const fn input(
    field: FieldName,
    label: &'static str,
    input_type: InputType,
    placeholder: Option<&'static str>,
    icon: Option<FieldIcon>,
) -> FieldSpec {
    FieldSpec { field, label, input_type, placeholder, icon, full_width: false }
}

const PERSONAL: &[FieldSpec] = &[
    input(FieldName::FirstName, "First Name", InputType::Text, Some("Enter your first name"), Some(FieldIcon::User)),
    input(FieldName::Surname, "Surname", InputType::Text, Some("Enter your surname"), Some(FieldIcon::User)),
    input(FieldName::RacingTeamName, "Racing Team Name", InputType::Text, Some("Enter your team name"), None),
    input(FieldName::DateOfBirth, "Date of Birth", InputType::Date, None, Some(FieldIcon::Calendar)),
];

const CONTACT: &[FieldSpec] = &[
    input(FieldName::Nationality, "Nationality", InputType::Text, Some("Enter your nationality"), None),
    input(FieldName::IdNumber, "ID No. (Passport/NIDA)", InputType::Text, Some("Enter your ID number"), Some(FieldIcon::Key)),
    input(FieldName::Email, "Email Address", InputType::Email, Some("Enter your email address"), Some(FieldIcon::Mail)),
    input(FieldName::Mobile, "Mobile", InputType::Tel, Some("Enter your mobile number"), Some(FieldIcon::Phone)),
    FieldSpec {
        field: FieldName::Address,
        label: "Address",
        input_type: InputType::Text,
        placeholder: Some("Enter your full address"),
        icon: None,
        full_width: true,
    },
];

const LICENSE: &[FieldSpec] = &[
    input(FieldName::DrivingLicense, "Driving License Number", InputType::Text, Some("Enter your license number"), Some(FieldIcon::Key)),
    input(FieldName::DlExpiryDate, "License Expiry Date", InputType::Date, None, Some(FieldIcon::Calendar)),
];

const VEHICLE: &[FieldSpec] = &[
    input(FieldName::CarMake, "Make", InputType::Text, Some("Enter vehicle make"), Some(FieldIcon::Car)),
    input(FieldName::CarModel, "Model", InputType::Text, Some("Enter vehicle model"), Some(FieldIcon::Car)),
    input(FieldName::ManufactureYear, "Year of Manufacture", InputType::Number, Some("Enter manufacture year"), None),
    input(FieldName::RegistrationNo, "Registration No.", InputType::Text, Some("Enter registration number"), None),
    input(FieldName::EngineCc, "Engine CC", InputType::Text, Some("Enter engine capacity"), None),
    input(FieldName::EstimatedHp, "Estimated Horse Power", InputType::Text, Some("Enter estimated HP"), None),
    input(FieldName::Color, "Predominant Color", InputType::Text, Some("Enter vehicle color"), None),
    input(FieldName::BrakingSystem, "Breaking System Type", InputType::Text, Some("Enter braking system type"), Some(FieldIcon::Car)),
];

pub const FORM_SECTIONS: &[FormSection] = &[
    FormSection { title: "Personal Information", fields: PERSONAL },
    FormSection { title: "Contact & Identification", fields: CONTACT },
    FormSection { title: "Driving License Information", fields: LICENSE },
    FormSection { title: "Vehicle Information", fields: VEHICLE },
];
