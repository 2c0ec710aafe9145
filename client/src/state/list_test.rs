use super::*;
use crate::net::types::Registration;

fn record(first: &str, team: &str) -> RegistrationRecord {
    RegistrationRecord {
        entry: Registration {
            first_name: first.to_owned(),
            surname: "Driver".to_owned(),
            racing_team_name: team.to_owned(),
            nationality: "Tanzanian".to_owned(),
            email: format!("{}@example.com", first.to_lowercase()),
            car_make: "Nissan".to_owned(),
            car_model: "Skyline".to_owned(),
            engine_cc: "2600".to_owned(),
            estimated_hp: "280".to_owned(),
            date_of_birth: "1990-01-05".to_owned(),
            ..Registration::default()
        },
        registration_date: "2024-08-20T10:00:00Z".to_owned(),
    }
}

#[test]
fn starts_loading_with_no_items() {
    let state = ListState::default();
    assert!(state.loading);
    assert!(state.items.is_empty());
    assert!(!state.is_empty_result());
}

#[test]
fn empty_backend_shows_empty_message_after_load() {
    let mut state = ListState::default();
    state.finish_load(Ok(Vec::new()));
    assert!(!state.loading);
    assert!(state.is_empty_result());
    assert_eq!(state.total(), 0);
}

#[test]
fn n_records_render_n_rows_with_alternating_shading() {
    let mut state = ListState::default();
    state.finish_load(Ok(vec![record("Asha", "A"), record("Baraka", "B"), record("Cheta", "C")]));
    let rows = state.summary_rows();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows.iter().map(|r| r.shaded).collect::<Vec<_>>(), [false, true, false]);
    assert_eq!(rows[0].class_name(), "registrations__row");
    assert_eq!(rows[1].class_name(), "registrations__row registrations__row--shaded");
    assert!(!state.is_empty_result());
}

#[test]
fn summary_row_concatenates_columns() {
    let mut state = ListState::default();
    state.finish_load(Ok(vec![record("Asha", "Speed Queens")]));
    let row = &state.summary_rows()[0];
    assert_eq!(row.name, "Asha Driver");
    assert_eq!(row.team, "Speed Queens");
    assert_eq!(row.nationality, "Tanzanian");
    assert_eq!(row.car, "Nissan Skyline");
    assert_eq!(row.engine, "2600cc / 280HP");
    assert_eq!(row.contact, "asha@example.com");
}

#[test]
fn export_rows_cover_every_record_and_field() {
    let mut state = ListState::default();
    state.finish_load(Ok(vec![record("Asha", "A"), record("Baraka", "B")]));
    let rows = state.export_rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][0], "8/20/2024");
    assert_eq!(rows[1][1], "Baraka");
    assert_eq!(rows[1][4], "1/5/1990");
    assert!(rows.iter().all(|r| r.len() == EXPORT_COLUMN_COUNT));
}

#[test]
fn failures_leave_list_empty_and_stop_loading() {
    for err in [
        ApiError::Transport("offline".to_owned()),
        ApiError::Status(500),
        ApiError::Decode("expected array".to_owned()),
    ] {
        let mut state = ListState::default();
        state.finish_load(Err(err));
        assert!(!state.loading);
        assert!(state.items.is_empty());
        assert!(state.is_empty_result());
    }
}

#[test]
fn begin_load_marks_loading_again() {
    let mut state = ListState::default();
    state.finish_load(Ok(vec![record("Asha", "A")]));
    state.begin_load();
    assert!(state.loading);
    assert_eq!(state.total(), 1);
}
