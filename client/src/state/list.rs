//! Registration list state for the entries page.
//!
//! The page fetches once on mount. Failures are logged and leave the list
//! empty; the user sees the same empty state as a genuinely empty backend.

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

use crate::net::api::ApiError;
use crate::net::types::RegistrationRecord;
use crate::util::export::{EXPORT_COLUMN_COUNT, export_row};

pub const EMPTY_LIST_MESSAGE: &str = "No registrations found";

/// Visible summary of one registration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryRow {
    pub name: String,
    pub team: String,
    pub nationality: String,
    pub car: String,
    pub engine: String,
    pub contact: String,
    /// Odd rows get the shaded background.
    pub shaded: bool,
}

impl SummaryRow {
    fn from_record(index: usize, record: &RegistrationRecord) -> Self {
        let r = &record.entry;
        Self {
            name: format!("{} {}", r.first_name, r.surname),
            team: r.racing_team_name.clone(),
            nationality: r.nationality.clone(),
            car: format!("{} {}", r.car_make, r.car_model),
            engine: format!("{}cc / {}HP", r.engine_cc, r.estimated_hp),
            contact: r.email.clone(),
            shaded: index % 2 == 1,
        }
    }

    pub fn class_name(&self) -> &'static str {
        if self.shaded { "registrations__row registrations__row--shaded" } else { "registrations__row" }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListState {
    pub items: Vec<RegistrationRecord>,
    pub loading: bool,
}

impl Default for ListState {
    fn default() -> Self {
        Self { items: Vec::new(), loading: true }
    }
}

impl ListState {
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    pub fn finish_load(&mut self, result: Result<Vec<RegistrationRecord>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => self.items = items,
            Err(e) => {
                log::error!("Error fetching registrations: {e}");
                self.items.clear();
            }
        }
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    /// Loading finished and nothing to show.
    pub fn is_empty_result(&self) -> bool {
        !self.loading && self.items.is_empty()
    }

    pub fn summary_rows(&self) -> Vec<SummaryRow> {
        self.items.iter().enumerate().map(|(i, r)| SummaryRow::from_record(i, r)).collect()
    }

    /// Full-field rows backing the hidden export table.
    pub fn export_rows(&self) -> Vec<[String; EXPORT_COLUMN_COUNT]> {
        self.items.iter().map(export_row).collect()
    }
}
