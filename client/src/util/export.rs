//! Spreadsheet export of the full registration table.
//!
//! DESIGN
//! ======
//! The list page renders every field of every record into a hidden table.
//! Export reads that table's markup back from the DOM and wraps it in an
//! Excel-compatible HTML workbook, so the downloaded sheet carries exactly the
//! headers and cells the page rendered.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use crate::net::types::RegistrationRecord;
use crate::util::dates::format_display_date;

pub const EXPORT_FILE_STEM: &str = "DAR_Time_Trials_Registrations";
pub const EXPORT_SHEET_NAME: &str = "Registrations";
pub const EXPORT_COLUMN_COUNT: usize = 20;

#[cfg(any(test, feature = "hydrate"))]
const WORKBOOK_MIME: &str = "application/vnd.ms-excel";

/// Object URLs outlive the click by this long so the browser can start the download.
#[cfg(any(test, feature = "hydrate"))]
const REVOKE_DELAY_MS: u32 = 1_000;

/// Column headers of the hidden export table, in order.
pub const EXPORT_HEADERS: [&str; EXPORT_COLUMN_COUNT] = [
    "Registration Date",
    "First Name",
    "Surname",
    "Racing Team",
    "Date of Birth",
    "Nationality",
    "ID/Passport Number",
    "Address",
    "Mobile",
    "Email",
    "Driving License",
    "License Expiry Date",
    "Car Make",
    "Car Model",
    "Manufacture Year",
    "Registration No.",
    "Engine CC",
    "Estimated HP",
    "Color",
    "Braking System",
];

/// One export row: every field, with the three dates human-formatted.
pub fn export_row(record: &RegistrationRecord) -> [String; EXPORT_COLUMN_COUNT] {
    let r = &record.entry;
    [
        format_display_date(&record.registration_date),
        r.first_name.clone(),
        r.surname.clone(),
        r.racing_team_name.clone(),
        format_display_date(&r.date_of_birth),
        r.nationality.clone(),
        r.id_number.clone(),
        r.address.clone(),
        r.mobile.clone(),
        r.email.clone(),
        r.driving_license.clone(),
        format_display_date(&r.dl_expiry_date),
        r.car_make.clone(),
        r.car_model.clone(),
        r.manufacture_year.clone(),
        r.registration_no.clone(),
        r.engine_cc.clone(),
        r.estimated_hp.clone(),
        r.color.clone(),
        r.braking_system.clone(),
    ]
}

/// Download file name, including the extension Excel expects for HTML workbooks.
pub fn export_file_name() -> String {
    format!("{EXPORT_FILE_STEM}.xls")
}

fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Wrap rendered table markup in a single-worksheet HTML workbook.
pub fn workbook_document(sheet_name: &str, table_html: &str) -> String {
    let sheet = escape_xml(sheet_name);
    format!(
        concat!(
            r#"<html xmlns:o="urn:schemas-microsoft-com:office:office" "#,
            r#"xmlns:x="urn:schemas-microsoft-com:office:excel" "#,
            r#"xmlns="http://www.w3.org/TR/REC-html40">"#,
            r#"<head><meta charset="UTF-8">"#,
            "<!--[if gte mso 9]><xml><x:ExcelWorkbook><x:ExcelWorksheets><x:ExcelWorksheet>",
            "<x:Name>{sheet}</x:Name>",
            "<x:WorksheetOptions><x:DisplayGridlines/></x:WorksheetOptions>",
            "</x:ExcelWorksheet></x:ExcelWorksheets></x:ExcelWorkbook></xml><![endif]-->",
            "</head><body>{table}</body></html>"
        ),
        sheet = sheet,
        table = table_html,
    )
}

/// Serialize the hidden table and hand it to the browser as a file download.
///
/// # Errors
///
/// Returns an error string if the blob, object URL, or download link cannot
/// be created.
#[cfg(feature = "hydrate")]
pub fn download_table(table: &web_sys::HtmlTableElement) -> Result<(), String> {
    use wasm_bindgen::JsCast as _;

    let document = workbook_document(EXPORT_SHEET_NAME, &table.outer_html());

    let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(&document));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(WORKBOOK_MIME);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|e| format!("blob: {e:?}"))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|e| format!("object url: {e:?}"))?;

    let doc = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document".to_owned())?;
    let anchor = doc
        .create_element("a")
        .map_err(|e| format!("anchor: {e:?}"))?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "anchor cast failed".to_owned())?;
    anchor.set_href(&url);
    anchor.set_download(&export_file_name());

    let body = doc.body().ok_or_else(|| "no body".to_owned())?;
    body.append_child(&anchor).map_err(|e| format!("attach anchor: {e:?}"))?;
    anchor.click();
    anchor.remove();

    gloo_timers::callback::Timeout::new(REVOKE_DELAY_MS, move || {
        let _ = web_sys::Url::revoke_object_url(&url);
    })
    .forget();
    Ok(())
}
