//! Fixed-column line formatting for KOF output
//!
//! Every numeric value is written with `.` as decimal separator and exactly
//! three fractional digits, independent of locale.

use chrono::{DateTime, Utc};

use crate::{Error, Result};

use crate::constants::{
    ADMIN_CAPTION, COORDINATE_DECIMALS, COORDINATE_LINE_WIDTH, ELEVATION_WIDTH, EXPORT_BANNER,
    FIRST_COORDINATE_WIDTH, KOF_VERSION, NATIONAL_CODE_WIDTH, POINT_ID_WIDTH, PROJECT_NAME_WIDTH,
    SECOND_COORDINATE_WIDTH, TEMA_CODE_WIDTH,
};

/// The four ` 00 ` comment lines opening every export
pub fn header_lines(
    project_id: &str,
    project_name: &str,
    srid: i32,
    exported_at: DateTime<Utc>,
) -> String {
    format!(
        " 00 {}\n 00 Project: {}. Name: {}\n 00 Spatial Reference ID (SRID): {}\n 00 Export date (UTC): {}\n",
        EXPORT_BANNER,
        project_id,
        project_name,
        srid,
        exported_at.format("%Y-%m-%d %H:%M:%S")
    )
}

/// Column caption followed by the administrative block
pub fn admin_block(
    project_name: &str,
    national_code: Option<i32>,
    units: &str,
    exported_at: DateTime<Utc>,
) -> String {
    let code = national_code.map(|code| code.to_string()).unwrap_or_default();

    format!(
        "{caption}\n 01 {name:<name_width$} {date:>8} {version:>3} {code:>code_width$} {municipality:>4} {units:<12} {observer:<12}\n",
        caption = ADMIN_CAPTION,
        name = truncate(project_name, PROJECT_NAME_WIDTH),
        name_width = PROJECT_NAME_WIDTH,
        date = exported_at.format("%d%m%Y").to_string(),
        version = KOF_VERSION,
        code = code,
        code_width = NATIONAL_CODE_WIDTH,
        municipality = "",
        units = units,
        observer = "",
    )
}

/// One coordinate block line, padded and terminated
///
/// # Errors
/// * Returns `Error::DataValidation` if a value needs more characters than its column holds
pub fn coordinate_line(
    point_id: &str,
    tema_code: &str,
    first: f64,
    second: f64,
    z: f64,
) -> Result<String> {
    let line = format!(
        " 05 {id:<id_width$} {tema:<tema_width$} {first:<first_width$} {second:<second_width$} {z:<z_width$} ",
        id = truncate(point_id, POINT_ID_WIDTH),
        id_width = POINT_ID_WIDTH,
        tema = tema_code,
        tema_width = TEMA_CODE_WIDTH,
        first = fixed_decimal(point_id, "first coordinate", first, FIRST_COORDINATE_WIDTH)?,
        first_width = FIRST_COORDINATE_WIDTH,
        second = fixed_decimal(point_id, "second coordinate", second, SECOND_COORDINATE_WIDTH)?,
        second_width = SECOND_COORDINATE_WIDTH,
        z = fixed_decimal(point_id, "elevation", z, ELEVATION_WIDTH)?,
        z_width = ELEVATION_WIDTH,
    );
    Ok(format!("{:<width$}\n", line, width = COORDINATE_LINE_WIDTH))
}

/// `value` with three decimals, rejected when it would spill into the next column
fn fixed_decimal(point_id: &str, field: &str, value: f64, width: usize) -> Result<String> {
    let text = format!("{:.decimals$}", value, decimals = COORDINATE_DECIMALS);
    if text.len() > width {
        return Err(Error::data_validation(format!(
            "{} {} of '{}' does not fit in {} columns",
            field, text, point_id, width
        )));
    }
    Ok(text)
}

/// Whether `value` is cut when written to a `width`-character column
pub fn is_truncated(value: &str, width: usize) -> bool {
    value.chars().count() > width
}

/// First `width` characters of `value`
fn truncate(value: &str, width: usize) -> String {
    value.chars().take(width).collect()
}
