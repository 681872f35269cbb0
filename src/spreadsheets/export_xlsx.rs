use crate::domain::apartment::{columns, ApartmentRecord};
use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};

pub const EXPORT_FILENAME: &str = "filtered_apartments.xlsx";

/// Filtered apartments as a workbook, in the same columns as the dashboard table.
pub fn build_apartments_workbook(records: &[ApartmentRecord]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let headers = [
        columns::ADDRESS,
        columns::PRICE,
        columns::BEDROOMS,
        columns::BATHROOMS,
        columns::SQFT,
        columns::CITY,
        columns::STATE,
        columns::LATITUDE,
        columns::LONGITUDE,
    ];

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    for (i, record) in records.iter().enumerate() {
        let r = (i + 1) as u32;

        worksheet
            .write_string(r, 0, &record.address)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write address: {}", e)))?;

        let numbers = [
            (1, record.price, "price"),
            (2, record.bedrooms, "bedrooms"),
            (3, record.bathrooms, "bathrooms"),
            (4, record.sqft, "square feet"),
        ];
        for (col, value, what) in numbers {
            write_optional_number(worksheet, r, col, value)
                .map_err(|e| ServerError::XlsxError(format!("Failed to write {what}: {e}")))?;
        }

        worksheet
            .write_string(r, 5, &record.city)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write city: {}", e)))?;

        worksheet
            .write_string(r, 6, &record.state)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write state: {}", e)))?;

        write_optional_number(worksheet, r, 7, record.latitude)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write latitude: {}", e)))?;

        write_optional_number(worksheet, r, 8, record.longitude)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write longitude: {}", e)))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))
}

// Missing values stay blank rather than turning into zeros.
fn write_optional_number(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: Option<f64>,
) -> Result<(), XlsxError> {
    if let Some(v) = value {
        worksheet.write_number(row, col, v)?;
    }
    Ok(())
}

pub fn export_apartments_xlsx(records: &[ApartmentRecord]) -> ResultResp {
    let buffer = build_apartments_workbook(records)?;
    xlsx_response(buffer, EXPORT_FILENAME)
}
