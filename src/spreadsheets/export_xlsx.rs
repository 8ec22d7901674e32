use crate::dataset::loader::{COL_FLOOR, COL_PRICE};
use crate::domain::Listing;
use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use rust_xlsxwriter::{Format, Workbook};

const SHEET_NAME: &str = "매물";

/// Writes every column of `rows` under `headers`. Floor and price cells that
/// hold a number are written as numbers so they sort and sum in Excel.
pub fn build_listings_workbook(
    headers: &[String],
    rows: &[&Listing],
) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(SHEET_NAME)
        .map_err(|e| ServerError::XlsxError(format!("Failed to name sheet: {}", e)))?;

    let bold = Format::new().set_bold();
    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, header, &bold)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    let numeric: Vec<bool> = headers
        .iter()
        .map(|h| h == COL_FLOOR || h == COL_PRICE)
        .collect();

    for (i, listing) in rows.iter().enumerate() {
        let r = (i + 1) as u32;

        for (col, cell) in listing.cells.iter().enumerate() {
            let c = col as u16;
            let number = numeric
                .get(col)
                .copied()
                .unwrap_or(false)
                .then(|| cell.trim().replace(',', "").parse::<f64>().ok())
                .flatten();

            let written = match number {
                Some(n) => worksheet.write_number(r, c, n).map(|_| ()),
                None => worksheet.write_string(r, c, cell).map(|_| ()),
            };
            written.map_err(|e| {
                ServerError::XlsxError(format!("Failed to write row {r} column {c}: {e}"))
            })?;
        }
    }

    worksheet.set_freeze_panes(1, 0).map_err(|e| {
        ServerError::XlsxError(format!("Failed to freeze header row: {}", e))
    })?;

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))
}

pub fn export_listings_xlsx(headers: &[String], rows: &[&Listing]) -> ResultResp {
    let buffer = build_listings_workbook(headers, rows)?;
    let stamp = chrono::Local::now().format("%Y%m%d");

    tracing::info!(rows = rows.len(), bytes = buffer.len(), "listings exported");
    xlsx_response(buffer, &format!("seoul_listings_{stamp}.xlsx"))
}
