use crate::domain::listing::{Dataset, Listing};
use crate::errors::{DataError, LoadError};
use csv::StringRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const COL_DISTRICT: &str = "자치구명";
pub const COL_BUILDING_NAME: &str = "건물명";
pub const COL_BUILDING_TYPE: &str = "건물용도";
pub const COL_YEAR_BRACKET: &str = "건축년도구분";
pub const COL_AREA_BRACKET: &str = "건물면적구분";
pub const COL_FLOOR: &str = "층";
pub const COL_PRICE: &str = "물건금액";

/// Cell values read as missing, on top of the empty cell. These are the
/// tokens spreadsheet and dataframe exports write for "no value".
const NA_TOKENS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn is_missing(cell: &str) -> bool {
    cell.is_empty() || NA_TOKENS.contains(&cell)
}

/// Positions of the columns the dashboard reads.
struct Columns {
    district: usize,
    building_name: usize,
    building_type: usize,
    year_bracket: usize,
    area_bracket: usize,
    floor: usize,
    price: usize,
}

impl Columns {
    fn locate(headers: &[String]) -> Result<Self, LoadError> {
        let find = |name: &'static str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or(LoadError::MissingColumn(name))
        };

        Ok(Columns {
            district: find(COL_DISTRICT)?,
            building_name: find(COL_BUILDING_NAME)?,
            building_type: find(COL_BUILDING_TYPE)?,
            year_bracket: find(COL_YEAR_BRACKET)?,
            area_bracket: find(COL_AREA_BRACKET)?,
            floor: find(COL_FLOOR)?,
            price: find(COL_PRICE)?,
        })
    }

    /// `row` is 1-based, counting data rows only. Text cells are kept as
    /// written; the filters compare them exactly.
    fn listing(
        &self,
        record: &StringRecord,
        row: usize,
        width: usize,
    ) -> Result<Listing, LoadError> {
        if record.len() > width {
            return Err(LoadError::TooManyFields {
                row,
                expected: width,
                found: record.len(),
            });
        }

        let text = |idx: usize| record.get(idx).unwrap_or("").to_string();

        let building_name = Some(text(self.building_name)).filter(|s| !is_missing(s));

        let floor = parse_number(record.get(self.floor), row, COL_FLOOR)?
            .map(|value| {
                if value.fract() == 0.0 && value.abs() <= f64::from(i32::MAX) {
                    Ok(value as i32)
                } else {
                    Err(LoadError::InvalidNumber {
                        row,
                        column: COL_FLOOR,
                        value: value.to_string(),
                    })
                }
            })
            .transpose()?;

        let price = parse_number(record.get(self.price), row, COL_PRICE)?;

        Ok(Listing {
            district: text(self.district),
            building_name,
            building_type: text(self.building_type),
            year_bracket: text(self.year_bracket),
            area_bracket: text(self.area_bracket),
            floor,
            price,
            cells: {
                // short rows are padded so the table stays aligned
                let mut cells: Vec<String> = record.iter().map(str::to_string).collect();
                cells.resize(width, String::new());
                cells
            },
        })
    }
}

/// Blank cells and NA tokens are missing values; anything else must be a
/// finite number. Thousands separators are tolerated.
fn parse_number(
    cell: Option<&str>,
    row: usize,
    column: &'static str,
) -> Result<Option<f64>, LoadError> {
    let raw = cell.unwrap_or("").trim();
    if is_missing(raw) {
        return Ok(None);
    }

    raw.replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(Some)
        .ok_or_else(|| LoadError::InvalidNumber {
            row,
            column,
            value: raw.to_string(),
        })
}

/// Load the listings CSV at `path`.
pub fn load(path: impl AsRef<Path>) -> Result<Dataset, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let dataset = load_from_reader(file)?;
    if dataset.is_empty() {
        tracing::warn!(path = %path.display(), "listings file has no data rows");
    }
    tracing::info!(
        path = %path.display(),
        rows = dataset.len(),
        columns = dataset.headers.len(),
        "listings loaded"
    );
    Ok(dataset)
}

pub fn load_from_reader<R: Read>(reader: R) -> Result<Dataset, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
        .collect();

    let columns = Columns::locate(&headers)?;

    let mut rows = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        rows.push(columns.listing(&record, i + 1, headers.len())?);
    }

    Ok(Dataset { headers, rows })
}

/// Smallest and largest price in the dataset, skipping rows without one.
pub fn price_range(dataset: &Dataset) -> Result<(f64, f64), DataError> {
    dataset
        .rows
        .iter()
        .filter_map(|listing| listing.price)
        .fold(None, |acc: Option<(f64, f64)>, price| match acc {
            None => Some((price, price)),
            Some((lo, hi)) => Some((lo.min(price), hi.max(price))),
        })
        .ok_or(DataError::EmptyDataset)
}
