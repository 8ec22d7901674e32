use crate::domain::{apply, DistrictSelection, FilterCriteria, Listing};
use crate::errors::ServerError;
use crate::geos::{
    ALL_DISTRICTS, AREA_BRACKETS, BUILDING_TYPES, DEFAULT_YEAR_INDEX, FLOOR_BRACKETS,
    YEAR_BRACKETS,
};
use crate::map;
use crate::responses::{html_response, text_response, ResultResp};
use crate::spreadsheets::export_listings_xlsx;
use crate::state::AppState;
use crate::templates::pages::{dashboard_page, DashboardVm};
use astra::Request;
use std::collections::HashMap;

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => {
            let params = parse_query(&req);
            let criteria = criteria_from_query(&params, state.price_range)?;
            let rows = apply(&state.dataset.rows, &criteria);
            let map = map::render(&criteria.district, &rows);

            tracing::debug!(
                district = criteria.district.label(),
                matches = rows.len(),
                "dashboard rendered"
            );

            let vm = DashboardVm {
                criteria: &criteria,
                price_range: state.price_range,
                headers: &state.dataset.headers,
                rows: &rows,
                map: &map,
                query: criteria_query(&criteria),
            };
            html_response(dashboard_page(&vm))
        }

        ("GET", "/export.xlsx") => {
            let params = parse_query(&req);
            let criteria = criteria_from_query(&params, state.price_range)?;
            let rows: Vec<&Listing> = apply(&state.dataset.rows, &criteria);
            export_listings_xlsx(&state.dataset.headers, &rows)
        }

        ("GET", "/healthz") => text_response(format!("ok {} rows\n", state.dataset.len())),

        _ => Err(ServerError::NotFound),
    }
}

/// Decoded query parameters. Later duplicates win.
fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

/// Builds the filter from query parameters, filling the widget defaults for
/// anything absent. The price defaults to the top of the range and is clamped
/// into it; without a range it is 0.
pub fn criteria_from_query(
    params: &HashMap<String, String>,
    price_range: Option<(f64, f64)>,
) -> Result<FilterCriteria, ServerError> {
    let get = |key: &str, default: &'static str| -> String {
        params
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .unwrap_or(default)
            .to_string()
    };

    let price = match params.get("price").map(|v| v.trim()).filter(|v| !v.is_empty()) {
        None => None,
        Some(raw) => Some(
            raw.parse::<f64>()
                .ok()
                .filter(|p| p.is_finite())
                .ok_or_else(|| ServerError::BadRequest(format!("invalid price '{raw}'")))?,
        ),
    };

    let target_price = match price_range {
        Some((min, max)) => price.unwrap_or(max).clamp(min, max),
        None => 0.0,
    };

    Ok(FilterCriteria::new(
        DistrictSelection::from_label(&get("district", ALL_DISTRICTS)),
        get("year", YEAR_BRACKETS[DEFAULT_YEAR_INDEX]),
        get("kind", BUILDING_TYPES[0]),
        get("area", AREA_BRACKETS[0]),
        get("floor", FLOOR_BRACKETS[0]),
        target_price,
    ))
}

/// Inverse of `criteria_from_query`, used for the export link.
pub fn criteria_query(criteria: &FilterCriteria) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .append_pair("district", criteria.district.label())
        .append_pair("year", &criteria.year_bracket)
        .append_pair("kind", &criteria.building_type)
        .append_pair("area", &criteria.area_bracket)
        .append_pair("floor", &criteria.floor_label)
        .append_pair("price", &criteria.target_price.to_string())
        .finish()
}
