// src/tests/router_tests/dashboard_tests.rs

use crate::dataset::loader::load_from_reader;
use crate::errors::ServerError;
use crate::router::{criteria_from_query, handle};
use crate::state::AppState;
use crate::tests::utils::{fixture_state, get, request};
use std::collections::HashMap;

const SELECTION: &[(&str, &str)] = &[
    ("district", "전체"),
    ("year", "2010년대"),
    ("kind", "아파트"),
    ("area", "30평대"),
    ("floor", "15층이하"),
    ("price", "15.0"),
];

fn with(overrides: &[(&'static str, &'static str)]) -> Vec<(&'static str, &'static str)> {
    SELECTION
        .iter()
        .map(|&(k, v)| {
            overrides
                .iter()
                .find(|(ok, _)| *ok == k)
                .copied()
                .unwrap_or((k, v))
        })
        .collect()
}

#[test]
fn default_dashboard_renders_all_districts() {
    let state = fixture_state();
    let (status, body) = request(&state, get("/", &[]));

    assert_eq!(status, 200);
    // Default year bracket is 2000년대, which nothing in the fixture has.
    assert!(body.contains("매물 수: <strong>0</strong>건"));
    assert!(body.contains("\"zoom\":11"));
    assert!(body.contains("\"tooltip\":\"종로구\""));
    assert!(body.contains("\"tooltip\":\"강동구\""));
    assert!(!body.contains("필터 매칭됨"));
}

#[test]
fn selection_filters_rows_and_highlights_buildings() {
    let state = fixture_state();
    let (status, body) = request(&state, get("/", SELECTION));

    assert_eq!(status, 200);
    assert!(body.contains("매물 수: <strong>3</strong>건"), "{body}");
    assert!(body.contains("래미안블레스티지"));
    assert!(!body.contains("마포래미안푸르지오"));
    assert!(!body.contains("헬리오시티"));

    assert!(body.contains("송파파크데일1단지 (필터 매칭됨)"));
    assert!(body.contains("위례신도시송파푸르지오 (필터 매칭됨)"));
    assert!(!body.contains("송파파크데일2단지 (필터 매칭됨)"));

    assert!(body.contains("15.00억 ± 1억"));
    assert!(body.contains("범위: 14.00 ~ 16.00"));
    assert!(body.contains("(최대 15층 이하)"));
}

#[test]
fn single_district_zooms_in() {
    let state = fixture_state();
    let (_, body) = request(&state, get("/", &with(&[("district", "송파구")])));

    assert!(body.contains("매물 수: <strong>2</strong>건"));
    assert!(body.contains("\"zoom\":13"));
    assert!(!body.contains("\"tooltip\":\"종로구\""));
}

#[test]
fn lower_floor_bracket_excludes_row() {
    let state = fixture_state();

    let (_, body) = request(&state, get("/", &with(&[("district", "강남구")])));
    assert!(body.contains("매물 수: <strong>1</strong>건"));

    let (_, body) = request(
        &state,
        get("/", &with(&[("district", "강남구"), ("floor", "10층이하")])),
    );
    assert!(body.contains("매물 수: <strong>0</strong>건"));
}

#[test]
fn price_is_clamped_into_dataset_range() {
    let state = fixture_state();
    let (status, body) = request(&state, get("/", &with(&[("price", "1000")])));

    assert_eq!(status, 200);
    assert!(body.contains("25.00억 ± 1억"));
}

#[test]
fn invalid_price_is_a_bad_request() {
    let state = fixture_state();
    let result = handle(get("/", &with(&[("price", "abc")])), &state);
    assert!(matches!(result, Err(ServerError::BadRequest(_))));
}

#[test]
fn unknown_path_is_not_found() {
    let state = fixture_state();
    let result = handle(get("/nope", &[]), &state);
    assert!(matches!(result, Err(ServerError::NotFound)));
}

#[test]
fn healthz_reports_row_count() {
    let state = fixture_state();
    let (status, body) = request(&state, get("/healthz", &[]));
    assert_eq!(status, 200);
    assert_eq!(body, "ok 6 rows\n");
}

#[test]
fn empty_dataset_disables_price_slider() {
    let dataset = load_from_reader(
        "자치구명,건물명,건물용도,건축년도구분,건물면적구분,층,물건금액\n".as_bytes(),
    )
    .unwrap();
    let state = AppState::new(dataset);
    assert_eq!(state.price_range, None);

    let (status, body) = request(&state, get("/", &[]));
    assert_eq!(status, 200);
    assert!(body.contains("disabled"));
    assert!(body.contains("매물 수: <strong>0</strong>건"));
}

#[test]
fn query_defaults_follow_widget_defaults() {
    let criteria = criteria_from_query(&HashMap::new(), Some((2.0, 30.0))).unwrap();

    assert_eq!(criteria.district.label(), "전체");
    assert_eq!(criteria.year_bracket, "2000년대");
    assert_eq!(criteria.building_type, "연립다세대");
    assert_eq!(criteria.area_bracket, "10평 미만");
    assert_eq!(criteria.floor_label, "05층이하");
    assert_eq!(criteria.floor_ceiling, 5);
    assert_eq!(criteria.target_price, 30.0);
}

#[test]
fn unrecognized_floor_label_from_query_uses_fifty() {
    let params = HashMap::from([("floor".to_string(), "77층이하".to_string())]);
    let criteria = criteria_from_query(&params, Some((2.0, 30.0))).unwrap();
    assert_eq!(criteria.floor_ceiling, 50);
}
