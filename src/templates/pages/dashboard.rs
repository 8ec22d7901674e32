use crate::domain::{FilterCriteria, Listing};
use crate::geos::{self, AREA_BRACKETS, BUILDING_TYPES, FLOOR_BRACKETS, YEAR_BRACKETS};
use crate::map::MapView;
use crate::templates::components::{listings_table, map_panel, select_field, summary_panel};
use crate::templates::{card, desktop_layout};
use maud::{html, Markup};

pub struct DashboardVm<'a> {
    pub criteria: &'a FilterCriteria,
    /// `None` when the dataset has no prices; the slider is disabled then.
    pub price_range: Option<(f64, f64)>,
    pub headers: &'a [String],
    pub rows: &'a [&'a Listing],
    pub map: &'a MapView,
    /// Query string reproducing the current selection.
    pub query: String,
}

pub fn dashboard_page(vm: &DashboardVm) -> Markup {
    desktop_layout(
        "🏙️ 서울 부동산 필터링 + 지도",
        html! {
            div class="shell" {
                (filter_sidebar(vm))

                main class="content" {
                    div class="columns" {
                        (card("📌 선택한 구 지도 표시", map_panel(vm.map)))
                        div {
                            (summary_panel(vm.criteria, vm.rows.len()))
                            a href=(format!("/export.xlsx?{}", vm.query)) { "📥 엑셀로 내려받기" }
                        }
                    }

                    (listings_table(vm.headers, vm.rows))
                }
            }
        },
    )
}

pub fn filter_sidebar(vm: &DashboardVm) -> Markup {
    let c = vm.criteria;

    html! {
        aside class="sidebar" {
            h3 { "🔎 필터 조건 선택" }
            form method="get" action="/" id="filters" {
                (select_field("district", "서울의 구 선택", geos::district_options(), c.district.label()))
                (select_field("year", "건축년도 구분", YEAR_BRACKETS.iter().copied(), &c.year_bracket))
                (select_field("kind", "건물 종류", BUILDING_TYPES.iter().copied(), &c.building_type))
                (select_field("area", "면적 (평)", AREA_BRACKETS.iter().copied(), &c.area_bracket))
                (select_field("floor", "건물 층수", FLOOR_BRACKETS.iter().copied(), &c.floor_label))

                label for="price" {
                    "예산 (억 단위 기준): "
                    output id="price-value" for="price" { (format!("{:.2}", c.target_price)) }
                }
                @match vm.price_range {
                    Some((min, max)) => {
                        input
                            type="range"
                            id="price"
                            name="price"
                            min=(min)
                            max=(max)
                            step="0.1"
                            value=(c.target_price)
                            oninput="document.getElementById('price-value').value = Number(this.value).toFixed(2)"
                            onchange="this.form.submit()";
                    }
                    None => {
                        input type="range" id="price" name="price" disabled;
                        p style="color: #dc2626;" { "가격 정보가 있는 매물이 없습니다." }
                    }
                }
                noscript { button type="submit" { "적용" } }
            }
        }
    }
}
