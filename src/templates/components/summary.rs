use crate::domain::FilterCriteria;
use maud::{html, Markup};

/// Active selections, the displayed price band and the match count.
pub fn summary_panel(criteria: &FilterCriteria, match_count: usize) -> Markup {
    let band = criteria.price_band();

    html! {
        section class="card" id="summary" {
            h3 { "🎯 현재 선택된 필터" }
            ul {
                li { strong { "건축년도 구분" } ": " (criteria.year_bracket) }
                li { strong { "건물 종류" } ": " (criteria.building_type) }
                li { strong { "면적" } ": " (criteria.area_bracket) }
                li {
                    strong { "건물 층수" } ": " (criteria.floor_label)
                    " (최대 " (criteria.floor_ceiling) "층 이하)"
                }
                li {
                    strong { "예산" } ": "
                    (format!("{:.2}", criteria.target_price)) "억 ± 1억 "
                    (format!("(범위: {:.2} ~ {:.2})", band.min, band.max))
                }
                li { strong { "선택한 구" } ": " (criteria.district.label()) }
            }
            p id="match-count" { "🔎 매물 수: " strong { (match_count) } "건" }
        }
    }
}
