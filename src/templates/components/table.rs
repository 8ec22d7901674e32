use crate::domain::Listing;
use maud::{html, Markup};

/// Every column of every matching row, collapsed by default.
pub fn listings_table(headers: &[String], rows: &[&Listing]) -> Markup {
    html! {
        details class="card" id="results" {
            summary { "🏠 조건에 맞는 집 목록 보기 (모든 컬럼)" }
            @if rows.is_empty() {
                p { "조건에 맞는 매물이 없습니다." }
            } @else {
                div style="overflow-x: auto;" {
                    table class="results" {
                        thead {
                            tr {
                                th { "#" }
                                @for header in headers {
                                    th { (header) }
                                }
                            }
                        }
                        tbody {
                            @for (i, listing) in rows.iter().enumerate() {
                                tr {
                                    td { (i) }
                                    @for cell in &listing.cells {
                                        td { (cell) }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
