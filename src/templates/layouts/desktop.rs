use maud::{html, Markup, DOCTYPE};

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

const BASE_CSS: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #1f2937; }
header { display: flex; align-items: center; gap: 12px; padding: 12px 24px; box-shadow: 0 1px 3px rgba(0,0,0,.1); }
.shell { display: flex; min-height: calc(100vh - 56px); }
aside.sidebar { width: 280px; padding: 16px 20px; background: #f9fafb; border-right: 1px solid #e5e7eb; }
aside.sidebar label { display: block; margin-top: 12px; font-size: 0.9em; font-weight: 600; }
aside.sidebar select, aside.sidebar input[type=range] { width: 100%; margin-top: 4px; padding: 6px; }
main.content { flex: 1; padding: 16px 24px; overflow-x: auto; }
.columns { display: grid; grid-template-columns: 3fr 1fr; gap: 24px; }
#map { width: 100%; height: 600px; border-radius: 6px; }
.card { border: 1px solid #e5e7eb; border-radius: 6px; padding: 12px 16px; margin-bottom: 16px; }
table.results { border-collapse: collapse; font-size: 0.85em; }
table.results th, table.results td { padding: 6px 8px; border-bottom: 1px solid #f3f4f6; text-align: left; white-space: nowrap; }
table.results th { border-bottom: 2px solid #e5e7eb; background: #f9fafb; }
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="ko" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href=(LEAFLET_CSS);
                script src=(LEAFLET_JS) {}
                style { (maud::PreEscaped(BASE_CSS)) }
            }
            body {
                header {
                    svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="24"
                        height="24"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="#524ed2"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    {
                        path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                        path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                        path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                        path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                    }
                    h3 { (title) }
                }
                (content)
            }
        }
    }
}
