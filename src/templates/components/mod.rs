use maud::{html, Markup};

pub mod error;
pub mod map;
pub mod summary;
pub mod table;

pub use error::html_error_response;
pub use map::map_panel;
pub use summary::summary_panel;
pub use table::listings_table;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// A labelled `<select>` that resubmits its form on change.
pub fn select_field<'a, I>(name: &str, label: &str, options: I, selected: &str) -> Markup
where
    I: IntoIterator<Item = &'a str>,
{
    html! {
        label for=(name) { (label) }
        select id=(name) name=(name) onchange="this.form.submit()" {
            @for opt in options {
                option value=(opt) selected[opt == selected] { (opt) }
            }
        }
    }
}
