use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn not_found_page() -> Markup {
    desktop_layout(
        "Not Found",
        html! {
            h1 { "404" }
            p { "Nothing buried here. " a href="/cities" { "Try a valid city." } }
        },
    )
}
