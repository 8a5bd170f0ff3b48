use crate::domain::Region;
use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Table of supported cities: display name against the URL slug.
pub fn cities_page() -> Markup {
    desktop_layout(
        "Cities",
        html! {
            h1 { "Valid city names" }
            table {
                tr {
                    th { "User-Friendly Name" }
                    th { "Valid for Url" }
                }
                @for region in Region::ALL {
                    tr {
                        td { (region.display_name()) }
                        td { (region.slug()) }
                    }
                }
            }
        },
    )
}
