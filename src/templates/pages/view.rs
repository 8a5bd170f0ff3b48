use crate::domain::{Region, Thing};
use crate::templates::{desktop_layout, thing_card};
use maud::{html, Markup};

/// Plain legend view: the listing cards, no embedded map.
pub fn view_page(location: Region, things: &[Thing]) -> Markup {
    desktop_layout(
        location.display_name(),
        html! {
            h1 { "Free stuff in " (location.display_name()) }
            p {
                a href=(format!("/{}/map", location.slug())) { "See them on the map" }
            }
            div class="things" {
                @for thing in things {
                    (thing_card(thing))
                }
            }
        },
    )
}
