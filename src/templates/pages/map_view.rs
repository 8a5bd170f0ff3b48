use crate::domain::{Region, Thing};
use crate::templates::{desktop_layout, thing_card};
use maud::{html, Markup};

/// Map view: the persisted artifact embedded alongside the legend.
/// The iframe serves the artifact file straight from disk, so this
/// page never re-renders the map itself.
pub fn map_page(location: Region, things: &[Thing]) -> Markup {
    desktop_layout(
        location.display_name(),
        html! {
            h1 { "Free stuff around " (location.display_name()) }
            iframe class="city-map"
                src=(format!("/{}/map/raw", location.slug()))
                title=(format!("Map of free stuff in {}", location.display_name())) {}
            div class="things legend" {
                @for thing in things {
                    (thing_card(thing))
                }
            }
        },
    )
}
