use crate::domain::Thing;
use maud::{html, Markup};

/// One legend entry: thumbnail, linked title, place, posting time.
pub fn thing_card(thing: &Thing) -> Markup {
    html! {
        div class="thing-card" {
            img class="thing-image" src=(thing.image) alt=(thing.title);
            div class="thing-body" {
                h2 { a href=(thing.url) { (thing.title) } }
                p class="thing-place" { (thing.place) }
                p class="thing-time" { (thing.time) }
            }
        }
    }
}
