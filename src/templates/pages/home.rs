use crate::domain::Region;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn home_page() -> Markup {
    desktop_layout(
        "Treasure Map",
        html! {
            h1 { "Free stuff, on a map" }
            p { "Pick a city to browse the latest free listings." }

            ul class="city-links" {
                @for region in Region::ALL {
                    li {
                        a href=(format!("/{}/map", region.slug())) { (region.display_name()) }
                    }
                }
            }

            h2 { "Search around an address" }
            form method="post" action="/address" {
                label for="location" { "City" }
                select name="location" id="location" {
                    @for region in Region::ALL {
                        option value=(region.slug()) { (region.display_name()) }
                    }
                }
                label for="address" { "Address" }
                input type="text" name="address" id="address" placeholder="123 Main St";
                button type="submit" { "Search" }
            }
        },
    )
}
