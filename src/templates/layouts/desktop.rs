use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="icon" href="/favicon.ico";
                link rel="stylesheet" href="/static/css/style.css";
            }
            body {
                header class="topbar" {
                    h3 { a href="/" { "Treasure Map" } }
                    nav {
                        ul {
                            li { a href="/" { "Home" } }
                            li { a href="/cities" { "Cities" } }
                        }
                    }
                }
                main {
                    (content)
                }
            }
        }
    }
}
