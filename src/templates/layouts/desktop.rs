use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="id" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | Tepache" }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
              header class="flex items-center justify-between px-6 py-3 shadow" {
                  a href="/" class="brand" {
                      span class="brand-mark" { "Tepache" }
                      small { "BREWING LABS" }
                  }
                  nav {
                      ul {
                          li { a href="/" { "Home" } }
                          li { a href="/batch-tracker" { "Batch Tracker" } }
                          li { a href="/order" { "Order" } }
                      }
                  }
              }
                (content)
              footer class="px-6 py-6 text-center" {
                  p { "Halal Assured • Lab Tested • Quality Guaranteed" }
              }
            }
        }
    }
}
