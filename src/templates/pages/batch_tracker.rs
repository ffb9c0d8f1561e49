use crate::domain::{timeline, BatchRecord};
use crate::templates::{desktop_layout, status_badge};
use maud::{html, Markup};

const INGREDIENTS: [&str; 8] = [
    "Pineapple",
    "Clove",
    "Cinnamon",
    "Ginger",
    "Star Anise",
    "Black Tea",
    "Palm Sugar",
    "Mineral Water",
];

pub fn batch_tracker_page(record: &BatchRecord) -> Markup {
    desktop_layout(
        "Batch Tracker",
        html! {
            main class="container" {
                p class="eyebrow" { "Current Batch" }
                h1 { "Batch Tracker" }

                div class="card batch-header" {
                    p class="eyebrow" { "Batch Code" }
                    h2 { (record.batch_code) }
                    (status_badge(record.status))
                }

                div class="card" {
                    h3 { "Brewing Timeline" }
                    ol class="timeline" {
                        @for step in timeline(record) {
                            li class=(if step.completed { "checkpoint done" } else { "checkpoint" }) {
                                span class="checkpoint-mark" {
                                    @if step.completed { "✓" } @else { "○" }
                                }
                                p class="checkpoint-title" { (step.title) }
                                p class="checkpoint-date" { (step.date) }
                            }
                        }
                    }
                }

                div class="card" {
                    h3 { "Ingredients" }
                    p { "Carefully selected, naturally sourced" }
                    ul class="ingredients" {
                        @for name in INGREDIENTS {
                            li class="ingredient-tag" { (name) }
                        }
                    }
                }
            }
        },
    )
}
