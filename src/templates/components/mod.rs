use crate::domain::BatchStatus;
use maud::{html, Markup};

pub mod error;

pub use error::error_page;

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

pub fn status_badge(status: BatchStatus) -> Markup {
    let icon = match status {
        BatchStatus::Fermenting => "🔄",
        BatchStatus::Harvested => "🌿",
        BatchStatus::Ready => "✓",
    };

    html! {
        span class={ "badge badge-" (status.as_str()) } { (icon) " " (status.label()) }
    }
}

/// Inline message under a form field; renders nothing when there is no error.
pub fn field_error(message: Option<&str>) -> Markup {
    html! {
        @if let Some(msg) = message {
            p class="field-error" style="color: #dc2626; font-size: 0.9em; margin-top: 4px;" { (msg) }
        }
    }
}
