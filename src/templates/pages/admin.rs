use crate::domain::{BatchRecord, BatchStatus};
use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Outcome of the last save, shown above the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminNotice {
    Saved,
    SavedNotDurable,
}

fn text_field(label: &str, name: &str, value: &str, placeholder: &str) -> Markup {
    html! {
        div class="field" {
            label for=(name) { (label) }
            input type="text" id=(name) name=(name) value=(value) placeholder=(placeholder);
        }
    }
}

pub fn admin_page(record: &BatchRecord, notice: Option<AdminNotice>) -> Markup {
    desktop_layout(
        "Admin Panel",
        html! {
            main class="container narrow" {
                a href="/batch-tracker" { "← Back to Batch Tracker" }
                h1 { "Admin Panel" }
                p class="lead" { "Update batch information" }

                @match notice {
                    Some(AdminNotice::Saved) => {
                        div class="notice success" { "Batch Updated! The batch information has been saved successfully." }
                    }
                    Some(AdminNotice::SavedNotDurable) => {
                        div class="notice warning" { "Batch updated, but it could not be saved to storage. Changes will be lost on restart." }
                    }
                    None => {}
                }

                form class="card" action="/admin" method="post" {
                    (text_field("Batch Code", "batchCode", &record.batch_code, "e.g., OBL-2026-001"))
                    (text_field("Fermentation Started", "fermentationStarted", &record.fermentation_started, "e.g., 18 Jan 2026 | 10:00 PM"))
                    (text_field("Harvest Date", "harvestDate", &record.harvest_date, "e.g., 21 Jan 2026 | 11:00 AM"))
                    (text_field("Best Before", "bestBefore", &record.best_before, "e.g., 21 Feb 2026"))

                    div class="field" {
                        label for="status" { "Status" }
                        select id="status" name="status" {
                            @for status in BatchStatus::ALL {
                                option value=(status.as_str()) selected[status == record.status] { (status.label()) }
                            }
                        }
                    }

                    button type="submit" class="primary" { "Save Changes" }
                }

                p style="text-align: center;" { a href="/batch-tracker" { "View Batch Tracker →" } }
            }
        },
    )
}
