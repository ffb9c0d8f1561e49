// templates/pages/home.rs

use crate::domain::pricing::{format_rupiah, BULK_THRESHOLD, BULK_UNIT_PRICE, REGULAR_UNIT_PRICE};
use crate::domain::BatchRecord;
use crate::templates::{card, desktop_layout, status_badge};
use maud::{html, Markup};

const HIGHLIGHTS: [(&str, &str); 4] = [
    ("Light & Refreshing", "Naturally effervescent and tangy"),
    ("Quick Fermentation", "Ready in just 2-3 days"),
    ("Spiced Tradition", "Enhanced with cinnamon & cloves"),
    ("Non-Alcoholic Process", "Alcohol content kept well below 0.5%, meeting halal standards."),
];

pub fn home_page(current: &BatchRecord) -> Markup {
    desktop_layout(
        "Home",
        html! {
            main class="container" {
                section class="hero" {
                    h1 { "Tepache" }
                    p class="lead" { "Made from fermented pineapple rinds, brewed by Ootophia Brewing Labs." }
                    a class="btn primary" href="/order" { "Pesan Sekarang" }
                }

                (card("Current Batch", html! {
                    p { strong { (current.batch_code) } " " (status_badge(current.status)) }
                    p { "Best before " (current.best_before) }
                    a href="/batch-tracker" { "Follow this batch →" }
                }))

                section class="highlights" {
                    @for (title, text) in HIGHLIGHTS {
                        div class="highlight" {
                            h3 { (title) }
                            p { (text) }
                        }
                    }
                }

                (card("Harga", html! {
                    p { (format_rupiah(REGULAR_UNIT_PRICE)) " per botol" }
                    p { (format_rupiah(BULK_UNIT_PRICE)) " per botol untuk pesanan " (BULK_THRESHOLD) " botol atau lebih" }
                    p class="microcopy" { "Pengiriman via CoD • Pembayaran saat barang diterima" }
                }))
            }
        },
    )
}
