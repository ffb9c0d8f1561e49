use crate::domain::order::{MAX_QUANTITY, MIN_QUANTITY};
use crate::domain::pricing::{format_rupiah, PricingResult, BULK_THRESHOLD};
use crate::domain::{FieldErrors, OrderField, OrderInput};
use crate::templates::components::field_error;
use crate::templates::desktop_layout;
use maud::{html, Markup};

/// What the order form shows: the user's input as typed, any field errors
/// from the last submit, and a price quote when the quantity is in range.
pub struct OrderVm {
    pub input: OrderInput,
    pub errors: FieldErrors,
    pub quote: Option<PricingResult>,
}

/// Price summary for the quantity currently in the form.
fn quote_summary(quote: Option<&PricingResult>) -> Markup {
    html! {
        div id="quote" class="quote" {
            @match quote {
                Some(q) => {
                    p { (q.quantity) " × " (format_rupiah(q.unit_price)) }
                    p class="quote-total" { strong { "Total: " (format_rupiah(q.total_price)) } }
                    @if q.is_bulk() {
                        p class="quote-savings" { "Hemat " (format_rupiah(q.savings)) }
                    } @else {
                        p class="microcopy" { "Pesan " (BULK_THRESHOLD) " botol atau lebih untuk harga grosir." }
                    }
                }
                None => {
                    p class="microcopy" { "Jumlah pesanan " (MIN_QUANTITY) "–" (MAX_QUANTITY) " botol." }
                }
            }
        }
    }
}

pub fn order_page(vm: &OrderVm) -> Markup {
    let has_error = |f: OrderField| vm.errors.get(f).is_some();

    desktop_layout(
        "Pesan Tepache",
        html! {
            main class="container narrow" {
                a href="/" { "← Kembali ke Beranda" }
                h1 { "Pesan Tepache" }
                p class="lead" { "Isi formulir untuk melakukan pemesanan" }

                form class="card" action="/order" method="post" {
                    div class="field" {
                        label for="name" { "Nama " span class="required" { "*" } }
                        input type="text" id="name" name="name" value=(vm.input.name)
                            placeholder="Masukkan nama Anda"
                            class=(if has_error(OrderField::Name) { "invalid" } else { "" });
                        (field_error(vm.errors.get(OrderField::Name)))
                    }

                    div class="field" {
                        label for="address" { "Alamat CoD " span class="required" { "*" } }
                        textarea id="address" name="address" rows="3"
                            placeholder="Masukkan alamat lengkap untuk pengantaran"
                            class=(if has_error(OrderField::Address) { "invalid" } else { "" }) { (vm.input.address) }
                        (field_error(vm.errors.get(OrderField::Address)))
                    }

                    div class="field" {
                        label for="quantity" { "Jumlah Pemesanan " span class="required" { "*" } }
                        input type="number" id="quantity" name="quantity"
                            min=(MIN_QUANTITY) max=(MAX_QUANTITY) value=(vm.input.quantity)
                            class=(if has_error(OrderField::Quantity) { "invalid" } else { "" });
                        span { " botol " }
                        button type="submit" formaction="/order" formmethod="get" class="secondary" { "Hitung harga" }
                        (field_error(vm.errors.get(OrderField::Quantity)))
                    }

                    (quote_summary(vm.quote.as_ref()))

                    button type="submit" class="primary" { "Pesan via WhatsApp" }
                    p class="microcopy" { "Anda akan diarahkan ke WhatsApp untuk mengirim pesanan" }
                }
            }
        },
    )
}
