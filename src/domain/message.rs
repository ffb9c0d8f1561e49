// src/domain/message.rs

use crate::domain::order::ValidOrder;
use crate::domain::pricing::{format_rupiah, PricingResult};
use url::form_urlencoded;

const WHATSAPP_SEND_URL: &str = "https://api.whatsapp.com/send";

/// Plain-text order summary sent to the shop over chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderMessage(String);

impl OrderMessage {
    pub fn compose(order: &ValidOrder, pricing: &PricingResult) -> Self {
        let mut text = format!(
            "Halo, saya mau pesan Tepache.\n\nNama: {}\nAlamat CoD: {}\nJumlah: {} botol\nHarga satuan: {}\nTotal: {}",
            order.name,
            order.address,
            order.quantity,
            format_rupiah(pricing.unit_price),
            format_rupiah(pricing.total_price),
        );

        if pricing.is_bulk() {
            text.push_str(&format!("\nHemat: {}", format_rupiah(pricing.savings)));
        }

        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Link that opens a chat with `phone` and the message prefilled.
    pub fn whatsapp_link(&self, phone: &str) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("phone", phone)
            .append_pair("text", self.as_str())
            .finish();
        format!("{WHATSAPP_SEND_URL}?{query}")
    }
}
