// src/domain/pricing.rs

use num_format::{Locale, ToFormattedString};

/// Regular price per bottle, in rupiah.
pub const REGULAR_UNIT_PRICE: u64 = 15_000;
/// Price per bottle once the bulk threshold is met.
pub const BULK_UNIT_PRICE: u64 = 12_000;
/// Minimum bottles for the bulk price.
pub const BULK_THRESHOLD: u64 = 5;

/// Two-tier price list. A `bulk` price above `regular` yields no savings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceTiers {
    pub regular: u64,
    pub bulk: u64,
    pub threshold: u64,
}

impl Default for PriceTiers {
    fn default() -> Self {
        Self {
            regular: REGULAR_UNIT_PRICE,
            bulk: BULK_UNIT_PRICE,
            threshold: BULK_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingResult {
    pub quantity: u64,
    pub unit_price: u64,
    pub total_price: u64,
    /// Difference against paying the regular price for every bottle.
    pub savings: u64,
}

impl PricingResult {
    pub fn is_bulk(&self) -> bool {
        self.savings > 0
    }
}

impl PriceTiers {
    /// Only meaningful for `quantity >= 1`; callers validate first.
    pub fn price(&self, quantity: u64) -> PricingResult {
        let bulk = quantity >= self.threshold;
        let unit_price = if bulk { self.bulk } else { self.regular };
        let savings = if bulk {
            self.regular.saturating_sub(self.bulk) * quantity
        } else {
            0
        };

        PricingResult {
            quantity,
            unit_price,
            total_price: quantity * unit_price,
            savings,
        }
    }
}

/// Price an order with the shop's standard tiers.
pub fn price(quantity: u64) -> PricingResult {
    PriceTiers::default().price(quantity)
}

/// Format a rupiah amount as shown to customers, e.g. `Rp 60.000`.
pub fn format_rupiah(amount: u64) -> String {
    format!("Rp {}", amount.to_formatted_string(&Locale::id))
}
