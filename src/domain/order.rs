// src/domain/order.rs

use std::collections::BTreeMap;

/// Counted in Unicode scalar values (`char`s) of the trimmed text.
pub const NAME_MAX_CHARS: usize = 100;
/// Counted in Unicode scalar values (`char`s) of the trimmed text.
pub const ADDRESS_MAX_CHARS: usize = 500;
pub const MIN_QUANTITY: i64 = 1;
pub const MAX_QUANTITY: i64 = 100;

/// Raw order form values. `quantity` has already been through
/// [`coerce_quantity`], so it is a number but not necessarily in range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderInput {
    pub name: String,
    pub address: String,
    pub quantity: i64,
}

impl Default for OrderInput {
    fn default() -> Self {
        Self {
            name: String::new(),
            address: String::new(),
            quantity: MIN_QUANTITY,
        }
    }
}

/// An order that passed validation: text is trimmed, quantity is in range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidOrder {
    pub name: String,
    pub address: String,
    pub quantity: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OrderField {
    Name,
    Address,
    Quantity,
}

impl OrderField {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderField::Name => "name",
            OrderField::Address => "address",
            OrderField::Quantity => "quantity",
        }
    }
}

/// At most one message per field; every failing field is present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<OrderField, String>);

impl FieldErrors {
    pub fn get(&self, field: OrderField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (OrderField, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }

    fn insert_first(&mut self, field: OrderField, message: &str) {
        self.0.entry(field).or_insert_with(|| message.to_string());
    }
}

fn check_text(
    errors: &mut FieldErrors,
    field: OrderField,
    raw: &str,
    max_chars: usize,
    empty_msg: &str,
    too_long_msg: &str,
) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        errors.insert_first(field, empty_msg);
    } else if trimmed.chars().count() > max_chars {
        errors.insert_first(field, too_long_msg);
    }
    trimmed.to_string()
}

/// Check an order form. Fields are checked independently and all failures
/// are returned together.
pub fn validate(input: &OrderInput) -> Result<ValidOrder, FieldErrors> {
    let mut errors = FieldErrors::default();

    let name = check_text(
        &mut errors,
        OrderField::Name,
        &input.name,
        NAME_MAX_CHARS,
        "Nama harus diisi",
        "Nama maksimal 100 karakter",
    );
    let address = check_text(
        &mut errors,
        OrderField::Address,
        &input.address,
        ADDRESS_MAX_CHARS,
        "Alamat harus diisi",
        "Alamat maksimal 500 karakter",
    );

    if input.quantity < MIN_QUANTITY {
        errors.insert_first(OrderField::Quantity, "Minimal pesan 1 botol");
    } else if input.quantity > MAX_QUANTITY {
        errors.insert_first(OrderField::Quantity, "Maksimal pesan 100 botol");
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ValidOrder {
        name,
        address,
        quantity: input.quantity.unsigned_abs(),
    })
}

/// Turn the quantity text box into a number the way the order form does:
/// take the leading integer, and fall back to 1 when there is none (or it
/// is zero). Out-of-range numbers are left for [`validate`] to reject.
pub fn coerce_quantity(raw: &str) -> i64 {
    let s = raw.trim();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return MIN_QUANTITY;
    }

    let magnitude = rest[..digits_len].parse::<i64>().unwrap_or(i64::MAX);
    let value = if negative { -magnitude } else { magnitude };

    if value == 0 {
        MIN_QUANTITY
    } else {
        value
    }
}
