pub mod batch;
pub mod message;
pub mod order;
pub mod pricing;
pub mod timeline;

pub use batch::{BatchRecord, BatchStatus};
pub use message::OrderMessage;
pub use order::{coerce_quantity, validate, FieldErrors, OrderField, OrderInput};
pub use pricing::{price, PricingResult};
pub use timeline::timeline;
