//! Quote module.
//!
//! Contains the immutable quote document, the cart hand-off boundary and
//! the plain-text message formatter.

mod document;
mod message;
mod output;

pub use document::{QuoteDocument, QuoteLine, SellerInfo, VALIDITY_DAYS};
pub use message::format_message;
pub use output::{push_to_cart, CartLine, CartSink};
