//! Checkout domain types.
//!
//! - `credentials` - client id/secret for the token exchange
//! - `preference` - checkout preference payload and its required-field rules
//! - `validation` - ordered field violations

mod credentials;
mod preference;
mod validation;

pub use credentials::Credentials;
pub use preference::{Address, Item, Payer, Phone, Preference, Redirect};
pub use validation::{FieldViolation, Rule, ValidationErrors};
