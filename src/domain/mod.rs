//! Domain layer containing checkout types and their validation rules.

pub mod checkout;
