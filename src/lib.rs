//! Checkout Gateway - HTTP front for a hosted payment provider
//!
//! Exchanges client credentials for provider access tokens, creates checkout
//! preferences and reports payment counts, forwarding provider failures with
//! their original status codes.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
