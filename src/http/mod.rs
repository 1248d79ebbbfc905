//! HTTP client layer — `AdminHttp`, one round trip per admin action.

pub mod client;

pub use client::AdminHttp;
