//! HTTP adapters - REST client for the session service.

mod client;
mod dto;

pub use client::{HttpApiClient, HttpApiConfig};
