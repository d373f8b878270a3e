//! API client module for communicating with the roster backend.

mod client;

pub use client::ApiClient;
