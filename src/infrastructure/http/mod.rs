//! HTTP transport used to reach the upstream services

mod client;

pub use client::{HttpClient, HttpClientTrait, HttpResponse};

#[cfg(test)]
pub use client::mock;
