//! HTTP layer — `BarchartHttp`, outcome classification, results extraction.

pub mod client;

pub use client::{classify, extract_results, BarchartHttp, HttpOutcome};
