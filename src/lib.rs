// src/lib.rs

//! newscrawl library: Fiji Times archive search scraper.

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod storage;
pub mod utils;
