pub mod client;
pub mod errors;
pub mod types;
pub mod utils;

pub use client::IpInfo;
