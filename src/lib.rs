//! Channel Digest — message classification and digest aggregation core.

pub mod config;
pub mod digest;
pub mod error;
pub mod message;
pub mod pipeline;
