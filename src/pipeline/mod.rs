//! Request pipeline for blog generation.
//!
//! - `decode`: event body → JSON object
//! - `topic`: JSON object → validated topic
//! - `blog`: orchestration (`BlogPipeline`)
//! - `response`: gateway response envelopes

pub mod blog;
pub mod decode;
pub mod response;
pub mod topic;

pub use blog::{BlogPipeline, Clock};
pub use decode::{Payload, decode_body};
pub use topic::extract_topic;
