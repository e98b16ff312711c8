//! Service layer for the blog generator.
//!
//! - Generation contract and prompt building (`TextGenerator`)
//! - Bedrock Runtime implementation (`BedrockGenerator`)

mod bedrock;
pub mod generation;

pub use bedrock::BedrockGenerator;
pub use generation::TextGenerator;
