//! External API integrations

pub mod gateway;

pub use gateway::{AiGatewayClient, ChatCompletion, ChatMessage};
