//! Provider gateway: decides per request whether a real model is available and
//! either calls it or falls back to the demo recipe engine.

pub mod credentials;
pub mod error;
pub mod gateway;
pub mod menu;
pub mod openai;
pub mod vision;

pub use credentials::{ApiKey, Mode};
pub use error::{GatewayError, GatewayResult};
pub use gateway::{Gateway, Providers, VisionSettings};
pub use openai::{ChatModel, ChatRequest, OpenAiClient, OpenAiSettings};
pub use vision::{GoogleVision, ImagePayload, OcrEngine};
