//! Network clients for Pagewright's external collaborators.
//!
//! Text generators implement `pagewright_core::TextGenerator`; the Pexels
//! client implements `pagewright_core::PhotoSource`. The router builds both
//! from configuration.

pub mod anthropic;
pub mod openai_compat;
pub mod pexels;
pub mod retry;
pub mod router;

pub use anthropic::AnthropicGenerator;
pub use openai_compat::OpenAiCompatGenerator;
pub use pexels::PexelsPhotoSource;
pub use retry::RetryingGenerator;
pub use router::{build_generator, build_photo_source};
