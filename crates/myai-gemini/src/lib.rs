//! Gemini REST client for myai.
//!
//! Implements the `myai-core` ports for chat, image analysis and speech
//! synthesis on top of the `generateContent` endpoint. Application code uses
//! [`DefaultGeminiClient`] through those ports.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// HttpBackend is an implementation detail exposed only through the generic
// parameter of GeminiClient.
#![allow(private_bounds, private_interfaces)]

mod audio;
mod client;
mod config;
mod error;
mod http;
mod models;
mod port;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::{DefaultGeminiClient, GeminiClient};

// Configuration
pub use config::{DEFAULT_BASE_URL, DEFAULT_SYSTEM_INSTRUCTION, GeminiClientConfig};

// Errors
pub use error::{GeminiError, GeminiResult};

// Audio
pub use audio::DEFAULT_TTS_SAMPLE_RATE;

pub use client::EMPTY_DESCRIPTION_FALLBACK;
