//! chroma-llms: clients for the hosted models behind palette generation.
//!
//! ## Flow
//!
//! ```text
//! seeds ──► PaletteClient ──► TextModel (Gemini | OpenAI) ──► parse + validate ──► Palette
//!                                                                                   │
//!                                       HeroImageClient ◄── colors + concept ◄──────┘
//!                                              │
//!                                              └──► data:image/png;base64,... attached
//! ```
//!
//! Credentials are passed in through the config structs; nothing here reads
//! the process environment.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chroma_llms::{GeminiConfig, GeminiModel, HeroImageClient, ImageConfig, PaletteClient};
//!
//! # async fn run() -> chroma_llms::Result<()> {
//! let model = GeminiModel::new(GeminiConfig::new("gemini-key"))?;
//! let client = PaletteClient::new(model);
//! let mut palette = client.generate(&["teal".to_string(), "#ff8800".to_string()], None).await?;
//!
//! let images = HeroImageClient::new(ImageConfig::new("openai-key"))?;
//! if let Err(e) = images.attach(&mut palette, None).await {
//!     eprintln!("no hero image: {e}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod guard;
pub mod image;
pub mod parse;
pub mod prompt;
pub mod provider;
pub mod providers;

pub use client::{PaletteClient, DEFAULT_PALETTE_TIMEOUT};
pub use error::{Error, Result};
pub use image::{HeroImageClient, ImageConfig, DEFAULT_IMAGE_TIMEOUT, PNG_DATA_URI_PREFIX};
pub use parse::parse_palette_response;
pub use prompt::{build_hero_prompt, build_palette_prompt, palette_schema};
pub use provider::TextModel;
pub use providers::gemini::GeminiConfig;
pub use providers::openai::OpenAIConfig;
pub use providers::{GeminiModel, OpenAIModel};
