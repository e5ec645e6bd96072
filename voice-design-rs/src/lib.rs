//! Client for the ElevenLabs voice design endpoint.
//!
//! Describe a voice in plain language, get back a handful of spoken previews
//! and write each one to `voice_preview_<N>.mp3`.
//!
//! ```no_run
//! use voice_design_rs::config::ClientConfig;
//! use voice_design_rs::design_api::{ElevenLabs, VoiceDesignRequest};
//! use voice_design_rs::preview::design_and_save;
//!
//! let api = ElevenLabs::new(ClientConfig::from_env()?)?;
//! let request = VoiceDesignRequest::new(
//!     "eleven_multilingual_ttv_v2",
//!     "A warm, unhurried narrator with a slight rasp.",
//!     "Every story starts with a single quiet sentence, and this one is no different.",
//! );
//! design_and_save(&api, &request, ".", &mut std::io::stdout())?;
//! # Ok::<(), voice_design_rs::Error>(())
//! ```

pub mod config;
pub mod design_api;
mod error;
pub mod preview;
mod util;

pub use error::{Error, Result};
