//! Study-companion chat panel

pub mod companion;

pub use companion::{CompanionChat, Exchange, VoiceCapture, VOICE_CAPTURE_DELAY};
