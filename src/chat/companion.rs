//! Mock study-companion chat
//!
//! The panel exists so selected reference text can be routed into a
//! question thread. Answers are canned and voice input is simulated behind
//! a short delay; there is no language processing and no backend call.

use std::time::Duration;

use crate::core::ids::IdGenerator;
use crate::core::time::now_millis;
use crate::core::types::Timestamp;
use crate::player::timer::DelayTimer;

/// Simulated recording time before the transcript appears
pub const VOICE_CAPTURE_DELAY: Duration = Duration::from_secs(2);

/// Fixed transcript produced by the simulated voice capture
pub const VOICE_TRANSCRIPT: &str = "What is force in physics?";

const CANNED_ANSWER: &str = "Force is a push or pull that changes an object's motion or shape. \
It can make things start moving, stop moving, speed up, slow down, or change direction. Forces \
are measured in Newtons (N) and are described by Newton's Laws of Motion.";

/// One question/answer turn in the conversation log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub timestamp: Timestamp,
}

/// Conversation state for the companion panel
#[derive(Debug)]
pub struct CompanionChat {
    exchanges: Vec<Exchange>,
    context: Option<String>,
    ids: IdGenerator,
}

impl CompanionChat {
    pub fn new() -> Self {
        Self {
            exchanges: Vec::new(),
            context: None,
            ids: IdGenerator::new("exchange"),
        }
    }

    /// Attach selected reference text; it is folded into the next question.
    pub fn set_context(&mut self, text: impl Into<String>) {
        self.context = Some(text.into());
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    pub fn clear_context(&mut self) {
        self.context = None;
    }

    /// Send a question. Empty input is ignored; pending context is folded
    /// into the recorded question and cleared after sending.
    pub fn ask(&mut self, text: &str) -> Option<&Exchange> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let question = match self.context.take() {
            Some(context) => format!("Context: \"{}\"\n\nQuestion: {}", context, text),
            None => text.to_string(),
        };
        self.exchanges.push(Exchange {
            id: self.ids.next_id(),
            question,
            answer: CANNED_ANSWER.to_string(),
            timestamp: now_millis(),
        });
        self.exchanges.last()
    }

    pub fn exchanges(&self) -> &[Exchange] {
        &self.exchanges
    }

    /// Begin the simulated voice capture
    pub fn start_recording(&self) -> VoiceCapture {
        tracing::debug!("Voice capture started (simulated)");
        VoiceCapture::start()
    }
}

impl Default for CompanionChat {
    fn default() -> Self {
        Self::new()
    }
}

/// In-flight simulated voice-to-text capture. Dropping it cancels the
/// pending timer, so no transcript lands after the panel is gone.
#[derive(Debug)]
pub struct VoiceCapture {
    timer: DelayTimer,
}

impl VoiceCapture {
    fn start() -> Self {
        Self {
            timer: DelayTimer::start(VOICE_CAPTURE_DELAY),
        }
    }

    /// The fixed transcript, once the capture delay has elapsed
    pub fn poll(&self) -> Option<&'static str> {
        self.timer.ready().then_some(VOICE_TRANSCRIPT)
    }

    pub fn cancel(&mut self) {
        self.timer.cancel();
    }
}
