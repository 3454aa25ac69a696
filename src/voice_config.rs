//! Timing constants for the hands-free temperature logging assistant.
//!
//! Pure data: the voice client reads these values, nothing in this crate
//! acts on them beyond serving them at `GET /voice-config`.

use serde::Serialize;
use utoipa::ToSchema;

/// Durations in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct VoiceTimings {
    /// Pause after a wake word before another one is accepted
    pub wake_word_cooldown_ms: u64,
    /// How long the assistant listens for a reply before giving up
    pub listening_timeout_ms: u64,
    /// Silence that ends an utterance
    pub silence_detection_ms: u64,
    /// How long a spoken confirmation prompt waits for yes/no
    pub confirmation_timeout_ms: u64,
    /// Delay before the assistant speaks its response
    pub response_delay_ms: u64,
    /// Extra audio kept after speech end so trailing words are not clipped
    pub speech_end_grace_ms: u64,
}

/// Attempt limits before the assistant falls back to manual entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct VoiceRetries {
    pub recognition: u32,
    pub confirmation: u32,
    pub temperature_parse: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct VoiceDebugFlags {
    pub log_transcripts: bool,
    pub log_timings: bool,
    /// Feed canned transcripts instead of using the microphone
    pub simulate_recognition: bool,
}

/// Audio cues played by the client, as asset paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct VoiceAudioAssets {
    #[schema(value_type = String)]
    pub wake: &'static str,
    #[schema(value_type = String)]
    pub listening: &'static str,
    #[schema(value_type = String)]
    pub success: &'static str,
    #[schema(value_type = String)]
    pub error: &'static str,
    #[schema(value_type = String)]
    pub warning: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct VoiceConfig {
    pub timings: VoiceTimings,
    pub retries: VoiceRetries,
    pub debug: VoiceDebugFlags,
    pub audio: VoiceAudioAssets,
}

pub const VOICE_CONFIG: VoiceConfig = VoiceConfig {
    timings: VoiceTimings {
        wake_word_cooldown_ms: 2_000,
        listening_timeout_ms: 8_000,
        silence_detection_ms: 1_500,
        confirmation_timeout_ms: 5_000,
        response_delay_ms: 300,
        speech_end_grace_ms: 500,
    },
    retries: VoiceRetries {
        recognition: 3,
        confirmation: 2,
        temperature_parse: 2,
    },
    debug: VoiceDebugFlags {
        log_transcripts: false,
        log_timings: false,
        simulate_recognition: false,
    },
    audio: VoiceAudioAssets {
        wake: "/sounds/wake.mp3",
        listening: "/sounds/listening.mp3",
        success: "/sounds/success.mp3",
        error: "/sounds/error.mp3",
        warning: "/sounds/warning.mp3",
    },
};
