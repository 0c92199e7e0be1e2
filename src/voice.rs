use tracing::warn;

use crate::interfaces::voice::SpeechCapability;

/// Env var whose presence marks a host speech backend (e.g. a recognizer
/// binary name). Only existence matters for the probe.
pub const SPEECH_BACKEND_ENV: &str = "OCEAN_ASSIST_SPEECH_BACKEND";

/// Capability provider that inspects the host environment.
#[derive(Debug, Default)]
pub struct HostSpeechProbe;

impl SpeechCapability for HostSpeechProbe {
    fn available(&self) -> bool {
        std::env::var_os(SPEECH_BACKEND_ENV).is_some()
    }
}

#[derive(Debug, Default)]
pub struct SpeechAvailable;

impl SpeechCapability for SpeechAvailable {
    fn available(&self) -> bool {
        true
    }
}

#[derive(Debug, Default)]
pub struct SpeechUnavailable;

impl SpeechCapability for SpeechUnavailable {
    fn available(&self) -> bool {
        false
    }
}

/// Flips the listening state when the capability is present. When it is not,
/// the state is returned unchanged and a diagnostic is logged; the caller
/// surfaces nothing to the user. No audio capture happens here — a recognizer
/// collaborator, if wired, feeds its text into `Conversation::submit`.
pub fn toggle_listening(current: bool, available: bool) -> bool {
    if !available {
        warn!("speech recognition not supported by this host; listening state unchanged");
        return current;
    }
    !current
}
