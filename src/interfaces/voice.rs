/// Probe for a host speech-recognition capability. A pure query: absence of
/// the capability yields `false`, never an error.
pub trait SpeechCapability: Send + Sync {
    fn available(&self) -> bool;
}
