use thiserror::Error;

/// Configuration-integrity errors raised at composition time.
///
/// Composition never proceeds with a partially wired integration: a missing
/// catalog entry would silently shrink lint coverage, so the framework
/// composers fail fast instead. Malformed rule identifiers or glob patterns
/// are not validated here; the engine reports those when it consumes the
/// sequence.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A framework preset expected in the extension catalog is absent.
    #[error("integration `{0}` is not registered in the extension catalog")]
    MissingIntegration(String),

    /// A processor token expected in the extension catalog is absent.
    #[error("processor `{0}` is not registered in the extension catalog")]
    MissingProcessor(String),
}
