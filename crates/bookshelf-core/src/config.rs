//! Compile-time tunables for the bookshelf registry.
//!
//! The registry has no runtime configuration; everything adjustable lives
//! here as associated constants.

/// Registry-level configuration.
pub struct RegistryConfig;

impl RegistryConfig {
    /// Draws allowed before giving up on finding an identifier not already held.
    pub const MAX_ID_ATTEMPTS: u32 = 8;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_attempts_allow_a_retry() {
        assert!(RegistryConfig::MAX_ID_ATTEMPTS > 1);
    }
}
