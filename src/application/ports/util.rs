// src/application/ports/util.rs
pub trait SuffixGenerator: Send + Sync {
    /// `len` random characters from `[a-z0-9]`.
    fn random_suffix(&self, len: usize) -> String;
}
