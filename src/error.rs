use ark_serialize::SerializationError;
use ark_std::rand;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A value vector, basis or key list has the wrong size.
    #[error("length mismatch: expected {expected}, got {given}")]
    LengthMismatch { expected: usize, given: usize },
    /// An untrusted point lies outside the prime-order subgroup.
    #[error("subgroup check failed")]
    SubgroupCheckFailed,
    /// Keys that are batched together disagree on a shared parameter.
    #[error("parameter mismatch: {0}")]
    ParameterMismatch(&'static str),
    /// The pairing equation does not hold.
    #[error("proof rejected")]
    ProofRejected,
    /// Batch verification was asked to check zero proofs.
    #[error("nothing to verify")]
    EmptyBatch,
    /// The randomness source failed during setup.
    #[error("randomness source failure: {0}")]
    Randomness(rand::Error),
    /// Key bytes are malformed, truncated or hold invalid points.
    #[error("serialization error: {0}")]
    Serialization(#[from] SerializationError),
    /// The dedicated MSM thread pool could not be started.
    #[cfg(feature = "parallel")]
    #[error("msm worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl From<rand::Error> for Error {
    fn from(e: rand::Error) -> Self {
        Self::Randomness(e)
    }
}

pub type Result<T> = core::result::Result<T, Error>;
