//! Pedersen vector commitments with proofs of knowledge of the opening.
//!
//! A setup samples a secret `σ` and publishes, per basis, the basis together with its
//! `σ`-multiple, plus `g` and `g^(-1/σ)` in G2. A proof of knowledge for the commitment
//! `C = Σ vᵢ·basisᵢ` is `K = Σ vᵢ·σ·basisᵢ` and verifies when `e(C, g)·e(K, g^(-1/σ)) = 1`.
//! Many commitments and proofs fold into one pairing-product check under a verifier
//! challenge.
use std::marker::PhantomData;

use ark_ec::pairing::Pairing;

use crate::{crypto::protocol::transcript::TranscriptProtocol, error::Result};

pub mod data_structure;
pub use self::data_structure::*;

mod codec;
mod fold;
mod generator;
mod prover;
mod verifier;

pub struct PedersenPoK<E: Pairing> {
    _pairing: PhantomData<E>,
}

impl<E: Pairing> PedersenPoK<E> {
    /// Absorbs `commitments` into the transcript and squeezes the folding challenge, so a
    /// prover and verifier replaying the same transcript agree on it.
    pub fn fold_challenge<T: TranscriptProtocol>(
        transcript: &mut T,
        commitments: &[Commitment<E>],
    ) -> Result<E::ScalarField> {
        for c in commitments {
            transcript.append_serializable(b"commitment", c)?;
        }
        Ok(transcript.challenge_scalar(b"fold"))
    }
}
