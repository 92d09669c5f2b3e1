use ark_ec::pairing::Pairing;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::vec::Vec;

/// A commitment `Σ vᵢ·basisᵢ`.
pub type Commitment<E> = <E as Pairing>::G1Affine;

/// A proof of knowledge `Σ vᵢ·σ·basisᵢ`, equal to `σ·commitment`.
pub type KnowledgeProof<E> = <E as Pairing>::G1Affine;

/// Key for committing to a vector and proving knowledge of its opening.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProvingKey<E: Pairing> {
    pub basis: Vec<E::G1Affine>,
    /// `σ·basis[i]` for the setup secret `σ`
    pub basis_exp_sigma: Vec<E::G1Affine>,
}

impl<E: Pairing> ProvingKey<E> {
    /// Number of values this key commits to.
    pub fn len(&self) -> usize {
        self.basis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.basis.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct VerifyingKey<E: Pairing> {
    /// G2 generator, shared by every key that is to be batch-verified together.
    pub g: E::G2Affine,
    /// `g^(-1/σ)`
    pub g_root_sigma_neg: E::G2Affine,
}

/// A verifying key with the G2 side of the pairing precomputed, for verifying many proofs
/// against one key.
#[derive(Clone, Debug)]
pub struct PreparedVerifyingKey<E: Pairing> {
    pub vk: VerifyingKey<E>,
    pub g_prepared: E::G2Prepared,
    pub g_root_sigma_neg_prepared: E::G2Prepared,
}

impl<E: Pairing> From<VerifyingKey<E>> for PreparedVerifyingKey<E> {
    fn from(vk: VerifyingKey<E>) -> Self {
        Self {
            vk,
            g_prepared: vk.g.into(),
            g_root_sigma_neg_prepared: vk.g_root_sigma_neg.into(),
        }
    }
}

/// Options for [`PedersenPoK::setup`](super::PedersenPoK::setup).
#[derive(Clone, Copy, Debug)]
pub struct SetupConfig<E: Pairing> {
    /// Use this G2 generator instead of a random one, so that independently generated keys can
    /// later be batch-verified together.
    pub shared_generator: Option<E::G2Affine>,
}

impl<E: Pairing> Default for SetupConfig<E> {
    fn default() -> Self {
        Self {
            shared_generator: None,
        }
    }
}

impl<E: Pairing> SetupConfig<E> {
    pub fn with_shared_generator(mut self, g: E::G2Affine) -> Self {
        self.shared_generator = Some(g);
        self
    }
}
