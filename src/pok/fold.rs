use ark_ec::{pairing::Pairing, AffineRepr};

use super::{Commitment, PedersenPoK};
use crate::{
    crypto::commitment::{pedersen::Pedersen, BatchCommitmentScheme},
    error::Result,
    msm::MsmConfig,
    utils::check_subgroup,
};

impl<E: Pairing> PedersenPoK<E> {
    /// `Σ challengeⁱ·commitments[i]`, the commitment a proof from [`Self::batch_prove`] opens
    /// when all keys share one setup.
    pub fn fold_commitments(
        commitments: &[Commitment<E>],
        challenge: E::ScalarField,
    ) -> Result<Commitment<E>> {
        Self::fold_commitments_with_config(commitments, challenge, &MsmConfig::default())
    }

    pub fn fold_commitments_with_config(
        commitments: &[Commitment<E>],
        challenge: E::ScalarField,
        config: &MsmConfig,
    ) -> Result<Commitment<E>> {
        match commitments {
            [] => Ok(E::G1Affine::zero()),
            [c] => Ok(*c),
            _ => {
                check_subgroup(commitments)?;
                Pedersen::<E::G1>::aggregate(commitments, challenge, config)
            }
        }
    }
}
