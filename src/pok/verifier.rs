use ark_ec::{pairing::Pairing, CurveGroup};
use ark_std::{iter, vec::Vec, Zero};

use super::{Commitment, KnowledgeProof, PedersenPoK, PreparedVerifyingKey, VerifyingKey};
use crate::{
    error::{Error, Result},
    utils::{check_subgroup, powers_of},
};

impl<E: Pairing> VerifyingKey<E> {
    /// Checks `e(commitment, g)·e(proof, g^(-1/σ)) = 1`.
    pub fn verify(&self, commitment: &Commitment<E>, proof: &KnowledgeProof<E>) -> Result<()> {
        check_subgroup([commitment, proof])?;
        let product = E::multi_pairing([*commitment, *proof], [self.g, self.g_root_sigma_neg]);
        accept(product.is_zero())
    }

    /// Precomputes the G2 side of the pairing for repeated
    /// [`PreparedVerifyingKey::verify_with_prepared`] calls.
    pub fn prepare(&self) -> PreparedVerifyingKey<E> {
        PreparedVerifyingKey::from(*self)
    }
}

impl<E: Pairing> PreparedVerifyingKey<E> {
    /// Same check as [`VerifyingKey::verify`].
    pub fn verify_with_prepared(
        &self,
        commitment: &Commitment<E>,
        proof: &KnowledgeProof<E>,
    ) -> Result<()> {
        check_subgroup([commitment, proof])?;
        let product = E::multi_pairing(
            [*commitment, *proof],
            [
                self.g_prepared.clone(),
                self.g_root_sigma_neg_prepared.clone(),
            ],
        );
        accept(product.is_zero())
    }
}

impl<E: Pairing> PedersenPoK<E> {
    /// Verifies `poks[i]` for `commitments[i]` under `vks[i]` for every `i` with `n + 1`
    /// pairings instead of `2n`. The keys may come from independent setups but must share the
    /// G2 generator.
    ///
    /// `challenge` must be fixed before the proofs are, e.g. with [`Self::fold_challenge`].
    #[tracing::instrument(target = "pedersen", skip_all, fields(batch = poks.len()))]
    pub fn batch_verify(
        vks: &[VerifyingKey<E>],
        commitments: &[Commitment<E>],
        poks: &[KnowledgeProof<E>],
        challenge: E::ScalarField,
    ) -> Result<()> {
        if vks.len() != commitments.len() {
            return Err(Error::LengthMismatch {
                expected: vks.len(),
                given: commitments.len(),
            });
        }
        if vks.len() != poks.len() {
            return Err(Error::LengthMismatch {
                expected: vks.len(),
                given: poks.len(),
            });
        }
        let g = match vks.first() {
            Some(vk) => vk.g,
            None => return Err(Error::EmptyBatch),
        };

        check_subgroup(poks.iter().chain(commitments)).map_err(|e| {
            tracing::debug!(target: "pedersen", "batch holds a point outside the subgroup");
            e
        })?;
        if let Some(i) = vks.iter().position(|vk| vk.g != g) {
            tracing::debug!(target: "pedersen", key = i, "G2 generator differs from key 0");
            return Err(Error::ParameterMismatch("G2 generator"));
        }

        let verify_time =
            start_timer!(|| format!("PedersenPoK::BatchVerify over {} proofs", poks.len()));

        let fold_time = start_timer!(|| "Fold proofs and commitments");
        let scaled = poks
            .iter()
            .zip(powers_of(challenge))
            .map(|(pok, r)| *pok * r)
            .collect::<Vec<E::G1>>();
        let mut g1 = E::G1::normalize_batch(&scaled);
        g1.push(Self::fold_commitments(commitments, challenge)?);
        end_timer!(fold_time);

        let g2 = vks
            .iter()
            .map(|vk| vk.g_root_sigma_neg)
            .chain(iter::once(g))
            .collect::<Vec<_>>();

        let pairing_time = start_timer!(|| format!("{} pairings", g1.len()));
        let product = E::multi_pairing(g1, g2);
        end_timer!(pairing_time);

        end_timer!(verify_time);
        accept(product.is_zero())
    }
}

fn accept(holds: bool) -> Result<()> {
    if holds {
        Ok(())
    } else {
        tracing::debug!(target: "pedersen", "pairing product is not the identity");
        Err(Error::ProofRejected)
    }
}
