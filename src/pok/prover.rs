use ark_ec::{pairing::Pairing, AffineRepr};
use ark_std::vec::Vec;

use super::{Commitment, KnowledgeProof, PedersenPoK, ProvingKey};
use crate::{
    crypto::commitment::{pedersen::Pedersen, BatchCommitmentScheme, CommitmentScheme},
    error::{Error, Result},
    msm::MsmConfig,
};

impl<E: Pairing> ProvingKey<E> {
    /// `Σ values[i]·basis[i]`
    pub fn commit(&self, values: &[E::ScalarField]) -> Result<Commitment<E>> {
        self.commit_with_config(values, &MsmConfig::default())
    }

    pub fn commit_with_config(
        &self,
        values: &[E::ScalarField],
        config: &MsmConfig,
    ) -> Result<Commitment<E>> {
        self.check_len(values)?;
        Pedersen::<E::G1>::commit(&self.basis, values, config)
    }

    /// `Σ values[i]·σ·basis[i]`, which only the holder of `values` can produce for the
    /// commitment to `values`.
    pub fn prove_knowledge(&self, values: &[E::ScalarField]) -> Result<KnowledgeProof<E>> {
        self.prove_knowledge_with_config(values, &MsmConfig::default())
    }

    pub fn prove_knowledge_with_config(
        &self,
        values: &[E::ScalarField],
        config: &MsmConfig,
    ) -> Result<KnowledgeProof<E>> {
        self.check_len(values)?;
        Pedersen::<E::G1>::commit(&self.basis_exp_sigma, values, config)
    }

    fn check_len(&self, values: &[E::ScalarField]) -> Result<()> {
        if values.len() != self.basis.len() {
            return Err(Error::LengthMismatch {
                expected: self.basis.len(),
                given: values.len(),
            });
        }
        Ok(())
    }
}

impl<E: Pairing> PedersenPoK<E> {
    /// Folds the proofs of knowledge for `values[i]` under `pk[i]` into one, weighting key `i`
    /// by `challengeⁱ`. The result verifies with [`Self::batch_verify`] against the individual
    /// commitments, or with `verify` against [`Self::fold_commitments`] when all keys come from
    /// one setup.
    pub fn batch_prove<V: AsRef<[E::ScalarField]>>(
        pk: &[ProvingKey<E>],
        values: &[V],
        challenge: E::ScalarField,
    ) -> Result<KnowledgeProof<E>> {
        Self::batch_prove_with_config(pk, values, challenge, &MsmConfig::default())
    }

    pub fn batch_prove_with_config<V: AsRef<[E::ScalarField]>>(
        pk: &[ProvingKey<E>],
        values: &[V],
        challenge: E::ScalarField,
        config: &MsmConfig,
    ) -> Result<KnowledgeProof<E>> {
        if pk.len() != values.len() {
            return Err(Error::LengthMismatch {
                expected: pk.len(),
                given: values.len(),
            });
        }

        match pk.len() {
            0 => return Ok(E::G1Affine::zero()),
            1 => return pk[0].prove_knowledge_with_config(values[0].as_ref(), config),
            _ => {}
        }

        for (key, v) in pk.iter().zip(values) {
            key.check_len(v.as_ref())?;
        }

        let prove_time =
            start_timer!(|| format!("PedersenPoK::BatchProve over {} keys", pk.len()));
        let basis = pk
            .iter()
            .flat_map(|key| key.basis_exp_sigma.iter().copied())
            .collect::<Vec<_>>();
        let scaled_values = Pedersen::<E::G1>::scalar_aggregate(values, challenge);
        let proof = Pedersen::<E::G1>::commit(&basis, &scaled_values, config);
        end_timer!(prove_time);

        proof
    }
}
