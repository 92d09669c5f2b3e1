use std::marker::PhantomData;

use ark_ec::CurveGroup;
use ark_std::vec::Vec;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::{BatchCommitmentScheme, CommitmentScheme};
use crate::{error::Result, msm, msm::MsmConfig, utils::powers_of};

/// Pedersen vector commitment `Σ vᵢ·Gᵢ` over the group `C`.
pub struct Pedersen<C: CurveGroup> {
    _group: PhantomData<C>,
}

impl<C> CommitmentScheme for Pedersen<C>
where
    C: CurveGroup,
{
    type Scalar = C::ScalarField;
    type Base = C::Affine;
    type Commitment = C::Affine;

    fn commit(
        committing_key: &[Self::Base],
        values: &[Self::Scalar],
        config: &MsmConfig,
    ) -> Result<Self::Commitment> {
        Ok(msm::msm::<C>(committing_key, values, config)?.into_affine())
    }
}

impl<C> BatchCommitmentScheme for Pedersen<C>
where
    C: CurveGroup,
{
    type Challenge = C::ScalarField;

    fn aggregate(
        commitments: &[Self::Commitment],
        challenge: Self::Challenge,
        config: &MsmConfig,
    ) -> Result<Self::Commitment> {
        let powers = powers_of(challenge)
            .take(commitments.len())
            .collect::<Vec<_>>();
        Self::commit(commitments, &powers, config)
    }

    fn scalar_aggregate<V: AsRef<[Self::Scalar]>>(
        values: &[V],
        challenge: Self::Challenge,
    ) -> Vec<Self::Scalar> {
        let powers = powers_of(challenge).take(values.len()).collect::<Vec<_>>();

        let mut scaled = Vec::with_capacity(values.iter().map(|v| v.as_ref().len()).sum());
        for (v, r) in values.iter().zip(powers) {
            scaled.extend(cfg_iter!(v.as_ref()).map(|x| *x * r).collect::<Vec<_>>());
        }
        scaled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::{Fr, G1Affine, G1Projective};
    use ark_std::{test_rng, UniformRand};

    type P = Pedersen<G1Projective>;

    #[test]
    fn commit_is_linear_combination() {
        let rng = &mut test_rng();
        let key = vec![G1Affine::rand(rng), G1Affine::rand(rng)];
        let values = vec![Fr::from(3u64), Fr::from(5u64)];

        let cm = P::commit(&key, &values, &MsmConfig::default()).unwrap();
        let expected = (key[0] * Fr::from(3u64) + key[1] * Fr::from(5u64)).into_affine();
        assert_eq!(cm, expected);
    }

    #[test]
    fn aggregate_matches_committing_scaled_values() {
        let rng = &mut test_rng();
        let config = MsmConfig::default();
        let keys = (0..3)
            .map(|i| (0..i + 2).map(|_| G1Affine::rand(rng)).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let values = keys
            .iter()
            .map(|k| (0..k.len()).map(|_| Fr::rand(rng)).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let challenge = Fr::rand(rng);

        let commitments = keys
            .iter()
            .zip(&values)
            .map(|(k, v)| P::commit(k, v, &config).unwrap())
            .collect::<Vec<_>>();
        let folded = P::aggregate(&commitments, challenge, &config).unwrap();

        let flat_key = keys.concat();
        let scaled = P::scalar_aggregate(&values, challenge);
        assert_eq!(P::commit(&flat_key, &scaled, &config).unwrap(), folded);
    }
}
