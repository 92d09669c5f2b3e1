//! Multi-scalar multiplication with a tunable worker count.
use ark_ec::CurveGroup;
use ark_ff::PrimeField;
use ark_std::vec::Vec;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{Error, Result};

/// Tuning for the MSMs behind every commitment, proof and fold.
///
/// MSM cost dominates every operation of the scheme and grows with the basis length, so
/// the default leaves the global rayon pool (all cores) in charge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MsmConfig {
    /// Number of worker threads for a single MSM. `None` uses the global pool.
    ///
    /// `Some(n)` builds a fresh n-thread pool for every MSM and tears it down afterwards, so
    /// each commit, proof or fold pays for spawning its threads. Prefer `None` with a sized
    /// global pool when running many small MSMs.
    pub num_tasks: Option<usize>,
}

impl MsmConfig {
    pub fn single_task() -> Self {
        Self::with_tasks(1)
    }

    pub fn with_tasks(num_tasks: usize) -> Self {
        Self {
            num_tasks: Some(num_tasks),
        }
    }
}

/// Computes `Σ scalars[i]·bases[i]`.
pub fn msm<C: CurveGroup>(
    bases: &[C::Affine],
    scalars: &[C::ScalarField],
    config: &MsmConfig,
) -> Result<C> {
    if bases.len() != scalars.len() {
        return Err(Error::LengthMismatch {
            expected: bases.len(),
            given: scalars.len(),
        });
    }

    let scalars = cfg_iter!(scalars)
        .map(|s| s.into_bigint())
        .collect::<Vec<_>>();
    run(config, || C::msm_bigint(bases, &scalars))
}

#[cfg(feature = "parallel")]
fn run<T, F>(config: &MsmConfig, op: F) -> Result<T>
where
    T: Send,
    F: FnOnce() -> T + Send,
{
    match config.num_tasks {
        Some(n) => {
            let pool = rayon::ThreadPoolBuilder::new().num_threads(n).build()?;
            Ok(pool.install(op))
        }
        None => Ok(op()),
    }
}

#[cfg(not(feature = "parallel"))]
fn run<T, F>(_config: &MsmConfig, op: F) -> Result<T>
where
    F: FnOnce() -> T,
{
    Ok(op())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::{Fr, G1Affine, G1Projective};
    use ark_std::{test_rng, UniformRand, Zero};

    #[test]
    fn matches_naive_sum() {
        let rng = &mut test_rng();
        let bases = (0..16)
            .map(|_| G1Affine::rand(rng))
            .collect::<Vec<_>>();
        let scalars = (0..16).map(|_| Fr::rand(rng)).collect::<Vec<_>>();

        let expected = bases
            .iter()
            .zip(&scalars)
            .fold(G1Projective::zero(), |acc, (b, s)| acc + *b * s);

        for config in [
            MsmConfig::default(),
            MsmConfig::single_task(),
            MsmConfig::with_tasks(3),
        ] {
            let got = msm::<G1Projective>(&bases, &scalars, &config).unwrap();
            assert_eq!(got.into_affine(), expected.into_affine());
        }
    }

    #[test]
    fn rejects_uneven_inputs() {
        let rng = &mut test_rng();
        let bases = vec![G1Affine::rand(rng); 3];
        let scalars = vec![Fr::rand(rng); 2];

        let err = msm::<G1Projective>(&bases, &scalars, &MsmConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            Error::LengthMismatch {
                expected: 3,
                given: 2
            }
        ));
    }

    #[test]
    fn empty_is_identity() {
        let got = msm::<G1Projective>(&[], &[], &MsmConfig::default()).unwrap();
        assert!(got.is_zero());
    }
}
