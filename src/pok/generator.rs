use ark_ec::{pairing::Pairing, CurveGroup, Group};
use ark_ff::{Field, PrimeField};
use ark_std::{
    rand::{CryptoRng, RngCore},
    vec::Vec,
    Zero,
};
use zeroize::Zeroize;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::{PedersenPoK, ProvingKey, SetupConfig, VerifyingKey};
use crate::error::Result;

/// Samples a scalar uniformly from `[1, r-1]`. 64 random bytes are reduced mod `r`, which keeps
/// the bias negligible; zero is resampled. Only `try_fill_bytes` is used, so a failing source
/// is reported instead of panicking.
fn sample_nonzero<F: PrimeField, R: RngCore + CryptoRng>(rng: &mut R) -> Result<F> {
    let mut bytes = [0u8; 64];
    loop {
        if let Err(e) = rng.try_fill_bytes(&mut bytes) {
            bytes.zeroize();
            return Err(e.into());
        }
        let s = F::from_le_bytes_mod_order(&bytes);
        if !s.is_zero() {
            bytes.zeroize();
            return Ok(s);
        }
    }
}

/// The setup secret σ together with σ⁻¹. Wiped when dropped, so it cannot outlive the
/// setup call on any exit path.
struct Trapdoor<F: Field> {
    sigma: F,
    sigma_inverse: F,
}

impl<F: PrimeField> Trapdoor<F> {
    fn sample<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self> {
        loop {
            let mut sigma = sample_nonzero::<F, _>(rng)?;
            if let Some(sigma_inverse) = sigma.inverse() {
                return Ok(Self {
                    sigma,
                    sigma_inverse,
                });
            }
            sigma.zeroize();
        }
    }
}

impl<F: Field> Drop for Trapdoor<F> {
    fn drop(&mut self) {
        self.sigma.zeroize();
        self.sigma_inverse.zeroize();
    }
}

impl<E: Pairing> PedersenPoK<E> {
    /// Runs the trusted setup for one proving key per basis, all sharing one secret, and the
    /// verifying key that checks their proofs.
    ///
    /// The G2 generator is random unless `config.shared_generator` is set. Keys from separate
    /// setups can only be batch-verified together if they share the generator.
    #[tracing::instrument(target = "pedersen", skip_all, fields(num_keys = bases.len()))]
    pub fn setup<B, R>(
        bases: &[B],
        config: &SetupConfig<E>,
        rng: &mut R,
    ) -> Result<(Vec<ProvingKey<E>>, VerifyingKey<E>)>
    where
        B: AsRef<[E::G1Affine]>,
        R: RngCore + CryptoRng,
    {
        let setup_time = start_timer!(|| "PedersenPoK::Setup");

        let g = match config.shared_generator {
            Some(g) => g,
            None => {
                let s = sample_nonzero::<E::ScalarField, _>(rng)?;
                (E::G2::generator() * s).into_affine()
            }
        };

        let trapdoor = Trapdoor::<E::ScalarField>::sample(rng)?;

        let vk_time = start_timer!(|| "Compute verifying key");
        let vk = VerifyingKey {
            g,
            g_root_sigma_neg: (g * -trapdoor.sigma_inverse).into_affine(),
        };
        end_timer!(vk_time);

        let pk_time = start_timer!(|| format!("Compute {} proving keys", bases.len()));
        let pk = bases
            .iter()
            .map(|basis| {
                let basis = basis.as_ref();
                let basis_exp_sigma = cfg_iter!(basis)
                    .map(|b| *b * trapdoor.sigma)
                    .collect::<Vec<_>>();
                ProvingKey {
                    basis: basis.to_vec(),
                    basis_exp_sigma: E::G1::normalize_batch(&basis_exp_sigma),
                }
            })
            .collect::<Vec<_>>();
        end_timer!(pk_time);

        drop(trapdoor);
        end_timer!(setup_time);

        Ok((pk, vk))
    }
}
