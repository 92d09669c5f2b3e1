use ark_ff::Field;
use ark_serialize::Valid;
use ark_std::iter;

use crate::error::{Error, Result};

/// `1, c, c², …` without end. Folding weights key `i` by the `i`-th item, so every caller
/// must take them in this order.
pub fn powers_of<F: Field>(challenge: F) -> impl Iterator<Item = F> {
    iter::successors(Some(F::one()), move |p| Some(*p * challenge))
}

/// Rejects the slice if any point is off the curve or outside the prime-order subgroup.
pub fn check_subgroup<'a, A: Valid + 'a>(points: impl IntoIterator<Item = &'a A>) -> Result<()> {
    for p in points {
        p.check().map_err(|_| Error::SubgroupCheckFailed)?;
    }
    Ok(())
}
