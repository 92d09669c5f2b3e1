use ark_ff::PrimeField;
use ark_serialize::CanonicalSerialize;
use ark_std::vec::Vec;

use crate::error::Result;

pub mod sha3;

pub trait TranscriptProtocol: Clone {
    /// Create a new transcript bound to the given domain separator.
    fn new(domain: &'static [u8]) -> Self;

    /// Append an `item` with the given `label`.
    fn append(&mut self, label: &'static [u8], item: &[u8]);

    /// Compute a `label`ed challenge variable.
    fn challenge_scalar<F: PrimeField>(&mut self, label: &'static [u8]) -> F;

    /// Append the compressed canonical encoding of `item`.
    fn append_serializable<T: CanonicalSerialize>(
        &mut self,
        label: &'static [u8],
        item: &T,
    ) -> Result<()> {
        let mut bytes = Vec::with_capacity(item.compressed_size());
        item.serialize_compressed(&mut bytes)?;
        self.append(label, &bytes);
        Ok(())
    }
}
