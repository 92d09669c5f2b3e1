//! Byte layout of the keys.
//!
//! Every sequence is an 8-byte little-endian length followed by that many fixed-width point
//! encodings. A [`ProvingKey`] is `basis` then `basis_exp_sigma`; a [`VerifyingKey`] is `g`
//! then `g_root_sigma_neg`. Points are written compressed unless the `raw` writer is used.
use ark_ec::pairing::Pairing;
use ark_serialize::{
    CanonicalDeserialize, CanonicalSerialize, Compress, Read, SerializationError, Valid, Validate,
    Write,
};
use ark_std::vec::Vec;

use super::{ProvingKey, VerifyingKey};
use crate::error::{Error, Result};

type Fields<E> = (Vec<<E as Pairing>::G1Affine>, Vec<<E as Pairing>::G1Affine>);

fn read_fields<E: Pairing, R: Read>(
    mut reader: R,
    compress: Compress,
    validate: Validate,
) -> core::result::Result<Fields<E>, SerializationError> {
    let basis = Vec::deserialize_with_mode(&mut reader, compress, validate)?;
    let basis_exp_sigma = Vec::deserialize_with_mode(&mut reader, compress, validate)?;
    Ok((basis, basis_exp_sigma))
}

impl<E: Pairing> ProvingKey<E> {
    /// Writes the key with compressed points and returns the number of bytes written.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<usize> {
        self.write_with_mode(writer, Compress::Yes)
    }

    /// Writes the key with uncompressed points, which are faster to read back.
    pub fn write_raw_to<W: Write>(&self, writer: W) -> Result<usize> {
        self.write_with_mode(writer, Compress::No)
    }

    fn write_with_mode<W: Write>(&self, writer: W, compress: Compress) -> Result<usize> {
        self.serialize_with_mode(writer, compress)?;
        Ok(self.serialized_size(compress))
    }

    /// Reads a key written in the given `compress` mode.
    ///
    /// `Validate::No` skips the on-curve and subgroup checks of every point and must only be
    /// used for bytes from a trusted source. The two sequences must have the same length
    /// either way.
    pub fn read_from<R: Read>(reader: R, compress: Compress, validate: Validate) -> Result<Self> {
        let (basis, basis_exp_sigma) = read_fields::<E, _>(reader, compress, validate)?;
        if basis.len() != basis_exp_sigma.len() {
            return Err(Error::LengthMismatch {
                expected: basis.len(),
                given: basis_exp_sigma.len(),
            });
        }
        Ok(Self {
            basis,
            basis_exp_sigma,
        })
    }
}

impl<E: Pairing> CanonicalSerialize for ProvingKey<E> {
    fn serialize_with_mode<W: Write>(
        &self,
        mut writer: W,
        compress: Compress,
    ) -> core::result::Result<(), SerializationError> {
        self.basis.serialize_with_mode(&mut writer, compress)?;
        self.basis_exp_sigma.serialize_with_mode(&mut writer, compress)
    }

    fn serialized_size(&self, compress: Compress) -> usize {
        self.basis.serialized_size(compress) + self.basis_exp_sigma.serialized_size(compress)
    }
}

impl<E: Pairing> Valid for ProvingKey<E> {
    fn check(&self) -> core::result::Result<(), SerializationError> {
        if self.basis.len() != self.basis_exp_sigma.len() {
            return Err(SerializationError::InvalidData);
        }
        self.basis.check()?;
        self.basis_exp_sigma.check()
    }
}

impl<E: Pairing> CanonicalDeserialize for ProvingKey<E> {
    fn deserialize_with_mode<R: Read>(
        reader: R,
        compress: Compress,
        validate: Validate,
    ) -> core::result::Result<Self, SerializationError> {
        let (basis, basis_exp_sigma) = read_fields::<E, _>(reader, compress, validate)?;
        if basis.len() != basis_exp_sigma.len() {
            return Err(SerializationError::InvalidData);
        }
        Ok(Self {
            basis,
            basis_exp_sigma,
        })
    }
}

impl<E: Pairing> VerifyingKey<E> {
    /// Writes the key with compressed points and returns the number of bytes written.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<usize> {
        self.serialize_compressed(writer)?;
        Ok(self.compressed_size())
    }

    pub fn write_raw_to<W: Write>(&self, writer: W) -> Result<usize> {
        self.serialize_uncompressed(writer)?;
        Ok(self.uncompressed_size())
    }

    /// Reads a key written in the given `compress` mode. `Validate::No` skips the subgroup
    /// checks of `g` and `g_root_sigma_neg`.
    pub fn read_from<R: Read>(reader: R, compress: Compress, validate: Validate) -> Result<Self> {
        Ok(Self::deserialize_with_mode(reader, compress, validate)?)
    }
}
