pub mod crypto;
pub mod error;
pub mod msm;
pub mod pok;
pub mod utils;

pub use error::{Error, Result};
pub use msm::MsmConfig;
pub use pok::{
    Commitment, KnowledgeProof, PedersenPoK, PreparedVerifyingKey, ProvingKey, SetupConfig,
    VerifyingKey,
};

#[macro_use]
extern crate ark_std;

#[cfg(test)]
mod tests;
