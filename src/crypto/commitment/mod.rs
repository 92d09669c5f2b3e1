pub mod pedersen;

use crate::{error::Result, msm::MsmConfig};

pub trait CommitmentScheme {
    type Scalar;
    type Base;
    type Commitment;

    /// Commits to `values` under `committing_key`. The two must have the same length.
    fn commit(
        committing_key: &[Self::Base],
        values: &[Self::Scalar],
        config: &MsmConfig,
    ) -> Result<Self::Commitment>;
}

/// A commitment scheme whose commitments can be folded into one under a challenge.
pub trait BatchCommitmentScheme: CommitmentScheme {
    type Challenge;

    /// `Σ cⁱ·commitments[i]`
    fn aggregate(
        commitments: &[Self::Commitment],
        challenge: Self::Challenge,
        config: &MsmConfig,
    ) -> Result<Self::Commitment>;

    /// Scales the `i`-th value vector by `cⁱ` and concatenates them, so that committing to the
    /// result under the concatenated keys equals aggregating the individual commitments.
    fn scalar_aggregate<V: AsRef<[Self::Scalar]>>(
        values: &[V],
        challenge: Self::Challenge,
    ) -> ark_std::vec::Vec<Self::Scalar>;
}
