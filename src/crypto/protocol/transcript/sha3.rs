use super::TranscriptProtocol;
use ark_ff::{BigInteger, PrimeField};
use sha3::{Digest, Keccak256};

/// Keccak-256 transcript. Every squeeze hashes the pending bytes and keeps the resulting
/// challenge as the start of the next block, so later challenges depend on earlier ones.
#[derive(Clone)]
pub struct Keccak256Transcript {
    bytes: Vec<u8>,
}

impl TranscriptProtocol for Keccak256Transcript {
    fn new(domain: &'static [u8]) -> Self {
        Keccak256Transcript {
            bytes: domain.to_vec(),
        }
    }

    fn append(&mut self, label: &'static [u8], item: &[u8]) {
        self.bytes.extend_from_slice(label);
        self.bytes
            .extend_from_slice(&(item.len() as u64).to_le_bytes());
        self.bytes.extend_from_slice(item);
    }

    fn challenge_scalar<F: PrimeField>(&mut self, label: &'static [u8]) -> F {
        self.bytes.extend_from_slice(label);
        let mut hasher = Keccak256::new();
        hasher.update(&self.bytes);
        self.bytes.clear();
        let bytes = hasher.finalize().to_vec();
        let challenge = F::from_be_bytes_mod_order(&bytes);
        self.bytes.extend(challenge.into_bigint().to_bytes_be());
        challenge
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::Fr;

    #[test]
    fn same_messages_same_challenge() {
        let mut a = Keccak256Transcript::new(b"test");
        let mut b = Keccak256Transcript::new(b"test");
        a.append(b"m", b"hello");
        b.append(b"m", b"hello");
        assert_eq!(a.challenge_scalar::<Fr>(b"c"), b.challenge_scalar::<Fr>(b"c"));
    }

    #[test]
    fn challenge_depends_on_domain_and_order() {
        let mut a = Keccak256Transcript::new(b"one");
        let mut b = Keccak256Transcript::new(b"two");
        a.append(b"m", b"hello");
        b.append(b"m", b"hello");
        assert_ne!(a.challenge_scalar::<Fr>(b"c"), b.challenge_scalar::<Fr>(b"c"));

        let mut c = Keccak256Transcript::new(b"one");
        c.append(b"m", b"he");
        c.append(b"m", b"llo");
        let mut d = Keccak256Transcript::new(b"one");
        d.append(b"m", b"hel");
        d.append(b"m", b"lo");
        assert_ne!(c.challenge_scalar::<Fr>(b"c"), d.challenge_scalar::<Fr>(b"c"));
    }

    #[test]
    fn successive_challenges_differ() {
        let mut t = Keccak256Transcript::new(b"test");
        let first = t.challenge_scalar::<Fr>(b"c");
        let second = t.challenge_scalar::<Fr>(b"c");
        assert_ne!(first, second);
    }
}
