//! The hash function plugged into root construction.

/// A one-shot digest function supplied by the caller.
///
/// Every call must return a digest of the same fixed length for a given
/// implementation, and equal inputs must produce equal digests. The tree
/// never inspects the digest beyond concatenating and comparing it.
///
/// Taking `&mut self` lets stateful hashers reuse internal buffers between
/// calls; it also means one instance cannot serve two builds at once.
///
/// Any `FnMut(&[u8]) -> Result<Vec<u8>, E>` closure is a `DigestHasher`.
pub trait DigestHasher {
    /// Failure raised by the underlying hash function. Returned to the
    /// caller unchanged.
    type Error;

    /// Digest `data`.
    fn digest(&mut self, data: &[u8]) -> Result<Vec<u8>, Self::Error>;
}

impl<F, E> DigestHasher for F
where
    F: FnMut(&[u8]) -> Result<Vec<u8>, E>,
{
    type Error = E;

    fn digest(&mut self, data: &[u8]) -> Result<Vec<u8>, E> {
        self(data)
    }
}

/// Plain (untagged) Blake3 with 32-byte digests.
#[cfg(feature = "blake3")]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Blake3Hasher;

#[cfg(feature = "blake3")]
impl DigestHasher for Blake3Hasher {
    type Error = core::convert::Infallible;

    fn digest(&mut self, data: &[u8]) -> Result<Vec<u8>, Self::Error> {
        Ok(blake3::hash(data).as_bytes().to_vec())
    }
}
