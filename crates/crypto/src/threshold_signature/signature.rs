//! Signature types for threshold signing.

use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use stakewell_primitives::Buf64;

use super::ThresholdSignatureError;

/// An individual ed25519 signature with its signer index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Arbitrary)]
pub struct IndexedSignature {
    /// Index of the signer in the ThresholdConfig keys array (0-255).
    index: u8,
    /// 64-byte ed25519 signature.
    signature: Buf64,
}

impl IndexedSignature {
    /// Create a new indexed signature.
    pub fn new(index: u8, signature: Buf64) -> Self {
        Self { index, signature }
    }

    /// Get the signer index.
    pub fn index(&self) -> u8 {
        self.index
    }

    /// Get the raw signature bytes.
    pub fn signature(&self) -> &Buf64 {
        &self.signature
    }
}

impl BorshSerialize for IndexedSignature {
    fn serialize<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
        self.index.serialize(writer)?;
        writer.write_all(self.signature.as_slice())
    }
}

impl BorshDeserialize for IndexedSignature {
    fn deserialize_reader<R: std::io::Read>(reader: &mut R) -> std::io::Result<Self> {
        let index = u8::deserialize_reader(reader)?;
        let mut signature = [0u8; 64];
        reader.read_exact(&mut signature)?;
        Ok(Self {
            index,
            signature: signature.into(),
        })
    }
}

/// A set of indexed ed25519 signatures for threshold verification.
///
/// Signatures are sorted by index and must not contain duplicates: one
/// owner slot can carry at most one signature, so stuffing a single
/// identity into multiple entries is rejected at aggregation time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SignatureSet {
    /// Sorted signatures by index, no duplicates.
    signatures: Vec<IndexedSignature>,
}

impl SignatureSet {
    /// Create a new signature set from a vector of indexed signatures.
    ///
    /// The signatures will be sorted by index and checked for duplicates.
    pub fn new(mut signatures: Vec<IndexedSignature>) -> Result<Self, ThresholdSignatureError> {
        signatures.sort_by_key(|s| s.index);

        for window in signatures.windows(2) {
            if window[0].index == window[1].index {
                return Err(ThresholdSignatureError::DuplicateSignerIndex(
                    window[0].index,
                ));
            }
        }

        Ok(Self { signatures })
    }

    /// Create an empty signature set.
    pub fn empty() -> Self {
        Self {
            signatures: Vec::new(),
        }
    }

    /// Get the signatures.
    pub fn signatures(&self) -> &[IndexedSignature] {
        &self.signatures
    }

    /// Get the number of signatures.
    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    /// Check if the signature set is empty.
    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    /// Iterate over signer indices.
    pub fn indices(&self) -> impl Iterator<Item = u8> + '_ {
        self.signatures.iter().map(|s| s.index)
    }

    /// Consume and return the inner signatures.
    pub fn into_inner(self) -> Vec<IndexedSignature> {
        self.signatures
    }
}

impl BorshSerialize for SignatureSet {
    fn serialize<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
        // Plain Vec encoding; the sorted/no-duplicate invariant is
        // re-validated on read.
        borsh::BorshSerialize::serialize(&self.signatures, writer)
    }
}

impl BorshDeserialize for SignatureSet {
    fn deserialize_reader<R: std::io::Read>(reader: &mut R) -> std::io::Result<Self> {
        let signatures = Vec::<IndexedSignature>::deserialize_reader(reader)?;
        SignatureSet::new(signatures)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }
}

impl<'a> Arbitrary<'a> for SignatureSet {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let signatures = Vec::<IndexedSignature>::arbitrary(u)?;
        SignatureSet::new(signatures).map_err(|_| arbitrary::Error::IncorrectFormat)
    }
}
