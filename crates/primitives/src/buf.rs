//! Fixed-size byte buffers used for hashes, keys and signatures.

use std::fmt;

macro_rules! impl_buf {
    ($name:ident, $len:expr) => {
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            arbitrary::Arbitrary,
            borsh::BorshSerialize,
            borsh::BorshDeserialize,
        )]
        pub struct $name(pub [u8; $len]);

        impl $name {
            pub const LEN: usize = $len;

            pub fn new(data: [u8; $len]) -> Self {
                Self(data)
            }

            pub fn zero() -> Self {
                Self([0; $len])
            }

            pub fn is_zero(&self) -> bool {
                self.0.iter().all(|b| *b == 0)
            }

            pub fn as_slice(&self) -> &[u8] {
                &self.0
            }

            pub fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::zero()
            }
        }

        impl From<[u8; $len]> for $name {
            fn from(data: [u8; $len]) -> Self {
                Self(data)
            }
        }

        impl From<$name> for [u8; $len] {
            fn from(buf: $name) -> Self {
                buf.0
            }
        }

        impl AsRef<[u8; $len]> for $name {
            fn as_ref(&self) -> &[u8; $len] {
                &self.0
            }
        }

        impl TryFrom<&[u8]> for $name {
            type Error = std::array::TryFromSliceError;

            fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
                <[u8; $len]>::try_from(value).map(Self)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&hex::encode(self.0))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                // Truncated to the first and last 4 bytes for log readability.
                write!(
                    f,
                    "{}..{}",
                    hex::encode(&self.0[..4]),
                    hex::encode(&self.0[$len - 4..])
                )
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                if serializer.is_human_readable() {
                    serializer.serialize_str(&hex::encode(self.0))
                } else {
                    serializer.serialize_bytes(&self.0)
                }
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
                let bytes = if d.is_human_readable() {
                    let s = <String as serde::Deserialize>::deserialize(d)?;
                    hex::decode(&s).map_err(serde::de::Error::custom)?
                } else {
                    <Vec<u8> as serde::Deserialize>::deserialize(d)?
                };
                let arr: [u8; $len] = bytes
                    .try_into()
                    .map_err(|_| serde::de::Error::custom(concat!("expected ", $len, " bytes")))?;
                Ok(Self(arr))
            }
        }
    };
}

impl_buf!(Buf32, 32);
impl_buf!(Buf64, 64);
