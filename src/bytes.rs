//! Raw byte runs handed out by [`crate::BinaryReader::read_bytes`].

use std::ops::Deref;

/// An immutable, owned run of bytes copied out of the reader's buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ByteSequence(Vec<u8>);

impl ByteSequence {
    /// number of bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// true if there are no bytes
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// view as a slice
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// give up the underlying vector
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for ByteSequence {
    fn from(bytes: Vec<u8>) -> Self {
        ByteSequence(bytes)
    }
}

impl From<&[u8]> for ByteSequence {
    fn from(bytes: &[u8]) -> Self {
        ByteSequence(bytes.to_vec())
    }
}

impl Deref for ByteSequence {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for ByteSequence {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl IntoIterator for ByteSequence {
    type Item = u8;
    type IntoIter = std::vec::IntoIter<u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ByteSequence {
    type Item = &'a u8;
    type IntoIter = std::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
