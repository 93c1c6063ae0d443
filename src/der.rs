//! Minimal DER reader for the PKCS#1 key structures.
//!
//! A [`Reader`] is a cursor over a borrowed byte slice. Each call to
//! [`Reader::read_object`] yields one tag/length/value triple as a [`Node`]
//! whose content borrows from the original buffer, so nested structures are
//! walked without copying key material.

use num_bigint::{BigInt, BigUint, IntoBigUint};

use crate::errors::{Error, Result};

const CONSTRUCTED: u8 = 1 << 5;

/// Universal tag number of an `INTEGER`.
pub const INTEGER: u8 = 0x02;

/// Tag byte of a `SEQUENCE` (universal tag 16, constructed).
pub const SEQUENCE: u8 = CONSTRUCTED | 0x10;

/// Classification of a DER tag byte.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Tag {
    /// `SEQUENCE` / `SEQUENCE OF`.
    Sequence,
    /// `INTEGER`.
    Integer,
    /// Any other single-byte tag, kept verbatim.
    Other(u8),
}

impl From<u8> for Tag {
    fn from(byte: u8) -> Self {
        match byte {
            SEQUENCE => Tag::Sequence,
            INTEGER => Tag::Integer,
            other => Tag::Other(other),
        }
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        match tag {
            Tag::Sequence => SEQUENCE,
            Tag::Integer => INTEGER,
            Tag::Other(byte) => byte,
        }
    }
}

/// One decoded DER value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Node<'a> {
    tag: Tag,
    content: &'a [u8],
}

impl<'a> Node<'a> {
    /// Tag of this value.
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Content octets, without the tag and length header.
    pub fn content(&self) -> &'a [u8] {
        self.content
    }

    /// A reader bounded to the content of this node, if it is a `SEQUENCE`.
    pub fn child_reader(&self) -> Option<Reader<'a>> {
        match self.tag {
            Tag::Sequence => Some(Reader::new(self.content)),
            _ => None,
        }
    }

    /// Interprets the content as a big-endian two's-complement `INTEGER`.
    pub fn to_bigint(&self) -> Result<BigInt> {
        if self.tag != Tag::Integer {
            return Err(Error::MalformedEncoding("expected integer"));
        }
        if self.content.is_empty() {
            return Err(Error::MalformedEncoding("empty integer"));
        }
        Ok(BigInt::from_signed_bytes_be(self.content))
    }

    /// Interprets the content as an `INTEGER` that must not be negative.
    pub fn to_biguint(&self) -> Result<BigUint> {
        self.to_bigint()?
            .into_biguint()
            .ok_or(Error::InvalidKeyEncoding)
    }
}

/// Cursor over a DER byte string.
#[derive(Clone, Debug)]
pub struct Reader<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    /// Starts reading at the beginning of `input`.
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    /// Returns `true` once all bytes have been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos == self.input.len()
    }

    /// Number of bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.input.len() - self.pos
    }

    /// Reads the next tag/length/value triple.
    pub fn read_object(&mut self) -> Result<Node<'a>> {
        let tag = self.read_byte()?;
        if (tag & 0x1F) == 0x1F {
            // High tag number form is not used by any structure read here.
            return Err(Error::MalformedEncoding("high tag number form"));
        }

        let length = self.read_length()?;
        let content = self.read_bytes(length)?;
        Ok(Node {
            tag: Tag::from(tag),
            content,
        })
    }

    /// Reads the next value and requires it to carry `tag`.
    pub fn expect(&mut self, tag: Tag) -> Result<Node<'a>> {
        let node = self.read_object()?;
        if node.tag != tag {
            return Err(Error::MalformedEncoding("unexpected tag"));
        }
        Ok(node)
    }

    // If the high order bit of the first byte is clear, the length is encoded
    // in the seven remaining bits. Otherwise those bits count the length bytes
    // that follow.
    fn read_length(&mut self) -> Result<usize> {
        let first = self.read_byte()?;
        if first & 0x80 == 0 {
            return Ok(usize::from(first));
        }

        let count = usize::from(first & 0x7F);
        if count == 0 {
            return Err(Error::MalformedEncoding("indefinite length"));
        }
        if count > core::mem::size_of::<usize>() {
            return Err(Error::MalformedEncoding("length too large"));
        }

        let mut length = 0usize;
        for &b in self.read_bytes(count)? {
            length = (length << 8) | usize::from(b);
        }
        Ok(length)
    }

    fn read_byte(&mut self) -> Result<u8> {
        let b = *self
            .input
            .get(self.pos)
            .ok_or(Error::MalformedEncoding("truncated"))?;
        self.pos += 1;
        Ok(b)
    }

    fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        if len > self.remaining() {
            return Err(Error::MalformedEncoding("truncated"));
        }
        let bytes = &self.input[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }
}
