use super::{decrypt, EncryptingKey};
use crate::{traits::Decryptor, Result, RsaPrivateKeyMaterial};
use alloc::vec::Vec;
use zeroize::ZeroizeOnDrop;

/// Decryption key for PKCS#1 v1.5 decryption as described in [RFC8017 § 7.2].
///
/// [RFC8017 § 7.2]: https://datatracker.ietf.org/doc/html/rfc8017#section-7.2
#[derive(Debug, Clone, PartialEq)]
pub struct DecryptingKey {
    inner: RsaPrivateKeyMaterial,
}

impl DecryptingKey {
    /// Create a new decrypting key from an RSA private key.
    pub fn new(key: RsaPrivateKeyMaterial) -> Self {
        Self { inner: key }
    }

    /// Encrypting key for the public half of this key.
    pub fn encrypting_key(&self) -> EncryptingKey {
        EncryptingKey {
            inner: self.inner.to_public_key(),
        }
    }
}

impl Decryptor for DecryptingKey {
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        decrypt(&self.inner, ciphertext)
    }
}

impl ZeroizeOnDrop for DecryptingKey {}
