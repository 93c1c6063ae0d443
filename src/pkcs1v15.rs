//! PKCS#1 v1.5 encryption as described in [RFC8017 § 7.2].
//!
//! Composes the block type 2 padding with the raw RSA primitives. Decryption
//! uses the CRT values of the private key.
//!
//! [RFC8017 § 7.2]: https://datatracker.ietf.org/doc/html/rfc8017#section-7.2

mod decrypting_key;
mod encrypting_key;

pub use self::{decrypting_key::DecryptingKey, encrypting_key::EncryptingKey};

use alloc::vec::Vec;
use num_bigint::BigUint;
use rand_core::CryptoRngCore;
use zeroize::Zeroizing;

use crate::algorithms::pad::{uint_to_be_pad, uint_to_zeroizing_be_pad};
use crate::algorithms::pkcs1v15::{pad_type2, unpad_type2_with_min_ps};
use crate::algorithms::rsa::{rsa_decrypt_and_check, rsa_encrypt};
use crate::errors::{Error, Result};

/// Minimum number of non-zero padding bytes in an encryption block.
const MIN_PS_LEN: usize = 8;
use crate::traits::{PrivateKeyParts, PublicKeyParts};

/// Encrypts the given message with RSA and the padding
/// scheme from PKCS#1 v1.5. The message must be no longer than the length
/// of the public modulus minus 11 bytes.
pub fn encrypt<R, K>(rng: &mut R, pub_key: &K, msg: &[u8]) -> Result<Vec<u8>>
where
    R: CryptoRngCore + ?Sized,
    K: PublicKeyParts + ?Sized,
{
    let k = pub_key.size();
    if msg.len() + MIN_PS_LEN + 3 > k {
        return Err(Error::MessageTooLarge);
    }

    let em = pad_type2(rng, k, msg)?;
    let int = BigUint::from_bytes_be(&em);
    uint_to_be_pad(rsa_encrypt(pub_key, &int)?, k)
}

/// Decrypts a ciphertext using RSA and the padding scheme from PKCS#1 v1.5.
///
/// Note that whether this function returns an error or not discloses secret
/// information. If an attacker can cause this function to run repeatedly and
/// learn whether each instance returned an error then they can decrypt and
/// forge signatures as if they had the private key.
pub fn decrypt<K: PrivateKeyParts + ?Sized>(priv_key: &K, ciphertext: &[u8]) -> Result<Vec<u8>> {
    let k = priv_key.size();
    if ciphertext.len() != k {
        return Err(Error::Decryption);
    }

    let c = BigUint::from_bytes_be(ciphertext);
    let em = rsa_decrypt_and_check(priv_key, &c)?;
    let em = Zeroizing::new(uint_to_zeroizing_be_pad(em, k)?);

    unpad_type2_with_min_ps(&em, MIN_PS_LEN as u32)
}
