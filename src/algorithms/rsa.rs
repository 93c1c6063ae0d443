//! Generic RSA implementation

use alloc::vec::Vec;
use num_bigint::BigUint;
use num_traits::Zero;
use zeroize::Zeroize;

use crate::algorithms::pad::{required_byte_length, uint_to_be_pad, uint_to_zeroizing_be_pad};
use crate::errors::{Error, Result};
use crate::traits::{PrivateKeyParts, PublicKeyParts};

/// ⚠️ Raw RSA encryption of `m` under `(n, e)`. No padding is performed.
///
/// Fails with [`Error::MessageTooLarge`] unless `m < n`.
///
/// # ☢️️ WARNING: HAZARDOUS API ☢️
///
/// Use this function with great care! Raw RSA should never be used without an appropriate padding
/// or signature scheme. See the [module-level documentation][crate::hazmat] for more information.
#[inline]
pub fn raw_encrypt(n: &BigUint, e: &BigUint, m: &BigUint) -> Result<BigUint> {
    if m >= n {
        return Err(Error::MessageTooLarge);
    }
    Ok(m.modpow(e, n))
}

/// ⚠️ Raw RSA decryption of `c` using the Chinese Remainder Theorem.
///
/// Computes
///
/// ```text
/// m1 = c^dP mod p
/// m2 = c^dQ mod q
/// h  = ((m1 - m2) mod p) * qInv mod p
/// m  = m2 + q * h
/// ```
///
/// which equals `c^d mod n` for a consistent key, without needing `d`.
///
/// # ☢️️ WARNING: HAZARDOUS API ☢️
///
/// Use this function with great care! Raw RSA should never be used without an appropriate padding
/// or signature scheme. See the [module-level documentation][crate::hazmat] for more information.
pub fn raw_decrypt_crt(
    n: &BigUint,
    p: &BigUint,
    q: &BigUint,
    dp: &BigUint,
    dq: &BigUint,
    qinv: &BigUint,
    c: &BigUint,
) -> Result<BigUint> {
    if c >= n {
        return Err(Error::MessageTooLarge);
    }
    if p.is_zero() || q.is_zero() {
        return Err(Error::InvalidPrime);
    }

    let mut m1 = c.modpow(dp, p);
    let mut m2 = c.modpow(dq, q);

    // m2 is reduced mod q, which may exceed p. Bring it into [0, p) first so
    // a single addition of p normalizes a negative difference.
    let mut m2p = &m2 % p;
    let mut h = if m1 >= m2p {
        &m1 - &m2p
    } else {
        &m1 + p - &m2p
    };
    h *= qinv;
    h %= p;

    let mut m = q * &h;
    m += &m2;

    m1.zeroize();
    m2.zeroize();
    m2p.zeroize();
    h.zeroize();

    Ok(m)
}

/// ⚠️ [`raw_encrypt`] over unsigned big-endian byte strings.
///
/// The ciphertext is left padded with zeros to [`required_byte_length`]`(n)`.
///
/// # ☢️️ WARNING: HAZARDOUS API ☢️
///
/// Use this function with great care! Raw RSA should never be used without an appropriate padding
/// or signature scheme. See the [module-level documentation][crate::hazmat] for more information.
pub fn raw_encrypt_bytes(n: &BigUint, e: &BigUint, message: &[u8]) -> Result<Vec<u8>> {
    let m = BigUint::from_bytes_be(message);
    let c = raw_encrypt(n, e, &m)?;
    uint_to_be_pad(c, required_byte_length(n))
}

/// ⚠️ [`raw_decrypt_crt`] over unsigned big-endian byte strings.
///
/// The plaintext is left padded with zeros to [`required_byte_length`]`(n)`.
///
/// # ☢️️ WARNING: HAZARDOUS API ☢️
///
/// Use this function with great care! Raw RSA should never be used without an appropriate padding
/// or signature scheme. See the [module-level documentation][crate::hazmat] for more information.
pub fn raw_decrypt_crt_bytes(
    n: &BigUint,
    p: &BigUint,
    q: &BigUint,
    dp: &BigUint,
    dq: &BigUint,
    qinv: &BigUint,
    ciphertext: &[u8],
) -> Result<Vec<u8>> {
    let c = BigUint::from_bytes_be(ciphertext);
    let m = raw_decrypt_crt(n, p, q, dp, dq, qinv, &c)?;
    uint_to_zeroizing_be_pad(m, required_byte_length(n))
}

/// ⚠️ Raw RSA encryption of m with the public key. No padding is performed.
///
/// # ☢️️ WARNING: HAZARDOUS API ☢️
///
/// Use this function with great care! Raw RSA should never be used without an appropriate padding
/// or signature scheme. See the [module-level documentation][crate::hazmat] for more information.
#[inline]
pub fn rsa_encrypt<K: PublicKeyParts + ?Sized>(key: &K, m: &BigUint) -> Result<BigUint> {
    raw_encrypt(key.n(), key.e(), m)
}

/// ⚠️ Performs raw RSA decryption with no padding or error checking.
///
/// Uses the CRT values when the key carries them and falls back to
/// `c^d mod n` for keys in the bare `(n, d)` form.
///
/// # ☢️️ WARNING: HAZARDOUS API ☢️
///
/// Use this function with great care! Raw RSA should never be used without an appropriate padding
/// or signature scheme. See the [module-level documentation][crate::hazmat] for more information.
pub fn rsa_decrypt<K: PrivateKeyParts + ?Sized>(priv_key: &K, c: &BigUint) -> Result<BigUint> {
    if c >= priv_key.n() {
        return Err(Error::MessageTooLarge);
    }

    match (
        priv_key.primes(),
        priv_key.dp(),
        priv_key.dq(),
        priv_key.qinv(),
    ) {
        (Some((p, q)), Some(dp), Some(dq), Some(qinv)) => {
            raw_decrypt_crt(priv_key.n(), p, q, dp, dq, qinv, c)
        }
        _ => Ok(c.modpow(priv_key.d(), priv_key.n())),
    }
}

/// ⚠️ Performs raw RSA decryption with no padding.
///
/// Afterwards `m^e mod n` is recomputed and compared with `c` to catch faults in
/// the CRT computation. Requires the key to carry its public exponent.
///
/// # ☢️️ WARNING: HAZARDOUS API ☢️
///
/// Use this function with great care! Raw RSA should never be used without an appropriate padding
/// or signature scheme. See the [module-level documentation][crate::hazmat] for more information.
pub fn rsa_decrypt_and_check<K: PrivateKeyParts + ?Sized>(
    priv_key: &K,
    c: &BigUint,
) -> Result<BigUint> {
    let e = priv_key
        .public_exponent()
        .ok_or(Error::UnsupportedKeyVariant("no public exponent"))?;

    let mut m = rsa_decrypt(priv_key, c)?;

    // A result outside [0, n) can only come from inconsistent key material.
    let consistent = match raw_encrypt(priv_key.n(), e, &m) {
        Ok(check) => c == &check,
        Err(_) => false,
    };
    if !consistent {
        log::warn!("RSA decryption result failed the re-encryption check");
        m.zeroize();
        return Err(Error::Internal);
    }

    Ok(m)
}
