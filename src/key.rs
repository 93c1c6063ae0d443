use core::fmt;

use num_bigint::BigUint;
use num_traits::One;
use zeroize::Zeroize;

use crate::errors::{Error, Result};
use crate::traits::{PrivateKeyParts, PublicKeyParts};

/// Represents the public part of an RSA key.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct RsaPublicKeyMaterial {
    /// Modulus: product of prime numbers `p` and `q`
    n: BigUint,
    /// Public exponent: power to which a plaintext message is raised in
    /// order to encrypt it.
    e: BigUint,
}

/// Two-prime RSA private key in the CRT form of [RFC 3447 Appendix A.1.2].
///
/// The material is taken as decoded: nothing is checked beyond structure
/// unless [`RsaPrivateKeyMaterial::validate`] is called.
///
/// [RFC 3447 Appendix A.1.2]: https://tools.ietf.org/html/rfc3447#appendix-A.1.2
#[derive(Clone, PartialEq, Eq)]
pub struct RsaPrivateKeyMaterial {
    n: BigUint,
    e: BigUint,
    d: BigUint,
    p: BigUint,
    q: BigUint,
    /// D mod (P-1)
    dp: BigUint,
    /// D mod (Q-1)
    dq: BigUint,
    /// Q^-1 mod P
    qinv: BigUint,
}

/// RSA private key in the bare `(n, d)` form of [RFC 8017 § 3.2].
///
/// It carries neither the prime factors nor the public exponent, so the
/// public key cannot be recovered from it and decryption runs without CRT.
///
/// [RFC 8017 § 3.2]: https://datatracker.ietf.org/doc/html/rfc8017#section-3.2
#[derive(Clone, PartialEq, Eq)]
pub struct RsaExponentKey {
    n: BigUint,
    d: BigUint,
}

impl RsaPublicKeyMaterial {
    /// Create a new public key from its components.
    pub fn new(n: BigUint, e: BigUint) -> Self {
        Self { n, e }
    }
}

impl PublicKeyParts for RsaPublicKeyMaterial {
    fn n(&self) -> &BigUint {
        &self.n
    }

    fn e(&self) -> &BigUint {
        &self.e
    }
}

impl RsaPrivateKeyMaterial {
    /// Assembles a private key from its PKCS#1 components, in the order they
    /// appear in the `RSAPrivateKey` structure.
    #[allow(clippy::too_many_arguments)]
    pub fn from_components(
        n: BigUint,
        e: BigUint,
        d: BigUint,
        p: BigUint,
        q: BigUint,
        dp: BigUint,
        dq: BigUint,
        qinv: BigUint,
    ) -> Self {
        Self {
            n,
            e,
            d,
            p,
            q,
            dp,
            dq,
            qinv,
        }
    }

    /// Returns the modulus.
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// Returns the public exponent.
    pub fn e(&self) -> &BigUint {
        &self.e
    }

    /// Returns the private exponent.
    pub fn d(&self) -> &BigUint {
        &self.d
    }

    /// Returns the first prime factor.
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// Returns the second prime factor.
    pub fn q(&self) -> &BigUint {
        &self.q
    }

    /// Returns `d mod (p - 1)`.
    pub fn dp(&self) -> &BigUint {
        &self.dp
    }

    /// Returns `d mod (q - 1)`.
    pub fn dq(&self) -> &BigUint {
        &self.dq
    }

    /// Returns `q^-1 mod p`.
    pub fn qinv(&self) -> &BigUint {
        &self.qinv
    }

    /// Get the public key from the private key, computing the modulus as
    /// `p * q` and copying the stored public exponent.
    pub fn to_public_key(&self) -> RsaPublicKeyMaterial {
        RsaPublicKeyMaterial::new(&self.p * &self.q, self.e.clone())
    }

    /// Performs basic sanity checks on the key.
    /// Returns `Ok(())` if everything is good, otherwise an appropriate error.
    pub fn validate(&self) -> Result<()> {
        let one = BigUint::one();

        if self.p <= one || self.q <= one {
            return Err(Error::InvalidPrime);
        }

        if &self.p * &self.q != self.n {
            return Err(Error::InvalidModulus);
        }

        if self.e <= one {
            return Err(Error::InvalidExponent);
        }

        // Check that de ≡ 1 mod p-1 and mod q-1, and that the CRT exponents
        // are the reductions of d.
        let mut de = &self.d * &self.e;
        for (prime, exp) in [(&self.p, &self.dp), (&self.q, &self.dq)] {
            let prime_minus_one = prime - &one;
            // Every value is congruent to 1 mod 1, so p = 2 only constrains the CRT exponent.
            let de_ok = prime_minus_one.is_one() || &de % &prime_minus_one == one;
            if !de_ok || &self.d % &prime_minus_one != *exp {
                de.zeroize();
                return Err(Error::InvalidExponent);
            }
        }
        de.zeroize();

        if (&self.qinv * &self.q) % &self.p != one {
            return Err(Error::InvalidCoefficient);
        }

        Ok(())
    }
}

impl PrivateKeyParts for RsaPrivateKeyMaterial {
    fn n(&self) -> &BigUint {
        &self.n
    }

    fn d(&self) -> &BigUint {
        &self.d
    }

    fn public_exponent(&self) -> Option<&BigUint> {
        Some(&self.e)
    }

    fn primes(&self) -> Option<(&BigUint, &BigUint)> {
        Some((&self.p, &self.q))
    }

    fn dp(&self) -> Option<&BigUint> {
        Some(&self.dp)
    }

    fn dq(&self) -> Option<&BigUint> {
        Some(&self.dq)
    }

    fn qinv(&self) -> Option<&BigUint> {
        Some(&self.qinv)
    }
}

impl fmt::Debug for RsaPrivateKeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaPrivateKeyMaterial")
            .field("n", &self.n)
            .field("e", &self.e)
            .finish_non_exhaustive()
    }
}

impl Zeroize for RsaPrivateKeyMaterial {
    fn zeroize(&mut self) {
        self.d.zeroize();
        self.p.zeroize();
        self.q.zeroize();
        self.dp.zeroize();
        self.dq.zeroize();
        self.qinv.zeroize();
    }
}

impl Drop for RsaPrivateKeyMaterial {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl From<&RsaPrivateKeyMaterial> for RsaPublicKeyMaterial {
    fn from(private_key: &RsaPrivateKeyMaterial) -> Self {
        private_key.to_public_key()
    }
}

impl RsaExponentKey {
    /// Create a private key from its modulus and private exponent.
    pub fn new(n: BigUint, d: BigUint) -> Self {
        Self { n, d }
    }
}

impl PrivateKeyParts for RsaExponentKey {
    fn n(&self) -> &BigUint {
        &self.n
    }

    fn d(&self) -> &BigUint {
        &self.d
    }

    fn public_exponent(&self) -> Option<&BigUint> {
        None
    }

    fn primes(&self) -> Option<(&BigUint, &BigUint)> {
        None
    }

    fn dp(&self) -> Option<&BigUint> {
        None
    }

    fn dq(&self) -> Option<&BigUint> {
        None
    }

    fn qinv(&self) -> Option<&BigUint> {
        None
    }
}

impl fmt::Debug for RsaExponentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaExponentKey")
            .field("n", &self.n)
            .finish_non_exhaustive()
    }
}

impl Zeroize for RsaExponentKey {
    fn zeroize(&mut self) {
        self.d.zeroize();
    }
}

impl Drop for RsaExponentKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

/// Recovers the public key of a private key held in CRT form.
///
/// The modulus is rebuilt as `p * q` and the stored public exponent is
/// copied unchanged. Keys without prime factors or public exponent fail with
/// [`Error::UnsupportedKeyVariant`].
pub fn recover_public_key<K: PrivateKeyParts + ?Sized>(key: &K) -> Result<RsaPublicKeyMaterial> {
    let (p, q) = key
        .primes()
        .ok_or(Error::UnsupportedKeyVariant("no CRT components"))?;
    let e = key
        .public_exponent()
        .ok_or(Error::UnsupportedKeyVariant("no public exponent"))?;

    Ok(RsaPublicKeyMaterial::new(p * q, e.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::{FromPrimitive, ToPrimitive};

    fn uint(v: u64) -> BigUint {
        BigUint::from_u64(v).unwrap()
    }

    fn textbook_key() -> RsaPrivateKeyMaterial {
        RsaPrivateKeyMaterial::from_components(
            uint(3233),
            uint(17),
            uint(2753),
            uint(61),
            uint(53),
            uint(53),
            uint(49),
            uint(38),
        )
    }

    #[test]
    fn test_recover_public_key() {
        let private_key = textbook_key();
        let public_key = recover_public_key(&private_key).unwrap();

        assert_eq!(public_key.n().to_u64(), Some(3233));
        assert_eq!(public_key.e().to_u64(), Some(17));
        assert_eq!(public_key.size(), 2);
        assert_eq!(public_key, private_key.to_public_key());
        assert_eq!(public_key, RsaPublicKeyMaterial::from(&private_key));
    }

    #[test]
    fn test_recovered_modulus_comes_from_primes() {
        // A stored modulus that disagrees with p * q does not leak into the public key.
        let private_key = RsaPrivateKeyMaterial::from_components(
            uint(9999),
            uint(17),
            uint(2753),
            uint(61),
            uint(53),
            uint(53),
            uint(49),
            uint(38),
        );
        let public_key = recover_public_key(&private_key).unwrap();
        assert_eq!(public_key.n().to_u64(), Some(3233));
    }

    #[test]
    fn test_recover_from_exponent_key_is_unsupported() {
        let key = RsaExponentKey::new(uint(3233), uint(2753));
        assert_eq!(
            recover_public_key(&key),
            Err(Error::UnsupportedKeyVariant("no CRT components"))
        );
    }

    #[test]
    fn test_validate() {
        textbook_key().validate().unwrap();

        let with = |index: usize, value: u64| {
            let mut parts = [3233, 17, 2753, 61, 53, 53, 49, 38];
            parts[index] = value;
            RsaPrivateKeyMaterial::from_components(
                uint(parts[0]),
                uint(parts[1]),
                uint(parts[2]),
                uint(parts[3]),
                uint(parts[4]),
                uint(parts[5]),
                uint(parts[6]),
                uint(parts[7]),
            )
            .validate()
        };

        assert_eq!(with(0, 3234), Err(Error::InvalidModulus));
        assert_eq!(with(1, 1), Err(Error::InvalidExponent));
        assert_eq!(with(1, 19), Err(Error::InvalidExponent));
        assert_eq!(with(3, 1), Err(Error::InvalidPrime));
        assert_eq!(with(5, 52), Err(Error::InvalidExponent));
        assert_eq!(with(6, 48), Err(Error::InvalidExponent));
        assert_eq!(with(7, 37), Err(Error::InvalidCoefficient));
    }

    #[test]
    fn test_validate_even_prime() {
        // n = 2 * 5, e = 3, d = 3: de = 9 = 1 mod 4.
        let key = RsaPrivateKeyMaterial::from_components(
            uint(10),
            uint(3),
            uint(3),
            uint(2),
            uint(5),
            uint(0),
            uint(3),
            uint(1),
        );
        key.validate().unwrap();
    }

    #[test]
    fn test_debug_hides_private_components() {
        let rendered = format!("{:?}", textbook_key());
        assert!(rendered.starts_with("RsaPrivateKeyMaterial"));
        assert!(!rendered.contains("2753"));
    }
}
