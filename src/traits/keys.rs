//! Traits related to the key components

use num_bigint::BigUint;

/// Components of an RSA public key.
pub trait PublicKeyParts {
    /// Returns the modulus of the key.
    fn n(&self) -> &BigUint;

    /// Returns the public exponent of the key.
    fn e(&self) -> &BigUint;

    /// Returns the modulus size in bytes. Raw signatures and ciphertexts for
    /// or by this public key will have the same size.
    fn size(&self) -> usize {
        crate::algorithms::pad::required_byte_length(self.n())
    }
}

/// Components of an RSA private key.
///
/// A private key is either in the CRT form, which carries the public exponent,
/// both primes and the CRT values, or in the bare `(n, d)` form, where only
/// the modulus and private exponent are known.
pub trait PrivateKeyParts {
    /// Returns the modulus of the key.
    fn n(&self) -> &BigUint;

    /// Returns the private exponent of the key.
    fn d(&self) -> &BigUint;

    /// Returns the public exponent, if the key form retains it.
    fn public_exponent(&self) -> Option<&BigUint>;

    /// Returns the prime factors `(p, q)`.
    fn primes(&self) -> Option<(&BigUint, &BigUint)>;

    /// Returns the precomputed dp value, D mod (P-1)
    fn dp(&self) -> Option<&BigUint>;

    /// Returns the precomputed dq value, D mod (Q-1)
    fn dq(&self) -> Option<&BigUint>;

    /// Returns the precomputed qinv value, Q^-1 mod P
    fn qinv(&self) -> Option<&BigUint>;

    /// Returns the modulus size in bytes.
    fn size(&self) -> usize {
        crate::algorithms::pad::required_byte_length(self.n())
    }
}
