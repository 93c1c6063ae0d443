//! PKCS#1 v1.5 encryption padding (block type 2) as described in
//! [RFC 2313 § 8.1] and [RFC8017 § 7.2].
//!
//! [RFC 2313 § 8.1]: https://datatracker.ietf.org/doc/html/rfc2313#section-8.1
//! [RFC8017 § 7.2]: https://datatracker.ietf.org/doc/html/rfc8017#section-7.2

use alloc::vec::Vec;
use rand_core::CryptoRngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, ConstantTimeGreater};
use zeroize::Zeroizing;

use crate::errors::{Error, Result};

/// Number of random bytes drawn from the randomness source at a time while
/// building the padding string.
pub const RANDOM_BATCH_LEN: usize = 64;

/// A padded encryption block. Zeroized on drop.
pub type PaddedBlock = Zeroizing<Vec<u8>>;

/// Fills the provided slice with random values, which are guaranteed
/// to not be zero.
///
/// Random bytes are drawn in batches of [`RANDOM_BATCH_LEN`]. The batch is
/// refilled when it runs out or when the byte at the scan position is zero.
fn non_zero_random_bytes<R: CryptoRngCore + ?Sized>(rng: &mut R, data: &mut [u8]) {
    let mut batch = Zeroizing::new([0u8; RANDOM_BATCH_LEN]);
    let mut pos = RANDOM_BATCH_LEN;

    for el in data {
        loop {
            if pos == RANDOM_BATCH_LEN {
                rng.fill_bytes(&mut batch[..]);
                pos = 0;
            }
            let b = batch[pos];
            if b == 0 {
                pos = RANDOM_BATCH_LEN;
                continue;
            }
            pos += 1;
            *el = b;
            break;
        }
    }
}

/// Builds an encryption block of exactly `padded_size` bytes around `data`:
///
/// ```text
/// EM = 0x00 || 0x02 || PS || 0x00 || data
/// ```
///
/// where `PS` holds non-zero bytes drawn from `rng`. Fails with
/// [`Error::InvalidPaddedSize`] unless `padded_size > data.len() + 4`.
pub fn pad_type2<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    padded_size: usize,
    data: &[u8],
) -> Result<PaddedBlock> {
    if padded_size <= data.len() + 4 {
        return Err(Error::InvalidPaddedSize);
    }

    let separator = padded_size - data.len() - 1;
    let mut em = Zeroizing::new(vec![0u8; padded_size]);
    em[1] = 2;
    non_zero_random_bytes(rng, &mut em[2..separator]);
    em[separator] = 0;
    em[separator + 1..].copy_from_slice(data);
    Ok(em)
}

/// Removes block type 2 padding and returns the trailing data.
///
/// Whether this function returns an error or not discloses secret
/// information about the block. The scan over the block itself runs in
/// constant time.
pub fn unpad_type2(em: &[u8]) -> Result<Vec<u8>> {
    unpad_type2_with_min_ps(em, 1)
}

/// Like [`unpad_type2`], but requires at least `min_ps` padding bytes.
pub(crate) fn unpad_type2_with_min_ps(em: &[u8], min_ps: u32) -> Result<Vec<u8>> {
    let (valid, index) = decrypt_inner(em, min_ps)?;
    if valid == 0 {
        return Err(Error::Decryption);
    }

    Ok(em[index as usize..].to_vec())
}

/// Returns one or zero in valid that indicates whether the block was correctly
/// structured, and the index of the data in em when it was.
#[inline]
fn decrypt_inner(em: &[u8], min_ps: u32) -> Result<(u8, u32)> {
    if em.len() < 4 {
        return Err(Error::Decryption);
    }

    let first_byte_is_zero = em[0].ct_eq(&0u8);
    let second_byte_is_two = em[1].ct_eq(&2u8);

    // The remainder of the block must be a string of non-zero random
    // octets, followed by a 0, followed by the data.
    //   looking_for_index: 1 iff we are still looking for the zero.
    //   index: the offset of the first zero byte.
    let mut looking_for_index = 1u8;
    let mut index = 0u32;

    for (i, el) in em.iter().enumerate().skip(2) {
        let equals0 = el.ct_eq(&0u8);
        index.conditional_assign(&(i as u32), Choice::from(looking_for_index) & equals0);
        looking_for_index.conditional_assign(&0u8, equals0);
    }

    // The separator follows at least min_ps padding bytes.
    let valid_ps = index.ct_gt(&(min_ps + 1));
    let valid =
        first_byte_is_zero & second_byte_is_two & Choice::from(!looking_for_index & 1) & valid_ps;
    index = u32::conditional_select(&0, &(index + 1), valid);

    Ok((valid.unwrap_u8(), index))
}
