#![feature(test)]

extern crate test;

use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
use rsa_material::{decode_pkcs1_private_key, hazmat, pkcs1v15, BigUint, RsaPrivateKeyMaterial};
use test::Bencher;

const PRIVATE_KEY_DER: &[u8] = include_bytes!("../tests/keys/rsa1024-priv.der");

fn get_key() -> RsaPrivateKeyMaterial {
    decode_pkcs1_private_key(PRIVATE_KEY_DER).unwrap()
}

#[bench]
fn bench_decode_pkcs1(b: &mut Bencher) {
    b.iter(|| {
        let key = decode_pkcs1_private_key(PRIVATE_KEY_DER).unwrap();
        test::black_box(key);
    });
}

#[bench]
fn bench_raw_decrypt_crt(b: &mut Bencher) {
    let key = get_key();
    let c = BigUint::from_bytes_be(b"bench");
    b.iter(|| {
        let m = hazmat::raw_decrypt_crt(key.n(), key.p(), key.q(), key.dp(), key.dq(), key.qinv(), &c)
            .unwrap();
        test::black_box(m);
    });
}

#[bench]
fn bench_raw_decrypt_direct(b: &mut Bencher) {
    let key = get_key();
    let c = BigUint::from_bytes_be(b"bench");
    b.iter(|| {
        let m = c.modpow(key.d(), key.n());
        test::black_box(m);
    });
}

#[bench]
fn bench_pad_type2(b: &mut Bencher) {
    let mut rng = ChaCha8Rng::from_seed([42; 32]);
    b.iter(|| {
        let em = hazmat::pad_type2(&mut rng, 256, b"0123456789abcdef").unwrap();
        test::black_box(em);
    });
}

#[bench]
fn bench_pkcs1v15_encrypt(b: &mut Bencher) {
    let mut rng = ChaCha8Rng::from_seed([42; 32]);
    let public_key = get_key().to_public_key();
    b.iter(|| {
        let c = pkcs1v15::encrypt(&mut rng, &public_key, b"testing").unwrap();
        test::black_box(c);
    });
}
