//! RSA-related trait definitions.

mod encryption;
pub(crate) mod keys;

pub use encryption::{Decryptor, RandomizedEncryptor};
pub use keys::{PrivateKeyParts, PublicKeyParts};
