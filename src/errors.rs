//! Error types.

/// Alias for [`core::result::Result`] with the `rsa-material` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types
#[derive(Debug, Clone, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Structurally invalid DER: wrong tag, truncated content, missing field.
    MalformedEncoding(&'static str),

    /// The key is well formed but of a kind this crate does not handle.
    UnsupportedKeyVariant(&'static str),

    /// A negative integer was found where only non-negative values are valid.
    InvalidKeyEncoding,

    /// Input to a raw primitive is not smaller than the modulus.
    MessageTooLarge,

    /// Padded size leaves no room for the padding structure.
    InvalidPaddedSize,

    /// Decryption error.
    Decryption,

    /// Invalid modulus.
    InvalidModulus,

    /// Invalid prime value.
    InvalidPrime,

    /// Invalid exponent.
    InvalidExponent,

    /// Invalid coefficient.
    InvalidCoefficient,

    /// Internal error.
    Internal,

    /// PKCS#1 error.
    Pkcs1(pkcs1::Error),
}

impl core::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::MalformedEncoding(reason) => write!(f, "malformed DER encoding: {}", reason),
            Error::UnsupportedKeyVariant(reason) => write!(f, "unsupported key: {}", reason),
            Error::InvalidKeyEncoding => write!(f, "negative integer in key encoding"),
            Error::MessageTooLarge => write!(f, "message too large for modulus"),
            Error::InvalidPaddedSize => write!(f, "invalid padded size"),
            Error::Decryption => write!(f, "decryption error"),
            Error::InvalidModulus => write!(f, "invalid modulus"),
            Error::InvalidPrime => write!(f, "invalid prime value"),
            Error::InvalidExponent => write!(f, "invalid exponent"),
            Error::InvalidCoefficient => write!(f, "invalid coefficient"),
            Error::Internal => write!(f, "internal error"),
            Error::Pkcs1(err) => write!(f, "{}", err),
        }
    }
}

impl From<pkcs1::Error> for Error {
    fn from(err: pkcs1::Error) -> Error {
        Error::Pkcs1(err)
    }
}

impl From<pkcs1::der::Error> for Error {
    fn from(err: pkcs1::der::Error) -> Error {
        Error::Pkcs1(pkcs1::Error::Asn1(err))
    }
}
