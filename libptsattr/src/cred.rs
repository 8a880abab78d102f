// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025 SUSE LLC

//! Attestation Identity Key credentials.
//!
//! An AIK is presented either as a full X.509 certificate or as a naked
//! public key (a bare SubjectPublicKeyInfo). Parsing accepts PEM armor
//! or raw DER; encoding always produces canonical DER.

use alloc::vec::Vec;
use core::fmt;

use der::{Decode, DecodePem, Encode};
use spki::SubjectPublicKeyInfoOwned;
use x509_cert::Certificate;

/// Concrete kind of an AIK credential.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AikKind {
    /// AIK wrapped in an X.509 certificate.
    X509,
    /// AIK as a naked public key.
    NakedKey,
}

/// Errors raised by credential encoding and decoding.
#[derive(Debug)]
pub enum CredError {
    /// Blob is not a valid encoding of the requested credential kind.
    Decode(der::Error),
    /// Credential could not be serialized to DER.
    Encode(der::Error),
}

impl fmt::Display for CredError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode(err) => {
                write!(f, "credential decoding failed: {err}")
            }
            Self::Encode(err) => {
                write!(f, "credential encoding failed: {err}")
            }
        }
    }
}

/// An Attestation Identity Key: the credential a platform presents to
/// vouch for its attestation measurements.
///
/// Attributes hold credentials behind [`alloc::sync::Arc`]; dropping the
/// last handle releases the credential.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AikCredential {
    /// Full X.509 certificate.
    Certificate(Certificate),
    /// Bare SubjectPublicKeyInfo.
    NakedKey(SubjectPublicKeyInfoOwned),
}

impl AikCredential {
    pub fn kind(&self) -> AikKind {
        match self {
            Self::Certificate(_) => AikKind::X509,
            Self::NakedKey(_) => AikKind::NakedKey,
        }
    }

    /// Serializes the credential to its canonical DER form.
    pub fn to_blob(&self) -> Result<Vec<u8>, CredError> {
        let der = match self {
            Self::Certificate(cert) => cert.to_der(),
            Self::NakedKey(key) => key.to_der(),
        };
        der.map_err(CredError::Encode)
    }

    /// Parses `blob` as a credential of the requested kind.
    ///
    /// The blob may be PEM armored or raw DER. A failed parse constructs
    /// nothing.
    pub fn from_blob(kind: AikKind, blob: &[u8]) -> Result<Self, CredError> {
        match kind {
            AikKind::X509 => {
                let cert = if is_pem(blob) {
                    Certificate::from_pem(blob)
                } else {
                    Certificate::from_der(blob)
                };
                Ok(Self::Certificate(cert.map_err(CredError::Decode)?))
            }
            AikKind::NakedKey => {
                let key = if is_pem(blob) {
                    SubjectPublicKeyInfoOwned::from_pem(blob)
                } else {
                    SubjectPublicKeyInfoOwned::from_der(blob)
                };
                Ok(Self::NakedKey(key.map_err(CredError::Decode)?))
            }
        }
    }
}

fn is_pem(blob: &[u8]) -> bool {
    blob.starts_with(b"-----BEGIN")
}

#[cfg(test)]
mod tests {
    use super::*;
    use der::asn1::{BitString, ObjectIdentifier};
    use spki::AlgorithmIdentifierOwned;

    // id-ecPublicKey carrying an uncompressed dummy point.
    fn naked_key() -> AikCredential {
        let algorithm = AlgorithmIdentifierOwned {
            oid: ObjectIdentifier::new_unwrap("1.2.840.10045.2.1"),
            parameters: None,
        };
        let subject_public_key = BitString::from_bytes(&[0x04; 65]).unwrap();
        AikCredential::NakedKey(SubjectPublicKeyInfoOwned {
            algorithm,
            subject_public_key,
        })
    }

    #[test]
    fn naked_key_der_round_trip() {
        let key = naked_key();
        assert_eq!(key.kind(), AikKind::NakedKey);

        let blob = key.to_blob().unwrap();
        let parsed = AikCredential::from_blob(AikKind::NakedKey, &blob).unwrap();
        assert_eq!(parsed, key);
    }

    #[test]
    fn garbage_blob_is_rejected_for_both_kinds() {
        let garbage = [0xde, 0xad, 0xbe, 0xef];
        for kind in [AikKind::X509, AikKind::NakedKey] {
            let err = AikCredential::from_blob(kind, &garbage).unwrap_err();
            assert!(matches!(err, CredError::Decode(_)));
        }
    }

    #[test]
    fn empty_blob_is_rejected() {
        let err = AikCredential::from_blob(AikKind::X509, &[]).unwrap_err();
        assert!(matches!(err, CredError::Decode(_)));
    }

    #[test]
    fn pem_armor_with_bad_body_is_rejected() {
        let blob = b"-----BEGIN CERTIFICATE-----\nnot base64!\n-----END CERTIFICATE-----\n";
        let err = AikCredential::from_blob(AikKind::X509, blob).unwrap_err();
        assert!(matches!(err, CredError::Decode(_)));
    }

    #[test]
    fn spki_blob_is_not_a_certificate() {
        let blob = naked_key().to_blob().unwrap();
        let err = AikCredential::from_blob(AikKind::X509, &blob).unwrap_err();
        assert!(matches!(err, CredError::Decode(_)));
    }
}
