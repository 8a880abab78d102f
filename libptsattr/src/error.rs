// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025 SUSE LLC

// Functions private to a module may use the leaf error types defined
// next to them (WireError in wire, CredError in cred). Public attribute
// operations surface a PtsAttrError wrapping the leaf type, with a From
// conversion provided per leaf.

use core::fmt;

use crate::cred::CredError;
use crate::wire::WireError;

/// Errors raised while encoding or decoding PA-TNC attribute values.
#[derive(Debug)]
pub enum PtsAttrError {
    /// Attribute value ends before the attribute's fixed fields.
    InsufficientData,
    /// Attribute type code not implemented by this crate.
    UnsupportedType(u32),
    /// Truncated read from an attribute value.
    Wire(WireError),
    /// Certificate or public key blob failed encoding or decoding.
    Cred(CredError),
}

impl From<WireError> for PtsAttrError {
    fn from(err: WireError) -> Self {
        Self::Wire(err)
    }
}

impl From<CredError> for PtsAttrError {
    fn from(err: CredError) -> Self {
        Self::Cred(err)
    }
}

impl fmt::Display for PtsAttrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientData => {
                write!(f, "insufficient attribute data")
            }
            Self::UnsupportedType(code) => {
                write!(f, "unsupported PTS attribute type {code:#x}")
            }
            Self::Wire(err) => {
                write!(f, "{err}")
            }
            Self::Cred(err) => {
                write!(f, "{err}")
            }
        }
    }
}
