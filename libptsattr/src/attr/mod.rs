// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025 SUSE LLC

//! PA-TNC attributes of the PTS protocol binding.
//!
//! Every attribute implements the same contract towards the
//! message-framing layer: identity accessors, the noskip marker, and the
//! `build`/`process` pair that moves between semantic fields and the
//! canonical value bytes. Received attributes are instantiated through
//! [`create_from_data`], keyed by the `(vendor id, type)` pair of the
//! attribute envelope.

mod aik;
mod get_aik;

pub use aik::{AikAttr, AikFlags};
pub use get_aik::GetAikAttr;

use alloc::boxed::Box;
use core::fmt;

use crate::error::PtsAttrError;
use crate::pen::Pen;

/// PTS attribute type codes in the TCG namespace.
///
/// Only the codes implemented by this crate are enumerated; everything
/// else falls under the framing layer's skip policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum PtsAttrType {
    /// Request the peer's Attestation Identity Key.
    GetAik = 0x0a,
    /// Attestation Identity Key certificate or public key.
    Aik = 0x0b,
}

impl TryFrom<u32> for PtsAttrType {
    type Error = PtsAttrError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            x if x == Self::GetAik as u32 => Ok(Self::GetAik),
            x if x == Self::Aik as u32 => Ok(Self::Aik),
            _ => Err(PtsAttrError::UnsupportedType(value)),
        }
    }
}

/// Failure raised by [`PaTncAttribute::process`].
///
/// `offset` is the byte position the failure is attributed to. The PTS
/// family reports failures at attribute granularity only, so the offset
/// is always 0: the value could not be interpreted at all.
#[derive(Debug)]
pub struct ProcessError {
    /// What went wrong.
    pub error: PtsAttrError,
    /// Failure position inside the attribute value; always 0.
    pub offset: u32,
}

impl ProcessError {
    pub(crate) fn at_attr_start<E: Into<PtsAttrError>>(error: E) -> Self {
        Self {
            error: error.into(),
            offset: 0,
        }
    }
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (offset {})", self.error, self.offset)
    }
}

/// Common contract of PA-TNC attributes.
///
/// An attribute instance serves a single direction of one exchange: it
/// is constructed either empty for sending and populated via
/// [`build`](Self::build), or from received bytes and decoded via
/// [`process`](Self::process). Once built or successfully processed, the
/// value and the decoded fields are not modified again. Dropping an
/// attribute releases its value buffer and any held credential handle.
pub trait PaTncAttribute {
    /// Vendor namespace owning [`attr_type`](Self::attr_type).
    fn vendor_id(&self) -> Pen;

    /// Attribute type code within the vendor namespace.
    fn attr_type(&self) -> u32;

    /// Canonical encoded payload. Empty on the send side until
    /// [`build`](Self::build) has run.
    fn value(&self) -> &[u8];

    /// Whether the receiver must understand this attribute.
    fn noskip(&self) -> bool;

    /// Marks the attribute as mandatory to understand. The marker is
    /// carried in the message envelope, not in the attribute value.
    fn set_noskip(&mut self, noskip: bool);

    /// Serializes the semantic fields into the attribute value.
    ///
    /// Deterministic: repeated calls with unchanged fields produce
    /// byte-identical values.
    fn build(&mut self);

    /// Decodes the attribute value into semantic fields.
    ///
    /// Reads only from the value supplied at construction. Any length or
    /// content violation fails the whole attribute with a
    /// [`ProcessError`] at offset 0.
    fn process(&mut self) -> Result<(), ProcessError>;
}

/// Instantiates a received attribute from the `(vendor id, type)` pair
/// of its envelope and its raw value.
///
/// Returns `None` for vendor namespaces and type codes this crate does
/// not implement.
pub fn create_from_data(
    vendor_id: Pen,
    attr_type: u32,
    value: &[u8],
) -> Option<Box<dyn PaTncAttribute>> {
    if vendor_id != Pen::TCG {
        return None;
    }
    match PtsAttrType::try_from(attr_type).ok()? {
        PtsAttrType::GetAik => Some(Box::new(GetAikAttr::from_data(value))),
        PtsAttrType::Aik => Some(Box::new(AikAttr::from_data(value))),
    }
}
