// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025 SUSE LLC

//! Get Attestation Identity Key attribute.
//!
//! Asks the peer to present its AIK. The value is a single reserved
//! 32-bit big-endian field: written as zero on the send side, read and
//! ignored on the receive side.

use alloc::vec::Vec;

use super::{PaTncAttribute, ProcessError, PtsAttrType};
use crate::error::PtsAttrError;
use crate::pen::Pen;
use crate::wire::{ByteReader, ByteWriter};

/// Size of the reserved field.
const RESERVED_SIZE: usize = 4;
/// Value written into the reserved field.
const RESERVED: u32 = 0x0000_0000;

/// Capability request for the peer's Attestation Identity Key.
///
/// Carries no semantic data beyond its presence; any received bit
/// pattern in the reserved field is accepted.
#[derive(Debug, Default)]
pub struct GetAikAttr {
    /// Encoded attribute value.
    value: Vec<u8>,
    /// Mandatory-to-understand marker.
    noskip: bool,
}

impl GetAikAttr {
    /// Creates an empty attribute for the send path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a received attribute value for the receive path.
    pub fn from_data(data: &[u8]) -> Self {
        Self {
            value: data.to_vec(),
            noskip: false,
        }
    }
}

impl PaTncAttribute for GetAikAttr {
    fn vendor_id(&self) -> Pen {
        Pen::TCG
    }

    fn attr_type(&self) -> u32 {
        PtsAttrType::GetAik as u32
    }

    fn value(&self) -> &[u8] {
        &self.value
    }

    fn noskip(&self) -> bool {
        self.noskip
    }

    fn set_noskip(&mut self, noskip: bool) {
        self.noskip = noskip;
    }

    fn build(&mut self) {
        let mut writer = ByteWriter::new(RESERVED_SIZE);
        writer.write_u32(RESERVED);
        self.value = writer.into_vec();
    }

    fn process(&mut self) -> Result<(), ProcessError> {
        if self.value.len() < RESERVED_SIZE {
            log::warn!("insufficient data for Get Attestation Identity Key");
            return Err(ProcessError::at_attr_start(PtsAttrError::InsufficientData));
        }
        let mut reader = ByteReader::new(&self.value);
        // Reserved field carries no semantics; read and discard.
        let _reserved = reader.read_u32().map_err(ProcessError::at_attr_start)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_writes_four_zero_bytes() {
        let mut attr = GetAikAttr::new();
        assert!(attr.value().is_empty());
        attr.build();
        assert_eq!(attr.value(), &[0u8; 4][..]);
    }

    #[test]
    fn build_then_process_round_trips() {
        let mut sent = GetAikAttr::new();
        sent.build();

        let mut received = GetAikAttr::from_data(sent.value());
        assert!(received.process().is_ok());
    }

    #[test]
    fn process_rejects_short_values() {
        for len in 0..RESERVED_SIZE {
            let mut attr = GetAikAttr::from_data(&[0u8; RESERVED_SIZE][..len]);
            let err = attr.process().unwrap_err();
            assert_eq!(err.offset, 0);
            assert!(matches!(err.error, PtsAttrError::InsufficientData));
        }
    }

    #[test]
    fn process_accepts_any_reserved_content() {
        let mut attr = GetAikAttr::from_data(&[0xde, 0xad, 0xbe, 0xef]);
        assert!(attr.process().is_ok());
    }

    #[test]
    fn noskip_is_independent_of_encode_state() {
        let mut attr = GetAikAttr::new();
        assert!(!attr.noskip());
        attr.set_noskip(true);
        attr.build();
        assert!(attr.noskip());
        attr.set_noskip(false);
        assert!(!attr.noskip());
    }

    #[test]
    fn identity_accessors() {
        let attr = GetAikAttr::new();
        assert_eq!(attr.vendor_id(), Pen::TCG);
        assert_eq!(attr.attr_type(), 0x0a);
    }
}
