// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025 SUSE LLC

//! Attestation Identity Key attribute.
//!
//! Carries the AIK credential itself: one flags byte followed by the
//! certificate or naked public key blob. Bit 7 of the flags byte selects
//! the blob's kind; all remaining bytes of the value belong to the blob.

use alloc::sync::Arc;
use alloc::vec::Vec;

use bitflags::bitflags;

use super::{PaTncAttribute, ProcessError, PtsAttrType};
use crate::cred::{AikCredential, AikKind};
use crate::error::PtsAttrError;
use crate::pen::Pen;
use crate::wire::{ByteReader, ByteWriter};

/// Size of the fixed flags field.
const FLAGS_SIZE: usize = 1;

bitflags! {
    /// Flags field of the AIK attribute value.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct AikFlags: u8 {
        /// Payload is a naked public key instead of an X.509
        /// certificate.
        const NAKED_KEY = 1 << 7;
    }
}

/// Attestation Identity Key certificate or public key.
#[derive(Debug)]
pub struct AikAttr {
    /// Encoded attribute value.
    value: Vec<u8>,
    /// Mandatory-to-understand marker.
    noskip: bool,
    /// The carried credential. `None` on the receive side until
    /// [`process`](PaTncAttribute::process) succeeds.
    aik: Option<Arc<AikCredential>>,
}

impl AikAttr {
    /// Creates an attribute carrying `aik` for the send path.
    pub fn new(aik: Arc<AikCredential>) -> Self {
        Self {
            value: Vec::new(),
            noskip: false,
            aik: Some(aik),
        }
    }

    /// Wraps a received attribute value for the receive path.
    pub fn from_data(data: &[u8]) -> Self {
        Self {
            value: data.to_vec(),
            noskip: false,
            aik: None,
        }
    }

    /// The carried credential, once known.
    ///
    /// `Some` after send-side construction or a successful
    /// [`process`](PaTncAttribute::process); `None` otherwise.
    pub fn aik(&self) -> Option<&Arc<AikCredential>> {
        self.aik.as_ref()
    }
}

impl PaTncAttribute for AikAttr {
    fn vendor_id(&self) -> Pen {
        Pen::TCG
    }

    fn attr_type(&self) -> u32 {
        PtsAttrType::Aik as u32
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
        let mut flags = AikFlags::empty();
        let mut blob = Vec::new();

        if let Some(aik) = &self.aik {
            if aik.kind() == AikKind::NakedKey {
                flags |= AikFlags::NAKED_KEY;
            }
            match aik.to_blob() {
                Ok(encoded) => blob = encoded,
                Err(err) => {
                    // An AIK that fails to encode still produces a
                    // well-formed value: the flags byte with an empty
                    // blob.
                    // TODO: decide whether an encoding failure should
                    // fail build() instead of sending an empty blob.
                    log::warn!("encoding of Attestation Identity Key failed: {err}");
                }
            }
        }

        let mut writer = ByteWriter::new(FLAGS_SIZE + blob.len());
        writer.write_u8(flags.bits());
        writer.write_data(&blob);
        self.value = writer.into_vec();
    }

    fn process(&mut self) -> Result<(), ProcessError> {
        if self.value.len() < FLAGS_SIZE {
            log::warn!("insufficient data for Attestation Identity Key");
            return Err(ProcessError::at_attr_start(PtsAttrError::InsufficientData));
        }
        let mut reader = ByteReader::new(&self.value);
        let flags = AikFlags::from_bits_retain(
            reader.read_u8().map_err(ProcessError::at_attr_start)?,
        );
        let blob = reader
            .read_data(reader.remaining())
            .map_err(ProcessError::at_attr_start)?;

        let kind = if flags.contains(AikFlags::NAKED_KEY) {
            AikKind::NakedKey
        } else {
            AikKind::X509
        };
        let aik = AikCredential::from_blob(kind, blob).map_err(|err| {
            log::warn!("Attestation Identity Key parse failure: {err}");
            ProcessError::at_attr_start(err)
        })?;
        self.aik = Some(Arc::new(aik));
        Ok(())
    }
}
