// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025 SUSE LLC

//! PA-TNC attribute layer for the TCG Platform Trust Service (PTS)
//! protocol binding.
//!
//! An attribute is a typed, vendor-scoped unit of binary data exchanged
//! in one direction of an IF-M attestation handshake. Each attribute
//! serializes itself for sending ([`PaTncAttribute::build`]) and decodes
//! itself from received bytes ([`PaTncAttribute::process`]); the
//! message-framing layer above multiplexes attributes into protocol
//! messages and instantiates received ones through [`create_from_data`].
//!
//! Two attributes of the PTS binding are implemented: the Get
//! Attestation Identity Key request ([`GetAikAttr`]) and the Attestation
//! Identity Key response carrying an X.509 certificate or a naked public
//! key ([`AikAttr`]).

#![no_std]

extern crate alloc;

mod attr;
mod cred;
mod error;
mod pen;
mod wire;

pub use attr::{
    create_from_data, AikAttr, AikFlags, GetAikAttr, PaTncAttribute, ProcessError, PtsAttrType,
};
pub use cred::{AikCredential, AikKind, CredError};
pub use error::PtsAttrError;
pub use pen::Pen;
pub use wire::{ByteReader, ByteWriter, WireError};
