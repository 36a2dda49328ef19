//! Error types for the protocol codec and the object registry.

use thiserror::Error;

use crate::types::DataType;

/// Errors from encoding or decoding payload values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValueError {
    /// The value does not fit the wire representation of its data type.
    #[error("value does not fit data type {0}")]
    EncodeOverflow(DataType),

    /// The data type has no wire encoding (composites and UNKNOWN).
    #[error("data type {0} cannot be encoded")]
    EncodeUnsupported(DataType),

    /// The payload is shorter than the data type requires.
    #[error("payload too short for {data_type}: got {len} bytes")]
    DecodeShort { data_type: DataType, len: usize },

    /// The payload violates the structural invariants of its data type.
    #[error("malformed {data_type} payload: {reason}")]
    DecodeMalformed {
        data_type: DataType,
        reason: &'static str,
    },

    /// A string payload contains bytes outside the ASCII range.
    #[error("string payload is not valid ASCII")]
    DecodeBadUtf8,

    /// The data type has no wire decoding (UNKNOWN).
    #[error("data type {0} cannot be decoded")]
    DecodeUnsupported(DataType),
}

/// Errors from the frame encoder and decoder.
///
/// Decoder errors carry the number of bytes consumed from the most recent
/// `consume` call, so the caller can skip exactly those bytes and feed the
/// remainder into a fresh decoder.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FrameError {
    /// The payload does not fit the frame's length field.
    #[error("payload of {len} bytes exceeds the length field")]
    EncodeOverflow { len: usize },

    /// The received checksum disagrees with the one calculated over the body.
    #[error("CRC mismatch: received {received:#06X}, calculated {calculated:#06X}")]
    CrcMismatch {
        received: u16,
        calculated: u16,
        consumed: usize,
    },

    /// The command byte is outside the known set.
    #[error("invalid command byte {command:#04X}")]
    InvalidCommand { command: u8, consumed: usize },

    /// The frame is a vendor extension, which cannot be parsed.
    #[error("extension frames are not parseable")]
    Extension { consumed: usize },

    /// The decoder buffered more data than the frame length allows. This
    /// indicates a parser bug and should be reported.
    #[error("parser overshot the frame boundary")]
    LengthExceeded { consumed: usize },
}

impl FrameError {
    /// Byte position within the most recent `consume` call at which the
    /// error was detected; 0 for encoder errors.
    pub fn consumed_bytes(&self) -> usize {
        match self {
            FrameError::EncodeOverflow { .. } => 0,
            FrameError::CrcMismatch { consumed, .. }
            | FrameError::InvalidCommand { consumed, .. }
            | FrameError::Extension { consumed }
            | FrameError::LengthExceeded { consumed } => *consumed,
        }
    }
}

/// Errors from registry construction and lookup.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    /// No descriptor with the given object id.
    #[error("unknown object id {0:#010X}")]
    UnknownId(u32),

    /// No descriptor with the given name.
    #[error("unknown object name '{0}'")]
    UnknownName(String),

    /// Two descriptors share an object id.
    #[error("duplicate object id {id:#010X}: '{first}' and '{second}'")]
    DuplicateId {
        id: u32,
        first: &'static str,
        second: &'static str,
    },

    /// Two descriptors share a name.
    #[error("duplicate object name '{0}'")]
    DuplicateName(&'static str),

    /// An ENUM request type paired with a non-ENUM response type.
    #[error("'{name}' pairs an ENUM request with response type {response}")]
    EnumResponseMismatch {
        name: &'static str,
        response: DataType,
    },

    /// An enum mapping attached to a non-ENUM descriptor.
    #[error("'{0}' carries an enum mapping but is not an ENUM")]
    UnexpectedEnumMap(&'static str),

    /// The queried object has no mapping for the given enum code.
    #[error("'{name}' has no enum mapping for code {code}")]
    UnknownEnumCode { name: &'static str, code: u8 },
}
