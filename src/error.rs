use std::string::FromUtf8Error;

use crate::schema::FieldType;
use crate::types::MethodKey;

#[derive(Debug)]
pub enum DecodeError {
    Truncated(usize),
    TrailingBytes(usize),
    UnknownMethod(MethodKey),
    MethodMismatch {
        declared: MethodKey,
        payload: MethodKey,
    },
    InvalidTypeCode(u8),
    InvalidTimestamp(u64),
    Utf8Error(FromUtf8Error),
    Field {
        method: &'static str,
        field: &'static str,
        source: Box<DecodeError>,
    },
}

impl DecodeError {
    pub(crate) fn in_field(self, method: &'static str, field: &'static str) -> DecodeError {
        DecodeError::Field {
            method,
            field,
            source: Box::new(self),
        }
    }

    /// True if the failure was a buffer underrun, looking through the
    /// method/field context wrapper.
    pub fn is_truncated(&self) -> bool {
        match self {
            DecodeError::Truncated(_) => true,
            DecodeError::Field { source, .. } => source.is_truncated(),
            _ => false,
        }
    }
}

impl From<FromUtf8Error> for DecodeError {
    fn from(err: FromUtf8Error) -> Self {
        DecodeError::Utf8Error(err)
    }
}

#[derive(Debug)]
pub enum EncodeError {
    Io(std::io::Error),
    StringTooLong(usize),
    TypeMismatch {
        field: &'static str,
        expected: FieldType,
    },
    ArityMismatch {
        expected: usize,
        actual: usize,
    },
}

impl From<std::io::Error> for EncodeError {
    fn from(err: std::io::Error) -> Self {
        EncodeError::Io(err)
    }
}

#[derive(Debug, PartialEq)]
pub enum RegistrationError {
    DuplicateKey(MethodKey),
    InvalidResponseSet(MethodKey),
}

#[derive(Debug, PartialEq)]
pub enum ProtocolViolation {
    UnexpectedResponse {
        expected: &'static [MethodKey],
        actual: MethodKey,
    },
    PendingResponse(MethodKey),
}
