use std::convert::TryInto;

use byteorder::WriteBytesExt;
use num_enum::{IntoPrimitive, TryFromPrimitive};

use super::{decoder::read_u8, Decoder, Encoder};
use crate::error::{DecodeError, EncodeError};

/// Field-table value tags from the AMQP 0-9-1 grammar.
#[derive(Debug, TryFromPrimitive, IntoPrimitive, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TypeCode {
    Boolean = b't',
    ShortShortInt = b'b',
    ShortShortUint = b'B',
    ShortInt = b'U',
    ShortUint = b'u',
    LongInt = b'I',
    LongUint = b'i',
    LongLongInt = b'L',
    LongLongUint = b'l',
    Float = b'f',
    Double = b'd',
    Decimal = b'D',
    ShortString = b's',
    LongString = b'S',
    FieldArray = b'A',
    Timestamp = b'T',
    FieldTable = b'F',
    Void = b'V',
}

impl Encoder for TypeCode {
    fn encoded_size(&self) -> u32 {
        1
    }

    fn encode(&self, writer: &mut impl std::io::Write) -> Result<(), EncodeError> {
        let code: u8 = (*self).into();
        writer.write_u8(code)?;
        Ok(())
    }
}

impl Decoder for TypeCode {
    fn decode(input: &[u8]) -> Result<(&[u8], Self), DecodeError> {
        let (input, code) = read_u8(input)?;
        Ok((
            input,
            code.try_into()
                .map_err(|_| DecodeError::InvalidTypeCode(code))?,
        ))
    }
}
