use std::io::Write;

use derive_more::{From, TryInto};

use crate::codec::decoder::{read_u16, read_u32, read_u64, read_u8};
use crate::codec::{Decoder, Encoder};
use crate::error::{DecodeError, EncodeError};
use crate::schema::FieldType;
use crate::table::FieldTable;
use crate::types::{LongString, ShortString, Timestamp, SHORT_STRING_MAX};
use crate::utils::TupleMapperSecond;

/// One method field value, tagged with its wire type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, From, TryInto)]
#[try_into(owned, ref, ref_mut)]
pub enum FieldValue {
    Bit(bool),
    Octet(u8),
    ShortInt(u16),
    LongInt(u32),
    LongLongInt(u64),
    ShortString(ShortString),
    LongString(LongString),
    Timestamp(Timestamp),
    Table(FieldTable),
}

impl From<&str> for FieldValue {
    fn from(string: &str) -> Self {
        FieldValue::ShortString(string.into())
    }
}

impl FieldValue {
    pub fn kind(&self) -> FieldType {
        match self {
            FieldValue::Bit(_) => FieldType::Bit,
            FieldValue::Octet(_) => FieldType::Octet,
            FieldValue::ShortInt(_) => FieldType::ShortInt,
            FieldValue::LongInt(_) => FieldType::LongInt,
            FieldValue::LongLongInt(_) => FieldType::LongLongInt,
            FieldValue::ShortString(_) => FieldType::ShortString,
            FieldValue::LongString(_) => FieldType::LongString,
            FieldValue::Timestamp(_) => FieldType::Timestamp,
            FieldValue::Table(_) => FieldType::FieldTable,
        }
    }

    /// Rejects short strings over the one-byte length limit, including
    /// table names and values at any nesting depth.
    pub(crate) fn check_string_lengths(&self) -> Result<(), EncodeError> {
        match self {
            FieldValue::ShortString(value) if value.len() > SHORT_STRING_MAX => {
                Err(EncodeError::StringTooLong(value.len()))
            }
            FieldValue::Table(table) => table.check_string_lengths(),
            _ => Ok(()),
        }
    }

    /// Decode a value whose type is dictated by the schema rather than by
    /// the wire. A `Bit` decoded here is a run of one; longer runs share
    /// bytes and are unpacked by the method engine.
    pub(crate) fn decode_as(kind: FieldType, input: &[u8]) -> Result<(&[u8], Self), DecodeError> {
        match kind {
            FieldType::Bit => {
                read_u8(input).map_second(|byte| FieldValue::Bit(byte & 0x01 != 0))
            }
            FieldType::Octet => read_u8(input).map_second(FieldValue::Octet),
            FieldType::ShortInt => read_u16(input).map_second(FieldValue::ShortInt),
            FieldType::LongInt => read_u32(input).map_second(FieldValue::LongInt),
            FieldType::LongLongInt => read_u64(input).map_second(FieldValue::LongLongInt),
            FieldType::ShortString => {
                ShortString::decode(input).map_second(FieldValue::ShortString)
            }
            FieldType::LongString => LongString::decode(input).map_second(FieldValue::LongString),
            FieldType::Timestamp => Timestamp::decode(input).map_second(FieldValue::Timestamp),
            FieldType::FieldTable => FieldTable::decode(input).map_second(FieldValue::Table),
        }
    }
}

impl Encoder for FieldValue {
    fn encoded_size(&self) -> u32 {
        match self {
            // a lone bit occupies one byte; runs are sized by the method engine
            FieldValue::Bit(_) => 1,
            FieldValue::Octet(value) => value.encoded_size(),
            FieldValue::ShortInt(value) => value.encoded_size(),
            FieldValue::LongInt(value) => value.encoded_size(),
            FieldValue::LongLongInt(value) => value.encoded_size(),
            FieldValue::ShortString(value) => value.encoded_size(),
            FieldValue::LongString(value) => value.encoded_size(),
            FieldValue::Timestamp(value) => value.encoded_size(),
            FieldValue::Table(value) => value.encoded_size(),
        }
    }

    fn encode(&self, writer: &mut impl Write) -> Result<(), EncodeError> {
        match self {
            FieldValue::Bit(value) => (*value as u8).encode(writer),
            FieldValue::Octet(value) => value.encode(writer),
            FieldValue::ShortInt(value) => value.encode(writer),
            FieldValue::LongInt(value) => value.encode(writer),
            FieldValue::LongLongInt(value) => value.encode(writer),
            FieldValue::ShortString(value) => value.encode(writer),
            FieldValue::LongString(value) => value.encode(writer),
            FieldValue::Timestamp(value) => value.encode(writer),
            FieldValue::Table(value) => value.encode(writer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FieldValue;
    use crate::schema::FieldType;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(FieldValue::from(true).kind(), FieldType::Bit);
        assert_eq!(FieldValue::from(1u8).kind(), FieldType::Octet);
        assert_eq!(FieldValue::from(1u16).kind(), FieldType::ShortInt);
        assert_eq!(FieldValue::from(1u32).kind(), FieldType::LongInt);
        assert_eq!(FieldValue::from(1u64).kind(), FieldType::LongLongInt);
        assert_eq!(FieldValue::from("queue").kind(), FieldType::ShortString);
    }

    #[test]
    fn decode_as_rejects_truncated_input() {
        for kind in [
            FieldType::Octet,
            FieldType::ShortInt,
            FieldType::LongInt,
            FieldType::LongLongInt,
            FieldType::ShortString,
            FieldType::LongString,
            FieldType::Timestamp,
            FieldType::FieldTable,
        ] {
            let err = FieldValue::decode_as(kind, &[]).unwrap_err();
            assert!(err.is_truncated(), "{:?} gave {:?}", kind, err);
        }
    }
}
