use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};
use derive_more::From;
use ordered_float::OrderedFloat;

use crate::codec::constants::TypeCode;
use crate::codec::decoder::{
    read_exact, read_f32, read_f64, read_i16, read_i32, read_i64, read_i8, read_u16, read_u32,
    read_u64, read_u8,
};
use crate::codec::{Decoder, Encoder};
use crate::error::{DecodeError, EncodeError};
use crate::types::{LongString, ShortString, Timestamp, SHORT_STRING_MAX};
use crate::utils::TupleMapperSecond;

/// Fixed-point decimal: a scale octet followed by a long-int mantissa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Decimal {
    pub scale: u8,
    pub value: i32,
}

/// One tagged value inside a field table or field array.
#[derive(Debug, Clone, PartialEq, Eq, Hash, From)]
pub enum TableValue {
    Boolean(bool),
    ShortShortInt(i8),
    ShortShortUint(u8),
    ShortInt(i16),
    ShortUint(u16),
    LongInt(i32),
    LongUint(u32),
    LongLongInt(i64),
    LongLongUint(u64),
    Float(OrderedFloat<f32>),
    Double(OrderedFloat<f64>),
    Decimal(Decimal),
    ShortString(ShortString),
    LongString(LongString),
    Array(Vec<TableValue>),
    Timestamp(Timestamp),
    Table(FieldTable),
    Void,
}

impl TableValue {
    fn tag(&self) -> TypeCode {
        match self {
            TableValue::Boolean(_) => TypeCode::Boolean,
            TableValue::ShortShortInt(_) => TypeCode::ShortShortInt,
            TableValue::ShortShortUint(_) => TypeCode::ShortShortUint,
            TableValue::ShortInt(_) => TypeCode::ShortInt,
            TableValue::ShortUint(_) => TypeCode::ShortUint,
            TableValue::LongInt(_) => TypeCode::LongInt,
            TableValue::LongUint(_) => TypeCode::LongUint,
            TableValue::LongLongInt(_) => TypeCode::LongLongInt,
            TableValue::LongLongUint(_) => TypeCode::LongLongUint,
            TableValue::Float(_) => TypeCode::Float,
            TableValue::Double(_) => TypeCode::Double,
            TableValue::Decimal(_) => TypeCode::Decimal,
            TableValue::ShortString(_) => TypeCode::ShortString,
            TableValue::LongString(_) => TypeCode::LongString,
            TableValue::Array(_) => TypeCode::FieldArray,
            TableValue::Timestamp(_) => TypeCode::Timestamp,
            TableValue::Table(_) => TypeCode::FieldTable,
            TableValue::Void => TypeCode::Void,
        }
    }

    /// Rejects short strings that would overflow their one-byte length
    /// prefix, anywhere in the value, before any encoding starts.
    pub(crate) fn check_string_lengths(&self) -> Result<(), EncodeError> {
        match self {
            TableValue::ShortString(value) if value.len() > SHORT_STRING_MAX => {
                Err(EncodeError::StringTooLong(value.len()))
            }
            TableValue::Array(items) => {
                items.iter().try_for_each(TableValue::check_string_lengths)
            }
            TableValue::Table(table) => table.check_string_lengths(),
            _ => Ok(()),
        }
    }
}

impl Encoder for TableValue {
    fn encoded_size(&self) -> u32 {
        1 + match self {
            TableValue::Boolean(_) | TableValue::ShortShortInt(_) | TableValue::ShortShortUint(_) => 1,
            TableValue::ShortInt(_) | TableValue::ShortUint(_) => 2,
            TableValue::LongInt(_) | TableValue::LongUint(_) | TableValue::Float(_) => 4,
            TableValue::LongLongInt(_) | TableValue::LongLongUint(_) | TableValue::Double(_) => 8,
            TableValue::Decimal(_) => 5,
            TableValue::ShortString(value) => value.encoded_size(),
            TableValue::LongString(value) => value.encoded_size(),
            TableValue::Array(items) => {
                4 + items.iter().map(Encoder::encoded_size).sum::<u32>()
            }
            TableValue::Timestamp(value) => value.encoded_size(),
            TableValue::Table(value) => value.encoded_size(),
            TableValue::Void => 0,
        }
    }

    fn encode(&self, writer: &mut impl Write) -> Result<(), EncodeError> {
        self.tag().encode(writer)?;
        match self {
            TableValue::Boolean(value) => writer.write_u8(*value as u8)?,
            TableValue::ShortShortInt(value) => writer.write_i8(*value)?,
            TableValue::ShortShortUint(value) => writer.write_u8(*value)?,
            TableValue::ShortInt(value) => writer.write_i16::<BigEndian>(*value)?,
            TableValue::ShortUint(value) => writer.write_u16::<BigEndian>(*value)?,
            TableValue::LongInt(value) => writer.write_i32::<BigEndian>(*value)?,
            TableValue::LongUint(value) => writer.write_u32::<BigEndian>(*value)?,
            TableValue::LongLongInt(value) => writer.write_i64::<BigEndian>(*value)?,
            TableValue::LongLongUint(value) => writer.write_u64::<BigEndian>(*value)?,
            TableValue::Float(value) => writer.write_f32::<BigEndian>(value.into_inner())?,
            TableValue::Double(value) => writer.write_f64::<BigEndian>(value.into_inner())?,
            TableValue::Decimal(value) => {
                writer.write_u8(value.scale)?;
                writer.write_i32::<BigEndian>(value.value)?;
            }
            TableValue::ShortString(value) => value.encode(writer)?,
            TableValue::LongString(value) => value.encode(writer)?,
            TableValue::Array(items) => {
                let size = items.iter().map(Encoder::encoded_size).sum::<u32>();
                writer.write_u32::<BigEndian>(size)?;
                for item in items {
                    item.encode(writer)?;
                }
            }
            TableValue::Timestamp(value) => value.encode(writer)?,
            TableValue::Table(value) => value.encode(writer)?,
            TableValue::Void => {}
        }
        Ok(())
    }
}

impl Decoder for TableValue {
    fn decode(input: &[u8]) -> Result<(&[u8], Self), DecodeError> {
        let (input, code) = TypeCode::decode(input)?;

        match code {
            TypeCode::Boolean => read_u8(input).map_second(|value| TableValue::Boolean(value != 0)),
            TypeCode::ShortShortInt => read_i8(input).map_second(TableValue::ShortShortInt),
            TypeCode::ShortShortUint => read_u8(input).map_second(TableValue::ShortShortUint),
            TypeCode::ShortInt => read_i16(input).map_second(TableValue::ShortInt),
            TypeCode::ShortUint => read_u16(input).map_second(TableValue::ShortUint),
            TypeCode::LongInt => read_i32(input).map_second(TableValue::LongInt),
            TypeCode::LongUint => read_u32(input).map_second(TableValue::LongUint),
            TypeCode::LongLongInt => read_i64(input).map_second(TableValue::LongLongInt),
            TypeCode::LongLongUint => read_u64(input).map_second(TableValue::LongLongUint),
            TypeCode::Float => {
                read_f32(input).map_second(|value| TableValue::Float(OrderedFloat(value)))
            }
            TypeCode::Double => {
                read_f64(input).map_second(|value| TableValue::Double(OrderedFloat(value)))
            }
            TypeCode::Decimal => {
                let (input, scale) = read_u8(input)?;
                let (input, value) = read_i32(input)?;
                Ok((input, TableValue::Decimal(Decimal { scale, value })))
            }
            TypeCode::ShortString => {
                ShortString::decode(input).map_second(TableValue::ShortString)
            }
            TypeCode::LongString => LongString::decode(input).map_second(TableValue::LongString),
            TypeCode::FieldArray => {
                let (input, size) = read_u32(input)?;
                let (input, mut region) = read_exact(input, size as usize)?;
                let mut items = Vec::new();
                while !region.is_empty() {
                    let (rest, item) = TableValue::decode(region)?;
                    region = rest;
                    items.push(item);
                }
                Ok((input, TableValue::Array(items)))
            }
            TypeCode::Timestamp => Timestamp::decode(input).map_second(TableValue::Timestamp),
            TypeCode::FieldTable => FieldTable::decode(input).map_second(TableValue::Table),
            TypeCode::Void => Ok((input, TableValue::Void)),
        }
    }
}

/// Ordered name -> value map. Entries keep their insertion order on the
/// wire; nested tables are permitted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FieldTable(Vec<(ShortString, TableValue)>);

impl FieldTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, replacing the value of an existing name in place.
    pub fn insert(&mut self, name: impl Into<ShortString>, value: impl Into<TableValue>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&TableValue> {
        self.0
            .iter()
            .find(|(existing, _)| existing.as_str() == name)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(ShortString, TableValue)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn check_string_lengths(&self) -> Result<(), EncodeError> {
        for (name, value) in &self.0 {
            if name.len() > SHORT_STRING_MAX {
                return Err(EncodeError::StringTooLong(name.len()));
            }
            value.check_string_lengths()?;
        }
        Ok(())
    }
}

impl Encoder for FieldTable {
    fn encoded_size(&self) -> u32 {
        4 + self
            .0
            .iter()
            .map(|(name, value)| name.encoded_size() + value.encoded_size())
            .sum::<u32>()
    }

    fn encode(&self, writer: &mut impl Write) -> Result<(), EncodeError> {
        writer.write_u32::<BigEndian>(self.encoded_size() - 4)?;
        for (name, value) in &self.0 {
            name.encode(writer)?;
            value.encode(writer)?;
        }
        Ok(())
    }
}

impl Decoder for FieldTable {
    fn decode(input: &[u8]) -> Result<(&[u8], Self), DecodeError> {
        let (input, size) = read_u32(input)?;
        let (input, mut region) = read_exact(input, size as usize)?;

        let mut entries = Vec::new();
        while !region.is_empty() {
            let (rest, name) = ShortString::decode(region)?;
            let (rest, value) = TableValue::decode(rest)?;
            region = rest;
            entries.push((name, value));
        }

        Ok((input, FieldTable(entries)))
    }
}

#[cfg(test)]
mod tests {
    use ordered_float::OrderedFloat;
    use pretty_assertions::assert_eq;

    use super::{Decimal, FieldTable, TableValue};
    use crate::codec::{Decoder, Encoder};
    use crate::error::DecodeError;
    use crate::types::{LongString, ShortString, Timestamp};

    fn table_with_every_tag() -> FieldTable {
        let mut nested = FieldTable::new();
        nested.insert("x-inner", TableValue::Boolean(true));

        let mut table = FieldTable::new();
        table.insert("bool", TableValue::Boolean(false));
        table.insert("i8", TableValue::ShortShortInt(-3));
        table.insert("u8", TableValue::ShortShortUint(200));
        table.insert("i16", TableValue::ShortInt(-1024));
        table.insert("u16", TableValue::ShortUint(40_000));
        table.insert("i32", TableValue::LongInt(-70_000));
        table.insert("u32", TableValue::LongUint(3_000_000_000));
        table.insert("i64", TableValue::LongLongInt(-1));
        table.insert("u64", TableValue::LongLongUint(u64::MAX));
        table.insert("f32", TableValue::Float(OrderedFloat(1.5)));
        table.insert("f64", TableValue::Double(OrderedFloat(-2.25)));
        table.insert(
            "decimal",
            TableValue::Decimal(Decimal {
                scale: 2,
                value: 12345,
            }),
        );
        table.insert("sstr", TableValue::ShortString(ShortString::from("tag")));
        table.insert(
            "lstr",
            TableValue::LongString(LongString::from(&[0xDE, 0xAD][..])),
        );
        table.insert(
            "array",
            TableValue::Array(vec![
                TableValue::LongInt(1),
                TableValue::ShortString(ShortString::from("two")),
                TableValue::Void,
            ]),
        );
        table.insert(
            "ts",
            TableValue::Timestamp(Timestamp::from_secs(1_600_000_000).unwrap()),
        );
        table.insert("nested", TableValue::Table(nested));
        table.insert("void", TableValue::Void);
        table
    }

    #[test]
    fn field_table_round_trips_every_tag() {
        let table = table_with_every_tag();

        let mut buffer = vec![];
        table.encode(&mut buffer).unwrap();

        assert_eq!(buffer.len() as u32, table.encoded_size());

        let (remaining, decoded) = FieldTable::decode(&buffer).unwrap();
        assert_eq!(table, decoded);
        assert!(remaining.is_empty());
    }

    #[test]
    fn empty_table_is_a_zero_length_frame() {
        let table = FieldTable::new();

        let mut buffer = vec![];
        table.encode(&mut buffer).unwrap();

        assert_eq!(buffer, [0x00, 0x00, 0x00, 0x00]);

        let (_, decoded) = FieldTable::decode(&buffer).unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn table_entry_wire_layout() {
        let mut table = FieldTable::new();
        table.insert("depth", TableValue::LongInt(7));

        let mut buffer = vec![];
        table.encode(&mut buffer).unwrap();

        assert_eq!(
            buffer,
            [
                0x00, 0x00, 0x00, 0x0B, // inner size
                0x05, b'd', b'e', b'p', b't', b'h', // name
                b'I', 0x00, 0x00, 0x00, 0x07, // tagged value
            ]
        );
    }

    #[test]
    fn insert_replaces_existing_names_in_place() {
        let mut table = FieldTable::new();
        table.insert("ttl", TableValue::LongInt(30));
        table.insert("mode", TableValue::ShortString(ShortString::from("lazy")));
        table.insert("ttl", TableValue::LongInt(60));

        assert_eq!(table.len(), 2);
        assert_eq!(table.get("ttl"), Some(&TableValue::LongInt(60)));
    }

    #[test]
    fn unknown_tag_byte_is_rejected() {
        // name "a" followed by tag 'Z'
        let buffer = [0x00, 0x00, 0x00, 0x03, 0x01, b'a', b'Z'];

        let err = FieldTable::decode(&buffer).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidTypeCode(b'Z')));
    }

    #[test]
    fn truncated_table_region_fails() {
        let table = table_with_every_tag();

        let mut buffer = vec![];
        table.encode(&mut buffer).unwrap();

        for len in 0..buffer.len() {
            let err = FieldTable::decode(&buffer[..len]).unwrap_err();
            assert!(err.is_truncated(), "length {} gave {:?}", len, err);
        }
    }
}
