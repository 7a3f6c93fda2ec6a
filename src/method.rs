use std::io::Write;

use crate::codec::decoder::read_u8;
use crate::codec::{Decoder, Encoder};
use crate::error::{DecodeError, EncodeError};
use crate::schema::{FieldType, MethodSchema};
use crate::types::MethodKey;
use crate::value::FieldValue;

/// One method instance: a schema reference plus a conforming value for
/// every declared field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    schema: &'static MethodSchema,
    channel: u16,
    values: Vec<FieldValue>,
}

impl Method {
    /// Builds an instance, checking arity, per-field types, and short
    /// string lengths against the schema so that encoding cannot fail
    /// halfway through a buffer.
    pub fn new(
        schema: &'static MethodSchema,
        channel: u16,
        values: Vec<FieldValue>,
    ) -> Result<Self, EncodeError> {
        if values.len() != schema.fields().len() {
            return Err(EncodeError::ArityMismatch {
                expected: schema.fields().len(),
                actual: values.len(),
            });
        }
        for (spec, value) in schema.fields().iter().zip(&values) {
            if value.kind() != spec.kind() {
                return Err(EncodeError::TypeMismatch {
                    field: spec.name(),
                    expected: spec.kind(),
                });
            }
            value.check_string_lengths()?;
        }
        Ok(Self {
            schema,
            channel,
            values,
        })
    }

    pub fn schema(&self) -> &'static MethodSchema {
        self.schema
    }

    pub fn key(&self) -> MethodKey {
        self.schema.key()
    }

    pub fn channel(&self) -> u16 {
        self.channel
    }

    pub fn values(&self) -> &[FieldValue] {
        &self.values
    }

    /// Looks a field value up by its declared name.
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.schema
            .fields()
            .iter()
            .position(|spec| spec.name() == name)
            .map(|index| &self.values[index])
    }

    /// Size of the encoded payload: the four-byte method key plus every
    /// field, with each run of consecutive bits rounded up to whole bytes.
    pub fn payload_size(&self) -> u32 {
        let mut size = self.schema.key().encoded_size();
        let mut run = 0u32;
        for (spec, value) in self.schema.fields().iter().zip(&self.values) {
            if spec.kind() == FieldType::Bit {
                if run % 8 == 0 {
                    size += 1;
                }
                run += 1;
            } else {
                run = 0;
                size += value.encoded_size();
            }
        }
        size
    }

    /// Writes the method key followed by the fields in declaration order.
    /// Consecutive bits share bytes, first bit in the lowest position; the
    /// ninth bit of a run starts a new byte.
    pub fn pack_payload(&self, writer: &mut impl Write) -> Result<(), EncodeError> {
        self.schema.key().encode(writer)?;

        let mut bit_byte = 0u8;
        let mut run = 0u8;
        for (spec, value) in self.schema.fields().iter().zip(&self.values) {
            if spec.kind() == FieldType::Bit {
                if run == 8 {
                    bit_byte.encode(writer)?;
                    bit_byte = 0;
                    run = 0;
                }
                if matches!(value, FieldValue::Bit(true)) {
                    bit_byte |= 1 << run;
                }
                run += 1;
            } else {
                if run > 0 {
                    bit_byte.encode(writer)?;
                    bit_byte = 0;
                    run = 0;
                }
                value.encode(writer)?;
            }
        }
        if run > 0 {
            bit_byte.encode(writer)?;
        }
        Ok(())
    }

    /// Encodes into a freshly allocated payload buffer.
    pub fn to_payload(&self) -> Result<Vec<u8>, EncodeError> {
        let mut buffer = Vec::with_capacity(self.payload_size() as usize);
        self.pack_payload(&mut buffer)?;
        Ok(buffer)
    }
}

impl MethodSchema {
    /// Decodes a complete payload against this schema. The leading key is
    /// re-validated, and the buffer must hold exactly the bytes the schema
    /// implies; both underruns and leftovers are decode failures.
    pub fn unpack_payload(
        &'static self,
        channel: u16,
        input: &[u8],
    ) -> Result<Method, DecodeError> {
        let (mut input, key) = MethodKey::decode(input)?;
        if key != self.key() {
            return Err(DecodeError::MethodMismatch {
                declared: self.key(),
                payload: key,
            });
        }

        let mut values = Vec::with_capacity(self.fields().len());
        let mut bit_byte = 0u8;
        let mut bits_left = 0u8;
        for spec in self.fields() {
            if spec.kind() == FieldType::Bit {
                if bits_left == 0 {
                    let (rest, byte) = read_u8(input)
                        .map_err(|err| err.in_field(self.name(), spec.name()))?;
                    input = rest;
                    bit_byte = byte;
                    bits_left = 8;
                }
                values.push(FieldValue::Bit(bit_byte & 0x01 != 0));
                bit_byte >>= 1;
                bits_left -= 1;
            } else {
                bits_left = 0;
                let (rest, value) = FieldValue::decode_as(spec.kind(), input)
                    .map_err(|err| err.in_field(self.name(), spec.name()))?;
                input = rest;
                values.push(value);
            }
        }

        if !input.is_empty() {
            return Err(DecodeError::TrailingBytes(input.len()));
        }

        Ok(Method {
            schema: self,
            channel,
            values,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Method;
    use crate::error::{DecodeError, EncodeError};
    use crate::schema::{FieldSpec, FieldType, MethodSchema};
    use crate::table::{FieldTable, TableValue};
    use crate::types::MethodKey;
    use crate::value::FieldValue;

    fn leak_schema(fields: Vec<FieldSpec>) -> &'static MethodSchema {
        Box::leak(Box::new(MethodSchema::new(
            "test.method",
            MethodKey::new(1, 1),
            Box::leak(fields.into_boxed_slice()),
            false,
            &[],
        )))
    }

    fn bit_schema(count: usize) -> &'static MethodSchema {
        leak_schema(
            (0..count)
                .map(|index| {
                    let name: &'static str =
                        Box::leak(format!("flag_{}", index).into_boxed_str());
                    FieldSpec::new(name, FieldType::Bit)
                })
                .collect(),
        )
    }

    #[test]
    fn bit_runs_round_trip_and_use_minimal_bytes() {
        for count in 1..=17 {
            let schema = bit_schema(count);
            let flags: Vec<bool> = (0..count).map(|index| index % 3 == 0).collect();

            let method = Method::new(
                schema,
                0,
                flags.iter().map(|&flag| FieldValue::Bit(flag)).collect(),
            )
            .unwrap();

            let payload = method.to_payload().unwrap();
            assert_eq!(payload.len(), 4 + (count + 7) / 8);
            assert_eq!(payload.len() as u32, method.payload_size());

            let decoded = schema.unpack_payload(0, &payload).unwrap();
            assert_eq!(method, decoded);
        }
    }

    #[test]
    fn first_bit_lands_in_the_lowest_position() {
        let schema = bit_schema(3);
        let method = Method::new(
            schema,
            0,
            vec![
                FieldValue::Bit(true),
                FieldValue::Bit(false),
                FieldValue::Bit(true),
            ],
        )
        .unwrap();

        let payload = method.to_payload().unwrap();
        assert_eq!(payload[4], 0b0000_0101);
    }

    #[test]
    fn ninth_bit_starts_a_new_byte() {
        let schema = bit_schema(9);
        let mut flags = vec![FieldValue::Bit(false); 9];
        flags[8] = FieldValue::Bit(true);

        let method = Method::new(schema, 0, flags).unwrap();
        let payload = method.to_payload().unwrap();

        assert_eq!(&payload[4..], [0x00, 0x01]);
    }

    #[test]
    fn non_bit_field_closes_a_bit_run() {
        let schema = leak_schema(vec![
            FieldSpec::new("first", FieldType::Bit),
            FieldSpec::new("count", FieldType::Octet),
            FieldSpec::new("second", FieldType::Bit),
        ]);
        let method = Method::new(
            schema,
            0,
            vec![
                FieldValue::Bit(true),
                FieldValue::Octet(0xAB),
                FieldValue::Bit(true),
            ],
        )
        .unwrap();

        let payload = method.to_payload().unwrap();
        // two separate runs of one bit each
        assert_eq!(&payload[4..], [0x01, 0xAB, 0x01]);

        let decoded = schema.unpack_payload(0, &payload).unwrap();
        assert_eq!(method, decoded);
    }

    #[test]
    fn arity_mismatch_is_rejected_at_construction() {
        let schema = bit_schema(2);
        let err = Method::new(schema, 0, vec![FieldValue::Bit(true)]).unwrap_err();

        assert!(matches!(
            err,
            EncodeError::ArityMismatch {
                expected: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn type_mismatch_is_rejected_at_construction() {
        let schema = leak_schema(vec![FieldSpec::new("count", FieldType::LongInt)]);
        let err = Method::new(schema, 0, vec![FieldValue::ShortInt(1)]).unwrap_err();

        assert!(matches!(
            err,
            EncodeError::TypeMismatch {
                field: "count",
                expected: FieldType::LongInt
            }
        ));
    }

    #[test]
    fn oversized_short_string_is_rejected_before_anything_is_written() {
        let schema = leak_schema(vec![
            FieldSpec::new("reserved_1", FieldType::ShortInt),
            FieldSpec::new("queue", FieldType::ShortString),
        ]);
        let err = Method::new(
            schema,
            0,
            vec![
                FieldValue::ShortInt(0),
                FieldValue::from("q".repeat(300).as_str()),
            ],
        )
        .unwrap_err();

        assert!(matches!(err, EncodeError::StringTooLong(300)));
    }

    #[test]
    fn oversized_string_inside_a_table_is_rejected_at_construction() {
        let schema = leak_schema(vec![FieldSpec::new("arguments", FieldType::FieldTable)]);

        let mut nested = FieldTable::new();
        nested.insert("note", TableValue::ShortString("y".repeat(300).as_str().into()));
        let mut arguments = FieldTable::new();
        arguments.insert("inner", TableValue::Table(nested));

        let err = Method::new(schema, 0, vec![FieldValue::Table(arguments)]).unwrap_err();
        assert!(matches!(err, EncodeError::StringTooLong(300)));
    }

    #[test]
    fn payload_key_must_match_the_schema() {
        let schema = leak_schema(vec![]);
        let err = schema.unpack_payload(0, &[0x00, 0x02, 0x00, 0x09]).unwrap_err();

        assert!(matches!(err, DecodeError::MethodMismatch { .. }));
    }

    #[test]
    fn leftover_bytes_are_a_decode_failure() {
        let schema = leak_schema(vec![FieldSpec::new("count", FieldType::Octet)]);
        let err = schema
            .unpack_payload(0, &[0x00, 0x01, 0x00, 0x01, 0x2A, 0xFF])
            .unwrap_err();

        assert!(matches!(err, DecodeError::TrailingBytes(1)));
    }

    #[test]
    fn field_lookup_by_name() {
        let schema = leak_schema(vec![
            FieldSpec::new("queue", FieldType::ShortString),
            FieldSpec::new("no_ack", FieldType::Bit),
        ]);
        let method = Method::new(
            schema,
            0,
            vec![FieldValue::from("jobs"), FieldValue::Bit(true)],
        )
        .unwrap();

        assert_eq!(method.field("no_ack"), Some(&FieldValue::Bit(true)));
        assert_eq!(method.field("missing"), None);
    }
}
