use std::convert::TryFrom;
use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};
use chrono::{DateTime, Utc};
use derive_more::{From, Into};

use crate::codec::decoder::{read_exact, read_u16, read_u32, read_u64, read_u8};
use crate::codec::{Decoder, Encoder};
use crate::error::{DecodeError, EncodeError};

pub const SHORT_STRING_MAX: usize = 255;

/// Identifies one method: a protocol class plus a method within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MethodKey {
    class_id: u16,
    method_id: u16,
}

impl MethodKey {
    pub const fn new(class_id: u16, method_id: u16) -> Self {
        Self {
            class_id,
            method_id,
        }
    }

    /// Get the method key's class id.
    pub fn class_id(&self) -> u16 {
        self.class_id
    }

    /// Get the method key's method id.
    pub fn method_id(&self) -> u16 {
        self.method_id
    }
}

impl Encoder for MethodKey {
    fn encoded_size(&self) -> u32 {
        2 + 2
    }

    fn encode(&self, writer: &mut impl Write) -> Result<(), EncodeError> {
        writer.write_u16::<BigEndian>(self.class_id)?;
        writer.write_u16::<BigEndian>(self.method_id)?;
        Ok(())
    }
}

impl Decoder for MethodKey {
    fn decode(input: &[u8]) -> Result<(&[u8], Self), DecodeError> {
        let (input, class_id) = read_u16(input)?;
        let (input, method_id) = read_u16(input)?;

        Ok((input, MethodKey::new(class_id, method_id)))
    }
}

/// UTF-8 string with a one-byte length prefix; at most 255 bytes on the
/// wire. Oversized values are rejected at encode time, before any bytes
/// are written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, From, Into)]
pub struct ShortString(String);

impl ShortString {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for ShortString {
    fn from(value: &str) -> Self {
        ShortString(value.to_owned())
    }
}

impl Encoder for ShortString {
    fn encoded_size(&self) -> u32 {
        1 + self.0.len() as u32
    }

    fn encode(&self, writer: &mut impl Write) -> Result<(), EncodeError> {
        if self.0.len() > SHORT_STRING_MAX {
            return Err(EncodeError::StringTooLong(self.0.len()));
        }
        writer.write_u8(self.0.len() as u8)?;
        writer.write_all(self.0.as_bytes())?;
        Ok(())
    }
}

impl Decoder for ShortString {
    fn decode(input: &[u8]) -> Result<(&[u8], Self), DecodeError> {
        let (input, len) = read_u8(input)?;
        let (input, bytes) = read_exact(input, len as usize)?;
        let string = String::from_utf8(bytes.to_vec())?;
        Ok((input, ShortString(string)))
    }
}

/// Opaque byte string with a four-byte length prefix. Carries binary
/// payloads such as SASL challenges; no encoding is assumed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, From, Into)]
pub struct LongString(Vec<u8>);

impl LongString {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&[u8]> for LongString {
    fn from(value: &[u8]) -> Self {
        LongString(value.to_vec())
    }
}

impl From<&str> for LongString {
    fn from(value: &str) -> Self {
        LongString(value.as_bytes().to_vec())
    }
}

impl Encoder for LongString {
    fn encoded_size(&self) -> u32 {
        4 + self.0.len() as u32
    }

    fn encode(&self, writer: &mut impl Write) -> Result<(), EncodeError> {
        writer.write_u32::<BigEndian>(self.0.len() as u32)?;
        writer.write_all(&self.0)?;
        Ok(())
    }
}

impl Decoder for LongString {
    fn decode(input: &[u8]) -> Result<(&[u8], Self), DecodeError> {
        let (input, len) = read_u32(input)?;
        let (input, bytes) = read_exact(input, len as usize)?;
        Ok((input, LongString(bytes.to_vec())))
    }
}

/// Point in time, encoded as unsigned POSIX seconds. Holds whole seconds
/// at or after the epoch only, so every representable value round-trips
/// through the wire unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Into)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Builds a timestamp from an instant, truncating to whole seconds.
    /// Pre-epoch instants have no unsigned encoding and are refused.
    pub fn new(instant: DateTime<Utc>) -> Option<Self> {
        u64::try_from(instant.timestamp())
            .ok()
            .and_then(Timestamp::from_secs)
    }

    pub fn from_secs(secs: u64) -> Option<Self> {
        i64::try_from(secs)
            .ok()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .map(Timestamp)
    }

    pub fn as_secs(&self) -> u64 {
        self.0.timestamp() as u64
    }
}

impl Encoder for Timestamp {
    fn encoded_size(&self) -> u32 {
        8
    }

    fn encode(&self, writer: &mut impl Write) -> Result<(), EncodeError> {
        writer.write_u64::<BigEndian>(self.as_secs())?;
        Ok(())
    }
}

impl Decoder for Timestamp {
    fn decode(input: &[u8]) -> Result<(&[u8], Self), DecodeError> {
        let (input, secs) = read_u64(input)?;
        let timestamp =
            Timestamp::from_secs(secs).ok_or(DecodeError::InvalidTimestamp(secs))?;
        Ok((input, timestamp))
    }
}

#[cfg(test)]
mod tests {
    use super::{LongString, MethodKey, ShortString, Timestamp};
    use crate::codec::{Decoder, Encoder};
    use crate::error::{DecodeError, EncodeError};

    #[test]
    fn method_key_round_trip() {
        let key = MethodKey::new(60, 71);

        let mut buffer = vec![];
        key.encode(&mut buffer).unwrap();

        assert_eq!(buffer, [0x00, 0x3C, 0x00, 0x47]);

        let (remaining, decoded) = MethodKey::decode(&buffer).unwrap();
        assert_eq!(key, decoded);
        assert!(remaining.is_empty());
    }

    #[test]
    fn short_string_round_trip() {
        let string = ShortString::from("myqueue");

        let mut buffer = vec![];
        string.encode(&mut buffer).unwrap();

        assert_eq!(buffer, [0x07, b'm', b'y', b'q', b'u', b'e', b'u', b'e']);

        let (remaining, decoded) = ShortString::decode(&buffer).unwrap();
        assert_eq!(string, decoded);
        assert!(remaining.is_empty());
    }

    #[test]
    fn empty_short_string_is_a_single_length_byte() {
        let string = ShortString::default();

        let mut buffer = vec![];
        string.encode(&mut buffer).unwrap();

        assert_eq!(buffer, [0x00]);

        let (_, decoded) = ShortString::decode(&buffer).unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn short_string_boundary_length_is_accepted() {
        let string = ShortString::from("x".repeat(255).as_str());

        let mut buffer = vec![];
        string.encode(&mut buffer).unwrap();

        assert_eq!(buffer.len(), 256);

        let (_, decoded) = ShortString::decode(&buffer).unwrap();
        assert_eq!(decoded.len(), 255);
    }

    #[test]
    fn oversized_short_string_is_rejected_before_writing() {
        let string = ShortString::from("x".repeat(256).as_str());

        let mut buffer = vec![];
        let err = string.encode(&mut buffer).unwrap_err();

        assert!(matches!(err, EncodeError::StringTooLong(256)));
        assert!(buffer.is_empty());
    }

    #[test]
    fn short_string_rejects_invalid_utf8() {
        let err = ShortString::decode(&[0x02, 0xC3, 0x28]).unwrap_err();

        assert!(matches!(err, DecodeError::Utf8Error(_)));
    }

    #[test]
    fn truncated_short_string_fails() {
        let err = ShortString::decode(&[0x05, b'a', b'b']).unwrap_err();

        assert!(err.is_truncated());
    }

    #[test]
    fn long_string_keeps_bytes_opaque() {
        let string = LongString::from(&[0x00, 0xFF, 0x80, 0x01][..]);

        let mut buffer = vec![];
        string.encode(&mut buffer).unwrap();

        assert_eq!(buffer, [0x00, 0x00, 0x00, 0x04, 0x00, 0xFF, 0x80, 0x01]);

        let (remaining, decoded) = LongString::decode(&buffer).unwrap();
        assert_eq!(string, decoded);
        assert!(remaining.is_empty());
    }

    #[test]
    fn zero_length_long_string_round_trips() {
        let string = LongString::default();

        let mut buffer = vec![];
        string.encode(&mut buffer).unwrap();

        assert_eq!(buffer, [0x00, 0x00, 0x00, 0x00]);

        let (_, decoded) = LongString::decode(&buffer).unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn timestamp_round_trips_at_second_precision() {
        let timestamp = Timestamp::from_secs(1_700_000_000).unwrap();

        let mut buffer = vec![];
        timestamp.encode(&mut buffer).unwrap();

        let (remaining, decoded) = Timestamp::decode(&buffer).unwrap();
        assert_eq!(timestamp, decoded);
        assert_eq!(decoded.as_secs(), 1_700_000_000);
        assert!(remaining.is_empty());
    }

    #[test]
    fn pre_epoch_instants_are_refused() {
        let instant = chrono::DateTime::from_timestamp(-1, 0).unwrap();

        assert!(Timestamp::new(instant).is_none());
    }

    #[test]
    fn construction_truncates_to_whole_seconds() {
        let instant = chrono::DateTime::from_timestamp(1_700_000_000, 999_000_000).unwrap();
        let timestamp = Timestamp::new(instant).unwrap();

        assert_eq!(timestamp.as_secs(), 1_700_000_000);

        let mut buffer = vec![];
        timestamp.encode(&mut buffer).unwrap();

        let (_, decoded) = Timestamp::decode(&buffer).unwrap();
        assert_eq!(timestamp, decoded);
    }

    #[test]
    fn out_of_range_timestamp_is_rejected() {
        let err = Timestamp::decode(&u64::MAX.to_be_bytes()).unwrap_err();

        assert!(matches!(err, DecodeError::InvalidTimestamp(_)));
    }
}
