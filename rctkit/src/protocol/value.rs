//! Payload encoding and decoding.
//!
//! Every object id is bound to a [`DataType`] that selects how its payload
//! is laid out on the wire. Scalars are big-endian; strings are UTF-8 on
//! send and NUL-truncated ASCII on receive. The two composite types
//! (histogram time series and the event log table) only ever travel from
//! the device to the host and are therefore decode-only.
//!
//! Note that an object may respond with a different type than its request
//! uses: the logger group is written with a UNIX timestamp and answers with
//! a time series.

use std::collections::BTreeMap;
use std::fmt;

use bytes::{BufMut, Bytes, BytesMut};
use time::OffsetDateTime;

use crate::error::ValueError;
use crate::types::{DataType, EventEntry};

/// A decoded payload value, tagged by the data type that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    U8(u8),
    I8(i8),
    U16(u16),
    I16(i16),
    U32(u32),
    I32(i32),
    Float(f32),
    String(String),
    Timeseries(Timeseries),
    EventTable(EventTable),
}

impl Value {
    /// The value as a signed 64-bit integer, for the integer-family
    /// variants. Bools and floats do not coerce.
    fn as_int(&self) -> Option<i64> {
        match *self {
            Value::U8(v) => Some(v.into()),
            Value::I8(v) => Some(v.into()),
            Value::U16(v) => Some(v.into()),
            Value::I16(v) => Some(v.into()),
            Value::U32(v) => Some(v.into()),
            Value::I32(v) => Some(v.into()),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{v}"),
            Value::U8(v) => write!(f, "{v}"),
            Value::I8(v) => write!(f, "{v}"),
            Value::U16(v) => write!(f, "{v}"),
            Value::I16(v) => write!(f, "{v}"),
            Value::U32(v) => write!(f, "{v}"),
            Value::I32(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::String(v) => write!(f, "{v}"),
            Value::Timeseries(v) => write!(f, "{v}"),
            Value::EventTable(v) => write!(f, "{v}"),
        }
    }
}

/// Decoded histogram data: a header timestamp (usually the day) and an
/// ordered mapping of sample timestamps to float values.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeseries {
    pub timestamp: OffsetDateTime,
    pub samples: BTreeMap<OffsetDateTime, f32>,
}

impl fmt::Display for Timeseries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (ts, value) in &self.samples {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "{}={value:.4}", ts.unix_timestamp())?;
        }
        Ok(())
    }
}

/// Decoded event log data: a header timestamp and an ordered mapping of
/// entry timestamps to log records.
#[derive(Debug, Clone, PartialEq)]
pub struct EventTable {
    pub timestamp: OffsetDateTime,
    pub entries: BTreeMap<OffsetDateTime, EventEntry>,
}

impl fmt::Display for EventTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in self.entries.values() {
            writeln!(
                f,
                "{:#04X},{},{:#X},{:#X},{:#X}",
                entry.entry_type,
                entry.timestamp.unix_timestamp(),
                entry.element2,
                entry.element3,
                entry.element4
            )?;
        }
        Ok(())
    }
}

/// Size of one event log record on the wire.
const EVENT_RECORD_LEN: usize = 20;

/// Encodes a value for transmission as a payload.
///
/// Integer-family values coerce between widths; anything that does not fit
/// the target type fails with [`ValueError::EncodeOverflow`]. The composite
/// types and `UNKNOWN` cannot be encoded.
pub fn encode_value(data_type: DataType, value: &Value) -> Result<Bytes, ValueError> {
    let overflow = || ValueError::EncodeOverflow(data_type);
    let mut buf = BytesMut::with_capacity(4);
    match data_type {
        DataType::Bool => match value {
            Value::Bool(v) => buf.put_u8(u8::from(*v)),
            _ => return Err(overflow()),
        },
        DataType::Uint8 | DataType::Enum => {
            let v = value.as_int().ok_or_else(overflow)?;
            buf.put_u8(u8::try_from(v).map_err(|_| overflow())?);
        }
        DataType::Int8 => {
            let v = value.as_int().ok_or_else(overflow)?;
            buf.put_i8(i8::try_from(v).map_err(|_| overflow())?);
        }
        DataType::Uint16 => {
            let v = value.as_int().ok_or_else(overflow)?;
            buf.put_u16(u16::try_from(v).map_err(|_| overflow())?);
        }
        DataType::Int16 => {
            let v = value.as_int().ok_or_else(overflow)?;
            buf.put_i16(i16::try_from(v).map_err(|_| overflow())?);
        }
        DataType::Uint32 => {
            let v = value.as_int().ok_or_else(overflow)?;
            buf.put_u32(u32::try_from(v).map_err(|_| overflow())?);
        }
        DataType::Int32 => {
            let v = value.as_int().ok_or_else(overflow)?;
            buf.put_i32(i32::try_from(v).map_err(|_| overflow())?);
        }
        DataType::Float => match value {
            Value::Float(v) => buf.put_f32(*v),
            _ => return Err(overflow()),
        },
        DataType::String => match value {
            Value::String(v) => buf.put_slice(v.as_bytes()),
            _ => return Err(overflow()),
        },
        DataType::Unknown | DataType::Timeseries | DataType::EventTable => {
            return Err(ValueError::EncodeUnsupported(data_type));
        }
    }
    Ok(buf.freeze())
}

/// Decodes a payload received from the device.
///
/// Scalar payloads must match their wire size exactly; shorter input fails
/// with [`ValueError::DecodeShort`], longer input with
/// [`ValueError::DecodeMalformed`].
pub fn decode_value(data_type: DataType, data: &[u8]) -> Result<Value, ValueError> {
    if let Some(size) = data_type.wire_size() {
        if data.len() < size {
            return Err(ValueError::DecodeShort {
                data_type,
                len: data.len(),
            });
        }
        if data.len() > size {
            return Err(ValueError::DecodeMalformed {
                data_type,
                reason: "trailing bytes after scalar",
            });
        }
    }
    match data_type {
        DataType::Bool => Ok(Value::Bool(data[0] != 0)),
        DataType::Uint8 | DataType::Enum => Ok(Value::U8(data[0])),
        DataType::Int8 => Ok(Value::I8(data[0] as i8)),
        DataType::Uint16 => Ok(Value::U16(u16::from_be_bytes([data[0], data[1]]))),
        DataType::Int16 => Ok(Value::I16(i16::from_be_bytes([data[0], data[1]]))),
        DataType::Uint32 => Ok(Value::U32(u32::from_be_bytes([
            data[0], data[1], data[2], data[3],
        ]))),
        DataType::Int32 => Ok(Value::I32(i32::from_be_bytes([
            data[0], data[1], data[2], data[3],
        ]))),
        DataType::Float => Ok(Value::Float(f32::from_be_bytes([
            data[0], data[1], data[2], data[3],
        ]))),
        DataType::String => decode_string(data),
        DataType::Timeseries => Ok(Value::Timeseries(decode_timeseries(data)?)),
        DataType::EventTable => Ok(Value::EventTable(decode_event_table(data)?)),
        DataType::Unknown => Err(ValueError::DecodeUnsupported(data_type)),
    }
}

/// Strings are transmitted NUL-padded; everything from the first NUL byte
/// on is discarded. The device only ever sends ASCII.
fn decode_string(data: &[u8]) -> Result<Value, ValueError> {
    let text = match data.iter().position(|&b| b == 0x00) {
        Some(pos) => &data[..pos],
        None => data,
    };
    if !text.is_ascii() {
        return Err(ValueError::DecodeBadUtf8);
    }
    // is_ascii implies valid UTF-8
    String::from_utf8(text.to_vec())
        .map(Value::String)
        .map_err(|_| ValueError::DecodeBadUtf8)
}

fn decode_timeseries(data: &[u8]) -> Result<Timeseries, ValueError> {
    let data_type = DataType::Timeseries;
    if data.len() < 4 {
        return Err(ValueError::DecodeShort {
            data_type,
            len: data.len(),
        });
    }
    if data.len() % 4 != 0 {
        return Err(ValueError::DecodeMalformed {
            data_type,
            reason: "length is not a multiple of 4",
        });
    }
    if (data.len() - 4) / 4 % 2 != 0 {
        return Err(ValueError::DecodeMalformed {
            data_type,
            reason: "odd number of sample words",
        });
    }

    let timestamp = unix_timestamp(read_u32(data, 0), data_type)?;
    let mut samples = BTreeMap::new();
    for pair in data[4..].chunks_exact(8) {
        let ts = unix_timestamp(read_u32(pair, 0), data_type)?;
        let value = f32::from_be_bytes([pair[4], pair[5], pair[6], pair[7]]);
        samples.insert(ts, value);
    }
    Ok(Timeseries { timestamp, samples })
}

fn decode_event_table(data: &[u8]) -> Result<EventTable, ValueError> {
    let data_type = DataType::EventTable;
    if data.len() < 4 {
        return Err(ValueError::DecodeShort {
            data_type,
            len: data.len(),
        });
    }
    if (data.len() - 4) % EVENT_RECORD_LEN != 0 {
        return Err(ValueError::DecodeMalformed {
            data_type,
            reason: "length does not hold a whole number of records",
        });
    }

    let timestamp = unix_timestamp(read_u32(data, 0), data_type)?;
    let mut entries = BTreeMap::new();
    for record in data[4..].chunks_exact(EVENT_RECORD_LEN) {
        let type_word = read_u32(record, 0);
        let entry_type = u8::try_from(type_word).map_err(|_| ValueError::DecodeMalformed {
            data_type,
            reason: "entry type does not fit a byte",
        })?;
        let ts_word = read_u32(record, 4);
        let ts = unix_timestamp(ts_word, data_type)?;
        entries.insert(
            ts,
            EventEntry {
                entry_type,
                timestamp: ts,
                element2: read_u32(record, 8),
                element3: read_u32(record, 12),
                element4: read_u32(record, 16),
            },
        );
    }
    Ok(EventTable { timestamp, entries })
}

fn read_u32(data: &[u8], offset: usize) -> u32 {
    u32::from_be_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

fn unix_timestamp(secs: u32, data_type: DataType) -> Result<OffsetDateTime, ValueError> {
    OffsetDateTime::from_unix_timestamp(i64::from(secs)).map_err(|_| ValueError::DecodeMalformed {
        data_type,
        reason: "timestamp out of range",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(&[0x00], false; "zero is false")]
    #[test_case(&[0x01], true; "one is true")]
    #[test_case(&[0x02], true; "two is true")]
    #[test_case(&[0xFF], true; "ff is true")]
    fn decode_bool(data: &[u8], expected: bool) {
        assert_eq!(
            decode_value(DataType::Bool, data).unwrap(),
            Value::Bool(expected)
        );
    }

    #[test_case(&[0x00], 0)]
    #[test_case(&[0x01], 1)]
    #[test_case(&[0x02], 2)]
    #[test_case(&[0xFF], 255)]
    fn decode_uint8(data: &[u8], expected: u8) {
        assert_eq!(
            decode_value(DataType::Uint8, data).unwrap(),
            Value::U8(expected)
        );
    }

    #[test]
    fn decode_string_nul_terminated() {
        // Response for `android_description` from a real device.
        let data = hex::decode(
            "505320362e30204241334c000000000000000000000000000000000000000000000000\
             0000000000000000000000000000000000000000000000",
        )
        .unwrap();
        assert_eq!(
            decode_value(DataType::String, &data).unwrap(),
            Value::String("PS 6.0 BA3L".into())
        );
    }

    #[test]
    fn decode_string_without_nul() {
        let data = hex::decode("505320362e30204241334c").unwrap();
        assert_eq!(
            decode_value(DataType::String, &data).unwrap(),
            Value::String("PS 6.0 BA3L".into())
        );
    }

    #[test]
    fn decode_string_non_ascii() {
        assert_eq!(
            decode_value(DataType::String, &[0x41, 0xC3, 0xA4]),
            Err(ValueError::DecodeBadUtf8)
        );
    }

    #[test]
    fn decode_string_non_ascii_after_nul_is_ignored() {
        assert_eq!(
            decode_value(DataType::String, &[0x41, 0x00, 0xC3]).unwrap(),
            Value::String("A".into())
        );
    }

    #[test]
    fn scalar_round_trips() {
        let cases = [
            (DataType::Bool, Value::Bool(true)),
            (DataType::Uint8, Value::U8(0xAB)),
            (DataType::Int8, Value::I8(-100)),
            (DataType::Uint16, Value::U16(0xBEEF)),
            (DataType::Int16, Value::I16(-30000)),
            (DataType::Uint32, Value::U32(0xDEADBEEF)),
            (DataType::Int32, Value::I32(-2_000_000_000)),
            (DataType::Enum, Value::U8(7)),
            (DataType::Float, Value::Float(52.25)),
            (DataType::String, Value::String("battery".into())),
        ];
        for (data_type, value) in cases {
            let encoded = encode_value(data_type, &value).unwrap();
            assert_eq!(decode_value(data_type, &encoded).unwrap(), value);
        }
    }

    #[test]
    fn encode_big_endian() {
        assert_eq!(
            encode_value(DataType::Uint16, &Value::U16(0x1234)).unwrap(),
            Bytes::from_static(&[0x12, 0x34])
        );
        assert_eq!(
            encode_value(DataType::Int32, &Value::I32(1_704_067_200)).unwrap(),
            Bytes::from_static(&[0x65, 0x92, 0x00, 0x80])
        );
        assert_eq!(
            encode_value(DataType::Float, &Value::Float(1.0)).unwrap(),
            Bytes::from_static(&[0x3F, 0x80, 0x00, 0x00])
        );
    }

    #[test]
    fn encode_integer_coercion() {
        // A wider variant holding a fitting value narrows cleanly.
        assert_eq!(
            encode_value(DataType::Uint8, &Value::U32(200)).unwrap(),
            Bytes::from_static(&[0xC8])
        );
        assert_eq!(
            encode_value(DataType::Uint8, &Value::U32(256)),
            Err(ValueError::EncodeOverflow(DataType::Uint8))
        );
        assert_eq!(
            encode_value(DataType::Int8, &Value::I32(-129)),
            Err(ValueError::EncodeOverflow(DataType::Int8))
        );
        assert_eq!(
            encode_value(DataType::Uint16, &Value::I32(-1)),
            Err(ValueError::EncodeOverflow(DataType::Uint16))
        );
    }

    #[test]
    fn encode_composites_unsupported() {
        let value = Value::U32(0);
        assert_eq!(
            encode_value(DataType::Timeseries, &value),
            Err(ValueError::EncodeUnsupported(DataType::Timeseries))
        );
        assert_eq!(
            encode_value(DataType::EventTable, &value),
            Err(ValueError::EncodeUnsupported(DataType::EventTable))
        );
        assert_eq!(
            encode_value(DataType::Unknown, &value),
            Err(ValueError::EncodeUnsupported(DataType::Unknown))
        );
    }

    #[test]
    fn decode_short_scalar() {
        assert_eq!(
            decode_value(DataType::Uint32, &[0x01, 0x02]),
            Err(ValueError::DecodeShort {
                data_type: DataType::Uint32,
                len: 2
            })
        );
    }

    fn ts_payload(header: u32, pairs: &[(u32, f32)]) -> Vec<u8> {
        let mut data = header.to_be_bytes().to_vec();
        for (ts, value) in pairs {
            data.extend_from_slice(&ts.to_be_bytes());
            data.extend_from_slice(&value.to_be_bytes());
        }
        data
    }

    #[test]
    fn decode_timeseries_happy() {
        let data = ts_payload(1_600_000_000, &[(1_600_000_060, 1.5), (1_600_000_120, -2.0)]);
        let Value::Timeseries(ts) = decode_value(DataType::Timeseries, &data).unwrap() else {
            panic!("expected a time series");
        };
        assert_eq!(ts.timestamp.unix_timestamp(), 1_600_000_000);
        assert_eq!(ts.samples.len(), 2);
        let values: Vec<f32> = ts.samples.values().copied().collect();
        assert_eq!(values, vec![1.5, -2.0]);
    }

    #[test]
    fn decode_timeseries_rejects_ragged_length() {
        let mut data = ts_payload(1_600_000_000, &[(1_600_000_060, 1.5)]);
        data.pop();
        assert!(matches!(
            decode_value(DataType::Timeseries, &data),
            Err(ValueError::DecodeMalformed { .. })
        ));
    }

    #[test]
    fn decode_timeseries_rejects_odd_word_count() {
        // Header plus a lone timestamp without its value word.
        let mut data = 1_600_000_000u32.to_be_bytes().to_vec();
        data.extend_from_slice(&1_600_000_060u32.to_be_bytes());
        assert!(matches!(
            decode_value(DataType::Timeseries, &data),
            Err(ValueError::DecodeMalformed { .. })
        ));
    }

    fn event_payload(header: u32, records: &[(u32, u32, u32, u32)]) -> Vec<u8> {
        let mut data = header.to_be_bytes().to_vec();
        for (entry_type, ts, e3, e4) in records {
            data.extend_from_slice(&entry_type.to_be_bytes());
            data.extend_from_slice(&ts.to_be_bytes());
            data.extend_from_slice(&ts.to_be_bytes()); // element2 repeats the timestamp
            data.extend_from_slice(&e3.to_be_bytes());
            data.extend_from_slice(&e4.to_be_bytes());
        }
        data
    }

    #[test]
    fn decode_event_table_happy() {
        let data = event_payload(
            1_600_000_000,
            &[
                (0x73, 1_600_000_060, 0x959930BF, 0x42500000),
                (0x77, 1_600_000_120, 0x0104EB6A, 0x00000001),
            ],
        );
        let Value::EventTable(table) = decode_value(DataType::EventTable, &data).unwrap() else {
            panic!("expected an event table");
        };
        assert_eq!(table.timestamp.unix_timestamp(), 1_600_000_000);
        assert_eq!(table.entries.len(), 2);
        for entry in table.entries.values() {
            assert_eq!(u64::from(entry.element2), entry.timestamp.unix_timestamp() as u64);
        }
        let first = table.entries.values().next().unwrap();
        assert_eq!(first.entry_type, 0x73);
        assert_eq!(first.element3, 0x959930BF);
    }

    #[test]
    fn decode_event_table_rejects_wide_entry_type() {
        let data = event_payload(1_600_000_000, &[(0x100, 1_600_000_060, 0, 0)]);
        assert!(matches!(
            decode_value(DataType::EventTable, &data),
            Err(ValueError::DecodeMalformed { .. })
        ));
    }

    #[test]
    fn decode_event_table_rejects_partial_record() {
        let mut data = event_payload(1_600_000_000, &[(0x73, 1_600_000_060, 0, 0)]);
        data.truncate(data.len() - 4);
        assert!(matches!(
            decode_value(DataType::EventTable, &data),
            Err(ValueError::DecodeMalformed { .. })
        ));
    }
}
