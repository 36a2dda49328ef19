//! Frame construction and the receive-side state machine.
//!
//! A frame starts with the token `0x2B` ('+'), followed by the command
//! byte, a length field (two bytes for the long commands, one otherwise),
//! the plant address for plant commands, the object id, the payload and a
//! CRC-16 over everything after the start token. Every `0x2B` or `0x2D`
//! after the start token is escaped with a leading `0x2D` ('-') on the
//! wire; escaping is transparent, so all length arithmetic runs on
//! unescaped bytes.

use bytes::{BufMut, Bytes, BytesMut};

use super::crc::crc16;
use crate::error::FrameError;
use crate::types::{Command, FrameType};

/// Token that starts a frame. Never escaped.
pub const START_TOKEN: u8 = 0x2B;
/// Token that escapes the next byte.
pub const ESCAPE_TOKEN: u8 = 0x2D;

/// Unescaped length of start token, command and the widest length field.
const HEADER_WITH_LENGTH: usize = 4;
/// Length of the trailing checksum.
const CRC_LEN: usize = 2;
/// Upper bound on the unescaped frame body. A long frame's length field
/// tops out at 0xFFFF; anything claiming more is rejected outright.
const MAX_FRAME_LENGTH: usize = 0xFFFF + HEADER_WITH_LENGTH;

/// A logical frame: what remains after framing, escaping and the checksum
/// have been stripped away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub command: Command,
    /// 32-bit object identifier.
    pub id: u32,
    /// Plant address; 0 for standard frames.
    pub address: u32,
    /// Raw payload. Empty for read requests and bare responses.
    pub data: Bytes,
}

impl Frame {
    /// A read request for an object.
    pub fn read(id: u32) -> Frame {
        Frame {
            command: Command::Read,
            id,
            address: 0,
            data: Bytes::new(),
        }
    }

    /// A write request carrying an encoded payload.
    pub fn write(id: u32, data: Bytes) -> Frame {
        Frame {
            command: Command::Write,
            id,
            address: 0,
            data,
        }
    }

    /// A response frame, as the simulator sends it.
    pub fn response(id: u32, address: u32, data: Bytes) -> Frame {
        Frame {
            command: Command::Response,
            id,
            address,
            data,
        }
    }

    /// Serializes the frame into the escaped, CRC-terminated byte string
    /// ready to be sent over the socket.
    ///
    /// Read commands never carry a payload on the wire; any payload set on
    /// the frame is discarded. Fails when the payload does not fit the
    /// length field.
    pub fn encode(&self) -> Result<Bytes, FrameError> {
        let frame_type = FrameType::for_command(self.command);
        let marker = usize::from(frame_type.marker());

        let payload: &[u8] = if self.command.is_read() {
            &[]
        } else {
            &self.data
        };
        let max_payload = if self.command.is_long() {
            usize::from(u16::MAX) - marker
        } else {
            usize::from(u8::MAX) - marker
        };
        if payload.len() > max_payload {
            return Err(FrameError::EncodeOverflow { len: payload.len() });
        }

        let mut body = BytesMut::with_capacity(HEADER_WITH_LENGTH + 8 + payload.len() + CRC_LEN);
        body.put_u8(self.command as u8);
        let length = marker + payload.len();
        if self.command.is_long() {
            body.put_u16(length as u16);
        } else {
            body.put_u8(length as u8);
        }
        if frame_type == FrameType::Plant {
            body.put_u32(self.address);
        }
        body.put_u32(self.id);
        body.put_slice(payload);
        let crc = crc16(&body);
        body.put_u16(crc);

        let mut out = BytesMut::with_capacity(body.len() + 8);
        out.put_u8(START_TOKEN);
        for &byte in body.iter() {
            if byte == START_TOKEN || byte == ESCAPE_TOKEN {
                out.put_u8(ESCAPE_TOKEN);
            }
            out.put_u8(byte);
        }
        Ok(out.freeze())
    }
}

/// Decoder state. The buffer always holds unescaped bytes including the
/// start token.
#[derive(Debug)]
enum DecodeState {
    /// Scanning for the start token; everything else is discarded.
    Sync,
    /// Accumulating body bytes. `frame_length` is known once the command
    /// and length field have arrived.
    Body {
        escaping: bool,
        frame_length: Option<usize>,
    },
    /// Terminal: the frame decoded and its checksum verified.
    Complete(Frame),
    /// Terminal: an error was raised; the decoder must be discarded.
    Failed,
}

/// Streaming decoder for a single frame.
///
/// Feed received bytes with [`consume`](ReceiveFrame::consume) until
/// [`complete`](ReceiveFrame::complete) reports true, then take the result
/// with [`frame`](ReceiveFrame::frame) or
/// [`into_frame`](ReceiveFrame::into_frame). `consume` returns how many
/// bytes it took from the input; a completed frame stops consumption at its
/// final byte, so the remainder belongs to the next frame.
///
/// The decoder is single-use: once complete or failed it consumes nothing
/// further, and the caller constructs a fresh one for the next frame. Every
/// error carries the consumed-byte count so the caller can skip exactly the
/// bad bytes and resynchronize.
#[derive(Debug)]
pub struct ReceiveFrame {
    buf: BytesMut,
    state: DecodeState,
}

impl Default for ReceiveFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl ReceiveFrame {
    pub fn new() -> ReceiveFrame {
        ReceiveFrame {
            buf: BytesMut::new(),
            state: DecodeState::Sync,
        }
    }

    /// Consumes input until the frame is complete, returning the number of
    /// bytes taken. A complete or failed decoder consumes nothing.
    pub fn consume(&mut self, data: &[u8]) -> Result<usize, FrameError> {
        if matches!(self.state, DecodeState::Complete(_) | DecodeState::Failed) {
            return Ok(0);
        }
        let mut consumed = 0;
        for &byte in data {
            consumed += 1;
            match self.step(byte, consumed) {
                Ok(true) => return Ok(consumed),
                Ok(false) => {}
                Err(err) => {
                    self.state = DecodeState::Failed;
                    return Err(err);
                }
            }
        }
        Ok(consumed)
    }

    /// Whether a frame has been fully received and its checksum verified.
    pub fn complete(&self) -> bool {
        matches!(self.state, DecodeState::Complete(_))
    }

    /// The decoded frame, once complete.
    pub fn frame(&self) -> Option<&Frame> {
        match &self.state {
            DecodeState::Complete(frame) => Some(frame),
            _ => None,
        }
    }

    /// Consumes the decoder, yielding the frame if one completed.
    pub fn into_frame(self) -> Option<Frame> {
        match self.state {
            DecodeState::Complete(frame) => Some(frame),
            _ => None,
        }
    }

    /// Processes one unescaped-stream byte. Returns true when the frame
    /// completed on this byte.
    fn step(&mut self, byte: u8, consumed: usize) -> Result<bool, FrameError> {
        match &mut self.state {
            DecodeState::Sync => {
                if byte == START_TOKEN {
                    self.buf.put_u8(byte);
                    self.state = DecodeState::Body {
                        escaping: false,
                        frame_length: None,
                    };
                }
                Ok(false)
            }
            DecodeState::Body {
                escaping,
                frame_length,
            } => {
                if *escaping {
                    *escaping = false;
                } else if byte == ESCAPE_TOKEN {
                    *escaping = true;
                    return Ok(false);
                }
                self.buf.put_u8(byte);

                if self.buf.len() == HEADER_WITH_LENGTH {
                    let command = match Command::from_byte(self.buf[1]) {
                        Some(Command::Extension) => {
                            return Err(FrameError::Extension { consumed })
                        }
                        Some(command) => command,
                        None => {
                            return Err(FrameError::InvalidCommand {
                                command: self.buf[1],
                                consumed,
                            })
                        }
                    };
                    // Body length after the start token: length field value
                    // plus the width of the length field itself, plus the
                    // command byte and the start token.
                    let length = if command.is_long() {
                        usize::from(u16::from_be_bytes([self.buf[2], self.buf[3]])) + 2
                    } else {
                        usize::from(self.buf[2]) + 1
                    } + 2;
                    if length > MAX_FRAME_LENGTH {
                        return Err(FrameError::LengthExceeded { consumed });
                    }
                    *frame_length = Some(length);
                }

                if let Some(length) = *frame_length {
                    if self.buf.len() == length + CRC_LEN {
                        let frame = decode_body(&self.buf, consumed)?;
                        self.state = DecodeState::Complete(frame);
                        return Ok(true);
                    }
                    if self.buf.len() > length + CRC_LEN {
                        return Err(FrameError::LengthExceeded { consumed });
                    }
                }
                Ok(false)
            }
            // consume() guards against these.
            DecodeState::Complete(_) | DecodeState::Failed => Ok(false),
        }
    }
}

/// Verifies the checksum of a fully buffered frame and splits it into its
/// fields. The buffer holds the complete unescaped frame including start
/// token and CRC.
fn decode_body(buf: &[u8], consumed: usize) -> Result<Frame, FrameError> {
    let crc_offset = buf.len() - CRC_LEN;
    let received = u16::from_be_bytes([buf[crc_offset], buf[crc_offset + 1]]);
    let calculated = crc16(&buf[1..crc_offset]);
    if received != calculated {
        return Err(FrameError::CrcMismatch {
            received,
            calculated,
            consumed,
        });
    }

    let command = Command::from_byte(buf[1]).ok_or(FrameError::InvalidCommand {
        command: buf[1],
        consumed,
    })?;
    let (length_value, mut idx) = if command.is_long() {
        (usize::from(u16::from_be_bytes([buf[2], buf[3]])), 4)
    } else {
        (usize::from(buf[2]), 3)
    };
    let frame_type = FrameType::for_command(command);
    let data_length = length_value
        .checked_sub(usize::from(frame_type.marker()))
        .ok_or(FrameError::LengthExceeded { consumed })?;

    let address = if frame_type == FrameType::Plant {
        let address = u32::from_be_bytes([buf[idx], buf[idx + 1], buf[idx + 2], buf[idx + 3]]);
        idx += 4;
        address
    } else {
        0
    };
    let id = u32::from_be_bytes([buf[idx], buf[idx + 1], buf[idx + 2], buf[idx + 3]]);
    idx += 4;
    let data = Bytes::copy_from_slice(&buf[idx..idx + data_length]);

    Ok(Frame {
        command,
        id,
        address,
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0x00000000, "2b010400000000c2b6")]
    #[test_case(0x0000C0DE, "2b01040000c0defe51")]
    #[test_case(0xFFFFFFFF, "2b0104ffffffff5b79")]
    fn encode_read(id: u32, expected: &str) {
        let encoded = Frame::read(id).encode().unwrap();
        assert_eq!(hex::encode(&encoded), expected);
    }

    #[test_case(0x00000000, "2b0204000000000c56")]
    #[test_case(0x0000C0DE, "2b02040000c0de30b1")]
    #[test_case(0xFFFFFFFF, "2b0204ffffffff9599")]
    fn encode_write_without_payload(id: u32, expected: &str) {
        let encoded = Frame::write(id, Bytes::new()).encode().unwrap();
        assert_eq!(hex::encode(&encoded), expected);
    }

    #[test_case(0x00000000, "2b050400000000c417")]
    #[test_case(0x0000C0DE, "2b05040000c0def8f0")]
    #[test_case(0xFFFFFFFF, "2b0504ffffffff5dd8")]
    fn encode_response_without_payload(id: u32, expected: &str) {
        let encoded = Frame::response(id, 0, Bytes::new()).encode().unwrap();
        assert_eq!(hex::encode(&encoded), expected);
    }

    #[test_case(0x00000000, "2b06000400000000b754")]
    #[test_case(0x0000C0DE, "2b0600040000c0dea78b")]
    #[test_case(0xFFFFFFFF, "2b060004ffffffff6ac4")]
    fn encode_long_response_without_payload(id: u32, expected: &str) {
        let frame = Frame {
            command: Command::LongResponse,
            id,
            address: 0,
            data: Bytes::new(),
        };
        assert_eq!(hex::encode(&frame.encode().unwrap()), expected);
    }

    #[test]
    fn encode_read_discards_payload() {
        let frame = Frame {
            command: Command::Read,
            id: 0x959930BF,
            address: 0,
            data: Bytes::from_static(&[0x01, 0x02]),
        };
        assert_eq!(
            hex::encode(&frame.encode().unwrap()),
            hex::encode(&Frame::read(0x959930BF).encode().unwrap())
        );
    }

    #[test]
    fn encode_rejects_oversized_payload() {
        let frame = Frame::write(0x1, Bytes::from(vec![0u8; 252]));
        assert_eq!(
            frame.encode(),
            Err(FrameError::EncodeOverflow { len: 252 })
        );
        // The same payload fits a long write.
        let frame = Frame {
            command: Command::LongWrite,
            id: 0x1,
            address: 0,
            data: Bytes::from(vec![0u8; 252]),
        };
        assert!(frame.encode().is_ok());
    }

    #[test]
    fn escapes_start_and_escape_tokens() {
        // Id chosen so the body contains both token values.
        let frame = Frame::write(0x002B2D2B, Bytes::new());
        let encoded = frame.encode().unwrap();
        // Start token, then the escaped body: every 0x2B/0x2D after the
        // first byte must be preceded by 0x2D.
        let mut escapes = 0;
        let mut i = 1;
        while i < encoded.len() {
            if encoded[i] == ESCAPE_TOKEN {
                escapes += 1;
                i += 2;
            } else {
                assert_ne!(encoded[i], START_TOKEN, "unescaped start token in body");
                i += 1;
            }
        }
        assert!(escapes >= 3);
    }

    #[test]
    fn escape_transparency_length() {
        let frame = Frame::write(0x002B2D2B, Bytes::from_static(&[0x2B, 0x2D, 0x42]));
        let encoded = frame.encode().unwrap();

        // Rebuild the unescaped body to count the token bytes in body+CRC.
        let mut body = Vec::new();
        let mut i = 1;
        while i < encoded.len() {
            if encoded[i] == ESCAPE_TOKEN {
                body.push(encoded[i + 1]);
                i += 2;
            } else {
                body.push(encoded[i]);
                i += 1;
            }
        }
        let n_escapes = body
            .iter()
            .filter(|&&b| b == START_TOKEN || b == ESCAPE_TOKEN)
            .count();
        assert_eq!(encoded.len(), 1 + body.len() + n_escapes);
    }

    fn decode_all(data: &[u8]) -> Frame {
        let mut rx = ReceiveFrame::new();
        let consumed = rx.consume(data).unwrap();
        assert_eq!(consumed, data.len(), "the frame should consume all data");
        assert!(rx.complete(), "the frame should be complete");
        rx.into_frame().unwrap()
    }

    #[test_case("2b0204000000000c56", Command::Write, 0x0)]
    #[test_case("2b02040000c0de30b1", Command::Write, 0xC0DE)]
    #[test_case("2b0204ffffffff9599", Command::Write, 0xFFFFFFFF)]
    #[test_case("2b010400000000c2b6", Command::Read, 0x0)]
    #[test_case("2b01040000c0defe51", Command::Read, 0xC0DE)]
    #[test_case("2b0104ffffffff5b79", Command::Read, 0xFFFFFFFF)]
    #[test_case("2b06000400000000b754", Command::LongResponse, 0x0)]
    #[test_case("2b0600040000c0dea78b", Command::LongResponse, 0xC0DE)]
    #[test_case("2b060004ffffffff6ac4", Command::LongResponse, 0xFFFFFFFF)]
    #[test_case("2b050400000000c417", Command::Response, 0x0)]
    #[test_case("2b05040000c0def8f0", Command::Response, 0xC0DE)]
    #[test_case("2b0504ffffffff5dd8", Command::Response, 0xFFFFFFFF)]
    fn decode_standard_without_payload(data: &str, command: Command, id: u32) {
        let frame = decode_all(&hex::decode(data).unwrap());
        assert_eq!(frame.command, command);
        assert_eq!(frame.id, id);
        assert_eq!(frame.address, 0, "standard frames have no address");
        assert!(frame.data.is_empty());
    }

    #[test]
    fn decode_skips_leading_garbage() {
        // Response for `display_struct.brightness` from a real device,
        // with a stray NUL in front.
        let data = hex::decode("002b050529bda75fffb8d2").unwrap();
        let frame = decode_all(&data);
        assert_eq!(frame.command, Command::Response);
        assert_eq!(frame.id, 0x29BDA75F);
        assert_eq!(frame.address, 0);
        assert_eq!(&frame.data[..], &[0xFF]);
    }

    #[test]
    fn decode_long_string_response() {
        // Response for `android_description` from a real device.
        let data = hex::decode(
            "002b0544ebc62737505320362e30204241334c00000000000000000000000000000000\
             00000000000000000000000000000000000000000000000000000000000000000000000000476c",
        )
        .unwrap();
        let frame = decode_all(&data);
        assert_eq!(frame.command, Command::Response);
        assert_eq!(frame.id, 0xEBC62737);
        assert_eq!(frame.data.len(), 0x44 - 4);
        assert_eq!(&frame.data[..11], b"PS 6.0 BA3L");
    }

    #[test]
    fn round_trip_standard_with_payload() {
        let frame = Frame::write(0x6F3876BC, Bytes::from_static(&[0x65, 0x92, 0x00, 0x80]));
        let decoded = decode_all(&frame.encode().unwrap());
        assert_eq!(decoded, frame);
    }

    #[test]
    fn round_trip_plant_frame() {
        let frame = Frame {
            command: Command::PlantWrite,
            id: 0x959930BF,
            address: 0x00C0FFEE,
            data: Bytes::from_static(&[0x42, 0x51, 0x00, 0x00]),
        };
        let decoded = decode_all(&frame.encode().unwrap());
        assert_eq!(decoded, frame);
    }

    #[test]
    fn round_trip_long_write() {
        let payload: Vec<u8> = (0..300).map(|i| (i % 251) as u8).collect();
        let frame = Frame {
            command: Command::LongWrite,
            id: 0x12345678,
            address: 0,
            data: Bytes::from(payload),
        };
        let decoded = decode_all(&frame.encode().unwrap());
        assert_eq!(decoded, frame);
    }

    #[test]
    fn round_trip_escaped_id_byte_by_byte() {
        // Both token values inside the id; feed a byte at a time and check
        // the completion boundary is exact.
        let frame = Frame::write(0x002B2D2B, Bytes::new());
        let encoded = frame.encode().unwrap();

        let mut rx = ReceiveFrame::new();
        for (i, &byte) in encoded.iter().enumerate() {
            let consumed = rx.consume(&[byte]).unwrap();
            assert_eq!(consumed, 1);
            if i < encoded.len() - 1 {
                assert!(!rx.complete(), "complete too early at byte {i}");
            }
        }
        assert!(rx.complete());
        assert_eq!(rx.frame().unwrap().id, 0x002B2D2B);
    }

    #[test]
    fn chunking_equivalence() {
        let frame = Frame::write(0x6F3876BC, Bytes::from_static(&[0x2B, 0x2D, 0x00, 0x2B]));
        let encoded = frame.encode().unwrap();

        for chunk_size in 1..=encoded.len() {
            let mut rx = ReceiveFrame::new();
            let mut fed = 0;
            for chunk in encoded.chunks(chunk_size) {
                fed += rx.consume(chunk).unwrap();
            }
            assert_eq!(fed, encoded.len());
            assert!(rx.complete(), "chunk size {chunk_size}");
            assert_eq!(rx.into_frame().unwrap(), frame);
        }
    }

    #[test]
    fn consume_stops_at_frame_boundary() {
        let first = Frame::read(0x959930BF).encode().unwrap();
        let second = Frame::read(0x0104EB6A).encode().unwrap();
        let mut stream = first.to_vec();
        stream.extend_from_slice(&second);

        let mut rx = ReceiveFrame::new();
        let consumed = rx.consume(&stream).unwrap();
        assert_eq!(consumed, first.len());
        assert_eq!(rx.frame().unwrap().id, 0x959930BF);

        let mut rx = ReceiveFrame::new();
        let consumed2 = rx.consume(&stream[consumed..]).unwrap();
        assert_eq!(consumed2, second.len());
        assert_eq!(rx.frame().unwrap().id, 0x0104EB6A);
    }

    #[test]
    fn complete_decoder_consumes_nothing() {
        let data = Frame::read(0xC0DE).encode().unwrap();
        let mut rx = ReceiveFrame::new();
        rx.consume(&data).unwrap();
        assert!(rx.complete());
        assert_eq!(rx.consume(&[0x2B, 0x01]).unwrap(), 0);
    }

    #[test]
    fn crc_mismatch_reports_both_sums_and_consumed() {
        let mut data = Frame::read(0x959930BF).encode().unwrap().to_vec();
        let last = data.len() - 1;
        data[last] ^= 0xFF;

        let mut rx = ReceiveFrame::new();
        match rx.consume(&data) {
            Err(FrameError::CrcMismatch {
                received,
                calculated,
                consumed,
            }) => {
                assert_eq!(calculated, 0x0D65);
                assert_eq!(received, 0x0D65 ^ 0x00FF);
                assert_eq!(consumed, data.len());
            }
            other => panic!("expected CRC mismatch, got {other:?}"),
        }
        // The decoder is spent.
        assert_eq!(rx.consume(&data).unwrap(), 0);
    }

    #[test]
    fn invalid_command_reports_consumed() {
        // 0x2B start, then a command byte outside the known set.
        let data = [0x2B, 0x07, 0x04, 0x00, 0x00, 0x00, 0x00];
        let mut rx = ReceiveFrame::new();
        match rx.consume(&data) {
            Err(FrameError::InvalidCommand { command, consumed }) => {
                assert_eq!(command, 0x07);
                assert_eq!(consumed, 4);
            }
            other => panic!("expected invalid command, got {other:?}"),
        }
    }

    #[test]
    fn extension_is_a_distinct_error() {
        // The protocol-switch sequence a device may emit.
        let data = [0x2B, 0x3C, 0xE1, 0x00];
        let mut rx = ReceiveFrame::new();
        match rx.consume(&data) {
            Err(FrameError::Extension { consumed }) => assert_eq!(consumed, 4),
            other => panic!("expected extension error, got {other:?}"),
        }
    }

    #[test]
    fn keep_alive_is_rejected_as_invalid_command() {
        // "AT+\r" keep-alive: the '+' syncs the decoder and '\r' lands in
        // the command slot once enough bytes follow. The frame underway at
        // that point is lost; the one after is picked up on resync.
        let mut stream = b"AT+\r".to_vec();
        stream.extend_from_slice(&Frame::read(0xC0DE).encode().unwrap());
        stream.extend_from_slice(&Frame::read(0x959930BF).encode().unwrap());

        let mut rx = ReceiveFrame::new();
        let err = rx.consume(&stream).unwrap_err();
        let skip = err.consumed_bytes();
        assert!(matches!(err, FrameError::InvalidCommand { command: 0x0D, .. }));

        // Resynchronize on the remainder: the next start token wins.
        let mut rx = ReceiveFrame::new();
        rx.consume(&stream[skip..]).unwrap();
        assert!(rx.complete());
        assert_eq!(rx.frame().unwrap().id, 0x959930BF);
    }

    #[test]
    fn underflowing_length_field_is_rejected() {
        // A standard frame whose length field is below the frame type
        // marker. CRC must be valid so the length check is what trips.
        let body = [0x05u8, 0x02, 0x00, 0x00];
        let crc = crate::protocol::crc::crc16(&body);
        let mut data = vec![0x2B];
        data.extend_from_slice(&body);
        data.extend_from_slice(&crc.to_be_bytes());

        let mut rx = ReceiveFrame::new();
        assert!(matches!(
            rx.consume(&data),
            Err(FrameError::LengthExceeded { .. })
        ));
    }
}
