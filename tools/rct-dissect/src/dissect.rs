//! Frame-level dissection of a captured byte stream.

use rctkit::error::FrameError;
use rctkit::protocol::{decode_value, Frame, ReceiveFrame, Value};
use rctkit::registry::{ObjectInfo, REGISTRY};
use rctkit::types::DataType;

/// A dissected frame together with everything the registry knows about it.
#[derive(Debug)]
pub struct DissectedFrame {
    /// Byte offset of the first consumed byte within the capture.
    pub offset: usize,
    pub frame: Frame,
    /// Registry descriptor, when the object id is known.
    pub info: Option<&'static ObjectInfo>,
    /// Decoded payload, when the frame direction implies a data type and
    /// decoding succeeds.
    pub value: Option<Value>,
}

/// One event while walking a capture.
#[derive(Debug)]
pub enum CaptureEvent {
    Frame(DissectedFrame),
    /// Undecodable bytes were skipped.
    Error {
        offset: usize,
        skipped: usize,
        error: FrameError,
    },
}

/// Walks the whole capture, yielding frames and the gaps between them.
pub fn dissect_capture(data: &[u8]) -> Vec<CaptureEvent> {
    let mut events = Vec::new();
    let mut offset = 0;
    let mut rx = ReceiveFrame::new();

    while offset < data.len() {
        match rx.consume(&data[offset..]) {
            Ok(0) => break,
            Ok(consumed) => {
                let done = std::mem::replace(&mut rx, ReceiveFrame::new());
                match done.into_frame() {
                    Some(frame) => {
                        events.push(CaptureEvent::Frame(dissect_frame(offset, frame)));
                        offset += consumed;
                    }
                    None => {
                        // Capture ended mid-frame; nothing more to show.
                        offset += consumed;
                        break;
                    }
                }
            }
            Err(error) => {
                let skipped = error.consumed_bytes();
                events.push(CaptureEvent::Error {
                    offset,
                    skipped,
                    error,
                });
                offset += skipped;
                rx = ReceiveFrame::new();
            }
        }
    }
    events
}

/// Attaches registry knowledge to a decoded frame.
fn dissect_frame(offset: usize, frame: Frame) -> DissectedFrame {
    let info = REGISTRY.get_by_id(frame.id).ok();
    let value = payload_type(&frame, info)
        .and_then(|data_type| decode_value(data_type, &frame.data).ok());
    DissectedFrame {
        offset,
        frame,
        info,
        value,
    }
}

/// The data type governing the frame's payload, if any: responses decode
/// with the response type, writes with the request type, reads carry none.
fn payload_type(frame: &Frame, info: Option<&ObjectInfo>) -> Option<DataType> {
    let info = info?;
    if frame.command.is_response() {
        Some(info.response_data_type)
    } else if frame.command.is_write() {
        Some(info.request_data_type)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[test]
    fn dissects_response_with_registry_knowledge() {
        // battery.soc response carrying 0.52 as float.
        let frame = Frame::response(0x959930BF, 0, Bytes::copy_from_slice(&0.52f32.to_be_bytes()));
        let capture = frame.encode().unwrap();

        let events = dissect_capture(&capture);
        assert_eq!(events.len(), 1);
        let CaptureEvent::Frame(dissected) = &events[0] else {
            panic!("expected a frame event");
        };
        assert_eq!(dissected.info.unwrap().name, "battery.soc");
        assert_eq!(dissected.value, Some(Value::Float(0.52)));
    }

    #[test]
    fn reports_gaps_between_frames() {
        let mut capture = Frame::read(0x959930BF).encode().unwrap().to_vec();
        // A corrupted copy in the middle.
        let mut bad = Frame::read(0x0104EB6A).encode().unwrap().to_vec();
        let last = bad.len() - 1;
        bad[last] ^= 0x20;
        capture.extend_from_slice(&bad);
        capture.extend_from_slice(&Frame::read(0x0104EB6A).encode().unwrap());

        let events = dissect_capture(&capture);
        assert_eq!(events.len(), 3);
        assert!(matches!(events[0], CaptureEvent::Frame(_)));
        assert!(matches!(
            events[1],
            CaptureEvent::Error {
                error: FrameError::CrcMismatch { .. },
                ..
            }
        ));
        assert!(matches!(events[2], CaptureEvent::Frame(_)));
    }

    #[test]
    fn unknown_id_dissects_without_registry_info() {
        let frame = Frame::read(0x01020304).encode().unwrap();
        let events = dissect_capture(&frame);
        let CaptureEvent::Frame(dissected) = &events[0] else {
            panic!("expected a frame event");
        };
        assert!(dissected.info.is_none());
        assert!(dissected.value.is_none());
    }
}
