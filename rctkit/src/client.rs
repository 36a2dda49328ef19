//! Async TCP client for talking to a device.
//!
//! The device listens on TCP port 8899 and speaks nothing but the frame
//! protocol, apart from an occasional `AT+\r` keep-alive and a
//! protocol-switch escape sequence. [`FrameCodec`] adapts the streaming
//! decoder to [`tokio_util::codec`], silently skipping both along with any
//! frame that fails its checksum; [`Client`] layers request/response
//! helpers on top.
//!
//! The protocol carries no sequence numbers: responses correlate to
//! requests by object id alone. [`Client`] assumes one outstanding request
//! at a time; callers multiplexing several must demultiplex by id
//! themselves using [`Client::send_frame`] and [`Client::next_frame`].

use std::io;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use bytes::{Buf, BytesMut};
use futures::{SinkExt, StreamExt};
use time::OffsetDateTime;
use tokio::net::TcpStream;
use tokio_util::codec::{Decoder, Encoder, Framed};
use tracing::{debug, info, warn};

use crate::error::FrameError;
use crate::protocol::{decode_value, encode_value, Frame, ReceiveFrame, Value};
use crate::registry::ObjectInfo;
use crate::types::{Command, DataType};

/// TCP port the device listens on.
pub const DEFAULT_PORT: u16 = 8899;

const CONNECT_ATTEMPTS: u32 = 3;
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const RETRY_DELAY: Duration = Duration::from_secs(5);

/// Codec adapter bridging the byte-at-a-time frame decoder into a
/// [`Framed`] transport.
///
/// Decode errors are recoverable at the stream level: the codec logs them,
/// skips the offending bytes and resynchronizes on the next start token.
/// This swallows keep-alives, extension frames and corrupted frames alike,
/// which matches what the device expects of a client.
#[derive(Debug, Default)]
pub struct FrameCodec {
    rx: ReceiveFrame,
}

impl FrameCodec {
    pub fn new() -> FrameCodec {
        FrameCodec {
            rx: ReceiveFrame::new(),
        }
    }
}

impl Decoder for FrameCodec {
    type Item = Frame;
    type Error = io::Error;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Frame>, io::Error> {
        while !src.is_empty() {
            match self.rx.consume(src) {
                Ok(consumed) => {
                    src.advance(consumed);
                    if self.rx.complete() {
                        let done = std::mem::replace(&mut self.rx, ReceiveFrame::new());
                        return Ok(done.into_frame());
                    }
                    // All input consumed without completing; the partial
                    // frame carries over to the next read.
                    break;
                }
                Err(err) => {
                    let skip = err.consumed_bytes().min(src.len());
                    match &err {
                        FrameError::Extension { .. } => {
                            debug!("skipping extension frame ({skip} bytes)")
                        }
                        _ => warn!("skipping {skip} bytes after decode error: {err}"),
                    }
                    src.advance(skip);
                    self.rx = ReceiveFrame::new();
                }
            }
        }
        Ok(None)
    }
}

impl Encoder<Frame> for FrameCodec {
    type Error = io::Error;

    fn encode(&mut self, frame: Frame, dst: &mut BytesMut) -> Result<(), io::Error> {
        let encoded = frame
            .encode()
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
        dst.extend_from_slice(&encoded);
        Ok(())
    }
}

/// Connection to a device.
pub struct Client {
    framed: Framed<TcpStream, FrameCodec>,
}

impl Client {
    /// Connects to `host:port`, retrying a few times before giving up.
    pub async fn connect(host: &str, port: u16) -> Result<Client> {
        for attempt in 1..=CONNECT_ATTEMPTS {
            debug!("connection attempt {attempt}/{CONNECT_ATTEMPTS} to {host}:{port}");

            match tokio::time::timeout(CONNECT_TIMEOUT, TcpStream::connect((host, port))).await {
                Ok(Ok(socket)) => {
                    info!("connected to {host}:{port}");
                    return Ok(Client {
                        framed: Framed::new(socket, FrameCodec::new()),
                    });
                }
                Ok(Err(err)) => {
                    warn!("connection attempt {attempt}/{CONNECT_ATTEMPTS} failed: {err}");
                }
                Err(_) => {
                    warn!(
                        "connection attempt {attempt}/{CONNECT_ATTEMPTS} timed out after {}s",
                        CONNECT_TIMEOUT.as_secs()
                    );
                }
            }

            if attempt < CONNECT_ATTEMPTS {
                tokio::time::sleep(RETRY_DELAY).await;
            }
        }

        bail!("failed to connect to {host}:{port} after {CONNECT_ATTEMPTS} attempts")
    }

    /// Wraps an established stream. Used by tests to talk over a socket
    /// pair without the retry logic.
    pub fn from_stream(stream: TcpStream) -> Client {
        Client {
            framed: Framed::new(stream, FrameCodec::new()),
        }
    }

    /// Sends a raw frame.
    pub async fn send_frame(&mut self, frame: Frame) -> Result<()> {
        debug!(
            "sending {:?} id={:#010X} with {} payload bytes",
            frame.command,
            frame.id,
            frame.data.len()
        );
        self.framed.send(frame).await.context("failed to send frame")
    }

    /// Receives the next frame, whatever it is.
    pub async fn next_frame(&mut self) -> Result<Frame> {
        match self.framed.next().await {
            Some(Ok(frame)) => Ok(frame),
            Some(Err(err)) => Err(err).context("transport error while receiving"),
            None => bail!("connection closed by the device"),
        }
    }

    /// Receives frames until one carries the wanted object id. Responses
    /// for other ids are logged and dropped.
    async fn next_response_for(&mut self, id: u32) -> Result<Frame> {
        loop {
            let frame = self.next_frame().await?;
            if frame.id == id && frame.command.is_response() {
                return Ok(frame);
            }
            debug!(
                "ignoring {:?} for id {:#010X} while waiting for {:#010X}",
                frame.command, frame.id, id
            );
        }
    }

    /// Reads an object, returning the raw response frame.
    ///
    /// Histogram and event log objects are queried by writing the current
    /// UNIX time; the device answers with all records up to that point.
    pub async fn read_raw(&mut self, info: &ObjectInfo) -> Result<Frame> {
        let request = match info.response_data_type {
            DataType::Timeseries | DataType::EventTable => {
                let now = OffsetDateTime::now_utc().unix_timestamp();
                let now = i32::try_from(now).context("current time does not fit INT32")?;
                let payload = encode_value(DataType::Int32, &Value::I32(now))?;
                Frame::write(info.object_id, payload)
            }
            _ => Frame::read(info.object_id),
        };
        self.send_frame(request).await?;
        self.next_response_for(info.object_id).await
    }

    /// Reads an object and decodes the response payload.
    pub async fn read_value(&mut self, info: &ObjectInfo) -> Result<Value> {
        let response = self.read_raw(info).await?;
        decode_value(info.response_data_type, &response.data).with_context(|| {
            format!(
                "failed to decode {} response for {}",
                info.response_data_type, info.name
            )
        })
    }

    /// Encodes a value with the object's request data type, writes it and
    /// waits for the device to acknowledge with a response frame.
    pub async fn write_value(&mut self, info: &ObjectInfo, value: &Value) -> Result<Frame> {
        let payload = encode_value(info.request_data_type, value)?;
        let command = if payload.len() > 251 {
            Command::LongWrite
        } else {
            Command::Write
        };
        self.send_frame(Frame {
            command,
            id: info.object_id,
            address: 0,
            data: payload,
        })
        .await?;

        self.next_response_for(info.object_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::BufMut;

    fn decode_stream(codec: &mut FrameCodec, data: &[u8]) -> Vec<Frame> {
        let mut src = BytesMut::new();
        src.put_slice(data);
        let mut frames = Vec::new();
        while let Some(frame) = codec.decode(&mut src).unwrap() {
            frames.push(frame);
        }
        frames
    }

    #[test]
    fn codec_decodes_back_to_back_frames() {
        let mut stream = Frame::read(0x959930BF).encode().unwrap().to_vec();
        stream.extend_from_slice(&Frame::read(0x0104EB6A).encode().unwrap());

        let mut codec = FrameCodec::new();
        let frames = decode_stream(&mut codec, &stream);
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].id, 0x959930BF);
        assert_eq!(frames[1].id, 0x0104EB6A);
    }

    #[test]
    fn codec_carries_partial_frames_across_reads() {
        let encoded = Frame::read(0x959930BF).encode().unwrap();
        let (head, tail) = encoded.split_at(3);

        let mut codec = FrameCodec::new();
        let mut src = BytesMut::from(head);
        assert!(codec.decode(&mut src).unwrap().is_none());
        src.put_slice(tail);
        let frame = codec.decode(&mut src).unwrap().unwrap();
        assert_eq!(frame.id, 0x959930BF);
    }

    #[test]
    fn codec_skips_protocol_switch_sequence() {
        let mut stream = vec![0x2B, 0x3C, 0xE1, 0x00];
        stream.extend_from_slice(&Frame::read(0xC0DE).encode().unwrap());

        let mut codec = FrameCodec::new();
        let frames = decode_stream(&mut codec, &stream);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].id, 0xC0DE);
    }

    #[test]
    fn codec_recovers_after_crc_corruption() {
        let mut bad = Frame::read(0x959930BF).encode().unwrap().to_vec();
        let last = bad.len() - 1;
        bad[last] ^= 0x01;
        bad.extend_from_slice(&Frame::read(0xC0DE).encode().unwrap());

        let mut codec = FrameCodec::new();
        let frames = decode_stream(&mut codec, &bad);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].id, 0xC0DE);
    }

    #[test]
    fn codec_round_trips_through_encoder() {
        let frame = Frame::write(0x002B2D2B, bytes::Bytes::from_static(&[0x2B, 0x2D]));
        let mut codec = FrameCodec::new();
        let mut wire = BytesMut::new();
        codec.encode(frame.clone(), &mut wire).unwrap();

        let decoded = codec.decode(&mut wire).unwrap().unwrap();
        assert_eq!(decoded, frame);
        assert!(wire.is_empty());
    }

    #[tokio::test]
    async fn event_log_query_round_trip() {
        use crate::registry::REGISTRY;
        use bytes::Bytes;
        use tokio::net::TcpListener;

        // A fake device that answers the error log query with two records.
        let listener = TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (stream, _) = listener.accept().await.unwrap();
            let mut framed = Framed::new(stream, FrameCodec::new());
            let request = framed.next().await.unwrap().unwrap();
            assert_eq!(request.command, Command::Write);
            assert_eq!(request.data.len(), 4, "query carries an INT32 timestamp");

            let mut payload = 1_600_000_000u32.to_be_bytes().to_vec();
            for (entry_type, ts) in [(0x73u32, 1_600_000_060u32), (0x77, 1_600_000_120)] {
                payload.extend_from_slice(&entry_type.to_be_bytes());
                payload.extend_from_slice(&ts.to_be_bytes());
                payload.extend_from_slice(&ts.to_be_bytes());
                payload.extend_from_slice(&0x959930BFu32.to_be_bytes());
                payload.extend_from_slice(&0x00000001u32.to_be_bytes());
            }
            framed
                .send(Frame {
                    command: Command::LongResponse,
                    id: request.id,
                    address: 0,
                    data: Bytes::from(payload),
                })
                .await
                .unwrap();
        });

        let info = REGISTRY.get_by_name("logger.error_log_time_stamp").unwrap();
        assert_eq!(info.response_data_type, DataType::EventTable);

        let stream = TcpStream::connect(addr).await.unwrap();
        let mut client = Client::from_stream(stream);
        let value = client.read_value(info).await.unwrap();

        let Value::EventTable(table) = value else {
            panic!("expected an event table");
        };
        assert_eq!(table.entries.len(), 2);
        for entry in table.entries.values() {
            assert!(matches!(entry.entry_type, 0x73 | 0x77));
            assert_eq!(i64::from(entry.element2), entry.timestamp.unix_timestamp());
        }
    }
}
