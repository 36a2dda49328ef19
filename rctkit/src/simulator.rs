//! Device simulator.
//!
//! Binds a TCP listener and answers queries with valid but meaningless
//! responses, so client code can be exercised without hardware. Read
//! requests are answered with the registry's stand-in value for the object,
//! encoded with its response data type. Writes are decoded, logged and
//! acknowledged by echoing the payload back; nothing is persisted.
//!
//! Each connection gets its own task and its own frame decoder.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use futures::{SinkExt, StreamExt};
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, info, warn};

use crate::client::FrameCodec;
use crate::protocol::{decode_value, encode_value, Frame};
use crate::registry::REGISTRY;

/// Runs the simulator until the task is cancelled. Binds to `host:port`
/// and serves any number of concurrent clients.
pub async fn run_simulator(host: &str, port: u16) -> Result<()> {
    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("unable to bind to {host}:{port}"))?;
    info!("simulator listening on {host}:{port}");

    loop {
        let (stream, peer) = listener
            .accept()
            .await
            .context("failed to accept connection")?;
        info!("connection accepted from {peer}");
        tokio::spawn(async move {
            if let Err(err) = serve_connection(stream, peer).await {
                warn!("connection {peer} ended with error: {err:#}");
            }
            debug!("closing connection {peer}");
        });
    }
}

async fn serve_connection(stream: TcpStream, peer: SocketAddr) -> Result<()> {
    let mut framed = tokio_util::codec::Framed::new(stream, FrameCodec::new());

    while let Some(frame) = framed.next().await {
        let frame = frame.context("transport error")?;
        debug!(
            "{peer}: {:?} id={:#010X} with {} payload bytes",
            frame.command,
            frame.id,
            frame.data.len()
        );
        if let Some(reply) = respond(&frame) {
            framed.send(reply).await.context("failed to send response")?;
        }
    }
    Ok(())
}

/// Builds the response for a request frame, if one is warranted.
fn respond(frame: &Frame) -> Option<Frame> {
    let info = match REGISTRY.get_by_id(frame.id) {
        Ok(info) => info,
        Err(err) => {
            warn!("{err}; request ignored");
            return None;
        }
    };
    let width = REGISTRY.name_max_length();

    if frame.command.is_read() {
        let payload = match encode_value(info.response_data_type, &info.sim_value()) {
            Ok(payload) => payload,
            Err(err) => {
                // Histogram and event log objects have no scalar stand-in.
                warn!("cannot answer read of {}: {err}", info.name);
                return None;
            }
        };
        let reply = Frame::response(frame.id, frame.address, payload);
        info!(
            "read   : {:#010X} {:width$} -> {} bytes",
            info.object_id,
            info.name,
            reply.data.len()
        );
        Some(reply)
    } else if frame.command.is_write() {
        match decode_value(info.request_data_type, &frame.data) {
            Ok(value) => info!(
                "write  : #{:<3} {:#010X} {:width$} -> {value}",
                info.index, info.object_id, info.name
            ),
            Err(err) => warn!(
                "write  : #{:<3} {:#010X} {:width$} -> undecodable payload ({err})",
                info.index, info.object_id, info.name
            ),
        }
        // Acknowledge without persisting anything.
        Some(Frame::response(frame.id, frame.address, frame.data.clone()))
    } else {
        debug!("no response for {:?}", frame.command);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Client;
    use crate::protocol::Value;
    use crate::types::{Command, DataType};

    /// Serves exactly one connection from an ephemeral port.
    async fn spawn_simulator() -> SocketAddr {
        let listener = TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (stream, peer) = listener.accept().await.unwrap();
            let _ = serve_connection(stream, peer).await;
        });
        addr
    }

    #[tokio::test]
    async fn read_float_round_trip() {
        let addr = spawn_simulator().await;
        let stream = TcpStream::connect(addr).await.unwrap();
        let mut client = Client::from_stream(stream);

        let info = REGISTRY.get_by_name("battery.soc").unwrap();
        let value = client.read_value(info).await.unwrap();
        assert_eq!(value, Value::Float(0.0));
    }

    #[tokio::test]
    async fn read_string_uses_stand_in() {
        let addr = spawn_simulator().await;
        let stream = TcpStream::connect(addr).await.unwrap();
        let mut client = Client::from_stream(stream);

        let info = REGISTRY.get_by_name("android_description").unwrap();
        let value = client.read_value(info).await.unwrap();
        assert_eq!(value, Value::String("RCT".to_string()));
    }

    #[tokio::test]
    async fn write_is_acknowledged_with_echo() {
        let addr = spawn_simulator().await;
        let stream = TcpStream::connect(addr).await.unwrap();
        let mut client = Client::from_stream(stream);

        let info = REGISTRY.get_by_name("power_mng.soc_min").unwrap();
        assert_eq!(info.request_data_type, DataType::Float);
        let ack = client
            .write_value(info, &Value::Float(0.10))
            .await
            .unwrap();
        assert_eq!(ack.command, Command::Response);
        assert_eq!(ack.id, info.object_id);
        assert_eq!(
            decode_value(DataType::Float, &ack.data).unwrap(),
            Value::Float(0.10)
        );
    }

    #[tokio::test]
    async fn bool_read_defaults_to_true() {
        let addr = spawn_simulator().await;
        let stream = TcpStream::connect(addr).await.unwrap();
        let mut client = Client::from_stream(stream);

        let info = REGISTRY.get_by_name("rb485.available").unwrap();
        let value = client.read_value(info).await.unwrap();
        assert_eq!(value, Value::Bool(true));
    }
}
