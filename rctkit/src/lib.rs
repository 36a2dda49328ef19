//! Client library for the RCT Power inverter/battery wire protocol.
//!
//! The device speaks a framed binary protocol over TCP (port 8899 by
//! default). Every readable or writable datum is addressed by a 32-bit
//! object id, comparable to an SNMP OID. This crate provides:
//!
//! - the frame codec: [`protocol::Frame`] for building command frames and
//!   [`protocol::ReceiveFrame`] for decoding the byte stream coming back;
//! - payload encoding and decoding by data type tag, including the
//!   composite histogram and event log payloads ([`protocol::value`]);
//! - the object [`registry`]: descriptors for all known object ids with
//!   lookup by id, name and name prefix;
//! - an async [`client`] for talking to a real device and a [`simulator`]
//!   that answers with stand-in values for testing without hardware.
//!
//! # Example
//!
//! ```no_run
//! use rctkit::client::Client;
//! use rctkit::registry::REGISTRY;
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let info = REGISTRY.get_by_name("battery.soc")?;
//! let mut client = Client::connect("192.168.0.1", rctkit::client::DEFAULT_PORT).await?;
//! let soc = client.read_value(info).await?;
//! println!("state of charge: {soc}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod protocol;
pub mod registry;
pub mod simulator;
pub mod types;

pub use error::{FrameError, RegistryError, ValueError};
pub use protocol::{Frame, ReceiveFrame, Value};
pub use types::{Command, DataType, FrameType, ObjectGroup};
