//! Wire protocol support: checksums, payload codecs and framing.

pub mod crc;
pub mod frame;
pub mod value;

pub use crc::crc16;
pub use frame::{Frame, ReceiveFrame, ESCAPE_TOKEN, START_TOKEN};
pub use value::{decode_value, encode_value, EventTable, Timeseries, Value};
