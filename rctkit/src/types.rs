//! Protocol type declarations.
//!
//! The command set, frame variants and data type tags used on the wire,
//! plus the decoded record type for event log entries.

use strum::{Display, EnumIter};
use time::OffsetDateTime;

/// Commands understood by the device.
///
/// The plant variants are the base command with bit 6 set; they carry an
/// additional 32-bit address for multi-device plant communication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Command {
    /// Request the current value of an object.
    Read = 0x01,
    /// Set the value of an object (payload up to 251 bytes).
    Write = 0x02,
    /// Set the value of an object with a 16-bit length field.
    LongWrite = 0x03,
    /// Device reply to a read or write.
    Response = 0x05,
    /// Reply with a 16-bit length field.
    LongResponse = 0x06,
    /// Vendor extension, not parsed.
    Extension = 0x3C,
    /// Plant variant of [`Command::Read`].
    PlantRead = 0x41,
    /// Plant variant of [`Command::Write`].
    PlantWrite = 0x42,
    /// Plant variant of [`Command::LongWrite`].
    PlantLongWrite = 0x43,
}

impl Command {
    /// Maps a wire byte to a command, `None` for bytes outside the known set.
    pub fn from_byte(byte: u8) -> Option<Command> {
        match byte {
            0x01 => Some(Command::Read),
            0x02 => Some(Command::Write),
            0x03 => Some(Command::LongWrite),
            0x05 => Some(Command::Response),
            0x06 => Some(Command::LongResponse),
            0x3C => Some(Command::Extension),
            0x41 => Some(Command::PlantRead),
            0x42 => Some(Command::PlantWrite),
            0x43 => Some(Command::PlantLongWrite),
            _ => None,
        }
    }

    /// Whether the command carries a 2-byte length field.
    pub fn is_long(self) -> bool {
        matches!(
            self,
            Command::LongWrite | Command::LongResponse | Command::PlantLongWrite
        )
    }

    /// Whether the command addresses a plant (bit 6 set).
    pub fn is_plant(self) -> bool {
        self as u8 & 0x40 != 0
    }

    /// Whether the command is a read request (standard or plant).
    pub fn is_read(self) -> bool {
        matches!(self, Command::Read | Command::PlantRead)
    }

    /// Whether the command is a write request (standard or plant, short or long).
    pub fn is_write(self) -> bool {
        matches!(
            self,
            Command::Write
                | Command::LongWrite
                | Command::PlantWrite
                | Command::PlantLongWrite
        )
    }

    /// Whether the command is a device response.
    pub fn is_response(self) -> bool {
        matches!(self, Command::Response | Command::LongResponse)
    }
}

/// Frame variants. The numeric value is the marker added into the length
/// field on the wire; decoders subtract it to recover the payload length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum FrameType {
    /// Standard frame carrying an object id.
    Standard = 4,
    /// Plant frame carrying an address in front of the object id.
    Plant = 8,
}

impl FrameType {
    /// Frame type implied by a command.
    pub fn for_command(command: Command) -> FrameType {
        if command.is_plant() {
            FrameType::Plant
        } else {
            FrameType::Standard
        }
    }

    /// The marker value folded into the length field.
    pub fn marker(self) -> u8 {
        self as u8
    }
}

/// Data type tags used by the registry to select payload encodings.
///
/// `Timeseries` and `EventTable` are composite, decode-only types; the
/// device never accepts them as write payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DataType {
    /// Placeholder for objects whose payload layout is not known.
    Unknown,
    Bool,
    Uint8,
    Int8,
    Uint16,
    Int16,
    Uint32,
    Int32,
    /// Wire-compatible with [`DataType::Uint8`].
    Enum,
    Float,
    /// NUL-padded ASCII on receive, UTF-8 on send.
    String,
    /// Header timestamp plus (timestamp, float) sample pairs.
    Timeseries,
    /// Header timestamp plus 20-byte event log records.
    EventTable,
}

impl DataType {
    /// Wire size in bytes for fixed-width scalar tags, `None` otherwise.
    pub fn wire_size(self) -> Option<usize> {
        match self {
            DataType::Bool | DataType::Uint8 | DataType::Int8 | DataType::Enum => Some(1),
            DataType::Uint16 | DataType::Int16 => Some(2),
            DataType::Uint32 | DataType::Int32 | DataType::Float => Some(4),
            _ => None,
        }
    }
}

/// Grouping information for object ids. Not used by the protocol itself,
/// purely an aid for presenting the registry to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ObjectGroup {
    Rb485,
    Energy,
    GridMon,
    Temperature,
    Battery,
    CsNeg,
    HwTest,
    GSync,
    Logger,
    Wifi,
    Adc,
    Net,
    AccConv,
    DcConv,
    Nsm,
    IoBoard,
    FlashRtc,
    PowerMng,
    BufVControl,
    Db,
    SwitchOnCond,
    PRec,
    Modbus,
    BatMngStruct,
    IsoStruct,
    GridLt,
    CanBus,
    DisplayStruct,
    FlashParam,
    Fault,
    PrimSm,
    CsMap,
    LineMon,
    Others,
    BatteryPlaceholder,
    Frt,
    Partition,
}

/// A single entry of the device's event/error log.
///
/// Little is known about the record layout beyond the four 32-bit words.
/// `element2` always repeats the raw timestamp word; both are kept as
/// received rather than guessing at semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventEntry {
    /// Event type. Believed to be a single byte; the upper bits of the wire
    /// word must be zero.
    pub entry_type: u8,
    /// Start time of a ranged event, or the moment of a point event.
    pub timestamp: OffsetDateTime,
    /// Second record word, the raw timestamp.
    pub element2: u32,
    /// Third record word, meaning depends on `entry_type`.
    pub element3: u32,
    /// Fourth record word, meaning depends on `entry_type`.
    pub element4: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_round_trip() {
        for byte in [0x01, 0x02, 0x03, 0x05, 0x06, 0x3C, 0x41, 0x42, 0x43] {
            let command = Command::from_byte(byte).unwrap();
            assert_eq!(command as u8, byte);
        }
        assert_eq!(Command::from_byte(0x00), None);
        assert_eq!(Command::from_byte(0x04), None);
        assert_eq!(Command::from_byte(0xFF), None);
    }

    #[test]
    fn plant_commands_have_bit6() {
        assert!(Command::PlantRead.is_plant());
        assert!(Command::PlantWrite.is_plant());
        assert!(Command::PlantLongWrite.is_plant());
        assert!(!Command::Read.is_plant());
        assert!(!Command::LongResponse.is_plant());
        assert!(!Command::Extension.is_plant());
    }

    #[test]
    fn long_commands() {
        assert!(Command::LongWrite.is_long());
        assert!(Command::LongResponse.is_long());
        assert!(Command::PlantLongWrite.is_long());
        assert!(!Command::Read.is_long());
        assert!(!Command::Write.is_long());
        assert!(!Command::Response.is_long());
    }

    #[test]
    fn frame_type_markers() {
        assert_eq!(FrameType::for_command(Command::Read).marker(), 4);
        assert_eq!(FrameType::for_command(Command::PlantLongWrite).marker(), 8);
    }

    #[test]
    fn data_type_names_match_wire_listing() {
        assert_eq!(DataType::Uint8.to_string(), "UINT8");
        assert_eq!(DataType::Float.to_string(), "FLOAT");
        assert_eq!(DataType::Timeseries.to_string(), "TIMESERIES");
        assert_eq!(DataType::EventTable.to_string(), "EVENT_TABLE");
    }
}
