//! The object registry: descriptors for every known object id.
//!
//! Conceptually similar to an SNMP MIB, the registry binds each 32-bit
//! object id to the data types needed to talk to it, plus name, group,
//! unit and description to aid the user. The table itself lives in
//! [`data`] and is generated from the device object listing; the code here
//! only indexes and validates it.
//!
//! Objects may answer with a different data type than their request uses.
//! The logger group is the prominent case: its ids are written with a UNIX
//! timestamp and respond with a histogram time series.

mod data;

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::RegistryError;
use crate::protocol::Value;
use crate::types::{DataType, ObjectGroup};

/// Stand-in value a simulated device returns for an object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimData {
    Bool(bool),
    Int(i32),
    Float(f32),
    Str(&'static str),
}

/// Describes a single object id.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectInfo {
    /// The group the id belongs to. Presentation only, not used on the wire.
    pub group: ObjectGroup,
    /// The unique object id.
    pub object_id: u32,
    /// Numerical index from the device listing; informational.
    pub index: u16,
    /// Name internal to the device, as shown in the official app.
    pub name: &'static str,
    /// Data type for encoding a request payload.
    pub request_data_type: DataType,
    /// Data type for decoding a response payload.
    pub response_data_type: DataType,
    /// Optional unit symbol.
    pub unit: Option<&'static str>,
    /// Optional description in English text.
    pub description: Option<&'static str>,
    /// Mapping from enum code to display string, for ENUM objects.
    pub enum_map: Option<&'static [(u8, &'static str)]>,
    /// Override for the simulator's response value.
    pub sim_data: Option<SimData>,
}

impl ObjectInfo {
    /// The display string for an enum code of this object.
    pub fn enum_str(&self, code: u8) -> Result<&'static str, RegistryError> {
        let map = self.enum_map.ok_or(RegistryError::UnknownEnumCode {
            name: self.name,
            code,
        })?;
        map.iter()
            .find(|(k, _)| *k == code)
            .map(|(_, v)| *v)
            .ok_or(RegistryError::UnknownEnumCode {
                name: self.name,
                code,
            })
    }

    /// The value a simulated device answers with: the explicit stand-in if
    /// one is set, otherwise a type-appropriate default.
    pub fn sim_value(&self) -> Value {
        match self.sim_data {
            Some(SimData::Bool(v)) => Value::Bool(v),
            Some(SimData::Int(v)) => Value::I32(v),
            Some(SimData::Float(v)) => Value::Float(v),
            Some(SimData::Str(v)) => Value::String(v.to_string()),
            None => match self.response_data_type {
                DataType::Bool => Value::Bool(true),
                DataType::String => Value::String("ABCDEFG".to_string()),
                DataType::Float => Value::Float(0.0),
                _ => Value::I32(0),
            },
        }
    }
}

/// Indexed view over the descriptor table.
///
/// Lookup by id is O(1); name and prefix queries scan the table, which is
/// fine at its size. The registry is immutable after construction and safe
/// to share across threads; use the [`REGISTRY`] singleton rather than
/// building your own.
#[derive(Debug)]
pub struct Registry {
    by_id: HashMap<u32, &'static ObjectInfo>,
    /// All descriptors, ascending by object id.
    ordered: Vec<&'static ObjectInfo>,
    name_max_len: usize,
}

impl Registry {
    /// Indexes a descriptor table, rejecting duplicate ids and names and
    /// descriptors that pair an ENUM request with a non-ENUM response. The
    /// first conflict found is reported.
    fn from_objects(objects: &'static [ObjectInfo]) -> Result<Registry, RegistryError> {
        let mut by_id = HashMap::with_capacity(objects.len());
        let mut by_name = HashMap::with_capacity(objects.len());
        let mut name_max_len = 0;

        for info in objects {
            if info.request_data_type == DataType::Enum
                && info.response_data_type != DataType::Enum
            {
                return Err(RegistryError::EnumResponseMismatch {
                    name: info.name,
                    response: info.response_data_type,
                });
            }
            if info.enum_map.is_some() && info.request_data_type != DataType::Enum {
                return Err(RegistryError::UnexpectedEnumMap(info.name));
            }
            if let Some(previous) = by_id.insert(info.object_id, info) {
                return Err(RegistryError::DuplicateId {
                    id: info.object_id,
                    first: previous.name,
                    second: info.name,
                });
            }
            if by_name.insert(info.name, info).is_some() {
                return Err(RegistryError::DuplicateName(info.name));
            }
            name_max_len = name_max_len.max(info.name.len());
        }

        let mut ordered: Vec<&'static ObjectInfo> = objects.iter().collect();
        ordered.sort_by_key(|info| info.object_id);

        Ok(Registry {
            by_id,
            ordered,
            name_max_len,
        })
    }

    /// Looks up a descriptor by object id.
    pub fn get_by_id(&self, id: u32) -> Result<&'static ObjectInfo, RegistryError> {
        self.by_id.get(&id).copied().ok_or(RegistryError::UnknownId(id))
    }

    /// Looks up a descriptor by its exact name.
    pub fn get_by_name(&self, name: &str) -> Result<&'static ObjectInfo, RegistryError> {
        self.ordered
            .iter()
            .find(|info| info.name == name)
            .copied()
            .ok_or_else(|| RegistryError::UnknownName(name.to_string()))
    }

    /// The request data type of an id.
    pub fn type_by_id(&self, id: u32) -> Result<DataType, RegistryError> {
        Ok(self.get_by_id(id)?.request_data_type)
    }

    /// All descriptors, ascending by object id.
    pub fn all(&self) -> impl Iterator<Item = &'static ObjectInfo> + '_ {
        self.ordered.iter().copied()
    }

    /// Names starting with `prefix`, sorted; all names when the prefix is
    /// empty. Backs shell completion in the CLI.
    pub fn prefix_complete_name(&self, prefix: &str) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self
            .ordered
            .iter()
            .filter(|info| info.name.starts_with(prefix))
            .map(|info| info.name)
            .collect();
        names.sort_unstable();
        names
    }

    /// Length of the longest name in the table, for column alignment.
    pub fn name_max_length(&self) -> usize {
        self.name_max_len
    }
}

/// The process-wide registry of all known object ids.
pub static REGISTRY: LazyLock<Registry> = LazyLock::new(|| {
    Registry::from_objects(data::OBJECTS).expect("generated object table is consistent")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn battery_soc_by_name() {
        let info = REGISTRY.get_by_name("battery.soc").unwrap();
        assert_eq!(info.object_id, 0x959930BF);
        assert_eq!(info.request_data_type, DataType::Float);
        assert_eq!(info.response_data_type, DataType::Float);
        assert_eq!(info.unit, Some("%"));
        assert_eq!(info.group, ObjectGroup::Battery);
    }

    #[test]
    fn battery_soc_by_id() {
        let info = REGISTRY.get_by_id(0x959930BF).unwrap();
        assert_eq!(info.name, "battery.soc");
        assert_eq!(REGISTRY.type_by_id(0x959930BF).unwrap(), DataType::Float);
    }

    #[test]
    fn unknown_lookups() {
        assert_eq!(
            REGISTRY.get_by_id(0xDEADBEEF).unwrap_err(),
            RegistryError::UnknownId(0xDEADBEEF)
        );
        assert!(matches!(
            REGISTRY.get_by_name("battery.does_not_exist"),
            Err(RegistryError::UnknownName(_))
        ));
    }

    #[test]
    fn prefix_completion() {
        let names = REGISTRY.prefix_complete_name("battery.soc");
        for expected in [
            "battery.soc",
            "battery.soc_target",
            "battery.soc_target_high",
            "battery.soc_target_low",
        ] {
            assert!(names.contains(&expected), "missing {expected}");
        }
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted, "completion list must be sorted");

        // An empty prefix yields every name.
        assert_eq!(
            REGISTRY.prefix_complete_name("").len(),
            REGISTRY.all().count()
        );
    }

    #[test]
    fn ids_and_names_are_unique() {
        // from_objects would have panicked the singleton otherwise; assert
        // the invariant directly for good measure.
        let mut ids = std::collections::HashSet::new();
        let mut names = std::collections::HashSet::new();
        for info in REGISTRY.all() {
            assert!(ids.insert(info.object_id), "duplicate id {:#010X}", info.object_id);
            assert!(names.insert(info.name), "duplicate name {}", info.name);
        }
    }

    #[test]
    fn all_is_ordered_by_id() {
        let ids: Vec<u32> = REGISTRY.all().map(|info| info.object_id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn enum_maps_only_on_enum_objects() {
        for info in REGISTRY.all() {
            if info.enum_map.is_some() {
                assert_eq!(
                    info.request_data_type,
                    DataType::Enum,
                    "{} has an enum map but is {}",
                    info.name,
                    info.request_data_type
                );
                assert_eq!(info.response_data_type, DataType::Enum);
            }
        }
    }

    #[test]
    fn enum_lookup() {
        let info = REGISTRY.get_by_name("power_mng.battery_type").unwrap();
        assert_eq!(info.request_data_type, DataType::Enum);
        assert_eq!(info.enum_str(5).unwrap(), "No battery");
        assert!(matches!(
            info.enum_str(200),
            Err(RegistryError::UnknownEnumCode { .. })
        ));
    }

    #[test]
    fn name_max_length_matches_table() {
        let expected = REGISTRY.all().map(|info| info.name.len()).max().unwrap();
        assert_eq!(REGISTRY.name_max_length(), expected);
    }

    #[test]
    fn sim_value_defaults() {
        let soc = REGISTRY.get_by_name("battery.soc").unwrap();
        assert_eq!(soc.sim_value(), Value::Float(0.0));

        let avail = REGISTRY.get_by_name("rb485.available").unwrap();
        assert_eq!(avail.sim_value(), Value::Bool(true));

        // The one descriptor with an explicit stand-in.
        let android = REGISTRY.get_by_name("android_description").unwrap();
        assert_eq!(android.sim_value(), Value::String("RCT".to_string()));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        static DUP: &[ObjectInfo] = &[
            ObjectInfo {
                group: ObjectGroup::Battery,
                object_id: 0x1,
                index: 0,
                name: "a",
                request_data_type: DataType::Float,
                response_data_type: DataType::Float,
                unit: None,
                description: None,
                enum_map: None,
                sim_data: None,
            },
            ObjectInfo {
                group: ObjectGroup::Battery,
                object_id: 0x1,
                index: 1,
                name: "b",
                request_data_type: DataType::Float,
                response_data_type: DataType::Float,
                unit: None,
                description: None,
                enum_map: None,
                sim_data: None,
            },
        ];
        assert_eq!(
            Registry::from_objects(DUP).unwrap_err(),
            RegistryError::DuplicateId {
                id: 0x1,
                first: "a",
                second: "b"
            }
        );
    }

    #[test]
    fn enum_request_with_scalar_response_is_rejected() {
        static BAD: &[ObjectInfo] = &[ObjectInfo {
            group: ObjectGroup::Wifi,
            object_id: 0x2,
            index: 0,
            name: "c",
            request_data_type: DataType::Enum,
            response_data_type: DataType::Uint8,
            unit: None,
            description: None,
            enum_map: None,
            sim_data: None,
        }];
        assert!(matches!(
            Registry::from_objects(BAD),
            Err(RegistryError::EnumResponseMismatch { .. })
        ));
    }
}
