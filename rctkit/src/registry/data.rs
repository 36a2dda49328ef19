//! Generated object descriptor table. Do not edit by hand: regenerate
//! from the device object listing whenever new firmware adds ids.
//!
//! Ids that appear more than once in the listing are resolved ahead of
//! time, keeping the newest entry, so the table is unique by object id.

use super::{ObjectInfo, SimData};
use crate::types::{DataType as D, ObjectGroup as G};

#[allow(clippy::too_many_arguments)]
const fn o(
    group: G,
    object_id: u32,
    index: u16,
    name: &'static str,
    request: D,
    response: D,
    unit: Option<&'static str>,
    description: Option<&'static str>,
) -> ObjectInfo {
    ObjectInfo {
        group,
        object_id,
        index,
        name,
        request_data_type: request,
        response_data_type: response,
        unit,
        description,
        enum_map: None,
        sim_data: None,
    }
}

pub(super) static OBJECTS: &[ObjectInfo] = &[
    o(G::Rb485,              0x0104EB6A,   0, "rb485.f_grid[2]",                                   D::Float,      D::Float,      Some("Hz"),        Some("Grid phase 3 frequency")),
    o(G::Rb485,              0x07367B64,  24, "rb485.phase_marker",                                D::Int16,      D::Int16,      None,              Some("Next phase after phase 1 in Power Switch")),
    o(G::Rb485,              0x173D81E4,  82, "rb485.version_boot",                                D::Uint32,     D::Uint32,     None,              Some("Power Switch bootloader version")),
    o(G::Rb485,              0x21EE7CBB, 115, "rb485.u_l_grid[2]",                                 D::Float,      D::Float,      Some("V"),         Some("Grid phase 3 voltage")),
    o(G::Rb485,              0x27650FE2, 140, "rb485.version_main",                                D::Uint32,     D::Uint32,     None,              Some("Power Switch software version")),
    o(G::Rb485,              0x3B5F6B9D, 204, "rb485.f_wr[0]",                                     D::Float,      D::Float,      Some("Hz"),        Some("Power Storage phase 1 frequency")),
    o(G::Rb485,              0x437B8122, 228, "rb485.available",                                   D::Bool,       D::Bool,       None,              Some("Power Switch is available")),
    o(G::Rb485,              0x6FD36B32, 393, "rb485.f_wr[1]",                                     D::Float,      D::Float,      Some("Hz"),        Some("Power Storage phase 2 frequency")),
    o(G::Rb485,              0x7A9091EA, 439, "rb485.u_l_grid[1]",                                 D::Float,      D::Float,      Some("V"),         Some("Grid phase 2 voltage")),
    o(G::Rb485,              0x905F707B, 515, "rb485.f_wr[2]",                                     D::Float,      D::Float,      Some("Hz"),        Some("Power Storage phase 3 frequency")),
    o(G::Rb485,              0x93F976AB, 540, "rb485.u_l_grid[0]",                                 D::Float,      D::Float,      Some("V"),         Some("Grid phase 1 voltage")),
    o(G::Rb485,              0x9558AD8A, 544, "rb485.f_grid[0]",                                   D::Float,      D::Float,      Some("Hz"),        Some("Grid phase1 frequency")),
    o(G::Rb485,              0xFAE429C5, 871, "rb485.f_grid[1]",                                   D::Float,      D::Float,      Some("Hz"),        Some("Grid phase 2 frequency")),
    o(G::Energy,             0x031A6110,   6, "energy.e_ext_month",                                D::Float,      D::Float,      Some("Wh"),        Some("External month energy")),
    o(G::Energy,             0x0C588B75,  43, "energy.e_ext_day_sum",                              D::Float,      D::Float,      None,              None),
    o(G::Energy,             0x0F28E2E1,  59, "energy.e_ext_total_sum",                            D::Float,      D::Float,      None,              None),
    o(G::Energy,             0x10970E9D,  66, "energy.e_ac_month",                                 D::Float,      D::Float,      Some("Wh"),        Some("Month energy")),
    o(G::Energy,             0x126ABC86,  69, "energy.e_grid_load_month",                          D::Float,      D::Float,      Some("Wh"),        Some("Month energy grid load")),
    o(G::Energy,             0x1BFA5A33,  95, "energy.e_grid_load_total_sum",                      D::Float,      D::Float,      None,              None),
    o(G::Energy,             0x21E1A802, 114, "energy.e_dc_month_sum[1]",                          D::Float,      D::Float,      None,              None),
    o(G::Energy,             0x241F1F98, 129, "energy.e_dc_day_sum[1]",                            D::Float,      D::Float,      None,              None),
    o(G::Energy,             0x26EFFC2F, 137, "energy.e_grid_feed_year",                           D::Float,      D::Float,      Some("Wh"),        Some("Year energy grid feed-in")),
    o(G::Energy,             0x27C828F4, 144, "energy.e_grid_feed_total_sum",                      D::Float,      D::Float,      None,              None),
    o(G::Energy,             0x2AE703F2, 152, "energy.e_dc_day[0]",                                D::Float,      D::Float,      Some("Wh"),        Some("Solar generator A day energy")),
    o(G::Energy,             0x2F3C1D7D, 160, "energy.e_load_day",                                 D::Float,      D::Float,      Some("Wh"),        Some("Household day energy")),
    o(G::Energy,             0x3A873343, 199, "energy.e_ac_day_sum",                               D::Float,      D::Float,      None,              None),
    o(G::Energy,             0x3A9D2680, 200, "energy.e_ext_year_sum",                             D::Float,      D::Float,      None,              None),
    o(G::Energy,             0x3C87C4F5, 209, "energy.e_grid_feed_day",                            D::Float,      D::Float,      Some("Wh"),        Some("Day energy grid feed-in")),
    o(G::Energy,             0x44D4C533, 235, "energy.e_grid_feed_total",                          D::Float,      D::Float,      Some("Wh"),        Some("Total energy grid feed-in")),
    o(G::Energy,             0x495BF0B6, 249, "energy.e_dc_year_sum[0]",                           D::Float,      D::Float,      None,              None),
    o(G::Energy,             0x4BE02BB7, 256, "energy.e_load_day_sum",                             D::Float,      D::Float,      None,              None),
    o(G::Energy,             0x4EE8DB78, 274, "energy.e_load_year_sum",                            D::Float,      D::Float,      None,              None),
    o(G::Energy,             0x62FBE7DC, 341, "energy.e_grid_load_total",                          D::Float,      D::Float,      Some("Wh"),        Some("Total energy grid load")),
    o(G::Energy,             0x65B624AB, 352, "energy.e_grid_feed_month",                          D::Float,      D::Float,      Some("Wh"),        Some("Month energy grid feed-in")),
    o(G::Energy,             0x6709A2F4, 357, "energy.e_ac_year_sum",                              D::Float,      D::Float,      None,              None),
    o(G::Energy,             0x68EEFD3D, 367, "energy.e_dc_total[1]",                              D::Float,      D::Float,      Some("Wh"),        Some("Solar generator B total energy")),
    o(G::Energy,             0x6CFCD774, 381, "energy.e_dc_year_sum[1]",                           D::Float,      D::Float,      None,              None),
    o(G::Energy,             0x6FF4BD55, 394, "energy.e_ext_month_sum",                            D::Float,      D::Float,      None,              None),
    o(G::Energy,             0x79C0A724, 434, "energy.e_ac_total_sum",                             D::Float,      D::Float,      None,              None),
    o(G::Energy,             0x7AB9B045, 440, "energy.e_dc_month[1]",                              D::Float,      D::Float,      Some("Wh"),        Some("Solar generator B month energy")),
    o(G::Energy,             0x7E096024, 454, "energy.e_load_total_sum",                           D::Float,      D::Float,      None,              None),
    o(G::Energy,             0x812E5ADD, 463, "energy.e_dc_total_sum[1]",                          D::Float,      D::Float,      None,              None),
    o(G::Energy,             0x81AE960B, 465, "energy.e_dc_month[0]",                              D::Float,      D::Float,      Some("Wh"),        Some("Solar generator A month energy")),
    o(G::Energy,             0x84ABE3D8, 474, "energy.e_grid_feed_year_sum",                       D::Float,      D::Float,      None,              None),
    o(G::Energy,             0x867DEF7D, 478, "energy.e_grid_load_day",                            D::Float,      D::Float,      Some("Wh"),        Some("Day energy grid load")),
    o(G::Energy,             0x917E3622, 525, "energy.e_ext_year",                                 D::Float,      D::Float,      Some("Wh"),        Some("External year energy")),
    o(G::Energy,             0xA12BE39C, 576, "energy.e_load_month_sum",                           D::Float,      D::Float,      None,              None),
    o(G::Energy,             0xA5341F4A, 587, "energy.e_grid_feed_month_sum",                      D::Float,      D::Float,      None,              None),
    o(G::Energy,             0xA59C8428, 589, "energy.e_ext_total",                                D::Float,      D::Float,      Some("Wh"),        Some("External total energy")),
    o(G::Energy,             0xAF64D0FE, 618, "energy.e_dc_year[0]",                               D::Float,      D::Float,      Some("Wh"),        Some("Solar generator A year energy")),
    o(G::Energy,             0xB1EF67CE, 627, "energy.e_ac_total",                                 D::Float,      D::Float,      Some("Wh"),        Some("Total energy")),
    o(G::Energy,             0xB7B2967F, 648, "energy.e_dc_total_sum[0]",                          D::Float,      D::Float,      None,              None),
    o(G::Energy,             0xB9A026F9, 658, "energy.e_ext_day",                                  D::Float,      D::Float,      Some("Wh"),        Some("External day energy")),
    o(G::Energy,             0xBD55905F, 670, "energy.e_ac_day",                                   D::Float,      D::Float,      Some("Wh"),        Some("Day energy")),
    o(G::Energy,             0xBD55D796, 671, "energy.e_dc_year[1]",                               D::Float,      D::Float,      Some("Wh"),        Some("Solar generator B year energy")),
    o(G::Energy,             0xC0CC81B6, 683, "energy.e_ac_year",                                  D::Float,      D::Float,      Some("Wh"),        Some("Year energy")),
    o(G::Energy,             0xC7D3B479, 710, "energy.e_load_year",                                D::Float,      D::Float,      Some("Wh"),        Some("Household year energy")),
    o(G::Energy,             0xC9D76279, 718, "energy.e_dc_day_sum[0]",                            D::Float,      D::Float,      None,              None),
    o(G::Energy,             0xD9D66B76, 760, "energy.e_grid_load_year_sum",                       D::Float,      D::Float,      None,              None),
    o(G::Energy,             0xDA207111, 763, "energy.e_grid_load_month_sum",                      D::Float,      D::Float,      None,              None),
    o(G::Energy,             0xDE17F021, 776, "energy.e_grid_load_year",                           D::Float,      D::Float,      Some("Wh"),        Some("Year energy grid load")),
    o(G::Energy,             0xEAEEB3CA, 813, "energy.e_dc_month_sum[0]",                          D::Float,      D::Float,      None,              None),
    o(G::Energy,             0xEFF4B537, 826, "energy.e_load_total",                               D::Float,      D::Float,      Some("Wh"),        Some("Household total energy")),
    o(G::Energy,             0xF0BE6429, 833, "energy.e_load_month",                               D::Float,      D::Float,      Some("Wh"),        Some("Household month energy")),
    o(G::Energy,             0xFBF3CE97, 876, "energy.e_dc_day[1]",                                D::Float,      D::Float,      Some("Wh"),        Some("Solar generator B day energy")),
    o(G::Energy,             0xFBF8D63C, 878, "energy.e_grid_load_day_sum",                        D::Float,      D::Float,      None,              None),
    o(G::Energy,             0xFC1C614E, 879, "energy.e_ac_month_sum",                             D::Float,      D::Float,      None,              None),
    o(G::Energy,             0xFC724A9E, 882, "energy.e_dc_total[0]",                              D::Float,      D::Float,      Some("Wh"),        Some("Solar generator A total energy")),
    o(G::Energy,             0xFDB81124, 888, "energy.e_grid_feed_day_sum",                        D::Float,      D::Float,      None,              None),
    o(G::GridMon,            0x016109E1,   2, "grid_mon[0].u_over.time",                           D::Float,      D::Float,      Some("s"),         Some("Max. voltage switch-off time level 1")),
    o(G::GridMon,            0x3044195F, 162, "grid_mon[1].u_under.time",                          D::Float,      D::Float,      Some("s"),         Some("Min. voltage switch-off time level 2")),
    o(G::GridMon,            0x3CB1EF01, 211, "grid_mon[0].u_under.threshold",                     D::Float,      D::Float,      Some("V"),         Some("Min. voltage level 1")),
    o(G::GridMon,            0x3E722B43, 215, "grid_mon[1].f_under.threshold",                     D::Float,      D::Float,      Some("Hz"),        Some("Min. frequency level 2")),
    o(G::GridMon,            0x5438B68E, 293, "grid_mon[1].u_over.threshold",                      D::Float,      D::Float,      Some("V"),         Some("Max. voltage level 2")),
    o(G::GridMon,            0x70E28322, 399, "grid_mon[0].f_under.time",                          D::Float,      D::Float,      Some("s"),         Some("Min. frequency switch-off time level 1")),
    o(G::GridMon,            0x82CD1525, 468, "grid_mon[1].u_under.threshold",                     D::Float,      D::Float,      Some("V"),         Some("Min. voltage level 2")),
    o(G::GridMon,            0x915CD4A4, 523, "grid_mon[1].f_over.threshold",                      D::Float,      D::Float,      Some("Hz"),        Some("Max. frequency level 2")),
    o(G::GridMon,            0x933F9A24, 534, "grid_mon[0].f_over.time",                           D::Float,      D::Float,      Some("s"),         Some("Max. frequency switch-off time level 1")),
    o(G::GridMon,            0xA6271C2E, 592, "grid_mon[0].u_over.threshold",                      D::Float,      D::Float,      Some("V"),         Some("Max. voltage level 1")),
    o(G::GridMon,            0xA95AD038, 606, "grid_mon[0].f_under.threshold",                     D::Float,      D::Float,      Some("Hz"),        Some("Min. frequency level 1")),
    o(G::GridMon,            0xEBF7A4E8, 818, "grid_mon[0].f_over.threshold",                      D::Float,      D::Float,      Some("Hz"),        Some("Max. frequency level 1")),
    o(G::GridMon,            0xEF89568B, 824, "grid_mon[0].u_under.time",                          D::Float,      D::Float,      Some("s"),         Some("Min. voltage switch-off time level 1")),
    o(G::GridMon,            0xF09CC4A2, 830, "grid_mon[1].u_over.time",                           D::Float,      D::Float,      Some("s"),         Some("Max. voltage switch-off time level 2")),
    o(G::GridMon,            0xF1FA5BB9, 837, "grid_mon[1].f_under.time",                          D::Float,      D::Float,      Some("s"),         Some("Min. frequency switch-off time level 2")),
    o(G::GridMon,            0xFD4F17C4, 886, "grid_mon[1].f_over.time",                           D::Float,      D::Float,      Some("s"),         Some("Max. frequency switch-off time level 2")),
    o(G::Temperature,        0x90B53336, 520, "temperature.sink_temp_power_reduction",             D::Float,      D::Float,      Some("°C"),        Some("Heat sink temperature target")),
    o(G::Temperature,        0xA7447FC4, 595, "temperature.bat_temp_power_reduction",              D::Float,      D::Float,      Some("°C"),        Some("Battery actuator temperature target")),
    o(G::Battery,            0x01676FA6,   3, "battery.cells_stat[3]",                             D::Unknown,    D::Unknown,    None,              None),
    o(G::Battery,            0x03D9C51F,  10, "battery.cells_stat[0].u_max.value",                 D::Float,      D::Float,      None,              None),
    o(G::Battery,            0x056162CA,  15, "battery.cells_stat[4].u_min.time",                  D::Uint32,     D::Uint32,     None,              None),
    o(G::Battery,            0x056417DF,  16, "battery.cells_stat[3].t_max.index",                 D::Uint8,      D::Uint8,      None,              None),
    o(G::Battery,            0x064A60FE,  19, "battery.cells_stat[4].t_max.index",                 D::Uint8,      D::Uint8,      None,              None),
    o(G::Battery,            0x06A9FFA2,  21, "battery.charged_amp_hours",                         D::Float,      D::Float,      Some("Ah"),        Some("Total charge flow into battery")),
    o(G::Battery,            0x077692DE,  27, "battery.cells_stat[4].u_max.index",                 D::Uint8,      D::Uint8,      None,              None),
    o(G::Battery,            0x086C75B0,  30, "battery.stack_software_version[3]",                 D::Uint32,     D::Uint32,     None,              Some("Software version stack 3")),
    o(G::Battery,            0x09923C1E,  35, "battery.cells_stat[3].t_min.index",                 D::Uint8,      D::Uint8,      None,              None),
    o(G::Battery,            0x0CFA8BC4,  47, "battery.stack_cycles[1]",                           D::Uint16,     D::Uint16,     None,              None),
    o(G::Battery,            0x0DACF21B,  49, "battery.cells_stat[4]",                             D::Unknown,    D::Unknown,    None,              None),
    o(G::Battery,            0x0DE3D20D,  51, "battery.status2",                                   D::Int32,      D::Int32,      None,              Some("Battery extra status")),
    o(G::Battery,            0x0EF60C7E,  58, "battery.cells_stat[3].u_max.value",                 D::Float,      D::Float,      None,              None),
    o(G::Battery,            0x120EC3B4,  68, "battery.cells_stat[4].u_min.index",                 D::Uint8,      D::Uint8,      None,              None),
    o(G::Battery,            0x1348AB07,  71, "battery.cells[4]",                                  D::Unknown,    D::Unknown,    None,              None),
    o(G::Battery,            0x162491E8,  76, "battery.module_sn[5]",                              D::String,     D::String,     None,              Some("Module 5 Serial Number")),
    o(G::Battery,            0x16A1F844,  78, "battery.bms_sn",                                    D::String,     D::String,     None,              Some("BMS Serial Number")),
    o(G::Battery,            0x18D1E9E0,  87, "battery.cells_stat[5].u_max.index",                 D::Uint8,      D::Uint8,      None,              None),
    o(G::Battery,            0x18F98B6D,  88, "battery.cells_stat[3].u_min.value",                 D::Float,      D::Float,      None,              None),
    o(G::Battery,            0x1B39A3A3,  93, "battery.bms_power_version",                         D::Uint32,     D::Uint32,     None,              Some("Software version BMS Power")),
    o(G::Battery,            0x1E5FCA70, 102, "battery.maximum_charge_current",                    D::Float,      D::Float,      Some("A"),         Some("Max. charge current")),
    o(G::Battery,            0x1F73B6A4, 104, "battery.cells_stat[3].t_max.time",                  D::Uint32,     D::Uint32,     None,              None),
    o(G::Battery,            0x21961B58, 113, "battery.current",                                   D::Float,      D::Float,      Some("A"),         Some("Battery current")),
    o(G::Battery,            0x23E55DA0, 125, "battery.cells_stat[5]",                             D::Unknown,    D::Unknown,    None,              None),
    o(G::Battery,            0x257B5945, 132, "battery.cells_stat[2].u_min.index",                 D::Uint8,      D::Uint8,      None,              None),
    o(G::Battery,            0x257B7612, 133, "battery.module_sn[3]",                              D::String,     D::String,     None,              Some("Module 3 Serial Number")),
    o(G::Battery,            0x26363AAE, 135, "battery.cells_stat[1].t_max.index",                 D::Uint8,      D::Uint8,      None,              None),
    o(G::Battery,            0x265EACF6, 136, "battery.cells_stat[2].t_max.time",                  D::Uint32,     D::Uint32,     None,              None),
    o(G::Battery,            0x27C39CEA, 143, "battery.stack_cycles[6]",                           D::Uint16,     D::Uint16,     None,              None),
    o(G::Battery,            0x2A30A97E, 149, "battery.stack_cycles[5]",                           D::Uint16,     D::Uint16,     None,              None),
    o(G::Battery,            0x2AACCAA7, 151, "battery.max_cell_voltage",                          D::Float,      D::Float,      None,              None),
    o(G::Battery,            0x2BC1E72B, 153, "battery.discharged_amp_hours",                      D::Float,      D::Float,      Some("Ah"),        Some("Total charge flow from battery")),
    o(G::Battery,            0x331D0689, 169, "battery.cells_stat[2].t_max.value",                 D::Float,      D::Float,      None,              None),
    o(G::Battery,            0x336415EA, 170, "battery.cells_stat[0].t_max.time",                  D::Uint32,     D::Uint32,     None,              None),
    o(G::Battery,            0x34A164E7, 173, "battery.cells_stat[0]",                             D::Unknown,    D::Unknown,    None,              None),
    o(G::Battery,            0x34E33726, 174, "battery.cells_stat[2].u_max.index",                 D::Uint8,      D::Uint8,      None,              None),
    o(G::Battery,            0x3503B92D, 177, "battery.cells_stat[3].u_max.time",                  D::Uint32,     D::Uint32,     None,              None),
    o(G::Battery,            0x381B8BF9, 187, "battery.soh",                                       D::Float,      D::Float,      Some("%"),         Some("SOH (State of Health)")),
    o(G::Battery,            0x3A7D5F53, 198, "battery.cells_stat[1].u_max.value",                 D::Float,      D::Float,      None,              None),
    o(G::Battery,            0x3BA1B77B, 206, "battery.cells_stat[3].t_min.value",                 D::Float,      D::Float,      None,              None),
    o(G::Battery,            0x3F98F58A, 218, "battery.cells_stat[5].t_max.index",                 D::Uint8,      D::Uint8,      None,              None),
    o(G::Battery,            0x40FF01B7, 222, "battery.cells[6]",                                  D::Unknown,    D::Unknown,    None,              None),
    o(G::Battery,            0x41B11ECF, 224, "battery.cells_stat[3].u_min.index",                 D::Uint8,      D::Uint8,      None,              None),
    o(G::Battery,            0x428CCF46, 225, "battery.cells_stat[5].u_min.value",                 D::Float,      D::Float,      None,              None),
    o(G::Battery,            0x442A3409, 233, "battery.cells_stat[4].t_min.time",                  D::Uint32,     D::Uint32,     None,              None),
    o(G::Battery,            0x4443C661, 234, "battery.cells_stat[0].t_max.index",                 D::Uint8,      D::Uint8,      None,              None),
    o(G::Battery,            0x4B51A539, 254, "battery.prog_sn",                                   D::String,     D::String,     None,              None),
    o(G::Battery,            0x4CB7C0DC, 261, "battery.min_cell_voltage",                          D::Float,      D::Float,      None,              None),
    o(G::Battery,            0x4D985F33, 263, "battery.cells_stat[5].u_max.value",                 D::Float,      D::Float,      None,              None),
    o(G::Battery,            0x4E699086, 271, "battery.module_sn[4]",                              D::String,     D::String,     None,              Some("Module 4 Serial Number")),
    o(G::Battery,            0x501A162D, 280, "battery.cells_resist[5]",                           D::String,     D::String,     None,              None),
    o(G::Battery,            0x50514732, 281, "battery.cells_stat[6].u_min.index",                 D::Uint8,      D::Uint8,      None,              None),
    o(G::Battery,            0x518C7BBE, 285, "battery.cells_stat[5].u_min.time",                  D::Uint32,     D::Uint32,     None,              None),
    o(G::Battery,            0x537C719F, 289, "battery.cells_stat[0].t_max.value",                 D::Float,      D::Float,      None,              None),
    o(G::Battery,            0x5570401B, 298, "battery.stored_energy",                             D::Float,      D::Float,      Some("Wh"),        Some("Total energy flow into battery")),
    o(G::Battery,            0x55DDF7BA, 300, "battery.max_cell_temperature",                      D::Float,      D::Float,      None,              None),
    o(G::Battery,            0x5939EC5D, 311, "battery.module_sn[6]",                              D::String,     D::String,     None,              Some("Module 6 Serial Number")),
    o(G::Battery,            0x5A120CE4, 313, "battery.cells_stat[1].t_max.time",                  D::Uint32,     D::Uint32,     None,              None),
    o(G::Battery,            0x5A9EEFF0, 315, "battery.stack_cycles[4]",                           D::Uint16,     D::Uint16,     None,              None),
    o(G::Battery,            0x5AF50FD7, 316, "battery.cells_stat[4].t_min.value",                 D::Float,      D::Float,      None,              None),
    o(G::Battery,            0x5BA122A5, 318, "battery.stack_cycles[2]",                           D::Uint16,     D::Uint16,     None,              None),
    o(G::Battery,            0x60749E5E, 333, "battery.cells_stat[6].u_min.time",                  D::Uint32,     D::Uint32,     None,              None),
    o(G::Battery,            0x61EAC702, 336, "battery.cells_stat[0].t_min.value",                 D::Float,      D::Float,      None,              None),
    o(G::Battery,            0x6213589B, 337, "battery.cells_stat[6].u_min.value",                 D::Float,      D::Float,      None,              None),
    o(G::Battery,            0x62D645D9, 340, "battery.cells[5]",                                  D::Unknown,    D::Unknown,    None,              None),
    o(G::Battery,            0x6388556C, 344, "battery.stack_software_version[0]",                 D::Uint32,     D::Uint32,     None,              Some("Software version stack 0")),
    o(G::Battery,            0x6445D856, 345, "battery.cells_stat[1].u_min.index",                 D::Uint8,      D::Uint8,      None,              None),
    o(G::Battery,            0x649B10DA, 347, "battery.cells_resist[0]",                           D::String,     D::String,     None,              None),
    o(G::Battery,            0x4E04DD55, 266, "battery.soc_update_since",                          D::Float,      D::Float,      None,              None),
    o(G::Battery,            0x65EED11B, 353, "battery.voltage",                                   D::Float,      D::Float,      Some("V"),         Some("Battery voltage")),
    o(G::Battery,            0x6974798A, 369, "battery.stack_software_version[6]",                 D::Uint32,     D::Uint32,     None,              Some("Software version stack 6")),
    o(G::Battery,            0x69B8FF28, 371, "battery.cells[2]",                                  D::Unknown,    D::Unknown,    None,              None),
    o(G::Battery,            0x6DB1FDDC, 385, "battery.cells_stat[4].u_min.value",                 D::Float,      D::Float,      None,              None),
    o(G::Battery,            0x6E24632E, 388, "battery.cells_stat[5].u_max.time",                  D::Uint32,     D::Uint32,     None,              None),
    o(G::Battery,            0x6E491B50, 390, "battery.maximum_charge_voltage",                    D::Float,      D::Float,      Some("V"),         Some("Max. charge voltage")),
    o(G::Battery,            0x70349444, 396, "battery.cells_stat[1].t_min.index",                 D::Uint8,      D::Uint8,      None,              None),
    o(G::Battery,            0x70A2AF4F, 397, "battery.bat_status",                                D::Int32,      D::Int32,      None,              None),
    o(G::Battery,            0x5847E59E, 306, "battery.maximum_charge_voltage_constant_u",         D::Float,      D::Float,      Some("V"),         Some("Max. charge voltage")),
    o(G::Battery,            0x71196579, 400, "battery.cells_stat[5].t_min.index",                 D::Uint8,      D::Uint8,      None,              None),
    o(G::Battery,            0x71765BD8, 404, "battery.status",                                    D::Int32,      D::Int32,      None,              Some("Battery status")),
    o(G::Battery,            0x71CB0B57, 406, "battery.cells_resist[1]",                           D::String,     D::String,     None,              None),
    o(G::Battery,            0x7268CE4D, 409, "battery.inv_cmd",                                   D::Uint32,     D::Uint32,     None,              None),
    o(G::Battery,            0x73489528, 412, "battery.module_sn[2]",                              D::String,     D::String,     None,              Some("Module 2 Serial Number")),
    o(G::Battery,            0x74FD4609, 415, "battery.cells_stat[2]",                             D::Unknown,    D::Unknown,    None,              None),
    o(G::Battery,            0x770A6E7C, 422, "battery.cells_stat[0].u_max.index",                 D::Uint8,      D::Uint8,      None,              None),
    o(G::Battery,            0x7E590128, 455, "battery.cells_stat[0].u_max.time",                  D::Uint32,     D::Uint32,     None,              None),
    o(G::Battery,            0x7F42BB82, 457, "battery.cells_stat[6].u_max.index",                 D::Uint8,      D::Uint8,      None,              None),
    o(G::Battery,            0x7FF6252C, 459, "battery.cells_stat[5].t_max.time",                  D::Uint32,     D::Uint32,     None,              None),
    o(G::Battery,            0x804A3266, 460, "battery.cells_stat[6].u_max.value",                 D::Float,      D::Float,      None,              None),
    o(G::Battery,            0x8160539D, 464, "battery.cells_stat[4].t_max.value",                 D::Float,      D::Float,      None,              None),
    o(G::Battery,            0x885BB57E, 483, "battery.cells_stat[6].t_min.value",                 D::Float,      D::Float,      None,              None),
    o(G::Battery,            0x889DC27F, 485, "battery.cells_stat[0].u_min.value",                 D::Float,      D::Float,      None,              None),
    o(G::Battery,            0x88BBF8CB, 486, "battery.cells_stat[5].t_min.value",                 D::Float,      D::Float,      None,              None),
    o(G::Battery,            0x89B25F4B, 492, "battery.stack_cycles[3]",                           D::Uint16,     D::Uint16,     None,              None),
    o(G::Battery,            0x8B9FF008, 497, "battery.soc_target",                                D::Float,      D::Float,      Some("%"),         Some("Target SOC")),
    o(G::Battery,            0x8BB08839, 498, "battery.cells_stat[6].t_min.time",                  D::Uint32,     D::Uint32,     None,              None),
    o(G::Battery,            0x8DFFDD33, 504, "battery.cells_stat[3].u_min.time",                  D::Uint32,     D::Uint32,     None,              None),
    o(G::Battery,            0x8EC23427, 507, "battery.cells_stat[4].u_max.time",                  D::Uint32,     D::Uint32,     None,              None),
    o(G::Battery,            0x8EF6FBBD, 509, "battery.cells[1]",                                  D::Unknown,    D::Unknown,    None,              None),
    o(G::Battery,            0x8EF9C9B8, 510, "battery.cells_stat[6].t_max.time",                  D::Uint32,     D::Uint32,     None,              None),
    o(G::Battery,            0x902AFAFB, 513, "battery.temperature",                               D::Float,      D::Float,      Some("°C"),        Some("Battery temperature")),
    o(G::Battery,            0x90832471, 518, "battery.cells_stat[1].u_max.time",                  D::Uint32,     D::Uint32,     None,              None),
    o(G::Battery,            0x91C325D9, 526, "battery.cells_stat[0].t_min.time",                  D::Uint32,     D::Uint32,     None,              None),
    o(G::Battery,            0x91FB68CD, 527, "battery.cells_stat[6].t_max.value",                 D::Float,      D::Float,      None,              None),
    o(G::Battery,            0x959930BF, 545, "battery.soc",                                       D::Float,      D::Float,      Some("%"),         Some("SOC (State of charge)")),
    o(G::Battery,            0x99396810, 558, "battery.module_sn[1]",                              D::String,     D::String,     None,              Some("Module 1 Serial Number")),
    o(G::Battery,            0x993C06F6, 559, "battery.cells_resist[3]",                           D::String,     D::String,     None,              None),
    o(G::Battery,            0x9D785E8C, 569, "battery.bms_software_version",                      D::Uint32,     D::Uint32,     None,              Some("Software version BMS Master")),
    o(G::Battery,            0x9E314430, 572, "battery.cells_stat[2].u_max.time",                  D::Uint32,     D::Uint32,     None,              None),
    o(G::Battery,            0xA10D9A4B, 574, "battery.min_cell_temperature",                      D::Float,      D::Float,      None,              None),
    o(G::Battery,            0xA3E48B21, 584, "battery.cells_stat[2].t_min.value",                 D::Float,      D::Float,      None,              None),
    o(G::Battery,            0xA40906BF, 585, "battery.stack_software_version[4]",                 D::Uint32,     D::Uint32,     None,              Some("Software version stack 4")),
    o(G::Battery,            0xA54C4685, 588, "battery.stack_software_version[1]",                 D::Uint32,     D::Uint32,     None,              Some("Software version stack 1")),
    o(G::Battery,            0xA616B022, 591, "battery.soc_target_low",                            D::Float,      D::Float,      None,              Some("SOC target low")),
    o(G::Battery,            0xA6871A4D, 593, "battery.cells_stat[4].t_min.index",                 D::Uint8,      D::Uint8,      None,              None),
    o(G::Battery,            0xA6C4FD4A, 594, "battery.stack_cycles[0]",                           D::Uint16,     D::Uint16,     None,              None),
    o(G::Battery,            0xA7DBD28C, 598, "battery.cells_stat[2].t_max.index",                 D::Uint8,      D::Uint8,      None,              None),
    o(G::Battery,            0xA7FE5C0C, 601, "battery.cells_stat[2].t_min.index",                 D::Uint8,      D::Uint8,      None,              None),
    o(G::Battery,            0xA9033880, 605, "battery.used_energy",                               D::Float,      D::Float,      Some("Wh"),        Some("Total energy flow from battery")),
    o(G::Battery,            0xAACAC898, 611, "battery.cells_stat[4].t_max.time",                  D::Uint32,     D::Uint32,     None,              None),
    o(G::Battery,            0xACF7666B, 615, "battery.efficiency",                                D::Float,      D::Float,      None,              Some("Battery efficiency (used energy / stored energy)")),
    o(G::Battery,            0xB0EBE75A, 622, "battery.minimum_discharge_voltage",                 D::Float,      D::Float,      Some("V"),         Some("Min. discharge voltage")),
    o(G::Battery,            0xB4E053D4, 639, "battery.cells_stat[1].u_min.value",                 D::Float,      D::Float,      None,              None),
    o(G::Battery,            0xB57B59BD, 642, "battery.ah_capacity",                               D::Float,      D::Float,      Some("Ah"),        Some("Battery capacity")),
    o(G::Battery,            0xB81FB399, 651, "battery.cells_stat[2].u_min.time",                  D::Uint32,     D::Uint32,     None,              None),
    o(G::Battery,            0xB84A38AB, 653, "battery.soc_target_high",                           D::Float,      D::Float,      None,              Some("SOC target high")),
    o(G::Battery,            0xB9E09F78, 659, "battery.cells_stat[5].u_min.index",                 D::Uint8,      D::Uint8,      None,              None),
    o(G::Battery,            0xBB302278, 662, "battery.cells_stat[1].t_min.time",                  D::Uint32,     D::Uint32,     None,              None),
    o(G::Battery,            0xBDE3BF0A, 673, "battery.cells_stat[6].t_max.index",                 D::Uint8,      D::Uint8,      None,              None),
    o(G::Battery,            0xC0680302, 679, "battery.cells_stat[2].t_min.time",                  D::Uint32,     D::Uint32,     None,              None),
    o(G::Battery,            0xC0DF2978, 684, "battery.cycles",                                    D::Int32,      D::Int32,      None,              Some("Battery charge / discharge cycles")),
    o(G::Battery,            0xC42F5807, 695, "battery.cells_stat[1].u_max.index",                 D::Uint8,      D::Uint8,      None,              None),
    o(G::Battery,            0xC6DA81A0, 704, "battery.cells_stat[6].u_max.time",                  D::Uint32,     D::Uint32,     None,              None),
    o(G::Battery,            0xC8609C8E, 712, "battery.cells[3]",                                  D::Unknown,    D::Unknown,    None,              None),
    o(G::Battery,            0xC88EB032, 713, "battery.cells_stat[0].u_min.time",                  D::Uint32,     D::Uint32,     None,              None),
    o(G::Battery,            0xC8BA1729, 714, "battery.stack_software_version[2]",                 D::Uint32,     D::Uint32,     None,              Some("Software version stack 2")),
    o(G::Battery,            0xD0C47326, 736, "battery.cells_stat[1].t_min.value",                 D::Float,      D::Float,      None,              None),
    o(G::Battery,            0xD60E7A2F, 754, "battery.cells_stat[1].u_min.time",                  D::Uint32,     D::Uint32,     None,              None),
    o(G::Battery,            0xDD5930A2, 773, "battery.cells_stat[0].t_min.index",                 D::Uint8,      D::Uint8,      None,              None),
    o(G::Battery,            0xDE9CBCB0, 778, "battery.cells_stat[5].t_max.value",                 D::Float,      D::Float,      None,              None),
    o(G::Battery,            0xDEE1957F, 779, "battery.cells_resist[4]",                           D::String,     D::String,     None,              None),
    o(G::Battery,            0xDF0A735C, 780, "battery.maximum_discharge_current",                 D::Float,      D::Float,      Some("A"),         Some("Max. discharge current")),
    o(G::Battery,            0xDFF966E3, 783, "battery.cells_stat[6].t_min.index",                 D::Uint8,      D::Uint8,      None,              None),
    o(G::Battery,            0xE7177DEE, 804, "battery.cells_stat[2].u_max.value",                 D::Float,      D::Float,      None,              None),
    o(G::Battery,            0xEB4C2597, 814, "battery.cells_resist[6]",                           D::String,     D::String,     None,              None),
    o(G::Battery,            0xEEA3F59B, 821, "battery.stack_software_version[5]",                 D::Uint32,     D::Uint32,     None,              Some("Software version stack 5")),
    o(G::Battery,            0xEECDFEFC, 823, "battery.cells_stat[2].u_min.value",                 D::Float,      D::Float,      None,              None),
    o(G::Battery,            0xEFD3EC8A, 825, "battery.cells_stat[5].t_min.time",                  D::Uint32,     D::Uint32,     None,              None),
    o(G::Battery,            0xF044EDA0, 828, "battery.cells_stat[3].t_max.value",                 D::Float,      D::Float,      None,              None),
    o(G::Battery,            0xF257D342, 842, "battery.cells_stat[1].t_max.value",                 D::Float,      D::Float,      None,              None),
    o(G::Battery,            0xF3FD8CE6, 848, "battery.cells_resist[2]",                           D::String,     D::String,     None,              None),
    o(G::Battery,            0xF54BC06D, 854, "battery.cells_stat[4].u_max.value",                 D::Float,      D::Float,      None,              None),
    o(G::Battery,            0xF8C0D255, 864, "battery.cells[0]",                                  D::Unknown,    D::Unknown,    None,              None),
    o(G::Battery,            0xF99E8CC8, 866, "battery.cells_stat[6]",                             D::Unknown,    D::Unknown,    None,              None),
    o(G::Battery,            0xFA3276DC, 868, "battery.cells_stat[3].t_min.time",                  D::Uint32,     D::Uint32,     None,              None),
    o(G::Battery,            0xFB796780, 874, "battery.cells_stat[1]",                             D::Unknown,    D::Unknown,    None,              None),
    o(G::Battery,            0xFBF6D834, 877, "battery.module_sn[0]",                              D::String,     D::String,     None,              Some("Module 0 Serial Number")),
    o(G::Battery,            0xFDBD9EE9, 889, "battery.cells_stat[3].u_max.index",                 D::Uint8,      D::Uint8,      None,              None),
    o(G::Battery,            0xFE44BA26, 892, "battery.cells_stat[0].u_min.index",                 D::Uint8,      D::Uint8,      None,              None),
    o(G::Battery,            0xE7B0E692, 805, "battery.bat_impedance.impedance_fine",              D::Float,      D::Float,      None,              Some("Battery circuit impedance")),
    o(G::Battery,            0xEA77252E, 812, "battery.minimum_discharge_voltage_constant_u",      D::Float,      D::Float,      Some("V"),         Some("Min. discharge voltage")),
    o(G::CsNeg,              0x019C0B60,   4, "cs_neg[2]",                                         D::Float,      D::Float,      None,              Some("Multiply value of the current sensor 2 by")),
    o(G::CsNeg,              0x4C12C4C7, 257, "cs_neg[1]",                                         D::Float,      D::Float,      None,              Some("Multiply value of the current sensor 1 by")),
    o(G::CsNeg,              0x82258C01, 467, "cs_neg[0]",                                         D::Float,      D::Float,      None,              Some("Multiply value of the current sensor 0 by")),
    o(G::HwTest,             0x039BDE11,   8, "hw_test.state",                                     D::Uint8,      D::Uint8,      None,              None),
    o(G::HwTest,             0x058F1759,  17, "hw_test.bt_power[6]",                               D::Float,      D::Float,      None,              None),
    o(G::HwTest,             0x0875C906,  31, "hw_test.bt_time[2]",                                D::Float,      D::Float,      None,              None),
    o(G::HwTest,             0x2082BFB6, 109, "hw_test.bt_time[9]",                                D::Float,      D::Float,      None,              None),
    o(G::HwTest,             0x3CA8E8D0, 210, "hw_test.bt_time[0]",                                D::Float,      D::Float,      None,              None),
    o(G::HwTest,             0x3D789979, 212, "hw_test.bt_power[7]",                               D::Float,      D::Float,      None,              None),
    o(G::HwTest,             0x4E2B42A4, 268, "hw_test.bt_power[0]",                               D::Float,      D::Float,      None,              None),
    o(G::HwTest,             0x4E77B2CE, 272, "hw_test.bt_cycle",                                  D::Uint8,      D::Uint8,      None,              None),
    o(G::HwTest,             0x58378BD0, 305, "hw_test.bt_time[3]",                                D::Float,      D::Float,      None,              None),
    o(G::HwTest,             0x6BFF1AF4, 375, "hw_test.bt_power[2]",                               D::Float,      D::Float,      None,              None),
    o(G::HwTest,             0x71B70DCE, 405, "hw_test.bt_power[4]",                               D::Float,      D::Float,      None,              None),
    o(G::HwTest,             0x75AE19ED, 418, "hw_test.hw_switch_time",                            D::Float,      D::Float,      None,              None),
    o(G::HwTest,             0x77DD4364, 425, "hw_test.bt_time[5]",                                D::Float,      D::Float,      None,              None),
    o(G::HwTest,             0x86782D58, 477, "hw_test.bt_power[9]",                               D::Float,      D::Float,      None,              None),
    o(G::HwTest,             0x903FE89E, 514, "hw_test.bt_time[8]",                                D::Float,      D::Float,      None,              None),
    o(G::HwTest,             0x9214A00C, 529, "hw_test.booster_test_index",                        D::Uint8,      D::Uint8,      None,              None),
    o(G::HwTest,             0x940569AC, 541, "hw_test.bt_time[6]",                                D::Float,      D::Float,      None,              None),
    o(G::HwTest,             0xB082C4D7, 621, "hw_test.bt_power[5]",                               D::Float,      D::Float,      None,              None),
    o(G::HwTest,             0xC1C82889, 686, "hw_test.bt_power[1]",                               D::Float,      D::Float,      None,              None),
    o(G::HwTest,             0xC3C7325E, 692, "hw_test.bt_time[4]",                                D::Float,      D::Float,      None,              None),
    o(G::HwTest,             0xC66A522B, 703, "hw_test.bt_time[1]",                                D::Float,      D::Float,      None,              None),
    o(G::HwTest,             0xC707102E, 705, "hw_test.bt_power[3]",                               D::Float,      D::Float,      None,              None),
    o(G::HwTest,             0xCBEC8200, 728, "hw_test.timer2",                                    D::Float,      D::Float,      None,              None),
    o(G::HwTest,             0xD4C4A941, 748, "hw_test.bt_time[7]",                                D::Float,      D::Float,      None,              None),
    o(G::HwTest,             0xE6248312, 800, "hw_test.bt_power[8]",                               D::Float,      D::Float,      None,              None),
    o(G::GSync,              0x03A39CA2,   9, "g_sync.p_ac_load[0]",                               D::Float,      D::Float,      Some("W"),         Some("Load household phase 1")),
    o(G::GSync,              0x0A04CA7F,  36, "g_sync.u_zk_n_avg",                                 D::Float,      D::Float,      Some("V"),         Some("Negative buffer capacitor voltage")),
    o(G::GSync,              0x147E8E26,  72, "g_sync.p_ac[1]",                                    D::Float,      D::Float,      None,              Some("AC2")),
    o(G::GSync,              0x1AC87AA0,  92, "g_sync.p_ac_load_sum_lp",                           D::Float,      D::Float,      Some("W"),         Some("Load household - external Power")),
    o(G::GSync,              0x24150B85, 127, "g_sync.u_zk_sum_mov_avg",                           D::Float,      D::Float,      Some("V"),         Some("Actual DC link voltage")),
    o(G::GSync,              0x2545E22D, 131, "g_sync.u_l_rms[2]",                                 D::Float,      D::Float,      Some("V"),         Some("AC voltage phase 3")),
    o(G::GSync,              0x2788928C, 141, "g_sync.p_ac_load[1]",                               D::Float,      D::Float,      Some("W"),         Some("Load household phase 2")),
    o(G::GSync,              0x27BE51D9, 142, "g_sync.p_ac_sc[0]",                                 D::Float,      D::Float,      Some("W"),         Some("Grid power phase 1")),
    o(G::GSync,              0x3A444FC6, 197, "g_sync.s_ac_lp[0]",                                 D::Float,      D::Float,      Some("VA"),        Some("Apparent power phase 1")),
    o(G::GSync,              0x400F015B, 219, "g_sync.p_acc_lp",                                   D::Float,      D::Float,      Some("W"),         Some("Battery power")),
    o(G::GSync,              0x4077335D, 220, "g_sync.s_ac_lp[1]",                                 D::Float,      D::Float,      Some("VA"),        Some("Apparent power phase 2")),
    o(G::GSync,              0x43257820, 227, "g_sync.p_ac[0]",                                    D::Float,      D::Float,      None,              Some("AC1")),
    o(G::GSync,              0x485AD749, 245, "g_sync.u_ptp_rms[1]",                               D::Float,      D::Float,      Some("V"),         Some("Phase to phase voltage 2")),
    o(G::GSync,              0x48D73FA5, 247, "g_sync.i_dr_lp[2]",                                 D::Float,      D::Float,      Some("A"),         Some("Current phase 3 (average)")),
    o(G::GSync,              0x4E49AEC5, 270, "g_sync.p_ac_sum",                                   D::Float,      D::Float,      Some("W"),         Some("Real power")),
    o(G::GSync,              0x54B4684E, 295, "g_sync.u_l_rms[1]",                                 D::Float,      D::Float,      Some("V"),         Some("AC voltage phase 2")),
    o(G::GSync,              0x55C22966, 299, "g_sync.s_ac[2]",                                    D::Float,      D::Float,      Some("VA"),        Some("Apparent power phase 3")),
    o(G::GSync,              0x6002891F, 331, "g_sync.p_ac_sc_sum",                                D::Float,      D::Float,      Some("W"),         Some("Grid power (ext. sensors)")),
    o(G::GSync,              0x612F7EAB, 335, "g_sync.s_ac[1]",                                    D::Float,      D::Float,      Some("VA"),        Some("Apparent power phase 2")),
    o(G::GSync,              0x63476DBE, 342, "g_sync.u_ptp_rms[0]",                               D::Float,      D::Float,      Some("V"),         Some("Phase to phase voltage 1")),
    o(G::GSync,              0x650C1ED7, 348, "g_sync.i_dr_eff[1]",                                D::Float,      D::Float,      Some("A"),         Some("Current phase 2")),
    o(G::GSync,              0x6E1C5B78, 387, "g_sync.p_ac_lp[1]",                                 D::Float,      D::Float,      Some("W"),         Some("AC power phase 2")),
    o(G::GSync,              0x71E10B51, 407, "g_sync.p_ac_lp[0]",                                 D::Float,      D::Float,      Some("W"),         Some("AC power phase 1")),
    o(G::GSync,              0x7C78CBAC, 449, "g_sync.q_ac_sum_lp",                                D::Float,      D::Float,      Some("var"),       Some("Reactive power")),
    o(G::GSync,              0x82E3C121, 469, "g_sync.q_ac[1]",                                    D::Float,      D::Float,      Some("var"),       Some("Reactive power phase 2")),
    o(G::GSync,              0x883DE9AB, 482, "g_sync.s_ac_lp[2]",                                 D::Float,      D::Float,      Some("VA"),        Some("Apparent power phase 3")),
    o(G::GSync,              0x887D43C4, 484, "g_sync.i_dr_lp[0]",                                 D::Float,      D::Float,      Some("A"),         Some("Current phase 1 (average)")),
    o(G::GSync,              0x89EE3EB5, 493, "g_sync.i_dr_eff[0]",                                D::Float,      D::Float,      Some("A"),         Some("Current phase 1")),
    o(G::GSync,              0x8A18539B, 494, "g_sync.u_zk_sum_avg",                               D::Float,      D::Float,      Some("V"),         Some("DC link voltage")),
    o(G::GSync,              0x91617C58, 524, "g_sync.p_ac_grid_sum_lp",                           D::Float,      D::Float,      Some("W"),         Some("Total grid power")),
    o(G::GSync,              0x92BC682B, 533, "g_sync.i_dr_eff[2]",                                D::Float,      D::Float,      Some("A"),         Some("Current phase 3")),
    o(G::GSync,              0xB0041187, 619, "g_sync.u_sg_avg[1]",                                D::Float,      D::Float,      Some("V"),         Some("Solar generator B voltage")),
    o(G::GSync,              0xB221BCFA, 629, "g_sync.p_ac_sc[2]",                                 D::Float,      D::Float,      Some("W"),         Some("Grid power phase 3")),
    o(G::GSync,              0xB55BA2CE, 641, "g_sync.u_sg_avg[0]",                                D::Float,      D::Float,      Some("V"),         Some("Solar generator A voltage")),
    o(G::GSync,              0xB9928C51, 657, "g_sync.p_ac_lp[2]",                                 D::Float,      D::Float,      Some("W"),         Some("AC power phase 3")),
    o(G::GSync,              0xBCA77559, 665, "g_sync.q_ac[2]",                                    D::Float,      D::Float,      Some("var"),       Some("Reactive power phase 3")),
    o(G::GSync,              0xC03462F6, 677, "g_sync.p_ac[2]",                                    D::Float,      D::Float,      None,              Some("AC3")),
    o(G::GSync,              0xC198B25B, 685, "g_sync.u_zk_p_avg",                                 D::Float,      D::Float,      Some("V"),         Some("Positive buffer capacitor voltage")),
    o(G::GSync,              0xCABC44CA, 721, "g_sync.s_ac[0]",                                    D::Float,      D::Float,      Some("VA"),        Some("Apparent power phase 1")),
    o(G::GSync,              0xCF053085, 734, "g_sync.u_l_rms[0]",                                 D::Float,      D::Float,      Some("V"),         Some("AC voltage phase 1")),
    o(G::GSync,              0xDB2D69AE, 767, "g_sync.p_ac_sum_lp",                                D::Float,      D::Float,      Some("W"),         Some("AC power")),
    o(G::GSync,              0xDCA1CF26, 771, "g_sync.s_ac_sum_lp",                                D::Float,      D::Float,      Some("VA"),        Some("Apparent power")),
    o(G::GSync,              0xDCAC0EA9, 772, "g_sync.i_dr_lp[1]",                                 D::Float,      D::Float,      Some("A"),         Some("Current phase 2 (average)")),
    o(G::GSync,              0xE94C2EFC, 807, "g_sync.q_ac[0]",                                    D::Float,      D::Float,      Some("var"),       Some("Reactive power phase 1")),
    o(G::GSync,              0xF0B436DD, 832, "g_sync.p_ac_load[2]",                               D::Float,      D::Float,      Some("W"),         Some("Load household phase 3")),
    o(G::GSync,              0xF25C339B, 843, "g_sync.u_ptp_rms[2]",                               D::Float,      D::Float,      Some("V"),         Some("Phase to phase voltage 3")),
    o(G::GSync,              0xF5584F90, 855, "g_sync.p_ac_sc[1]",                                 D::Float,      D::Float,      Some("W"),         Some("Grid power phase 2")),
    o(G::Logger,             0x05C7CFB1,  18, "logger.day_egrid_load_log_ts",                      D::Int32,      D::Timeseries, None,              None),
    o(G::Logger,             0x064E4340,  20, "logger.minutes_ubat_log_ts",                        D::Int32,      D::Timeseries, Some("V"),         None),
    o(G::Logger,             0x095AFAA8,  33, "logger.minutes_ul3_log_ts",                         D::Int32,      D::Timeseries, Some("V"),         None),
    o(G::Logger,             0x0DF164DE,  52, "logger.day_eb_log_ts",                              D::Int32,      D::Timeseries, None,              None),
    o(G::Logger,             0x0FA29566,  60, "logger.minutes_ub_log_ts",                          D::Int32,      D::Timeseries, Some("V"),         Some("Histogram voltage generator B")),
    o(G::Logger,             0x132AA71E,  70, "logger.minutes_temp2_log_ts",                       D::Int32,      D::Timeseries, Some("°C"),        Some("Histogram heat sink (battery actuator) temperature")),
    o(G::Logger,             0x19B814F2,  90, "logger.year_egrid_feed_log_ts",                     D::Int32,      D::Timeseries, None,              None),
    o(G::Logger,             0x1D49380A,  99, "logger.minutes_eb_log_ts",                          D::Int32,      D::Timeseries, None,              None),
    o(G::Logger,             0x21879805, 112, "logger.minutes_eac1_log_ts",                        D::Int32,      D::Timeseries, None,              None),
    o(G::Logger,             0x2A449E89, 150, "logger.year_log_ts",                                D::Int32,      D::Timeseries, None,              None),
    o(G::Logger,             0x2F0A6B15, 159, "logger.month_ea_log_ts",                            D::Int32,      D::Timeseries, None,              None),
    o(G::Logger,             0x34ECA9CA, 175, "logger.year_eb_log_ts",                             D::Int32,      D::Timeseries, None,              None),
    o(G::Logger,             0x3906A1D0, 191, "logger.minutes_eext_log_ts",                        D::Int32,      D::Timeseries, None,              None),
    o(G::Logger,             0x431509D1, 226, "logger.month_eload_log_ts",                         D::Int32,      D::Timeseries, None,              None),
    o(G::Logger,             0x488052BA, 246, "logger.minutes_ul2_log_ts",                         D::Int32,      D::Timeseries, Some("V"),         None),
    o(G::Logger,             0x4C14CC7C, 258, "logger.year_ea_log_ts",                             D::Int32,      D::Timeseries, None,              None),
    o(G::Logger,             0x4E9D95A6, 273, "logger.year_eext_log_ts",                           D::Int32,      D::Timeseries, None,              None),
    o(G::Logger,             0x50B441C1, 283, "logger.minutes_ea_log_ts",                          D::Int32,      D::Timeseries, None,              None),
    o(G::Logger,             0x5293B668, 287, "logger.minutes_soc_log_ts",                         D::Int32,      D::Timeseries, Some("%"),         None),
    o(G::Logger,             0x5411CE1B, 292, "logger.minutes_ul1_log_ts",                         D::Int32,      D::Timeseries, Some("V"),         None),
    o(G::Logger,             0x554D8FEE, 297, "logger.minutes_eac2_log_ts",                        D::Int32,      D::Timeseries, None,              None),
    o(G::Logger,             0x5D34D09D, 325, "logger.month_egrid_load_log_ts",                    D::Int32,      D::Timeseries, None,              None),
    o(G::Logger,             0x60A9A532, 334, "logger.day_eext_log_ts",                            D::Int32,      D::Timeseries, None,              None),
    o(G::Logger,             0x669D02FE, 356, "logger.minutes_eac_log_ts",                         D::Int32,      D::Timeseries, None,              None),
    o(G::Logger,             0x6B5A56C2, 372, "logger.month_eb_log_ts",                            D::Int32,      D::Timeseries, None,              None),
    o(G::Logger,             0x6F3876BC, 391, "logger.error_log_time_stamp",                       D::Int32,      D::EventTable, None,              Some("Time stamp for error log reading")),
    o(G::Logger,             0x70BD7C46, 398, "logger.year_eac_log_ts",                            D::Int32,      D::Timeseries, None,              None),
    o(G::Logger,             0x72ACC0BF, 410, "logger.minutes_ua_log_ts",                          D::Int32,      D::Timeseries, Some("V"),         Some("Histogram voltage generator A")),
    o(G::Logger,             0x76C9A0BD, 420, "logger.minutes_soc_targ_log_ts",                    D::Int32,      D::Timeseries, Some("%"),         None),
    o(G::Logger,             0x921997EE, 530, "logger.month_egrid_feed_log_ts",                    D::Int32,      D::Timeseries, None,              None),
    o(G::Logger,             0x9247DB99, 531, "logger.minutes_egrid_load_log_ts",                  D::Int32,      D::Timeseries, None,              None),
    o(G::Logger,             0x9A51A23B, 563, "logger.log_rate",                                   D::Uint16,     D::Uint16,     Some("s"),         Some("Data log resolution")),
    o(G::Logger,             0xA60082A9, 590, "logger.minutes_egrid_feed_log_ts",                  D::Int32,      D::Timeseries, Some("W"),         None),
    o(G::Logger,             0xA7C708EB, 597, "logger.minutes_eload_log_ts",                       D::Int32,      D::Timeseries, None,              None),
    o(G::Logger,             0xB20D1AD6, 628, "logger.day_egrid_feed_log_ts",                      D::Int32,      D::Timeseries, None,              None),
    o(G::Logger,             0xC55EF32E, 699, "logger.year_egrid_load_log_ts",                     D::Int32,      D::Timeseries, None,              None),
    o(G::Logger,             0xCA6D6472, 720, "logger.day_eload_log_ts",                           D::Int32,      D::Timeseries, None,              None),
    o(G::Logger,             0xCBDAD315, 727, "logger.minutes_ebat_log_ts",                        D::Int32,      D::Timeseries, None,              None),
    o(G::Logger,             0xD3E94E6B, 744, "logger.minutes_temp_bat_log_ts",                    D::Int32,      D::Timeseries, Some("°C"),        None),
    o(G::Logger,             0xE04C3900, 784, "logger.day_eac_log_ts",                             D::Int32,      D::Timeseries, None,              None),
    o(G::Logger,             0xE29C24EB, 792, "logger.minutes_eac3_log_ts",                        D::Int32,      D::Timeseries, None,              None),
    o(G::Logger,             0xE4DC040A, 796, "logger.month_eext_log_ts",                          D::Int32,      D::Timeseries, None,              None),
    o(G::Logger,             0xE5FBCC6F, 799, "logger.year_eload_log_ts",                          D::Int32,      D::Timeseries, None,              None),
    o(G::Logger,             0xF28341E2, 844, "logger.month_eac_log_ts",                           D::Int32,      D::Timeseries, None,              None),
    o(G::Logger,             0xF76DE445, 861, "logger.minutes_temp_log_ts",                        D::Int32,      D::Timeseries, Some("°C"),        None),
    o(G::Logger,             0xFCF4E78D, 885, "logger.day_ea_log_ts",                              D::Int32,      D::Timeseries, None,              None),
    o(G::Logger,             0xA305214D, 581, "logger.buffer",                                     D::String,     D::String,     None,              None),
    o(G::Wifi,               0x06E03755,  22, "wifi.ip",                                           D::String,     D::String,     None,              Some("IP Address")),
    o(G::Wifi,               0x0BA16A10,  40, "wifi.sockb_protocol",                               D::Enum,       D::Enum,       None,              Some("Network mode")),
    o(G::Wifi,               0x14C0E627,  73, "wifi.password",                                     D::String,     D::String,     None,              Some("WiFi password")),
    o(G::Wifi,               0x1D0623D6,  97, "wifi.dns_address",                                  D::String,     D::String,     None,              Some("DNS address")),
    o(G::Wifi,               0x392D1BEE, 192, "wifi.connect_to_server",                            D::Uint8,      D::Uint8,      None,              None),
    o(G::Wifi,               0x5673D737, 301, "wifi.connect_to_wifi",                              D::Bool,       D::Bool,       None,              None),
    o(G::Wifi,               0x57429627, 302, "wifi.authentication_method",                        D::String,     D::String,     None,              Some("WiFi authentication method")),
    o(G::Wifi,               0x5952E5E6, 312, "wifi.mask",                                         D::String,     D::String,     None,              Some("Netmask")),
    o(G::Wifi,               0x5A316247, 314, "wifi.mode",                                         D::String,     D::String,     None,              Some("WiFi mode")),
    o(G::Wifi,               0x6D7C0BF4, 384, "wifi.sockb_port",                                   D::Int32,      D::Int32,      None,              Some("Port")),
    o(G::Wifi,               0x76CAA9BF, 421, "wifi.encryption_algorithm",                         D::String,     D::String,     None,              None),
    o(G::Wifi,               0x7B1F7FBE, 444, "wifi.gateway",                                      D::String,     D::String,     None,              Some("Gateway")),
    o(G::Wifi,               0x7DDE352B, 453, "wifi.sockb_ip",                                     D::String,     D::String,     None,              None),
    o(G::Wifi,               0x8CA00014, 500, "wifi.result",                                       D::Int8,       D::Int8,       None,              Some("WiFi result")),
    o(G::Wifi,               0xB4222BDE, 637, "wifi.state",                                        D::Uint8,      D::Uint8,      None,              None),
    o(G::Wifi,               0xB7C85C51, 649, "wifi.use_ethernet",                                 D::Bool,       D::Bool,       None,              None),
    o(G::Wifi,               0xD5790CE1, 752, "wifi.use_wifi",                                     D::Bool,       D::Bool,       None,              Some("Enable Wi-Fi Access Point")),
    o(G::Wifi,               0xF8DECCE6, 865, "wifi.connected_ap_ssid",                            D::String,     D::String,     None,              Some("WiFi associated AP")),
    o(G::Wifi,               0xF9FD0D61, 867, "wifi.service_ip",                                   D::String,     D::String,     None,              Some("Server to connect to to wait for commands, usually used by the vendor service personell")),
    o(G::Wifi,               0xFF2A258B, 894, "wifi.server_ip",                                    D::String,     D::String,     None,              Some("Server to connect to to wait for commands, usually used by the vendor service personell")),
    o(G::Wifi,               0xA1D2B565, 578, "wifi.service_port",                                 D::Int32,      D::Int32,      None,              None),
    o(G::Wifi,               0xB7FEA209, 650, "wifi.connect_service_timestamp",                    D::Int32,      D::Int32,      None,              Some("Service auto disconnect time")),
    o(G::Wifi,               0xD83DC6AC, 757, "wifi.server_port",                                  D::Int32,      D::Int32,      None,              None),
    o(G::Wifi,               0x53886C09, 290, "wifi.connect_to_service",                           D::Uint8,      D::Uint8,      None,              None),
    o(G::Wifi,               0x907CD1DF, 517, "wifi.connect_service_max_duration",                 D::Int32,      D::Int32,      Some("s"),         Some("Service connection max duration")),
    o(G::Adc,                0x07C61FAD,  28, "adc.u_ref_1_5v[0]",                                 D::Uint16,     D::Uint16,     Some("V"),         Some("Reference voltage 1")),
    o(G::Adc,                0x16B28CCA,  80, "adc.u_ref_1_5v[1]",                                 D::Uint16,     D::Uint16,     Some("V"),         Some("Reference voltage 2")),
    o(G::Adc,                0x508FCE78, 282, "adc.u_ref_1_5v[3]",                                 D::Uint16,     D::Uint16,     Some("V"),         Some("Reference voltage 4")),
    o(G::Adc,                0x715C84A1, 403, "adc.u_ref_1_5v[2]",                                 D::Uint16,     D::Uint16,     Some("V"),         Some("Reference voltage 3")),
    o(G::Adc,                0xB84FDCF9, 654, "adc.u_acc",                                         D::Float,      D::Float,      Some("V"),         Some("Battery voltage (inverter)")),
    o(G::Net,                0x08679611,  29, "net.id",                                            D::Uint32,     D::Uint32,     None,              None),
    o(G::Net,                0x0C3815C2,  42, "net.load_reduction",                                D::Float,      D::Float,      None,              None),
    o(G::Net,                0x23F525DE, 126, "net.command",                                       D::Uint16,     D::Uint16,     None,              None),
    o(G::Net,                0x2E06172D, 154, "net.net_tunnel_id",                                 D::Uint32,     D::Uint32,     None,              None),
    o(G::Net,                0x3500F1E8, 176, "net.index",                                         D::Int8,       D::Int8,       None,              None),
    o(G::Net,                0x36214C57, 180, "net.prev_k",                                        D::Float,      D::Float,      None,              None),
    o(G::Net,                0x3AA565FC, 201, "net.package",                                       D::Unknown,    D::Unknown,    None,              None),
    o(G::Net,                0x46635546, 238, "net.n_descendants",                                 D::Int8,       D::Int8,       None,              Some("Number of descendant slaves")),
    o(G::Net,                0x5D1B0835, 324, "net.use_network_filter",                            D::Bool,       D::Bool,       None,              None),
    o(G::Net,                0x5E540FB2, 326, "net.update_slaves",                                 D::Bool,       D::Bool,       None,              Some("Activate aut. update slaves")),
    o(G::Net,                0x67C0A2F5, 362, "net.slave_p_total",                                 D::Float,      D::Float,      None,              None),
    o(G::Net,                0x6DCC4097, 386, "net.master_timeout",                                D::Float,      D::Float,      None,              None),
    o(G::Net,                0xBFFF3CAD, 676, "net.n_slaves",                                      D::Uint8,      D::Uint8,      None,              None),
    o(G::Net,                0xC0A7074F, 681, "net.slave_data",                                    D::Unknown,    D::Unknown,    None,              None),
    o(G::Net,                0xD3085D80, 743, "net.soc_av",                                        D::Float,      D::Float,      None,              None),
    o(G::Net,                0xD5205A45, 749, "net.slave_timeout",                                 D::Float,      D::Float,      None,              None),
    o(G::Net,                0xDB62DCB7, 769, "net.n_devices",                                     D::Uint8,      D::Uint8,      None,              None),
    o(G::AccConv,            0xB0FA4D23, 623, "acc_conv.i_charge_max",                             D::Float,      D::Float,      Some("A"),         Some("Max. battery converter charge current")),
    o(G::AccConv,            0xB408E40A, 636, "acc_conv.i_acc_lp_slow",                            D::Float,      D::Float,      None,              None),
    o(G::AccConv,            0xC642B9D6, 701, "acc_conv.i_discharge_max",                          D::Float,      D::Float,      Some("A"),         Some("Max. battery converter discharge current")),
    o(G::AccConv,            0xD9F9F35B, 762, "acc_conv.state_slow",                               D::Uint8,      D::Uint8,      None,              None),
    o(G::AccConv,            0xE3F4D1DF, 794, "acc_conv.i_max",                                    D::Float,      D::Float,      Some("A"),         Some("Max. battery converter current")),
    o(G::AccConv,            0x0AFDD6CF,  38, "acc_conv.i_acc_lp_fast",                            D::Float,      D::Float,      Some("A"),         Some("Battery current")),
    o(G::DcConv,             0x0CB5D21B,  44, "dc_conv.dc_conv_struct[1].p_dc_lp",                 D::Float,      D::Float,      Some("W"),         Some("Solar generator B power")),
    o(G::DcConv,             0x5BB8075A, 319, "dc_conv.dc_conv_struct[1].u_sg_lp",                 D::Float,      D::Float,      Some("V"),         Some("Solar generator B voltage")),
    o(G::DcConv,             0x5E942C62, 327, "dc_conv.dc_conv_struct[1].mpp.fixed_voltage",       D::Float,      D::Float,      Some("V"),         Some("Fixed voltage Solar generator B")),
    o(G::DcConv,             0x62B8940B, 339, "dc_conv.start_voltage",                             D::Float,      D::Float,      Some("V"),         Some("Inverter DC-voltage start value")),
    o(G::DcConv,             0x6476A836, 346, "dc_conv.dc_conv_struct[0].mpp.enable_scan",         D::Bool,       D::Bool,       None,              Some("Enable rescan for global MPP on solar generator A")),
    o(G::DcConv,             0x701A0482, 395, "dc_conv.dc_conv_struct[0].enabled",                 D::Bool,       D::Bool,       None,              Some("Solar generator A connected")),
    o(G::DcConv,             0x8DD1C728, 503, "dc_conv.dc_conv_struct[1].mpp.enable_scan",         D::Bool,       D::Bool,       None,              Some("Enable rescan for global MPP on solar generator B")),
    o(G::DcConv,             0x9E1A88F5, 571, "dc_conv.dc_conv_struct[0].mpp.fixed_voltage",       D::Float,      D::Float,      Some("V"),         Some("Fixed voltage Solar generator A")),
    o(G::DcConv,             0xAA9AA253, 610, "dc_conv.dc_conv_struct[1].p_dc",                    D::Float,      D::Float,      Some("W"),         Some("Solar generator B power")),
    o(G::DcConv,             0xB298395D, 632, "dc_conv.dc_conv_struct[0].u_sg_lp",                 D::Float,      D::Float,      Some("V"),         Some("Solar generator A voltage")),
    o(G::DcConv,             0xB5317B78, 640, "dc_conv.dc_conv_struct[0].p_dc",                    D::Float,      D::Float,      Some("W"),         Some("Solar generator A power")),
    o(G::DcConv,             0xB836B50C, 652, "dc_conv.dc_conv_struct[1].rescan_correction",       D::Float,      D::Float,      Some("V"),         Some("Last global rescan MPP correction on input B")),
    o(G::DcConv,             0xDB11855B, 766, "dc_conv.dc_conv_struct[0].p_dc_lp",                 D::Float,      D::Float,      Some("W"),         Some("Solar generator A power")),
    o(G::DcConv,             0xDB45ABD0, 768, "dc_conv.dc_conv_struct[0].rescan_correction",       D::Float,      D::Float,      Some("V"),         Some("Last global rescan MPP correction on input A")),
    o(G::DcConv,             0xFED51BD2, 893, "dc_conv.dc_conv_struct[1].enabled",                 D::Bool,       D::Bool,       None,              Some("Solar generator B connected")),
    o(G::DcConv,             0x226A23A4, 117, "dc_conv.dc_conv_struct[0].u_target",                D::Float,      D::Float,      Some("V"),         Some("MPP on input A")),
    o(G::DcConv,             0x675776B1, 360, "dc_conv.dc_conv_struct[1].u_target",                D::Float,      D::Float,      Some("V"),         Some("MPP on input B")),
    o(G::DcConv,             0xF87A2A1E, 863, "dc_conv.last_rescan",                               D::Uint32,     D::Uint32,     None,              Some("Last global rescan")),
    o(G::Nsm,                0x0CBA34B9,  45, "nsm.u_q_u[3]",                                      D::Float,      D::Float,      Some("V"),         Some("High voltage max. point")),
    o(G::Nsm,                0x10842019,  63, "nsm.cos_phi_p[3][1]",                               D::Float,      D::Float,      Some("cos(rct_db)"), Some("Point 4 (positive = overexcited)")),
    o(G::Nsm,                0x1089ACA9,  64, "nsm.u_q_u[0]",                                      D::Float,      D::Float,      Some("V"),         Some("Low voltage min. point")),
    o(G::Nsm,                0x14FCA232,  74, "nsm.rpm_lock_out_power",                            D::Float,      D::Float,      Some("P/Pn"),      Some("Reactive Power Mode lock-out power")),
    o(G::Nsm,                0x26260419, 134, "nsm.cos_phi_p[1][0]",                               D::Float,      D::Float,      Some("P/Pn"),      Some("Point 2")),
    o(G::Nsm,                0x32CD0DB3, 167, "nsm.cos_phi_p[0][1]",                               D::Float,      D::Float,      Some("cos(Phi)"),  Some("Point 1 (positive = overexcited)")),
    o(G::Nsm,                0x33F76B78, 172, "nsm.p_u[0][1]",                                     D::Float,      D::Float,      Some("V"),         Some("Point 1 voltage")),
    o(G::Nsm,                0x3515F4A0, 178, "nsm.p_u[3][1]",                                     D::Float,      D::Float,      Some("V"),         Some("Point 4 voltage")),
    o(G::Nsm,                0x360BDE8A, 179, "nsm.startup_grad",                                  D::Float,      D::Float,      Some("P/(Pn*s)"),  Some("Startup gradient")),
    o(G::Nsm,                0x4397D078, 229, "nsm.cos_phi_p[1][1]",                               D::Float,      D::Float,      Some("cos(Phi)"),  Some("Point 2 (positive = overexcited)")),
    o(G::Nsm,                0x43CD0B6F, 230, "nsm.pf_delay",                                      D::Float,      D::Float,      Some("s"),         Some("Delay time after P(f)")),
    o(G::Nsm,                0x4A61BAEE, 251, "nsm.p_u[3][0]",                                     D::Float,      D::Float,      Some("P/Pn"),      Some("Point 4 P/Pn")),
    o(G::Nsm,                0x4C2A7CDC, 259, "nsm.cos_phi_p[2][1]",                               D::Float,      D::Float,      Some("cos(Phi)"),  Some("Point 3 (positive = overexcited)")),
    o(G::Nsm,                0x4C374958, 260, "nsm.startup_grad_after_fault",                      D::Float,      D::Float,      Some("P/(Pn*s)"),  Some("Startup gradient after fault")),
    o(G::Nsm,                0x53EF7649, 291, "nsm.p_u[0][0]",                                     D::Float,      D::Float,      None,              Some("Point 1 P/Pn")),
    o(G::Nsm,                0x71465EAF, 402, "nsm.cos_phi_ts",                                    D::Float,      D::Float,      Some("s"),         Some("Time const for filter")),
    ObjectInfo { enum_map: Some(&[(0, "Off"), (1, "P(f)")]), ..o(G::Nsm,                0x7232F7AF, 408, "nsm.apm",                                           D::Enum,       D::Enum,       None,              Some("Active power mode")) },
    o(G::Nsm,                0x7A5C91F8, 437, "nsm.p_u[1][0]",                                     D::Float,      D::Float,      None,              Some("Point 2 P/Pn")),
    o(G::Nsm,                0x7AF779C1, 443, "nsm.pu_mode",                                       D::Bool,       D::Bool,       None,              Some("P(U) mode 0: Pn 1: Pload")),
    o(G::Nsm,                0x81AF854E, 466, "nsm.pu_use",                                        D::Bool,       D::Bool,       None,              Some("P(U) active")),
    o(G::Nsm,                0x83A5333A, 472, "nsm.cos_phi_p[0][0]",                               D::Float,      D::Float,      Some("P/Pn"),      Some("Point 1")),
    o(G::Nsm,                0x88DEBCFE, 488, "nsm.q_u_max_u_high",                                D::Float,      D::Float,      Some("var"),       Some("Qmax at upper voltage level (positive = overexcited)")),
    o(G::Nsm,                0x93E6918D, 539, "nsm.f_exit",                                        D::Float,      D::Float,      Some("Hz"),        Some("Exit frequency for P(f) over-frequency mode")),
    o(G::Nsm,                0x9680077F, 549, "nsm.cos_phi_p[2][0]",                               D::Float,      D::Float,      Some("P/Pn"),      Some("Point 3")),
    o(G::Nsm,                0xA33D0954, 583, "nsm.q_u_hysteresis",                                D::Bool,       D::Bool,       None,              Some("Curve with hysteresis")),
    o(G::Nsm,                0xA5044DCD, 586, "nsm.p_u[2][0]",                                     D::Float,      D::Float,      Some("P/Pn"),      Some("Point 3")),
    o(G::Nsm,                0xB76E2B4C, 647, "nsm.cos_phi_const",                                 D::Float,      D::Float,      None,              Some("Cos phi constant value (positive = overexcited)")),
    o(G::Nsm,                0xB98C8194, 656, "nsm.min_cos_phi",                                   D::Float,      D::Float,      None,              Some("Minimum allowed cos(phi) [0..1]")),
    o(G::Nsm,                0xBB617E51, 663, "nsm.u_q_u[1]",                                      D::Float,      D::Float,      Some("V"),         Some("Low voltage max. point")),
    ObjectInfo { enum_map: Some(&[(0, "Off"), (1, "Const cos(phi)"), (2, "Const Q"), (3, "cos(phi)(P)"), (4, "Q(U)")]), ..o(G::Nsm,                0xC3352B17, 689, "nsm.rpm",                                           D::Enum,       D::Enum,       None,              Some("Reactive power mode")) },
    o(G::Nsm,                0xC46E9CA4, 696, "nsm.u_lock_out",                                    D::Float,      D::Float,      Some("V"),         Some("Cos phi(P) lock out voltage")),
    o(G::Nsm,                0xCB9E1E6C, 725, "nsm.Q_const",                                       D::Float,      D::Float,      Some("var"),       Some("Q constant value (positive = overexcited)")),
    o(G::Nsm,                0xCCB51399, 729, "nsm.q_u_max_u_low",                                 D::Float,      D::Float,      Some("var"),       Some("Qmax at lower voltage level (positive = overexcited)")),
    o(G::Nsm,                0xD580567B, 753, "nsm.u_lock_in",                                     D::Float,      D::Float,      Some("V"),         Some("Cos phi(P) lock in voltage")),
    o(G::Nsm,                0xD884AF95, 759, "nsm.pf_desc_grad",                                  D::Float,      D::Float,      Some("P/(Pn*s)"),  Some("Power decrease gradient for P(f) mode")),
    o(G::Nsm,                0xE271C6D2, 791, "nsm.u_q_u[2]",                                      D::Float,      D::Float,      Some("V"),         Some("High voltage min. point")),
    o(G::Nsm,                0xE49BE3ED, 795, "nsm.pf_rise_grad",                                  D::Float,      D::Float,      Some("P/(Pn*s)"),  Some("Power increase gradient after P(f) restriction")),
    o(G::Nsm,                0xE6F1CB83, 803, "nsm.pu_ts",                                         D::Float,      D::Float,      Some("s"),         Some("Time const for filter")),
    o(G::Nsm,                0xEB7773BF, 815, "nsm.p_u[1][1]",                                     D::Float,      D::Float,      Some("V"),         Some("Point 2 voltage")),
    o(G::Nsm,                0xEE049B1F, 820, "nsm.pf_hysteresis",                                 D::Bool,       D::Bool,       None,              Some("Hysteresis mode")),
    o(G::Nsm,                0xF2405AC6, 839, "nsm.p_limit",                                       D::Float,      D::Float,      Some("W"),         Some("Max. grid power")),
    o(G::Nsm,                0xF25591AA, 841, "nsm.cos_phi_p[3][0]",                               D::Float,      D::Float,      Some("P/Pn"),      Some("Point 4")),
    o(G::Nsm,                0xF49F58F2, 852, "nsm.p_u[2][1]",                                     D::Float,      D::Float,      Some("V"),         Some("Point 3 voltage")),
    o(G::Nsm,                0xF6A85818, 859, "nsm.f_entry",                                       D::Float,      D::Float,      Some("Hz"),        Some("Entry frequency for P(f) over-frequency mode")),
    o(G::Nsm,                0xFCC39293, 884, "nsm.rpm_lock_in_power",                             D::Float,      D::Float,      Some("P/Pn"),      Some("Reactive Power Mode lock-in power")),
    o(G::Nsm,                0x7E75B17A, 456, "nsm.q_u_max_u_high_rel",                            D::Float,      D::Float,      None,              Some("Qmax at upper voltage level relative to Smax (positive = overexcited)")),
    o(G::Nsm,                0x8D33B6BC, 501, "nsm.f_low_exit",                                    D::Float,      D::Float,      Some("Hz"),        Some("Exit frequency for P(f) under-frequency mode")),
    o(G::Nsm,                0xC07E02CE, 680, "nsm.q_u_sel",                                       D::Enum,       D::Enum,       None,              Some("Voltage selection")),
    o(G::Nsm,                0xE952FF2D, 808, "nsm.q_u_max_u_low_rel",                             D::Float,      D::Float,      None,              Some("Qmax at lower voltage level relative to Smax (positive = overexcited)")),
    o(G::Nsm,                0xF3FD6C4C, 847, "nsm.pf_use_p_max",                                  D::Bool,       D::Bool,       None,              Some("By over-frequency in P(f) use Pmax instead of Pmom (instant P).")),
    o(G::Nsm,                0xFAA837C8, 870, "nsm.f_low_rise_grad",                               D::Float,      D::Float,      Some("1/Pn*Hz"),   Some("Power rise gradient for P(f) under-frequency mode without battery")),
    o(G::Nsm,                0x04EAAA98,  13, "nsm.f_low_entry",                                   D::Float,      D::Float,      Some("Hz"),        Some("Entry frequency for P(f) under-frequency mode")),
    o(G::Nsm,                0x38789061, 189, "nsm.f_low_rise_grad_storage",                       D::Float,      D::Float,      Some("1/Pn*Hz"),   Some("Power rise gradient for P(f) under-frequency mode with battery")),
    o(G::IoBoard,            0x0DF45696,  53, "io_board.io1_polarity",                             D::Bool,       D::Bool,       None,              Some("Inverted signal on input I/O 1")),
    o(G::IoBoard,            0x0E799A56,  56, "io_board.rse_table[0]",                             D::Float,      D::Float,      None,              Some("K4..K1: 0000")),
    o(G::IoBoard,            0x0FB40090,  61, "io_board.check_rs485_result",                       D::Uint8,      D::Uint8,      None,              None),
    o(G::IoBoard,            0x1B5445C4,  94, "io_board.check_rse_result",                         D::Uint16,     D::Uint16,     None,              None),
    o(G::IoBoard,            0x29CA60F8, 148, "io_board.rse_table[10]",                            D::Float,      D::Float,      None,              Some("K4..K1: 1010")),
    o(G::IoBoard,            0x2E0C6220, 155, "io_board.home_relay_sw_off_delay",                  D::Float,      D::Float,      Some("s"),         Some("Switching off delay")),
    o(G::IoBoard,            0x3C705F61, 208, "io_board.rse_table[8]",                             D::Float,      D::Float,      None,              Some("K4..K1: 1000")),
    o(G::IoBoard,            0x3DBCC6B4, 213, "io_board.rse_table[6]",                             D::Float,      D::Float,      None,              Some("K4..K1: 0110")),
    ObjectInfo { enum_map: Some(&[(0, "I/O not used"), (1, "Input S0 grid power consumption"), (2, "Input S0 grid power feed-in"), (3, "Input S0 household power"), (4, "Output S0 inverter power"), (5, "Input level switch"), (6, "Input emergency turn off"), (7, "Output S0 grid power feed-in"), (8, "Output S0 household power"), (9, "Output S0 solar power"), (10, "Input S0 external power")]), ..o(G::IoBoard,            0x4F330E08, 275, "io_board.io2_usage",                                D::Enum,       D::Enum,       None,              Some("Digital I/O 2 usage")) },
    o(G::IoBoard,            0x54DBC202, 296, "io_board.rse_table[12]",                            D::Float,      D::Float,      None,              Some("K4..K1: 1100")),
    o(G::IoBoard,            0x5867B3BE, 307, "io_board.rse_table[2]",                             D::Float,      D::Float,      None,              Some("K4..K1: 0010")),
    o(G::IoBoard,            0x58C1A946, 308, "io_board.check_state",                              D::Uint8,      D::Uint8,      None,              None),
    o(G::IoBoard,            0x5BD2DB45, 320, "io_board.io1_s0_imp_per_kwh",                       D::Int16,      D::Int16,      None,              Some("Number of impulses per kWh for S0 signal on I/O 1")),
    ObjectInfo { enum_map: Some(&[(0, "Not used"), (1, "Alarm"), (2, "Load")]), ..o(G::IoBoard,            0x5EE03C45, 328, "io_board.alarm_home_relay_mode",                    D::Enum,       D::Enum,       None,              Some("Multifunctional relay usage")) },
    o(G::IoBoard,            0x664A1326, 355, "io_board.rse_table[14]",                            D::Float,      D::Float,      None,              Some("K4..K1: 1110")),
    o(G::IoBoard,            0x6830F6E4, 364, "io_board.rse_table[9]",                             D::Float,      D::Float,      None,              Some("K4..K1: 1001")),
    o(G::IoBoard,            0x68BA92E1, 365, "io_board.io2_s0_imp_per_kwh",                       D::Int16,      D::Int16,      None,              Some("Number of impulses per kWh for S0 signal on I/O 2")),
    o(G::IoBoard,            0x6C2D00E4, 379, "io_board.rse_table[1]",                             D::Float,      D::Float,      None,              Some("K4..K1: 0001")),
    o(G::IoBoard,            0x7689BE6A, 419, "io_board.home_relay_sw_on_delay",                   D::Float,      D::Float,      Some("s"),         Some("Switching on delay")),
    ObjectInfo { enum_map: Some(&[(0, "I/O 1 & I/O 2 single"), (1, "I/O 1 bidirectional"), (2, "I/O 2 bidirectional")]), ..o(G::IoBoard,            0x792A7B79, 431, "io_board.s0_direction",                             D::Enum,       D::Enum,       None,              Some("S0 inputs single or bidirectional")) },
    o(G::IoBoard,            0x7C556C7A, 448, "io_board.io2_polarity",                             D::Bool,       D::Bool,       None,              Some("Inverted signal on input I/O 2")),
    o(G::IoBoard,            0x8320B84C, 470, "io_board.rse_data_delay",                           D::Float,      D::Float,      Some("s"),         Some("Delay for new K4..K1 data")),
    o(G::IoBoard,            0x872F380B, 479, "io_board.load_set",                                 D::Float,      D::Float,      Some("W"),         Some("Dummy household load")),
    o(G::IoBoard,            0x88C9707B, 487, "io_board.rse_table[15]",                            D::Float,      D::Float,      None,              Some("K4..K1: 1111")),
    o(G::IoBoard,            0x88F36D45, 490, "io_board.rse_data",                                 D::Uint8,      D::Uint8,      None,              Some("Actual K4..K1 data")),
    ObjectInfo { enum_map: Some(&[(0, "I/O not used"), (1, "Input S0 grid power consumption"), (2, "Input S0 grid power feed-in"), (3, "Input S0 household power"), (4, "Output S0 inverter power"), (5, "Input level switch"), (6, "Input emergency turn off"), (7, "Output S0 grid power feed-in"), (8, "Output S0 household power"), (9, "Output S0 solar power"), (10, "Input S0 external power")]), ..o(G::IoBoard,            0x90F123FA, 522, "io_board.io1_usage",                                D::Enum,       D::Enum,       None,              Some("Digital I/O 1 usage")) },
    o(G::IoBoard,            0x98ACC1B8, 557, "io_board.rse_table[4]",                             D::Float,      D::Float,      None,              Some("K4..K1: 0100")),
    o(G::IoBoard,            0x9B92023F, 566, "io_board.rse_table[7]",                             D::Float,      D::Float,      None,              Some("K4..K1: 0111")),
    o(G::IoBoard,            0xA3393749, 582, "io_board.check_start",                              D::Uint8,      D::Uint8,      None,              None),
    o(G::IoBoard,            0xAACE057A, 612, "io_board.io1_s0_min_duration",                      D::Float,      D::Float,      Some("s"),         Some("Minimum S0 signal duration on I/O 1")),
    o(G::IoBoard,            0xAC2E2A56, 614, "io_board.rse_table[5]",                             D::Float,      D::Float,      None,              Some("K4..K1: 0101")),
    o(G::IoBoard,            0xB851FA70, 655, "io_board.rse_table[11]",                            D::Float,      D::Float,      None,              Some("K4..K1: 1011")),
    o(G::IoBoard,            0xBCC6F92F, 666, "io_board.home_relay_threshold",                     D::Float,      D::Float,      Some("W"),         Some("Switching on threshold")),
    o(G::IoBoard,            0xBDFE5547, 674, "io_board.rse_table[3]",                             D::Float,      D::Float,      None,              Some("K4..K1: 0011")),
    o(G::IoBoard,            0xC7605E16, 709, "io_board.s0_sum",                                   D::Float,      D::Float,      None,              None),
    o(G::IoBoard,            0xCB1B3B10, 722, "io_board.io2_s0_min_duration",                      D::Float,      D::Float,      Some("s"),         Some("Minimum S0 signal duration on I/O 2")),
    o(G::IoBoard,            0xD45913EC, 747, "io_board.rse_table[13]",                            D::Float,      D::Float,      None,              Some("K4..K1: 1101")),
    o(G::IoBoard,            0xE52B89FA, 798, "io_board.home_relay_off_threshold",                 D::Float,      D::Float,      Some("W"),         Some("Switching off threshold")),
    o(G::IoBoard,            0xE96F1844, 809, "io_board.s0_external_power",                        D::Float,      D::Float,      None,              None),
    ObjectInfo { enum_map: Some(&[(0, "Pgrid"), (1, "Pgrid + Pbat charge")]), ..o(G::IoBoard,            0xF42D4DD0, 849, "io_board.alarm_home_value",                         D::Enum,       D::Enum,       None,              Some("Evaluated value")) },
    o(G::IoBoard,            0xFA7DB323, 869, "io_board.check_s0_result",                          D::Uint16,     D::Uint16,     None,              None),
    o(G::IoBoard,            0xBBE6B9DF, 664, "io_board.p_rse_rise_grad",                          D::Float,      D::Float,      Some("P/Pn/s"),    Some("Power rise gradient")),
    o(G::IoBoard,            0xDAC7DD86, 765, "io_board.p_rse_desc_grad",                          D::Float,      D::Float,      Some("P/Pn/s"),    Some("Power descent gradient")),
    o(G::FlashRtc,           0x0E0505B4,  54, "flash_rtc.time_stamp_set",                          D::Uint32,     D::Uint32,     None,              Some("Set date/time")),
    o(G::FlashRtc,           0x2266DCB8, 116, "flash_rtc.rtc_mcc_quartz_max_diff",                 D::Float,      D::Float,      Some("ppm"),       Some("Maximum allowed quartz frequency difference between RTC and Microcontroller")),
    o(G::FlashRtc,           0x3903A5E9, 190, "flash_rtc.flag_time_auto_switch",                   D::Bool,       D::Bool,       None,              Some("Automatically adjust clock for daylight saving time")),
    o(G::FlashRtc,           0x4E0C56F2, 267, "flash_rtc.rtc_mcc_quartz_ppm_difference",           D::Float,      D::Float,      Some("ppm"),       Some("Quartz frequency difference between RTC and Microcontroller")),
    o(G::FlashRtc,           0x7301A5A7, 411, "flash_rtc.time_stamp_factory",                      D::Uint32,     D::Uint32,     None,              Some("Production date")),
    o(G::FlashRtc,           0xD166D94D, 738, "flash_rtc.time_stamp",                              D::Uint32,     D::Uint32,     None,              Some("Actual date/time")),
    o(G::FlashRtc,           0xDD90A328, 774, "flash_rtc.time_stamp_update",                       D::Uint32,     D::Uint32,     None,              Some("Last update date")),
    o(G::PowerMng,           0x1156DFD0,  67, "power_mng.battery_power",                           D::Float,      D::Float,      Some("W"),         Some("Battery discharge power")),
    o(G::PowerMng,           0x1D2994EA,  98, "power_mng.soc_charge_power",                        D::Float,      D::Float,      Some("W"),         Some("Maintenance charge power")),
    o(G::PowerMng,           0x315D1490, 165, "power_mng.bat_empty_full",                          D::Uint8,      D::Uint8,      None,              Some("Bit 0 - battery was empty, bit 1 - battery was full")),
    o(G::PowerMng,           0x36A9E9A6, 184, "power_mng.use_grid_power_enable",                   D::Bool,       D::Bool,       None,              Some("Utilize external Inverter energy")),
    o(G::PowerMng,           0x59358EB2, 310, "power_mng.maximum_charge_voltage",                  D::Float,      D::Float,      Some("V"),         Some("Max. battery charge voltage")),
    o(G::PowerMng,           0x5B10CE81, 317, "power_mng.is_heiphoss",                             D::Uint8,      D::Uint8,      None,              Some("HeiPhoss mode")),
    ObjectInfo { enum_map: Some(&[(0, "Lead-acid Powerfit"), (1, "Li-Ion Akesol"), (2, "Laukner"), (3, "Li-Ion RCT Power"), (4, "Li-Ion Zach"), (5, "No battery"), (6, "Power loop 200 V"), (7, "BYD D-BOX H")]), ..o(G::PowerMng,           0x682CDDA1, 363, "power_mng.battery_type",                            D::Enum,       D::Enum,       None,              Some("Battery type")) },
    o(G::PowerMng,           0x8EBF9574, 506, "power_mng.soc_min_island",                          D::Float,      D::Float,      None,              Some("Min SOC target (island)")),
    o(G::PowerMng,           0x93C0C2E2, 538, "power_mng.bat_calib_reqularity",                    D::Uint32,     D::Uint32,     Some("days"),      Some("Battery calibration interval")),
    o(G::PowerMng,           0x972B3029, 551, "power_mng.stop_discharge_voltage_buffer",           D::Float,      D::Float,      Some("V"),         Some("Stop discharge voltage buffer")),
    o(G::PowerMng,           0x97997C93, 552, "power_mng.soc_max",                                 D::Float,      D::Float,      None,              Some("Max SOC target")),
    o(G::PowerMng,           0x97E203F9, 554, "power_mng.is_grid",                                 D::Bool,       D::Bool,       None,              None),
    o(G::PowerMng,           0x97E3A6F2, 555, "power_mng.u_acc_lp",                                D::Float,      D::Float,      Some("V"),         Some("Battery voltage (inverter)")),
    o(G::PowerMng,           0x99EE89CB, 561, "power_mng.power_lim_src_index",                     D::Enum,       D::Enum,       None,              Some("Power limit source")),
    o(G::PowerMng,           0x9F52F968, 573, "power_mng.feed_asymmetrical",                       D::Bool,       D::Bool,       None,              Some("Allow asymmetrical feed")),
    o(G::PowerMng,           0xA7FA5C5D, 600, "power_mng.u_acc_mix_lp",                            D::Float,      D::Float,      Some("V"),         Some("Battery voltage")),
    o(G::PowerMng,           0xA95EE214, 607, "power_mng.model.bat_power_change",                  D::Float,      D::Float,      None,              None),
    o(G::PowerMng,           0xAEF76FA1, 617, "power_mng.minimum_discharge_voltage",               D::Float,      D::Float,      Some("V"),         Some("Min. battery discharge voltage")),
    o(G::PowerMng,           0xB6623608, 644, "power_mng.bat_next_calib_date",                     D::Uint32,     D::Uint32,     None,              Some("Next battery calibration")),
    o(G::PowerMng,           0xBD008E29, 667, "power_mng.battery_power_extern",                    D::Float,      D::Float,      Some("W"),         Some("Battery target power (positive = discharge)")),
    o(G::PowerMng,           0xBD3A23C3, 668, "power_mng.soc_charge",                              D::Float,      D::Float,      None,              Some("SOC min maintenance charge")),
    ObjectInfo { enum_map: Some(&[(0, "take from serial number"), (1, "power inverter"), (2, "power storage")]), ..o(G::PowerMng,           0xC7459513, 708, "power_mng.force_inv_class",                         D::Enum,       D::Enum,       None,              Some("Change inverter class")) },
    o(G::PowerMng,           0xCE266F0F, 731, "power_mng.soc_min",                                 D::Float,      D::Float,      None,              Some("Min SOC target")),
    o(G::PowerMng,           0xD197CBE0, 739, "power_mng.stop_charge_current",                     D::Float,      D::Float,      Some("A"),         Some("Stop charge current")),
    o(G::PowerMng,           0xD1DFC969, 740, "power_mng.soc_target_set",                          D::Float,      D::Float,      None,              Some("Force SOC target")),
    o(G::PowerMng,           0xDC667958, 770, "power_mng.state",                                   D::Uint8,      D::Uint8,      None,              Some("Battery state machine")),
    o(G::PowerMng,           0xE9BBF6E4, 810, "power_mng.amp_hours_measured",                      D::Float,      D::Float,      Some("Ah"),        Some("Measured battery capacity")),
    o(G::PowerMng,           0xF1342795, 834, "power_mng.stop_discharge_current",                  D::Float,      D::Float,      Some("A"),         Some("Stop discharge current")),
    ObjectInfo { enum_map: Some(&[(0, "SOC target = SOC"), (1, "Constant"), (2, "External"), (3, "Middle battery voltage"), (4, "Internal"), (5, "Schedule")]), ..o(G::PowerMng,           0xF168B748, 835, "power_mng.soc_strategy",                            D::Enum,       D::Enum,       None,              Some("SOC target selection")) },
    o(G::PowerMng,           0xF393B7B0, 846, "power_mng.calib_charge_power",                      D::Float,      D::Float,      Some("W"),         Some("Calibration charge power")),
    o(G::PowerMng,           0xFBD94C1F, 875, "power_mng.amp_hours",                               D::Float,      D::Float,      Some("Ah"),        Some("Battery energy")),
    o(G::PowerMng,           0xC9900716, 717, "power_mng.is_island_only",                          D::Bool,       D::Bool,       None,              Some("Island without power switch support")),
    o(G::PowerMng,           0xE24B00BD, 790, "power_mng.schedule[1]",                             D::String,     D::String,     None,              None),
    o(G::PowerMng,           0xF52C0B50, 853, "power_mng.schedule[7]",                             D::String,     D::String,     None,              None),
    o(G::PowerMng,           0x011F41DB,   1, "power_mng.schedule[0]",                             D::String,     D::String,     None,              None),
    o(G::PowerMng,           0x15AB1A61,  75, "power_mng.schedule[2]",                             D::String,     D::String,     None,              None),
    o(G::PowerMng,           0x40B07CA4, 221, "power_mng.schedule[6]",                             D::String,     D::String,     None,              None),
    o(G::PowerMng,           0x47A1DACA, 244, "power_mng.schedule[8]",                             D::String,     D::String,     None,              None),
    o(G::PowerMng,           0x592B13DF, 309, "power_mng.schedule[4]",                             D::String,     D::String,     None,              None),
    o(G::PowerMng,           0x6599E3D3, 350, "power_mng.schedule[3]",                             D::String,     D::String,     None,              None),
    o(G::PowerMng,           0x663F1452, 354, "power_mng.n_batteries",                             D::Uint8,      D::Uint8,      None,              None),
    o(G::PowerMng,           0x672552DC, 358, "power_mng.bat_calib_days_in_advance",               D::Uint8,      D::Uint8,      None,              Some("Battery calibration days in advance")),
    o(G::PowerMng,           0x7AF0AD03, 442, "power_mng.schedule[9]",                             D::String,     D::String,     None,              None),
    o(G::PowerMng,           0x9A33F9B7, 562, "power_mng.schedule[5]",                             D::String,     D::String,     None,              None),
    o(G::BufVControl,        0x4BC0F974, 255, "buf_v_control.power_reduction_max_solar",           D::Float,      D::Float,      Some("Wp"),        Some("Solar plant peak power")),
    o(G::BufVControl,        0xF473BC5E, 851, "buf_v_control.power_reduction_max_solar_grid",      D::Float,      D::Float,      Some("W"),         Some("Max. allowed grid feed-in power")),
    o(G::BufVControl,        0xFE1AA500, 890, "buf_v_control.power_reduction",                     D::Float,      D::Float,      None,              Some("External power reduction based on solar plant peak power [0..1]")),
    o(G::Db,                 0x16AF2A92,  79, "db.power_board.Current_Mean",                       D::Float,      D::Float,      None,              None),
    o(G::Db,                 0x17E3AF97,  84, "db.power_board.adc_p9V_meas",                       D::Float,      D::Float,      None,              None),
    o(G::Db,                 0x1F9CBBF2, 105, "db.power_board.Calibr_Value_Mean",                  D::Float,      D::Float,      None,              None),
    o(G::Db,                 0x2ED89924, 157, "db.power_board.afi_t300",                           D::Float,      D::Float,      Some("s"),         Some("AFI 300 mA switching off time")),
    o(G::Db,                 0x383A3614, 188, "db.power_board.afi_i60",                            D::Float,      D::Float,      Some("A"),         Some("AFI 60 mA threshold")),
    o(G::Db,                 0x3EFEB931, 217, "db.power_board.relays_state",                       D::Uint16,     D::Uint16,     None,              None),
    o(G::Db,                 0x43FF47C3, 232, "db.power_board.afi_t60",                            D::Float,      D::Float,      Some("s"),         Some("AFI 60 mA switching off time")),
    o(G::Db,                 0x4F735D10, 276, "db.temp2",                                          D::Float,      D::Float,      Some("°C"),        Some("Heat sink (battery actuator) temperature")),
    o(G::Db,                 0x5CD75669, 322, "db.power_board.afi_t150",                           D::Float,      D::Float,      Some("s"),         Some("AFI 150 mA switching off time")),
    o(G::Db,                 0x6279F2A3, 338, "db.power_board.version_boot",                       D::Uint32,     D::Uint32,     None,              Some("PIC bootloader software version")),
    o(G::Db,                 0x6BA10831, 373, "db.power_board.afi_i30",                            D::Float,      D::Float,      Some("A"),         Some("AFI 30 mA threshold")),
    o(G::Db,                 0x6FB2E2BF, 392, "db.power_board.afi_i150",                           D::Float,      D::Float,      Some("A"),         Some("AFI 150 mA threshold")),
    o(G::Db,                 0x742966A6, 414, "db.power_board.afi_i300",                           D::Float,      D::Float,      Some("A"),         Some("AFI 300 mA threshold")),
    o(G::Db,                 0x7DA7D8B6, 452, "db.power_board.version_main",                       D::Uint32,     D::Uint32,     None,              Some("PIC software version")),
    o(G::Db,                 0x80835476, 461, "db.power_board.adc_p5V_W_meas",                     D::Float,      D::Float,      None,              None),
    o(G::Db,                 0x9981F1AC, 560, "db.power_board.adc_m9V_meas",                       D::Float,      D::Float,      None,              None),
    o(G::Db,                 0xB0307591, 620, "db.power_board.status",                             D::Uint16,     D::Uint16,     None,              Some("Power board status")),
    o(G::Db,                 0xB69171C4, 645, "db.power_board.Current_AC_RMS",                     D::Float,      D::Float,      None,              None),
    o(G::Db,                 0xC0B7C4D2, 682, "db.power_board.afi_t30",                            D::Float,      D::Float,      Some("s"),         Some("AFI 30 mA switching off time")),
    o(G::Db,                 0xC24E85D0, 688, "db.core_temp",                                      D::Float,      D::Float,      Some("°C"),        Some("Core temperature")),
    o(G::Db,                 0xDFB53AF3, 782, "db.power_board.Current_Mean_Mean_AC",               D::Float,      D::Float,      None,              None),
    o(G::Db,                 0xF0527539, 829, "db.power_board.adc_p3V3_meas",                      D::Float,      D::Float,      None,              None),
    o(G::Db,                 0xF79D41D9, 862, "db.temp1",                                          D::Float,      D::Float,      Some("°C"),        Some("Heat sink temperature")),
    o(G::SwitchOnCond,       0x1FEB2F67, 108, "switch_on_cond.u_min",                              D::Float,      D::Float,      None,              Some("Min. voltage")),
    o(G::SwitchOnCond,       0x234DD4DF, 121, "switch_on_cond.f_min",                              D::Float,      D::Float,      None,              Some("Min. frequency")),
    o(G::SwitchOnCond,       0x3390CC2F, 171, "switch_on_cond.test_time_fault",                    D::Float,      D::Float,      Some("s"),         Some("Switching on time after any grid fault")),
    o(G::SwitchOnCond,       0x4DB1B91E, 264, "switch_on_cond.f_max",                              D::Float,      D::Float,      None,              Some("Max. frequency")),
    o(G::SwitchOnCond,       0x934E64E9, 535, "switch_on_cond.u_max",                              D::Float,      D::Float,      None,              Some("Max. voltage")),
    o(G::SwitchOnCond,       0xECABB6CF, 819, "switch_on_cond.test_time",                          D::Float,      D::Float,      None,              Some("Test time")),
    o(G::SwitchOnCond,       0x362346D4, 181, "switch_on_cond.max_rnd_test_time_fault",            D::Float,      D::Float,      Some("s"),         Some("Max additional random switching on time after any grid fault")),
    o(G::PRec,               0x0AA372CE,  37, "p_rec_req[1]",                                      D::Float,      D::Float,      Some("W"),         Some("Required battery to grid power")),
    o(G::PRec,               0x1ABA3EE8,  91, "p_rec_req[0]",                                      D::Float,      D::Float,      Some("W"),         Some("Required compensation power")),
    o(G::PRec,               0x365D12DA, 183, "p_rec_req[2]",                                      D::Float,      D::Float,      Some("W"),         Some("Required Pac")),
    o(G::PRec,               0x54829753, 294, "p_rec_lim[1]",                                      D::Float,      D::Float,      Some("W"),         Some("Max. battery to grid power")),
    o(G::PRec,               0x5D0CDCF0, 323, "p_rec_available[2]",                                D::Float,      D::Float,      Some("W"),         Some("Available Pac")),
    o(G::PRec,               0x85886E2E, 475, "p_rec_lim[0]",                                      D::Float,      D::Float,      Some("W"),         Some("Max. compensation power")),
    o(G::PRec,               0x8F0FF9F3, 511, "p_rec_available[1]",                                D::Float,      D::Float,      Some("W"),         Some("Available battery to grid power")),
    o(G::PRec,               0x9A67600D, 564, "p_rec_lim[2]",                                      D::Float,      D::Float,      Some("W"),         Some("Pac max.")),
    o(G::PRec,               0xB45FE275, 638, "p_rec_available[0]",                                D::Float,      D::Float,      Some("W"),         Some("Available compensation power")),
    ObjectInfo { enum_map: Some(&[(0, "Modbus slave"), (1, "Modbus master")]), ..o(G::Modbus,             0x31ED1B75, 166, "modbus.mode",                                       D::Enum,       D::Enum,       None,              Some("RS485 working mode")) },
    o(G::Modbus,             0x6C243F71, 378, "modbus.address",                                    D::Uint8,      D::Uint8,      None,              Some("RS485 address")),
    o(G::BatMngStruct,       0x3B0C6A53, 203, "bat_mng_struct.profile_pdc_max",                    D::String,     D::String,     None,              None),
    o(G::BatMngStruct,       0x9DC927AA, 570, "bat_mng_struct.profile_load",                       D::Unknown,    D::Unknown,    None,              None),
    o(G::BatMngStruct,       0xB2FB9A90, 633, "bat_mng_struct.k_trust",                            D::Float,      D::Float,      None,              Some("How fast the actual prediction can be trusted [0..10]")),
    o(G::BatMngStruct,       0xDE68F62D, 777, "bat_mng_struct.profile_pext",                       D::String,     D::String,     None,              None),
    o(G::BatMngStruct,       0xDF6EA121, 781, "bat_mng_struct.profile_pdc",                        D::String,     D::String,     None,              None),
    o(G::BatMngStruct,       0xF0A03A20, 831, "bat_mng_struct.k",                                  D::Float,      D::Float,      None,              Some("Forecast correction")),
    o(G::BatMngStruct,       0xF644DCA7, 856, "bat_mng_struct.k_reserve",                          D::Float,      D::Float,      None,              Some("Main reservation coefficient [0..2]")),
    o(G::BatMngStruct,       0xFB57BA65, 872, "bat_mng_struct.count",                              D::String,     D::String,     None,              None),
    o(G::BatMngStruct,       0x3E25C391, 214, "bat_mng_struct.bat_calib_soc_thresh",               D::Float,      D::Float,      None,              Some("Part of max historical SOC for battery calibration in advance")),
    o(G::BatMngStruct,       0xFC5AA529, 881, "bat_mng_struct.bat_calib_soc_threshold",            D::Float,      D::Float,      None,              Some("SOC threshold for battery calibration in advance")),
    o(G::IsoStruct,          0x474F80D5, 242, "iso_struct.Rn",                                     D::Float,      D::Float,      Some("Ohm"),       Some("Insulation resistance on negative DC input")),
    o(G::IsoStruct,          0x777DC0EB, 423, "iso_struct.r_min",                                  D::Float,      D::Float,      Some("Ohm"),       Some("Minimum allowed insulation resistance")),
    o(G::IsoStruct,          0x8E41FC47, 505, "iso_struct.Rp",                                     D::Float,      D::Float,      Some("Ohm"),       Some("Insulation resistance on positive DC input")),
    o(G::IsoStruct,          0xC717D1FB, 707, "iso_struct.Riso",                                   D::Float,      D::Float,      Some("Ohm"),       Some("Total insulation resistance")),
    o(G::GridLt,             0x3A3050E6, 195, "grid_lt.threshold",                                 D::Float,      D::Float,      Some("V"),         Some("Max. voltage")),
    o(G::GridLt,             0x9061EA7B, 516, "grid_lt.granularity",                               D::Float,      D::Float,      None,              Some("Resolution")),
    o(G::GridLt,             0xD9E721A5, 761, "grid_lt.timeframe",                                 D::Float,      D::Float,      None,              Some("Timeframe")),
    o(G::CanBus,             0x4539A6D4, 236, "can_bus.bms_update_response[0]",                    D::Uint32,     D::Uint32,     None,              None),
    o(G::CanBus,             0x69AA598A, 370, "can_bus.requested_id",                              D::Int32,      D::Int32,      None,              None),
    o(G::CanBus,             0x7A67E33B, 438, "can_bus.bms_update_response[1]",                    D::Uint32,     D::Uint32,     None,              None),
    o(G::CanBus,             0x96629BB9, 548, "can_bus.bms_update_state",                          D::Uint8,      D::Uint8,      None,              None),
    o(G::CanBus,             0xBD4147B0, 669, "can_bus.set_cell_resist",                           D::Uint32,     D::Uint32,     None,              None),
    o(G::CanBus,             0xD143A391, 737, "can_bus.set_cell_v_t",                              D::Uint32,     D::Uint32,     None,              None),
    o(G::DisplayStruct,      0x67BF3003, 361, "display_struct.display_dir",                        D::Bool,       D::Bool,       None,              Some("Rotate display")),
    o(G::DisplayStruct,      0x8EC4116E, 508, "display_struct.blink",                              D::Bool,       D::Bool,       None,              Some("Display blinking enable")),
    o(G::DisplayStruct,      0xC1D051EC, 687, "display_struct.variate_contrast",                   D::Uint8,      D::Uint8,      None,              Some("Display pixel test mode")),
    o(G::DisplayStruct,      0xF247BB16, 840, "display_struct.contrast",                           D::Uint8,      D::Uint8,      None,              Some("Display contrast")),
    o(G::FlashParam,         0x43F16F7E, 231, "flash_state",                                       D::Uint16,     D::Uint16,     None,              Some("Flash state")),
    o(G::FlashParam,         0x65A44A98, 351, "flash_mem",                                         D::String,     D::String,     None,              None),
    o(G::FlashParam,         0x46892579, 240, "flash_param.write_cycles",                          D::Uint32,     D::Uint32,     None,              Some("Write cycles of flash parameters")),
    o(G::FlashParam,         0x96E32D11, 550, "flash_param.erase_cycles",                          D::Uint32,     D::Uint32,     None,              Some("Erase cycles of flash parameter")),
    o(G::FlashParam,         0xB238942F, 631, "last_successfull_flash_op",                         D::Int16,      D::Int16,      None,              None),
    o(G::FlashParam,         0xE63A3529, 802, "flash_result",                                      D::Uint16,     D::Uint16,     None,              Some("Flash result")),
    o(G::Fault,              0x234B4736, 120, "fault[1].flt",                                      D::Uint32,     D::Uint32,     None,              Some("Error bit field 2")),
    o(G::Fault,              0x37F9D5CA, 186, "fault[0].flt",                                      D::Uint32,     D::Uint32,     None,              Some("Error bit field 1")),
    o(G::Fault,              0x3B7FCD47, 205, "fault[2].flt",                                      D::Uint32,     D::Uint32,     None,              Some("Error bit field 3")),
    o(G::Fault,              0x7F813D73, 458, "fault[3].flt",                                      D::Uint32,     D::Uint32,     None,              Some("Error bit field 4")),
    o(G::PrimSm,             0x3623D82A, 182, "prim_sm.island_flag",                               D::Uint16,     D::Uint16,     None,              Some("Grid-separated")),
    o(G::PrimSm,             0x3AFEF139, 202, "prim_sm.is_thin_layer",                             D::Bool,       D::Bool,       None,              Some("Thin-film solar module")),
    ObjectInfo { enum_map: Some(&[(0, "Standby"), (1, "Initialization"), (2, "Standby"), (3, "Efficiency"), (4, "Insulation check"), (5, "Island check"), (6, "Power check"), (7, "Symmetry"), (8, "Relais test"), (9, "Grid passive"), (10, "Prepare Bat Passive"), (11, "Battery Passive"), (12, "H/W check"), (13, "Feed in")]), ..o(G::PrimSm,             0x5F33284E, 330, "prim_sm.state",                                     D::Enum,       D::Enum,       None,              Some("Inverter status")) },
    o(G::PrimSm,             0xC40D5688, 694, "prim_sm.state_source",                              D::Uint32,     D::Uint32,     None,              None),
    o(G::PrimSm,             0xCF005C54, 733, "prim_sm.phase_3_mode",                              D::Bool,       D::Bool,       None,              None),
    o(G::PrimSm,             0xFB5DE9C5, 873, "prim_sm.minigrid_flag",                             D::Bool,       D::Bool,       None,              Some("Minigrid support")),
    o(G::PrimSm,             0x20FD4419, 111, "prim_sm.island_next_repeat_timeout",                D::Float,      D::Float,      Some("s"),         Some("Next island trial timeout")),
    o(G::PrimSm,             0x5151D84C, 284, "prim_sm.island_reset_retrials_counter_time",        D::Float,      D::Float,      Some("min"),       Some("Reset island trials counter in (by 0 not used)")),
    o(G::PrimSm,             0x73E3ED49, 413, "prim_sm.island_max_trials",                         D::Uint16,     D::Uint16,     None,              Some("Max island trials")),
    o(G::PrimSm,             0x751E80CA, 416, "prim_sm.island_reset_retrials_operation_time",      D::Float,      D::Float,      None,              None),
    o(G::PrimSm,             0xC4D87E96, 697, "prim_sm.island_retrials",                           D::Uint16,     D::Uint16,     None,              Some("Island trials counter")),
    o(G::PrimSm,             0xE31F8B17, 793, "prim_sm.Uzk_pump_grad[0]",                          D::Float,      D::Float,      Some("W"),         Some("start power")),
    o(G::CsMap,              0x6D5318C8, 382, "cs_map[1]",                                         D::Uint8,      D::Uint8,      None,              Some("Associate current sensor 1 with phase L")),
    o(G::CsMap,              0xD451EF88, 746, "cs_map[2]",                                         D::Uint8,      D::Uint8,      None,              Some("Associate current sensor 2 with phase L")),
    o(G::CsMap,              0xE0E16E63, 785, "cs_map[0]",                                         D::Uint8,      D::Uint8,      None,              Some("Associate current sensor 0 with phase L")),
    o(G::LineMon,            0x6BBDC7C8, 374, "line_mon.u_max",                                    D::Float,      D::Float,      Some("V"),         Some("Max line voltage")),
    o(G::LineMon,            0x8D8E19F7, 502, "line_mon.u_min",                                    D::Float,      D::Float,      Some("V"),         Some("Min line voltage")),
    o(G::LineMon,            0xA1266D6B, 575, "line_mon.time_lim",                                 D::Float,      D::Float,      Some("s"),         Some("Switch off time line voltage")),
    o(G::Others,             0x0CC4BDAA,  46, "detect_phase_shift_enable",                         D::Bool,       D::Bool,       None,              Some("Enable active island detection")),
    o(G::Others,             0x108FC93D,  65, "max_phase_shift",                                   D::Float,      D::Float,      Some("degrees"),   Some("Max. phase shift from 120 position")),
    o(G::Others,             0x19608C98,  89, "partition[3].last_id",                              D::Int32,      D::Int32,      None,              None),
    o(G::Others,             0x1C4A665F,  96, "grid_pll[0].f",                                     D::Float,      D::Float,      Some("Hz"),        Some("Grid frequency")),
    o(G::Others,             0x2703A771, 138, "cs_struct.is_tuned",                                D::Bool,       D::Bool,       None,              Some("Current sensors are tuned")),
    o(G::Others,             0x27EC8487, 145, "performance_free[0]",                               D::Uint32,     D::Uint32,     None,              None),
    o(G::Others,             0x2848A1EE, 146, "grid_offset",                                       D::Float,      D::Float,      None,              None),
    o(G::Others,             0x3A0EA5BE, 194, "power_spring_up",                                   D::Float,      D::Float,      None,              None),
    o(G::Others,             0x3E728842, 216, "power_spring_bat",                                  D::Float,      D::Float,      None,              None),
    o(G::Others,             0x494FE156, 248, "power_spring_offset",                               D::Float,      D::Float,      None,              None),
    o(G::Others,             0x4E3CB7F8, 269, "phase_3_mode",                                      D::Bool,       D::Bool,       None,              Some("3-phase feed in")),
    o(G::Others,             0x68BC034D, 366, "parameter_file",                                    D::String,     D::String,     None,              Some("Norm")),
    o(G::Others,             0x6C44F721, 380, "i_dc_max",                                          D::Float,      D::Float,      Some("A"),         Some("Max. DC-component of Iac")),
    o(G::Others,             0x7924ABD9, 429, "inverter_sn",                                       D::String,     D::String,     None,              Some("Serial number")),
    o(G::Others,             0x7940547B, 432, "inv_struct.force_dh",                               D::Bool,       D::Bool,       None,              None),
    o(G::Others,             0x7946D888, 433, "i_dc_slow_time",                                    D::Float,      D::Float,      Some("s"),         Some("Time for slow DC-component of Iac")),
    o(G::Others,             0x87E4387A, 480, "current_sensor_max",                                D::Float,      D::Float,      Some("A"),         Some("Power Sensor current range")),
    ObjectInfo { enum_map: Some(&[(0, "Off"), (1, "OnlineOsci protocol"), (2, "COM protocol"), (3, "Start bootloader"), (4, "Reset DSP"), (5, "Flash parameter"), (6, "Erase parameters"), (7, "Set SSID"), (8, "Restart WiFi"), (9, "Write WiFi parameters"), (10, "Read WiFi parameters"), (11, "Datalog bulk erase"), (12, "Tune current sensors"), (13, "Start battery booster test"), (14, "Stop battery booster test"), (15, "Start stack commission"), (16, "Stop stack commission"), (17, "Reset battery statistics")]), ..o(G::Others,             0x8FC89B10, 512, "com_service",                                       D::Enum,       D::Enum,       None,              Some("COM service")) },
    o(G::Others,             0x929394B7, 532, "svnversion_last_known",                             D::String,     D::String,     None,              None),
    o(G::Others,             0xA12E9B43, 577, "phase_marker",                                      D::Int16,      D::Int16,      None,              Some("Next phase after phase 1")),
    o(G::Others,             0xA76AE9CA, 596, "relays.bits_real",                                  D::Uint16,     D::Uint16,     None,              None),
    o(G::Others,             0xA9CF517D, 608, "power_spring_down",                                 D::Float,      D::Float,      None,              None),
    o(G::Others,             0xB1D1BE71, 625, "osci_struct.cmd_response_time",                     D::Float,      D::Float,      None,              None),
    o(G::Others,             0xBF9B6042, 675, "svnversion_factory",                                D::String,     D::String,     None,              Some("Control software factory version")),
    o(G::Others,             0xC36675D4, 690, "i_ac_max_set",                                      D::Float,      D::Float,      Some("A"),         Some("Maximum AC throttle current")),
    o(G::Others,             0xC3A3F070, 691, "i_ac_extern_connected",                             D::Bool,       D::Bool,       None,              Some("Current sensors detected")),
    o(G::Others,             0xDABD323E, 764, "osci_struct.error",                                 D::Int16,      D::Int16,      None,              Some("Communication error")),
    o(G::Others,             0xDDD1C2D0, 775, "svnversion",                                        D::String,     D::String,     None,              Some("Control software version")),
    o(G::Others,             0xE14B8679, 786, "i_dc_slow_max",                                     D::Float,      D::Float,      Some("A"),         Some("Max. slow DC-component of Iac")),
    o(G::Others,             0xE6AC95E5, 605, "phase_shift_threshold",                             D::Uint32,     D::Uint32,     None,              Some("Detection threshold")),
    ObjectInfo { sim_data: Some(SimData::Str("RCT")), ..o(G::Others,             0xEBC62737, 817, "android_description",                               D::String,     D::String,     None,              Some("Device name")) },
    o(G::Others,             0xF2BE0C9C, 845, "p_buf_available",                                   D::Float,      D::Float,      Some("W"),         Some("Available buffer power")),
    o(G::Others,             0x3C24F3E8, 207, "inv_struct.cosinus_phi",                            D::Float,      D::Float,      Some("cos(Phi)"),  None),
    o(G::Others,             0x4992E65A, 250, "update_is_allowed_id",                              D::Uint8,      D::Uint8,      None,              None),
    o(G::Others,             0x040385DB,  11, "common_control_bits",                               D::Uint32,     D::Uint32,     None,              Some("Bit coded function")),
    o(G::Others,             0x0D658831,  48, "i_bottom_max",                                      D::Float,      D::Float,      None,              None),
    o(G::Others,             0x9C8FE559, 568, "pas.period",                                        D::Uint32,     D::Uint32,     None,              None),
    o(G::Frt,                0x0528D1D8,  14, "frt.u_min[2]",                                      D::Float,      D::Float,      Some("V"),         Some("Point 3 voltage")),
    o(G::Frt,                0x22CC80C6, 119, "frt.u_min_end",                                     D::Float,      D::Float,      Some("V"),         Some("FRT end undervoltage threshold")),
    o(G::Frt,                0x236D2178, 123, "frt.t_min[1]",                                      D::Float,      D::Float,      Some("s"),         Some("Point 2 time")),
    o(G::Frt,                0x32DCA605, 168, "frt.u_max[0]",                                      D::Float,      D::Float,      Some("V"),         Some("Point 1 voltage")),
    o(G::Frt,                0x41744E11, 223, "frt.u_min[0]",                                      D::Float,      D::Float,      Some("V"),         Some("Point 1 voltage")),
    o(G::Frt,                0x71277E71, 401, "frt.u_min_begin",                                   D::Float,      D::Float,      Some("V"),         Some("FRT begin undervoltage threshold")),
    o(G::Frt,                0x83BBEF0B, 473, "frt.u_max_begin",                                   D::Float,      D::Float,      Some("V"),         Some("FRT begin overvoltage threshold")),
    o(G::Frt,                0x88DFDE8B, 489, "frt.u_max_end",                                     D::Float,      D::Float,      Some("V"),         Some("FRT end overvoltage threshold")),
    o(G::Frt,                0x89B21223, 491, "frt.t_max[0]",                                      D::Float,      D::Float,      Some("s"),         Some("Point 1 time")),
    o(G::Frt,                0x9350FE02, 536, "frt.u_max[2]",                                      D::Float,      D::Float,      Some("V"),         Some("Point 3 voltage")),
    o(G::Frt,                0x93971C36, 537, "frt.t_max[2]",                                      D::Float,      D::Float,      Some("s"),         Some("Point 3 time")),
    o(G::Frt,                0x9C75BD89, 567, "frt.t_min[0]",                                      D::Float,      D::Float,      Some("s"),         Some("Point 1 time")),
    o(G::Frt,                0xC4FA4E33, 698, "frt.u_min[1]",                                      D::Float,      D::Float,      Some("V"),         Some("Point 2 voltage")),
    o(G::Frt,                0xCB78F611, 723, "frt.t_max[1]",                                      D::Float,      D::Float,      Some("s"),         Some("Point 2 time")),
    o(G::Frt,                0xD536E7E9, 750, "frt.u_max[1]",                                      D::Float,      D::Float,      Some("V"),         Some("Point 2 voltage")),
    o(G::Frt,                0xE1F49459, 789, "frt.t_min[2]",                                      D::Float,      D::Float,      Some("s"),         Some("Point 3 time")),
    o(G::Frt,                0xFD72CC0D, 887, "frt.enabled",                                       D::Bool,       D::Bool,       None,              Some("Enable FRT")),
    o(G::Partition,          0x16ED8F8F,  81, "partition[1].last_id",                              D::Int32,      D::Int32,      None,              None),
    o(G::Partition,          0x7AE87E39, 441, "partition[2].last_id",                              D::Int32,      D::Int32,      None,              None),
    o(G::Partition,          0x7C0827C5, 447, "partition[5].last_id",                              D::Int32,      D::Int32,      None,              None),
    o(G::Partition,          0xC3DD7850, 693, "partition[6].last_id",                              D::Int32,      D::Int32,      None,              None),
    o(G::Partition,          0xD5567470, 751, "partition[4].last_id",                              D::Int32,      D::Int32,      None,              None),
    o(G::Partition,          0xF03133E2, 827, "partition[0].last_id",                              D::Int32,      D::Int32,      None,              None),
    o(G::DcConv,             0x4AE96C12, 253, "dc_conv.dc_conv_struct[1].mpp.mpp_step",            D::Float,      D::Float,      Some("V"),         Some("MPP search step on input B")),
    o(G::DcConv,             0xBA8B8515, 661, "dc_conv.dc_conv_struct[0].mpp.mpp_step",            D::Float,      D::Float,      Some("V"),         Some("MPP search step on input A")),
    o(G::DisplayStruct,      0x29BDA75F, 147, "display_struct.brightness",                         D::Uint8,      D::Uint8,      None,              Some("Display brightness, [0..255]")),
    o(G::BatteryPlaceholder, 0x02247588,   5, "battery_placeholder[0].cells_stat[2].u_min.value",  D::Float,      D::Float,      None,              None),
    o(G::BatteryPlaceholder, 0x035E64EA,   7, "battery_placeholder[0].module_sn[5]",               D::String,     D::String,     None,              Some("Module 5 Serial Number")),
    o(G::BatteryPlaceholder, 0x048C9D69,  12, "battery_placeholder[0].cells_stat[1].u_min.value",  D::Float,      D::Float,      None,              None),
    o(G::BatteryPlaceholder, 0x071B5514,  23, "battery_placeholder[0].cells_stat[3].t_max.index",  D::Uint8,      D::Uint8,      None,              None),
    o(G::BatteryPlaceholder, 0x073C7E5D,  25, "battery_placeholder[0].max_cell_temperature",       D::Float,      D::Float,      None,              None),
    o(G::BatteryPlaceholder, 0x074B1EF5,  26, "battery_placeholder[0].cells_stat[3].u_max.index",  D::Uint8,      D::Uint8,      None,              None),
    o(G::BatteryPlaceholder, 0x08E81725,  32, "battery_placeholder[0].cells_stat[0].t_max.value",  D::Float,      D::Float,      None,              None),
    o(G::BatteryPlaceholder, 0x0B94A673,  39, "battery_placeholder[0].cells_stat[6].t_min.time",   D::Uint32,     D::Uint32,     None,              None),
    o(G::BatteryPlaceholder, 0x0C2A7286,  41, "battery_placeholder[0].cells_resist[0]",            D::String,     D::String,     None,              None),
    o(G::BatteryPlaceholder, 0x0DBD5E77,  50, "battery_placeholder[0].cells_stat[6].u_min.index",  D::Uint8,      D::Uint8,      None,              None),
    o(G::BatteryPlaceholder, 0x0E4AA301,  55, "battery_placeholder[0].cells_stat[6].u_max.index",  D::Uint8,      D::Uint8,      None,              None),
    o(G::BatteryPlaceholder, 0x0EC64BA7,  57, "battery_placeholder[0].stack_software_version[3]",  D::Uint32,     D::Uint32,     None,              Some("Software version stack 3")),
    o(G::BatteryPlaceholder, 0x1025B491,  62, "battery_placeholder[0].maximum_discharge_current",  D::Float,      D::Float,      Some("A"),         Some("Max. discharge current")),
    o(G::BatteryPlaceholder, 0x1639B2D8,  77, "battery_placeholder[0].cells_stat[4].u_max.index",  D::Uint8,      D::Uint8,      None,              None),
    o(G::BatteryPlaceholder, 0x1781CD31,  83, "battery_placeholder[0].soh",                        D::Float,      D::Float,      None,              Some("SOH (State of Health)")),
    o(G::BatteryPlaceholder, 0x18469762,  85, "battery_placeholder[0].cells_stat[0].u_max.value",  D::Float,      D::Float,      None,              None),
    o(G::BatteryPlaceholder, 0x18BD807D,  86, "battery_placeholder[0].cells_stat[4].t_min.index",  D::Uint8,      D::Uint8,      None,              None),
    o(G::BatteryPlaceholder, 0x1D83D2A5, 100, "battery_placeholder[0].cells[4]",                   D::String,     D::String,     None,              None),
    o(G::BatteryPlaceholder, 0x1E0EB397, 101, "battery_placeholder[0].cells_stat[6].u_max.value",  D::Float,      D::Float,      None,              None),
    o(G::BatteryPlaceholder, 0x1F44C23A, 103, "battery_placeholder[0].cells_stat[1].t_min.index",  D::Uint8,      D::Uint8,      None,              None),
    o(G::BatteryPlaceholder, 0x1FA192E3, 106, "battery_placeholder[0].cells_resist[4]",            D::String,     D::String,     None,              None),
    o(G::BatteryPlaceholder, 0x1FB3A602, 107, "battery_placeholder[0].cells_stat[2].t_max.value",  D::Float,      D::Float,      None,              None),
    o(G::BatteryPlaceholder, 0x20A3A91F, 110, "battery_placeholder[0].module_sn[4]",               D::String,     D::String,     None,              Some("Module 4 Serial Number")),
    o(G::BatteryPlaceholder, 0x2295401F, 118, "battery_placeholder[0].cells_stat[3].u_max.time",   D::Uint32,     D::Uint32,     None,              None),
    o(G::BatteryPlaceholder, 0x235E0DF5, 122, "battery_placeholder[0].stack_software_version[1]",  D::Uint32,     D::Uint32,     None,              Some("Software version stack 1")),
    o(G::BatteryPlaceholder, 0x23D4A386, 124, "battery_placeholder[0].cells_stat[0]",              D::String,     D::String,     None,              None),
    o(G::BatteryPlaceholder, 0x241CFA0A, 128, "battery_placeholder[0].min_cell_temperature",       D::Float,      D::Float,      None,              None),
    o(G::BatteryPlaceholder, 0x24AC4CBB, 130, "battery_placeholder[0].cells_resist[6]",            D::String,     D::String,     None,              None),
    o(G::BatteryPlaceholder, 0x27116260, 139, "battery_placeholder[0].cells_stat[5].u_min.value",  D::Float,      D::Float,      None,              None),
    o(G::BatteryPlaceholder, 0x2E9F3C50, 156, "battery_placeholder[0].cells_stat[0].t_max.index",  D::Uint8,      D::Uint8,      None,              None),
    o(G::BatteryPlaceholder, 0x2ED8A639, 158, "battery_placeholder[0].cells_stat[2].u_min.time",   D::Uint32,     D::Uint32,     None,              None),
    o(G::BatteryPlaceholder, 0x2F84A0A9, 161, "battery_placeholder[0].cells[2]",                   D::String,     D::String,     None,              None),
    o(G::BatteryPlaceholder, 0x31413485, 163, "battery_placeholder[0].cells_stat[5].u_min.index",  D::Uint8,      D::Uint8,      None,              None),
    o(G::BatteryPlaceholder, 0x314C13EB, 164, "battery_placeholder[0].cells_stat[5].u_max.value",  D::Float,      D::Float,      None,              None),
    o(G::BatteryPlaceholder, 0x374B5DD6, 185, "battery_placeholder[0].cells_stat[6].u_min.time",   D::Uint32,     D::Uint32,     None,              None),
    o(G::BatteryPlaceholder, 0x39AD4639, 193, "battery_placeholder[0].cells_stat[5].u_min.time",   D::Uint32,     D::Uint32,     None,              None),
    o(G::BatteryPlaceholder, 0x3A35D491, 196, "battery_placeholder[0].cells_stat[2].u_max.value",  D::Float,      D::Float,      None,              None),
    o(G::BatteryPlaceholder, 0x465DDB50, 237, "battery_placeholder[0].cells_stat[2].t_min.value",  D::Float,      D::Float,      None,              None),
    o(G::BatteryPlaceholder, 0x4686E044, 239, "battery_placeholder[0].cells_stat[1].u_min.index",  D::Uint8,      D::Uint8,      None,              None),
    o(G::BatteryPlaceholder, 0x46C3625D, 241, "battery_placeholder[0].cells_stat[2]",              D::String,     D::String,     None,              None),
    o(G::BatteryPlaceholder, 0x4764F9EE, 243, "battery_placeholder[0].cells_stat[3].t_max.value",  D::Float,      D::Float,      None,              None),
    o(G::BatteryPlaceholder, 0x4AAEB0D2, 252, "battery_placeholder[0].cells_stat[1]",              D::String,     D::String,     None,              None),
    o(G::BatteryPlaceholder, 0x4D684EF2, 262, "battery_placeholder[0].cells[0]",                   D::String,     D::String,     None,              None),
    o(G::BatteryPlaceholder, 0x4DC372A0, 265, "battery_placeholder[0].cells_stat[4].u_max.value",  D::Float,      D::Float,      None,              None),
    o(G::BatteryPlaceholder, 0x4FC53F19, 277, "battery_placeholder[0].module_sn[3]",               D::String,     D::String,     None,              Some("Module 3 Serial Number")),
    o(G::BatteryPlaceholder, 0x4FEDC1BE, 278, "battery_placeholder[0].cells_stat[5].t_min.value",  D::Float,      D::Float,      None,              None),
    o(G::BatteryPlaceholder, 0x4FF8CCE2, 279, "battery_placeholder[0].stack_software_version[5]",  D::Uint32,     D::Uint32,     None,              Some("Software version stack 5")),
    o(G::BatteryPlaceholder, 0x51E5377D, 286, "battery_placeholder[0].stack_cycles[1]",            D::Uint16,     D::Uint16,     None,              None),
    o(G::BatteryPlaceholder, 0x53656F42, 288, "battery_placeholder[0].cells_stat[2].u_max.index",  D::Uint8,      D::Uint8,      None,              None),
    o(G::BatteryPlaceholder, 0x576D2A08, 303, "battery_placeholder[0].cells_stat[3].t_min.time",   D::Uint32,     D::Uint32,     None,              None),
    o(G::BatteryPlaceholder, 0x57945EE4, 304, "battery_placeholder[0].maximum_charge_current",     D::Float,      D::Float,      Some("A"),         Some("Max. charge current")),
    o(G::BatteryPlaceholder, 0x5C93093B, 321, "battery_placeholder[0].status2",                    D::Int32,      D::Int32,      None,              Some("Battery extra status")),
    o(G::BatteryPlaceholder, 0x5EF54372, 329, "battery_placeholder[0].cells_stat[0].u_max.index",  D::Uint8,      D::Uint8,      None,              None),
    o(G::BatteryPlaceholder, 0x60435F1C, 332, "battery_placeholder[0].cells[6]",                   D::String,     D::String,     None,              None),
    o(G::BatteryPlaceholder, 0x6383DEA9, 343, "battery_placeholder[0].cells_stat[1].t_max.value",  D::Float,      D::Float,      None,              None),
    o(G::BatteryPlaceholder, 0x652B7536, 349, "battery_placeholder[0].cells_stat[3].t_min.index",  D::Uint8,      D::Uint8,      None,              None),
    o(G::BatteryPlaceholder, 0x6743CCCE, 359, "battery_placeholder[0].cells_stat[6].t_max.index",  D::Uint8,      D::Uint8,      None,              None),
    o(G::BatteryPlaceholder, 0x690C32D2, 368, "battery_placeholder[0].module_sn[0]",               D::String,     D::String,     None,              Some("Module 0 Serial Number")),
    o(G::BatteryPlaceholder, 0x6C03F5ED, 376, "battery_placeholder[0].bms_power_version",          D::Uint32,     D::Uint32,     None,              Some("Software version BMS Power")),
    o(G::BatteryPlaceholder, 0x6C10E96A, 377, "battery_placeholder[0].cells_stat[0].u_min.time",   D::Uint32,     D::Uint32,     None,              None),
    o(G::BatteryPlaceholder, 0x6D639C25, 383, "battery_placeholder[0].cells_stat[0].t_min.value",  D::Float,      D::Float,      None,              None),
    o(G::BatteryPlaceholder, 0x6E3336A8, 389, "battery_placeholder[0].cells_stat[5].t_max.index",  D::Uint8,      D::Uint8,      None,              None),
    o(G::BatteryPlaceholder, 0x75898A45, 417, "battery_placeholder[0].cells_stat[5].t_max.time",   D::Uint32,     D::Uint32,     None,              None),
    o(G::BatteryPlaceholder, 0x77A9480F, 424, "battery_placeholder[0].minimum_discharge_voltage",  D::Float,      D::Float,      Some("V"),         Some("Min. discharge voltage")),
    o(G::BatteryPlaceholder, 0x77E5CEF1, 426, "battery_placeholder[0].stack_software_version[0]",  D::Uint32,     D::Uint32,     None,              Some("Software version stack 0")),
    o(G::BatteryPlaceholder, 0x78228507, 427, "battery_placeholder[0].stack_cycles[6]",            D::Uint16,     D::Uint16,     None,              None),
    o(G::BatteryPlaceholder, 0x7839EBCB, 428, "battery_placeholder[0].cells_stat[3].u_min.time",   D::Uint32,     D::Uint32,     None,              None),
    o(G::BatteryPlaceholder, 0x792897C9, 430, "battery_placeholder[0].cells_stat[4].t_min.time",   D::Uint32,     D::Uint32,     None,              None),
    o(G::BatteryPlaceholder, 0x79D7D617, 435, "battery_placeholder[0].current",                    D::Float,      D::Float,      Some("A"),         Some("Battery current")),
    o(G::BatteryPlaceholder, 0x79E66CDF, 436, "battery_placeholder[0].cells_stat[6].t_min.index",  D::Uint8,      D::Uint8,      None,              None),
    o(G::BatteryPlaceholder, 0x7B8E811E, 445, "battery_placeholder[0].cells_stat[6]",              D::String,     D::String,     None,              None),
    o(G::BatteryPlaceholder, 0x7BF3886B, 446, "battery_placeholder[0].stack_cycles[2]",            D::Uint16,     D::Uint16,     None,              None),
    o(G::BatteryPlaceholder, 0x7C863EDB, 450, "battery_placeholder[0].cells[3]",                   D::String,     D::String,     None,              None),
    o(G::BatteryPlaceholder, 0x7D839AE6, 451, "battery_placeholder[0].cells_resist[2]",            D::String,     D::String,     None,              None),
    o(G::BatteryPlaceholder, 0x8128228D, 462, "battery_placeholder[0].cells_stat[1].u_max.value",  D::Float,      D::Float,      None,              None),
    o(G::BatteryPlaceholder, 0x8352F9DD, 471, "battery_placeholder[0].cells_stat[4].t_min.value",  D::Float,      D::Float,      None,              None),
    o(G::BatteryPlaceholder, 0x8594D11E, 476, "battery_placeholder[0].module_sn[6]",               D::String,     D::String,     None,              Some("Module 6 Serial Number")),
    o(G::BatteryPlaceholder, 0x8822EF35, 481, "battery_placeholder[0].stack_software_version[2]",  D::Uint32,     D::Uint32,     None,              Some("Software version stack 2")),
    o(G::BatteryPlaceholder, 0x8AFD1410, 495, "battery_placeholder[0].stack_cycles[4]",            D::Uint16,     D::Uint16,     None,              None),
    o(G::BatteryPlaceholder, 0x8B4BE168, 496, "battery_placeholder[0].soc",                        D::Float,      D::Float,      None,              Some("SOC (State of charge)")),
    o(G::BatteryPlaceholder, 0x8C6E28E4, 499, "battery_placeholder[0].cells_stat[2].t_max.time",   D::Uint32,     D::Uint32,     None,              None),
    o(G::BatteryPlaceholder, 0x9095FD74, 519, "battery_placeholder[0].cells[5]",                   D::String,     D::String,     None,              None),
    o(G::BatteryPlaceholder, 0x90C2AC13, 521, "battery_placeholder[0].stack_cycles[3]",            D::Uint16,     D::Uint16,     None,              None),
    o(G::BatteryPlaceholder, 0x920AFF34, 528, "battery_placeholder[0].cells_stat[1].t_max.index",  D::Uint8,      D::Uint8,      None,              None),
    o(G::BatteryPlaceholder, 0x947DDC38, 542, "battery_placeholder[0].cells_stat[0].t_min.index",  D::Uint8,      D::Uint8,      None,              None),
    o(G::BatteryPlaceholder, 0x9486134F, 543, "battery_placeholder[0].cells_stat[1].t_max.time",   D::Uint32,     D::Uint32,     None,              None),
    o(G::BatteryPlaceholder, 0x95E1E844, 546, "battery_placeholder[0].cells_stat[2].t_min.time",   D::Uint32,     D::Uint32,     None,              None),
    o(G::BatteryPlaceholder, 0x961C8261, 547, "battery_placeholder[0].cells_stat[4].u_max.time",   D::Uint32,     D::Uint32,     None,              None),
    o(G::BatteryPlaceholder, 0x97DC2ECB, 553, "battery_placeholder[0].cells[1]",                   D::String,     D::String,     None,              None),
    o(G::BatteryPlaceholder, 0x980C5525, 556, "battery_placeholder[0].max_cell_voltage",           D::Float,      D::Float,      None,              None),
    o(G::BatteryPlaceholder, 0x9AAA9CAA, 565, "battery_placeholder[0].stack_cycles[5]",            D::Uint16,     D::Uint16,     None,              None),
    o(G::BatteryPlaceholder, 0xA23FE8B9, 579, "battery_placeholder[0].cells_stat[6].t_min.value",  D::Float,      D::Float,      None,              None),
    o(G::BatteryPlaceholder, 0xA2F87161, 580, "battery_placeholder[0].cells_stat[0].u_max.time",   D::Uint32,     D::Uint32,     None,              None),
    o(G::BatteryPlaceholder, 0xA7F4123B, 599, "battery_placeholder[0].stack_software_version[6]",  D::Uint32,     D::Uint32,     None,              Some("Software version stack 6")),
    o(G::BatteryPlaceholder, 0xA81176D0, 602, "battery_placeholder[0].cells_stat[1].u_min.time",   D::Uint32,     D::Uint32,     None,              None),
    o(G::BatteryPlaceholder, 0xA83F291F, 603, "battery_placeholder[0].cells_stat[6].u_min.value",  D::Float,      D::Float,      None,              None),
    o(G::BatteryPlaceholder, 0xA8FEAEB9, 604, "battery_placeholder[0].cells_resist[5]",            D::String,     D::String,     None,              None),
    o(G::BatteryPlaceholder, 0xAA911BEE, 609, "battery_placeholder[0].cells_stat[4].t_max.value",  D::Float,      D::Float,      None,              None),
    o(G::BatteryPlaceholder, 0xABA015FC, 613, "battery_placeholder[0].module_sn[1]",               D::String,     D::String,     None,              Some("Module 1 Serial Number")),
    o(G::BatteryPlaceholder, 0xAE99F87A, 616, "battery_placeholder[0].cells_stat[5].t_min.time",   D::Uint32,     D::Uint32,     None,              None),
    o(G::BatteryPlaceholder, 0xB130B8D6, 624, "battery_placeholder[0].cells_stat[1].t_min.time",   D::Uint32,     D::Uint32,     None,              None),
    o(G::BatteryPlaceholder, 0xB1D465C7, 626, "battery_placeholder[0].cells_stat[4].u_min.value",  D::Float,      D::Float,      None,              None),
    o(G::BatteryPlaceholder, 0xB228EC94, 630, "battery_placeholder[0].cells_stat[3].t_max.time",   D::Uint32,     D::Uint32,     None,              None),
    o(G::BatteryPlaceholder, 0xB399B5B3, 634, "battery_placeholder[0].cells_stat[4].u_min.index",  D::Uint8,      D::Uint8,      None,              None),
    o(G::BatteryPlaceholder, 0xB403A7E6, 635, "battery_placeholder[0].soc_update_since",           D::Float,      D::Float,      None,              None),
    o(G::BatteryPlaceholder, 0xB5EDA8EC, 643, "battery_placeholder[0].cells_stat[3].u_max.value",  D::Float,      D::Float,      None,              None),
    o(G::BatteryPlaceholder, 0xB70D1703, 646, "battery_placeholder[0].cells_stat[5].u_max.index",  D::Uint8,      D::Uint8,      None,              None),
    o(G::BatteryPlaceholder, 0xBA046C03, 660, "battery_placeholder[0].cells_stat[5].t_max.value",  D::Float,      D::Float,      None,              None),
    o(G::BatteryPlaceholder, 0xBD95C46C, 672, "battery_placeholder[0].ah_capacity",                D::Float,      D::Float,      Some("Ah"),        Some("Battery capacity [Ah]")),
    o(G::BatteryPlaceholder, 0xC04A5F3A, 678, "battery_placeholder[0].bms_software_version",       D::Uint32,     D::Uint32,     None,              Some("Software version BMS Master")),
    o(G::BatteryPlaceholder, 0xC56A1346, 700, "battery_placeholder[0].cells_stat[4].t_max.index",  D::Uint8,      D::Uint8,      None,              None),
    o(G::BatteryPlaceholder, 0xC66665E8, 702, "battery_placeholder[0].temperature",                D::Float,      D::Float,      Some("°C"),        Some("Battery temperature")),
    o(G::BatteryPlaceholder, 0xC71155B5, 706, "battery_placeholder[0].cells_stat[2].t_min.index",  D::Uint8,      D::Uint8,      None,              None),
    o(G::BatteryPlaceholder, 0xC7E85F32, 711, "battery_placeholder[0].cells_stat[4].t_max.time",   D::Uint32,     D::Uint32,     None,              None),
    o(G::BatteryPlaceholder, 0xC8E56803, 715, "battery_placeholder[0].maximum_charge_voltage",     D::Float,      D::Float,      Some("V"),         Some("Max. charge voltage")),
    o(G::BatteryPlaceholder, 0xC937D38D, 716, "battery_placeholder[0].stack_cycles[0]",            D::Uint16,     D::Uint16,     None,              None),
    o(G::BatteryPlaceholder, 0xCA4E0C03, 719, "battery_placeholder[0].cells_stat[5].u_max.time",   D::Uint32,     D::Uint32,     None,              None),
    o(G::BatteryPlaceholder, 0xCB85C397, 724, "battery_placeholder[0].cells_stat[3].u_min.value",  D::Float,      D::Float,      None,              None),
    o(G::BatteryPlaceholder, 0xCBBEEB21, 726, "battery_placeholder[0].cells_stat[2].u_max.time",   D::Uint32,     D::Uint32,     None,              None),
    o(G::BatteryPlaceholder, 0xCD8EDAD3, 730, "battery_placeholder[0].cells_stat[3].t_min.value",  D::Float,      D::Float,      None,              None),
    o(G::BatteryPlaceholder, 0xCE49EB86, 732, "battery_placeholder[0].cells_stat[2].t_max.index",  D::Uint8,      D::Uint8,      None,              None),
    o(G::BatteryPlaceholder, 0xCF096A6B, 735, "battery_placeholder[0].stack_software_version[4]",  D::Uint32,     D::Uint32,     None,              Some("Software version stack 4")),
    o(G::BatteryPlaceholder, 0xD1F9D017, 741, "battery_placeholder[0].cells_stat[4].u_min.time",   D::Uint32,     D::Uint32,     None,              None),
    o(G::BatteryPlaceholder, 0xD2DEA4B1, 742, "battery_placeholder[0].cells_stat[5].t_min.index",  D::Uint8,      D::Uint8,      None,              None),
    o(G::BatteryPlaceholder, 0xD3F492EB, 745, "battery_placeholder[0].cells_stat[0].t_max.time",   D::Uint32,     D::Uint32,     None,              None),
    o(G::BatteryPlaceholder, 0xD81471DF, 755, "battery_placeholder[0].cells_stat[6].t_max.value",  D::Float,      D::Float,      None,              None),
    o(G::BatteryPlaceholder, 0xD82F2D0B, 756, "battery_placeholder[0].cells_stat[3].u_min.index",  D::Uint8,      D::Uint8,      None,              None),
    o(G::BatteryPlaceholder, 0xD876A4AC, 758, "battery_placeholder[0].cells_stat[0].u_min.index",  D::Uint8,      D::Uint8,      None,              None),
    o(G::BatteryPlaceholder, 0xE14F1CBA, 787, "battery_placeholder[0].cells_stat[4]",              D::String,     D::String,     None,              None),
    o(G::BatteryPlaceholder, 0xE19C8B79, 788, "battery_placeholder[0].cells_resist[1]",            D::String,     D::String,     None,              None),
    o(G::BatteryPlaceholder, 0xE635A6C4, 801, "battery_placeholder[0].module_sn[2]",               D::String,     D::String,     None,              Some("Module 2 Serial Number")),
    o(G::BatteryPlaceholder, 0xE87B1F4B, 806, "battery_placeholder[0].cells_stat[0].u_min.value",  D::Float,      D::Float,      None,              None),
    o(G::BatteryPlaceholder, 0xEA399EA8, 811, "battery_placeholder[0].min_cell_voltage",           D::Float,      D::Float,      None,              None),
    o(G::BatteryPlaceholder, 0xEB7BCB93, 816, "battery_placeholder[0].bms_sn",                     D::String,     D::String,     None,              Some("BMS Serial Number")),
    o(G::BatteryPlaceholder, 0xEEC44AA0, 822, "battery_placeholder[0].cells_stat[2].u_min.index",  D::Uint8,      D::Uint8,      None,              None),
    o(G::BatteryPlaceholder, 0xF1DE6E99, 836, "battery_placeholder[0].cells_resist[3]",            D::String,     D::String,     None,              None),
    o(G::BatteryPlaceholder, 0xF23D4595, 838, "battery_placeholder[0].cells_stat[1].t_min.value",  D::Float,      D::Float,      None,              None),
    o(G::BatteryPlaceholder, 0xF451E935, 850, "battery_placeholder[0].cells_stat[0].t_min.time",   D::Uint32,     D::Uint32,     None,              None),
    o(G::BatteryPlaceholder, 0xF677D737, 857, "battery_placeholder[0].cells_stat[6].u_max.time",   D::Uint32,     D::Uint32,     None,              None),
    o(G::BatteryPlaceholder, 0xF68ECC1F, 858, "battery_placeholder[0].cells_stat[1].u_max.time",   D::Uint32,     D::Uint32,     None,              None),
    o(G::BatteryPlaceholder, 0xF742C6BA, 860, "battery_placeholder[0].cells_stat[1].u_max.index",  D::Uint8,      D::Uint8,      None,              None),
    o(G::BatteryPlaceholder, 0xFC1F8C65, 880, "battery_placeholder[0].cells_stat[6].t_max.time",   D::Uint32,     D::Uint32,     None,              None),
    o(G::BatteryPlaceholder, 0xFCA1CBB5, 883, "battery_placeholder[0].voltage",                    D::Float,      D::Float,      Some("V"),         Some("Battery voltage")),
    o(G::BatteryPlaceholder, 0xFE38B227, 891, "battery_placeholder[0].cells_stat[5]",              D::String,     D::String,     None,              None),
    o(G::BatteryPlaceholder, 0xFF5B8A54, 895, "battery_placeholder[0].cells_stat[3]",              D::String,     D::String,     None,              None),
];
