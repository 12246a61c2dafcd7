pub mod device;

pub use device::{
    AvDevice, DeviceLog, DeviceStatus, DeviceType, LogLevel, NetworkInterface, OidEntry, OidKind,
    OidValue, PowerState,
};
