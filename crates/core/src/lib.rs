pub mod allocation;
pub mod config;
pub mod validation;

pub use allocation::{recommend, Allocation, RiskLevel};
pub use config::{AppConfig, ConfigError, ConfigOverrides, LoadOptions, LogFormat, LoggingConfig};
pub use validation::{
    parse_slot_int, validate, CoercionPolicy, SlotParseError, ValidatedSlot, ValidationOutcome,
};
