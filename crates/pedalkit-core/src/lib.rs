//! # Pedalkit Core
//!
//! Design configuration, validation, and error types for pedalkit.
//! Provides the single immutable parameter record that every generator
//! in the workspace consumes.

pub mod config;
pub mod error;

pub use config::{
    BoardEnvelope, ButtonSpec, CaseEnvelope, DesignConfig, EstimatingRates, FingerJointSpec,
    FirmwareSettings, FootswitchSpec, LedSpec, LidSpec, PinAssignments, ProjectName,
    RenderSettings, StandoffSpec, UsbPortSpec,
};

pub use error::{ConfigError, ConfigResult, Error, Result};
