//! Register map definitions for the MPU-6050 IMU.
#![allow(unused_parens)]

use modular_bitfield::prelude::*;

use crate::params::{AccelFullScale, ClockSource, DlpfBandwidth, GyroFullScale};

/// Register address of `SMPRT_DIV`.
pub const REG_SMPRT_DIV: u8 = 0x19;
/// Register address of `CONFIG`.
pub const REG_CONFIG: u8 = 0x1A;
/// Register address of `GYRO_CONFIG`.
pub const REG_GYRO_CONFIG: u8 = 0x1B;
/// Register address of `ACCEL_CONFIG`.
pub const REG_ACCEL_CONFIG: u8 = 0x1C;
/// Register address of `INT_ENABLE`.
pub const REG_INT_ENABLE: u8 = 0x38;
/// Register address of `INT_STATUS`.
pub const REG_INT_STATUS: u8 = 0x3A;
/// Register address of `ACCEL_XOUT_H`.
pub const REG_ACCEL_XOUT_H: u8 = 0x3B;
/// Register address of `ACCEL_XOUT_L`.
pub const REG_ACCEL_XOUT_L: u8 = 0x3C;
/// Register address of `ACCEL_YOUT_H`.
pub const REG_ACCEL_YOUT_H: u8 = 0x3D;
/// Register address of `ACCEL_YOUT_L`.
pub const REG_ACCEL_YOUT_L: u8 = 0x3E;
/// Register address of `ACCEL_ZOUT_H`.
pub const REG_ACCEL_ZOUT_H: u8 = 0x3F;
/// Register address of `ACCEL_ZOUT_L`.
pub const REG_ACCEL_ZOUT_L: u8 = 0x40;
/// Register address of `TEMP_OUT_H`.
pub const REG_TEMP_OUT_H: u8 = 0x41;
/// Register address of `TEMP_OUT_L`.
pub const REG_TEMP_OUT_L: u8 = 0x42;
/// Register address of `GYRO_XOUT_H`.
pub const REG_GYRO_XOUT_H: u8 = 0x43;
/// Register address of `GYRO_XOUT_L`.
pub const REG_GYRO_XOUT_L: u8 = 0x44;
/// Register address of `GYRO_YOUT_H`.
pub const REG_GYRO_YOUT_H: u8 = 0x45;
/// Register address of `GYRO_YOUT_L`.
pub const REG_GYRO_YOUT_L: u8 = 0x46;
/// Register address of `GYRO_ZOUT_H`.
pub const REG_GYRO_ZOUT_H: u8 = 0x47;
/// Register address of `GYRO_ZOUT_L`.
pub const REG_GYRO_ZOUT_L: u8 = 0x48;
/// Register address of `PWR_MGMT_1`.
pub const REG_PWR_MGMT_1: u8 = 0x6B;
/// Register address of `PWR_MGMT_2`.
pub const REG_PWR_MGMT_2: u8 = 0x6C;

/// Access permissions encoded for each register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterAccess {
    /// Read-only register.
    ReadOnly,
    /// Write-only register.
    WriteOnly,
    /// Read/write register.
    ReadWrite,
}

/// Minimal metadata exposed by every register value type.
pub trait Register {
    /// Raw storage backing the register payload.
    type Raw: Copy;
    /// Register address as documented in the datasheet.
    const ADDRESS: u8;
    /// Access permission classification.
    const ACCESS: RegisterAccess;
    /// Optional reset/default value defined by the datasheet.
    const RESET_VALUE: Option<Self::Raw>;
}

/// Bitfield representation of the `PWR_MGMT_1` register (address `0x6B`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerManagement {
    // Clock source selection (bits 2:0).
    pub clock_source: ClockSource,
    // Temperature sensor disable flag (bit 3).
    pub temp_disable: bool,
    #[skip]
    __: B1,
    // Cycle between sleep and sampling (bit 5).
    pub cycle: bool,
    // Sleep mode flag (bit 6).
    pub sleep: bool,
    // Device reset trigger (bit 7).
    pub device_reset: bool,
}

impl From<u8> for PowerManagement {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<PowerManagement> for u8 {
    fn from(value: PowerManagement) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `CONFIG` register (address `0x1A`).
///
/// The external sync field (bits 5:3) is left unprogrammed; FSYNC is not
/// supported by this driver.
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterConfig {
    // Digital low-pass filter selection (bits 2:0).
    pub dlpf: DlpfBandwidth,
    #[skip]
    __: B5,
}

impl From<u8> for FilterConfig {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<FilterConfig> for u8 {
    fn from(value: FilterConfig) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `GYRO_CONFIG` register (address `0x1B`).
///
/// The self-test trigger bits (7:5) are left unprogrammed.
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GyroConfig {
    #[skip]
    __: B3,
    // Full-scale selection (bits 4:3).
    pub full_scale: GyroFullScale,
    #[skip]
    __: B3,
}

impl From<u8> for GyroConfig {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<GyroConfig> for u8 {
    fn from(value: GyroConfig) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `ACCEL_CONFIG` register (address `0x1C`).
///
/// The self-test trigger bits (7:5) are left unprogrammed.
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccelConfig {
    #[skip]
    __: B3,
    // Full-scale selection (bits 4:3).
    pub full_scale: AccelFullScale,
    #[skip]
    __: B3,
}

impl From<u8> for AccelConfig {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<AccelConfig> for u8 {
    fn from(value: AccelConfig) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `INT_ENABLE` register (address `0x38`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntEnable {
    // Data ready interrupt enable (bit 0).
    pub data_ready: bool,
    #[skip]
    __: B2,
    // I2C master interrupt enable (bit 3).
    pub i2c_master: bool,
    // FIFO overflow interrupt enable (bit 4).
    pub fifo_overflow: bool,
    #[skip]
    __: B3,
}

impl From<u8> for IntEnable {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<IntEnable> for u8 {
    fn from(value: IntEnable) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `INT_STATUS` register (address `0x3A`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntStatus {
    // New data available in the output registers (bit 0).
    pub data_ready: bool,
    #[skip]
    __: B2,
    // I2C master interrupt pending (bit 3).
    pub i2c_master: bool,
    // FIFO overflow occurred (bit 4).
    pub fifo_overflow: bool,
    #[skip]
    __: B3,
}

impl From<u8> for IntStatus {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<IntStatus> for u8 {
    fn from(value: IntStatus) -> Self {
        value.into_bytes()[0]
    }
}

impl Register for PowerManagement {
    type Raw = u8;
    const ADDRESS: u8 = REG_PWR_MGMT_1;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x40);
}

impl Register for FilterConfig {
    type Raw = u8;
    const ADDRESS: u8 = REG_CONFIG;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}

impl Register for GyroConfig {
    type Raw = u8;
    const ADDRESS: u8 = REG_GYRO_CONFIG;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}

impl Register for AccelConfig {
    type Raw = u8;
    const ADDRESS: u8 = REG_ACCEL_CONFIG;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}

impl Register for IntEnable {
    type Raw = u8;
    const ADDRESS: u8 = REG_INT_ENABLE;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}

impl Register for IntStatus {
    type Raw = u8;
    const ADDRESS: u8 = REG_INT_STATUS;
    const ACCESS: RegisterAccess = RegisterAccess::ReadOnly;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}
