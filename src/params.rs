//! Strongly typed parameter enumerations for the MPU-6050 driver.
//!
//! These enums map directly to datasheet field encodings and are used across
//! [`Config`](crate::config::Config) and the high-level driver APIs. Prefer these
//! types over raw integers to keep configuration values valid and explicit.
//!
//! # Examples
//!
//! ```rust
//! use mpu6050::params::{AccelFullScale, ClockSource, GyroFullScale};
//!
//! let clock = ClockSource::PllGyroX;
//! let accel = AccelFullScale::G4;
//! let gyro = GyroFullScale::Dps500;
//! let _ = (clock, accel, gyro);
//! ```

use modular_bitfield::prelude::Specifier;

/// Clock source selections encoded in `PWR_MGMT_1[2:0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 3]
pub enum ClockSource {
    /// Internal 8 MHz oscillator.
    Internal8MHz = 0b000,
    /// PLL with X-axis gyroscope reference.
    PllGyroX = 0b001,
    /// PLL with Y-axis gyroscope reference.
    PllGyroY = 0b010,
    /// PLL with Z-axis gyroscope reference.
    PllGyroZ = 0b011,
    /// PLL with external 32.768 kHz reference.
    PllExternal32kHz = 0b100,
    /// PLL with external 19.2 MHz reference.
    PllExternal19MHz = 0b101,
    /// Reserved encoding.
    Reserved = 0b110,
    /// Stops the clock and holds the timing generator in reset.
    Halt = 0b111,
}

impl ClockSource {
    /// Decodes a raw field value, masking it to the 3-bit register width.
    pub const fn from_bits_truncated(bits: u8) -> Self {
        match bits & 0b111 {
            0b000 => Self::Internal8MHz,
            0b001 => Self::PllGyroX,
            0b010 => Self::PllGyroY,
            0b011 => Self::PllGyroZ,
            0b100 => Self::PllExternal32kHz,
            0b101 => Self::PllExternal19MHz,
            0b110 => Self::Reserved,
            _ => Self::Halt,
        }
    }

    /// Decodes a raw field value, rejecting anything wider than 3 bits.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        if bits > 0b111 {
            None
        } else {
            Some(Self::from_bits_truncated(bits))
        }
    }
}

/// Sleep bit encoding in `PWR_MGMT_1[6]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 1]
pub enum SleepMode {
    /// Device fully powered; sensors sampling.
    FullPower = 0,
    /// Low-power sleep mode.
    LowPower = 1,
}

impl SleepMode {
    /// Decodes a raw field value, masking it to the 1-bit register width.
    pub const fn from_bits_truncated(bits: u8) -> Self {
        if bits & 0b1 == 0 {
            Self::FullPower
        } else {
            Self::LowPower
        }
    }

    /// Decodes a raw field value, rejecting anything wider than 1 bit.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        if bits > 0b1 {
            None
        } else {
            Some(Self::from_bits_truncated(bits))
        }
    }
}

/// Temperature sensor disable bit encoding in `PWR_MGMT_1[3]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 1]
pub enum TempSensor {
    /// Temperature sensor enabled.
    Enabled = 0,
    /// Temperature sensor disabled.
    Disabled = 1,
}

impl TempSensor {
    /// Decodes a raw field value, masking it to the 1-bit register width.
    pub const fn from_bits_truncated(bits: u8) -> Self {
        if bits & 0b1 == 0 {
            Self::Enabled
        } else {
            Self::Disabled
        }
    }

    /// Decodes a raw field value, rejecting anything wider than 1 bit.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        if bits > 0b1 {
            None
        } else {
            Some(Self::from_bits_truncated(bits))
        }
    }
}

/// Accelerometer full-scale selections encoded in `ACCEL_CONFIG[4:3]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 2]
pub enum AccelFullScale {
    /// ±2 g full scale.
    G2 = 0b00,
    /// ±4 g full scale.
    G4 = 0b01,
    /// ±8 g full scale.
    G8 = 0b10,
    /// ±16 g full scale.
    G16 = 0b11,
}

impl AccelFullScale {
    /// Returns the full-scale range in g.
    pub const fn range_g(self) -> u32 {
        match self {
            Self::G2 => 2,
            Self::G4 => 4,
            Self::G8 => 8,
            Self::G16 => 16,
        }
    }

    /// Returns the raw LSB count per g for this range.
    pub const fn lsb_per_g(self) -> u32 {
        match self {
            Self::G2 => 16_384,
            Self::G4 => 8_192,
            Self::G8 => 4_096,
            Self::G16 => 2_048,
        }
    }

    /// Derives the sensitivity scale factor in g per LSB.
    pub const fn sensitivity(self, arithmetic: ScaleArithmetic) -> f32 {
        match arithmetic {
            ScaleArithmetic::Real => self.range_g() as f32 / self.lsb_per_g() as f32,
            // Every range/LSB pair here is a whole-number ratio below one, so
            // the truncated quotient is always zero.
            ScaleArithmetic::TruncatedInteger => (self.range_g() / self.lsb_per_g()) as f32,
        }
    }

    /// Decodes a raw field value, masking it to the 2-bit register width.
    pub const fn from_bits_truncated(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => Self::G2,
            0b01 => Self::G4,
            0b10 => Self::G8,
            _ => Self::G16,
        }
    }

    /// Decodes a raw field value, rejecting anything wider than 2 bits.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        if bits > 0b11 {
            None
        } else {
            Some(Self::from_bits_truncated(bits))
        }
    }
}

/// Gyroscope full-scale selections encoded in `GYRO_CONFIG[4:3]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 2]
pub enum GyroFullScale {
    /// ±250 °/s full scale.
    Dps250 = 0b00,
    /// ±500 °/s full scale.
    Dps500 = 0b01,
    /// ±1000 °/s full scale.
    Dps1000 = 0b10,
    /// ±2000 °/s full scale.
    Dps2000 = 0b11,
}

impl GyroFullScale {
    /// Returns the full-scale range in degrees per second.
    pub const fn range_dps(self) -> u32 {
        match self {
            Self::Dps250 => 250,
            Self::Dps500 => 500,
            Self::Dps1000 => 1_000,
            Self::Dps2000 => 2_000,
        }
    }

    /// Returns the raw LSB count per degree-per-second for this range.
    pub const fn lsb_per_dps(self) -> f32 {
        match self {
            Self::Dps250 => 131.0,
            Self::Dps500 => 65.5,
            Self::Dps1000 => 32.8,
            Self::Dps2000 => 16.4,
        }
    }

    /// Derives the sensitivity scale factor in degrees per second per LSB.
    pub const fn sensitivity(self, arithmetic: ScaleArithmetic) -> f32 {
        match arithmetic {
            ScaleArithmetic::Real => self.range_dps() as f32 / self.lsb_per_dps(),
            // 250/131 is the only whole-number operand pair; the fractional
            // divisors keep real division even under truncated arithmetic.
            ScaleArithmetic::TruncatedInteger => match self {
                Self::Dps250 => (250 / 131) as f32,
                _ => self.range_dps() as f32 / self.lsb_per_dps(),
            },
        }
    }

    /// Decodes a raw field value, masking it to the 2-bit register width.
    pub const fn from_bits_truncated(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => Self::Dps250,
            0b01 => Self::Dps500,
            0b10 => Self::Dps1000,
            _ => Self::Dps2000,
        }
    }

    /// Decodes a raw field value, rejecting anything wider than 2 bits.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        if bits > 0b11 {
            None
        } else {
            Some(Self::from_bits_truncated(bits))
        }
    }
}

/// Digital low-pass filter selections encoded in `CONFIG[2:0]`.
///
/// The bandwidth figures are the accelerometer corner frequencies; the
/// gyroscope corners are within a few hertz of each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 3]
pub enum DlpfBandwidth {
    /// 260 Hz bandwidth (filter effectively bypassed).
    Bw260Hz = 0b000,
    /// 184 Hz bandwidth.
    Bw184Hz = 0b001,
    /// 94 Hz bandwidth.
    Bw94Hz = 0b010,
    /// 44 Hz bandwidth.
    Bw44Hz = 0b011,
    /// 21 Hz bandwidth.
    Bw21Hz = 0b100,
    /// 10 Hz bandwidth.
    Bw10Hz = 0b101,
    /// 5 Hz bandwidth.
    Bw5Hz = 0b110,
    /// Reserved encoding.
    Reserved = 0b111,
}

impl DlpfBandwidth {
    /// Returns the nominal accelerometer bandwidth in hertz, or zero for the
    /// reserved encoding.
    pub const fn hz(self) -> u32 {
        match self {
            Self::Bw260Hz => 260,
            Self::Bw184Hz => 184,
            Self::Bw94Hz => 94,
            Self::Bw44Hz => 44,
            Self::Bw21Hz => 21,
            Self::Bw10Hz => 10,
            Self::Bw5Hz => 5,
            Self::Reserved => 0,
        }
    }

    /// Decodes a raw field value, masking it to the 3-bit register width.
    pub const fn from_bits_truncated(bits: u8) -> Self {
        match bits & 0b111 {
            0b000 => Self::Bw260Hz,
            0b001 => Self::Bw184Hz,
            0b010 => Self::Bw94Hz,
            0b011 => Self::Bw44Hz,
            0b100 => Self::Bw21Hz,
            0b101 => Self::Bw10Hz,
            0b110 => Self::Bw5Hz,
            _ => Self::Reserved,
        }
    }

    /// Decodes a raw field value, rejecting anything wider than 3 bits.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        if bits > 0b111 {
            None
        } else {
            Some(Self::from_bits_truncated(bits))
        }
    }
}

/// Arithmetic used to derive sensitivity factors from a full-scale selection.
///
/// This is a host-side policy, not a register field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleArithmetic {
    /// Real-valued division of the range by its LSB count.
    Real,
    /// Whole-number operand pairs divide as integers and truncate toward
    /// zero; fractional LSB counts still divide as reals. This yields
    /// degenerate zero factors for every accelerometer range and for the
    /// temperature transform, and is only useful for comparing output
    /// against systems that compute sensitivities this way.
    TruncatedInteger,
}

impl ScaleArithmetic {
    /// Factor applied to the raw temperature word to approximate degrees
    /// Celsius.
    pub const fn temperature_factor(self) -> f32 {
        match self {
            Self::Real => 125.0 / 340.0,
            Self::TruncatedInteger => (125 / 340) as f32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accel_sensitivity_uses_real_division() {
        let g2 = AccelFullScale::G2.sensitivity(ScaleArithmetic::Real);
        assert!((g2 - 2.0 / 16_384.0).abs() < 1e-9);
        assert!(g2 > 0.0);

        let g16 = AccelFullScale::G16.sensitivity(ScaleArithmetic::Real);
        assert!((g16 - 16.0 / 2_048.0).abs() < 1e-9);
    }

    #[test]
    fn accel_sensitivity_truncated_collapses_to_zero() {
        for scale in [
            AccelFullScale::G2,
            AccelFullScale::G4,
            AccelFullScale::G8,
            AccelFullScale::G16,
        ] {
            assert_eq!(scale.sensitivity(ScaleArithmetic::TruncatedInteger), 0.0);
        }
    }

    #[test]
    fn gyro_sensitivity_uses_real_division() {
        let dps500 = GyroFullScale::Dps500.sensitivity(ScaleArithmetic::Real);
        assert!((dps500 - 500.0 / 65.5).abs() < 1e-4);

        let dps250 = GyroFullScale::Dps250.sensitivity(ScaleArithmetic::Real);
        assert!((dps250 - 250.0 / 131.0).abs() < 1e-4);
    }

    #[test]
    fn gyro_sensitivity_truncates_only_whole_number_ratios() {
        assert_eq!(
            GyroFullScale::Dps250.sensitivity(ScaleArithmetic::TruncatedInteger),
            1.0
        );

        let dps500 = GyroFullScale::Dps500.sensitivity(ScaleArithmetic::TruncatedInteger);
        assert!((dps500 - 500.0 / 65.5).abs() < 1e-4);
    }

    #[test]
    fn temperature_factor_matches_arithmetic_policy() {
        let real = ScaleArithmetic::Real.temperature_factor();
        assert!((real - 125.0 / 340.0).abs() < 1e-6);
        assert_eq!(ScaleArithmetic::TruncatedInteger.temperature_factor(), 0.0);
    }

    #[test]
    fn raw_bits_are_masked_to_field_width() {
        assert_eq!(
            ClockSource::from_bits_truncated(0x09),
            ClockSource::PllGyroX
        );
        assert_eq!(
            AccelFullScale::from_bits_truncated(0x06),
            AccelFullScale::G8
        );
        assert_eq!(
            GyroFullScale::from_bits_truncated(0xFF),
            GyroFullScale::Dps2000
        );
        assert_eq!(
            DlpfBandwidth::from_bits_truncated(0x0A),
            DlpfBandwidth::Bw94Hz
        );
        assert_eq!(SleepMode::from_bits_truncated(0x02), SleepMode::FullPower);
    }

    #[test]
    fn raw_bits_outside_field_width_are_rejected() {
        assert_eq!(ClockSource::from_bits(0x08), None);
        assert_eq!(ClockSource::from_bits(0x05), Some(ClockSource::PllExternal19MHz));
        assert_eq!(AccelFullScale::from_bits(0x04), None);
        assert_eq!(SleepMode::from_bits(0x02), None);
        assert_eq!(TempSensor::from_bits(0x01), Some(TempSensor::Disabled));
    }
}
