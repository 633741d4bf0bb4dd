//! Configuration primitives for the MPU-6050 driver.

use crate::params::{
    AccelFullScale,
    ClockSource,
    DlpfBandwidth,
    GyroFullScale,
    ScaleArithmetic,
    SleepMode,
    TempSensor,
};

/// User-facing configuration for the MPU-6050 sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Clock source selection.
    pub clock_source: ClockSource,
    /// Sleep mode selection.
    pub sleep: SleepMode,
    /// Gyroscope full-scale selection.
    pub gyro_scale: GyroFullScale,
    /// Accelerometer full-scale selection.
    pub accel_scale: AccelFullScale,
    /// Digital low-pass filter selection.
    pub dlpf: DlpfBandwidth,
    /// Temperature sensor enable selection.
    ///
    /// Recorded in the configuration but not programmed by
    /// [`configure`](crate::Mpu6050::configure); the power register write
    /// carries only the clock and sleep bits.
    pub temp_sensor: TempSensor,
    /// Sample-rate divider value.
    ///
    /// Recorded in the configuration but not programmed by
    /// [`configure`](crate::Mpu6050::configure), which derives the divider
    /// from the filter selection instead. Use
    /// [`write_sample_rate_divider`](crate::Mpu6050::write_sample_rate_divider)
    /// to program this value at runtime.
    pub sample_rate_divider: u8,
    /// Arithmetic policy for deriving sensitivity scale factors.
    pub scale_arithmetic: ScaleArithmetic,
}

impl Config {
    /// Begins building a [`Config`] using the builder pattern.
    pub fn new() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Decodes raw register-width field values, masking each to its bit
    /// width: out-of-range values are truncated, never rejected.
    pub fn from_bits_truncated(raw: RawConfig) -> Self {
        Self {
            clock_source: ClockSource::from_bits_truncated(raw.clock_source),
            sleep: SleepMode::from_bits_truncated(raw.sleep),
            gyro_scale: GyroFullScale::from_bits_truncated(raw.gyro_scale),
            accel_scale: AccelFullScale::from_bits_truncated(raw.accel_scale),
            dlpf: DlpfBandwidth::from_bits_truncated(raw.dlpf),
            temp_sensor: TempSensor::from_bits_truncated(raw.temp_sensor),
            sample_rate_divider: raw.sample_rate_divider,
            scale_arithmetic: ScaleArithmetic::Real,
        }
    }

    /// Decodes raw register-width field values, failing fast on any field
    /// that does not fit its declared bit width.
    pub fn try_from_bits(raw: RawConfig) -> core::result::Result<Self, ConfigError> {
        Ok(Self {
            clock_source: ClockSource::from_bits(raw.clock_source)
                .ok_or(ConfigError::OutOfRange("clock_source"))?,
            sleep: SleepMode::from_bits(raw.sleep).ok_or(ConfigError::OutOfRange("sleep"))?,
            gyro_scale: GyroFullScale::from_bits(raw.gyro_scale)
                .ok_or(ConfigError::OutOfRange("gyro_scale"))?,
            accel_scale: AccelFullScale::from_bits(raw.accel_scale)
                .ok_or(ConfigError::OutOfRange("accel_scale"))?,
            dlpf: DlpfBandwidth::from_bits(raw.dlpf).ok_or(ConfigError::OutOfRange("dlpf"))?,
            temp_sensor: TempSensor::from_bits(raw.temp_sensor)
                .ok_or(ConfigError::OutOfRange("temp_sensor"))?,
            sample_rate_divider: raw.sample_rate_divider,
            scale_arithmetic: ScaleArithmetic::Real,
        })
    }
}

/// Raw register-width field values for a [`Config`], prior to decoding.
///
/// The sample-rate divider occupies a full byte; every other field is
/// narrower than its `u8` carrier and is subject to the decoding policy of
/// the chosen [`Config`] constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawConfig {
    /// Clock source bits (3-bit field).
    pub clock_source: u8,
    /// Sleep bit (1-bit field).
    pub sleep: u8,
    /// Gyroscope full-scale bits (2-bit field).
    pub gyro_scale: u8,
    /// Accelerometer full-scale bits (2-bit field).
    pub accel_scale: u8,
    /// Digital low-pass filter bits (3-bit field).
    pub dlpf: u8,
    /// Temperature sensor disable bit (1-bit field).
    pub temp_sensor: u8,
    /// Sample-rate divider byte (8-bit field).
    pub sample_rate_divider: u8,
}

/// Builder for [`Config`] allowing piecemeal construction.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a new builder seeded with [`Config::default()`].
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Overrides the clock source.
    pub fn clock_source(mut self, clock_source: ClockSource) -> Self {
        self.config.clock_source = clock_source;
        self
    }

    /// Overrides the sleep mode.
    pub fn sleep(mut self, sleep: SleepMode) -> Self {
        self.config.sleep = sleep;
        self
    }

    /// Overrides the gyroscope full-scale selection.
    pub fn gyro_scale(mut self, gyro_scale: GyroFullScale) -> Self {
        self.config.gyro_scale = gyro_scale;
        self
    }

    /// Overrides the accelerometer full-scale selection.
    pub fn accel_scale(mut self, accel_scale: AccelFullScale) -> Self {
        self.config.accel_scale = accel_scale;
        self
    }

    /// Overrides the digital low-pass filter selection.
    pub fn dlpf(mut self, dlpf: DlpfBandwidth) -> Self {
        self.config.dlpf = dlpf;
        self
    }

    /// Overrides the temperature sensor selection.
    pub fn temp_sensor(mut self, temp_sensor: TempSensor) -> Self {
        self.config.temp_sensor = temp_sensor;
        self
    }

    /// Sets the sample-rate divider value.
    pub fn sample_rate_divider(mut self, divider: u8) -> Self {
        self.config.sample_rate_divider = divider;
        self
    }

    /// Sets the sensitivity arithmetic policy.
    pub fn scale_arithmetic(mut self, arithmetic: ScaleArithmetic) -> Self {
        self.config.scale_arithmetic = arithmetic;
        self
    }

    /// Finalizes the builder and returns the [`Config`].
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            clock_source: ClockSource::PllGyroX,
            sleep: SleepMode::FullPower,
            gyro_scale: GyroFullScale::Dps250,
            accel_scale: AccelFullScale::G2,
            dlpf: DlpfBandwidth::Bw260Hz,
            temp_sensor: TempSensor::Enabled,
            sample_rate_divider: 0,
            scale_arithmetic: ScaleArithmetic::Real,
        }
    }
}

/// Validation errors generated while decoding raw configuration fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The named field value does not fit its register bit width.
    OutOfRange(&'static str),
}
