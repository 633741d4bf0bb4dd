//! High-level MPU-6050 device driver implementation.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::interface::i2c::I2cInterface;
use crate::interface::Mpu6050Interface;
use crate::params::SleepMode;
use crate::registers::{
    AccelConfig,
    FilterConfig,
    GyroConfig,
    IntEnable,
    IntStatus,
    PowerManagement,
    REG_ACCEL_CONFIG,
    REG_ACCEL_XOUT_H,
    REG_CONFIG,
    REG_GYRO_CONFIG,
    REG_GYRO_XOUT_H,
    REG_INT_ENABLE,
    REG_INT_STATUS,
    REG_PWR_MGMT_1,
    REG_SMPRT_DIV,
    REG_TEMP_OUT_H,
};
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

// Settle time after a device reset or power-mode change (milliseconds).
const RESET_SETTLE_DELAY_MS: u32 = 100;
// Number of consecutive bytes spanning X, Y, Z axis samples.
const RAW_AXIS_BYTES: usize = 6;
// Number of consecutive bytes spanning the temperature word.
const RAW_TEMP_BYTES: usize = 2;

/// A three-axis sample, raw (`i16`) or unit-scaled (`f32`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Axes<T> {
    /// X-axis reading.
    pub x: T,
    /// Y-axis reading.
    pub y: T,
    /// Z-axis reading.
    pub z: T,
}

impl Axes<i16> {
    /// Scales each raw axis value by a sensitivity factor.
    pub fn scaled(self, factor: f32) -> Axes<f32> {
        Axes {
            x: self.x as f32 * factor,
            y: self.y as f32 * factor,
            z: self.z as f32 * factor,
        }
    }
}

#[cfg(feature = "defmt")]
impl<T: defmt::Format> defmt::Format for Axes<T> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Axes {{ x: {}, y: {}, z: {} }}", self.x, self.y, self.z);
    }
}

/// High-level synchronous driver for the MPU-6050 IMU.
///
/// The sensitivity scale factors are zero until [`configure`](Self::configure)
/// has run; unit-scaled reads issued before then return zeroed values.
pub struct Mpu6050<IFACE> {
    interface: IFACE,
    config: Config,
    accel_sensitivity: f32,
    gyro_sensitivity: f32,
    temperature_factor: f32,
}

impl<IFACE> Mpu6050<IFACE> {
    // ==================================================================
    // == Driver Construction & Ownership ===============================
    // ==================================================================
    /// Creates a new driver instance from the provided bus interface.
    pub fn new(interface: IFACE) -> Self {
        Self {
            interface,
            config: Config::default(),
            accel_sensitivity: 0.0,
            gyro_sensitivity: 0.0,
            temperature_factor: 0.0,
        }
    }

    /// Consumes the driver and returns the owned interface.
    pub fn release(self) -> IFACE {
        self.interface
    }

    /// Provides mutable access to the underlying interface.
    pub fn interface_mut(&mut self) -> &mut IFACE {
        &mut self.interface
    }
}

impl<I2C> Mpu6050<I2cInterface<I2C>>
where
    I2C: I2c,
{
    // ==================================================================
    // == I2C Convenience Constructors ==================================
    // ==================================================================
    /// Convenience constructor for I2C transports, using the default
    /// device address.
    pub fn new_i2c(i2c: I2C) -> Self {
        Self::new(I2cInterface::new(i2c))
    }

    /// Convenience constructor for I2C transports with an explicit 7-bit
    /// device address.
    pub fn new_i2c_with_address(i2c: I2C, address: u8) -> Self {
        Self::new(I2cInterface::with_address(i2c, address))
    }

    /// Releases the driver, returning the I2C bus.
    pub fn release_i2c(self) -> I2C {
        self.release().release()
    }
}

impl<IFACE, CommE> Mpu6050<IFACE>
where
    IFACE: Mpu6050Interface<Error = CommE>,
{
    // ==================================================================
    // == Initialization & Configuration ================================
    // ==================================================================
    /// Enables the data-ready, I2C-master, and FIFO-overflow interrupt
    /// sources so that subsequent reads can be gated on the data-ready
    /// flag.
    ///
    /// Leaves the sensitivity scale factors unset; call
    /// [`configure`](Self::configure) before issuing unit-scaled reads.
    pub fn init(&mut self) -> Result<(), CommE> {
        let sources = IntEnable::new()
            .with_data_ready(true)
            .with_i2c_master(true)
            .with_fifo_overflow(true);
        self.interface
            .write_register(REG_INT_ENABLE, u8::from(sources))
            .map_err(Error::from)
    }

    /// Applies a configuration to the device and recomputes the
    /// sensitivity scale factors.
    ///
    /// The register writes happen in a fixed order: device reset, power
    /// mode, filter bandwidth, gyroscope scale, accelerometer scale,
    /// sample-rate divider. A failed write aborts the sequence and leaves
    /// the device in a reset-plus-prefix state; retry from scratch rather
    /// than resuming.
    pub fn configure(&mut self, config: Config, delay: &mut impl DelayNs) -> Result<(), CommE> {
        let reset = PowerManagement::new().with_device_reset(true);
        self.interface
            .write_register(REG_PWR_MGMT_1, u8::from(reset))
            .map_err(Error::from)?;
        delay.delay_ms(RESET_SETTLE_DELAY_MS);

        let power = PowerManagement::new()
            .with_clock_source(config.clock_source)
            .with_sleep(matches!(config.sleep, SleepMode::LowPower));
        self.interface
            .write_register(REG_PWR_MGMT_1, u8::from(power))
            .map_err(Error::from)?;
        delay.delay_ms(RESET_SETTLE_DELAY_MS);

        let filter = FilterConfig::new().with_dlpf(config.dlpf);
        self.interface
            .write_register(REG_CONFIG, u8::from(filter))
            .map_err(Error::from)?;

        let gyro = GyroConfig::new().with_full_scale(config.gyro_scale);
        self.interface
            .write_register(REG_GYRO_CONFIG, u8::from(gyro))
            .map_err(Error::from)?;

        let accel = AccelConfig::new().with_full_scale(config.accel_scale);
        self.interface
            .write_register(REG_ACCEL_CONFIG, u8::from(accel))
            .map_err(Error::from)?;

        // The divider register receives the filter code, never
        // `config.sample_rate_divider`, and a zero filter code is
        // rewritten to 4 first so the divider cannot land at zero.
        let divider = match config.dlpf as u8 {
            0 => 4,
            code => code,
        };
        self.interface
            .write_register(REG_SMPRT_DIV, divider)
            .map_err(Error::from)?;

        self.accel_sensitivity = config.accel_scale.sensitivity(config.scale_arithmetic);
        self.gyro_sensitivity = config.gyro_scale.sensitivity(config.scale_arithmetic);
        self.temperature_factor = config.scale_arithmetic.temperature_factor();
        self.config = config;

        Ok(())
    }

    /// Returns a shared reference to the active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the accelerometer sensitivity in g per LSB.
    pub fn accel_sensitivity(&self) -> f32 {
        self.accel_sensitivity
    }

    /// Returns the gyroscope sensitivity in degrees per second per LSB.
    pub fn gyro_sensitivity(&self) -> f32 {
        self.gyro_sensitivity
    }

    // ==================================================================
    // == Data Acquisition ==============================================
    // ==================================================================
    /// Reads the data-ready flag from the interrupt status register.
    pub fn read_data_ready(&mut self) -> Result<bool, CommE> {
        let status = self
            .interface
            .read_register(REG_INT_STATUS)
            .map_err(Error::from)?;
        Ok(IntStatus::from(status).data_ready())
    }

    /// Reads a raw acceleration triplet.
    ///
    /// Returns `Ok(None)` without touching the data registers when the
    /// data-ready flag is clear; the caller keeps whatever value it read
    /// last, which may be stale.
    pub fn read_accel_raw(&mut self) -> Result<Option<Axes<i16>>, CommE> {
        self.read_axes(REG_ACCEL_XOUT_H)
    }

    /// Reads a raw angular-rate triplet.
    ///
    /// Returns `Ok(None)` when the data-ready flag is clear, as with
    /// [`read_accel_raw`](Self::read_accel_raw).
    pub fn read_gyro_raw(&mut self) -> Result<Option<Axes<i16>>, CommE> {
        self.read_axes(REG_GYRO_XOUT_H)
    }

    /// Reads the raw temperature word.
    ///
    /// Returns `Ok(None)` when the data-ready flag is clear.
    pub fn read_temperature_raw(&mut self) -> Result<Option<i16>, CommE> {
        if !self.read_data_ready()? {
            return Ok(None);
        }

        let mut raw = [0u8; RAW_TEMP_BYTES];
        self.interface
            .read_many(REG_TEMP_OUT_H, &mut raw)
            .map_err(Error::from)?;

        Ok(Some(Self::unpack_word(raw[0], raw[1])))
    }

    /// Reads acceleration scaled to g.
    ///
    /// Returns `Ok(None)` when the data-ready flag is clear.
    pub fn read_accel_g(&mut self) -> Result<Option<Axes<f32>>, CommE> {
        let factor = self.accel_sensitivity;
        Ok(self.read_axes(REG_ACCEL_XOUT_H)?.map(|axes| axes.scaled(factor)))
    }

    /// Reads angular rate scaled to degrees per second.
    ///
    /// Returns `Ok(None)` when the data-ready flag is clear.
    pub fn read_gyro_dps(&mut self) -> Result<Option<Axes<f32>>, CommE> {
        let factor = self.gyro_sensitivity;
        Ok(self.read_axes(REG_GYRO_XOUT_H)?.map(|axes| axes.scaled(factor)))
    }

    /// Reads the temperature converted to an approximation of degrees
    /// Celsius.
    ///
    /// Returns `Ok(None)` when the data-ready flag is clear.
    pub fn read_temperature_celsius(&mut self) -> Result<Option<f32>, CommE> {
        let factor = self.temperature_factor;
        Ok(self
            .read_temperature_raw()?
            .map(|raw| raw as f32 * factor))
    }

    // ==================================================================
    // == Sample-Rate Divider ===========================================
    // ==================================================================
    /// Reads the current sample-rate divider.
    pub fn read_sample_rate_divider(&mut self) -> Result<u8, CommE> {
        self.interface
            .read_register(REG_SMPRT_DIV)
            .map_err(Error::from)
    }

    /// Writes the sample-rate divider directly, independent of
    /// [`configure`](Self::configure).
    pub fn write_sample_rate_divider(&mut self, divider: u8) -> Result<(), CommE> {
        self.interface
            .write_register(REG_SMPRT_DIV, divider)
            .map_err(Error::from)
    }

    // ==================================================================
    // == Internal Helpers ==============================================
    // ==================================================================
    #[inline]
    fn unpack_word(msb: u8, lsb: u8) -> i16 {
        // Output registers hold 16-bit two's complement data, high byte first.
        i16::from_be_bytes([msb, lsb])
    }

    fn read_axes(&mut self, register: u8) -> Result<Option<Axes<i16>>, CommE> {
        if !self.read_data_ready()? {
            return Ok(None);
        }

        let mut raw = [0u8; RAW_AXIS_BYTES];
        self.interface
            .read_many(register, &mut raw)
            .map_err(Error::from)?;

        Ok(Some(Axes {
            x: Self::unpack_word(raw[0], raw[1]),
            y: Self::unpack_word(raw[2], raw[3]),
            z: Self::unpack_word(raw[4], raw[5]),
        }))
    }
}
