//! I2C interface implementation built on top of `embedded-hal` `I2c`.

use embedded_hal::i2c::{I2c, Operation};

use super::Mpu6050Interface;

/// Default 7-bit bus address (AD0 pin low).
pub const PRIMARY_ADDRESS: u8 = 0x68;
/// Alternate 7-bit bus address (AD0 pin high).
pub const SECONDARY_ADDRESS: u8 = 0x69;

/// I2C-based interface implementation for the MPU-6050 driver.
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Creates a new interface addressing the device at [`PRIMARY_ADDRESS`].
    pub const fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, PRIMARY_ADDRESS)
    }

    /// Creates a new interface addressing the device at the given 7-bit
    /// address.
    pub const fn with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Returns the 7-bit device address in use.
    pub const fn address(&self) -> u8 {
        self.address
    }

    /// Provides mutable access to the wrapped I2C bus.
    pub fn i2c_mut(&mut self) -> &mut I2C {
        &mut self.i2c
    }

    /// Consumes the interface and returns the owned I2C bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> Mpu6050Interface for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error> {
        self.i2c.write(self.address, &[register, value])
    }

    fn read_register(&mut self, register: u8) -> core::result::Result<u8, Self::Error> {
        let mut value = [0u8; 1];
        self.read_many(register, &mut value)?;
        Ok(value[0])
    }

    fn read_many(&mut self, register: u8, buf: &mut [u8]) -> core::result::Result<(), Self::Error> {
        if buf.is_empty() {
            return Ok(());
        }

        // Register pointer write and burst read share one bus transaction;
        // the device auto-increments the pointer across the read phase.
        self.i2c.write_read(self.address, &[register], buf)
    }

    fn write_many(&mut self, register: u8, data: &[u8]) -> core::result::Result<(), Self::Error> {
        if data.is_empty() {
            return Ok(());
        }

        let pointer = [register];
        let mut operations = [Operation::Write(&pointer), Operation::Write(data)];
        self.i2c.transaction(self.address, &mut operations)
    }
}
