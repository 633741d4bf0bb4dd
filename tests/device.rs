//! Integration tests driving the full I2C transport stack against a mock bus.

use embedded_hal_mock::eh1::delay::NoopDelay;
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
use mpu6050::config::Config;
use mpu6050::interface::i2c::{PRIMARY_ADDRESS, SECONDARY_ADDRESS};
use mpu6050::params::{
    AccelFullScale, ClockSource, DlpfBandwidth, GyroFullScale, ScaleArithmetic, SleepMode,
};
use mpu6050::Mpu6050;

#[test]
fn configure_then_read_accel_in_g() {
    let expectations = [
        // init: interrupt sources
        I2cTransaction::write(PRIMARY_ADDRESS, vec![0x38, 0x19]),
        // configure: reset, power mode, filter, gyro scale, accel scale, divider
        I2cTransaction::write(PRIMARY_ADDRESS, vec![0x6B, 0x80]),
        I2cTransaction::write(PRIMARY_ADDRESS, vec![0x6B, 0x01]),
        I2cTransaction::write(PRIMARY_ADDRESS, vec![0x1A, 0x02]),
        I2cTransaction::write(PRIMARY_ADDRESS, vec![0x1B, 0x08]),
        I2cTransaction::write(PRIMARY_ADDRESS, vec![0x1C, 0x08]),
        I2cTransaction::write(PRIMARY_ADDRESS, vec![0x19, 0x02]),
        // data ready, then one axis-block burst read
        I2cTransaction::write_read(PRIMARY_ADDRESS, vec![0x3A], vec![0x01]),
        I2cTransaction::write_read(
            PRIMARY_ADDRESS,
            vec![0x3B],
            vec![0x10, 0x00, 0x00, 0x00, 0x00, 0x00],
        ),
    ];
    let mut device = Mpu6050::new_i2c(I2cMock::new(&expectations));

    device.init().unwrap();

    let config = Config::new()
        .clock_source(ClockSource::PllGyroX)
        .sleep(SleepMode::FullPower)
        .accel_scale(AccelFullScale::G4)
        .gyro_scale(GyroFullScale::Dps500)
        .dlpf(DlpfBandwidth::Bw94Hz)
        .build();
    device.configure(config, &mut NoopDelay).unwrap();

    // 4096 LSB at ±4 g is exactly 2 g.
    let accel = device.read_accel_g().unwrap().unwrap();
    assert!((accel.x - 2.0).abs() < 1e-6);
    assert_eq!(accel.y, 0.0);
    assert_eq!(accel.z, 0.0);

    device.release_i2c().done();
}

#[test]
fn data_not_ready_issues_no_burst_read() {
    let expectations = [I2cTransaction::write_read(
        PRIMARY_ADDRESS,
        vec![0x3A],
        vec![0x00],
    )];
    let mut device = Mpu6050::new_i2c(I2cMock::new(&expectations));

    assert_eq!(device.read_gyro_dps().unwrap(), None);

    // done() verifies the status poll was the only bus traffic.
    device.release_i2c().done();
}

#[test]
fn truncated_arithmetic_zeroes_accel_output() {
    let expectations = [
        I2cTransaction::write(PRIMARY_ADDRESS, vec![0x6B, 0x80]),
        I2cTransaction::write(PRIMARY_ADDRESS, vec![0x6B, 0x01]),
        I2cTransaction::write(PRIMARY_ADDRESS, vec![0x1A, 0x02]),
        I2cTransaction::write(PRIMARY_ADDRESS, vec![0x1B, 0x00]),
        I2cTransaction::write(PRIMARY_ADDRESS, vec![0x1C, 0x00]),
        I2cTransaction::write(PRIMARY_ADDRESS, vec![0x19, 0x02]),
        I2cTransaction::write_read(PRIMARY_ADDRESS, vec![0x3A], vec![0x01]),
        I2cTransaction::write_read(
            PRIMARY_ADDRESS,
            vec![0x3B],
            vec![0x40, 0x00, 0x00, 0x00, 0x00, 0x00],
        ),
    ];
    let mut device = Mpu6050::new_i2c(I2cMock::new(&expectations));

    let config = Config::new()
        .dlpf(DlpfBandwidth::Bw94Hz)
        .scale_arithmetic(ScaleArithmetic::TruncatedInteger)
        .build();
    device.configure(config, &mut NoopDelay).unwrap();

    let accel = device.read_accel_g().unwrap().unwrap();
    assert_eq!(accel.x, 0.0);

    device.release_i2c().done();
}

#[test]
fn sample_rate_divider_round_trip() {
    let expectations = [
        I2cTransaction::write_read(PRIMARY_ADDRESS, vec![0x19], vec![0x02]),
        I2cTransaction::write(PRIMARY_ADDRESS, vec![0x19, 0x07]),
    ];
    let mut device = Mpu6050::new_i2c(I2cMock::new(&expectations));

    assert_eq!(device.read_sample_rate_divider().unwrap(), 0x02);
    device.write_sample_rate_divider(0x07).unwrap();

    device.release_i2c().done();
}

#[test]
fn alternate_device_address_reaches_the_bus() {
    let expectations = [I2cTransaction::write(SECONDARY_ADDRESS, vec![0x38, 0x19])];
    let mut device = Mpu6050::new_i2c_with_address(I2cMock::new(&expectations), SECONDARY_ADDRESS);

    device.init().unwrap();

    device.release_i2c().done();
}
