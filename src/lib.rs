#![no_std]

mod error;

pub mod config;
pub mod device;
pub mod interface;
pub mod params;
pub mod registers;

pub use crate::device::{Axes, Mpu6050};
pub use crate::error::{Error, Result};
