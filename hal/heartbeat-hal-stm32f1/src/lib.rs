//! STM32F1-specific HAL for the Heartbeat firmware
//!
//! This crate provides STM32F1-specific implementations and utilities
//! for use with `heartbeat-hal` traits. It supports:
//!
//! - STM32F103C8 (blue pill)
//! - STM32F103CB
//!
//! # Features
//!
//! - `stm32f103c8` / `stm32f103cb` - Select the chip
//! - `defmt` - Enable debug formatting support
//!
//! # Usage
//!
//! The firmware builds peripherals with embassy-stm32 directly and uses
//! this crate to configure them for the matrix chain and to adapt them to
//! the `heartbeat-hal` traits.

#![no_std]

pub mod delay;
pub mod gpio;
pub mod spi;

pub use delay::CycleDelay;
pub use gpio::Pin;
