//! Board-agnostic logic for the heart animation firmware
//!
//! This crate contains everything that does not touch hardware:
//!
//! - Row bitmap helpers (bit mirroring)
//! - The 8-row image buffer
//! - Heart frame generators and the frame sequencer
//! - The brightness "breathing" curve
//! - Show orchestration (boot sequence, animation script, idle pulse)
//! - The display trait the orchestration drives

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod animation;
pub mod bitmap;
pub mod config;
pub mod image;
pub mod show;
pub mod traits;

pub use config::ShowConfig;
pub use image::ImageBuffer;
pub use show::{Phase, Show};
