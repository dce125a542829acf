//! A library for working with ddfs images
//!
//! ddfs is a minimal disk image format whose only on-disk structure is a 7 byte boot sector
//! at offset zero, recording the sector size, the number of sectors per cluster and the
//! number of clusters.
//!
//! When used with no features, the crate only provides the boot sector structures, which
//! work in no-std environments.
//!
//! ## Cargo Features
//!
//! - **std**: Enables the [`image`] module, which reads and writes the boot sector of an image
//! through any `Read + Write + Seek` handle

#![cfg_attr(not(feature = "std"), no_std)]

pub mod structures;
#[cfg(feature = "std")]
pub mod image;

pub use structures::boot_sector::{BootSector, BootSectorError};
#[cfg(feature = "std")]
pub use image::{Image, ImageError};
