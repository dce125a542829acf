//! On-disk structures of a ddfs image
//!
//! Each structure comes in two flavours: a raw, byte compatible representation in the
//! [`raw`] module, and an info variant in the host endianness which is what users work with.

pub mod boot_sector;
pub mod raw;
