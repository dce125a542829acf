//! Raw structures, which are byte compatible with the on-disk format.
//! All multi byte fields are stored as little endian byte arrays, so the layout does not
//! depend on the host.

pub mod boot_sector;
