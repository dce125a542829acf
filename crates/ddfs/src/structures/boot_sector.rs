use core::fmt;

use super::raw::boot_sector::RawBootSector;

/// Errors that can occur when decoding a boot sector from bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BootSectorError {
    /// Fewer than [`BootSector::SIZE`] bytes were supplied.
    #[error("truncated boot sector: expected {expected} bytes, got {len}", expected = BootSector::SIZE)]
    TruncatedRecord { len: usize },
}

/// The info variant of the boot sector, with every field in the host endianness.
///
/// The alignment and size of this struct are not those of the on-disk record, converting
/// between bytes and this struct always goes through [`BootSector::to_bytes`] and
/// [`BootSector::from_bytes`] (or the [`RawBootSector`] conversions).
///
/// No field is validated: a zero sector size is stored and read back as is.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BootSector {
    pub sector_size: u16,
    pub sectors_per_cluster: u8,
    pub number_of_clusters: u32,
}

impl BootSector {
    /// The size of the serialized boot sector in bytes
    pub const SIZE: usize = size_of::<RawBootSector>();

    pub const fn new(sector_size: u16, sectors_per_cluster: u8, number_of_clusters: u32) -> Self {
        Self {
            sector_size,
            sectors_per_cluster,
            number_of_clusters,
        }
    }

    /// Decodes a boot sector from the first [`Self::SIZE`] bytes of `bytes`.
    ///
    /// Any trailing bytes are ignored.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, BootSectorError> {
        let record = bytes
            .get(..Self::SIZE)
            .ok_or(BootSectorError::TruncatedRecord { len: bytes.len() })?;
        let raw = bytemuck::pod_read_unaligned::<RawBootSector>(record);
        Ok(Self::from(raw))
    }

    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        bytemuck::cast(RawBootSector::from(*self))
    }

    /// The number of bytes in a cluster
    pub fn cluster_size(&self) -> u64 {
        u64::from(self.sector_size) * u64::from(self.sectors_per_cluster)
    }

    /// The number of bytes addressed by all clusters together
    pub fn total_size(&self) -> u64 {
        self.cluster_size() * u64::from(self.number_of_clusters)
    }
}

impl From<RawBootSector> for BootSector {
    fn from(raw: RawBootSector) -> Self {
        Self {
            sector_size: u16::from_le_bytes(raw.sector_size),
            sectors_per_cluster: raw.sectors_per_cluster,
            number_of_clusters: u32::from_le_bytes(raw.number_of_clusters),
        }
    }
}

impl From<BootSector> for RawBootSector {
    fn from(bs: BootSector) -> Self {
        Self {
            sector_size: bs.sector_size.to_le_bytes(),
            sectors_per_cluster: bs.sectors_per_cluster,
            number_of_clusters: bs.number_of_clusters.to_le_bytes(),
        }
    }
}

impl fmt::Display for BootSector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sector_size: {}, sectors_per_cluster: {}, number_of_clusters: {}",
            self.sector_size, self.sectors_per_cluster, self.number_of_clusters
        )
    }
}
