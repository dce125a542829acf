/// The boot sector as it is stored at offset 0 of the image
///
/// There is no magic number, checksum or version field, the record is identified only by
/// its position.
#[repr(C, packed)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, bytemuck::NoUninit, bytemuck::AnyBitPattern)]
pub struct RawBootSector {
    /// The number of bytes per sector
    pub sector_size: [u8; 2],
    /// The number of sectors per cluster
    pub sectors_per_cluster: u8,
    /// The number of clusters in the image
    pub number_of_clusters: [u8; 4],
}
