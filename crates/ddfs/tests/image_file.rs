use std::{fs, io::Write};

use ddfs::{BootSector, Image, ImageError};
use tempfile::NamedTempFile;

fn image_file(contents: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn write_then_reopen() {
    let file = image_file(&[0; BootSector::SIZE]);
    let bs = BootSector::new(512, 1, 4);
    {
        let mut image = Image::open(file.path()).unwrap();
        assert!(image.is_open());
        assert_eq!(image.read_boot_sector().unwrap(), BootSector::default());
        image.write_boot_sector(&bs).unwrap();
        assert_eq!(image.read_boot_sector().unwrap(), bs);
    }

    let mut image = Image::open(file.path()).unwrap();
    assert_eq!(image.read_boot_sector().unwrap(), bs);
    assert_eq!(fs::read(file.path()).unwrap(), vec![0x00u8, 0x02, 0x01, 0x04, 0x00, 0x00, 0x00]);
}

#[test]
fn rest_of_image_is_untouched() {
    let contents: Vec<u8> = (0..=255).collect();
    let file = image_file(&contents);
    let mut image = Image::open(file.path()).unwrap();
    image.write_boot_sector(&BootSector::new(4096, 8, 1000)).unwrap();
    drop(image);

    let written = fs::read(file.path()).unwrap();
    assert_eq!(written.len(), contents.len());
    assert_eq!(&written[BootSector::SIZE..], &contents[BootSector::SIZE..]);
    assert_eq!(
        BootSector::from_bytes(&written).unwrap(),
        BootSector::new(4096, 8, 1000)
    );
}

#[test]
fn short_image_has_no_boot_sector() {
    let file = image_file(&[0xAB; 3]);
    let mut image = Image::open(file.path()).unwrap();
    assert!(image.read_boot_sector().ok().is_none());
}

#[test]
fn missing_image_is_not_created() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.img");
    assert!(matches!(Image::open(&path), Err(ImageError::Open { .. })));
    assert!(!path.exists());
}
