use {
    crate::formats::{ImageFormat, detect, is_image_file, png_is_hdr},
    std::{io::Cursor, path::Path},
};

#[test]
fn detect_magic_bytes() {
    let png = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 13];
    assert_eq!(detect(&png), Some(ImageFormat::Png));
    assert_eq!(detect(&[0xFF, 0xD8, 0xFF, 0xE0]), Some(ImageFormat::Jpeg));
    assert_eq!(detect(b"II\x2A\x00\x08\x00\x00\x00"), Some(ImageFormat::Tiff));
    assert_eq!(detect(b"MM\x00\x2A\x00\x00\x00\x08"), Some(ImageFormat::Tiff));
    assert_eq!(detect(b"\x00\x00\x00\x20ftypavif"), Some(ImageFormat::Avif));
    assert_eq!(detect(b"\x00\x00\x00\x20ftypavis"), Some(ImageFormat::Avif));
    assert_eq!(detect(b"\x00\x00\x00\x20ftypheic"), Some(ImageFormat::Heic));
    assert_eq!(detect(b"\x00\x00\x00\x20ftyphevx"), Some(ImageFormat::Heic));
    assert_eq!(detect(b"\x00\x00\x00\x20ftypmif1"), Some(ImageFormat::Heic));
    assert_eq!(detect(b"\x00\x00\x00\x20ftypmp42"), None);
    assert_eq!(detect(&[0xFF, 0x0A]), Some(ImageFormat::JpegXl));
    let jxl = [
        0x00, 0x00, 0x00, 0x0C, 0x4A, 0x58, 0x4C, 0x20, 0x0D, 0x0A, 0x87, 0x0A,
    ];
    assert_eq!(detect(&jxl), Some(ImageFormat::JpegXl));
    assert_eq!(detect(b"GIF89a"), None);
    assert_eq!(detect(&[]), None);
    assert_eq!(detect(&[0x89, 0x50]), None);
}

#[test]
fn extension_filter() {
    assert!(is_image_file(Path::new("/tmp/a.png")));
    assert!(is_image_file(Path::new("/tmp/a.PNG")));
    assert!(is_image_file(Path::new("/tmp/b.JpEg")));
    assert!(is_image_file(Path::new("/tmp/c.hif")));
    assert!(!is_image_file(Path::new("/tmp/d.txt")));
    assert!(!is_image_file(Path::new("/tmp/png")));
}

fn chunk(ty: &[u8; 4], data: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(ty);
    out.extend_from_slice(data);
    out.extend_from_slice(&[0, 0, 0, 0]);
    out
}

fn png(chunks: &[Vec<u8>]) -> Vec<u8> {
    let mut out = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
    for c in chunks {
        out.extend_from_slice(c);
    }
    out
}

#[test]
fn png_cicp() {
    let ihdr = chunk(b"IHDR", &[0; 13]);
    let idat = chunk(b"IDAT", &[0; 16]);
    let pq = chunk(b"cICP", &[9, 16, 0, 1]);
    let hlg = chunk(b"cICP", &[9, 18, 0, 1]);
    let srgb = chunk(b"cICP", &[1, 13, 0, 1]);

    let file = png(&[ihdr.clone(), pq, idat.clone()]);
    assert!(png_is_hdr(&mut Cursor::new(file)).unwrap());

    let file = png(&[ihdr.clone(), hlg, idat.clone()]);
    assert!(png_is_hdr(&mut Cursor::new(file)).unwrap());

    let file = png(&[ihdr.clone(), srgb, idat.clone()]);
    assert!(!png_is_hdr(&mut Cursor::new(file)).unwrap());

    let file = png(&[ihdr.clone(), idat]);
    assert!(!png_is_hdr(&mut Cursor::new(file)).unwrap());

    let file = png(&[ihdr]);
    assert!(png_is_hdr(&mut Cursor::new(file)).is_err());
}
