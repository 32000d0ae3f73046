#[cfg(test)]
mod tests;

use {
    byteorder::{BigEndian, ReadBytesExt},
    std::{
        fs::File,
        io::{self, Read, Seek, SeekFrom},
        path::Path,
    },
    thiserror::Error,
};

const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
const JXL_CONTAINER_SIGNATURE: [u8; 12] = [
    0x00, 0x00, 0x00, 0x0C, 0x4A, 0x58, 0x4C, 0x20, 0x0D, 0x0A, 0x87, 0x0A,
];

/// PQ and HLG transfer characteristics from H.273.
const CICP_TF_PQ: u8 = 16;
const CICP_TF_HLG: u8 = 18;

const IMAGE_EXTENSIONS: [&str; 10] = [
    "png", "jpg", "jpeg", "avif", "heic", "heif", "hif", "jxl", "tiff", "tif",
];

#[derive(Debug, Error)]
pub enum FormatsError {
    #[error("Could not open the file")]
    Open(#[source] io::Error),
    #[error("Could not read the file header")]
    ReadHeader(#[source] io::Error),
    #[error("The file is not in a supported image format")]
    Unrecognized,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Tiff,
    Avif,
    Heic,
    JpegXl,
}

impl ImageFormat {
    pub fn name(self) -> &'static str {
        match self {
            Self::Png => "PNG",
            Self::Jpeg => "JPEG",
            Self::Tiff => "TIFF",
            Self::Avif => "AVIF",
            Self::Heic => "HEIC",
            Self::JpegXl => "JPEG-XL",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ImageInfo {
    pub format: ImageFormat,
    pub hdr: bool,
}

/// True if the path has one of the supported image extensions. Used for
/// directory filtering; actual classification goes by magic bytes.
pub fn is_image_file(path: &Path) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    IMAGE_EXTENSIONS.iter().any(|c| ext.eq_ignore_ascii_case(c))
}

/// Classifies the file by its magic bytes and determines whether it carries
/// HDR content.
pub fn classify(path: &Path) -> Result<ImageInfo, FormatsError> {
    let mut file = File::open(path).map_err(FormatsError::Open)?;
    let mut header = Vec::new();
    file.by_ref()
        .take(12)
        .read_to_end(&mut header)
        .map_err(FormatsError::ReadHeader)?;
    let Some(format) = detect(&header) else {
        return Err(FormatsError::Unrecognized);
    };
    let hdr = match format {
        ImageFormat::Png => png_is_hdr(&mut file).unwrap_or(false),
        // JPEG is always SDR. HDR metadata extraction for the remaining
        // containers is not implemented.
        _ => false,
    };
    log::debug!(
        "detected format {} (hdr: {}) for {}",
        format.name(),
        hdr,
        path.display(),
    );
    Ok(ImageInfo { format, hdr })
}

fn detect(header: &[u8]) -> Option<ImageFormat> {
    if header.starts_with(&PNG_SIGNATURE) {
        return Some(ImageFormat::Png);
    }
    if header.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return Some(ImageFormat::Jpeg);
    }
    if header.starts_with(b"II\x2A\x00") || header.starts_with(b"MM\x00\x2A") {
        return Some(ImageFormat::Tiff);
    }
    if header.len() >= 12 && &header[4..8] == b"ftyp" {
        match &header[8..12] {
            b"avif" | b"avis" => return Some(ImageFormat::Avif),
            b"heic" | b"heix" | b"hevc" | b"hevx" | b"mif1" => return Some(ImageFormat::Heic),
            _ => {}
        }
    }
    if header.starts_with(&[0xFF, 0x0A]) || header.starts_with(&JXL_CONTAINER_SIGNATURE) {
        return Some(ImageFormat::JpegXl);
    }
    None
}

/// Scans the chunks before the image data for a cICP chunk declaring a PQ
/// or HLG transfer characteristic.
fn png_is_hdr<R: Read + Seek>(file: &mut R) -> io::Result<bool> {
    file.seek(SeekFrom::Start(PNG_SIGNATURE.len() as u64))?;
    loop {
        let len = file.read_u32::<BigEndian>()?;
        let mut ty = [0u8; 4];
        file.read_exact(&mut ty)?;
        match &ty {
            b"cICP" => {
                if len < 4 {
                    return Ok(false);
                }
                let mut cicp = [0u8; 4];
                file.read_exact(&mut cicp)?;
                return Ok(matches!(cicp[1], CICP_TF_PQ | CICP_TF_HLG));
            }
            b"IDAT" | b"IEND" => return Ok(false),
            _ => {
                // Skip the chunk data and the CRC.
                file.seek(SeekFrom::Current(len as i64 + 4))?;
            }
        }
    }
}
