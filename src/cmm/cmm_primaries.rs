use crate::{
    cmm::cmm_luminance::decode_chromaticity,
    wire::consts::{
        PRIMARIES_ADOBE_RGB, PRIMARIES_BT2020, PRIMARIES_CIE1931_XYZ, PRIMARIES_DCI_P3,
        PRIMARIES_DISPLAY_P3, PRIMARIES_GENERIC_FILM, PRIMARIES_NTSC, PRIMARIES_PAL,
        PRIMARIES_PAL_M, PRIMARIES_SRGB,
    },
};

/// A chromaticity coordinate in CIE 1931 xy space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Chromaticity {
    pub x: f64,
    pub y: f64,
}

impl Chromaticity {
    pub fn from_wire(x: i32, y: i32) -> Self {
        Self {
            x: decode_chromaticity(x),
            y: decode_chromaticity(y),
        }
    }
}

/// The chromaticities of the red, green, and blue primaries and the white
/// point.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Primaries {
    pub r: Chromaticity,
    pub g: Chromaticity,
    pub b: Chromaticity,
    pub wp: Chromaticity,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum NamedPrimaries {
    Srgb,
    PalM,
    Pal,
    Ntsc,
    GenericFilm,
    Bt2020,
    Cie1931Xyz,
    DciP3,
    DisplayP3,
    AdobeRgb,
}

impl NamedPrimaries {
    pub fn code(self) -> u32 {
        match self {
            Self::Srgb => PRIMARIES_SRGB,
            Self::PalM => PRIMARIES_PAL_M,
            Self::Pal => PRIMARIES_PAL,
            Self::Ntsc => PRIMARIES_NTSC,
            Self::GenericFilm => PRIMARIES_GENERIC_FILM,
            Self::Bt2020 => PRIMARIES_BT2020,
            Self::Cie1931Xyz => PRIMARIES_CIE1931_XYZ,
            Self::DciP3 => PRIMARIES_DCI_P3,
            Self::DisplayP3 => PRIMARIES_DISPLAY_P3,
            Self::AdobeRgb => PRIMARIES_ADOBE_RGB,
        }
    }

    pub fn from_code(code: u32) -> Option<Self> {
        let named = match code {
            PRIMARIES_SRGB => Self::Srgb,
            PRIMARIES_PAL_M => Self::PalM,
            PRIMARIES_PAL => Self::Pal,
            PRIMARIES_NTSC => Self::Ntsc,
            PRIMARIES_GENERIC_FILM => Self::GenericFilm,
            PRIMARIES_BT2020 => Self::Bt2020,
            PRIMARIES_CIE1931_XYZ => Self::Cie1931Xyz,
            PRIMARIES_DCI_P3 => Self::DciP3,
            PRIMARIES_DISPLAY_P3 => Self::DisplayP3,
            PRIMARIES_ADOBE_RGB => Self::AdobeRgb,
            _ => return None,
        };
        Some(named)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Srgb => "sRGB",
            Self::PalM => "PAL-M",
            Self::Pal => "PAL",
            Self::Ntsc => "NTSC",
            Self::GenericFilm => "generic film",
            Self::Bt2020 => "BT.2020",
            Self::Cie1931Xyz => "CIE 1931 XYZ",
            Self::DciP3 => "DCI-P3",
            Self::DisplayP3 => "Display P3",
            Self::AdobeRgb => "Adobe RGB",
        }
    }
}
