use crate::wire::consts::{
    TRANSFER_FUNCTION_BT1886, TRANSFER_FUNCTION_EXT_LINEAR, TRANSFER_FUNCTION_EXT_SRGB,
    TRANSFER_FUNCTION_GAMMA22, TRANSFER_FUNCTION_GAMMA28, TRANSFER_FUNCTION_HLG,
    TRANSFER_FUNCTION_LOG_100, TRANSFER_FUNCTION_LOG_316, TRANSFER_FUNCTION_SRGB,
    TRANSFER_FUNCTION_ST240, TRANSFER_FUNCTION_ST428, TRANSFER_FUNCTION_ST2084_PQ,
    TRANSFER_FUNCTION_XVYCC,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TransferFunction {
    Bt1886,
    Gamma22,
    Gamma28,
    St240,
    ExtLinear,
    Log100,
    Log316,
    Xvycc,
    Srgb,
    ExtSrgb,
    St2084Pq,
    St428,
    Hlg,
}

impl TransferFunction {
    pub fn code(self) -> u32 {
        match self {
            Self::Bt1886 => TRANSFER_FUNCTION_BT1886,
            Self::Gamma22 => TRANSFER_FUNCTION_GAMMA22,
            Self::Gamma28 => TRANSFER_FUNCTION_GAMMA28,
            Self::St240 => TRANSFER_FUNCTION_ST240,
            Self::ExtLinear => TRANSFER_FUNCTION_EXT_LINEAR,
            Self::Log100 => TRANSFER_FUNCTION_LOG_100,
            Self::Log316 => TRANSFER_FUNCTION_LOG_316,
            Self::Xvycc => TRANSFER_FUNCTION_XVYCC,
            Self::Srgb => TRANSFER_FUNCTION_SRGB,
            Self::ExtSrgb => TRANSFER_FUNCTION_EXT_SRGB,
            Self::St2084Pq => TRANSFER_FUNCTION_ST2084_PQ,
            Self::St428 => TRANSFER_FUNCTION_ST428,
            Self::Hlg => TRANSFER_FUNCTION_HLG,
        }
    }

    pub fn from_code(code: u32) -> Option<Self> {
        let tf = match code {
            TRANSFER_FUNCTION_BT1886 => Self::Bt1886,
            TRANSFER_FUNCTION_GAMMA22 => Self::Gamma22,
            TRANSFER_FUNCTION_GAMMA28 => Self::Gamma28,
            TRANSFER_FUNCTION_ST240 => Self::St240,
            TRANSFER_FUNCTION_EXT_LINEAR => Self::ExtLinear,
            TRANSFER_FUNCTION_LOG_100 => Self::Log100,
            TRANSFER_FUNCTION_LOG_316 => Self::Log316,
            TRANSFER_FUNCTION_XVYCC => Self::Xvycc,
            TRANSFER_FUNCTION_SRGB => Self::Srgb,
            TRANSFER_FUNCTION_EXT_SRGB => Self::ExtSrgb,
            TRANSFER_FUNCTION_ST2084_PQ => Self::St2084Pq,
            TRANSFER_FUNCTION_ST428 => Self::St428,
            TRANSFER_FUNCTION_HLG => Self::Hlg,
            _ => return None,
        };
        Some(tf)
    }

    /// The label used in capability summaries. Only transfer functions the
    /// viewer can request get a descriptive label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Gamma22 => "gamma 2.2 (sRGB)",
            Self::St2084Pq => "PQ (HDR10)",
            _ => "unknown",
        }
    }
}
