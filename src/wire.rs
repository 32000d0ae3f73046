//! Typed messages for the color-management protocol family.
//!
//! The embedding runtime owns the socket and the registry. This module only
//! describes the messages the engine exchanges with it: requests submitted
//! through a [`Transport`](crate::conn::Transport) and events injected via
//! [`State::dispatch`](crate::state::State::dispatch).

use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, Hash, Ord, PartialOrd, Eq, PartialEq)]
pub struct ObjectId(u32);

impl ObjectId {
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u32 {
        self.0
    }
}

impl Display for ObjectId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Copy, Clone, Hash, Ord, PartialOrd, Eq, PartialEq)]
pub struct Version(pub u32);

/// Opaque token by which the embedding runtime identifies a native surface.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub struct NativeSurface(pub u64);

id!(WpColorManagerV1Id);
id!(WpColorManagementSurfaceV1Id);
id!(WpColorManagementSurfaceFeedbackV1Id);
id!(WpImageDescriptionV1Id);
id!(WpImageDescriptionCreatorParamsV1Id);
id!(WpImageDescriptionInfoV1Id);

pub mod consts {
    pub const RENDER_INTENT_PERCEPTUAL: u32 = 0;
    pub const RENDER_INTENT_RELATIVE: u32 = 1;
    pub const RENDER_INTENT_SATURATION: u32 = 2;
    pub const RENDER_INTENT_ABSOLUTE: u32 = 3;
    pub const RENDER_INTENT_RELATIVE_BPC: u32 = 4;

    pub const FEATURE_ICC_V2_V4: u32 = 0;
    pub const FEATURE_PARAMETRIC: u32 = 1;
    pub const FEATURE_SET_PRIMARIES: u32 = 2;
    pub const FEATURE_SET_TF_POWER: u32 = 3;
    pub const FEATURE_SET_LUMINANCES: u32 = 4;
    pub const FEATURE_SET_MASTERING_DISPLAY_PRIMARIES: u32 = 5;
    pub const FEATURE_EXTENDED_TARGET_VOLUME: u32 = 6;
    pub const FEATURE_WINDOWS_SCRGB: u32 = 7;

    pub const PRIMARIES_SRGB: u32 = 1;
    pub const PRIMARIES_PAL_M: u32 = 2;
    pub const PRIMARIES_PAL: u32 = 3;
    pub const PRIMARIES_NTSC: u32 = 4;
    pub const PRIMARIES_GENERIC_FILM: u32 = 5;
    pub const PRIMARIES_BT2020: u32 = 6;
    pub const PRIMARIES_CIE1931_XYZ: u32 = 7;
    pub const PRIMARIES_DCI_P3: u32 = 8;
    pub const PRIMARIES_DISPLAY_P3: u32 = 9;
    pub const PRIMARIES_ADOBE_RGB: u32 = 10;

    pub const TRANSFER_FUNCTION_BT1886: u32 = 1;
    pub const TRANSFER_FUNCTION_GAMMA22: u32 = 2;
    pub const TRANSFER_FUNCTION_GAMMA28: u32 = 3;
    pub const TRANSFER_FUNCTION_ST240: u32 = 4;
    pub const TRANSFER_FUNCTION_EXT_LINEAR: u32 = 5;
    pub const TRANSFER_FUNCTION_LOG_100: u32 = 6;
    pub const TRANSFER_FUNCTION_LOG_316: u32 = 7;
    pub const TRANSFER_FUNCTION_XVYCC: u32 = 8;
    pub const TRANSFER_FUNCTION_SRGB: u32 = 9;
    pub const TRANSFER_FUNCTION_EXT_SRGB: u32 = 10;
    pub const TRANSFER_FUNCTION_ST2084_PQ: u32 = 11;
    pub const TRANSFER_FUNCTION_ST428: u32 = 12;
    pub const TRANSFER_FUNCTION_HLG: u32 = 13;

    pub const CAUSE_LOW_VERSION: u32 = 0;
    pub const CAUSE_UNSUPPORTED: u32 = 1;
    pub const CAUSE_OPERATING_SYSTEM: u32 = 2;
    pub const CAUSE_NO_OUTPUT: u32 = 3;
}

pub mod wp_color_manager_v1 {
    use super::*;

    #[derive(Debug, Clone, Eq, PartialEq)]
    pub struct Bind {
        pub id: WpColorManagerV1Id,
        pub version: Version,
    }

    #[derive(Debug, Clone, Eq, PartialEq)]
    pub struct Destroy {
        pub self_id: WpColorManagerV1Id,
    }

    #[derive(Debug, Clone, Eq, PartialEq)]
    pub struct CreateParametricCreator {
        pub self_id: WpColorManagerV1Id,
        pub obj: WpImageDescriptionCreatorParamsV1Id,
    }

    #[derive(Debug, Clone, Eq, PartialEq)]
    pub struct GetSurface {
        pub self_id: WpColorManagerV1Id,
        pub id: WpColorManagementSurfaceV1Id,
        pub surface: NativeSurface,
    }

    #[derive(Debug, Clone, Eq, PartialEq)]
    pub struct GetSurfaceFeedback {
        pub self_id: WpColorManagerV1Id,
        pub id: WpColorManagementSurfaceFeedbackV1Id,
        pub surface: NativeSurface,
    }

    #[derive(Debug, Clone, Eq, PartialEq)]
    pub struct SupportedIntent {
        pub self_id: WpColorManagerV1Id,
        pub render_intent: u32,
    }

    #[derive(Debug, Clone, Eq, PartialEq)]
    pub struct SupportedFeature {
        pub self_id: WpColorManagerV1Id,
        pub feature: u32,
    }

    #[derive(Debug, Clone, Eq, PartialEq)]
    pub struct SupportedTfNamed {
        pub self_id: WpColorManagerV1Id,
        pub tf: u32,
    }

    #[derive(Debug, Clone, Eq, PartialEq)]
    pub struct SupportedPrimariesNamed {
        pub self_id: WpColorManagerV1Id,
        pub primaries: u32,
    }

    #[derive(Debug, Clone, Eq, PartialEq)]
    pub struct Done {
        pub self_id: WpColorManagerV1Id,
    }
}

pub mod wp_color_management_surface_v1 {
    use super::*;

    #[derive(Debug, Clone, Eq, PartialEq)]
    pub struct Destroy {
        pub self_id: WpColorManagementSurfaceV1Id,
    }

    #[derive(Debug, Clone, Eq, PartialEq)]
    pub struct SetImageDescription {
        pub self_id: WpColorManagementSurfaceV1Id,
        pub image_description: WpImageDescriptionV1Id,
        pub render_intent: u32,
    }

    #[derive(Debug, Clone, Eq, PartialEq)]
    pub struct UnsetImageDescription {
        pub self_id: WpColorManagementSurfaceV1Id,
    }
}

pub mod wp_color_management_surface_feedback_v1 {
    use super::*;

    #[derive(Debug, Clone, Eq, PartialEq)]
    pub struct Destroy {
        pub self_id: WpColorManagementSurfaceFeedbackV1Id,
    }

    #[derive(Debug, Clone, Eq, PartialEq)]
    pub struct GetPreferred {
        pub self_id: WpColorManagementSurfaceFeedbackV1Id,
        pub image_description: WpImageDescriptionV1Id,
    }

    #[derive(Debug, Clone, Eq, PartialEq)]
    pub struct PreferredChanged {
        pub self_id: WpColorManagementSurfaceFeedbackV1Id,
        pub identity: u32,
    }
}

pub mod wp_image_description_creator_params_v1 {
    use super::*;

    #[derive(Debug, Clone, Eq, PartialEq)]
    pub struct Create {
        pub self_id: WpImageDescriptionCreatorParamsV1Id,
        pub image_description: WpImageDescriptionV1Id,
    }

    #[derive(Debug, Clone, Eq, PartialEq)]
    pub struct SetTfNamed {
        pub self_id: WpImageDescriptionCreatorParamsV1Id,
        pub tf: u32,
    }

    #[derive(Debug, Clone, Eq, PartialEq)]
    pub struct SetPrimariesNamed {
        pub self_id: WpImageDescriptionCreatorParamsV1Id,
        pub primaries: u32,
    }

    #[derive(Debug, Clone, Eq, PartialEq)]
    pub struct SetLuminances {
        pub self_id: WpImageDescriptionCreatorParamsV1Id,
        pub min_lum: u32,
        pub max_lum: u32,
        pub reference_lum: u32,
    }

    #[derive(Debug, Clone, Eq, PartialEq)]
    pub struct SetMasteringLuminance {
        pub self_id: WpImageDescriptionCreatorParamsV1Id,
        pub min_lum: u32,
        pub max_lum: u32,
    }
}

pub mod wp_image_description_v1 {
    use super::*;

    #[derive(Debug, Clone, Eq, PartialEq)]
    pub struct Destroy {
        pub self_id: WpImageDescriptionV1Id,
    }

    #[derive(Debug, Clone, Eq, PartialEq)]
    pub struct GetInformation {
        pub self_id: WpImageDescriptionV1Id,
        pub information: WpImageDescriptionInfoV1Id,
    }

    #[derive(Debug, Clone, Eq, PartialEq)]
    pub struct Failed {
        pub self_id: WpImageDescriptionV1Id,
        pub cause: u32,
        pub description: String,
    }

    #[derive(Debug, Clone, Eq, PartialEq)]
    pub struct Ready {
        pub self_id: WpImageDescriptionV1Id,
        pub identity: u32,
    }
}

pub mod wp_image_description_info_v1 {
    use super::*;

    #[derive(Debug, Clone, Eq, PartialEq)]
    pub struct Done {
        pub self_id: WpImageDescriptionInfoV1Id,
    }

    #[derive(Debug, Clone, Eq, PartialEq)]
    pub struct Primaries {
        pub self_id: WpImageDescriptionInfoV1Id,
        pub r_x: i32,
        pub r_y: i32,
        pub g_x: i32,
        pub g_y: i32,
        pub b_x: i32,
        pub b_y: i32,
        pub w_x: i32,
        pub w_y: i32,
    }

    #[derive(Debug, Clone, Eq, PartialEq)]
    pub struct PrimariesNamed {
        pub self_id: WpImageDescriptionInfoV1Id,
        pub primaries: u32,
    }

    #[derive(Debug, Clone, Eq, PartialEq)]
    pub struct TfPower {
        pub self_id: WpImageDescriptionInfoV1Id,
        pub eexp: u32,
    }

    #[derive(Debug, Clone, Eq, PartialEq)]
    pub struct TfNamed {
        pub self_id: WpImageDescriptionInfoV1Id,
        pub tf: u32,
    }

    #[derive(Debug, Clone, Eq, PartialEq)]
    pub struct Luminances {
        pub self_id: WpImageDescriptionInfoV1Id,
        pub min_lum: u32,
        pub max_lum: u32,
        pub reference_lum: u32,
    }

    #[derive(Debug, Clone, Eq, PartialEq)]
    pub struct TargetPrimaries {
        pub self_id: WpImageDescriptionInfoV1Id,
        pub r_x: i32,
        pub r_y: i32,
        pub g_x: i32,
        pub g_y: i32,
        pub b_x: i32,
        pub b_y: i32,
        pub w_x: i32,
        pub w_y: i32,
    }

    #[derive(Debug, Clone, Eq, PartialEq)]
    pub struct TargetLuminance {
        pub self_id: WpImageDescriptionInfoV1Id,
        pub min_lum: u32,
        pub max_lum: u32,
    }

    #[derive(Debug, Clone, Eq, PartialEq)]
    pub struct TargetMaxCll {
        pub self_id: WpImageDescriptionInfoV1Id,
        pub max_cll: u32,
    }

    #[derive(Debug, Clone, Eq, PartialEq)]
    pub struct TargetMaxFall {
        pub self_id: WpImageDescriptionInfoV1Id,
        pub max_fall: u32,
    }
}

macro_rules! messages {
    ($enum_:ident; $($mod_:ident::$msg:ident => $variant:ident,)*) => {
        #[derive(Debug, Clone, Eq, PartialEq)]
        pub enum $enum_ {
            $($variant($mod_::$msg),)*
        }

        $(
            impl From<$mod_::$msg> for $enum_ {
                fn from(msg: $mod_::$msg) -> Self {
                    Self::$variant(msg)
                }
            }
        )*
    };
}

messages! {
    Request;
    wp_color_manager_v1::Bind => Bind,
    wp_color_manager_v1::Destroy => ManagerDestroy,
    wp_color_manager_v1::CreateParametricCreator => CreateParametricCreator,
    wp_color_manager_v1::GetSurface => GetSurface,
    wp_color_manager_v1::GetSurfaceFeedback => GetSurfaceFeedback,
    wp_color_management_surface_v1::Destroy => SurfaceDestroy,
    wp_color_management_surface_v1::SetImageDescription => SetImageDescription,
    wp_color_management_surface_v1::UnsetImageDescription => UnsetImageDescription,
    wp_color_management_surface_feedback_v1::Destroy => FeedbackDestroy,
    wp_color_management_surface_feedback_v1::GetPreferred => GetPreferred,
    wp_image_description_creator_params_v1::Create => CreatorCreate,
    wp_image_description_creator_params_v1::SetTfNamed => SetTfNamed,
    wp_image_description_creator_params_v1::SetPrimariesNamed => SetPrimariesNamed,
    wp_image_description_creator_params_v1::SetLuminances => SetLuminances,
    wp_image_description_creator_params_v1::SetMasteringLuminance => SetMasteringLuminance,
    wp_image_description_v1::Destroy => DescriptionDestroy,
    wp_image_description_v1::GetInformation => GetInformation,
}

messages! {
    Event;
    wp_color_manager_v1::SupportedIntent => SupportedIntent,
    wp_color_manager_v1::SupportedFeature => SupportedFeature,
    wp_color_manager_v1::SupportedTfNamed => SupportedTfNamed,
    wp_color_manager_v1::SupportedPrimariesNamed => SupportedPrimariesNamed,
    wp_color_manager_v1::Done => ManagerDone,
    wp_color_management_surface_feedback_v1::PreferredChanged => PreferredChanged,
    wp_image_description_v1::Failed => DescriptionFailed,
    wp_image_description_v1::Ready => DescriptionReady,
    wp_image_description_info_v1::Done => InfoDone,
    wp_image_description_info_v1::Primaries => InfoPrimaries,
    wp_image_description_info_v1::PrimariesNamed => InfoPrimariesNamed,
    wp_image_description_info_v1::TfPower => InfoTfPower,
    wp_image_description_info_v1::TfNamed => InfoTfNamed,
    wp_image_description_info_v1::Luminances => InfoLuminances,
    wp_image_description_info_v1::TargetPrimaries => InfoTargetPrimaries,
    wp_image_description_info_v1::TargetLuminance => InfoTargetLuminance,
    wp_image_description_info_v1::TargetMaxCll => InfoTargetMaxCll,
    wp_image_description_info_v1::TargetMaxFall => InfoTargetMaxFall,
}
