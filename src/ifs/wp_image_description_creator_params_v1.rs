use {
    crate::{
        cmm::{
            cmm_luminance::{Luminance, TargetLuminance, encode_min_luminance},
            cmm_primaries::NamedPrimaries,
            cmm_transfer_function::TransferFunction,
        },
        ifs::wp_image_description_v1::WpImageDescriptionV1,
        state::State,
        wire::{
            WpImageDescriptionCreatorParamsV1Id,
            consts::{FEATURE_SET_LUMINANCES, FEATURE_SET_MASTERING_DISPLAY_PRIMARIES},
            wp_image_description_creator_params_v1::{
                Create, SetLuminances, SetMasteringLuminance, SetPrimariesNamed, SetTfNamed,
            },
        },
    },
    std::rc::Rc,
};

/// A parametric image-description builder.
///
/// Receives no events; it exists to batch the parameter requests that
/// precede `create`. `create` consumes it, both here and in the protocol.
pub struct WpImageDescriptionCreatorParamsV1 {
    pub id: WpImageDescriptionCreatorParamsV1Id,
    pub state: Rc<State>,
}

impl WpImageDescriptionCreatorParamsV1 {
    pub fn new(id: WpImageDescriptionCreatorParamsV1Id, state: &Rc<State>) -> Self {
        Self {
            id,
            state: state.clone(),
        }
    }

    pub fn set_primaries_named(&self, primaries: NamedPrimaries) {
        if let Some(manager) = self.state.color_manager.get()
            && manager.caps_done()
            && !manager.supports_primaries(primaries)
        {
            log::warn!("compositor does not advertise {} primaries", primaries.name());
        }
        self.state.conn.submit(SetPrimariesNamed {
            self_id: self.id,
            primaries: primaries.code(),
        });
    }

    pub fn set_tf_named(&self, tf: TransferFunction) {
        if let Some(manager) = self.state.color_manager.get()
            && manager.caps_done()
            && !manager.supports_tf(tf)
        {
            log::warn!("compositor does not advertise transfer function {:?}", tf);
        }
        self.state.conn.submit(SetTfNamed {
            self_id: self.id,
            tf: tf.code(),
        });
    }

    pub fn set_luminances(&self, lum: &Luminance) {
        self.warn_missing_feature(FEATURE_SET_LUMINANCES, "custom luminance ranges");
        self.state.conn.submit(SetLuminances {
            self_id: self.id,
            min_lum: encode_min_luminance(lum.min),
            max_lum: lum.max.round() as u32,
            reference_lum: lum.reference.round() as u32,
        });
    }

    pub fn set_mastering_luminance(&self, lum: &TargetLuminance) {
        self.warn_missing_feature(
            FEATURE_SET_MASTERING_DISPLAY_PRIMARIES,
            "mastering luminance ranges",
        );
        self.state.conn.submit(SetMasteringLuminance {
            self_id: self.id,
            min_lum: encode_min_luminance(lum.min),
            max_lum: lum.max.round() as u32,
        });
    }

    /// Issues `create`, consuming the builder. The returned description is
    /// not usable until the compositor confirms it with `ready`.
    pub fn create(self: Rc<Self>) -> Rc<WpImageDescriptionV1> {
        let desc: Rc<WpImageDescriptionV1> = Rc::new(WpImageDescriptionV1::new(
            self.state.conn.id(),
            &self.state,
        ));
        self.state.conn.descriptions.set(desc.id, desc.clone());
        self.state.conn.submit(Create {
            self_id: self.id,
            image_description: desc.id,
        });
        self.state.conn.release_id(self.id.into());
        desc
    }

    fn warn_missing_feature(&self, feature: u32, what: &str) {
        if let Some(manager) = self.state.color_manager.get()
            && manager.caps_done()
            && !manager.supports_feature(feature)
        {
            log::warn!("compositor does not advertise support for {}", what);
        }
    }
}
