use {
    crate::{
        cmm::{cmm_primaries::NamedPrimaries, cmm_transfer_function::TransferFunction},
        colors::WindowId,
        ifs::{
            wp_color_management_surface_feedback_v1::WpColorManagementSurfaceFeedbackV1,
            wp_color_management_surface_v1::WpColorManagementSurfaceV1,
            wp_image_description_creator_params_v1::WpImageDescriptionCreatorParamsV1,
        },
        state::State,
        utils::numcell::NumCell,
        wire::{
            NativeSurface, Version, WpColorManagerV1Id,
            consts::FEATURE_PARAMETRIC,
            wp_color_manager_v1::{
                CreateParametricCreator, Destroy, Done, GetSurface, GetSurfaceFeedback,
                SupportedFeature, SupportedIntent, SupportedPrimariesNamed, SupportedTfNamed,
            },
        },
    },
    std::{cell::Cell, rc::Rc},
};

/// The highest protocol version this client understands.
pub const MAX_VERSION: Version = Version(1);

/// The bound color-management global.
///
/// Records the capability sets the compositor advertises and hands out the
/// per-surface protocol objects.
pub struct WpColorManagerV1 {
    pub id: WpColorManagerV1Id,
    pub state: Rc<State>,
    pub version: Version,
    supported_intents: NumCell<u32>,
    supported_features: NumCell<u32>,
    supported_tfs: NumCell<u32>,
    supported_primaries: NumCell<u32>,
    done: Cell<bool>,
}

impl WpColorManagerV1 {
    pub fn new(id: WpColorManagerV1Id, state: &Rc<State>, version: Version) -> Self {
        Self {
            id,
            state: state.clone(),
            version,
            supported_intents: Default::default(),
            supported_features: Default::default(),
            supported_tfs: Default::default(),
            supported_primaries: Default::default(),
            done: Cell::new(false),
        }
    }

    pub fn supports_feature(&self, feature: u32) -> bool {
        feature < 32 && self.supported_features.get() & (1 << feature) != 0
    }

    pub fn supports_render_intent(&self, render_intent: u32) -> bool {
        render_intent < 32 && self.supported_intents.get() & (1 << render_intent) != 0
    }

    pub fn supports_tf(&self, tf: TransferFunction) -> bool {
        self.supported_tfs.get() & (1 << tf.code()) != 0
    }

    pub fn supports_primaries(&self, primaries: NamedPrimaries) -> bool {
        self.supported_primaries.get() & (1 << primaries.code()) != 0
    }

    pub fn caps_done(&self) -> bool {
        self.done.get()
    }

    pub fn create_parametric_creator(&self) -> Rc<WpImageDescriptionCreatorParamsV1> {
        if self.done.get() && !self.supports_feature(FEATURE_PARAMETRIC) {
            log::warn!("compositor does not advertise parametric image descriptions");
        }
        let obj: Rc<WpImageDescriptionCreatorParamsV1> = Rc::new(
            WpImageDescriptionCreatorParamsV1::new(self.state.conn.id(), &self.state),
        );
        self.state.conn.submit(CreateParametricCreator {
            self_id: self.id,
            obj: obj.id,
        });
        obj
    }

    pub fn get_surface(
        &self,
        window: WindowId,
        native: NativeSurface,
    ) -> Rc<WpColorManagementSurfaceV1> {
        let id = self.state.conn.id();
        self.state.conn.submit(GetSurface {
            self_id: self.id,
            id,
            surface: native,
        });
        let feedback = self.get_surface_feedback(window, native);
        Rc::new(WpColorManagementSurfaceV1::new(
            id,
            &self.state,
            window,
            native,
            feedback,
        ))
    }

    fn get_surface_feedback(
        &self,
        window: WindowId,
        native: NativeSurface,
    ) -> Rc<WpColorManagementSurfaceFeedbackV1> {
        let id = self.state.conn.id();
        self.state.conn.submit(GetSurfaceFeedback {
            self_id: self.id,
            id,
            surface: native,
        });
        let fb = Rc::new(WpColorManagementSurfaceFeedbackV1::new(
            id,
            &self.state,
            window,
        ));
        self.state.conn.feedbacks.set(id, fb.clone());
        WpColorManagementSurfaceFeedbackV1::fetch_preferred(&fb);
        fb
    }

    pub fn handle_supported_intent(&self, ev: SupportedIntent) {
        self.record(&self.supported_intents, ev.render_intent);
    }

    pub fn handle_supported_feature(&self, ev: SupportedFeature) {
        self.record(&self.supported_features, ev.feature);
    }

    pub fn handle_supported_tf_named(&self, ev: SupportedTfNamed) {
        self.record(&self.supported_tfs, ev.tf);
    }

    pub fn handle_supported_primaries_named(&self, ev: SupportedPrimariesNamed) {
        self.record(&self.supported_primaries, ev.primaries);
    }

    pub fn handle_done(&self, _ev: Done) {
        self.done.set(true);
        log::debug!(
            "color-management capabilities: intents={:#x}, features={:#x}, tfs={:#x}, primaries={:#x}",
            self.supported_intents.get(),
            self.supported_features.get(),
            self.supported_tfs.get(),
            self.supported_primaries.get(),
        );
    }

    fn record(&self, set: &NumCell<u32>, code: u32) {
        if code < 32 {
            set.set(set.get() | 1 << code);
        } else {
            log::debug!("ignoring out-of-range capability code {}", code);
        }
    }

    pub fn destroy(&self) {
        self.state.conn.submit(Destroy { self_id: self.id });
        self.state.conn.release_id(self.id.into());
    }
}
