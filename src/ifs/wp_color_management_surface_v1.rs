use {
    crate::{
        cmm::{
            cmm_luminance::{Luminance, TargetLuminance},
            cmm_primaries::NamedPrimaries,
            cmm_transfer_function::TransferFunction,
        },
        colors::{ColorMode, UiEvent, WindowId},
        ifs::{
            wp_color_management_surface_feedback_v1::WpColorManagementSurfaceFeedbackV1,
            wp_image_description_v1::{DescriptionOwner, PendingDescription},
        },
        state::State,
        utils::numcell::NumCell,
        wire::{
            NativeSurface, WpColorManagementSurfaceV1Id,
            consts::RENDER_INTENT_PERCEPTUAL,
            wp_color_management_surface_v1::{Destroy, UnsetImageDescription},
        },
    },
    std::{cell::Cell, rc::Rc},
};

/// The color-management binding of one native surface.
pub struct WpColorManagementSurfaceV1 {
    pub id: WpColorManagementSurfaceV1Id,
    pub state: Rc<State>,
    pub window: WindowId,
    pub native: NativeSurface,
    /// Bumped by every mode request. Creation requests capture the value at
    /// issue time and results are applied only while it still matches.
    pub generation: NumCell<u64>,
    pub feedback: Rc<WpColorManagementSurfaceFeedbackV1>,
}

struct ModeParameters {
    primaries: NamedPrimaries,
    tf: TransferFunction,
    luminance: Option<Luminance>,
    mastering: Option<TargetLuminance>,
}

fn mode_parameters(mode: ColorMode) -> Option<ModeParameters> {
    let params = match mode {
        ColorMode::Default => return None,
        ColorMode::SrgbGamma22 => ModeParameters {
            primaries: NamedPrimaries::Srgb,
            tf: TransferFunction::Gamma22,
            luminance: Some(Luminance {
                min: 0.0,
                max: 200.0,
                reference: 100.0,
            }),
            mastering: Some(TargetLuminance {
                min: 0.0,
                max: 200.0,
            }),
        },
        ColorMode::Bt2020Gamma22 => ModeParameters {
            primaries: NamedPrimaries::Bt2020,
            tf: TransferFunction::Gamma22,
            luminance: None,
            mastering: None,
        },
        ColorMode::Bt2020Pq => ModeParameters {
            primaries: NamedPrimaries::Bt2020,
            tf: TransferFunction::St2084Pq,
            luminance: None,
            mastering: None,
        },
        ColorMode::PalM => ModeParameters {
            primaries: NamedPrimaries::PalM,
            tf: TransferFunction::Gamma22,
            luminance: None,
            mastering: None,
        },
        ColorMode::Cie1931Xyz => ModeParameters {
            primaries: NamedPrimaries::Cie1931Xyz,
            tf: TransferFunction::Gamma22,
            luminance: None,
            mastering: None,
        },
        ColorMode::PqCustom(reference_lum) => ModeParameters {
            primaries: NamedPrimaries::Bt2020,
            tf: TransferFunction::St2084Pq,
            luminance: Some(Luminance {
                min: 0.0,
                max: 10000.0,
                reference: reference_lum as f64,
            }),
            mastering: Some(TargetLuminance {
                min: 0.0,
                max: 1000.0,
            }),
        },
    };
    Some(params)
}

impl WpColorManagementSurfaceV1 {
    pub fn new(
        id: WpColorManagementSurfaceV1Id,
        state: &Rc<State>,
        window: WindowId,
        native: NativeSurface,
        feedback: Rc<WpColorManagementSurfaceFeedbackV1>,
    ) -> Self {
        Self {
            id,
            state: state.clone(),
            window,
            native,
            generation: Default::default(),
            feedback,
        }
    }

    /// Reverts the surface to the compositor's default description.
    pub fn set_default_mode(&self) {
        self.apply(ColorMode::Default);
    }

    /// Requests a description built from the fixed parameter table.
    pub fn set_parametric_mode(&self, mode: ColorMode) {
        self.apply(mode);
    }

    /// Requests an HDR10 description with the given reference luminance.
    pub fn set_pq_mode(&self, reference_lum: u32) {
        self.apply(ColorMode::PqCustom(reference_lum));
    }

    fn apply(&self, mode: ColorMode) {
        let generation = self.generation.fetch_add(1) + 1;
        match mode_parameters(mode) {
            None => {
                self.state
                    .conn
                    .submit(UnsetImageDescription { self_id: self.id });
                self.state.ui.send_event(UiEvent::Redraw(self.window));
            }
            Some(params) => self.create_description(&params, generation),
        }
    }

    fn create_description(&self, params: &ModeParameters, generation: u64) {
        let Some(manager) = self.state.color_manager.get() else {
            return;
        };
        let creator = manager.create_parametric_creator();
        creator.set_primaries_named(params.primaries);
        creator.set_tf_named(params.tf);
        if let Some(lum) = &params.luminance {
            creator.set_luminances(lum);
        }
        if let Some(lum) = &params.mastering {
            creator.set_mastering_luminance(lum);
        }
        let desc = creator.create();
        let pending = Rc::new(PendingDescription {
            state: self.state.clone(),
            window: self.window,
            surface_id: self.id,
            generation,
            render_intent: RENDER_INTENT_PERCEPTUAL,
            valid: Cell::new(true),
        });
        desc.owner
            .set(Some(DescriptionOwner::Pending(pending.clone())));
        self.state.conn.pendings.set(desc.id, pending);
    }

    pub fn destroy(&self) {
        for (_, pending) in self.state.conn.pendings.lock().iter() {
            if pending.surface_id == self.id {
                pending.valid.set(false);
            }
        }
        self.feedback.destroy();
        self.state.conn.submit(Destroy { self_id: self.id });
        self.state.conn.release_id(self.id.into());
    }
}
