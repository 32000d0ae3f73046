use {
    crate::{
        cmm::{
            cmm_attributes::DescriptionAttributes,
            cmm_luminance::{Luminance, TargetLuminance, decode_min_luminance},
            cmm_primaries::{Chromaticity, NamedPrimaries, Primaries},
            cmm_transfer_function::TransferFunction,
        },
        ifs::wp_image_description_v1::WpImageDescriptionV1,
        state::State,
        wire::{WpImageDescriptionInfoV1Id, wp_image_description_info_v1 as info},
    },
    std::{cell::RefCell, rc::Rc},
};

/// A one-shot information fetch for an image description.
///
/// Events accumulate in `staging` until the terminal `done` event freezes
/// them into the description. The compositor destroys the object after
/// `done`, so the client side only drops its handle.
pub struct WpImageDescriptionInfoV1 {
    pub id: WpImageDescriptionInfoV1Id,
    pub state: Rc<State>,
    pub description: Rc<WpImageDescriptionV1>,
    staging: RefCell<DescriptionAttributes>,
}

impl WpImageDescriptionInfoV1 {
    pub fn new(id: WpImageDescriptionInfoV1Id, description: &Rc<WpImageDescriptionV1>) -> Self {
        Self {
            id,
            state: description.state.clone(),
            description: description.clone(),
            staging: Default::default(),
        }
    }

    pub fn handle_primaries(&self, ev: info::Primaries) {
        self.staging.borrow_mut().primaries = decode_primaries(
            ev.r_x, ev.r_y, ev.g_x, ev.g_y, ev.b_x, ev.b_y, ev.w_x, ev.w_y,
        );
    }

    pub fn handle_primaries_named(&self, ev: info::PrimariesNamed) {
        match NamedPrimaries::from_code(ev.primaries) {
            Some(named) => self.staging.borrow_mut().named_primaries = Some(named),
            None => log::debug!(
                "description info {}: unknown named primaries {}",
                self.id,
                ev.primaries,
            ),
        }
    }

    pub fn handle_tf_power(&self, ev: info::TfPower) {
        // Power-law functions have no named counterpart. The transfer
        // function stays unknown.
        log::debug!(
            "description info {}: power-law transfer function, eexp {}",
            self.id,
            ev.eexp,
        );
    }

    pub fn handle_tf_named(&self, ev: info::TfNamed) {
        match TransferFunction::from_code(ev.tf) {
            Some(tf) => self.staging.borrow_mut().transfer_function = Some(tf),
            None => log::debug!(
                "description info {}: unknown transfer function {}",
                self.id,
                ev.tf,
            ),
        }
    }

    pub fn handle_luminances(&self, ev: info::Luminances) {
        self.staging.borrow_mut().luminance = Luminance {
            min: decode_min_luminance(ev.min_lum),
            max: ev.max_lum as f64,
            reference: ev.reference_lum as f64,
        };
    }

    pub fn handle_target_primaries(&self, ev: info::TargetPrimaries) {
        self.staging.borrow_mut().target_primaries = decode_primaries(
            ev.r_x, ev.r_y, ev.g_x, ev.g_y, ev.b_x, ev.b_y, ev.w_x, ev.w_y,
        );
    }

    pub fn handle_target_luminance(&self, ev: info::TargetLuminance) {
        self.staging.borrow_mut().target_luminance = TargetLuminance {
            min: decode_min_luminance(ev.min_lum),
            max: ev.max_lum as f64,
        };
    }

    pub fn handle_target_max_cll(&self, ev: info::TargetMaxCll) {
        self.staging.borrow_mut().max_cll = Some(ev.max_cll);
    }

    pub fn handle_target_max_fall(&self, ev: info::TargetMaxFall) {
        self.staging.borrow_mut().max_fall = Some(ev.max_fall);
    }

    pub fn handle_done(&self, _ev: info::Done) {
        let attributes = self.staging.take();
        self.description.attributes.set(Some(Rc::new(attributes)));
        WpImageDescriptionV1::info_done(&self.description);
        // done is a destructor event.
        self.state.conn.infos.remove(&self.id);
        self.state.conn.release_id(self.id.into());
    }
}

#[expect(clippy::too_many_arguments)]
fn decode_primaries(
    r_x: i32,
    r_y: i32,
    g_x: i32,
    g_y: i32,
    b_x: i32,
    b_y: i32,
    w_x: i32,
    w_y: i32,
) -> Primaries {
    Primaries {
        r: Chromaticity::from_wire(r_x, r_y),
        g: Chromaticity::from_wire(g_x, g_y),
        b: Chromaticity::from_wire(b_x, b_y),
        wp: Chromaticity::from_wire(w_x, w_y),
    }
}
