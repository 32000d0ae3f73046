use {
    crate::{
        cmm::cmm_attributes::DescriptionAttributes,
        colors::{UiEvent, WindowId},
        ifs::{
            wp_color_management_surface_feedback_v1::WpColorManagementSurfaceFeedbackV1,
            wp_image_description_info_v1::WpImageDescriptionInfoV1,
        },
        state::State,
        utils::clonecell::CloneCell,
        wire::{
            WpColorManagementSurfaceV1Id, WpImageDescriptionV1Id,
            consts::{CAUSE_LOW_VERSION, CAUSE_NO_OUTPUT, CAUSE_OPERATING_SYSTEM, CAUSE_UNSUPPORTED},
            wp_color_management_surface_v1::{SetImageDescription, UnsetImageDescription},
            wp_image_description_v1::{Destroy, Failed, GetInformation, Ready},
        },
    },
    std::{cell::Cell, rc::Rc},
};

/// A compositor-side image description handle.
///
/// Attributes stay `None` until an info fetch completes; they are frozen
/// from then on.
pub struct WpImageDescriptionV1 {
    pub id: WpImageDescriptionV1Id,
    pub state: Rc<State>,
    pub owner: CloneCell<Option<DescriptionOwner>>,
    pub attributes: CloneCell<Option<Rc<DescriptionAttributes>>>,
}

/// Who is waiting for this description to resolve.
#[derive(Clone)]
pub enum DescriptionOwner {
    /// A creation request that will bind the description to a surface.
    Pending(Rc<PendingDescription>),
    /// A feedback object fetching the compositor's preferred description.
    Preferred(Rc<WpColorManagementSurfaceFeedbackV1>),
}

impl WpImageDescriptionV1 {
    pub fn new(id: WpImageDescriptionV1Id, state: &Rc<State>) -> Self {
        Self {
            id,
            state: state.clone(),
            owner: Default::default(),
            attributes: Default::default(),
        }
    }

    pub fn get_information(slf: &Rc<Self>) -> Rc<WpImageDescriptionInfoV1> {
        let info = Rc::new(WpImageDescriptionInfoV1::new(slf.state.conn.id(), slf));
        slf.state.conn.infos.set(info.id, info.clone());
        slf.state.conn.submit(GetInformation {
            self_id: slf.id,
            information: info.id,
        });
        info
    }

    pub fn handle_ready(slf: &Rc<Self>, ev: Ready) {
        match slf.owner.get() {
            Some(DescriptionOwner::Pending(pending)) => pending.ready(slf, ev.identity),
            // Preferred descriptions resolve through their info fetch.
            Some(DescriptionOwner::Preferred(_)) => {}
            None => log::debug!("ready for unowned image description {}", slf.id),
        }
    }

    pub fn handle_failed(slf: &Rc<Self>, ev: Failed) {
        log::warn!(
            "image description {} failed: {} ({})",
            slf.id,
            ev.description,
            cause_name(ev.cause),
        );
        match slf.owner.get() {
            Some(DescriptionOwner::Pending(pending)) => pending.failed(slf),
            Some(DescriptionOwner::Preferred(feedback)) => feedback.fetch_failed(slf),
            None => {}
        }
    }

    /// Called by the info fetch once the attributes are frozen.
    pub fn info_done(slf: &Rc<Self>) {
        if let Some(DescriptionOwner::Preferred(feedback)) = slf.owner.get() {
            feedback.fetch_done(slf);
        }
    }

    pub fn destroy(&self) {
        self.owner.take();
        if self.state.conn.descriptions.remove(&self.id).is_none() {
            return;
        }
        self.state.conn.submit(Destroy { self_id: self.id });
        self.state.conn.release_id(self.id.into());
    }
}

/// An in-flight description creation, waiting for the compositor to confirm
/// or reject it.
///
/// Owned by the pendings table on [`Conn`](crate::conn::Conn), keyed by the
/// id of the description being created. Cancellation flips `valid`; the
/// entry itself stays until the compositor answers.
pub struct PendingDescription {
    pub state: Rc<State>,
    pub window: WindowId,
    pub surface_id: WpColorManagementSurfaceV1Id,
    /// The surface generation this request was issued under.
    pub generation: u64,
    pub render_intent: u32,
    pub valid: Cell<bool>,
}

impl PendingDescription {
    pub fn ready(&self, desc: &Rc<WpImageDescriptionV1>, identity: u32) {
        self.state.conn.pendings.remove(&desc.id);
        if let Some(surface_id) = self.applies_to() {
            self.state.conn.submit(SetImageDescription {
                self_id: surface_id,
                image_description: desc.id,
                render_intent: self.render_intent,
            });
            self.state.ui.send_event(UiEvent::Redraw(self.window));
            log::debug!(
                "attached image description {} (identity {}) to surface {}",
                desc.id,
                identity,
                surface_id,
            );
        }
        desc.destroy();
    }

    pub fn failed(&self, desc: &Rc<WpImageDescriptionV1>) {
        self.state.conn.pendings.remove(&desc.id);
        if let Some(surface_id) = self.applies_to() {
            // Fall back to the default description instead of leaving a
            // half-applied mode in place.
            self.state
                .conn
                .submit(UnsetImageDescription { self_id: surface_id });
            self.state.ui.send_event(UiEvent::Redraw(self.window));
        }
        desc.destroy();
    }

    /// The target surface, if the result should still be applied. `None` if
    /// the request was cancelled, the window or binding went away, or a
    /// newer mode request superseded this one.
    fn applies_to(&self) -> Option<WpColorManagementSurfaceV1Id> {
        if !self.valid.get() {
            return None;
        }
        let data = self.state.windows.get(&self.window)?;
        let surface = data.surface.get()?;
        if surface.id != self.surface_id || surface.generation.get() != self.generation {
            return None;
        }
        Some(surface.id)
    }
}

fn cause_name(cause: u32) -> &'static str {
    match cause {
        CAUSE_LOW_VERSION => "low version",
        CAUSE_UNSUPPORTED => "unsupported",
        CAUSE_OPERATING_SYSTEM => "operating system",
        CAUSE_NO_OUTPUT => "no output",
        _ => "unknown cause",
    }
}
