use {
    crate::{
        colors::{UiEvent, WindowId},
        ifs::wp_image_description_v1::{DescriptionOwner, WpImageDescriptionV1},
        state::State,
        utils::{clonecell::CloneCell, numcell::NumCell, smallmap::SmallMap},
        wire::{
            WpColorManagementSurfaceFeedbackV1Id, WpImageDescriptionV1Id,
            wp_color_management_surface_feedback_v1::{Destroy, GetPreferred, PreferredChanged},
        },
    },
    std::{cell::Cell, rc::Rc},
};

/// Tracks the description the compositor prefers for one surface.
///
/// Fetches overlap when `preferred_changed` arrives while an earlier fetch
/// is still in flight. Every fetch carries a sequence number and the highest
/// completed sequence wins; completions for lower sequences are discarded no
/// matter when they arrive.
pub struct WpColorManagementSurfaceFeedbackV1 {
    pub id: WpColorManagementSurfaceFeedbackV1Id,
    pub state: Rc<State>,
    pub window: WindowId,
    seq: NumCell<u64>,
    adopted_seq: Cell<u64>,
    fetches: SmallMap<WpImageDescriptionV1Id, u64, 2>,
    preferred: CloneCell<Option<Rc<WpImageDescriptionV1>>>,
}

impl WpColorManagementSurfaceFeedbackV1 {
    pub fn new(
        id: WpColorManagementSurfaceFeedbackV1Id,
        state: &Rc<State>,
        window: WindowId,
    ) -> Self {
        Self {
            id,
            state: state.clone(),
            window,
            seq: Default::default(),
            adopted_seq: Cell::new(0),
            fetches: Default::default(),
            preferred: Default::default(),
        }
    }

    /// Starts fetching the current preferred description and its attributes.
    pub fn fetch_preferred(slf: &Rc<Self>) {
        let seq = slf.seq.fetch_add(1) + 1;
        let desc: Rc<WpImageDescriptionV1> = Rc::new(WpImageDescriptionV1::new(
            slf.state.conn.id(),
            &slf.state,
        ));
        desc.owner
            .set(Some(DescriptionOwner::Preferred(slf.clone())));
        slf.state.conn.descriptions.set(desc.id, desc.clone());
        slf.state.conn.submit(GetPreferred {
            self_id: slf.id,
            image_description: desc.id,
        });
        WpImageDescriptionV1::get_information(&desc);
        slf.fetches.insert(desc.id, seq);
    }

    pub fn handle_preferred_changed(slf: &Rc<Self>, ev: PreferredChanged) {
        log::debug!(
            "preferred description of surface feedback {} changed (identity {})",
            slf.id,
            ev.identity,
        );
        Self::fetch_preferred(slf);
    }

    /// Called when a fetch's attributes are complete.
    pub fn fetch_done(&self, desc: &Rc<WpImageDescriptionV1>) {
        let Some(seq) = self.fetches.remove(&desc.id) else {
            desc.destroy();
            return;
        };
        desc.owner.take();
        if seq <= self.adopted_seq.get() {
            log::debug!("discarding superseded preferred description {}", desc.id);
            desc.destroy();
            return;
        }
        self.adopted_seq.set(seq);
        if let Some(old) = self.preferred.set(Some(desc.clone())) {
            old.destroy();
        }
        self.state
            .ui
            .send_event(UiEvent::PreferredChanged(self.window));
    }

    pub fn fetch_failed(&self, desc: &Rc<WpImageDescriptionV1>) {
        self.fetches.remove(&desc.id);
        desc.destroy();
    }

    /// The most recently adopted preferred description, if any fetch has
    /// completed yet.
    pub fn preferred(&self) -> Option<Rc<WpImageDescriptionV1>> {
        self.preferred.get()
    }

    pub fn destroy(&self) {
        for (id, _) in self.fetches.take() {
            if let Some(desc) = self.state.conn.descriptions.get(&id) {
                desc.destroy();
            }
        }
        if let Some(desc) = self.preferred.take() {
            desc.destroy();
        }
        self.state.conn.feedbacks.remove(&self.id);
        self.state.conn.submit(Destroy { self_id: self.id });
        self.state.conn.release_id(self.id.into());
    }
}
