use {
    crate::{
        colors::{DEFAULT_PQ_REFERENCE_LUMINANCE, UiEvent, WindowData, WindowId, WindowIds},
        conn::{Conn, Transport},
        ifs::{
            wp_color_management_surface_feedback_v1::WpColorManagementSurfaceFeedbackV1,
            wp_color_manager_v1::{MAX_VERSION, WpColorManagerV1},
            wp_image_description_info_v1::WpImageDescriptionInfoV1,
            wp_image_description_v1::WpImageDescriptionV1,
        },
        utils::{clonecell::CloneCell, copyhashmap::CopyHashMap, on_change::OnChange},
        wire::{
            Event, Version, WpColorManagementSurfaceFeedbackV1Id, WpColorManagerV1Id,
            WpImageDescriptionInfoV1Id, WpImageDescriptionV1Id, wp_color_manager_v1::Bind,
        },
    },
    std::{cell::Cell, rc::Rc},
};

/// Process-wide bookkeeping shared by all protocol objects.
pub struct State {
    pub conn: Conn,
    pub color_manager: CloneCell<Option<Rc<WpColorManagerV1>>>,
    pub window_ids: WindowIds,
    pub windows: CopyHashMap<WindowId, Rc<WindowData>>,
    pub ui: OnChange<UiEvent>,
    /// Reference luminance in nits for windows without an explicit mode.
    pub default_reference_lum: Cell<u32>,
}

impl State {
    pub fn new(transport: Rc<dyn Transport>) -> Rc<Self> {
        Rc::new(Self {
            conn: Conn::new(transport),
            color_manager: Default::default(),
            window_ids: Default::default(),
            windows: Default::default(),
            ui: Default::default(),
            default_reference_lum: Cell::new(DEFAULT_PQ_REFERENCE_LUMINANCE),
        })
    }

    /// True while the compositor advertises the color-management global.
    pub fn color_manager_active(&self) -> bool {
        self.color_manager.get().is_some()
    }

    /// Called by the embedder when the registry advertises the
    /// color-management global. Binds it and applies the desired state of
    /// all windows whose native surfaces already exist.
    pub fn announce_color_manager(slf: &Rc<Self>, version: Version) {
        if slf.color_manager.get().is_some() {
            log::warn!("color-management global announced twice");
            return;
        }
        let version = version.min(MAX_VERSION);
        let id = slf.conn.id();
        slf.conn.submit(Bind { id, version });
        let manager = Rc::new(WpColorManagerV1::new(id, slf, version));
        slf.color_manager.set(Some(manager));
        log::info!(
            "bound the color-management global at version {}",
            version.0
        );
        for (_, data) in slf.windows.lock().iter() {
            slf.apply_window(data);
        }
    }

    /// Called by the embedder when the global disappears from the registry.
    /// Mode changes become no-ops from here on.
    pub fn revoke_color_manager(&self) {
        let Some(manager) = self.color_manager.take() else {
            return;
        };
        log::info!("the color-management global disappeared");
        for (_, data) in self.windows.lock().iter() {
            if let Some(surface) = data.surface.take() {
                surface.destroy();
            }
        }
        manager.destroy();
    }

    /// Routes one compositor event to the protocol object expecting it.
    /// Events for objects that no longer exist are dropped.
    pub fn dispatch(&self, event: Event) {
        match event {
            Event::SupportedIntent(ev) => {
                if let Some(manager) = self.manager(ev.self_id) {
                    manager.handle_supported_intent(ev);
                }
            }
            Event::SupportedFeature(ev) => {
                if let Some(manager) = self.manager(ev.self_id) {
                    manager.handle_supported_feature(ev);
                }
            }
            Event::SupportedTfNamed(ev) => {
                if let Some(manager) = self.manager(ev.self_id) {
                    manager.handle_supported_tf_named(ev);
                }
            }
            Event::SupportedPrimariesNamed(ev) => {
                if let Some(manager) = self.manager(ev.self_id) {
                    manager.handle_supported_primaries_named(ev);
                }
            }
            Event::ManagerDone(ev) => {
                if let Some(manager) = self.manager(ev.self_id) {
                    manager.handle_done(ev);
                }
            }
            Event::PreferredChanged(ev) => {
                if let Some(feedback) = self.feedback(ev.self_id) {
                    WpColorManagementSurfaceFeedbackV1::handle_preferred_changed(&feedback, ev);
                }
            }
            Event::DescriptionReady(ev) => {
                if let Some(desc) = self.description(ev.self_id) {
                    WpImageDescriptionV1::handle_ready(&desc, ev);
                }
            }
            Event::DescriptionFailed(ev) => {
                if let Some(desc) = self.description(ev.self_id) {
                    WpImageDescriptionV1::handle_failed(&desc, ev);
                }
            }
            Event::InfoPrimaries(ev) => {
                if let Some(info) = self.info(ev.self_id) {
                    info.handle_primaries(ev);
                }
            }
            Event::InfoPrimariesNamed(ev) => {
                if let Some(info) = self.info(ev.self_id) {
                    info.handle_primaries_named(ev);
                }
            }
            Event::InfoTfPower(ev) => {
                if let Some(info) = self.info(ev.self_id) {
                    info.handle_tf_power(ev);
                }
            }
            Event::InfoTfNamed(ev) => {
                if let Some(info) = self.info(ev.self_id) {
                    info.handle_tf_named(ev);
                }
            }
            Event::InfoLuminances(ev) => {
                if let Some(info) = self.info(ev.self_id) {
                    info.handle_luminances(ev);
                }
            }
            Event::InfoTargetPrimaries(ev) => {
                if let Some(info) = self.info(ev.self_id) {
                    info.handle_target_primaries(ev);
                }
            }
            Event::InfoTargetLuminance(ev) => {
                if let Some(info) = self.info(ev.self_id) {
                    info.handle_target_luminance(ev);
                }
            }
            Event::InfoTargetMaxCll(ev) => {
                if let Some(info) = self.info(ev.self_id) {
                    info.handle_target_max_cll(ev);
                }
            }
            Event::InfoTargetMaxFall(ev) => {
                if let Some(info) = self.info(ev.self_id) {
                    info.handle_target_max_fall(ev);
                }
            }
            Event::InfoDone(ev) => {
                if let Some(info) = self.info(ev.self_id) {
                    info.handle_done(ev);
                }
            }
        }
    }

    fn manager(&self, id: WpColorManagerV1Id) -> Option<Rc<WpColorManagerV1>> {
        match self.color_manager.get() {
            Some(manager) if manager.id == id => Some(manager),
            _ => {
                log::debug!("event for unknown color manager {}", id);
                None
            }
        }
    }

    fn feedback(
        &self,
        id: WpColorManagementSurfaceFeedbackV1Id,
    ) -> Option<Rc<WpColorManagementSurfaceFeedbackV1>> {
        let feedback = self.conn.feedbacks.get(&id);
        if feedback.is_none() {
            log::debug!("event for unknown surface feedback {}", id);
        }
        feedback
    }

    fn description(&self, id: WpImageDescriptionV1Id) -> Option<Rc<WpImageDescriptionV1>> {
        let desc = self.conn.descriptions.get(&id);
        if desc.is_none() {
            log::debug!("event for unknown image description {}", id);
        }
        desc
    }

    fn info(&self, id: WpImageDescriptionInfoV1Id) -> Option<Rc<WpImageDescriptionInfoV1>> {
        let info = self.conn.infos.get(&id);
        if info.is_none() {
            log::debug!("event for unknown description info {}", id);
        }
        info
    }

    /// Tears down all windows and protocol objects so that the `Rc` graph
    /// can be collected. Idempotent.
    pub fn clear(&self) {
        for (_, data) in self.windows.lock().drain() {
            if let Some(surface) = data.surface.take() {
                surface.destroy();
            }
        }
        if let Some(manager) = self.color_manager.take() {
            manager.destroy();
        }
        self.conn.clear();
        self.ui.clear();
    }
}
