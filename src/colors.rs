
use {
    crate::{
        ifs::wp_color_management_surface_v1::WpColorManagementSurfaceV1,
        state::State,
        utils::{clonecell::CloneCell, numcell::NumCell},
        wire::NativeSurface,
    },
    std::{
        cell::Cell,
        fmt::{Display, Formatter},
        rc::Rc,
    },
};

/// Reference luminance used when a window has not chosen a mode, in nits.
///
/// 203 nits is the reference white of BT.2408.
pub const DEFAULT_PQ_REFERENCE_LUMINANCE: u32 = 203;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct WindowId(u64);

impl Display for WindowId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

pub struct WindowIds {
    next: NumCell<u64>,
}

impl Default for WindowIds {
    fn default() -> Self {
        Self {
            next: NumCell::new(1),
        }
    }
}

impl WindowIds {
    pub fn next(&self) -> WindowId {
        WindowId(self.next.fetch_add(1))
    }
}

/// The color regime a window wants its surface presented in.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ColorMode {
    /// No image description at all. The compositor default applies.
    Default,
    SrgbGamma22,
    Bt2020Gamma22,
    Bt2020Pq,
    PalM,
    Cie1931Xyz,
    /// HDR10 with a custom reference luminance in nits.
    PqCustom(u32),
}

/// Events the coordinator emits for the embedding UI.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum UiEvent {
    /// The window should be redrawn.
    Redraw(WindowId),
    /// The compositor's preferred description for the window changed.
    PreferredChanged(WindowId),
}

/// Per-window color state.
pub struct WindowData {
    pub id: WindowId,
    /// The explicitly requested mode. `None` falls back to HDR10 at the
    /// configured reference luminance.
    pub mode: Cell<Option<ColorMode>>,
    pub native: Cell<Option<NativeSurface>>,
    pub surface: CloneCell<Option<Rc<WpColorManagementSurfaceV1>>>,
}

impl State {
    /// Registers a window. Until it requests anything else, the window is
    /// treated as wanting HDR10 at the configured reference luminance.
    pub fn register_window(&self) -> WindowId {
        let id = self.window_ids.next();
        let data = Rc::new(WindowData {
            id,
            mode: Cell::new(None),
            native: Cell::new(None),
            surface: Default::default(),
        });
        self.windows.set(id, data);
        log::debug!("registered window {}", id);
        id
    }

    /// Removes a window. In-flight description creations for its surface
    /// are abandoned.
    pub fn unregister_window(&self, window: WindowId) {
        let Some(data) = self.windows.remove(&window) else {
            return;
        };
        if let Some(surface) = data.surface.take() {
            surface.destroy();
        }
        log::debug!("unregistered window {}", window);
    }

    /// Called whenever the platform reports that the window's native surface
    /// exists. May be called repeatedly, including after the native surface
    /// was torn down and re-created.
    pub fn surface_created(&self, window: WindowId, native: NativeSurface) {
        let Some(data) = self.windows.get(&window) else {
            log::warn!("surface created for unknown window {}", window);
            return;
        };
        data.native.set(Some(native));
        self.apply_window(&data);
    }

    /// Requests a mode for the window. Applied immediately if the surface
    /// binding exists, stored for later otherwise.
    pub fn request_mode(&self, window: WindowId, mode: ColorMode) {
        let Some(data) = self.windows.get(&window) else {
            log::warn!("mode request for unknown window {}", window);
            return;
        };
        data.mode.set(Some(mode));
        self.apply_window(&data);
    }

    /// Requests HDR10 with a custom reference luminance in nits.
    pub fn request_pq(&self, window: WindowId, reference_lum: u32) {
        self.request_mode(window, ColorMode::PqCustom(reference_lum));
    }

    /// The capability summary of the display the window is on, for the UI.
    pub fn display_capabilities(&self, window: WindowId) -> String {
        let attributes = self
            .windows
            .get(&window)
            .and_then(|data| data.surface.get())
            .and_then(|surface| surface.feedback.preferred())
            .and_then(|desc| desc.attributes.get());
        match attributes {
            Some(attributes) => attributes.summary(),
            None => "Display capabilities unknown".to_string(),
        }
    }

    /// Creates or re-creates the surface binding if possible and re-issues
    /// the window's desired mode. A no-op while the color-management global
    /// is absent or the native surface does not exist yet.
    pub(crate) fn apply_window(&self, data: &Rc<WindowData>) {
        let Some(native) = data.native.get() else {
            return;
        };
        let Some(manager) = self.color_manager.get() else {
            return;
        };
        let surface = match data.surface.get() {
            Some(surface) if surface.native == native => surface,
            old => {
                if let Some(old) = old {
                    old.destroy();
                }
                let surface = manager.get_surface(data.id, native);
                data.surface.set(Some(surface.clone()));
                surface
            }
        };
        apply_mode(&surface, self.effective_mode(data));
    }

    fn effective_mode(&self, data: &WindowData) -> ColorMode {
        data.mode
            .get()
            .unwrap_or(ColorMode::PqCustom(self.default_reference_lum.get()))
    }
}

/// Issues the protocol requests that put the surface into the given mode.
fn apply_mode(surface: &WpColorManagementSurfaceV1, mode: ColorMode) {
    match mode {
        ColorMode::Default => surface.set_default_mode(),
        ColorMode::PqCustom(reference_lum) => surface.set_pq_mode(reference_lum),
        mode => surface.set_parametric_mode(mode),
    }
}
