use {
    crate::{
        cli::{GlobalArgs, RunArgs},
        colors::UiEvent,
        conn::Transport,
        formats::{self, FormatsError},
        logger::Logger,
        navigator::{Navigator, NavigatorError},
        state::State,
        utils::errorfmt::ErrorFmt,
        wire::Request,
    },
    std::{path::Path, rc::Rc},
    thiserror::Error,
};

pub fn start_viewer(global: GlobalArgs, args: RunArgs) {
    Logger::install_stderr(global.log_level.into());
    if let Err(e) = main_(&args) {
        let code = exit_code(&e);
        log::error!("A fatal error occurred: {}", ErrorFmt(e));
        std::process::exit(code);
    }
}

#[derive(Debug, Error)]
enum MainError {
    #[error("The format detector caused an error")]
    FormatsError(#[from] FormatsError),
    #[error("The navigator caused an error")]
    NavigatorError(#[from] NavigatorError),
}

fn exit_code(e: &MainError) -> i32 {
    match e {
        MainError::FormatsError(FormatsError::Open(_)) => 2,
        MainError::FormatsError(FormatsError::Unrecognized) => 3,
        MainError::NavigatorError(NavigatorError::FileNotFound(_)) => 2,
        _ => 1,
    }
}

/// Stand-in transport for running without a compositor connection. A GUI
/// shell replaces this with one that marshals onto the wayland socket and
/// feeds events back into [`State::dispatch`].
struct HeadlessTransport;

impl Transport for HeadlessTransport {
    fn submit(&self, req: Request) {
        log::trace!("dropping request without a connection: {:?}", req);
    }
}

fn main_(args: &RunArgs) -> Result<(), MainError> {
    let path = Path::new(&args.file);
    let info = formats::classify(path)?;
    let navigator = Navigator::new(path)?;
    let (index, len) = navigator.position();
    log::info!(
        "viewing {} ({}, hdr: {}), image {} of {}",
        path.display(),
        info.format.name(),
        info.hdr,
        index + 1,
        len.max(1),
    );
    let state = State::new(Rc::new(HeadlessTransport));
    state.default_reference_lum.set(args.reference_nits);
    let window = state.register_window();
    // Without a registry announcement the capability stays absent and the
    // window keeps its desired state for later.
    println!("{}", state.display_capabilities(window));
    while let Some(event) = state.ui.events.try_pop() {
        match event {
            UiEvent::Redraw(window) => log::debug!("window {} needs a redraw", window),
            UiEvent::PreferredChanged(window) => {
                println!("{}", state.display_capabilities(window));
            }
        }
    }
    state.clear();
    Ok(())
}
