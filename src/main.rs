//! Entry point for the **magsnap** daemon.
//!
//! Loads the configuration, builds a [`StaticDesktop`] from its layout, and
//! serves one [`SnappingWindow`] to a host.  Events arrive either on a Unix
//! socket (the default) or from a recorded trace (`--replay <path>`, `-` for
//! stdin); the event source runs on a background thread and every event is
//! processed on the main thread.
//!
//! ```text
//! magsnap [--config <path>] [--replay <path>|-] [--socket <path>] [--window <id>]
//! ```

use magsnap::config::Config;
use magsnap::desktop::layout::StaticDesktop;
use magsnap::event::HostEvent;
use magsnap::geometry::WindowId;
use magsnap::ipc::listener::UnixSocketListener;
use magsnap::ipc::replay::TraceReplay;
use magsnap::snapper::SnappingWindow;
use magsnap::traits::{EventSource, Request};
use log::{error, info};
use std::path::PathBuf;
use std::sync::mpsc;

/// Default socket path for the event listener.
fn default_socket_path() -> String {
    let runtime = std::env::var("XDG_RUNTIME_DIR").unwrap_or_else(|_| "/tmp".into());
    format!("{}/magsnap.sock", runtime)
}

/// Resolve the config directory (`$XDG_CONFIG_HOME/magsnap`).
fn config_dir() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        format!("{}/.config", home)
    });
    PathBuf::from(base).join("magsnap")
}

/// Load the config from `path`, or from
/// `$XDG_CONFIG_HOME/magsnap/config.json`, falling back to compiled-in
/// defaults.
fn load_config(path: Option<PathBuf>) -> Config {
    let path = path.unwrap_or_else(|| config_dir().join("config.json"));
    match Config::load(&path) {
        Ok(cfg) => {
            info!("loaded config from {}", path.display());
            cfg
        }
        Err(e) => {
            info!("no config file ({}), using defaults", e);
            Config::default()
        }
    }
}

//  Command line

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    replay: Option<String>,
    socket: Option<String>,
    window: Option<WindowId>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args::default();
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        let mut value = |name: &str| it.next().ok_or_else(|| format!("{} needs a value", name));
        match arg.as_str() {
            "--config" => args.config = Some(PathBuf::from(value("--config")?)),
            "--replay" => args.replay = Some(value("--replay")?),
            "--socket" => args.socket = Some(value("--socket")?),
            "--window" => {
                let raw = value("--window")?;
                let id = raw
                    .parse::<u64>()
                    .map_err(|_| format!("--window: {:?} is not a window id", raw))?;
                args.window = Some(WindowId(id));
            }
            other => return Err(format!("unknown argument {:?}", other)),
        }
    }
    Ok(args)
}

//  Main

fn main() {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            error!("{}", e);
            std::process::exit(2);
        }
    };
    let config = load_config(args.config.clone());

    let desktop = StaticDesktop::new(config.desktop.clone());
    info!(
        "{} screen(s), {} window(s) in layout",
        desktop.screens().len(),
        config.desktop.windows.len()
    );

    let mut window = SnappingWindow::new(desktop.clone(), desktop);
    window.set_config(&config.snap);
    if let Some(id) = args.window {
        window.set_window_id(id);
    }

    let (tx, rx) = mpsc::channel::<Request>();
    spawn_event_source(&args, tx);

    run_event_loop(window, rx);
}

//  Event loop

fn run_event_loop(mut window: SnappingWindow<StaticDesktop, StaticDesktop>, rx: mpsc::Receiver<Request>) {
    info!("magsnap running (snap distance {})", window.snap_distance());
    for req in rx {
        let Request { event, reply } = req;
        let is_change = matches!(event, HostEvent::PositionChanging(_));
        match window.handle(event) {
            Ok(Some(answer)) => {
                let _ = reply.send(answer);
            }
            Ok(None) => {}
            // Dropping `reply` makes the source answer with the proposal.
            Err(e) if is_change => error!("position change not snapped: {}", e),
            Err(e) => error!("event error: {}", e),
        }
    }
    info!("event source closed, exiting");
}

//  Helpers

fn spawn_event_source(args: &Args, tx: mpsc::Sender<Request>) {
    match args.replay.as_deref() {
        Some("-") => {
            let mut source = TraceReplay::stdin();
            std::thread::spawn(move || {
                if let Err(e) = source.run(tx) {
                    error!("replay error: {}", e);
                }
            });
        }
        Some(path) => {
            let path = PathBuf::from(path);
            std::thread::spawn(move || {
                let result = TraceReplay::from_path(&path).and_then(|mut source| source.run(tx));
                if let Err(e) = result {
                    error!("replay of {} failed: {}", path.display(), e);
                }
            });
        }
        None => {
            let path = args.socket.clone().unwrap_or_else(default_socket_path);
            std::thread::spawn(move || {
                let mut source = UnixSocketListener::new(&path);
                if let Err(e) = source.run(tx) {
                    error!("socket listener error: {}", e);
                }
            });
        }
    }
}
