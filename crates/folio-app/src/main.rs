//! FOLIO desktop entry point.
//!
//! Hosts the portfolio terminal widget as a raw-mode stdin / ANSI stdout
//! loop: bytes decode to input events, the session drains its scheduled
//! output on a per-frame tick, and side-effect actions run through the
//! desktop host. Ctrl+C or Ctrl+D quits.

mod render;
mod term_io;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;

use folio_platform::{DesktopHost, SeededRandom, SystemClock};
use folio_terminal::{
    CommandRegistry, Profile, Services, TerminalSession, register_builtins,
};
use folio_types::InputEvent;

/// Frame budget for the input/tick/render loop.
const FRAME_MS: i32 = 30;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let profile = load_profile()?;
    log::info!("Starting FOLIO terminal for {}", profile.name);

    let mut registry = CommandRegistry::new();
    register_builtins(&mut registry);

    let host = DesktopHost::new();
    let clock = SystemClock::new();
    let random = SeededRandom::from_entropy();
    let services = Services {
        profile: &profile,
        navigator: Some(&host),
        downloads: Some(&host),
        links: Some(&host),
        mail: Some(&host),
        time: &clock,
        random: &random,
    };

    let mut session = TerminalSession::new();
    for line in render::banner(&profile) {
        session.push_system(&line, &services);
    }

    let mut tty = term_io::RawTerminal::new();
    tty.enable()?;

    let mut out = std::io::stdout();
    let mut renderer = render::Renderer::new();
    let mut last_frame = Instant::now();

    'frames: loop {
        for event in tty.poll_events(FRAME_MS)? {
            if event == InputEvent::Quit {
                break 'frames;
            }
            session.handle_event(event, &registry, &services);
        }

        let dt = last_frame.elapsed().as_millis() as u64;
        last_frame = Instant::now();
        session.tick(dt, &services);

        renderer.sync(&mut out, &session)?;
        renderer.draw_prompt(&mut out, &session, &registry, &clock)?;
    }

    // Leave raw mode before the shell prompt returns.
    drop(tty);
    println!();
    log::info!("FOLIO terminal closed");
    Ok(())
}

/// Resolve the profile: CLI argument, then `FOLIO_PROFILE`, then the
/// built-in defaults.
fn load_profile() -> Result<Profile> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("FOLIO_PROFILE").ok());
    match path {
        Some(p) => {
            let p = PathBuf::from(p);
            log::info!("Loading profile from {}", p.display());
            Ok(Profile::load(&p)?)
        },
        None => Ok(Profile::default()),
    }
}
