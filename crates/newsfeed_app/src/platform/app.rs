use std::io::{self, BufRead};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use chrono::Utc;
use newsfeed_core::{update, AppState, Msg};
use newsfeed_engine::{EngineHandle, ReqwestNewsClient, SnapshotWriter};
use newsfeed_logging::{feed_info, feed_warn};

use super::effects::EffectRunner;
use super::input::{parse_line, Command, HELP};
use super::logging;
use super::ui::html_page::HtmlPage;
use super::ui::port::ViewPort;
use super::ui::render::render;
use super::ui::terminal::TerminalView;
use crate::cli::Cli;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub fn run_app(cli: Cli) -> anyhow::Result<()> {
    logging::initialize(cli.log, cli.log_level);

    let client = ReqwestNewsClient::new(&cli.base_url, cli.fetch_settings())
        .with_context(|| format!("invalid base url {}", cli.base_url))?;
    let engine = EngineHandle::new(Arc::new(client)).context("failed to start engine runtime")?;

    let html_page = HtmlPage::new(SnapshotWriter::new(cli.output_dir.clone()));
    feed_info!("Rendering page to {:?}", html_page.page_path());
    let ports: Vec<Box<dyn ViewPort>> = vec![Box::new(html_page), Box::new(TerminalView::stdout())];

    let mut app = App::new(AppState::with_filters(cli.filters()), EffectRunner::new(engine), ports);
    app.dispatch_msg(Msg::PageLoaded);

    if cli.interactive {
        run_interactive(&mut app);
    } else {
        app.run_until_idle();
    }
    Ok(())
}

fn run_interactive(app: &mut App) {
    let (cmd_tx, cmd_rx) = mpsc::channel::<Command>();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            match parse_line(&line) {
                Ok(command) => {
                    if cmd_tx.send(command).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    feed_warn!("Rejected input {:?}: {}", line, err);
                    eprintln!("{err} (type `help` for commands)");
                }
            }
        }
    });

    println!("{HELP}");
    loop {
        match cmd_rx.try_recv() {
            Ok(Command::Send(msgs)) => {
                for msg in msgs {
                    app.dispatch_msg(msg);
                }
            }
            Ok(Command::Show) => app.render(),
            Ok(Command::Help) => println!("{HELP}"),
            Ok(Command::Quit) => break,
            Err(mpsc::TryRecvError::Disconnected) => {
                // stdin closed; let a pending request land before leaving.
                app.run_until_idle();
                break;
            }
            Err(mpsc::TryRecvError::Empty) => {}
        }
        app.pump(POLL_INTERVAL);
    }
}

/// Owns the state and drives the update/effect/render cycle.
pub(crate) struct App {
    state: AppState,
    effects: EffectRunner,
    ports: Vec<Box<dyn ViewPort>>,
}

impl App {
    pub(crate) fn new(state: AppState, effects: EffectRunner, ports: Vec<Box<dyn ViewPort>>) -> Self {
        Self {
            state,
            effects,
            ports,
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &AppState {
        &self.state
    }

    pub(crate) fn dispatch_msg(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;
        self.effects.enqueue(effects);
        if was_dirty {
            self.render();
        }
    }

    pub(crate) fn render(&mut self) {
        let commands = render(&self.state.view(), Utc::now());
        for port in &mut self.ports {
            port.apply_all(&commands);
        }
    }

    /// Applies at most one engine event, waiting up to `wait` for it.
    pub(crate) fn pump(&mut self, wait: Duration) -> bool {
        match self.effects.next_msg(wait) {
            Some(msg) => {
                self.dispatch_msg(msg);
                true
            }
            None => false,
        }
    }

    /// Processes engine events until no request is in flight and no error
    /// banner is waiting for its dismissal timer.
    ///
    /// Without a configured timeout this waits as long as the transport does.
    pub(crate) fn run_until_idle(&mut self) {
        while self.state.in_flight().is_some() || self.state.error_banner().is_some() {
            self.pump(POLL_INTERVAL);
        }
    }
}
