//! Interactive viewer handler
//!
//! Owns the `Controller` on a background thread, feeds it load completions
//! and renderer signals, and pushes a fresh `TuiScreenViewModel` after every
//! change. The renderer runs on the main thread.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use catview_runtime::{CatalogSession, Config, Controller, LoadEvent, StartOutcome};
use tokio::runtime::Handle;
use tracing::{debug, info};

use crate::presentation::presenters::present_screen;
use crate::presentation::renderers::{RendererSignal, TuiEvent, TuiRenderer};

const TICK: Duration = Duration::from_millis(50);

pub fn handle(runtime: &tokio::runtime::Runtime, config: &Config) -> Result<()> {
    let session = CatalogSession::from_config(config)?;
    let controller = Controller::from_config(config);
    let source = session.catalog_loader().location().to_string();

    let (tx, rx) = mpsc::channel::<TuiEvent>();
    let (signal_tx, signal_rx) = mpsc::channel::<RendererSignal>();

    let handler = ViewHandler {
        session,
        controller,
        source,
        runtime: runtime.handle().clone(),
        tx,
    };
    let worker = thread::spawn(move || handler.run(signal_rx));

    let result = TuiRenderer::new(signal_tx).run(rx);

    worker
        .join()
        .map_err(|_| anyhow!("viewer worker thread panicked"))?;
    result
}

struct ViewHandler {
    session: CatalogSession,
    controller: Controller,
    source: String,
    runtime: Handle,
    tx: Sender<TuiEvent>,
}

impl ViewHandler {
    fn run(mut self, signal_rx: Receiver<RendererSignal>) {
        let (load_tx, load_rx) = mpsc::channel::<LoadEvent>();

        self.start_load(&load_tx);
        self.send_update();
        let mut refresh_enabled = self.controller.can_refresh(Instant::now());

        loop {
            match signal_rx.recv_timeout(TICK) {
                Ok(RendererSignal::Quit) | Err(RecvTimeoutError::Disconnected) => break,
                Ok(signal) => {
                    if self.handle_signal(signal, &load_tx) {
                        self.send_update();
                    }
                }
                Err(RecvTimeoutError::Timeout) => {}
            }

            let mut changed = false;
            while let Ok(event) = load_rx.try_recv() {
                changed |= self.controller.apply(event, Instant::now());
            }

            // The refresh control re-enables on its own once the cooldown ends
            let now_enabled = self.controller.can_refresh(Instant::now());
            if changed || now_enabled != refresh_enabled {
                refresh_enabled = now_enabled;
                self.send_update();
            }
        }

        debug!("viewer worker stopped");
    }

    fn handle_signal(&mut self, signal: RendererSignal, load_tx: &Sender<LoadEvent>) -> bool {
        match signal {
            RendererSignal::Query(query) => self.controller.set_query(query),
            RendererSignal::NextCategory => self.controller.next_category(),
            RendererSignal::PreviousCategory => self.controller.previous_category(),
            RendererSignal::Refresh => self.start_load(load_tx),
            RendererSignal::Quit => false,
        }
    }

    fn start_load(&mut self, load_tx: &Sender<LoadEvent>) -> bool {
        match self.controller.start(Instant::now()) {
            StartOutcome::Started(ticket) => {
                info!(source = %self.source, "loading catalog");
                self.session.spawn_load(&self.runtime, ticket, load_tx.clone());
                true
            }
            StartOutcome::Ignored(reason) => {
                debug!(?reason, "refresh ignored");
                false
            }
        }
    }

    fn send_update(&self) {
        let screen = present_screen(&self.controller, &self.source, Instant::now());
        let _ = self.tx.send(TuiEvent::Update(Box::new(screen)));
    }
}
