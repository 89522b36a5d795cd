//! Viewport runtime
//!
//! Owns the model and executes commands. Worker threads (the image source's
//! completion, the cosmetic transform) never touch the model; they send a
//! `Msg` through the channel and the owner applies it on its next drain.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::commands::Cmd;
use crate::config::ViewportConfig;
use crate::image::{ImageSource, ImageTransform};
use crate::messages::{LoadMsg, Msg};
use crate::model::ViewportModel;
use crate::update::update;
use crate::view::{present, PresentationSurface};

pub struct Runtime {
    model: ViewportModel,
    source: Arc<dyn ImageSource>,
    transform: Option<Arc<dyn ImageTransform>>,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
}

impl Runtime {
    pub fn new(config: ViewportConfig, source: Arc<dyn ImageSource>) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            model: ViewportModel::new(config),
            source,
            transform: None,
            msg_tx,
            msg_rx,
        }
    }

    /// Run `transform` on every loaded image before it is shown
    pub fn with_transform(mut self, transform: Arc<dyn ImageTransform>) -> Self {
        self.transform = Some(transform);
        self.model.transform_enabled = true;
        self
    }

    pub fn model(&self) -> &ViewportModel {
        &self.model
    }

    /// Run one message through update and execute the resulting command.
    ///
    /// Returns true if the surface should be redrawn.
    pub fn dispatch(&mut self, msg: Msg) -> bool {
        match update(&mut self.model, msg) {
            Some(cmd) => {
                let needs_redraw = cmd.needs_redraw();
                self.process_cmd(cmd);
                needs_redraw
            }
            None => false,
        }
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::Redraw => {}
            Cmd::FetchImage { generation } => {
                let tx = self.msg_tx.clone();
                let token = self.source.load(Box::new(move |image| {
                    let _ = tx.send(Msg::Load(LoadMsg::FetchCompleted { generation, image }));
                }));
                // Recorded before any queued completion is applied, so a
                // release in the same tick still cancels at the source
                if let Some(token) = token {
                    self.model.load.fetch_started(generation, token);
                }
            }
            Cmd::CancelFetch { token } => {
                self.source.cancel(token);
            }
            Cmd::RunTransform { generation, image } => {
                let tx = self.msg_tx.clone();
                match self.transform.clone() {
                    Some(transform) => {
                        std::thread::spawn(move || {
                            let transformed = transform.apply(&image);
                            let _ = tx.send(Msg::Load(LoadMsg::TransformCompleted {
                                generation,
                                original: image,
                                transformed,
                            }));
                        });
                    }
                    None => {
                        let _ = tx.send(Msg::Load(LoadMsg::TransformCompleted {
                            generation,
                            original: image,
                            transformed: None,
                        }));
                    }
                }
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
        }
    }

    /// Apply every pending worker result without blocking
    pub fn process_async_messages(&mut self) -> bool {
        let mut needs_redraw = false;
        while let Ok(msg) = self.msg_rx.try_recv() {
            if self.dispatch(msg) {
                needs_redraw = true;
            }
        }
        needs_redraw
    }

    /// Block for the next worker result and apply it.
    ///
    /// Returns None on timeout, otherwise whether a redraw is needed.
    pub fn wait_for_message(&mut self, timeout: Duration) -> Option<bool> {
        match self.msg_rx.recv_timeout(timeout) {
            Ok(msg) => Some(self.dispatch(msg)),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }

    /// Keep applying results until the viewport leaves `Loading`.
    ///
    /// Returns false if `timeout` elapsed first.
    pub fn wait_while_loading(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.model.load.state().is_loading() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() || self.wait_for_message(remaining).is_none() {
                tracing::warn!("Viewport still loading after {:?}", timeout);
                return false;
            }
        }
        true
    }

    pub fn present(&self, surface: &mut impl PresentationSurface) {
        present(&self.model, surface);
    }
}
