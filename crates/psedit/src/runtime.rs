//! Single-threaded editor loop.
//!
//! Each iteration reads one event, runs it to completion (including blocking
//! save and search), then paints: the full screen when the state is dirty,
//! otherwise the status line only. The hardware cursor is repositioned every
//! frame.

use anyhow::Result;
use core_actions::{dispatch, translate_key};
use core_config::Config;
use core_events::{InputEvent, Key, KeySource};
use core_model::EditorModel;
use core_render::{PaintSurface, RenderScope, Renderer};
use std::fmt;
use tracing::{debug, info, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownReason {
    /// The user quit.
    Quit,
    /// The key source ran dry.
    InputClosed,
}

impl ShutdownReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShutdownReason::Quit => "quit",
            ShutdownReason::InputClosed => "input_closed",
        }
    }
}

impl fmt::Display for ShutdownReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

enum LoopControl {
    Continue,
    Break(ShutdownReason),
}

pub struct EditorRuntime<K: KeySource, S: PaintSurface> {
    model: EditorModel,
    config: Config,
    renderer: Renderer,
    keys: K,
    surface: S,
}

impl<K: KeySource, S: PaintSurface> EditorRuntime<K, S> {
    pub fn new(model: EditorModel, config: Config, keys: K, surface: S) -> Self {
        Self {
            model,
            config,
            renderer: Renderer::new(),
            keys,
            surface,
        }
    }

    pub fn model(&self) -> &EditorModel {
        &self.model
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn run(&mut self) -> Result<ShutdownReason> {
        let span = tracing::debug_span!(target: "runtime", "event_loop");
        let _enter = span.enter();

        self.model.state_mut().dirty = true;
        self.finish_cycle()?;

        loop {
            let Some(event) = self.keys.read_event()? else {
                info!(target: "runtime", reason = ShutdownReason::InputClosed.as_str(), "shutdown");
                return Ok(ShutdownReason::InputClosed);
            };
            let control = match event {
                InputEvent::Key(key) => self.handle_key(key),
                InputEvent::Resize { cols, rows } => self.handle_resize(rows, cols),
            };
            match control {
                LoopControl::Continue => self.finish_cycle()?,
                LoopControl::Break(reason) => {
                    info!(target: "runtime", reason = reason.as_str(), "shutdown");
                    return Ok(reason);
                }
            }
        }
    }

    fn handle_key(&mut self, key: Key) -> LoopControl {
        let prompt_active = self.model.state().prompt.is_active();
        let Some(action) = translate_key(prompt_active, key) else {
            return LoopControl::Continue;
        };
        trace!(target: "runtime", %key, ?action, "key");
        let result = dispatch(action, &mut self.model);
        if result.quit {
            LoopControl::Break(ShutdownReason::Quit)
        } else {
            LoopControl::Continue
        }
    }

    fn handle_resize(&mut self, rows: u16, cols: u16) -> LoopControl {
        debug!(target: "runtime", rows, cols, "resize");
        self.model.resize(rows.into(), cols.into());
        let (rows, cols) = (self.model.view().rows(), self.model.view().cols());
        self.surface.resize(rows, cols);
        if let Some(settings) = self
            .config
            .recompute_after_resize(u16::try_from(rows).unwrap_or(u16::MAX))
        {
            self.model.state_mut().settings = settings;
        }
        LoopControl::Continue
    }

    fn finish_cycle(&mut self) -> Result<()> {
        let scope = RenderScope::for_dirty(self.model.state_mut().take_dirty());
        self.renderer.render(&self.model, &mut self.surface, scope)
    }
}
