use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::audio::SoundSink;
use crate::error::LoadError;
use crate::game::Game;
use crate::input::KeyBindings;
use crate::level::LevelLoader;
use crate::physics::Physics;
use crate::renderer::{self, Renderer};

/// Longest frame the fixed-step loop will try to catch up on.
const MAX_FRAME_TIME: f32 = 0.25;

// ── App (winit ApplicationHandler) ──────────────────────────────────────────

struct App<P, L, S> {
    game: Game<P, L, S>,
    bindings: KeyBindings,
    renderer: Option<Renderer>,
    last_instant: Option<Instant>,
    accumulator: f32,
    fixed_dt: f32,
    /// Last text written to the window title.
    title: String,
    fatal: Option<anyhow::Error>,
}

impl<P: Physics, L: LevelLoader, S: SoundSink> App<P, L, S> {
    fn level_title(&self) -> String {
        format!(
            "{} | Level {}",
            self.game.config().screen.title,
            self.game.session().level.level_number,
        )
    }

    fn sync_level_look(&mut self) {
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.set_clear_color(renderer::clear_color(self.game.level()));
            renderer.set_viewport(self.game.viewport_rect());
        }
    }

    /// Run every fixed step that fits in the elapsed time. Returns false if
    /// the game cannot continue.
    fn advance(&mut self, elapsed: f32) -> bool {
        self.accumulator += elapsed;
        while self.accumulator >= self.fixed_dt {
            self.accumulator -= self.fixed_dt;
            let report = match self.game.tick(self.fixed_dt) {
                Ok(report) => report,
                Err(LoadError::MissingLevel { level, .. }) => {
                    tracing::info!(level, "no more levels, game complete");
                    return false;
                }
                Err(e) => {
                    self.fatal = Some(anyhow::Error::new(e).context("level load failed"));
                    return false;
                }
            };

            if report.outcome.level_complete {
                self.sync_level_look();
            } else if let (Some(rect), Some(renderer)) = (report.viewport, self.renderer.as_mut()) {
                renderer.set_viewport(rect);
            }
        }
        true
    }
}

impl<P: Physics, L: LevelLoader, S: SoundSink> ApplicationHandler for App<P, L, S> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.renderer.is_some() {
            return;
        }
        let screen = &self.game.config().screen;
        let attrs = Window::default_attributes()
            .with_title(&screen.title)
            .with_inner_size(winit::dpi::PhysicalSize::new(screen.width, screen.height))
            .with_resizable(false);

        let created = event_loop
            .create_window(attrs)
            .context("failed to create window")
            .and_then(|window| {
                pollster::block_on(Renderer::new(Arc::new(window), self.game.viewport_rect()))
            });

        match created {
            Ok(renderer) => {
                self.renderer = Some(renderer);
                self.sync_level_look();
            }
            Err(e) => {
                self.fatal = Some(e);
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(renderer) = self.renderer.as_ref() {
            renderer.window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(size);
                }
            }

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                if code == KeyCode::Escape {
                    event_loop.exit();
                    return;
                }
                let pressed = state == ElementState::Pressed;
                if let Some(input) = self.bindings.translate(code, pressed) {
                    self.game.push_input(input);
                }
            }

            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let elapsed = match self.last_instant {
                    Some(prev) => now.duration_since(prev).as_secs_f32().min(MAX_FRAME_TIME),
                    None => self.fixed_dt,
                };
                self.last_instant = Some(now);

                if !self.advance(elapsed) {
                    event_loop.exit();
                    return;
                }

                let title = self.level_title();
                let batch = renderer::frame_batch(
                    self.game.level(),
                    &self.game.session().player.bounds(),
                    &self.game.hud(),
                );
                let Some(renderer) = self.renderer.as_mut() else { return };

                if title != self.title {
                    renderer.window.set_title(&title);
                    self.title = title;
                }

                match renderer.render(&batch) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        let size = renderer.window.inner_size();
                        renderer.resize(size);
                    }
                    Err(e) => tracing::warn!("render error: {e}"),
                }
            }

            _ => {}
        }
    }
}

/// Open the window and run `game` until the player quits, the last level is
/// finished, or a level fails to load.
pub fn run<P, L, S>(game: Game<P, L, S>, bindings: KeyBindings) -> anyhow::Result<()>
where
    P: Physics,
    L: LevelLoader,
    S: SoundSink,
{
    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let fixed_dt = game.config().tick_duration();
    let mut app = App {
        game,
        bindings,
        renderer: None,
        last_instant: None,
        accumulator: 0.0,
        fixed_dt,
        title: String::new(),
        fatal: None,
    };
    event_loop.run_app(&mut app)?;

    match app.fatal.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
