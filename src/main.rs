use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use glam::Vec2;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

use orbit_walker::cli::Cli;
use orbit_walker::config::SceneConfig;
use orbit_walker::core::{route_event, Button, Clock};
use orbit_walker::hud::{FpsCounter, HudReadout};
use orbit_walker::input::InputEvent;
use orbit_walker::renderer::Renderer;
use orbit_walker::scene::Scene;
use orbit_walker::traits::InputSink;

const INITIAL_WINDOW_WIDTH: u32 = 1280;
const INITIAL_WINDOW_HEIGHT: u32 = 720;

struct App {
    config: SceneConfig,
    show_hud: bool,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    scene: Option<Scene<HudReadout>>,
    clock: Clock,
    fps: FpsCounter,
    cursor: Vec2,
}

impl App {
    fn new(config: SceneConfig, show_hud: bool) -> Self {
        Self {
            config,
            show_hud,
            window: None,
            renderer: None,
            scene: None,
            clock: Clock::new(),
            fps: FpsCounter::new(),
            cursor: Vec2::ZERO,
        }
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(scene) = self.scene.take() {
            let hud = scene.teardown();
            log::info!("Final position {}", hud.text());
        }
        event_loop.exit();
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let delta = self.clock.tick();
        self.fps.tick(delta);

        let (Some(scene), Some(renderer), Some(window)) =
            (&mut self.scene, &mut self.renderer, &self.window)
        else {
            return;
        };

        scene.update(delta);

        let out_of_memory = match renderer.render(window, scene, self.fps.fps(), self.show_hud) {
            Ok(()) => false,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                renderer.reconfigure();
                false
            }
            Err(wgpu::SurfaceError::OutOfMemory) => true,
            Err(e) => {
                log::warn!("Render error: {}", e);
                false
            }
        };

        if out_of_memory {
            log::error!("Surface out of memory");
            self.shutdown(event_loop);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title("Orbit Walker")
                .with_inner_size(winit::dpi::LogicalSize::new(
                    INITIAL_WINDOW_WIDTH,
                    INITIAL_WINDOW_HEIGHT,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let renderer = match pollster::block_on(Renderer::new(window.clone())) {
            Ok(r) => r,
            Err(e) => {
                log::error!("Failed to initialize renderer: {:#}", e);
                event_loop.exit();
                return;
            }
        };

        let mut scene = match Scene::new(self.config.clone(), HudReadout::new()) {
            Ok(scene) => scene,
            Err(e) => {
                log::error!("Failed to build scene: {:#}", e);
                event_loop.exit();
                return;
            }
        };
        let size = window.inner_size();
        scene.resize(size.width as f32, size.height as f32);

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.scene = Some(scene);
        self.clock.reset();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui see the event first
        let mut consumed = false;
        if self.show_hud {
            if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
                consumed = renderer.handle_event(window, &event);
            }
        }

        match event {
            WindowEvent::CloseRequested => self.shutdown(event_loop),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size);
                }
                if let Some(scene) = &mut self.scene {
                    scene.resize(size.width as f32, size.height as f32);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            event => {
                if let WindowEvent::CursorMoved { position, .. } = &event {
                    self.cursor = Vec2::new(position.x as f32, position.y as f32);
                }

                match route_event(&event, self.cursor, consumed) {
                    Some(InputEvent::Key {
                        button: Button::Escape,
                        pressed: true,
                    }) => self.shutdown(event_loop),
                    Some(input) => {
                        if let Some(scene) = &mut self.scene {
                            scene.handle(&input);
                        }
                    }
                    None => {}
                }
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.scene_config()?;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config, !cli.no_hud);

    log::info!(
        "Controls: left click walks, WASD steers, right drag orbits, wheel zooms, Escape quits"
    );
    event_loop.run_app(&mut app)?;

    Ok(())
}
