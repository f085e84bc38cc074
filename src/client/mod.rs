mod api;
mod canvas;
mod gallows;
mod hud;
mod keyboard;
#[cfg(test)]
mod mock;
mod net;
pub mod render;
mod scene;
mod service;
mod shell;
mod store;
mod view_model;

use std::time::Duration;

use winit::{
    dpi::PhysicalSize,
    event::{ElementState, Event, MouseButton, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use crate::config::ClientConfig;
use net::spawn_network;
use render::RenderState;
use scene::{FRAME_HEIGHT, FRAME_WIDTH, Scene};
use shell::GameShell;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

pub fn run_client(config: ClientConfig) -> anyhow::Result<()> {
    let event_loop = EventLoop::new()?;
    let window: &'static winit::window::Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Hangman")
            .with_inner_size(PhysicalSize::new(FRAME_WIDTH, FRAME_HEIGHT))
            .build(&event_loop)?,
    ));
    let mut render = pollster::block_on(RenderState::new(window))?;
    let mut scene = Scene::new(config.umlauts);

    let (net_tx, mut vm_rx) = spawn_network(config);
    let mut shell = GameShell::new(vm_rx.borrow_and_update().clone(), net_tx);
    render.upload_frame(scene.compose(&shell.vm));
    shell.start();

    event_loop.run(move |event, target| {
        target.set_control_flow(ControlFlow::wait_duration(FRAME_INTERVAL));
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    target.exit();
                }
                WindowEvent::Resized(size) => {
                    render.resize(size);
                }
                WindowEvent::CursorMoved { position, .. } => {
                    shell.set_cursor(position, render.size);
                }
                WindowEvent::CursorLeft { .. } => {
                    shell.clear_cursor();
                }
                WindowEvent::MouseInput {
                    state: ElementState::Pressed,
                    button: MouseButton::Left,
                    ..
                } => {
                    shell.handle_click(scene.keyboard());
                }
                WindowEvent::KeyboardInput { event, .. } => {
                    if event.state == ElementState::Pressed && !event.repeat {
                        shell.handle_key(&event.logical_key);
                    }
                }
                WindowEvent::RedrawRequested => {
                    if vm_rx.has_changed().unwrap_or(false) {
                        shell.apply_snapshot(vm_rx.borrow_and_update().clone());
                        render.upload_frame(scene.compose(&shell.vm));
                        shell.update_window_title(window);
                    }

                    match render.render() {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            render.resize(render.size);
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            log::error!("gpu out of memory, exiting");
                            target.exit();
                        }
                        Err(wgpu::SurfaceError::Timeout) => {}
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                window.request_redraw();
            }
            _ => {}
        }
    })?;

    Ok(())
}
