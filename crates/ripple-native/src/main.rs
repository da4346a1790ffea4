mod gpu;
mod targets;
mod texture;

use std::path::PathBuf;

use glam::Vec2;
use winit::{
    event::{ElementState, Event, WindowEvent},
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

use ripple_core::{centered_from_viewport, Simulation};

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut args = std::env::args().skip(1);
    let background = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("assets/bg.jpg"));
    let sprite = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("assets/ripple.png"));

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Ripple displacement")
        .build(&event_loop)?;

    let mut state = pollster::block_on(gpu::GpuState::new(&window, &background, &sprite))?;
    let mut sim = Simulation::new(42);

    // Single-slot latest-sample cell: pointer events between ticks overwrite
    // each other; only the most recent position matters.
    let mut latest_pointer: Option<Vec2> = None;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => state.resize(size),
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::CursorMoved { position, .. } => {
                latest_pointer = Some(centered_from_viewport(
                    position.x as f32,
                    position.y as f32,
                    state.width() as f32,
                    state.height() as f32,
                ));
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed
                    && !event.repeat
                    && event.physical_key == PhysicalKey::Code(KeyCode::Space)
                {
                    let running = !sim.is_running();
                    sim.set_running(running);
                    log::info!("simulation {}", if running { "resumed" } else { "stopped" });
                }
            }
            _ => {}
        },
        Event::AboutToWait => {
            // one tick per refresh: spawn, advance time, age, then the two
            // passes; when stopped the tick reports nothing to render and no
            // new frame is scheduled
            if sim.tick(latest_pointer.take()) {
                match state.render(&sim) {
                    Ok(_) => state.window().request_redraw(),
                    Err(wgpu::SurfaceError::Lost) => state.resize(state.window().inner_size()),
                    Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                    Err(e) => log::error!("render error: {e:?}"),
                }
            }
        }
        _ => {}
    })?;
    Ok(())
}
