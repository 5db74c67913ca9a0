use anyhow::{Context, Result};
use grid_snake::input::intents_for_event;
use grid_snake::render::draw_grid;
use grid_snake::{GameConfig, Intent, Session, StepOutcome};
use pixels::{Pixels, SurfaceTexture};
use std::time::Instant;
use tracing::{error, info};
use winit::dpi::LogicalSize;
use winit::event::Event;
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;
use winit_input_helper::WinitInputHelper;

fn main() {
    init_tracing();
    if let Err(err) = run(GameConfig::default()) {
        error!("{err:#}");
        println!("{err:#}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn run(config: GameConfig) -> Result<()> {
    config.validate().context("invalid game configuration")?;
    let mut session = Session::new(config.grid_width(), config.grid_height())
        .context("can't create the board")?;

    let event_loop = EventLoop::new();
    let mut input = WinitInputHelper::new();

    let mut title = session.title(&config.title);
    let window = WindowBuilder::new()
        .with_title(&title)
        .with_inner_size(LogicalSize::new(config.screen_width, config.screen_height))
        .with_resizable(false)
        .build(&event_loop)
        .context("can't create a window")?;

    let mut pixels = {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
        Pixels::new(config.screen_width, config.screen_height, surface_texture)
            .context("can't create a renderer")?
    };

    info!(
        width = config.grid_width(),
        height = config.grid_height(),
        tick_ms = config.tick.as_millis() as u64,
        "starting snake"
    );
    let mut last_update = Instant::now();

    event_loop.run(move |event, _, control_flow| {
        if let Event::WindowEvent { event: ref window_event, .. } = event {
            let intents = intents_for_event(window_event);
            if !intents.is_empty() {
                for intent in intents {
                    session.handle(intent);
                }
                window.request_redraw();
            }
        }

        if let Event::RedrawRequested(_) = event {
            draw_grid(pixels.frame_mut(), session.grid(), &config);
            if let Err(err) = pixels.render() {
                error!(%err, "render failed");
                *control_flow = ControlFlow::Exit;
                return;
            }
        }

        if input.update(&event) {
            if input.close_requested() || input.destroyed() {
                session.handle(Intent::Quit);
            }
            if session.should_quit() {
                info!("quitting");
                *control_flow = ControlFlow::Exit;
                return;
            }

            if last_update.elapsed() >= config.tick {
                if session.tick() != StepOutcome::Idle {
                    window.request_redraw();
                }
                last_update = Instant::now();
            }

            let next_title = session.title(&config.title);
            if next_title != title {
                window.set_title(&next_title);
                title = next_title;
            }

            *control_flow = ControlFlow::WaitUntil(last_update + config.tick);
        }
    });
}
