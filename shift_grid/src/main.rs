// main.rs - Starts logging, the tick runtime and the window

use eframe::egui;

use shift_grid::config;
use shift_grid::scheduler::Scheduler;
use shift_grid::ui::ShiftGridApp;
use shift_grid::{AppError, GridState, Surface, logging};

fn main() -> Result<(), AppError> {
    logging::init();

    if let Err(e) = run() {
        tracing::error!(error = %e, "startup failed");
        return Err(e);
    }
    Ok(())
}

fn run() -> Result<(), AppError> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("shift-grid-ticks")
        .enable_time()
        .build()?;

    let state = GridState::seeded(&mut rand::rng());
    tracing::info!(alive = ?state.alive_cells().collect::<Vec<_>>(), "grid initialized");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config::WINDOW_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        config::WINDOW_TITLE,
        options,
        Box::new(move |cc| {
            let ctx = cc.egui_ctx.clone();
            let (scheduler, ticks) = Scheduler::start(runtime.handle(), config::RUN_PERIOD, move || {
                ctx.request_repaint();
            });
            Box::new(ShiftGridApp::new(Surface::new(state), scheduler, ticks, runtime))
        }),
    )?;

    Ok(())
}
