// ui.rs - egui shell: turns widget responses into surface events and paints the grid

use eframe::egui;
use egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2};
use tokio::sync::mpsc::error::TryRecvError;

use crate::config::{self, Palette};
use crate::render::{self, Canvas};
use crate::scheduler::{Scheduler, TickReceiver};
use crate::surface::{Button, Event, Surface};

/// Adapts an egui painter to the `Canvas` trait, offsetting by the
/// allocated region's top-left corner.
struct PainterCanvas<'a> {
    painter: &'a Painter,
    origin: Pos2,
}

impl Canvas for PainterCanvas<'_> {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color32) {
        let rect = Rect::from_min_size(self.origin + Vec2::new(x, y), Vec2::new(width, height));
        self.painter.rect_filled(rect, 0.0, color);
    }

    fn line(&mut self, from: [f32; 2], to: [f32; 2], color: Color32) {
        let from = self.origin + Vec2::from(from);
        let to = self.origin + Vec2::from(to);
        self.painter.line_segment([from, to], Stroke::new(1.0, color));
    }
}

pub struct ShiftGridApp {
    surface: Surface,
    palette: Palette,
    scheduler: Scheduler,
    ticks: TickReceiver,
    tick_source_lost: bool,

    // Owns the worker the tick task runs on.
    _runtime: tokio::runtime::Runtime,
}

impl ShiftGridApp {
    pub fn new(
        surface: Surface,
        scheduler: Scheduler,
        ticks: TickReceiver,
        runtime: tokio::runtime::Runtime,
    ) -> Self {
        Self {
            surface,
            palette: Palette::default(),
            scheduler,
            ticks,
            tick_source_lost: false,
            _runtime: runtime,
        }
    }

    /// Applies every tick that arrived since the last frame, in order.
    fn drain_ticks(&mut self) {
        loop {
            match self.ticks.try_recv() {
                Ok(event) => {
                    self.surface.handle(event);
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if !self.tick_source_lost {
                        tracing::warn!("tick source closed, grid is now idle");
                        self.tick_source_lost = true;
                    }
                    break;
                }
            }
        }
    }
}

impl eframe::App for ShiftGridApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_ticks();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(config::WINDOW_TITLE);

            // Controls
            ui.horizontal(|ui| {
                for button in Button::ALL {
                    if ui.button(button.label()).clicked() {
                        self.surface.handle(Event::Direction(button));
                    }
                }

                ui.separator();

                let state = self.surface.state();
                ui.label(format!("Generation: {}", state.generation()));
                ui.label(format!("Direction: {:?}", state.direction().delta()));
            });

            ui.separator();

            // Canvas
            let size = Vec2::new(config::CANVAS_WIDTH as f32, config::CANVAS_HEIGHT as f32);
            let (response, painter) = ui.allocate_painter(size, egui::Sense::click());
            let origin = response.rect.min;

            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let offset = pos - origin;
                    self.surface.handle(Event::CanvasClick {
                        x: offset.x.floor() as i32,
                        y: offset.y.floor() as i32,
                    });
                }
            }

            let mut canvas = PainterCanvas { painter: &painter, origin };
            render::render(self.surface.state().grid(), &self.palette, &mut canvas);

            ui.separator();

            ui.horizontal(|ui| {
                let live = self.surface.state().alive_count();
                ui.label(format!("Live cells: {}", live));
                let status = if self.scheduler.is_running() { "running" } else { "idle" };
                ui.label(format!("Scheduler: {} every {} ms", status, self.scheduler.period().as_millis()));
            });
        });
    }
}
