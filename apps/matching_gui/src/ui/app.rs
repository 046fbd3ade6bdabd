use eframe::egui;
use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use matching::{Catalog, MatchSession, PairId, Point};

use super::layout;

pub const SETTINGS_STORAGE_KEY: &str = "matching_gui_settings";

const INSTRUCTION_TEXT: &str =
    "Draw lines between the pictures and the words that best go together.";

const BOX_FILL: egui::Color32 = egui::Color32::GRAY;
const BOX_TEXT: egui::Color32 = egui::Color32::WHITE;
const SELECTED_OUTLINE: egui::Color32 = egui::Color32::GREEN;

/// Preferences persisted across runs through eframe storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub show_instructions: bool,
    pub connector_width: f32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            show_instructions: true,
            connector_width: 2.0,
        }
    }
}

pub struct MatchingGameApp {
    catalog: Catalog,
    session: MatchSession,
    pool_size: usize,
    seed: Option<u64>,
    round: u64,
    settings: GameSettings,
    settings_open: bool,
    status: String,
}

impl MatchingGameApp {
    pub fn new(catalog: Catalog, pool_size: usize, seed: Option<u64>, settings: GameSettings) -> Self {
        let session = start_session(&catalog, pool_size, seed, 0);
        let status = format!("Pool of {} pairs sampled", session.right_pool().len());
        Self {
            catalog,
            session,
            pool_size,
            seed,
            round: 0,
            settings,
            settings_open: false,
            status,
        }
    }

    /// The GUI analog of remounting the game: discard the session and sample
    /// a fresh pool. A fixed seed still varies per round so "New round"
    /// actually reshuffles.
    fn start_round(&mut self) {
        self.round += 1;
        self.session = start_session(&self.catalog, self.pool_size, self.seed, self.round);
        self.status = format!("Round {} started", self.round + 1);
    }

    fn show_toolbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Matching exercise");
                ui.separator();
                ui.label(format!("{} solved", self.session.solved()));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Settings").clicked() {
                        self.settings_open = !self.settings_open;
                    }
                    if ui.button("New round").clicked() {
                        self.start_round();
                    }
                });
            });
        });
    }

    fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.small("Status:");
                ui.small(egui::RichText::new(&self.status).weak());
            });
        });
    }

    fn show_settings_window(&mut self, ctx: &egui::Context) {
        if !self.settings_open {
            return;
        }
        let mut open = self.settings_open;
        egui::Window::new("Board settings")
            .open(&mut open)
            .resizable(false)
            .show(ctx, |ui| {
                ui.checkbox(&mut self.settings.show_instructions, "Show the instruction line");
                ui.add(
                    egui::Slider::new(&mut self.settings.connector_width, 1.0..=6.0)
                        .text("Connector width")
                        .step_by(0.5),
                );
                if ui.button("Reset to defaults").clicked() {
                    self.settings = GameSettings::default();
                }
            });
        self.settings_open = open;
    }

    fn show_board(&mut self, ui: &mut egui::Ui) {
        if self.settings.show_instructions {
            ui.vertical_centered(|ui| {
                ui.add_space(4.0);
                ui.label(INSTRUCTION_TEXT);
            });
        }
        ui.add_space(8.0);

        let (board_rect, _) = ui.allocate_exact_size(
            egui::vec2(layout::CANVAS_WIDTH, layout::CANVAS_HEIGHT),
            egui::Sense::hover(),
        );
        let origin = board_rect.min;
        let transform = layout::board_transform(origin);
        let painter = ui.painter_at(board_rect);

        let active_left = self.session.active_left();
        let mut selected: Option<(PairId, egui::Pos2)> = None;
        let mut attempted: Option<PairId> = None;
        let mut over_right_target = false;

        for (row, item) in self.session.left_items().iter().enumerate() {
            let rect = layout::left_box_rect(origin, row);
            let response = ui.put(rect, item_button(&item.left_label, active_left == Some(item.id)));
            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    selected = Some((item.id, pos));
                }
            }
        }

        for (row, item) in self.session.right_pool().iter().enumerate() {
            let rect = layout::right_box_rect(origin, row);
            let response = ui.put(rect, item_button(&item.right_label, false));
            if response.hovered() {
                over_right_target = true;
            }
            if response.clicked() {
                attempted = Some(item.id);
            }
        }

        if let Some((id, pos)) = selected {
            let anchor = transform.to_local(Point::new(pos.x, pos.y));
            if let Err(err) = self.session.select_left(id, anchor) {
                self.status = format!("Selection failed: {err}");
            }
        }
        if let Some(id) = attempted {
            // Wrong attempts get no visible signal; only the counter moves.
            if let Some(outcome) = self.session.attempt_pair(id) {
                debug!(right = id.0, outcome = ?outcome, "attempt finished");
            }
        }

        if self.session.active_left().is_some() {
            if let Some(pos) = ui.ctx().pointer_latest_pos() {
                let pointer = transform.to_local(Point::new(pos.x, pos.y));
                if let Some(connector) = self.session.track_pointer(pointer, over_right_target) {
                    if connector.visible {
                        let from = transform.to_page(connector.from);
                        let to = transform.to_page(connector.to);
                        painter.line_segment(
                            [egui::pos2(from.x, from.y), egui::pos2(to.x, to.y)],
                            egui::Stroke::new(self.settings.connector_width, BOX_TEXT),
                        );
                    }
                }
            }
            // Keep the connector tracking the pointer between input events.
            ui.ctx().request_repaint();
        }
    }
}

fn item_button(label: &str, selected: bool) -> egui::Button<'static> {
    let mut button = egui::Button::new(egui::RichText::new(label.to_owned()).color(BOX_TEXT))
        .fill(BOX_FILL);
    if selected {
        button = button.stroke(egui::Stroke::new(3.0, SELECTED_OUTLINE));
    }
    button
}

fn start_session(
    catalog: &Catalog,
    pool_size: usize,
    seed: Option<u64>,
    round: u64,
) -> MatchSession {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(round)),
        None => StdRng::from_entropy(),
    };
    MatchSession::new(catalog.clone(), pool_size, &mut rng)
}

impl eframe::App for MatchingGameApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show_settings_window(ctx);
        self.show_toolbar(ctx);
        self.show_status_bar(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.show_board(ui);
            });
        });
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        if let Ok(text) = serde_json::to_string(&self.settings) {
            storage.set_string(SETTINGS_STORAGE_KEY, text);
        }
    }
}
