use common::games::tictactoe::{
    Player, PlayerColor, PlayerSetup, Seat, available_colors, available_marks,
};

use crate::colors::{WARNING_COLOR, player_color};

const MARK_BUTTON_SIZE: egui::Vec2 = egui::vec2(72.0, 64.0);
const COLOR_BUTTON_SIZE: egui::Vec2 = egui::vec2(32.0, 32.0);

/// Symbol and color picker for one seat. Choices already taken by the
/// other seat are disabled.
pub struct SetupDialog {
    seat: Seat,
    taken: Option<PlayerSetup>,
    mark: Option<Player>,
    color: Option<PlayerColor>,
    warning: Option<String>,
}

impl SetupDialog {
    /// `remembered` pre-selects last session's choice when it is still free.
    pub fn new(seat: Seat, taken: Option<PlayerSetup>, remembered: Option<PlayerSetup>) -> Self {
        let mut dialog = Self {
            seat,
            taken,
            mark: None,
            color: None,
            warning: None,
        };
        if let Some(remembered) = remembered {
            dialog.select_mark(remembered.mark);
            dialog.select_color(remembered.color);
        }
        dialog
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    pub fn select_mark(&mut self, mark: Player) -> bool {
        if !available_marks(self.taken.as_ref()).contains(&mark) {
            return false;
        }
        self.mark = Some(mark);
        self.warning = None;
        true
    }

    pub fn select_color(&mut self, color: PlayerColor) -> bool {
        if !available_colors(self.taken.as_ref()).contains(&color) {
            return false;
        }
        self.color = Some(color);
        self.warning = None;
        true
    }

    pub fn set_warning(&mut self, warning: String) {
        self.warning = Some(warning);
    }

    pub fn confirm(&mut self) -> Option<PlayerSetup> {
        match (self.mark, self.color) {
            (Some(mark), Some(color)) => Some(PlayerSetup::new(mark, color)),
            (None, _) => {
                self.warning = Some("Choose symbol, please.".to_string());
                None
            }
            (_, None) => {
                self.warning = Some("Choose color, please.".to_string());
                None
            }
        }
    }

    /// Returns the confirmed choice on the frame the confirm button is pressed.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<PlayerSetup> {
        let marks = available_marks(self.taken.as_ref());
        let colors = available_colors(self.taken.as_ref());
        let other = self.seat.other().number();
        let mut confirmed = None;

        egui::Window::new("Symbol and color")
            .id(egui::Id::new(("setup_dialog", self.seat.number())))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(format!("Player {}", self.seat.number()));
                    ui.add_space(6.0);

                    ui.horizontal(|ui| {
                        for mark in Player::ALL {
                            let label = egui::RichText::new(mark.to_string()).size(28.0);
                            let button = egui::Button::new(label)
                                .selected(self.mark == Some(mark))
                                .min_size(MARK_BUTTON_SIZE);
                            let response = ui
                                .add_enabled(marks.contains(&mark), button)
                                .on_disabled_hover_text(format!(
                                    "This symbol has already been chosen by Player {}",
                                    other
                                ));
                            if response.clicked() {
                                self.select_mark(mark);
                            }
                        }
                    });

                    ui.add_space(6.0);

                    ui.horizontal(|ui| {
                        for color in PlayerColor::ALL {
                            let button = egui::Button::new("")
                                .fill(player_color(color))
                                .selected(self.color == Some(color))
                                .min_size(COLOR_BUTTON_SIZE);
                            let response = ui
                                .add_enabled(colors.contains(&color), button)
                                .on_hover_text(color.name())
                                .on_disabled_hover_text(format!(
                                    "This color has already been chosen by Player {}",
                                    other
                                ));
                            if response.clicked() {
                                self.select_color(color);
                            }
                        }
                    });

                    if let Some(warning) = &self.warning {
                        ui.add_space(4.0);
                        ui.colored_label(WARNING_COLOR, warning);
                    }

                    ui.add_space(6.0);
                    if ui.button(format!("Choose for Player {}", self.seat.number())).clicked() {
                        confirmed = self.confirm();
                    }
                });
            });

        confirmed
    }
}
