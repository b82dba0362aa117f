use common::games::SessionRng;
use common::games::tictactoe::{Seat, SeatAssignment, TicTacToeSession};
use common::log;
use egui::{Align2, RichText};
use std::time::{Duration, Instant};

use super::SetupDialog;
use super::board_view::render_board;
use crate::config::{ClientConfigManager, Config, LastChoices};
use crate::state::{AppState, GameScreen};

const COUNTDOWN_REFRESH: Duration = Duration::from_millis(100);

pub struct TicTacToeApp {
    config_manager: ClientConfigManager,
    config: Config,
    save_choices: bool,
    seed: Option<u64>,
    state: AppState,
    quit_dialog_open: bool,
    quit_confirmed: bool,
}

impl TicTacToeApp {
    pub fn new(
        config_manager: ClientConfigManager,
        config: Config,
        save_choices: bool,
        seed: Option<u64>,
    ) -> Self {
        let dialog = SetupDialog::new(Seat::One, None, config.last_choices.seat_one);
        Self {
            config_manager,
            config,
            save_choices,
            seed,
            state: AppState::Setup { seat_one: None, dialog },
            quit_dialog_open: false,
            quit_confirmed: false,
        }
    }

    fn start_match(&mut self, assignment: SeatAssignment) {
        let config = Config {
            last_choices: LastChoices::from_assignment(&assignment),
            ..self.config.clone()
        };
        if !self.save_choices {
            log!("Config was not loaded, player choices are not saved");
        } else if let Err(e) = self.config_manager.set_config(&config) {
            log!("Failed to save player choices: {}", e);
        }
        self.config = config;

        let session = TicTacToeSession::new(SessionRng::from_seed(self.seed));
        log!(
            "Match started: Player 1 is {}, Player 2 is {}",
            assignment.setup(Seat::One).mark,
            assignment.setup(Seat::Two).mark
        );
        self.state = AppState::Playing(Box::new(GameScreen::new(assignment, session)));
    }

    fn handle_close_request(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.viewport().close_requested()) && !self.quit_confirmed {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            self.quit_dialog_open = true;
        }
    }

    fn render_setup(&mut self, ctx: &egui::Context) {
        let AppState::Setup { seat_one, dialog } = &mut self.state else {
            return;
        };
        let Some(setup) = dialog.show(ctx) else {
            return;
        };

        let Some(first) = *seat_one else {
            log!("Player 1 chose {} in {}", setup.mark, setup.color);
            *seat_one = Some(setup);
            *dialog = SetupDialog::new(Seat::Two, Some(setup), self.config.last_choices.seat_two);
            return;
        };

        log!("Player 2 chose {} in {}", setup.mark, setup.color);
        match SeatAssignment::new(first, setup) {
            Ok(assignment) => self.start_match(assignment),
            Err(e) => {
                log!("Rejected player choices: {}", e);
                dialog.set_warning(e.to_string());
            }
        }
    }

    fn render_announcement(&mut self, ctx: &egui::Context) {
        let AppState::Playing(screen) = &mut self.state else {
            return;
        };
        let Some(player) = screen.announcement else {
            return;
        };

        egui::Window::new("Starting Player")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(format!("Player {} starts first.", player));
                    if ui.button("OK").clicked() {
                        screen.dismiss_announcement();
                    }
                });
            });
    }

    fn render_quit_dialog(&mut self, ctx: &egui::Context) {
        egui::Window::new("Quit")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Are you sure you want to quit?");
                ui.horizontal(|ui| {
                    if ui.button("Yes").clicked() {
                        log!("Quit confirmed");
                        self.quit_confirmed = true;
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                    if ui.button("No").clicked() {
                        self.quit_dialog_open = false;
                    }
                });
            });
    }

    fn render_main(&mut self, ui: &mut egui::Ui) {
        let restart_delay = self.config.round.restart_delay();

        ui.vertical_centered(|ui| {
            ui.heading("Tic Tac Toe");
            ui.add_space(8.0);

            match &mut self.state {
                AppState::Setup { .. } => {
                    ui.label("Choose a symbol and a color for each player.");
                }
                AppState::Playing(screen) => {
                    let interactive = screen.accepts_clicks() && !self.quit_dialog_open;
                    let clicked = render_board(
                        ui,
                        screen.session.game_state(),
                        &screen.assignment,
                        interactive,
                    );
                    if let Some(position) = clicked {
                        screen.handle_click(position, restart_delay, Instant::now());
                    }

                    ui.add_space(8.0);
                    ui.label(RichText::new(screen.winner_label()).size(18.0).strong());
                    if let Some(turn) = screen.turn_label() {
                        ui.label(turn);
                    }
                    if let Some(timer) = screen.restart_timer {
                        ui.label(format!("Next round in {:.1}s", timer.remaining().as_secs_f32()));
                    }
                    ui.add_space(4.0);
                    let statistics = screen.session.statistics().to_string();
                    ui.label(RichText::new(statistics).size(14.0));
                }
            }
        });
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_close_request(ctx);

        if let AppState::Playing(screen) = &mut self.state
            && let Some(remaining) = screen.tick(Instant::now())
        {
            ctx.request_repaint_after(remaining.min(COUNTDOWN_REFRESH));
        }

        egui::CentralPanel::default().show(ctx, |ui| self.render_main(ui));

        match self.state {
            AppState::Setup { .. } => self.render_setup(ctx),
            AppState::Playing(_) => self.render_announcement(ctx),
        }

        if self.quit_dialog_open {
            self.render_quit_dialog(ctx);
        }
    }
}
