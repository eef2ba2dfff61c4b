use std::rc::Rc;

use eframe::Frame;
use egui::{vec2, Color32, RichText, ScrollArea};

use drunkenfall_shared::Tournament;

use super::{AppInterface, ScreenDef, ScreenMetadata, ScreenWidget};
use crate::app::theme::{archer_color, AVATAR_SIZE, FONT_SIZE_SM, MARGIN_LG, MARGIN_MD, MARGIN_SM};
use crate::app::AppEvent;
use crate::models::Player;
use crate::store::{PersonRepository, PlayerStateRepository, StoreState, TournamentsLoading};

/// The tournament list; the only mapped route of the app.
pub struct TournamentListScreen {
    // subscriber kept alive so we can request_repaint on store updates
    subscriber: Option<Rc<dyn Fn()>>,
}

impl TournamentListScreen {
    pub const PATH: &'static str = "/towerfall/";

    pub fn new() -> Self {
        Self { subscriber: None }
    }

    fn render_loading_ui(&self, ui: &mut egui::Ui) {
        ui.spinner();
        ui.label("Loading tournaments...");
    }

    fn render_error_ui(&self, ui: &mut egui::Ui, app: &mut AppInterface, error: &str) {
        ui.label(RichText::new("Could not load tournaments").color(Color32::RED));
        ui.label(RichText::new(error).color(Color32::GRAY));
        ui.add_space(MARGIN_LG);
        if ui
            .add_sized(vec2(150.0, 40.0), egui::Button::new("Retry"))
            .clicked()
        {
            app.queue_event(AppEvent::RefreshTournaments);
        }
    }

    fn render_list(
        &self,
        ui: &mut egui::Ui,
        app: &mut AppInterface,
        tournaments: &[Tournament],
    ) {
        if ui
            .add_sized(vec2(150.0, 30.0), egui::Button::new("Refresh"))
            .clicked()
        {
            app.queue_event(AppEvent::RefreshTournaments);
        }
        ui.add_space(MARGIN_MD);

        if tournaments.is_empty() {
            ui.label(RichText::new("No tournaments yet.").color(Color32::GRAY));
            return;
        }

        ScrollArea::vertical().show(ui, |ui| {
            for tournament in tournaments {
                self.render_tournament(ui, app, tournament);
                ui.add_space(MARGIN_MD);
            }
        });
    }

    fn render_tournament(
        &self,
        ui: &mut egui::Ui,
        app: &mut AppInterface,
        tournament: &Tournament,
    ) {
        let title = RichText::new(&tournament.name).size(FONT_SIZE_SM).strong();
        egui::CollapsingHeader::new(title)
            .id_salt(&tournament.id)
            .show(ui, |ui| {
                let mut status = tournament.status().to_string();
                if let Some(scheduled) = tournament.scheduled {
                    status = format!("{} · {}", status, scheduled.format("%Y-%m-%d %H:%M"));
                }
                ui.label(
                    RichText::new(format!(
                        "{} · {} players",
                        status,
                        tournament.players.len()
                    ))
                    .color(Color32::GRAY),
                );
                ui.add_space(MARGIN_SM);
                self.render_players(ui, app, tournament);
            });
    }

    fn render_players(&self, ui: &mut egui::Ui, app: &mut AppInterface, tournament: &Tournament) {
        let people: Rc<dyn PersonRepository> = Rc::new(app.store().clone());
        let states: Rc<dyn PlayerStateRepository> = Rc::new(app.store().clone());

        let mut players: Vec<Player> = Vec::new();
        let mut broken = 0usize;
        for record in &tournament.players {
            match Player::from_record(record, people.clone(), states.clone()) {
                Ok(player) => players.push(player),
                Err(_) => broken += 1,
            }
        }

        // Most entertaining on top.
        players.sort_by_key(|p| -p.state().map(|s| s.score()).unwrap_or(0));

        egui::Grid::new(("players", &tournament.id))
            .num_columns(4)
            .striped(true)
            .show(ui, |ui| {
                for player in &players {
                    self.render_player_row(ui, player);
                    ui.end_row();
                }
            });

        if broken > 0 {
            ui.label(
                RichText::new(format!("{} unlisted participants", broken))
                    .color(Color32::DARK_GRAY),
            );
        }
    }

    fn render_player_row(&self, ui: &mut egui::Ui, player: &Player) {
        match player.avatar() {
            Ok(url) => {
                ui.add(
                    egui::Image::from_uri(url).fit_to_exact_size(vec2(AVATAR_SIZE, AVATAR_SIZE)),
                );
            }
            Err(_) => {
                ui.label("—");
            }
        }

        match player.person() {
            Ok(person) => {
                let mut nick = RichText::new(player.display_name().unwrap_or_default());
                if let Some(tint) = person.preferred_color().and_then(archer_color) {
                    nick = nick.color(tint);
                }
                ui.label(nick.strong());
                ui.label(
                    RichText::new(player.first_name().unwrap_or_default()).color(Color32::GRAY),
                );
            }
            Err(err) => {
                // A lookup miss renders as a placeholder; there is nothing
                // to recover here.
                ui.label(RichText::new(format!("unavailable ({})", err)).color(Color32::DARK_GRAY));
                ui.label("");
            }
        }

        match player.state() {
            Ok(state) => {
                ui.label(format!("{} pts", state.score()));
            }
            Err(_) => {
                ui.label(RichText::new("–").color(Color32::DARK_GRAY));
            }
        }
    }
}

impl Default for TournamentListScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenWidget for TournamentListScreen {
    fn ui(&mut self, app_interface: &mut AppInterface, ui: &mut egui::Ui, _frame: &mut Frame) {
        let ctx = ui.ctx().clone();

        // Repaint whenever the store changes under us.
        if self.subscriber.is_none() {
            let ctx_clone = ctx.clone();
            let sub = app_interface.store().subscribe(move || {
                ctx_clone.request_repaint();
            });
            self.subscriber = Some(sub);
        }

        let snapshot: StoreState = app_interface.store().snapshot();

        ui.vertical_centered(|ui| {
            ui.add_space(MARGIN_LG);
            ui.heading("Tournaments");
            ui.add_space(MARGIN_LG);

            match snapshot.tournaments {
                TournamentsLoading::NotStarted => {
                    if ui
                        .add_sized(vec2(150.0, 40.0), egui::Button::new("Load tournaments"))
                        .clicked()
                    {
                        app_interface.queue_event(AppEvent::RefreshTournaments);
                    }
                }
                TournamentsLoading::Loading => {
                    self.render_loading_ui(ui);
                    ctx.request_repaint();
                }
                TournamentsLoading::Loaded(ref tournaments) => {
                    let tournaments = tournaments.clone();
                    self.render_list(ui, app_interface, &tournaments);
                }
                TournamentsLoading::Error(ref err) => {
                    let err = err.clone();
                    self.render_error_ui(ui, app_interface, &err);
                }
            }

            ui.add_space(MARGIN_LG);
        });
    }
}

impl ScreenDef for TournamentListScreen {
    fn metadata() -> ScreenMetadata
    where
        Self: Sized,
    {
        ScreenMetadata {
            path: Self::PATH,
            display_name: "Tournaments",
            icon: "🏹",
            description: "Every Drunken TowerFall tournament, live ones first",
        }
    }

    fn create() -> Box<dyn ScreenWidget>
    where
        Self: Sized,
    {
        Box::new(Self::new())
    }
}
