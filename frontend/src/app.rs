//! Application shell: routing state, screen dispatch, event handling.

use std::collections::HashMap;

use egui::{Context, FontId, RichText};
use tracing::info;

use crate::effects::TournamentsEffect;
#[cfg(target_arch = "wasm32")]
use crate::router::Router;
use crate::store::Store;

pub mod screens;
pub mod theme;

use screens::{AppInterface, ScreenRegistry, ScreenWidget};
use theme::{FONT_SIZE_MD, MARGIN_SM};

/// Events screens can queue for the shell.
#[derive(Debug, Clone)]
pub enum AppEvent {
    ChangeRoute(String),
    RefreshTournaments,
}

/// Application UI/Screen manager
pub struct App {
    // current route path, always one the registry resolved
    current_screen_path: String,
    // lazily-created screens by path
    screens: HashMap<String, Box<dyn ScreenWidget>>,
    screen_registry: ScreenRegistry,

    store: Store,
    tournaments: TournamentsEffect,

    // Router for URL handling
    #[allow(dead_code)]
    #[cfg(target_arch = "wasm32")]
    router: Option<Router>,
    #[allow(dead_code)]
    #[cfg(not(target_arch = "wasm32"))]
    router: Option<()>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        let store = Store::new();
        let tournaments = TournamentsEffect::new(store.clone());
        let screen_registry = ScreenRegistry::new();

        #[cfg(target_arch = "wasm32")]
        let mut router = Router::new().ok();
        #[cfg(not(target_arch = "wasm32"))]
        let router: Option<()> = None;

        // Resolve the entry url through the redirect table so a load of
        // "/" lands on the tournament list with the address bar following.
        #[cfg(target_arch = "wasm32")]
        let current_path = {
            let entry = router
                .as_ref()
                .map(|r| r.current_path().to_string())
                .unwrap_or_else(|| "/".to_string());
            let resolved = screen_registry
                .resolve(&entry)
                .unwrap_or_else(|| screen_registry.default_path());
            if let Some(ref mut router) = router {
                let _ = router.navigate_to_path(resolved);
            }
            resolved.to_string()
        };
        #[cfg(not(target_arch = "wasm32"))]
        let current_path = screen_registry.default_path().to_string();

        info!(path = %current_path, "starting at");

        tournaments.fetch();
        #[cfg(target_arch = "wasm32")]
        tournaments.spawn_auto_refresh();

        Self {
            current_screen_path: current_path,
            screens: HashMap::new(),
            screen_registry,
            store,
            tournaments,
            router,
        }
    }

    /// Change route by path and update the URL.
    fn change_route(&mut self, path: &str) {
        let new_path = self
            .screen_registry
            .resolve(path)
            .unwrap_or_else(|| self.screen_registry.default_path());
        if self.current_screen_path != new_path {
            self.current_screen_path = new_path.to_string();
            #[cfg(target_arch = "wasm32")]
            if let Some(ref mut router) = self.router {
                let _ = router.navigate_to_path(new_path);
            }
        }
    }

    /// Pick up back/forward navigation.
    fn check_url_changes(&mut self) {
        #[cfg(target_arch = "wasm32")]
        if let Some(ref mut router) = self.router {
            if let Ok(true) = router.check_for_url_changes() {
                let new_path = self
                    .screen_registry
                    .resolve(router.current_path())
                    .unwrap_or_else(|| self.screen_registry.default_path());
                if new_path != self.current_screen_path {
                    self.current_screen_path = new_path.to_string();
                }
            }
        }
    }

    pub fn current_path(&self) -> &str {
        &self.current_screen_path
    }

    fn render_top_bar(&mut self, ctx: &Context, events: &mut Vec<AppEvent>) {
        egui::TopBottomPanel::top("global_top_bar")
            .show_separator_line(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.add_space(MARGIN_SM);
                    let title = RichText::new("🏹 Drunken TowerFall")
                        .font(FontId::proportional(FONT_SIZE_MD))
                        .strong();
                    if ui
                        .add(egui::Label::new(title).sense(egui::Sense::click()))
                        .clicked()
                    {
                        events.push(AppEvent::ChangeRoute("/".to_string()));
                    }
                    if let Some(meta) = self
                        .screen_registry
                        .meta_by_path(&self.current_screen_path)
                    {
                        ui.separator();
                        ui.label(meta.display_name).on_hover_text(meta.description);
                    }
                });
            });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, frame: &mut eframe::Frame) {
        self.check_url_changes();

        let mut events = Vec::new();
        self.render_top_bar(ctx, &mut events);

        let mut app_interface = AppInterface {
            events: &mut events,
            store: &self.store,
        };

        egui::CentralPanel::default().show(ctx, |ui| {
            // Ensure the active screen exists
            if !self.screens.contains_key(&self.current_screen_path) {
                if let Some(factory) = self
                    .screen_registry
                    .factory_by_path(&self.current_screen_path)
                {
                    let boxed = factory();
                    self.screens.insert(self.current_screen_path.clone(), boxed);
                }
            }
            if let Some(screen) = self.screens.get_mut(&self.current_screen_path) {
                screen.ui(&mut app_interface, ui, frame);
            }
        });

        let events = std::mem::take(app_interface.events);
        for event in events {
            match event {
                AppEvent::ChangeRoute(path) => {
                    self.change_route(&path);
                }
                AppEvent::RefreshTournaments => {
                    self.tournaments.fetch();
                }
            }
        }

        // Repaint continuously; fetches and the refresh timer complete
        // outside egui's own event flow.
        ctx.request_repaint();
    }
}
