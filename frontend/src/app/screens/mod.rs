use eframe::Frame;

pub mod tournament_list;

pub use tournament_list::TournamentListScreen;

use crate::app::AppEvent;
use crate::store::Store;

/// What the shell hands a screen each frame.
pub struct AppInterface<'a> {
    pub events: &'a mut Vec<AppEvent>,
    pub store: &'a Store,
}

impl<'a> AppInterface<'a> {
    pub fn queue_event(&mut self, event: AppEvent) {
        self.events.push(event);
    }

    pub fn store(&self) -> &Store {
        self.store
    }
}

/// Object-safe runtime trait for drawing a screen
pub trait ScreenWidget {
    fn ui(&mut self, app_interface: &mut AppInterface, ui: &mut egui::Ui, frame: &mut Frame);
}

/// Compile-time definition trait: metadata + factory
pub trait ScreenDef {
    fn metadata() -> ScreenMetadata
    where
        Self: Sized;
    fn create() -> Box<dyn ScreenWidget>
    where
        Self: Sized;
}

/// Metadata for screen configuration and display
#[derive(Clone, Copy)]
pub struct ScreenMetadata {
    /// URL path for routing and stable id (must be URL-safe)
    pub path: &'static str,
    /// Display name for the screen
    pub display_name: &'static str,
    /// Icon/emoji for the screen
    pub icon: &'static str,
    /// Description shown as hover text
    pub description: &'static str,
}

/// A registered screen entry holding metadata and a factory
pub struct RegisteredScreen {
    pub meta: ScreenMetadata,
    pub factory: fn() -> Box<dyn ScreenWidget>,
}

/// Route table: registered screens plus the redirect rules applied before
/// matching.
pub struct ScreenRegistry {
    by_path: std::collections::HashMap<&'static str, RegisteredScreen>,
    redirects: std::collections::HashMap<&'static str, &'static str>,
}

impl ScreenRegistry {
    /// Ergonomic helper to register a screen type implementing ScreenDef
    pub fn register<T: ScreenDef + 'static>(&mut self) {
        let meta = T::metadata();
        self.by_path.insert(
            meta.path,
            RegisteredScreen {
                meta,
                factory: T::create,
            },
        );
    }

    pub fn redirect(&mut self, from: &'static str, to: &'static str) {
        self.redirects.insert(from, to);
    }

    pub fn new() -> Self {
        let mut reg = Self {
            by_path: std::collections::HashMap::new(),
            redirects: std::collections::HashMap::new(),
        };

        reg.register::<TournamentListScreen>();

        // As long as we only have Drunken TowerFall on the site, the root
        // always goes straight to the towerfall app.
        reg.redirect("/", TournamentListScreen::PATH);

        reg
    }

    /// Resolve a URL path: apply redirects, then match exactly.
    pub fn resolve(&self, path: &str) -> Option<&'static str> {
        let key = if path.is_empty() { "/" } else { path };
        let key = self.redirects.get(key).copied().unwrap_or(key);
        self.by_path.get(key).map(|r| r.meta.path)
    }

    /// Where unmatched paths land: the resolution of the root.
    pub fn default_path(&self) -> &'static str {
        self.resolve("/").unwrap_or(TournamentListScreen::PATH)
    }

    /// Resolve metadata by path
    pub fn meta_by_path(&self, path: &str) -> Option<&ScreenMetadata> {
        let key = if path.is_empty() { "/" } else { path };
        self.by_path.get(key).map(|r| &r.meta)
    }

    /// Get a screen factory by path
    pub fn factory_by_path(&self, path: &str) -> Option<fn() -> Box<dyn ScreenWidget>> {
        let key = if path.is_empty() { "/" } else { path };
        self.by_path.get(key).map(|r| r.factory)
    }
}

impl Default for ScreenRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_redirects_to_the_tournament_list() {
        let reg = ScreenRegistry::new();
        assert_eq!(reg.resolve("/"), Some("/towerfall/"));
        assert_eq!(reg.resolve(""), Some("/towerfall/"));
        assert_eq!(reg.resolve("/towerfall/"), Some("/towerfall/"));
    }

    #[test]
    fn unmatched_paths_fall_back_to_the_default() {
        let reg = ScreenRegistry::new();
        assert_eq!(reg.resolve("/nope"), None);
        assert_eq!(reg.default_path(), "/towerfall/");
    }

    #[test]
    fn metadata_resolves_for_registered_paths() {
        let reg = ScreenRegistry::new();
        let meta = reg.meta_by_path("/towerfall/").unwrap();
        assert_eq!(meta.display_name, "Tournaments");
        assert!(reg.meta_by_path("/").is_none());
        assert!(reg.factory_by_path("/towerfall/").is_some());
    }
}
