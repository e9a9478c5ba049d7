use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

/// The five screens of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Dashboard,
    Upload,
    Assessments,
    Study,
    Library,
}

impl Screen {
    /// Stable code used in the URL (`?active=<code>`)
    pub fn code(&self) -> &'static str {
        match self {
            Screen::Dashboard => "dashboard",
            Screen::Upload => "upload",
            Screen::Assessments => "assessments",
            Screen::Study => "study",
            Screen::Library => "library",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "dashboard" => Some(Screen::Dashboard),
            "upload" => Some(Screen::Upload),
            "assessments" => Some(Screen::Assessments),
            "study" => Some(Screen::Study),
            "library" => Some(Screen::Library),
            _ => None,
        }
    }

    /// All screens, in navigation order
    pub fn all() -> Vec<Screen> {
        vec![
            Screen::Dashboard,
            Screen::Upload,
            Screen::Assessments,
            Screen::Study,
            Screen::Library,
        ]
    }
}

/// Query-string shape for active-screen restoration
#[derive(Debug, Default, Serialize, Deserialize)]
struct ActiveQuery {
    active: Option<String>,
}

/// Application-wide UI state.
///
/// The active screen is the only cross-component state in the app; every
/// screen keeps its own state locally.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Screen>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Screen::Dashboard),
        }
    }

    pub fn activate(&self, screen: Screen) {
        log::debug!("activate screen: '{}'", screen.code());
        self.active.set(screen);
    }

    /// Restore the active screen from `?active=...` and mirror later
    /// changes back into the URL. Runs once when the shell is created.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let query: ActiveQuery =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(screen) = query.active.as_deref().and_then(Screen::from_code) {
            self.active.set(screen);
        }

        let this = *self;
        Effect::new(move |_| {
            let query = ActiveQuery {
                active: Some(this.active.get().code().to_string()),
            };
            let query_string = serde_qs::to_string(&query).unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only touch history if the URL actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for screen in Screen::all() {
            assert_eq!(Screen::from_code(screen.code()), Some(screen));
        }
        assert_eq!(Screen::from_code("settings"), None);
        assert_eq!(Screen::from_code(""), None);
    }

    #[test]
    fn test_dashboard_is_default_and_first() {
        assert_eq!(Screen::default(), Screen::Dashboard);
        assert_eq!(Screen::all().first(), Some(&Screen::Dashboard));
        assert_eq!(Screen::all().len(), 5);
    }
}
