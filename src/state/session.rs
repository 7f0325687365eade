/// The session state and its reducer
///
/// All user-facing behavior is modeled as a closed set of intents applied
/// by a single transition function. The reducer mutates the in-memory
/// session and returns the store writes to perform; executing them is the
/// shell's job (main.rs). This keeps the logic unit-testable without a
/// rendering surface or a database.

use super::catalog::Catalog;
use super::data::MovieRecord;
use super::favorites::Favorites;
use super::store::{FAVORITES_KEY, USER_KEY};

/// The two UI themes. Dark is the launch default; the flag is not
/// persisted and resets on every start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// The other theme
    pub fn flipped(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

/// User commands, the only way the session changes after startup
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Flip between dark and light
    ToggleTheme,
    /// Replace the search string
    SetSearch(String),
    /// Flip favorite membership of the movie with this title
    ToggleFavorite(String),
    /// Open the detail view on a title, or close it with `None`
    Select(Option<String>),
    /// One-shot login with a display name
    SubmitName(String),
}

/// Side effects requested by the reducer, executed by the shell
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Overwrite a store key with a new value
    Write { key: &'static str, value: String },
}

/// In-memory application state
///
/// Favorites and user mirror their store slots; theme, search, and
/// selection are ephemeral.
pub struct Session {
    catalog: Catalog,
    pub theme: ThemeMode,
    pub search: String,
    selected: Option<String>,
    pub favorites: Favorites,
    pub user: Option<String>,
}

impl Session {
    /// Fresh session over a catalog, with nothing restored
    pub fn new(catalog: Catalog) -> Self {
        Session::restore(catalog, Favorites::new(), None)
    }

    /// Session with favorites and identity restored from the store
    pub fn restore(catalog: Catalog, favorites: Favorites, user: Option<String>) -> Self {
        Session {
            catalog,
            theme: ThemeMode::default(),
            search: String::new(),
            selected: None,
            favorites,
            user,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Catalog movies matching the current search string, in catalog order
    pub fn filtered(&self) -> Vec<&MovieRecord> {
        self.catalog.filter(&self.search)
    }

    /// The movie currently shown in the detail view, if any
    pub fn selected_movie(&self) -> Option<&MovieRecord> {
        self.selected
            .as_deref()
            .and_then(|title| self.catalog.find(title))
    }

    /// Apply one intent and return the store writes it requires.
    ///
    /// Total over every intent: unknown titles and rejected names are
    /// no-ops that request no writes.
    pub fn apply(&mut self, intent: Intent) -> Vec<Effect> {
        match intent {
            Intent::ToggleTheme => {
                self.theme = self.theme.flipped();
                Vec::new()
            }

            Intent::SetSearch(query) => {
                self.search = query;
                Vec::new()
            }

            Intent::ToggleFavorite(title) => {
                // Removal does not consult the catalog, so favorites
                // restored from an older store value can still be removed.
                let changed = if let Some(movie) = self.catalog.find(&title) {
                    self.favorites.toggle(movie.clone());
                    true
                } else {
                    self.favorites.remove(&title)
                };

                if !changed {
                    return Vec::new();
                }

                match self.favorites.to_json() {
                    Ok(value) => vec![Effect::Write {
                        key: FAVORITES_KEY,
                        value,
                    }],
                    Err(_) => Vec::new(),
                }
            }

            Intent::Select(Some(title)) => {
                // Only titles present in the catalog can be selected
                if self.catalog.find(&title).is_some() {
                    self.selected = Some(title);
                }
                Vec::new()
            }

            Intent::Select(None) => {
                self.selected = None;
                Vec::new()
            }

            Intent::SubmitName(name) => {
                // One-shot: a set identity never changes. Blank input is
                // rejected, but an accepted name is stored exactly as typed.
                if self.user.is_some() || name.trim().is_empty() {
                    return Vec::new();
                }

                self.user = Some(name.clone());
                vec![Effect::Write {
                    key: USER_KEY,
                    value: name,
                }]
            }
        }
    }
}
