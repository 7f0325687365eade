use iced::widget::{
    button, canvas, column, container, horizontal_space, mouse_area, opaque, row, scrollable,
    stack, text, text_input, Column,
};
use iced::{border, Alignment, Color, Element, Length, Task, Theme};
use iced_aw::Wrap;

// Declare the state and widget modules
mod state;
mod ui;

use state::catalog::Catalog;
use state::data::MovieRecord;
use state::favorites::Favorites;
use state::session::{Effect, Intent, Session, ThemeMode};
use state::store::{Store, FAVORITES_KEY, USER_KEY};
use ui::rating::RatingBar;

/// Main application state
struct CineCritix {
    /// Session state driven by the reducer
    session: Session,
    /// The persistent key-value store
    store: Store,
    /// In-progress text of the name field (view-local draft)
    name_draft: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Search field edited
    SearchChanged(String),
    /// Theme toggle pressed
    ThemeToggled,
    /// Name field edited (pre-login draft)
    NameDraftChanged(String),
    /// Name field submitted with Enter
    NameSubmitted,
    /// Favorite button pressed on a card
    FavoriteToggled(String),
    /// Card pressed, opens the detail view
    MovieSelected(String),
    /// Detail view dismissed (close button or backdrop click)
    ModalDismissed,
}

impl CineCritix {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        // If this fails, we panic because the app cannot function without its store
        let store = Store::new()
            .expect("Failed to initialize store. Check permissions and disk space.");

        // Restore favorites and identity; anything unreadable degrades to defaults
        let favorites = match store.get(FAVORITES_KEY) {
            Ok(Some(raw)) => Favorites::from_json(&raw),
            Ok(None) => Favorites::new(),
            Err(e) => {
                eprintln!("⚠️  Could not read stored favorites: {}", e);
                Favorites::new()
            }
        };

        let user = match store.get(USER_KEY) {
            Ok(value) => value,
            Err(e) => {
                eprintln!("⚠️  Could not read stored user: {}", e);
                None
            }
        };

        println!("🎬 CineCritix initialized with {} favorites", favorites.len());

        let session = Session::restore(Catalog::builtin(), favorites, user);

        (
            CineCritix {
                session,
                store,
                name_draft: String::new(),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        let intent = match message {
            Message::SearchChanged(query) => Intent::SetSearch(query),
            Message::ThemeToggled => Intent::ToggleTheme,
            Message::NameDraftChanged(draft) => {
                self.name_draft = draft;
                return Task::none();
            }
            Message::NameSubmitted => Intent::SubmitName(self.name_draft.clone()),
            Message::FavoriteToggled(title) => Intent::ToggleFavorite(title),
            Message::MovieSelected(title) => Intent::Select(Some(title)),
            Message::ModalDismissed => Intent::Select(None),
        };

        let submitting_name = matches!(intent, Intent::SubmitName(_));

        for effect in self.session.apply(intent) {
            self.perform(effect);
        }

        // Once the greeting replaces the prompt, the draft is stale
        if submitting_name && self.session.user.is_some() {
            self.name_draft.clear();
        }

        Task::none()
    }

    /// Execute a store effect returned by the reducer.
    /// Write failures are logged and dropped, never surfaced in the UI.
    fn perform(&self, effect: Effect) {
        match effect {
            Effect::Write { key, value } => {
                if let Err(e) = self.store.set(key, &value) {
                    eprintln!("⚠️  Failed to persist {}: {}", key, e);
                }
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let mut page = column![self.view_header(), self.view_welcome()]
            .spacing(24)
            .padding(24);

        if !self.session.favorites.is_empty() {
            page = page.push(self.view_favorites());
        }

        page = page.push(self.view_grid());

        let base: Element<Message> = scrollable(page)
            .width(Length::Fill)
            .height(Length::Fill)
            .into();

        match self.session.selected_movie() {
            Some(movie) => modal(base, self.view_detail(movie)),
            None => base,
        }
    }

    /// Header row: app title, search field, theme toggle
    fn view_header(&self) -> Element<Message> {
        let theme_icon = match self.session.theme {
            ThemeMode::Dark => "☀️",
            ThemeMode::Light => "🌙",
        };

        row![
            text("🎬 CineCritix").size(28),
            horizontal_space(),
            text_input("Buscar...", &self.session.search)
                .on_input(Message::SearchChanged)
                .width(Length::Fixed(220.0)),
            button(text(theme_icon)).on_press(Message::ThemeToggled),
        ]
        .spacing(12)
        .align_y(Alignment::Center)
        .into()
    }

    /// Greeting once logged in, otherwise the one-shot name prompt
    fn view_welcome(&self) -> Element<Message> {
        let content: Column<Message> = match &self.session.user {
            Some(user) => column![text(format!("Bienvenido, {}", user)).size(22)],
            None => column![
                text("Ingresa tu nombre para comenzar:"),
                text_input("Tu nombre", &self.name_draft)
                    .on_input(Message::NameDraftChanged)
                    .on_submit(Message::NameSubmitted)
                    .width(Length::Fixed(220.0)),
            ],
        };

        container(content.spacing(8).align_x(Alignment::Center))
            .width(Length::Fill)
            .center_x(Length::Fill)
            .into()
    }

    /// Favorites section, only rendered when the list is non-empty
    fn view_favorites(&self) -> Element<Message> {
        let cards: Vec<Element<Message>> = self
            .session
            .favorites
            .iter()
            .map(|movie| self.view_favorite_card(movie))
            .collect();

        column![
            text("🎖️ Tus favoritas").size(22),
            Wrap::with_elements(cards).spacing(12.0).line_spacing(12.0),
        ]
        .spacing(12)
        .into()
    }

    /// Compact card used in the favorites section
    fn view_favorite_card<'a>(&'a self, movie: &'a MovieRecord) -> Element<'a, Message> {
        mouse_area(
            container(
                column![poster(120.0), text(movie.title.as_str()).size(16)].spacing(8),
            )
            .style(card_style)
            .padding(12)
            .width(Length::Fixed(200.0)),
        )
        .on_press(Message::MovieSelected(movie.title.clone()))
        .into()
    }

    /// The filtered catalog grid
    fn view_grid(&self) -> Element<Message> {
        let cards: Vec<Element<Message>> = self
            .session
            .filtered()
            .into_iter()
            .map(|movie| self.view_card(movie))
            .collect();

        column![
            text("🎬 Películas disponibles").size(22),
            Wrap::with_elements(cards).spacing(16.0).line_spacing(16.0),
        ]
        .spacing(12)
        .into()
    }

    /// Full movie card: poster, synopsis, rating, favorite toggle
    fn view_card<'a>(&'a self, movie: &'a MovieRecord) -> Element<'a, Message> {
        let favorite_label = if self.session.favorites.contains(&movie.title) {
            "💔 Quitar de favoritos"
        } else {
            "❤️ Agregar a favoritos"
        };

        let details = column![
            text(movie.title.as_str()).size(20),
            text(movie.description.as_str()).size(14),
            row![
                canvas(RatingBar {
                    rating: movie.rating
                })
                .width(Length::Fixed(90.0))
                .height(Length::Fixed(10.0)),
                text(format!("⭐ {} / 5", movie.rating)).size(14),
            ]
            .spacing(8)
            .align_y(Alignment::Center),
            button(text(favorite_label).size(14))
                .style(button::text)
                .on_press(Message::FavoriteToggled(movie.title.clone())),
        ]
        .spacing(8);

        mouse_area(
            container(column![poster(160.0), details].spacing(12))
                .style(card_style)
                .padding(16)
                .width(Length::Fixed(260.0)),
        )
        .on_press(Message::MovieSelected(movie.title.clone()))
        .into()
    }

    /// Detail view shown in the modal overlay
    fn view_detail<'a>(&'a self, movie: &'a MovieRecord) -> Element<'a, Message> {
        container(
            column![
                row![
                    horizontal_space(),
                    button(text("×").size(20))
                        .style(button::text)
                        .on_press(Message::ModalDismissed),
                ],
                poster(200.0),
                text(movie.title.as_str()).size(26),
                text(movie.description.as_str()).size(16),
                row![
                    canvas(RatingBar {
                        rating: movie.rating
                    })
                    .width(Length::Fixed(120.0))
                    .height(Length::Fixed(12.0)),
                    text(format!("⭐ {} / 5", movie.rating)).size(16),
                ]
                .spacing(8)
                .align_y(Alignment::Center),
            ]
            .spacing(12),
        )
        .style(detail_style)
        .padding(24)
        .width(Length::Fixed(420.0))
        .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        match self.session.theme {
            ThemeMode::Dark => Theme::Dark,
            ThemeMode::Light => Theme::Light,
        }
    }
}

fn main() -> iced::Result {
    iced::application(
        "CineCritix",
        CineCritix::update,
        CineCritix::view,
    )
    .theme(CineCritix::theme)
    .centered()
    .run_with(CineCritix::new)
}

/// Placeholder poster art. The real poster URL stays in the record (and in
/// the persisted favorites value) but is never fetched: no network calls.
fn poster(height: f32) -> Element<'static, Message> {
    container(text("🎞️").size(40))
        .style(poster_style)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

/// Overlay `content` on top of `base` behind a dimmed backdrop.
/// Clicking the backdrop dismisses; clicks on the content stay inside it.
fn modal<'a>(base: Element<'a, Message>, content: Element<'a, Message>) -> Element<'a, Message> {
    stack![
        base,
        opaque(
            mouse_area(
                container(opaque(content))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .center_x(Length::Fill)
                    .center_y(Length::Fill)
                    .style(backdrop_style)
            )
            .on_press(Message::ModalDismissed)
        ),
    ]
    .into()
}

/// Card background that follows the active theme
fn card_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: border::rounded(12.0),
        ..container::Style::default()
    }
}

/// Poster placeholder background, slightly stronger than the card
fn poster_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.strong.color.into()),
        border: border::rounded(8.0),
        ..container::Style::default()
    }
}

/// The detail view keeps a light surface in both themes
fn detail_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Color::WHITE.into()),
        text_color: Some(Color::from_rgb(0.1, 0.1, 0.1)),
        border: border::rounded(16.0),
        ..container::Style::default()
    }
}

/// Dimmed backdrop behind the detail view
fn backdrop_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(
            Color {
                a: 0.7,
                ..Color::BLACK
            }
            .into(),
        ),
        ..container::Style::default()
    }
}
