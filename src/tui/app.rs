//! Application state for the TUI.

use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use crossterm::event::Event;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Color,
    Frame,
};
use tracing::{debug, warn};

use super::{
    components::{
        hit_test, CardTrack, CardTrackInput, CardView, CategoryStrip, CategoryStripInput,
        ClickTarget, Component, Header, HeaderInput, HelpMenu, ProgressBar, ProgressBarInput,
        StatusBar, Theme, ThemeMode,
    },
    input::{Input, InputMapper, CELL_WIDTH_PX},
    preferences::Preferences,
};
use crate::{
    carousel::{Navigator, NavigatorConfig, Outcome, Phase, PointerPhase, SettleCurve, TrackTransform},
    deck::{CategoryId, Deck},
    error::Result,
};

/// Redraw interval while the track is moving.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);
/// Wake-up interval when nothing is animating.
const IDLE_INTERVAL: Duration = Duration::from_millis(500);

/// Application state.
pub struct App {
    deck: Deck,
    navigator: Navigator,
    input: InputMapper,
    theme: Theme,
    /// Where the theme choice is saved, if anywhere.
    preferences_path: Option<PathBuf>,
    /// Card viewport from the last render.
    card_area: Rect,
    /// Track position (in cards) currently on screen.
    displayed: f32,
    curve: Option<SettleCurve>,
    /// Whether the active pointer interaction started on the card track.
    pointer_on_track: bool,
    header: Header,
    strip: CategoryStrip,
    track: CardTrack,
    progress: ProgressBar,
    status: StatusBar,
    help: HelpMenu,
    /// Whether app should exit.
    pub should_exit: bool,
}

impl App {
    pub fn new(deck: Deck, config: NavigatorConfig, mode: ThemeMode) -> Result<Self> {
        let navigator = Navigator::new(&deck, config)?;
        let track = CardTrack::new(CardView::from_deck(&deck));
        Ok(Self {
            deck,
            navigator,
            input: InputMapper::default(),
            theme: Theme::new(mode),
            preferences_path: None,
            card_area: Rect::default(),
            displayed: 0.0,
            curve: None,
            pointer_on_track: false,
            header: Header::default(),
            strip: CategoryStrip::default(),
            track,
            progress: ProgressBar::default(),
            status: StatusBar::default(),
            help: HelpMenu::default(),
            should_exit: false,
        })
    }

    /// Save the theme to `path` each time it is toggled.
    #[must_use]
    pub fn with_preferences(mut self, path: PathBuf) -> Self {
        self.preferences_path = Some(path);
        self
    }

    pub const fn theme_mode(&self) -> ThemeMode {
        self.theme.mode
    }

    pub const fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Track position (in cards) currently on screen.
    pub const fn displayed_position(&self) -> f32 {
        self.displayed
    }

    fn card_width_px(&self) -> f32 {
        f32::from(self.card_area.width.max(1)) * CELL_WIDTH_PX
    }

    /// Handle a terminal event.
    pub fn handle_event(&mut self, event: &Event, now: Instant) {
        if let Event::Resize(..) = event {
            self.curve = None;
            return;
        }
        for input in self.input.translate(event) {
            self.handle_input(input, now);
        }
    }

    fn handle_input(&mut self, input: Input, now: Instant) {
        if self.help.is_visible() && !matches!(input, Input::ToggleHelp | Input::Dismiss | Input::Quit) {
            return;
        }

        let outcome = match input {
            Input::Nav(key) => self.navigator.key(key, now),
            Input::PreviousCategory => self.step_category(-1, now),
            Input::NextCategory => self.step_category(1, now),
            Input::Pointer { sample, column, row } => {
                if sample.phase == PointerPhase::Start {
                    self.pointer_on_track = self.card_area.contains((column, row).into());
                }
                if !self.pointer_on_track {
                    return;
                }
                self.navigator.pointer(sample, now)
            }
            Input::Click { column, row } => self.click(column, row, now),
            Input::ToggleTheme => {
                self.toggle_theme();
                return;
            }
            Input::ToggleHelp => {
                self.help.toggle();
                if self.help.is_visible() {
                    // The overlay swallows the release, so the drag cannot finish.
                    self.navigator.cancel_drag();
                    self.pointer_on_track = false;
                }
                return;
            }
            Input::Dismiss => {
                if self.help.is_visible() {
                    self.help.hide();
                } else {
                    self.should_exit = true;
                }
                return;
            }
            Input::Quit => {
                self.should_exit = true;
                return;
            }
        };

        if outcome != Outcome::Ignored && outcome != Outcome::Tracking {
            debug!(?input, ?outcome, "Carousel transition");
        }
    }

    fn toggle_theme(&mut self) {
        self.theme = Theme::new(self.theme.mode.toggled());
        let Some(path) = &self.preferences_path else {
            return;
        };
        let preferences = Preferences {
            theme: self.theme.mode,
        };
        if let Err(e) = preferences.save(path) {
            warn!(path = %path.display(), "Cannot save preferences: {e}");
        }
    }

    fn click(&mut self, column: u16, row: u16, now: Instant) -> Outcome {
        let regions = self
            .strip
            .click_regions()
            .iter()
            .chain(self.progress.click_regions())
            .cloned()
            .collect::<Vec<_>>();
        match hit_test(&regions, column, row) {
            Some(ClickTarget::Category(category)) => self.navigator.jump_to_category(category, now),
            Some(ClickTarget::Dot { category, relative }) => self.navigator.jump_to_category_relative(
                category,
                i64::try_from(relative).unwrap_or(i64::MAX),
                now,
            ),
            None => Outcome::Ignored,
        }
    }

    /// Jump to the first card of the neighbouring category that has cards.
    fn step_category(&mut self, step: isize, now: Instant) -> Outcome {
        let mapper = self.navigator.mapper();
        let current = mapper.category_of(self.navigator.global_index()).0;
        let count = self.deck.categories().len();
        let mut candidate = current;
        loop {
            let Some(next) = candidate.checked_add_signed(step).filter(|&c| c < count) else {
                return Outcome::Ignored;
            };
            candidate = next;
            if mapper.category_size(CategoryId(candidate)) > 0 {
                break;
            }
        }
        self.navigator.jump_to_category(CategoryId(candidate), now)
    }

    /// Advance timers and the settle animation.
    pub fn update(&mut self, now: Instant) {
        self.navigator.tick(now);

        let snapshot = self.navigator.snapshot();
        let target = TrackTransform::project(&snapshot).card_position(self.card_width_px());

        match snapshot.phase {
            Phase::Settling => {
                let retarget = self
                    .curve
                    .is_none_or(|curve| (curve.target() - target).abs() > f32::EPSILON);
                if retarget {
                    let duration = self.navigator.config().settle_duration;
                    let start = self
                        .navigator
                        .settle_deadline()
                        .and_then(|deadline| deadline.checked_sub(duration))
                        .unwrap_or(now);
                    self.curve = Some(SettleCurve::new(self.displayed, target, start, duration));
                }
                if let Some(curve) = self.curve {
                    self.displayed = curve.position_at(now);
                }
            }
            Phase::Idle | Phase::Dragging => {
                self.curve = None;
                self.displayed = target;
            }
        }
    }

    /// How long the event loop may sleep before the next update.
    pub fn next_wakeup(&self, now: Instant) -> Duration {
        match self.navigator.settle_deadline() {
            Some(deadline) => FRAME_INTERVAL.min(deadline.saturating_duration_since(now)),
            None if self.navigator.phase() == Phase::Dragging => FRAME_INTERVAL,
            None => IDLE_INTERVAL,
        }
    }

    /// Cancel pending timers before the app is dropped.
    pub fn shutdown(&mut self) {
        self.navigator.cancel_settle();
        self.curve = None;
    }

    /// Render the UI.
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let [header_area, strip_area, card_area, progress_area, status_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        if self.card_area != card_area {
            self.card_area = card_area;
            self.navigator.set_viewport_width(self.card_width_px());
        }

        let snapshot = self.navigator.snapshot();
        let pills = self
            .deck
            .categories()
            .iter()
            .enumerate()
            .map(|(i, c)| (c.name.clone(), Theme::accent(c, i)))
            .collect::<Vec<_>>();
        let accent = pills
            .get(snapshot.category.0)
            .map_or(Color::Cyan, |(_, color)| *color);

        self.header.update(HeaderInput {
            title: self.deck.title().to_string(),
            theme: self.theme,
        });
        self.strip.update(CategoryStripInput {
            pills,
            active: snapshot.category,
            theme: self.theme,
        });
        self.track.update(CardTrackInput {
            position: self.displayed,
            current: snapshot.global_index,
            theme: self.theme,
        });
        self.progress.update(ProgressBarInput {
            category: snapshot.category,
            category_size: snapshot.category_size,
            relative_index: snapshot.category_relative_index,
            accent,
            theme: self.theme,
        });
        self.status.update(snapshot.phase);

        self.header.render(frame, header_area);
        self.strip.render(frame, strip_area);
        self.track.render(frame, card_area);
        self.progress.render(frame, progress_area);
        self.status.render(frame, status_area);
        self.help.render(frame, area);
    }
}
