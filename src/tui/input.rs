//! Translation of terminal events into carousel input.
//!
//! Terminal mice report cells, not pixels. A cell is treated as
//! [`CELL_WIDTH_PX`] x [`CELL_HEIGHT_PX`] so the navigator's pixel thresholds
//! keep their meaning.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use crate::carousel::{NavKey, PointerSample};

pub const CELL_WIDTH_PX: f32 = 8.0;
pub const CELL_HEIGHT_PX: f32 = 16.0;

/// What a terminal event means to the app.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    Nav(NavKey),
    PreviousCategory,
    NextCategory,
    /// Pointer sample in pixels, plus the cell it was reported at.
    Pointer { sample: PointerSample, column: u16, row: u16 },
    /// Press and release on the same cell.
    Click { column: u16, row: u16 },
    ToggleTheme,
    ToggleHelp,
    Dismiss,
    Quit,
}

pub fn cell_to_px(column: u16, row: u16) -> (f32, f32) {
    (
        (f32::from(column) + 0.5) * CELL_WIDTH_PX,
        (f32::from(row) + 0.5) * CELL_HEIGHT_PX,
    )
}

/// Stateful translator; remembers where the left button went down so a
/// release on the same cell can also be reported as a click.
#[derive(Debug, Default)]
pub struct InputMapper {
    pressed_at: Option<(u16, u16)>,
    moved: bool,
}

impl InputMapper {
    pub fn translate(&mut self, event: &Event) -> Vec<Input> {
        match event {
            Event::Key(key) => Self::key(key).into_iter().collect(),
            Event::Mouse(mouse) => self.mouse(mouse),
            _ => Vec::new(),
        }
    }

    fn key(key: &KeyEvent) -> Option<Input> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        let input = match key.code {
            KeyCode::Left | KeyCode::Char('h') => Input::Nav(NavKey::ArrowLeft),
            KeyCode::Right | KeyCode::Char('l') => Input::Nav(NavKey::ArrowRight),
            KeyCode::Char(' ') => Input::Nav(NavKey::Space),
            KeyCode::Home | KeyCode::Char('g') => Input::Nav(NavKey::Home),
            KeyCode::End | KeyCode::Char('G') => Input::Nav(NavKey::End),
            KeyCode::Char('[') => Input::PreviousCategory,
            KeyCode::Char(']') => Input::NextCategory,
            KeyCode::Char('t') => Input::ToggleTheme,
            KeyCode::Char('?') => Input::ToggleHelp,
            KeyCode::Esc => Input::Dismiss,
            KeyCode::Char('q') => Input::Quit,
            _ => return None,
        };
        Some(input)
    }

    fn mouse(&mut self, mouse: &MouseEvent) -> Vec<Input> {
        let (column, row) = (mouse.column, mouse.row);
        let (x, y) = cell_to_px(column, row);
        let pointer = |sample| Input::Pointer {
            sample,
            column,
            row,
        };

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.pressed_at = Some((column, row));
                self.moved = false;
                vec![pointer(PointerSample::start(x, y))]
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if self.pressed_at != Some((column, row)) {
                    self.moved = true;
                }
                vec![pointer(PointerSample::moved(x, y))]
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let mut inputs = vec![pointer(PointerSample::end(x, y))];
                if self.pressed_at.take() == Some((column, row)) && !self.moved {
                    inputs.push(Input::Click { column, row });
                }
                inputs
            }
            MouseEventKind::ScrollDown => vec![Input::Nav(NavKey::ArrowRight)],
            MouseEventKind::ScrollUp => vec![Input::Nav(NavKey::ArrowLeft)],
            _ => Vec::new(),
        }
    }
}
