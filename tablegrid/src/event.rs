use crossterm::event::{Event as CrosstermEvent, MouseEvent};

use crate::layout::{Point, Rect};

/// Last known pointer position, fed from the host's input events.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    position: Option<Point>,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A pointer resting at `position`.
    pub fn at(position: Point) -> Self {
        Self {
            position: Some(position),
        }
    }

    pub fn position(&self) -> Option<Point> {
        self.position
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = Some(position);
    }

    /// Forget the position, e.g. when the pointer leaves the window.
    pub fn clear(&mut self) {
        self.position = None;
    }

    pub fn is_over(&self, rect: Rect) -> bool {
        self.position.is_some_and(|p| rect.contains(p))
    }

    /// Track the pointer from a terminal event.
    /// Returns true if the known position changed.
    pub fn handle(&mut self, event: &CrosstermEvent) -> bool {
        let next = match event {
            CrosstermEvent::Mouse(mouse) => Some(Point::from(mouse)),
            CrosstermEvent::FocusLost => None,
            _ => return false,
        };
        if next == self.position {
            return false;
        }
        log::trace!("[pointer] {:?} -> {:?}", self.position, next);
        self.position = next;
        true
    }
}

// Terminal cells map onto one unit each.
impl From<&MouseEvent> for Point {
    fn from(mouse: &MouseEvent) -> Self {
        Point::new(f32::from(mouse.column), f32::from(mouse.row))
    }
}

impl From<MouseEvent> for Point {
    fn from(mouse: MouseEvent) -> Self {
        Point::from(&mouse)
    }
}
