//! Mouse mapping from terminal events to pointer events.
//!
//! Terminal coordinates are shifted by the field origin (the terminal cell
//! where field cell `(0, 0)` is drawn), so the core only ever sees field
//! coordinates. Positions outside the field come through as-is (possibly
//! negative); hit testing simply misses them.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::{Point, PointerEvent};

/// Map a terminal mouse event to a pointer event in field coordinates.
///
/// Only the left button grabs and drops. Motion is reported with or without
/// a button so a held letter keeps following the pointer.
pub fn map_mouse_event(ev: MouseEvent, origin: Point) -> Option<PointerEvent> {
    let p = Point::new(ev.column as i32 - origin.x, ev.row as i32 - origin.y);
    match ev.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(PointerEvent::Down(p)),
        MouseEventKind::Up(MouseButton::Left) => Some(PointerEvent::Up(p)),
        MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
            Some(PointerEvent::Move(p))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_left_button_lifecycle() {
        let origin = Point::new(4, 2);
        assert_eq!(
            map_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 10, 5), origin),
            Some(PointerEvent::Down(Point::new(6, 3)))
        );
        assert_eq!(
            map_mouse_event(mouse(MouseEventKind::Drag(MouseButton::Left), 11, 6), origin),
            Some(PointerEvent::Move(Point::new(7, 4)))
        );
        assert_eq!(
            map_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 12, 7), origin),
            Some(PointerEvent::Up(Point::new(8, 5)))
        );
    }

    #[test]
    fn test_positions_left_of_origin_go_negative() {
        let origin = Point::new(10, 10);
        assert_eq!(
            map_mouse_event(mouse(MouseEventKind::Moved, 3, 4), origin),
            Some(PointerEvent::Move(Point::new(-7, -6)))
        );
    }

    #[test]
    fn test_other_buttons_ignored() {
        let origin = Point::default();
        assert_eq!(
            map_mouse_event(mouse(MouseEventKind::Down(MouseButton::Right), 1, 1), origin),
            None
        );
        assert_eq!(
            map_mouse_event(mouse(MouseEventKind::Drag(MouseButton::Middle), 1, 1), origin),
            None
        );
        assert_eq!(
            map_mouse_event(mouse(MouseEventKind::ScrollDown, 1, 1), origin),
            None
        );
    }
}
