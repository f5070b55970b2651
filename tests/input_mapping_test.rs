use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use santa_sorter::core::GameState;
use santa_sorter::input::{handle_key_event, map_mouse_event, should_quit};
use santa_sorter::term::{FieldLayout, Viewport};
use santa_sorter::types::{GameAction, SessionPhase, FIELD_HEIGHT, FIELD_WIDTH};

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn space_starts_and_q_quits() {
    let mut game = GameState::new(1);
    let space = KeyEvent::from(KeyCode::Char(' '));
    assert_eq!(handle_key_event(space), Some(GameAction::Confirm));
    game.apply_action(GameAction::Confirm);
    assert_eq!(game.phase(), SessionPhase::Active);

    assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
    assert!(should_quit(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(!should_quit(space));
}

#[test]
fn terminal_drag_moves_letter_in_field_coordinates() {
    let vp = Viewport::new(FIELD_WIDTH as u16 + 20, FIELD_HEIGHT as u16 + 6);
    let layout = FieldLayout::centered(vp);
    let mut game = GameState::new(11);
    game.start();

    let letter = game.letters()[0];
    let screen = layout.to_screen(letter.position());
    let down = map_mouse_event(
        mouse(MouseEventKind::Down(MouseButton::Left), screen.x as u16, screen.y as u16),
        layout.origin,
    )
    .unwrap();
    assert!(game.apply_pointer(down));
    assert_eq!(game.held_letter().map(|l| l.id), Some(letter.id));

    let drag = map_mouse_event(
        mouse(MouseEventKind::Drag(MouseButton::Left), screen.x as u16 + 3, screen.y as u16 + 1),
        layout.origin,
    )
    .unwrap();
    assert!(game.apply_pointer(drag));

    let held = game.held_letter().unwrap();
    assert_eq!(held.x, letter.x + 3 - 12);
    assert_eq!(held.y, letter.y + 1 - 2);
}

#[test]
fn right_button_is_ignored() {
    let ev = mouse(MouseEventKind::Down(MouseButton::Right), 5, 5);
    assert_eq!(map_mouse_event(ev, Default::default()), None);
}
