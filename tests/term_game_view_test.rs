use santa_sorter::core::{GameState, SimpleRng, Snowfall};
use santa_sorter::term::{FieldLayout, FrameBuffer, GameView, SnowView, Viewport};
use santa_sorter::types::{Point, FIELD_HEIGHT, FIELD_WIDTH, SESSION_MS};

/// Field plus its one-cell frame.
fn framed() -> Viewport {
    Viewport::new(FIELD_WIDTH as u16 + 2, FIELD_HEIGHT as u16 + 2)
}

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_renders_field_frame() {
    let snap = GameState::new(1).snapshot();
    let fb = GameView::default().render(&snap, None, framed());

    let (r, b) = (FIELD_WIDTH as u16 + 1, FIELD_HEIGHT as u16 + 1);
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(r, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, b).unwrap().ch, '└');
    assert_eq!(fb.get(r, b).unwrap().ch, '┘');
}

#[test]
fn welcome_screen_shows_title_and_high_score() {
    let snap = GameState::new(1).with_high_score(70).snapshot();
    let fb = GameView::default().render(&snap, None, framed());
    let text = screen_text(&fb);

    assert!(text.contains("Santa's Letter Sorter"));
    assert!(text.contains("Press SPACE to start"));
    assert!(text.contains("High Score: 70"));
}

#[test]
fn welcome_screen_draws_snow() {
    let mut rng = SimpleRng::new(2);
    let snow = Snowfall::new(FIELD_WIDTH, FIELD_HEIGHT, 40, &mut rng);
    let snap = GameState::new(1).snapshot();
    let fb = GameView::default().render(&snap, Some(&snow), framed());

    let flakes = fb.cells().iter().filter(|c| c.ch == '*' || c.ch == '·').count();
    assert!(flakes > 0);
}

#[test]
fn playing_screen_shows_hud_bins_and_letters() {
    let mut game = GameState::new(5);
    game.start();
    let snap = game.snapshot();
    let fb = GameView::default().render(&snap, None, framed());
    let text = screen_text(&fb);

    assert!(text.contains("Score: 0"));
    assert!(text.contains("Time: 45s"));
    for label in ["TOYS", "BOOKS", "SPORTS"] {
        assert!(text.contains(label), "missing bin label {label}");
    }

    // The last dealt letter is drawn on top of any overlap.
    let top = game.letters().last().unwrap();
    let first = top.text.split_whitespace().next().unwrap();
    assert!(text.contains(first), "missing letter text {first}");
}

#[test]
fn held_letter_follows_pointer_on_screen() {
    let mut game = GameState::new(5);
    game.start();
    let grab = game.letters()[0].position();
    assert!(game.pointer_down(grab));
    assert!(game.pointer_move(Point::new(40, 20)));

    let vp = framed();
    let layout = FieldLayout::centered(vp);
    let fb = GameView::default().render(&game.snapshot(), None, vp);

    // Pointer sits on the grab anchor, 12 right and 2 down of the corner.
    let corner = layout.to_screen(Point::new(28, 18));
    assert_eq!(fb.get(corner.x as u16, corner.y as u16).unwrap().ch, '┌');
}

#[test]
fn game_over_screen_shows_scores() {
    let mut game = GameState::new(5).with_high_score(12);
    game.start();
    game.tick(SESSION_MS);
    let fb = GameView::default().render(&game.snapshot(), None, framed());
    let text = screen_text(&fb);

    assert!(text.contains("GAME OVER"));
    assert!(text.contains("Final Score: 0"));
    assert!(text.contains("High Score: 12"));
    assert!(text.contains("Press SPACE to continue"));
}

#[test]
fn tiny_viewport_does_not_panic() {
    let mut game = GameState::new(5);
    game.start();
    let fb = GameView::default().render(&game.snapshot(), None, Viewport::new(10, 4));
    assert_eq!((fb.width(), fb.height()), (10, 4));
}

#[test]
fn snow_menu_fills_viewport() {
    let mut rng = SimpleRng::new(8);
    let snow = Snowfall::new(40, 12, 30, &mut rng);
    let fb = SnowView.render(&snow, Viewport::new(40, 12));
    let text = screen_text(&fb);
    assert!(text.contains("Snow Menu"));
    assert!(text.contains("q to quit"));
}

#[test]
fn hud_prints_negative_score() {
    let mut game = GameState::new(5);
    game.start();
    let mut snap = game.snapshot();
    snap.score = -15;
    let fb = GameView::default().render(&snap, None, framed());
    assert!(screen_text(&fb).contains("Score: -15 "));
}
