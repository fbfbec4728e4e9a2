//! Rendering tests for the terminal game view (no tty required).

use tui_hanoi::core::Game;
use tui_hanoi::term::{FrameBuffer, GameView, Viewport};
use tui_hanoi::types::{GameAction, PegId};

fn text_of(fb: &FrameBuffer) -> String {
    let mut s = String::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            s.push(fb.get(x, y).map(|c| c.ch).unwrap_or(' '));
        }
        s.push('\n');
    }
    s
}

#[test]
fn test_view_reflects_move_and_best_counters() {
    let mut game = Game::new(4);
    let text = text_of(&GameView.render(&game, Viewport::new(80, 24)));
    assert!(text.contains("MOVES    0"));
    assert!(text.contains("BEST   15"));

    game.apply_action(GameAction::SelectPeg(PegId::Left));
    game.apply_action(GameAction::SelectPeg(PegId::Right));
    let text = text_of(&GameView.render(&game, Viewport::new(80, 24)));
    assert!(text.contains("MOVES    1"));
}

#[test]
fn test_view_updates_after_disk_count_change() {
    let mut game = Game::new(3);
    game.apply_action(GameAction::IncreaseDisks);

    let text = text_of(&GameView.render(&game, Viewport::new(80, 24)));
    assert!(text.contains("DISKS  4"));
    assert!(text.contains("BEST   15"));
}

#[test]
fn test_render_into_reuses_framebuffer() {
    let game = Game::new(3);
    let mut fb = FrameBuffer::new(0, 0);

    GameView.render_into(&game, Viewport::new(80, 24), &mut fb);
    assert_eq!((fb.width(), fb.height()), (80, 24));

    // Same size again: contents refresh in place.
    GameView.render_into(&game, Viewport::new(80, 24), &mut fb);
    assert!(text_of(&fb).contains("TOWER OF HANOI"));

    // Terminal resize.
    GameView.render_into(&game, Viewport::new(100, 30), &mut fb);
    assert_eq!((fb.width(), fb.height()), (100, 30));
}

#[test]
fn test_win_banner_shown_only_when_solved() {
    let mut game = Game::new(1);
    let text = text_of(&GameView.render(&game, Viewport::new(80, 24)));
    assert!(!text.contains("YOU WIN!"));

    game.apply_action(GameAction::SelectPeg(PegId::Left));
    game.apply_action(GameAction::SelectPeg(PegId::Right));
    let text = text_of(&GameView.render(&game, Viewport::new(80, 24)));
    assert!(text.contains("YOU WIN!"));
}
