use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use super::gesture::{GestureTracker, Point};
use crate::game::{Action, Direction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    GameAction(Action),
    Quit,
    None,
}

pub struct InputHandler {
    gestures: GestureTracker,
}

impl InputHandler {
    pub fn new(swipe_threshold: i32) -> Self {
        Self {
            gestures: GestureTracker::new(swipe_threshold),
        }
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => turn(Direction::Up),
            KeyCode::Down => turn(Direction::Down),
            KeyCode::Left => turn(Direction::Left),
            KeyCode::Right => turn(Direction::Right),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => turn(Direction::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => turn(Direction::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => turn(Direction::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => turn(Direction::Right),

            // Controls
            KeyCode::Char(' ') | KeyCode::Enter => KeyAction::GameAction(Action::Start),
            KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::GameAction(Action::Restart),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }

    /// Left button press/release pairs act as taps and swipes over `board`
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent, board: Rect) -> KeyAction {
        let at = screen_point(mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.gestures.press(at);
                KeyAction::None
            }
            MouseEventKind::Up(MouseButton::Left) => self
                .gestures
                .release(at, board_center(board))
                .map_or(KeyAction::None, turn),
            _ => KeyAction::None,
        }
    }
}

fn turn(direction: Direction) -> KeyAction {
    KeyAction::GameAction(Action::Turn(direction))
}

/// Terminal rows are about twice as tall as columns are wide
fn screen_point(column: u16, row: u16) -> Point {
    Point::new(column as i32, row as i32 * 2)
}

fn board_center(board: Rect) -> Point {
    Point::new(
        board.x as i32 + board.width as i32 / 2,
        board.y as i32 * 2 + board.height as i32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use MouseEventKind::{Down, Drag, Up};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_arrow_keys() {
        let handler = InputHandler::new(4);

        let up = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(up), turn(Direction::Up));

        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(down), turn(Direction::Down));

        let left = KeyEvent::new(KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(left), turn(Direction::Left));

        let right = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(right), turn(Direction::Right));
    }

    #[test]
    fn test_wasd_keys() {
        let handler = InputHandler::new(4);

        let w = KeyEvent::new(KeyCode::Char('w'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(w), turn(Direction::Up));

        let a = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(handler.handle_key_event(a), turn(Direction::Left));
    }

    #[test]
    fn test_control_keys() {
        let handler = InputHandler::new(4);

        let space = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        assert_eq!(
            handler.handle_key_event(space),
            KeyAction::GameAction(Action::Start)
        );

        let r = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE);
        assert_eq!(
            handler.handle_key_event(r),
            KeyAction::GameAction(Action::Restart)
        );

        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(esc), KeyAction::Quit);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key_event(ctrl_c), KeyAction::Quit);

        let x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(x), KeyAction::None);
    }

    #[test]
    fn test_mouse_tap_left_of_board_center() {
        let mut handler = InputHandler::new(4);
        // 40x20 board at (10, 2): center column 30, row 12
        let board = Rect::new(10, 2, 40, 20);

        assert_eq!(
            handler.handle_mouse_event(mouse(Down(MouseButton::Left), 12, 12), board),
            KeyAction::None
        );
        assert_eq!(
            handler.handle_mouse_event(mouse(Up(MouseButton::Left), 12, 12), board),
            turn(Direction::Left)
        );
    }

    #[test]
    fn test_mouse_swipe_up() {
        let mut handler = InputHandler::new(4);
        let board = Rect::new(10, 2, 40, 20);

        handler.handle_mouse_event(mouse(Down(MouseButton::Left), 30, 18), board);
        handler.handle_mouse_event(mouse(Drag(MouseButton::Left), 30, 15), board);
        assert_eq!(
            handler.handle_mouse_event(mouse(Up(MouseButton::Left), 31, 12), board),
            turn(Direction::Up)
        );
    }

    #[test]
    fn test_right_button_ignored() {
        let mut handler = InputHandler::new(4);
        let board = Rect::new(0, 0, 40, 20);

        handler.handle_mouse_event(mouse(Down(MouseButton::Right), 1, 1), board);
        assert_eq!(
            handler.handle_mouse_event(mouse(Up(MouseButton::Right), 1, 1), board),
            KeyAction::None
        );
    }
}
