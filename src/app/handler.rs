use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::AppState;
use crate::ui::layout::button_at;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Timer(timer) => {
            state.dirty = true;
            state.widget.timer_elapsed(timer)
        }
        AppEvent::Tick => {
            if state.screen.tick() {
                state.dirty = true;
            }
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(w, h) => {
            state.set_viewport(w, h);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Windows reports releases too
    if key.kind != KeyEventKind::Press {
        return vec![];
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }
    if key.code == KeyCode::Char('q') {
        return vec![Action::Quit];
    }

    match state.keymap.lookup(key.code) {
        Some(button) => {
            state.dirty = true;
            state.widget.press(button)
        }
        None => vec![],
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return vec![];
    }
    match button_at(state.viewport, mouse.column, mouse.row) {
        Some(button) => {
            state.dirty = true;
            state.widget.press(button)
        }
        None => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::event::TimerKind;
    use crate::app::keymap::Keymap;
    use crate::config::AppConfig;
    use crossterm::event::KeyEventState;

    fn new_state() -> AppState {
        let mut state = AppState::new(AppConfig::default(), Keymap::default());
        state.set_viewport(80, 24);
        state
    }

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn click(column: u16, row: u16) -> AppEvent {
        AppEvent::Terminal(CEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }))
    }

    fn type_keys(state: &mut AppState, keys: &str) -> Vec<Action> {
        keys.chars()
            .flat_map(|c| handle_event(state, key(KeyCode::Char(c))))
            .collect()
    }

    #[test]
    fn test_keys_drive_calculator() {
        let mut state = new_state();
        type_keys(&mut state, "7+3");
        let actions = handle_event(&mut state, key(KeyCode::Enter));
        assert_eq!(actions, vec![Action::SetText("10".into())]);
    }

    #[test]
    fn test_quit_keys() {
        let mut state = new_state();
        assert_eq!(handle_event(&mut state, key(KeyCode::Char('q'))), vec![Action::Quit]);
        let ctrl_c = AppEvent::Terminal(CEvent::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert_eq!(handle_event(&mut state, ctrl_c), vec![Action::Quit]);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut state = new_state();
        let release = AppEvent::Terminal(CEvent::Key(KeyEvent {
            code: KeyCode::Char('5'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        }));
        assert!(handle_event(&mut state, release).is_empty());
        assert_eq!(state.widget.calculator().display_value, "0");
    }

    #[test]
    fn test_click_presses_keypad_button() {
        let mut state = new_state();
        // "7" cell, then "=" cell
        assert_eq!(
            handle_event(&mut state, click(27, 10)),
            vec![Action::SetText("7".into())]
        );
        handle_event(&mut state, click(53, 20));
        assert_eq!(state.widget.calculator().first_operand, Some(7.0));
        assert!(handle_event(&mut state, click(0, 0)).is_empty());
    }

    #[test]
    fn test_resize_updates_viewport() {
        let mut state = new_state();
        state.dirty = false;
        handle_event(&mut state, AppEvent::Terminal(CEvent::Resize(100, 40)));
        assert_eq!(state.viewport.width, 100);
        assert!(state.dirty);
    }

    #[test]
    fn test_help_timer_event_hides_panel() {
        let mut state = new_state();
        handle_event(&mut state, key(KeyCode::Char('?')));
        assert!(state.widget.help_visible());
        let actions = handle_event(&mut state, AppEvent::Timer(TimerKind::HideHelp(1)));
        assert_eq!(actions, vec![Action::HideHelp]);
    }

    #[test]
    fn test_tick_redraws_only_while_spinning() {
        let mut state = new_state();
        state.dirty = false;
        handle_event(&mut state, AppEvent::Tick);
        assert!(!state.dirty);

        use crate::app::sink::AnimationTrigger;
        state.screen.start_trigger_animation();
        handle_event(&mut state, AppEvent::Tick);
        assert!(state.dirty);
    }

    #[test]
    fn test_config_binding_is_used() {
        let keymap = Keymap::with_overrides(
            AppConfig {
                keys: [("x".to_string(), "operator:multiply".to_string())]
                    .into_iter()
                    .collect(),
                ..AppConfig::default()
            }
            .key_bindings()
            .unwrap(),
        );
        let mut state = AppState::new(AppConfig::default(), keymap);
        type_keys(&mut state, "6x7=");
        assert_eq!(state.widget.calculator().display_value, "42");
    }
}
