// ABOUTME: Keyboard event handling for the quote wizard
// Every handled key mutates AppState synchronously; the loop redraws afterwards

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::state::AppState;
use crate::components::wizard::state::{DetailsField, WizardStep};

pub struct EventHandler;

impl EventHandler {
    pub fn handle_key_event(key_event: KeyEvent, state: &mut AppState) {
        // Ctrl-C quits from anywhere, including loading and error screens
        if key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL)
        {
            state.quit();
            return;
        }

        // Blocking config failure: any dismissal key quits
        if state.config_failed {
            if matches!(key_event.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter) {
                state.quit();
            }
            return;
        }

        // Loading (config fetch or submission in flight): keys are dropped
        if state.is_loading || !state.is_ready() {
            return;
        }

        match state.wizard.step {
            WizardStep::ServiceSelect => Self::handle_service_select_keys(key_event, state),
            WizardStep::PropertyDetails => Self::handle_details_keys(key_event, state),
            WizardStep::QuoteContact => Self::handle_contact_keys(key_event, state),
            WizardStep::Success => Self::handle_success_keys(key_event, state),
        }
    }

    fn handle_service_select_keys(key_event: KeyEvent, state: &mut AppState) {
        match key_event.code {
            KeyCode::Up | KeyCode::Char('k') => state.move_service_selection(false),
            KeyCode::Down | KeyCode::Char('j') => state.move_service_selection(true),
            KeyCode::Enter => state.select_service(),
            KeyCode::Esc | KeyCode::Char('q') => state.quit(),
            _ => {}
        }
    }

    fn handle_details_keys(key_event: KeyEvent, state: &mut AppState) {
        match key_event.code {
            KeyCode::Tab => {
                state.wizard.details_focus = state.wizard.details_focus.next();
            }
            KeyCode::BackTab => {
                state.wizard.details_focus = state.wizard.details_focus.previous();
            }
            KeyCode::Enter => state.advance_from_details(),
            KeyCode::Esc => state.go_back(),
            KeyCode::Left => state.wizard.cycle_selector(false),
            KeyCode::Right => state.wizard.cycle_selector(true),
            KeyCode::Up if state.wizard.details_focus == DetailsField::Extras => {
                state.move_extras_cursor(false);
            }
            KeyCode::Down if state.wizard.details_focus == DetailsField::Extras => {
                state.move_extras_cursor(true);
            }
            KeyCode::Char(' ') if state.wizard.details_focus == DetailsField::Extras => {
                state.toggle_highlighted_extra();
            }
            KeyCode::Char(c) if state.wizard.details_focus.is_text() => {
                state.wizard.input_char(c);
            }
            KeyCode::Backspace if state.wizard.details_focus.is_text() => {
                state.wizard.backspace();
            }
            _ => {}
        }
    }

    fn handle_contact_keys(key_event: KeyEvent, state: &mut AppState) {
        match key_event.code {
            KeyCode::Tab | KeyCode::Down => {
                state.wizard.contact_focus = state.wizard.contact_focus.next();
            }
            KeyCode::BackTab | KeyCode::Up => {
                state.wizard.contact_focus = state.wizard.contact_focus.previous();
            }
            KeyCode::Enter => state.submit(),
            KeyCode::Esc => state.go_back(),
            KeyCode::Char(c) => state.wizard.input_char(c),
            KeyCode::Backspace => state.wizard.backspace(),
            _ => {}
        }
    }

    fn handle_success_keys(key_event: KeyEvent, state: &mut AppState) {
        // Terminal step: the only remaining action is leaving the widget
        if matches!(key_event.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter) {
            state.quit();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::wizard::state::ContactField;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ready_state() -> AppState {
        let mut state = AppState::new("org-1", "terminal://mowquote");
        state.pending_async_action = None;
        state.apply_config_result(Ok(test_config()));
        state
    }

    fn test_config() -> crate::api::types::OrgConfig {
        serde_json::from_str(
            r#"{
                "businessName": "GreenBlade", "currency": "£",
                "services": [
                    {"id": "mow", "name": "Lawn Mowing"},
                    {"id": "treat", "name": "Lawn Treatment"}
                ],
                "extras": ["Fertilizer Treatment", "Edging"],
                "pricing": {
                    "small": 25, "medium": 40, "large": 60, "estate": 120,
                    "extraFertilizer": 10, "extraEdging": 8,
                    "extraWeeding": 12, "extraLeafCleanup": 15,
                    "weeklyDiscount": 15, "fortnightlyDiscount": 12, "monthlyDiscount": 10
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_ctrl_c_quits_anywhere() {
        let mut state = ready_state();
        EventHandler::handle_key_event(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &mut state,
        );
        assert!(state.should_quit);
    }

    #[test]
    fn test_keys_dropped_while_loading() {
        let mut state = ready_state();
        state.is_loading = true;
        EventHandler::handle_key_event(key(KeyCode::Enter), &mut state);
        assert_eq!(state.wizard.step, WizardStep::ServiceSelect);
    }

    #[test]
    fn test_enter_selects_highlighted_service() {
        let mut state = ready_state();
        EventHandler::handle_key_event(key(KeyCode::Down), &mut state);
        EventHandler::handle_key_event(key(KeyCode::Enter), &mut state);

        assert_eq!(state.wizard.step, WizardStep::PropertyDetails);
        assert_eq!(state.wizard.form.service_id, "treat");
    }

    #[test]
    fn test_typing_q_in_address_does_not_quit() {
        let mut state = ready_state();
        state.select_service();
        assert_eq!(state.wizard.details_focus, DetailsField::Address);

        EventHandler::handle_key_event(key(KeyCode::Char('q')), &mut state);

        assert!(!state.should_quit);
        assert_eq!(state.wizard.form.address, "q");
    }

    #[test]
    fn test_space_toggles_extra_only_under_extras_focus() {
        let mut state = ready_state();
        state.select_service();

        EventHandler::handle_key_event(key(KeyCode::Char(' ')), &mut state);
        assert_eq!(state.wizard.form.address, " ");
        assert!(state.wizard.form.extras.is_empty());

        state.wizard.details_focus = DetailsField::Extras;
        EventHandler::handle_key_event(key(KeyCode::Char(' ')), &mut state);
        assert_eq!(state.wizard.form.extras, vec!["Fertilizer Treatment"]);
    }

    #[test]
    fn test_contact_focus_cycles() {
        let mut state = ready_state();
        state.select_service();
        state.wizard.form.address = "12 Meadow Lane".to_string();
        state.advance_from_details();

        assert_eq!(state.wizard.contact_focus, ContactField::Name);
        EventHandler::handle_key_event(key(KeyCode::Tab), &mut state);
        assert_eq!(state.wizard.contact_focus, ContactField::Email);
        EventHandler::handle_key_event(key(KeyCode::BackTab), &mut state);
        assert_eq!(state.wizard.contact_focus, ContactField::Name);
    }

    #[test]
    fn test_success_step_only_quits() {
        let mut state = ready_state();
        state.wizard.step = WizardStep::Success;

        EventHandler::handle_key_event(key(KeyCode::Esc), &mut state);

        assert_eq!(state.wizard.step, WizardStep::Success);
        assert!(state.should_quit);
    }
}
