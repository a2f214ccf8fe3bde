//! State of the terminal chat window and its key handling.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::assistant_service::{AssistantService, ReplyResult};
use crate::core::constants::{QUICK_ACTIONS, QUICK_ACTION_TRANSCRIPT_LIMIT};
use crate::core::session::{ConversationSession, RequestId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyLoopAction {
    Continue,
    Quit,
}

/// Lines moved per PageUp/PageDown.
const PAGE_SCROLL: u16 = 10;

pub struct ChatWidget {
    pub session: ConversationSession,
    pub input: String,
    /// Lines scrolled up from the bottom; zero follows new messages.
    pub scroll_from_bottom: u16,
    service: AssistantService,
}

impl ChatWidget {
    pub fn new(service: AssistantService) -> Self {
        Self {
            session: ConversationSession::new(),
            input: String::new(),
            scroll_from_bottom: 0,
            service,
        }
    }

    pub fn quick_actions_visible(&self) -> bool {
        self.session.messages().len() < QUICK_ACTION_TRANSCRIPT_LIMIT
            && !self.session.is_pending()
            && !self.session.is_persona_active()
    }

    /// Send `text` through the session. Returns whether a request went out.
    pub fn send_text(&mut self, text: &str) -> bool {
        match self.session.submit(text) {
            Some(outbound) => {
                self.service.spawn_request(outbound);
                self.scroll_to_bottom();
                true
            }
            None => false,
        }
    }

    pub fn submit_input(&mut self) -> bool {
        let text = std::mem::take(&mut self.input);
        if self.send_text(&text) {
            true
        } else {
            self.input = text;
            false
        }
    }

    pub fn apply_result(&mut self, result: ReplyResult, id: RequestId) {
        if self.session.resolve(id, result).is_some() {
            self.scroll_to_bottom();
        }
    }

    pub fn clear_chat(&mut self) {
        self.session.reset();
        self.scroll_to_bottom();
    }

    pub fn back_to_professional(&mut self) {
        self.session.toggle_persona();
        self.scroll_to_bottom();
    }

    /// Stop delivering results; called when the window closes.
    pub fn unmount(&self) {
        self.service.unmount();
    }

    fn scroll_to_bottom(&mut self) {
        self.scroll_from_bottom = 0;
    }

    fn scroll_up(&mut self, lines: u16) {
        self.scroll_from_bottom = self.scroll_from_bottom.saturating_add(lines);
    }

    fn scroll_down(&mut self, lines: u16) {
        self.scroll_from_bottom = self.scroll_from_bottom.saturating_sub(lines);
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> KeyLoopAction {
        if key.kind != KeyEventKind::Press {
            return KeyLoopAction::Continue;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => return KeyLoopAction::Quit,
            KeyCode::Esc => return KeyLoopAction::Quit,
            KeyCode::Char('l') if ctrl => self.clear_chat(),
            KeyCode::Char('p') if ctrl => {
                if self.session.is_persona_active() {
                    self.back_to_professional();
                }
            }
            KeyCode::F(n @ 1..=4) => {
                if self.quick_actions_visible() {
                    self.send_text(QUICK_ACTIONS[usize::from(n) - 1]);
                }
            }
            KeyCode::Up => self.scroll_up(1),
            KeyCode::Down => self.scroll_down(1),
            KeyCode::PageUp => self.scroll_up(PAGE_SCROLL),
            KeyCode::PageDown => self.scroll_down(PAGE_SCROLL),
            // The input is disabled while a reply is pending.
            _ if self.session.is_pending() => {}
            KeyCode::Enter => {
                self.submit_input();
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) if !ctrl => self.input.push(c),
            _ => {}
        }

        KeyLoopAction::Continue
    }
}
