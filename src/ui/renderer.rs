use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::core::constants::QUICK_ACTIONS;
use crate::core::message::Message;
use crate::core::persona::PersonaMode;
use crate::ui::text_wrapping::wrap_text;
use crate::ui::theme::Theme;
use crate::ui::widget::ChatWidget;

const PENDING_BUBBLE: &str = "...";

fn avatar(mode: PersonaMode) -> &'static str {
    match mode {
        PersonaMode::Professional => "🤖",
        PersonaMode::Personal => "💖",
    }
}

/// Transcript rows for a `width`-column area: a header row per message, its
/// content wrapped to `width`, then a blank spacer. Each entry is exactly one
/// terminal row, so the transcript is rendered without `Wrap`.
pub fn build_display_lines(
    messages: &[Message],
    pending: bool,
    mode: PersonaMode,
    theme: &Theme,
    width: u16,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for message in messages {
        let (label, prefix_style, text_style) = if message.is_user() {
            ("You", theme.user_prefix_style, theme.user_text_style)
        } else {
            (
                mode.title(),
                theme.assistant_prefix_style,
                theme.assistant_text_style,
            )
        };

        lines.push(Line::from(vec![
            Span::styled(label, prefix_style),
            Span::styled(format!("  {}", message.timestamp), theme.timestamp_style),
        ]));
        for row in wrap_text(&message.content, usize::from(width)) {
            lines.push(Line::from(Span::styled(row, text_style)));
        }
        lines.push(Line::from(""));
    }

    if pending {
        lines.push(Line::from(Span::styled(
            mode.title(),
            theme.assistant_prefix_style,
        )));
        lines.push(Line::from(Span::styled(PENDING_BUBBLE, theme.pending_style)));
    }

    lines
}

fn quick_action_lines(theme: &Theme) -> Vec<Line<'static>> {
    QUICK_ACTIONS
        .iter()
        .enumerate()
        .map(|(index, action)| {
            Line::from(vec![
                Span::styled(format!("F{} ", index + 1), theme.quick_key_style),
                Span::styled(*action, theme.quick_text_style),
            ])
        })
        .collect()
}

fn header_line(mode: PersonaMode, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("{} ", avatar(mode))),
        Span::styled(mode.title(), theme.title_style),
        Span::raw("  "),
        Span::styled(format!("● {}", mode.status()), theme.status_style),
    ])
}

fn hint_line(mode: PersonaMode, theme: &Theme) -> Line<'static> {
    let hint = if mode.is_personal() {
        "Ctrl+P professional mode • Ctrl+L clear • Esc close"
    } else {
        "Ctrl+L clear • Esc close"
    };
    Line::from(Span::styled(hint, theme.hint_style))
}

pub fn ui(f: &mut Frame, widget: &ChatWidget) {
    let session = &widget.session;
    let mode = session.mode();
    let theme = Theme::for_mode(mode);

    let quick_height = if widget.quick_actions_visible() {
        QUICK_ACTIONS.len() as u16 + 2
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(quick_height),
            Constraint::Length(3),
        ])
        .split(f.area());

    let header = Paragraph::new(vec![header_line(mode, &theme), hint_line(mode, &theme)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style),
    );
    f.render_widget(header, chunks[0]);

    render_transcript(f, widget, &theme, chunks[1]);

    if quick_height > 0 {
        let quick = Paragraph::new(quick_action_lines(&theme)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(theme.timestamp_style)
                .title("Quick questions"),
        );
        f.render_widget(quick, chunks[2]);
    }

    render_input(f, widget, &theme, chunks[3]);
}

fn render_transcript(f: &mut Frame, widget: &ChatWidget, theme: &Theme, area: Rect) {
    let session = &widget.session;
    let lines = build_display_lines(
        session.messages(),
        session.is_pending(),
        session.mode(),
        theme,
        area.width,
    );

    let total = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let max_offset = total.saturating_sub(area.height);
    let scroll_offset = max_offset.saturating_sub(widget.scroll_from_bottom);

    let transcript = Paragraph::new(lines).scroll((scroll_offset, 0));
    f.render_widget(transcript, area);
}

fn render_input(f: &mut Frame, widget: &ChatWidget, theme: &Theme, area: Rect) {
    let session = &widget.session;
    let pending = session.is_pending();

    let (text, style) = if widget.input.is_empty() && !pending {
        (session.mode().input_placeholder(), theme.placeholder_style)
    } else {
        (widget.input.as_str(), theme.input_text_style)
    };
    let title = if pending {
        "Waiting for a reply..."
    } else {
        "Enter to send"
    };

    let input = Paragraph::new(text).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style)
            .title(title),
    );
    f.render_widget(input, area);

    if !pending {
        let typed = UnicodeWidthStr::width(widget.input.as_str());
        let max_x = area.width.saturating_sub(2);
        let offset = u16::try_from(typed).unwrap_or(u16::MAX).min(max_x);
        f.set_cursor_position((area.x + 1 + offset, area.y + 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{AssistantReply, AssistantRequest};
    use crate::core::assistant_service::AssistantService;
    use crate::core::message::TranscriptRole;
    use crate::core::transport::{AssistantTransport, TransportError};
    use async_trait::async_trait;
    use chrono::{Local, TimeZone};
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    struct SilentTransport;

    #[async_trait]
    impl AssistantTransport for SilentTransport {
        async fn ask(&self, _request: &AssistantRequest) -> Result<AssistantReply, TransportError> {
            Ok(AssistantReply::default())
        }
    }

    fn message(role: TranscriptRole, content: &str) -> Message {
        let at = Local.with_ymd_and_hms(2024, 5, 1, 9, 15, 0).unwrap();
        Message::stamped(role, content, at)
    }

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn each_message_gets_header_content_and_spacer() {
        let messages = vec![
            message(TranscriptRole::Assistant, "Hello"),
            message(TranscriptRole::User, "two\nlines"),
        ];
        let theme = Theme::professional();
        let lines = build_display_lines(&messages, false, PersonaMode::Professional, &theme, 40);

        let texts: Vec<String> = lines.iter().map(line_text).collect();
        assert_eq!(
            texts,
            vec![
                "Nayan's AI  09:15",
                "Hello",
                "",
                "You  09:15",
                "two",
                "lines",
                "",
            ]
        );
    }

    #[test]
    fn pending_adds_typing_bubble() {
        let messages = vec![message(TranscriptRole::User, "hi")];
        let theme = Theme::personal();
        let lines = build_display_lines(&messages, true, PersonaMode::Personal, &theme, 40);

        let texts: Vec<String> = lines.iter().map(line_text).collect();
        assert_eq!(texts[texts.len() - 2], "Nayan's Love");
        assert_eq!(texts[texts.len() - 1], PENDING_BUBBLE);
    }

    #[test]
    fn content_is_wrapped_to_area_width() {
        let messages = vec![message(TranscriptRole::Assistant, "alpha beta gamma")];
        let theme = Theme::professional();
        let lines = build_display_lines(&messages, false, PersonaMode::Professional, &theme, 11);

        let texts: Vec<String> = lines.iter().map(line_text).collect();
        assert_eq!(
            texts,
            vec!["Nayan's AI  09:15", "alpha beta", "gamma", ""]
        );
    }

    fn widget_with_reply(reply: &str) -> ChatWidget {
        let (service, _rx) = AssistantService::new(Arc::new(SilentTransport));
        let mut widget = ChatWidget::new(service);
        let outbound = widget.session.submit("tell me more").expect("request goes out");
        widget
            .session
            .resolve(outbound.id, Ok(AssistantReply::new(reply)));
        widget
    }

    fn screen_rows(terminal: &Terminal<TestBackend>) -> Vec<String> {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn newest_reply_is_fully_visible_when_scrolled_to_bottom() {
        let mut reply = (0..20)
            .map(|n| format!("word{n:02}abcdef"))
            .collect::<Vec<_>>()
            .join(" ");
        reply.push_str(" LASTWORD");
        let widget = widget_with_reply(&reply);

        let mut terminal = Terminal::new(TestBackend::new(23, 24)).unwrap();
        terminal.draw(|f| ui(f, &widget)).unwrap();

        let rows = screen_rows(&terminal);
        assert!(
            rows.iter().any(|row| row.contains("LASTWORD")),
            "last word of the reply is not on screen:\n{}",
            rows.join("\n")
        );
    }

    #[test]
    fn scrolling_up_reveals_earlier_rows() {
        let reply = (0..20)
            .map(|n| format!("word{n:02}abcdef"))
            .collect::<Vec<_>>()
            .join(" ");
        let mut widget = widget_with_reply(&reply);
        widget.scroll_from_bottom = u16::MAX;

        let mut terminal = Terminal::new(TestBackend::new(23, 24)).unwrap();
        terminal.draw(|f| ui(f, &widget)).unwrap();

        let rows = screen_rows(&terminal);
        assert!(rows.iter().any(|row| row.contains("Hi! I'm")));
        assert!(!rows.iter().any(|row| row.contains("word19abcdef")));
    }
}
