//! Interactive chat window.
//!
//! The loop owns the [`ChatWidget`]: it draws, polls the keyboard, and applies
//! assistant results as they arrive from the [`AssistantService`] channel.

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use ratatui::crossterm::event::{self, Event};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::core::assistant_service::{AssistantService, ReplyResult};
use crate::core::session::RequestId;
use crate::core::transport::AssistantTransport;
use crate::ui::lifecycle::{restore_terminal, setup_terminal, ChatTerminal};
use crate::ui::renderer::ui;
use crate::ui::widget::{ChatWidget, KeyLoopAction};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub async fn run_chat(transport: Arc<dyn AssistantTransport>) -> Result<(), Box<dyn Error>> {
    let (service, rx) = AssistantService::new(transport);
    let mut widget = ChatWidget::new(service);

    let mut terminal = setup_terminal()?;
    tracing::info!("chat window opened");

    let result = event_loop(&mut terminal, &mut widget, rx).await;

    widget.unmount();
    restore_terminal(&mut terminal)?;
    tracing::info!("chat window closed");

    result
}

async fn event_loop(
    terminal: &mut ChatTerminal,
    widget: &mut ChatWidget,
    mut rx: UnboundedReceiver<(ReplyResult, RequestId)>,
) -> Result<(), Box<dyn Error>> {
    loop {
        terminal.draw(|f| ui(f, widget))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if widget.handle_key(key) == KeyLoopAction::Quit {
                    return Ok(());
                }
            }
        }

        while let Ok((result, id)) = rx.try_recv() {
            widget.apply_result(result, id);
        }

        // Let spawned requests progress on single-threaded runtimes.
        tokio::task::yield_now().await;
    }
}
