//! TUI application: main loop
//!
//! Architecture:
//! ```text
//! ChatApp (select! loop)                 reply tasks (JoinSet)
//!   ├─ crossterm EventStream               └─ use_case.reply(request)
//!   │    └─ KeyHandler → ChatSession ──spawn──┘
//!   ├─ replies.join_next() → ChatSession::reply_arrived
//!   └─ tick_interval (flash expiry, spinner)
//! ```
//!
//! Every store mutation happens on this loop, so appends are serialized.

use super::keys::KeyHandler;
use super::session::ChatSession;
use super::widgets::{
    MainLayout, header::HeaderWidget, input::InputWidget, message_list::MessageList,
    status_bar::StatusBarWidget,
};
use crate::config::TuiConfig;
use chatpane_application::{MessageStore, ReplyOutcome, SubmitMessageUseCase};
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::stream::StreamExt;
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    style::{Color, Style},
    widgets::{Block, Borders},
};
use std::io;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Main TUI application
pub struct ChatApp {
    session: ChatSession,
    config: TuiConfig,
}

impl ChatApp {
    pub fn new(
        store: MessageStore,
        use_case: Arc<SubmitMessageUseCase>,
        config: TuiConfig,
    ) -> Self {
        Self {
            session: ChatSession::new(store, use_case),
            config,
        }
    }

    /// Run the TUI main loop; returns the store with the whole session
    pub async fn run(mut self) -> io::Result<MessageStore> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(info);
        }));

        info!(responder = %self.session.state.responder_name, "TUI started");
        let result = self.event_loop(&mut terminal).await;

        // Restore terminal even when the loop failed
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result?;
        info!(messages = self.session.store().len(), "TUI closed");
        Ok(self.session.into_store())
    }

    async fn event_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(self.config.tick);
        let mut replies: JoinSet<ReplyOutcome> = JoinSet::new();

        loop {
            if self.session.take_redraw() {
                terminal.draw(|frame| render(frame, &mut self.session, &self.config))?;
            }

            if self.session.state.should_quit {
                break;
            }

            tokio::select! {
                // Terminal events (keyboard, resize)
                maybe_event = event_stream.next() => match maybe_event {
                    Some(Ok(event)) => self.handle_terminal_event(event, &mut replies),
                    Some(Err(e)) => return Err(e),
                    None => break,
                },

                // Finished replies
                Some(joined) = replies.join_next(), if !replies.is_empty() => match joined {
                    Ok(outcome) => self.session.reply_arrived(outcome),
                    Err(e) => {
                        warn!("Reply task failed: {}", e);
                        self.session.reply_lost("reply task failed");
                    }
                },

                // Tick for flash expiry and spinner animation
                _ = tick.tick() => {
                    let had_flash = self.session.state.flash_message.is_some();
                    self.session.state.expire_flash(self.config.flash_ttl);
                    let flash_expired = had_flash && self.session.state.flash_message.is_none();
                    if self.session.state.tick_spinner() || flash_expired {
                        self.session.request_redraw();
                    }
                }
            }
        }

        if !replies.is_empty() {
            // Dropping the JoinSet aborts them
            debug!(pending = replies.len(), "Discarding pending replies");
        }
        Ok(())
    }

    /// Handle a terminal (crossterm) event
    fn handle_terminal_event(&mut self, event: Event, replies: &mut JoinSet<ReplyOutcome>) {
        match event {
            Event::Key(key) => {
                let action = KeyHandler::handle(key);
                if let Some(request) = self.session.handle_action(action) {
                    replies.spawn(self.session.reply(request));
                }
            }
            Event::Resize(_, _) => self.session.request_redraw(),
            _ => {}
        }
    }
}

/// Render all widgets
fn render(frame: &mut Frame, session: &mut ChatSession, config: &TuiConfig) {
    let (store, state) = session.view_mut();

    let input_lines = u16::try_from(state.input.line_count()).unwrap_or(u16::MAX);
    let layout = MainLayout::compute(frame.area(), input_lines, config.max_input_height);

    frame.render_widget(
        HeaderWidget::new(&state.responder_name, store.len()),
        layout.header,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Conversation ")
        .style(Style::default().fg(Color::White));
    frame.render_stateful_widget(
        MessageList::new(store.messages(), &config.icons, store.revision()).block(block),
        layout.messages,
        &mut state.list,
    );

    frame.render_widget(InputWidget::new(&state.input), layout.input);
    frame.render_widget(StatusBarWidget::new(state), layout.status_bar);
}
