//! Terminal UI
//!
//! Full-screen dashboard: title bar, balance chart, bet table and a status
//! footer. Drawing reads the controller's current state on every pass, so
//! partially loaded data shows up as soon as it arrives.

use std::io;

use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures_util::{Stream, StreamExt};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame, Terminal,
};

use crate::dashboard::{DashboardController, DashboardState};
use crate::views::{BalanceChart, BetHistory};

/// Restores the terminal even if the event loop bails out early
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Run the interactive dashboard until the user quits
pub async fn run(mut controller: DashboardController, title: &str) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let _guard = TerminalGuard;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;

    let result = event_loop(&mut terminal, &mut controller, EventStream::new(), title).await;
    terminal.show_cursor()?;
    result
}

async fn event_loop<B, K>(
    terminal: &mut Terminal<B>,
    controller: &mut DashboardController,
    mut keys: K,
    title: &str,
) -> anyhow::Result<()>
where
    B: Backend,
    K: Stream<Item = io::Result<Event>> + Unpin,
{
    controller.mount();

    loop {
        redraw(terminal, controller, title)?;

        if next_step(controller, &mut keys).await? == Step::Quit {
            break;
        }
    }

    tracing::info!("Dashboard closed");
    Ok(())
}

/// What the event loop does after one wake-up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Redraw,
    Quit,
}

/// Wait for a key or a loader result. The loader finishing counts as a
/// result too, so the frame after it no longer shows the loading marker.
async fn next_step<K>(controller: &mut DashboardController, keys: &mut K) -> anyhow::Result<Step>
where
    K: Stream<Item = io::Result<Event>> + Unpin,
{
    tokio::select! {
        maybe_key = keys.next() => match maybe_key {
            Some(Ok(Event::Key(key))) if is_quit(&key) => Ok(Step::Quit),
            // Resizes and other keys just trigger a redraw
            Some(Ok(_)) => Ok(Step::Redraw),
            Some(Err(e)) => Err(e.into()),
            None => Ok(Step::Quit),
        },
        maybe_event = controller.next_event(), if controller.is_loading() => {
            if let Some(event) = maybe_event {
                controller.apply(event);
            }
            Ok(Step::Redraw)
        }
    }
}

fn redraw<B: Backend>(
    terminal: &mut Terminal<B>,
    controller: &DashboardController,
    title: &str,
) -> io::Result<()> {
    let loading = controller.is_loading();
    terminal.draw(|frame| draw(frame, controller.state(), title, loading))?;
    Ok(())
}

fn is_quit(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Draw one frame of the dashboard
pub fn draw(frame: &mut Frame, state: &DashboardState, title: &str, loading: bool) {
    let [header, chart, table, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Percentage(45),
        Constraint::Min(5),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    frame.render_widget(
        Paragraph::new(Span::styled(
            title,
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .block(Block::bordered().style(Style::default().fg(Color::White).bg(Color::Blue))),
        header,
    );

    frame.render_widget(BalanceChart::new(state.balance_history()), chart);
    frame.render_widget(BetHistory::new(state.recent_bets()), table);
    frame.render_widget(Paragraph::new(footer_line(state, loading)), footer);
}

fn footer_line(state: &DashboardState, loading: bool) -> Line<'static> {
    let sync = state
        .last_sync
        .map(|ts| format!("Last sync: {}", ts.format("%H:%M:%S")))
        .unwrap_or_else(|| "Not synced".to_string());

    let mut spans = vec![Span::styled(sync, Style::default().fg(Color::Gray))];
    if loading {
        spans.push(Span::raw("  "));
        spans.push(Span::styled("Loading...", Style::default().fg(Color::Cyan)));
    }
    spans.push(Span::styled("  q: quit", Style::default().fg(Color::DarkGray)));

    Line::from(spans)
}
