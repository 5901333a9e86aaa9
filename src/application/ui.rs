use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Clear;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;
use strum::IntoEnumIterator;
use tokio::sync::mpsc;
use tui_textarea::Input;
use tui_textarea::Key;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::frame_url;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::QueryType;
use crate::domain::models::ResultItem;
use crate::domain::models::SlashCommand;
use crate::domain::models::TextArea;
use crate::domain::services::actions::help_text;
use crate::domain::services::progress::ProgressSimulator;
use crate::domain::services::transcript;
use crate::domain::services::AppState;
use crate::domain::services::EventsService;
use crate::domain::services::Focus;

pub fn destruct_terminal_for_panic() {
    disable_raw_mode().unwrap();
    crossterm::execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture).unwrap();
    crossterm::execute!(io::stdout(), cursor::Show).unwrap();
}

fn destruct_terminal<B: Backend + io::Write>(mut terminal: Terminal<B>) -> Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    return Ok(());
}

pub async fn start(
    action_tx: mpsc::UnboundedSender<Action>,
    event_tx: mpsc::UnboundedSender<Event>,
    event_rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = start_loop(&mut terminal, action_tx, event_tx, event_rx).await;
    destruct_terminal(terminal)?;

    return res;
}

fn pane_block(title: &str, focused: bool) -> Block<'_> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .padding(Padding::new(1, 1, 0, 0))
        .title(title);

    if focused {
        block = block.border_style(Style::default().fg(Color::LightGreen));
    }

    return block;
}

fn query_lines(app_state: &AppState) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = vec![];

    for (idx, fragment) in app_state.query_form.fragments().iter().enumerate() {
        let marker = if idx == app_state.query_form.focused {
            "> "
        } else {
            "  "
        };
        let mut line = Line::from(format!("{marker}[{}] {}", fragment.qtype, fragment.value));
        if idx == app_state.query_form.focused && app_state.focus == Focus::Query {
            line.patch_style(Style::default().add_modifier(Modifier::BOLD));
        }
        lines.push(line);
    }

    let toggles = QueryType::iter()
        .map(|qtype| {
            if app_state.query_form.is_active(qtype) {
                return format!("[{qtype}]");
            }
            return format!(" {qtype} ");
        })
        .collect::<Vec<String>>()
        .join(" ");

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(
            "{toggles}  ·  topk: {}  ·  alt+1/2/3 · ctrl+↑/↓",
            app_state.session.result_limit
        ),
        Style::default().fg(Color::DarkGray),
    )));

    return lines;
}

fn gallery_lines(app_state: &AppState, host: &str) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = vec![];

    for (idx, item) in app_state.session.results().iter().enumerate() {
        let n = idx + 1;
        let src = item.render_src(host);
        let label = match item {
            ResultItem::Inline(_) => format!("{n:>3}. {}", truncate(&src, 48)),
            ResultItem::Reference(frame) => format!("{n:>3}. {frame}"),
        };

        if idx == app_state.gallery.position {
            lines.push(Line::from(Span::styled(
                format!("> {label}"),
                Style::default().add_modifier(Modifier::BOLD),
            )));
        } else {
            lines.push(Line::from(format!("  {label}")));
        }
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "No results yet. Submit a search to fill the gallery.",
            Style::default().fg(Color::DarkGray),
        )));
    }

    return lines;
}

fn detail_lines(app_state: &AppState, host: &str) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = vec![];

    let frame = match &app_state.gallery.selected {
        Some(frame) => frame,
        None => return lines,
    };

    lines.push(Line::from(format!(
        "{}, frame {}",
        frame.source().unwrap_or("?"),
        frame
            .index()
            .map(|index| {
                return index.to_string();
            })
            .unwrap_or_else(|| {
                return "?".to_string();
            })
    )));

    match &app_state.gallery.context {
        Some(context) => {
            match context.timestamp {
                Some(timestamp) => lines.push(Line::from(format!("timestamp: {timestamp}s"))),
                None => lines.push(Line::from("timestamp: --")),
            }
            match &context.embed_url {
                Some(embed_url) => lines.push(Line::from(format!("watch: {embed_url}"))),
                None => lines.push(Line::from("watch: --")),
            }
        }
        None => {
            lines.push(Line::from("resolving video context..."));
        }
    }

    lines.push(Line::from(format!("download: {}", frame_url(host, frame))));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "esc to close · s for similar frames",
        Style::default().fg(Color::DarkGray),
    )));

    return lines;
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }

    return format!("{}…", text.chars().take(max).collect::<String>());
}

fn modal_lines(app_state: &AppState) -> Vec<Line<'static>> {
    let src = match app_state.modal.src() {
        Some(src) => src,
        None => return vec![],
    };

    return vec![
        Line::from(format!("inline image · {} chars", src.len())),
        Line::from(truncate(src, 64)),
        Line::from(""),
        Line::from(Span::styled(
            "esc to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];
}

fn centered_rect(percent_x: u16, percent_y: u16, rect: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(rect);

    return Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1];
}

fn render<B: Backend>(
    frame: &mut Frame<'_, B>,
    app_state: &AppState,
    instruction_input: &tui_textarea::TextArea<'_>,
    host: &str,
    username: &str,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Percentage(42), Constraint::Percentage(58)])
        .split(frame.size());

    let query_height = app_state.query_form.fragments().len() as u16 + 4;
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(query_height), Constraint::Min(1)])
        .split(columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(4),
        ])
        .split(columns[1]);

    frame.render_widget(
        Paragraph::new(query_lines(app_state))
            .block(pane_block("Search", app_state.focus == Focus::Query)),
        left[0],
    );

    let gallery_title = format!(
        "Results ({}) · search #{}",
        app_state.session.results().len(),
        app_state.session.seq()
    );
    frame.render_widget(
        Paragraph::new(gallery_lines(app_state, host))
            .block(pane_block(&gallery_title, app_state.focus == Focus::Gallery))
            .scroll((gallery_scroll(app_state, left[1]), 0)),
        left[1],
    );

    frame.render_widget(
        Paragraph::new(transcript::lines(&app_state.conversation, username))
            .block(pane_block("Conversation", false))
            .wrap(Wrap { trim: false })
            .scroll((app_state.conversation_scroll, 0)),
        right[0],
    );

    if app_state.show_warning {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Warning: No result data available.",
                Style::default().fg(Color::Red),
            ))),
            right[1],
        );
    }

    frame.render_widget(instruction_input.widget(), right[2]);

    if app_state.gallery.detail_open {
        let popup = centered_rect(70, 40, frame.size());
        frame.render_widget(Clear, popup);
        frame.render_widget(
            Paragraph::new(detail_lines(app_state, host))
                .block(pane_block("Frame", true))
                .wrap(Wrap { trim: false }),
            popup,
        );
    }

    if app_state.modal.is_open() {
        let popup = centered_rect(70, 40, frame.size());
        frame.render_widget(Clear, popup);
        frame.render_widget(
            Paragraph::new(modal_lines(app_state))
                .block(pane_block("Media", true))
                .wrap(Wrap { trim: false }),
            popup,
        );
    }

    if app_state.show_help {
        let popup = centered_rect(80, 70, frame.size());
        frame.render_widget(Clear, popup);
        frame.render_widget(
            Paragraph::new(help_text())
                .block(pane_block("Help", true))
                .wrap(Wrap { trim: false }),
            popup,
        );
    }
}

// Keeps the gallery cursor visible once the list outgrows the pane.
fn gallery_scroll(app_state: &AppState, rect: Rect) -> u16 {
    let viewport = rect.height.saturating_sub(2) as usize;
    if viewport == 0 || app_state.gallery.position < viewport {
        return 0;
    }

    return (app_state.gallery.position + 1 - viewport) as u16;
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    action_tx: mpsc::UnboundedSender<Action>,
    event_tx: mpsc::UnboundedSender<Event>,
    event_rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut events = EventsService::new(event_rx);
    let mut app_state = AppState::new(Config::result_limit());
    let mut instruction_input = TextArea::default();
    let host = Config::get(ConfigKey::RetrievalUrl)
        .trim_end_matches('/')
        .to_string();
    let username = Config::get(ConfigKey::Username);

    loop {
        terminal.draw(|frame| {
            render(frame, &app_state, &instruction_input, &host, &username);
        })?;

        match events.next().await? {
            event @ (Event::SearchResults(_)
            | Event::InstructionCompleted { .. }
            | Event::InstructionFailed { .. }
            | Event::InstructionProgress { .. }
            | Event::FrameContextResolved(_)) => {
                app_state.handle_backend_event(event);
            }
            Event::KeyboardCTRLC() => break,
            Event::KeyboardTab() => {
                app_state.cycle_focus();
            }
            Event::KeyboardEsc() => {
                app_state.close_overlays();
            }
            Event::KeyboardEnter() => match app_state.focus {
                Focus::Query => {
                    app_state.submit_search(&action_tx)?;
                }
                Focus::Gallery => {
                    app_state.select_current(&action_tx)?;
                }
                Focus::Instruction => {
                    let text = instruction_input.lines().join("\n").trim().to_string();
                    if text.is_empty() {
                        continue;
                    }

                    if let Some(command) = SlashCommand::parse(&text) {
                        if command.is_quit() {
                            break;
                        }
                        if command.is_help() {
                            app_state.show_help = !app_state.show_help;
                        }
                        if command.is_topk() {
                            if let Some(val) = command.topk_value() {
                                app_state.session.result_limit = val.clamp(1, 100);
                            }
                        }
                        instruction_input = TextArea::default();
                        continue;
                    }

                    if let Some(id) = app_state.send_instruction(&text, &action_tx)? {
                        ProgressSimulator::start(id, event_tx.clone());
                        instruction_input = TextArea::default();
                    }
                }
            },
            Event::KeyboardCharInput(input) => {
                handle_char_input(&mut app_state, &mut instruction_input, input, &action_tx)?;
            }
            Event::KeyboardPaste(text) => match app_state.focus {
                Focus::Instruction => {
                    instruction_input.insert_str(&text);
                }
                Focus::Query => {
                    for input in text.chars() {
                        app_state.query_form.insert_char(input);
                    }
                    app_state.sync_active_query();
                }
                Focus::Gallery => (),
            },
            Event::UIScrollUp() => {
                app_state.conversation_scroll = app_state.conversation_scroll.saturating_sub(1);
            }
            Event::UIScrollDown() => {
                app_state.conversation_scroll = app_state.conversation_scroll.saturating_add(1);
            }
            Event::UIResize() => (),
            Event::UITick() => (),
        }
    }

    return Ok(());
}

fn handle_char_input(
    app_state: &mut AppState,
    instruction_input: &mut tui_textarea::TextArea<'_>,
    input: Input,
    action_tx: &mpsc::UnboundedSender<Action>,
) -> Result<()> {
    // Query type toggles work from any pane.
    if input.alt {
        match input.key {
            Key::Char('1') => {
                app_state.toggle_query_type(QueryType::Semantic);
                return Ok(());
            }
            Key::Char('2') => {
                app_state.toggle_query_type(QueryType::Ocr);
                return Ok(());
            }
            Key::Char('3') => {
                app_state.toggle_query_type(QueryType::Asr);
                return Ok(());
            }
            _ => (),
        }
    }

    match app_state.focus {
        Focus::Query => {
            match input {
                Input {
                    key: Key::Up,
                    ctrl: true,
                    ..
                } => {
                    app_state.session.result_limit =
                        (app_state.session.result_limit + 1).clamp(1, 100);
                }
                Input {
                    key: Key::Down,
                    ctrl: true,
                    ..
                } => {
                    app_state.session.result_limit =
                        app_state.session.result_limit.saturating_sub(1).clamp(1, 100);
                }
                Input { key: Key::Up, .. } => {
                    app_state.query_form.focus_prev();
                }
                Input { key: Key::Down, .. } => {
                    app_state.query_form.focus_next();
                }
                Input {
                    key: Key::Backspace,
                    ..
                } => {
                    app_state.query_form.backspace();
                    app_state.sync_active_query();
                }
                Input {
                    key: Key::Char(c),
                    ctrl: false,
                    ..
                } => {
                    app_state.query_form.insert_char(c);
                    app_state.sync_active_query();
                }
                _ => (),
            }
        }
        Focus::Gallery => match input {
            Input { key: Key::Up, .. } => {
                app_state.gallery.move_up();
            }
            Input { key: Key::Down, .. } => {
                app_state
                    .gallery
                    .move_down(app_state.session.results().len());
            }
            Input {
                key: Key::Char('s'),
                ..
            } => {
                app_state.request_similar_current(action_tx)?;
            }
            _ => (),
        },
        Focus::Instruction => {
            if input.ctrl && matches!(input.key, Key::Char('o')) {
                app_state.open_latest_media();
                return Ok(());
            }
            instruction_input.input(input);
        }
    }

    return Ok(());
}
