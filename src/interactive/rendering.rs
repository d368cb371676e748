//! TUI rendering with ratatui
//!
//! Game column on the left, recommendation sidebar on the right.

use super::app::{App, Busy, InputMode, MessageStyle, Phase};
use crate::output::formatters::{EntropyQuality, candidate_meta, entropy_bar};
use crate::solver::SearchMode;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    match &app.phase {
        Phase::Loading => render_loading(f, app, chunks[1]),
        Phase::Failed(reason) => render_failure(f, reason, chunks[1]),
        Phase::Ready => {
            let main_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Percentage(60), // Game
                    Constraint::Percentage(40), // Sidebar
                ])
                .split(chunks[1]);

            render_game_panel(f, app, main_chunks[0]);
            render_sidebar(f, app, main_chunks[1]);
        }
    }

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let subtitle = match app.session.mode() {
        SearchMode::Strategic => format!(
            "Strategic | maximizing information | confidence {}%",
            app.session.confidence()
        ),
        SearchMode::Greedy => format!(
            "Greedy | guessing to win | confidence {}%",
            app.session.confidence()
        ),
    };

    let header = Paragraph::new(vec![Line::from(vec![
        Span::styled(
            "🎯 WORDLE MATRIX  ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(subtitle, Style::default().fg(Color::Gray)),
    ])])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn render_loading(f: &mut Frame, app: &App, area: Rect) {
    let percent = app.build_progress.map_or(0.0, |p| p.percent());
    let label = match app.build_progress {
        Some(p) => format!("{} / {} rows | {percent:.0}%", p.current, p.total),
        None => app.status_message.clone(),
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(format!(" {} ", app.status_message))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent.clamp(0.0, 100.0) as u16)
        .label(label);

    let [gauge_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3)])
        .areas(area);
    f.render_widget(gauge, gauge_area);
}

fn render_failure(f: &mut Frame, reason: &str, area: Rect) {
    let paragraph = Paragraph::new(vec![
        Line::from(Span::styled(
            "Engine failed to start",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(reason.to_string()),
        Line::from(""),
        Line::from("Press Esc to quit."),
    ])
    .wrap(Wrap { trim: false })
    .block(
        Block::default()
            .title(" Error ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Red)),
    );
    f.render_widget(paragraph, area);
}

fn render_game_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45), // Guesses
            Constraint::Percentage(25), // Endgame
            Constraint::Percentage(30), // Messages
        ])
        .split(area);

    render_history(f, app, chunks[0]);
    render_endgame(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .session
        .guesses()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let feedback = entry
                .feedback
                .map_or_else(|| "? ? ? ? ?".to_string(), |p| p.to_emoji());
            ListItem::new(Line::from(vec![
                Span::styled(format!("{}. ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(
                    entry.word.to_uppercase(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::raw(feedback),
            ]))
        })
        .collect();

    let history = List::new(items).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(history, area);
}

fn render_endgame(f: &mut Frame, app: &App, area: Rect) {
    let endgame = app.session.endgame();
    let lines: Vec<Line> = if endgame.is_empty() {
        vec![Line::from(Span::styled(
            "Shown when 2 to 5 solutions remain",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        endgame
            .iter()
            .map(|entry| {
                Line::from(vec![
                    Span::styled(
                        format!("{:<6}", entry.word.to_uppercase()),
                        Style::default().fg(Color::Green),
                    ),
                    Span::raw(format!("{:.1}% if guessed", entry.win_probability)),
                ])
            })
            .collect()
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Endgame ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_sidebar(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Best move
            Constraint::Length(3), // Remaining / compute gauge
            Constraint::Min(5),    // Candidates
        ])
        .split(area);

    render_best_move(f, app, chunks[0]);
    render_remaining(f, app, chunks[1]);
    render_candidates(f, app, chunks[2]);
}

fn render_best_move(f: &mut Frame, app: &App, area: Rect) {
    let best = app.session.ranking().and_then(|r| r.best());
    let content = match best {
        Some(best) => {
            let bar = entropy_bar(best.raw_entropy, 18);
            vec![
                Line::from(vec![
                    Span::raw("Best move: "),
                    Span::styled(
                        best.word.to_uppercase(),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled("  (Tab)", Style::default().fg(Color::DarkGray)),
                ]),
                Line::from(format!("[{bar}] {}", candidate_meta(best))),
            ]
        }
        None if app.busy == Busy::Ranking => vec![Line::from("Computing...")],
        None => vec![Line::from("No suggestion available")],
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Recommendation ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_remaining(f: &mut Frame, app: &App, area: Rect) {
    let remaining = app.session.candidates().len();
    let label = app.session.remaining_label();
    let block = Block::default()
        .title(format!(" {remaining} remaining | {label} "))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    if let Some(percent) = app.compute_progress {
        let gauge = Gauge::default()
            .block(block)
            .gauge_style(Style::default().fg(Color::Cyan))
            .percent(percent.clamp(0.0, 100.0) as u16)
            .label(format!("Analyzing {percent:.0}%"));
        f.render_widget(gauge, area);
    } else {
        // Share of the solution list eliminated so far
        let total = app.session.solution_count().max(1);
        let eliminated = total.saturating_sub(remaining) * 100 / total;
        let gauge = Gauge::default()
            .block(block)
            .gauge_style(Style::default().fg(Color::Green))
            .percent(eliminated as u16)
            .label(format!("{eliminated}% eliminated"));
        f.render_widget(gauge, area);
    }
}

fn quality_color(bits: f64) -> Color {
    match EntropyQuality::from_bits(bits) {
        EntropyQuality::Excellent => Color::Green,
        EntropyQuality::Good => Color::Blue,
        EntropyQuality::Mediocre => Color::Yellow,
        EntropyQuality::Poor => Color::Red,
    }
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let visible = app.session.visible_candidates();
    let strategic = app.session.mode() == SearchMode::Strategic;

    let items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(i, candidate)| {
            let mut spans = vec![
                Span::styled(format!("{:>2}. ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(
                    format!("{:<6}", candidate.word.to_uppercase()),
                    Style::default()
                        .fg(quality_color(candidate.raw_entropy))
                        .add_modifier(Modifier::BOLD),
                ),
            ];
            if strategic && !candidate.is_solution {
                spans.push(Span::styled(
                    "BURNER ",
                    Style::default().fg(Color::Magenta),
                ));
            }
            spans.push(Span::styled(
                candidate_meta(candidate),
                Style::default().fg(Color::Gray),
            ));

            let item = ListItem::new(Line::from(spans));
            if i == app.selected && app.input_mode == InputMode::Guess {
                item.style(Style::default().bg(Color::DarkGray))
            } else {
                item
            }
        })
        .collect();

    let title = if app.session.hide_solutions() {
        " Top moves (burners only) "
    } else {
        " Top moves "
    };
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let pending = app.session.pending_guess().unwrap_or_default().to_uppercase();
    let (title, color) = match (&app.phase, &app.input_mode) {
        (Phase::Loading, _) => (" Building pattern matrix... ".to_string(), Color::DarkGray),
        (Phase::Failed(_), _) => (" Unavailable ".to_string(), Color::Red),
        (Phase::Ready, InputMode::GameOver) => (
            " Game over | Press 'n' for new game or 'q' to quit ".to_string(),
            Color::Green,
        ),
        (Phase::Ready, InputMode::Feedback) => (
            format!(" Feedback for {pending} (G=Green Y=Yellow -=Gray) | ESC to cancel "),
            Color::Yellow,
        ),
        (Phase::Ready, InputMode::Guess) => (
            " Word you played | Enter: submit (empty = highlighted) | Tab: best move ".to_string(),
            Color::Cyan,
        ),
    };

    let input = Paragraph::new(app.input_buffer.to_uppercase())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(40),
        ])
        .split(area);

    let mode = Paragraph::new(format!("Mode: {}", app.session.mode())).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let searched = app
        .session
        .ranking()
        .map_or(0, |r| r.searched_count);
    let stats = Paragraph::new(format!("Searched: {searched}")).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let busy_text = match app.busy {
        Busy::Idle => app.status_message.clone(),
        Busy::Filtering => "Filtering...".to_string(),
        Busy::Ranking => "Ranking...".to_string(),
    };
    let busy = Paragraph::new(busy_text).alignment(Alignment::Center);
    f.render_widget(busy, chunks[2]);

    let help = Paragraph::new("Ctrl+T: Mode | Ctrl+B: Burners | Ctrl+N: New | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
