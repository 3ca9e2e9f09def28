//! TUI rendering with ratatui
//!
//! Board, riddles, messages and the result popup.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Glyph, GlyphPos};
use crate::output::formatters::{BLANK, glyph_letter};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Lines used by one riddle in the clue panel
const CLUE_HEIGHT: usize = 4;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Key help
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    if app.input_mode() == InputMode::Loading {
        render_loading(f, app, chunks[1]);
    } else {
        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(70), // Puzzle
                Constraint::Percentage(30), // Messages
            ])
            .split(chunks[1]);

        render_puzzle(f, app, main_chunks[0]);
        render_messages(f, app, main_chunks[1]);
    }

    render_help(f, app, chunks[2]);
    render_status(f, app, chunks[3]);

    match app.input_mode() {
        InputMode::WinCelebration | InputMode::Mismatch => render_result_popup(f, app),
        InputMode::Loading | InputMode::Playing => {}
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔢 FIGGERITS - Decode the phrase")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
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
    let spinner = SPINNER[app.ticks % SPINNER.len()];
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{spinner} Generating content"),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Source: {}", app.loader.provider().describe()),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_puzzle(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45), // Phrase
            Constraint::Percentage(55), // Riddles
        ])
        .split(area);

    render_phrase(f, app, chunks[0]);
    render_clues(f, app, chunks[1]);
}

/// Style of a glyph given the cursor and the selected number
fn glyph_style(app: &App, pos: GlyphPos, glyph: Glyph) -> Style {
    let selected = app.selected_number();
    if app.current_pos() == Some(pos) {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else if glyph.number().is_some() && glyph.number() == selected {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}

/// Letter and number spans for a run of glyphs
fn glyph_spans(
    app: &App,
    glyphs: impl Iterator<Item = (GlyphPos, Glyph)>,
    width: usize,
) -> (Vec<Span<'static>>, Vec<Span<'static>>) {
    let ledger = app.session.ledger();
    let mut letters = Vec::new();
    let mut numbers = Vec::new();

    for (pos, glyph) in glyphs {
        let style = glyph_style(app, pos, glyph);
        let letter = glyph_letter(glyph, ledger);
        let number = glyph.number().map(|n| n.to_string()).unwrap_or_default();

        letters.push(Span::styled(format!("{letter:^width$}"), style));
        numbers.push(Span::styled(
            format!("{number:^width$}"),
            style.remove_modifier(Modifier::BOLD).fg(if letter == BLANK {
                Color::Yellow
            } else {
                Color::DarkGray
            }),
        ));
        letters.push(Span::raw(" "));
        numbers.push(Span::raw(" "));
    }

    (letters, numbers)
}

/// Widest number on the board, as a cell width
fn cell_width(app: &App) -> usize {
    app.session
        .board()
        .positions()
        .filter_map(|(_, glyph)| glyph.number())
        .map(|n| n.to_string().len())
        .max()
        .unwrap_or(1)
        .max(2)
}

fn render_phrase(f: &mut Frame, app: &App, area: Rect) {
    let width = cell_width(app);
    let available = usize::from(area.width.saturating_sub(4)).max(width + 1);
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut row: Vec<usize> = Vec::new();
    let mut used = 0;
    let words = app.session.board().words();

    let flush = |row: &mut Vec<usize>, lines: &mut Vec<Line<'static>>| {
        if row.is_empty() {
            return;
        }
        let mut letters = Vec::new();
        let mut numbers = Vec::new();
        for (i, w) in row.drain(..).enumerate() {
            if i > 0 {
                letters.push(Span::raw("  "));
                numbers.push(Span::raw("  "));
            }
            let glyphs = words[w]
                .iter()
                .enumerate()
                .map(|(o, glyph)| (GlyphPos::Phrase(w, o), *glyph));
            let (word_letters, word_numbers) = glyph_spans(app, glyphs, width);
            letters.extend(word_letters);
            numbers.extend(word_numbers);
        }
        lines.push(Line::from(letters));
        lines.push(Line::from(numbers));
        lines.push(Line::from(""));
    };

    for (w, word) in words.iter().enumerate() {
        let word_width = word.len() * (width + 1) + 2;
        if used > 0 && used + word_width > available {
            flush(&mut row, &mut lines);
            used = 0;
        }
        row.push(w);
        used += word_width;
    }
    flush(&mut row, &mut lines);

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Phrase ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(paragraph, area);
}

fn render_clues(f: &mut Frame, app: &App, area: Rect) {
    let width = cell_width(app);
    let mut lines: Vec<Line<'static>> = Vec::new();

    for (c, row) in app.session.board().clues().iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}. ", c + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(row.clue.statement.clone()),
            Span::styled(
                format!("  #{}", row.clue.index),
                Style::default().fg(Color::DarkGray),
            ),
        ]));

        let glyphs = row
            .glyphs
            .iter()
            .enumerate()
            .map(|(o, glyph)| (GlyphPos::Clue(c, o), *glyph));
        let (letters, numbers) = glyph_spans(app, glyphs, width);
        lines.push(Line::from(letters));
        lines.push(Line::from(numbers));
        lines.push(Line::from(""));
    }

    // Keep the riddle under the cursor in view
    let visible = usize::from(area.height.saturating_sub(2));
    let offset = match app.current_pos() {
        Some(GlyphPos::Clue(c, _)) => ((c + 1) * CLUE_HEIGHT).saturating_sub(visible),
        _ => 0,
    };

    let paragraph = Paragraph::new(lines)
        .scroll((u16::try_from(offset).unwrap_or(u16::MAX), 0))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Riddles ")
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
        .take(10)
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

fn render_help(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.input_mode() {
        InputMode::Loading => (" n: Request again | q: Quit ", Color::Yellow),
        InputMode::Playing => (
            " Type a letter | ←→ Move | ↑↓ Riddles | TAB Next blank | ⌫ Clear | Ctrl+N New | ESC Quit ",
            Color::Yellow,
        ),
        InputMode::WinCelebration => (
            " 🎉 CONGRATULATIONS! 🎉 | Enter/n: New puzzle | q: Quit ",
            Color::Green,
        ),
        InputMode::Mismatch => (
            " Enter/r: Try again | n: New puzzle | q: Quit ",
            Color::Red,
        ),
    };

    let help = Paragraph::new(title)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(help, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode_text = match app.input_mode() {
        InputMode::Loading => "Mode: Loading",
        InputMode::Playing => "Mode: Playing",
        InputMode::WinCelebration => "Mode: Solved",
        InputMode::Mismatch => "Mode: Check guesses",
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Puzzles: {} | Win Rate: {:.0}%",
        app.stats.puzzles_started,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let remaining = app.session.unguessed().len();
    let remaining_text = format!("Blank numbers: {remaining}");
    let remaining = Paragraph::new(remaining_text).alignment(Alignment::Center);
    f.render_widget(remaining, chunks[2]);

    let selected_text = app
        .selected_number()
        .map_or_else(|| "Selected: -".to_string(), |n| format!("Selected: {n}"));
    let selected = Paragraph::new(selected_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(selected, chunks[3]);
}

fn render_result_popup(f: &mut Frame, app: &App) {
    let area = centered_rect(50, 30, f.area());

    let (title, text, color, action) = if app.input_mode() == InputMode::WinCelebration {
        (
            " Solved ",
            "🎉 You won! 🎉",
            Color::Green,
            "Enter: New puzzle",
        )
    } else {
        (
            " Not quite ",
            "You have some mistakes",
            Color::Red,
            "Enter: Try again",
        )
    };

    let phrase = if app.input_mode() == InputMode::WinCelebration {
        Line::from(Span::styled(
            app.session.phrase().text().to_string(),
            Style::default().fg(Color::Yellow),
        ))
    } else {
        Line::from("")
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            text,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        phrase,
        Line::from(""),
        Line::from(action),
    ];

    let popup = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Thick)
                .style(Style::default().fg(color)),
        );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

/// Rectangle of `percent_x` by `percent_y` centered in `area`
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
