use std::sync::OnceLock;
use std::time::Instant;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use time::format_description::FormatItem;

use crate::admin::StatusKind;

use super::app::{App, Focus};
use super::modal;

const TAB_WIDTH: usize = 4;

pub(super) fn draw(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    draw_header(frame, app, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(32), Constraint::Min(0)])
        .split(chunks[1]);
    draw_files(frame, app, body[0]);
    draw_editor(frame, app, body[1]);

    draw_buttons(frame, app, chunks[2]);
    draw_status(frame, app, chunks[3]);

    if let Some(m) = app.modal.as_ref() {
        modal::draw_modal(frame, m);
    }
}

fn draw_header(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let path = app.state.active().unwrap_or("Файл не выбран");
    let mut spans = vec![
        Span::styled(
            "Docs admin",
            Style::default().fg(Color::Black).bg(Color::White),
        ),
        Span::raw("  "),
        Span::raw(app.base_url.as_str()),
        Span::raw("  "),
        Span::styled(path, Style::default().fg(Color::Cyan)),
    ];
    if app.state.is_dirty() {
        spans.push(Span::styled(" *", Style::default().fg(Color::Yellow)));
    }
    if let Some(err) = app.copy_error.as_deref() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("copy failed: {}", err),
            Style::default().fg(Color::Red),
        ));
    }
    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, area);
}

fn draw_files(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .state
        .file_entries()
        .into_iter()
        .map(|entry| {
            let style = if entry.active {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::styled(entry.path.to_string(), style))
        })
        .collect();

    let title = if app.state.is_listing() {
        "Pages (loading)"
    } else {
        "Pages"
    };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(focus_style(app.focus == Focus::Files)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut st = ListState::default();
    if !app.state.files().is_empty() {
        st.select(Some(app.file_cursor));
    }
    frame.render_stateful_widget(list, area, &mut st);
}

fn draw_editor(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Editor")
        .border_style(focus_style(app.focus == Focus::Editor));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let buffer = app.state.session().buffer();
    let (line, col) = buffer.cursor_line_col();
    let height = inner.height as usize;

    let mut scroll = app.scroll.get();
    if line < scroll {
        scroll = line;
    } else if height > 0 && line >= scroll + height {
        scroll = line + 1 - height;
    }
    app.scroll.set(scroll);

    let (sel_start, sel_end) = buffer.selection();
    let text = buffer.text();
    let mut lines = Vec::new();
    let mut offset = 0;
    for raw in text.split('\n') {
        lines.push(render_line(raw, offset, sel_start, sel_end));
        offset += raw.len() + 1;
    }

    let visible: Vec<Line> = lines.into_iter().skip(scroll).take(height).collect();
    frame.render_widget(Paragraph::new(visible), inner);

    if app.focus == Focus::Editor && app.modal.is_none() {
        let line_text = text.split('\n').nth(line).unwrap_or("");
        let x = display_width(line_text.chars().take(col));
        let max_x = inner.width.saturating_sub(1) as usize;
        frame.set_cursor_position((
            inner.x + x.min(max_x) as u16,
            inner.y + (line - scroll) as u16,
        ));
    }
}

/// One editor line with the selected byte range highlighted.
fn render_line(raw: &str, offset: usize, sel_start: usize, sel_end: usize) -> Line<'static> {
    let mut spans = Vec::new();
    let mut run = String::new();
    let mut run_selected = false;

    for (i, c) in raw.char_indices() {
        let at = offset + i;
        let selected = at >= sel_start && at < sel_end;
        if selected != run_selected && !run.is_empty() {
            spans.push(styled_run(std::mem::take(&mut run), run_selected));
        }
        run_selected = selected;
        if c == '\t' {
            run.push_str(&" ".repeat(TAB_WIDTH));
        } else {
            run.push(c);
        }
    }
    if !run.is_empty() {
        spans.push(styled_run(run, run_selected));
    }
    Line::from(spans)
}

fn styled_run(s: String, selected: bool) -> Span<'static> {
    if selected {
        Span::styled(s, Style::default().add_modifier(Modifier::REVERSED))
    } else {
        Span::raw(s)
    }
}

fn display_width(chars: impl Iterator<Item = char>) -> usize {
    chars
        .map(|c| if c == '\t' { TAB_WIDTH } else { 1 })
        .sum()
}

fn draw_buttons(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let controls = app.state.controls();
    let copy_label = app.copy_button.label_at(Instant::now()).to_string();
    let buttons = [
        ("Save ^S", controls.save_enabled),
        ("Build ^B", controls.build_enabled),
        ("Refresh F5", controls.refresh_enabled),
        ("Upload ^U", true),
        ("Link M-l", true),
        ("Image M-i", true),
        ("Note M-n", true),
    ];

    let mut spans = Vec::new();
    for (label, enabled) in buttons {
        spans.push(button_span(label.to_string(), enabled));
        spans.push(Span::raw(" "));
    }
    spans.push(button_span(format!("{} ^Y", copy_label), true));
    spans.push(Span::styled(
        "   ^Q quit",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn button_span(label: String, enabled: bool) -> Span<'static> {
    let style = if enabled {
        Style::default().fg(Color::Black).bg(Color::Gray)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Span::styled(format!("[{}]", label), style)
}

fn draw_status(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let status = app.state.status();
    let color = match status.kind {
        StatusKind::Neutral => Color::Gray,
        StatusKind::Ok => Color::Green,
        StatusKind::Error => Color::Red,
    };
    let stamp = app.status_at.format(status_time_format()).unwrap_or_default();
    let line = Line::from(vec![
        Span::styled(stamp, Style::default().fg(Color::DarkGray)),
        Span::raw(" "),
        Span::styled(status.message.as_str(), Style::default().fg(color)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn status_time_format() -> &'static [FormatItem<'static>] {
    static FMT: OnceLock<Vec<FormatItem<'static>>> = OnceLock::new();
    FMT.get_or_init(|| {
        time::format_description::parse("[hour]:[minute]:[second]Z").unwrap_or_default()
    })
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/render_tests.rs"]
mod tests;
