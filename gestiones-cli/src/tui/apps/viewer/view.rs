//! Rendering for the worklist viewer.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Cell, Gauge, Paragraph, Row, Table};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::api::{Item, StatusFilter};
use crate::tui::TextInputState;

use super::logic::paginate;
use super::logic::sort::{SortDirection, SortKey};
use super::state::{Focus, State};

const ACCENT: Color = Color::Cyan;
const DIM: Color = Color::DarkGray;

pub fn render(state: &State, frame: &mut Frame) {
    let [header, filters, gauge, stats, table, footer] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(2),
    ])
    .areas(frame.area());

    render_header(frame, header);
    render_filter_bar(state, frame, filters);
    render_progress(state, frame, gauge);
    render_stats(state, frame, stats);
    render_table(state, frame, table);
    render_footer(state, frame, footer);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Visor de Gestiones",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Control centralizado de gestiones SharePoint",
            Style::default().fg(DIM),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_filter_bar(state: &State, frame: &mut Frame, area: Rect) {
    let focused = |focus: Focus| state.focus == focus;

    let mut spans = vec![label("Estado", focused(Focus::Status))];
    for status in [StatusFilter::Pendiente, StatusFilter::Procesados] {
        let active = state.status_filter == status;
        let style = if active {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DIM)
        };
        spans.push(Span::styled(
            format!(" {} ", status.label()),
            style,
        ));
    }
    spans.push(Span::raw("  "));
    spans.push(label("Desde", focused(Focus::FromDate)));
    spans.extend(input_spans(&state.from_date, 10, focused(Focus::FromDate)));
    spans.push(Span::raw("  "));
    spans.push(label("Hasta", focused(Focus::ToDate)));
    spans.extend(input_spans(&state.to_date, 10, focused(Focus::ToDate)));
    spans.push(Span::raw("  "));
    spans.push(label("Buscar", focused(Focus::Search)));
    spans.extend(input_spans(&state.search, 24, focused(Focus::Search)));

    let block = Block::bordered().title("Filtros").border_style(
        if focused(Focus::Table) {
            Style::default().fg(DIM)
        } else {
            Style::default().fg(ACCENT)
        },
    );
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn label(text: &str, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DIM)
    };
    Span::styled(format!("{text}: "), style)
}

/// An input field as spans; when focused, the character under the cursor is
/// rendered reversed.
fn input_spans(input: &TextInputState, width: usize, focused: bool) -> Vec<Span<'static>> {
    if !focused {
        if input.is_empty() {
            return vec![Span::styled("·".repeat(width), Style::default().fg(DIM))];
        }
        let mut text = input.value.clone();
        let filled = text.width();
        if filled < width {
            text.push_str(&"·".repeat(width - filled));
        }
        return vec![Span::styled(text, Style::default())];
    }

    let cursor = input.cursor();
    let before: String = input.value.chars().take(cursor).collect();
    let at: String = input
        .value
        .chars()
        .nth(cursor)
        .map(String::from)
        .unwrap_or_else(|| " ".to_string());
    let after: String = input.value.chars().skip(cursor + 1).collect();
    let used = before.width() + at.width() + after.width();
    let pad = "·".repeat(width.saturating_sub(used));
    vec![
        Span::styled(before, Style::default().fg(Color::White)),
        Span::styled(at, Style::default().add_modifier(Modifier::REVERSED)),
        Span::styled(after, Style::default().fg(Color::White)),
        Span::styled(pad, Style::default().fg(DIM)),
    ]
}

fn render_progress(state: &State, frame: &mut Frame, area: Rect) {
    if !state.loading() {
        return;
    }
    let gauge = Gauge::default()
        .ratio((state.progress / 100.0).clamp(0.0, 1.0))
        .gauge_style(Style::default().fg(Color::Green))
        .label(format!("{:.0}% · {:.1}s", state.progress, state.elapsed));
    frame.render_widget(gauge, area);
}

fn render_stats(state: &State, frame: &mut Frame, area: Rect) {
    let stats = state.stats();
    let total_label = format!("Total {}", state.status_filter.as_str());
    let tiles = [
        (total_label.as_str(), stats.total),
        ("Gestión (Lista 1)", stats.list1),
        ("Migración (Lista 2)", stats.list2),
    ];

    let columns =
        Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas::<3>(area);
    for ((title, value), column) in tiles.into_iter().zip(columns) {
        // Placeholder until the first fetch attempt, not zero.
        let value = if state.has_searched {
            value.to_string()
        } else {
            "—".to_string()
        };
        let block = Block::bordered().title(Span::styled(
            title.to_string(),
            Style::default().fg(DIM),
        ));
        let body = Paragraph::new(Span::styled(
            value,
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .block(block);
        frame.render_widget(body, column);
    }
}

fn render_table(state: &State, frame: &mut Frame, area: Rect) {
    let visible = state.visible_items();

    if !state.has_searched {
        return render_empty(
            frame,
            area,
            "Lista para consultar",
            "Usa la barra superior para filtrar los datos por fecha y estado.",
        );
    }
    if visible.is_empty() && !state.loading() {
        return render_empty(
            frame,
            area,
            "Sin resultados",
            "No se encontraron registros que coincidan con la búsqueda.",
        );
    }

    let page_items = paginate::page_slice(&visible, state.current_page);

    let header = Row::new(vec![
        header_cell(state, SortKey::Title),
        Cell::from(Span::styled("ID", Style::default().fg(DIM))),
        header_cell(state, SortKey::List),
        header_cell(state, SortKey::Created),
        header_cell(state, SortKey::Status),
    ])
    .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = page_items.iter().map(|item| record_row(item)).collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(30),
            Constraint::Percentage(14),
            Constraint::Percentage(26),
            Constraint::Length(10),
            Constraint::Percentage(16),
        ],
    )
    .header(header)
    .block(Block::bordered().title("Base de Datos de Gestiones"));

    frame.render_widget(table, area);
}

fn header_cell(state: &State, key: SortKey) -> Cell<'static> {
    let indicator = if state.sort.key == key {
        match state.sort.direction {
            SortDirection::Asc => " ▲",
            SortDirection::Desc => " ▼",
        }
    } else {
        ""
    };
    let style = if state.sort.key == key {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(DIM)
    };
    Cell::from(Span::styled(format!("{}{indicator}", key.label()), style))
}

fn record_row(item: &Item) -> Row<'static> {
    let title = match item.title.as_deref() {
        Some(t) if !t.is_empty() => truncate(t, 38),
        _ => "Sin Título".to_string(),
    };
    let short_id = match item.short_id() {
        "" => "N/A".to_string(),
        id => id.to_string(),
    };
    let origin = item
        .list_sublabel()
        .map(str::to_string)
        .or_else(|| item.list.clone())
        .filter(|l| !l.is_empty())
        .map(|l| truncate(&l, 32))
        .unwrap_or_else(|| "N/A".to_string());
    let origin_color = if item.is_lista1() {
        Color::Magenta
    } else if item.is_lista2() {
        Color::Green
    } else {
        DIM
    };
    let created = item
        .created_date()
        .map(|d| d.format("%d/%m/%y").to_string())
        .unwrap_or_else(|| "N/A".to_string());
    let (status, status_color) = match item.status.as_deref() {
        Some(s) if !s.is_empty() => {
            let color = if item.is_pendiente() {
                Color::Red
            } else {
                Color::Green
            };
            (s.to_string(), color)
        }
        _ => ("N/A".to_string(), DIM),
    };

    Row::new(vec![
        Cell::from(title),
        Cell::from(Span::styled(short_id, Style::default().fg(DIM))),
        Cell::from(Span::styled(origin, Style::default().fg(origin_color))),
        Cell::from(created),
        Cell::from(Span::styled(status, Style::default().fg(status_color))),
    ])
}

fn render_empty(frame: &mut Frame, area: Rect, headline: &str, hint: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            headline.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(hint.to_string(), Style::default().fg(DIM))),
    ];
    let body = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::bordered().title("Base de Datos de Gestiones"));
    frame.render_widget(body, area);
}

fn render_footer(state: &State, frame: &mut Frame, area: Rect) {
    let status_line = if let Some(error) = &state.error {
        Line::from(Span::styled(
            format!("Error Detectado: {error}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
    } else if state.has_searched {
        let found = state.visible_items().len();
        let pages = paginate::total_pages(found).max(1);
        Line::from(Span::styled(
            format!(
                "{found} registros encontrados · Página {} de {pages}",
                state.current_page
            ),
            Style::default().fg(DIM),
        ))
    } else {
        Line::from(Span::styled(
            "Sin consultas todavía",
            Style::default().fg(DIM),
        ))
    };

    let hints = Line::from(Span::styled(
        "Tab campo · Enter consultar · Ctrl+R recargar · Ctrl+L limpiar · ←/→ página · t/o/f/e ordenar · Esc salir",
        Style::default().fg(DIM),
    ));

    frame.render_widget(Paragraph::new(vec![status_line, hints]), area);
}

/// Clip to `max` columns with an ellipsis, width-aware so wide glyphs do not
/// overflow the cell.
fn truncate(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > keep {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str("...");
    out
}
