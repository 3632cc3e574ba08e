use super::app::App;
use super::help_window;
use super::theme::ThemePalette;
use super::types::PreviewLayout;
use crate::format::{LANGUAGE_PREFIX, STAR};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

const INDENT: &str = "    ";

pub fn ui(f: &mut Frame, app: &mut App, prompt: &str, palette: &ThemePalette) {
    let chunks = match app.layout {
        PreviewLayout::Vertical => Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(f.area()),
        PreviewLayout::Horizontal => Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(f.area()),
    };

    // Left/Top panel (list), bounded to one page of results
    let list_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Filter bar
            Constraint::Length(app.page_height().saturating_add(2)), // List
            Constraint::Length(3), // Footer
            Constraint::Min(0),
        ])
        .split(chunks[0]);

    // Filter bar
    let search_block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", prompt))
        .style(Style::default().fg(palette.primary));

    let search_text = Paragraph::new(app.search_query.as_str())
        .block(search_block)
        .style(Style::default().fg(palette.stars));

    f.render_widget(search_text, list_chunks[0]);

    // List of results
    let items: Vec<ListItem> = app
        .filtered_items
        .iter()
        .filter_map(|(idx, _)| app.entries.get(*idx))
        .map(|entry| ListItem::new(styled_label(&entry.label, palette)))
        .collect();

    let items_list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} shown ", app.filtered_items.len()))
                .style(Style::default().fg(palette.border)),
        )
        .highlight_style(
            Style::default()
                .bg(palette.highlight)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    f.render_stateful_widget(items_list, list_chunks[1], &mut app.list_state);

    // Footer with help hint
    let footer = Paragraph::new("Press '?' for help, ENTER to choose, ESC to cancel")
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(palette.primary));

    f.render_widget(footer, list_chunks[2]);

    // Right/Bottom panel (preview)
    let preview_block = Block::default()
        .borders(Borders::ALL)
        .title(" Preview ")
        .style(Style::default().fg(palette.preview_border));

    let preview = Paragraph::new(app.preview_content().to_string())
        .block(preview_block)
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(palette.text_primary));

    f.render_widget(preview, chunks[1]);

    // Help screen overlay
    if app.help_visible {
        render_help_window(f, app.help_scroll, palette);
    }
}

/// Style a plain result label line by line
pub fn styled_label(label: &str, palette: &ThemePalette) -> Text<'static> {
    let lines: Vec<Line<'static>> = label
        .lines()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                return match line.split_once(' ') {
                    Some((rank, identifier)) => Line::from(vec![
                        Span::styled(format!("{} ", rank), Style::default().fg(palette.text_dim)),
                        Span::styled(
                            identifier.to_string(),
                            Style::default()
                                .fg(palette.name)
                                .add_modifier(Modifier::BOLD),
                        ),
                    ]),
                    None => Line::raw(line.to_string()),
                };
            }

            if let Some(language) = line.strip_prefix(LANGUAGE_PREFIX) {
                Line::from(vec![
                    Span::raw(INDENT),
                    Span::styled(LANGUAGE_PREFIX, Style::default().fg(palette.text_secondary)),
                    Span::styled(language.to_string(), Style::default().fg(palette.language)),
                ])
            } else if line.starts_with(STAR) {
                Line::from(vec![
                    Span::raw(INDENT),
                    Span::styled(line.to_string(), Style::default().fg(palette.stars)),
                ])
            } else {
                Line::from(vec![
                    Span::raw(INDENT),
                    Span::styled(line.to_string(), Style::default().fg(palette.text_secondary)),
                ])
            }
        })
        .collect();

    Text::from(lines)
}

fn render_help_window(f: &mut Frame, scroll: u16, palette: &ThemePalette) {
    // Create a centered overlay area (90% width, 90% height)
    let area = f.area();
    let overlay_width = (area.width as f32 * 0.9) as u16;
    let overlay_height = (area.height as f32 * 0.9) as u16;
    let overlay_x = (area.width - overlay_width) / 2;
    let overlay_y = (area.height - overlay_height) / 2;

    let overlay_area = Rect {
        x: overlay_x,
        y: overlay_y,
        width: overlay_width,
        height: overlay_height,
    };

    // Clear the background
    f.render_widget(Clear, overlay_area);

    let help_block = Block::default()
        .borders(Borders::ALL)
        .title(" Help - Press '?' or ESC to close ")
        .style(Style::default().fg(palette.help_section).bg(palette.background));

    let help_content = Paragraph::new(help_window::get_help_text())
        .block(help_block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .style(Style::default().fg(palette.text_primary).bg(palette.background));

    f.render_widget(help_content, overlay_area);
}
