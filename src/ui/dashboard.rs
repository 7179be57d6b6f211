use crate::app::Workspace;
use crate::media::{format_size, EmbeddedImage};
use crate::model::{BrandIdentity, ColorSwatch};
use crate::ui::constants::{ACCENT, MUTED, SWATCH};
use crate::ui::text::{truncate, TextWrapper};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

// Brand dashboard: identity on the left, palette and logo on the right
pub struct DashboardRenderer;

impl DashboardRenderer {
    pub fn render(frame: &mut Frame, workspace: &Workspace, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);
        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(9), Constraint::Min(5)])
            .split(columns[1]);

        Self::render_identity(frame, &workspace.brand, columns[0]);
        Self::render_palette(frame, &workspace.brand.colors, right[0]);
        let title = if workspace.brand.logo.as_ref() == Some(&workspace.current_image) {
            " Logo "
        } else {
            " Edited image "
        };
        render_image_panel(
            frame,
            title,
            &workspace.current_image,
            Some(workspace.brand.logo_prompt.as_str()),
            right[1],
        );
    }

    fn render_identity(frame: &mut Frame, brand: &BrandIdentity, area: Rect) {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let width = area.width.saturating_sub(4) as usize;

        let mut lines = vec![
            Line::styled(brand.company_name.clone(), bold.fg(ACCENT)),
            Line::styled(
                format!("\"{}\"", brand.tagline),
                Style::default().add_modifier(Modifier::ITALIC),
            ),
            Line::from(""),
            Line::styled("Mission", bold),
        ];
        for line in TextWrapper::wrap(&brand.mission_statement, width) {
            lines.push(Line::styled(line, Style::default().fg(MUTED)));
        }

        lines.push(Line::from(""));
        lines.push(Line::styled("Typography", bold));
        for font in &brand.fonts {
            lines.push(Line::from(vec![
                Span::styled(font.header_family().to_string(), bold),
                Span::raw(" / "),
                Span::raw(font.body_family().to_string()),
            ]));
            for line in TextWrapper::wrap(&font.reasoning, width.saturating_sub(2)) {
                lines.push(Line::styled(format!("  {}", line), Style::default().fg(MUTED)));
            }
        }

        let block = Block::default().borders(Borders::ALL).title(" Brand ");
        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
            area,
        );
    }

    fn render_palette(frame: &mut Frame, colors: &[ColorSwatch], area: Rect) {
        let width = area.width.saturating_sub(4) as usize;
        let lines: Vec<Line> = colors
            .iter()
            .map(|swatch| {
                let fill = match swatch.rgb() {
                    Some((r, g, b)) => Color::Rgb(r, g, b),
                    None => Color::Reset,
                };
                let label = format!(" {} {} · {}", swatch.hex, swatch.name, swatch.usage);
                Line::from(vec![
                    Span::styled(SWATCH, Style::default().bg(fill)),
                    Span::raw(truncate(&label, width.saturating_sub(SWATCH.len()))),
                ])
            })
            .collect();

        let block = Block::default().borders(Borders::ALL).title(" Palette ");
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

/// Describes an image the terminal cannot draw: type, size and how to get at it.
pub fn render_image_panel(
    frame: &mut Frame,
    title: &str,
    image: &EmbeddedImage,
    prompt: Option<&str>,
    area: Rect,
) {
    let width = area.width.saturating_sub(4) as usize;
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Type  ", Style::default().fg(MUTED)),
            Span::raw(image.mime_type.clone()),
        ]),
        Line::from(vec![
            Span::styled("Size  ", Style::default().fg(MUTED)),
            Span::raw(format_size(image.approx_size())),
        ]),
    ];
    if let Some(prompt) = prompt.filter(|p| !p.is_empty()) {
        lines.push(Line::from(""));
        for line in TextWrapper::wrap(prompt, width) {
            lines.push(Line::styled(line, Style::default().add_modifier(Modifier::ITALIC)));
        }
    }

    let block = Block::default().borders(Borders::ALL).title(title.to_string());
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
