//! Terminal layout: transport line, key legend, waveform chart.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph, Wrap},
    Frame,
};

/// Read-only snapshot of the app state for one frame.
pub struct View<'a> {
    pub key_map: &'a [(char, String)],
    pub last_tone: Option<&'a str>,
    pub waveform: &'a [f32],
    pub volume: f32,
    pub level: u32,
}

pub fn render(frame: &mut Frame, view: &View) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(8),
        ])
        .split(frame.area());

    render_transport(frame, chunks[0], view);
    render_keys(frame, chunks[1], view);
    render_waveform(frame, chunks[2], view.waveform);
}

fn render_transport(frame: &mut Frame, area: Rect, view: &View) {
    let status = format!(
        "level {}  |  volume {:.2}  |  last {}  |  space: stop  esc: quit",
        view.level,
        view.volume,
        view.last_tone.unwrap_or("-"),
    );
    let paragraph = Paragraph::new(status)
        .block(Block::default().title(" prism ").borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn render_keys(frame: &mut Frame, area: Rect, view: &View) {
    let legend = view
        .key_map
        .iter()
        .map(|(key, tone)| format!("{key}:{tone}"))
        .collect::<Vec<_>>()
        .join("  ");
    let paragraph = Paragraph::new(legend)
        .wrap(Wrap { trim: true })
        .block(Block::default().title(" keys ").borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

/// Render the last synthesized signal as a line chart.
fn render_waveform(frame: &mut Frame, area: Rect, waveform: &[f32]) {
    let block = Block::default().title(" waveform ").borders(Borders::ALL);

    let data: Vec<(f64, f64)> = waveform
        .iter()
        .enumerate()
        .map(|(i, &sample)| (i as f64 / waveform.len().max(1) as f64, sample as f64))
        .collect();

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&data);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([0.0, 1.0])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([-1.0, 1.0])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
