use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use socrange_core::api::{Alert, AlertStatus, LogLevel, Severity};

use super::app::SessionApp;

pub fn draw(f: &mut Frame<'_>, app: &SessionApp) {
    let size = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(size);

    draw_header(f, chunks[0], app);
    draw_main(f, chunks[1], app);
    draw_footer(f, chunks[2], app);
}

fn draw_header(f: &mut Frame<'_>, area: Rect, app: &SessionApp) {
    let phase = app.phase_label();
    let phase_style = match phase {
        "RUNNING" => Style::default().fg(Color::Green),
        "PAUSED" => Style::default().fg(Color::Yellow),
        "COMPLETE" => Style::default().fg(Color::Cyan),
        _ => Style::default().fg(Color::Gray),
    };
    let duration = format_duration(app.start.elapsed().as_secs());

    let line = Line::from(vec![
        Span::styled("Socrange", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  Use Case: "),
        Span::styled(
            format!("{} - {}", app.use_case.id, app.use_case.title),
            Style::default().fg(Color::Gray),
        ),
        Span::raw("  Feed: "),
        Span::styled(phase, phase_style),
        Span::raw("  Speed: "),
        Span::styled(app.speed_label(), Style::default().fg(Color::Gray)),
        Span::raw("  Items: "),
        Span::styled(
            format!("{}/{}", app.scheduler.cursor(), app.scheduler.plan_len()),
            Style::default().fg(Color::Gray),
        ),
        Span::raw("  Dur: "),
        Span::styled(duration, Style::default().fg(Color::Gray)),
    ]);

    let header = Paragraph::new(line).block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(header, area);
}

fn draw_main(f: &mut Frame<'_>, area: Rect, app: &SessionApp) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(42), Constraint::Percentage(58)])
        .split(area);

    draw_terminal(f, columns[0], app);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Percentage(55),
            Constraint::Min(0),
        ])
        .split(columns[1]);

    draw_kpis(f, right[0], app);
    draw_alerts(f, right[1], app);
    draw_logs(f, right[2], app);
}

fn draw_terminal(f: &mut Frame<'_>, area: Rect, app: &SessionApp) {
    let block = panel_block("Attack Terminal");
    let lines: Vec<Line> = app.revealed.iter().map(|l| transcript_line(l)).collect();
    let offset = tail_offset(lines.len(), area.height.saturating_sub(2));
    let widget = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((offset, 0));
    f.render_widget(widget, area);
}

fn draw_kpis(f: &mut Frame<'_>, area: Rect, app: &SessionApp) {
    let kpi = app.dashboard.kpis();
    let lines = vec![
        Line::from(vec![
            Span::raw("Total: "),
            Span::styled(
                kpi.total_alerts.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  Active: "),
            Span::styled(kpi.active_alerts.to_string(), Style::default().fg(Color::Yellow)),
            Span::raw("  Critical: "),
            Span::styled(kpi.critical_alerts.to_string(), Style::default().fg(Color::Red)),
            Span::raw("  Resolved: "),
            Span::styled(kpi.resolved_alerts.to_string(), Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![
            Span::raw("Threat Score: "),
            Span::styled(
                kpi.threat_score.to_string(),
                Style::default().fg(threat_color(kpi.threat_score)),
            ),
            Span::raw("  MTTD: "),
            Span::styled(kpi.mttd, Style::default().fg(Color::Gray)),
            Span::raw("  MTTR: "),
            Span::styled(kpi.mttr, Style::default().fg(Color::Gray)),
        ]),
    ];
    let widget = Paragraph::new(lines).block(panel_block("KPIs"));
    f.render_widget(widget, area);
}

fn draw_alerts(f: &mut Frame<'_>, area: Rect, app: &SessionApp) {
    let block = panel_block("Alert Feed");
    let lines: Vec<Line> = app
        .dashboard
        .alerts
        .iter()
        .enumerate()
        .map(|(idx, alert)| alert_line(alert, idx == app.selected))
        .collect();
    // Keep the selected row visible.
    let height = area.height.saturating_sub(2) as usize;
    let offset = if height == 0 {
        0
    } else {
        app.selected.saturating_sub(height.saturating_sub(1)) as u16
    };
    let widget = Paragraph::new(lines).block(block).scroll((offset, 0));
    f.render_widget(widget, area);
}

fn draw_logs(f: &mut Frame<'_>, area: Rect, app: &SessionApp) {
    let block = panel_block("Event Log");
    let lines: Vec<Line> = app
        .dashboard
        .logs
        .iter()
        .map(|event| {
            Line::from(vec![
                Span::styled(
                    format!("{:<8} ", event.level.as_str()),
                    Style::default().fg(level_color(event.level)),
                ),
                Span::styled(
                    format!("{}: ", event.source),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(event.message.clone()),
            ])
        })
        .collect();
    let offset = tail_offset(lines.len(), area.height.saturating_sub(2));
    let widget = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((offset, 0));
    f.render_widget(widget, area);
}

fn draw_footer(f: &mut Frame<'_>, area: Rect, app: &SessionApp) {
    let hint =
        "q:quit  space:start/stop  x:reset  1/2/3:speed  \u{2191}/\u{2193}:select  e:escalate  f:false-positive  d:resolve";
    let mut lines = vec![Line::from(vec![
        Span::styled("> ", Style::default().fg(Color::Cyan)),
        Span::styled(hint, Style::default().fg(Color::Gray)),
    ])];
    if let Some(status) = &app.status_line {
        lines.push(Line::from(Span::styled(
            status.clone(),
            Style::default().fg(Color::DarkGray),
        )));
    }
    let footer = Paragraph::new(lines).block(Block::default().borders(Borders::TOP));
    f.render_widget(footer, area);
}

fn alert_line(alert: &Alert, selected: bool) -> Line<'_> {
    let mut style = Style::default();
    if selected {
        style = style.add_modifier(Modifier::REVERSED);
    }
    let mut parts = vec![
        Span::styled(
            format!("{:<8} ", alert.severity.as_str()),
            style.fg(severity_color(alert.severity)),
        ),
        Span::styled(format!("{:<12} ", alert.status.as_str()), style.fg(status_color(alert.status))),
        Span::styled(alert.alert_type.clone(), style),
        Span::styled(format!("  {}", alert.source_ip), style.fg(Color::Gray)),
    ];
    if let Some(score) = alert.risk_score {
        parts.push(Span::styled(
            format!("  risk {score:.1}"),
            style.fg(threat_color(score.floor() as u32)),
        ));
    }
    Line::from(parts)
}

fn transcript_line(line: &str) -> Line<'_> {
    let style = if line.starts_with("[!]") {
        Style::default().fg(Color::Yellow)
    } else if line.starts_with("[\u{2713}]") {
        Style::default().fg(Color::Green)
    } else if line.starts_with("---") {
        Style::default().fg(Color::Magenta)
    } else if line.starts_with("[?]") {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Cyan)
    };
    Line::from(Span::styled(line.to_string(), style))
}

fn panel_block(title: &str) -> Block<'_> {
    Block::default().borders(Borders::ALL).title(title)
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Critical => Color::Red,
        Severity::High => Color::Yellow,
        Severity::Medium => Color::Cyan,
        Severity::Low => Color::Gray,
    }
}

fn status_color(status: AlertStatus) -> Color {
    match status {
        AlertStatus::Open => Color::White,
        AlertStatus::Resolved => Color::Green,
        AlertStatus::FalsePositive => Color::DarkGray,
        AlertStatus::Escalated => Color::Red,
    }
}

fn level_color(level: LogLevel) -> Color {
    match level {
        LogLevel::Critical | LogLevel::Error => Color::Red,
        LogLevel::Warn => Color::Yellow,
        LogLevel::Info => Color::Gray,
        LogLevel::Debug => Color::DarkGray,
    }
}

fn threat_color(score: u32) -> Color {
    if score >= 75 {
        Color::Red
    } else if score >= 40 {
        Color::Yellow
    } else {
        Color::Green
    }
}

fn format_duration(secs: u64) -> String {
    let m = secs / 60;
    let s = secs % 60;
    format!("{m:02}:{s:02}")
}

/// Tail-follow scroll offset for an append-only pane.
fn tail_offset(lines_len: usize, inner_height: u16) -> u16 {
    lines_len.saturating_sub(inner_height as usize) as u16
}
