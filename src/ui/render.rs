use crate::clock::{ClockState, Mode};
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_panels, layout_regions};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, LOW_TIME};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let clock = app.clock();

    frame.render_widget(Header::new().widget(clock.run_state), header);
    frame.render_widget(Clear, body);

    let (session, break_panel, face) = body_panels(body);
    frame.render_widget(
        duration_panel(
            "Session Length",
            clock.session_secs,
            clock.mode == Mode::Session,
        ),
        session,
    );
    frame.render_widget(
        duration_panel("Break Length", clock.break_secs, clock.mode == Mode::Break),
        break_panel,
    );
    frame.render_widget(clock_face(clock), face);

    frame.render_widget(Footer::new().widget(footer), footer);
}

fn duration_panel(title: &'static str, secs: u32, active: bool) -> Paragraph<'static> {
    let mut style = Style::default().fg(HEADER_TEXT);
    if active {
        style = style.add_modifier(Modifier::BOLD);
    }
    Paragraph::new(Line::from(format!("{} min", secs / 60)))
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
}

fn clock_face(clock: &ClockState) -> Paragraph<'static> {
    let face_color = if clock.is_low_time() {
        LOW_TIME
    } else {
        HEADER_TEXT
    };
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            clock.mode.label(),
            Style::default().fg(HEADER_SEPARATOR),
        )),
        Line::from(Span::styled(
            clock.face(),
            Style::default().fg(face_color).add_modifier(Modifier::BOLD),
        )),
    ];
    Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}
