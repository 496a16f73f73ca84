use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Clear, Dataset, GraphType, Paragraph, Wrap},
    Frame,
};

use crate::amount::{format_currency, format_value, CURRENCY_PREFIX};
use crate::app::{App, Focus};
use crate::engine::SavingsResult;
use crate::state::{DisplayMode, Field};
use crate::tips::TIPS;

const TITLE: &str = "Habit Savings Calculator";

pub fn ui(f: &mut Frame, app: &App) {
    match app.calculator.mode() {
        DisplayMode::FormVisible => render_form_screen(f, app),
        DisplayMode::ResultsVisible => render_results_screen(f, app),
    }
    if let Some(notice) = &app.notice {
        render_notice(f, notice);
    }
}

fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new(TITLE)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, area);
}

fn input_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn render_form_screen(f: &mut Frame, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)].as_ref())
        .split(f.size());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Length(4),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(1),
            ]
            .as_ref(),
        )
        .split(columns[0]);

    render_title(f, chunks[0]);

    let intro = Paragraph::new(vec![
        Line::from(Span::styled(
            "Start changing, start saving!",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from("Swap a habit and see how much money you keep."),
    ])
    .wrap(Wrap { trim: true });
    f.render_widget(intro, chunks[1]);

    let calc = &app.calculator;
    let inputs = [
        (
            Focus::OldHabitCost,
            "Old habit cost (per time)",
            calc.amount(Field::OldHabitCost).to_string(),
        ),
        (
            Focus::NewHabitCost,
            "New habit cost (per time)",
            calc.amount(Field::NewHabitCost).to_string(),
        ),
        (
            Focus::Frequency,
            "Frequency per week",
            calc.frequency().to_string(),
        ),
    ];
    for ((focus, title, value), area) in inputs.into_iter().zip(&chunks[2..5]) {
        let focused = app.focus == focus;
        let input = Paragraph::new(value)
            .style(input_style(focused))
            .block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(input, *area);
    }

    let help = Paragraph::new("Tab/↑/↓: switch field | Enter: calculate | Esc: exit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(help, chunks[5]);

    render_tips(f, columns[1]);
}

fn render_tips(f: &mut Frame, area: Rect) {
    let mut text = Vec::with_capacity(TIPS.len() * 3);
    for tip in &TIPS {
        text.push(Line::from(Span::styled(
            tip.title,
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        )));
        text.push(Line::from(tip.body));
        text.push(Line::from(""));
    }
    let tips = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Saving Tips"));
    f.render_widget(tips, area);
}

fn render_results_screen(f: &mut Frame, app: &App) {
    let calc = &app.calculator;
    let chart_height = if calc.chart_visible() {
        Constraint::Min(8)
    } else {
        Constraint::Length(0)
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Length(4),
                Constraint::Length(4),
                chart_height,
                Constraint::Length(3),
            ]
            .as_ref(),
        )
        .split(f.size());

    render_title(f, chunks[0]);

    let s = calc.savings();
    render_card_row(
        f,
        chunks[1],
        [
            ("Weekly", s.weekly, Color::LightBlue),
            ("Monthly", s.monthly, Color::Yellow),
            ("Yearly", s.yearly, Color::Green),
        ],
    );
    render_card_row(
        f,
        chunks[2],
        [
            ("Daily", s.daily, Color::LightMagenta),
            ("6 Months", s.six_months, Color::LightGreen),
            ("5 Years", s.five_years, Color::LightYellow),
        ],
    );

    if calc.chart_visible() {
        render_chart(f, chunks[3], s);
    }

    let footer = match &app.status {
        Some(status) => Line::from(vec![
            Span::styled(status.as_str(), Style::default().fg(Color::Green)),
            Span::raw(" | r: reset | e: export | q: quit"),
        ]),
        None => Line::from("r/Backspace: back and reset | e: export | q: quit"),
    };
    let help = Paragraph::new(footer)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(help, chunks[4]);
}

fn render_card_row(f: &mut Frame, area: Rect, cards: [(&str, f64, Color); 3]) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3].as_ref())
        .split(area);

    for ((title, value, color), cell) in cards.into_iter().zip(cells.iter()) {
        let card = Paragraph::new(format_currency(value))
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .title_alignment(Alignment::Center),
            );
        f.render_widget(card, *cell);
    }
}

fn render_chart(f: &mut Frame, area: Rect, savings: &SavingsResult) {
    let points: Vec<(f64, f64)> = savings
        .chart_series()
        .iter()
        .enumerate()
        .map(|(i, v)| (i as f64, *v))
        .collect();
    let max = points.iter().map(|(_, v)| *v).fold(0.0, f64::max);
    let min = points.iter().map(|(_, v)| *v).fold(0.0, f64::min);
    let upper = if max > min { max * 1.1 } else { min + 1.0 };

    let datasets = vec![Dataset::default()
        .name("Savings")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Green))
        .data(&points)];

    let x_labels: Vec<Span> = SavingsResult::CHART_LABELS
        .iter()
        .map(|label| Span::raw(*label))
        .collect();
    let y_labels = vec![
        Span::raw(format_value(min)),
        Span::raw(format_value((min + upper) / 2.0)),
        Span::raw(format_value(upper)),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Savings Visualization ({})", CURRENCY_PREFIX.trim_end())),
        )
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, 2.0])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([min, upper])
                .labels(y_labels),
        );
    f.render_widget(chart, area);
}

fn render_notice(f: &mut Frame, message: &str) {
    let area = centered_rect(50, 7, f.size());
    let notice = Paragraph::new(vec![
        Line::from(message),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to continue",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .wrap(Wrap { trim: true })
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::Red))
    .block(Block::default().borders(Borders::ALL).title("Invalid input"));
    f.render_widget(Clear, area);
    f.render_widget(notice, area);
}

fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Min(0),
                Constraint::Length(height),
                Constraint::Min(0),
            ]
            .as_ref(),
        )
        .split(r);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ]
            .as_ref(),
        )
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Calculator;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn computed(old: &str, new: &str, frequency: &str) -> App {
        let mut calc = Calculator::new();
        calc.set_amount(Field::OldHabitCost, old);
        calc.set_amount(Field::NewHabitCost, new);
        calc.set_frequency(frequency);
        calc.calculate().unwrap();
        App::new(calc, "unused.csv".into())
    }

    #[test]
    fn form_shows_grouped_amounts() {
        let mut app = App::default();
        app.calculator.set_amount(Field::OldHabitCost, "1500000");
        let screen = render(&app);
        assert!(screen.contains("Rp. 1.500.000"));
        assert!(screen.contains("Rp. 0"));
        assert!(screen.contains("Frequency per week"));
        assert!(screen.contains("Saving Tips"));
    }

    #[test]
    fn results_show_every_card() {
        let screen = render(&computed("50000", "20000", "7"));
        for title in ["Weekly", "Monthly", "Yearly", "Daily", "6 Months", "5 Years"] {
            assert!(screen.contains(title), "missing card {title}");
        }
        assert!(screen.contains("Rp. 210.000"));
        assert!(screen.contains("Rp. 54.600.000"));
        assert!(screen.contains("Savings Visualization"));
    }

    #[test]
    fn chart_is_skipped_for_negative_savings() {
        let screen = render(&computed("10000", "15000", "2"));
        assert!(screen.contains("Rp. -10.000"));
        assert!(!screen.contains("Savings Visualization"));
    }

    #[test]
    fn notice_is_drawn_over_the_form() {
        let mut app = App::default();
        app.notice = Some("invalid numeric input".to_string());
        let screen = render(&app);
        assert!(screen.contains("Invalid input"));
        assert!(screen.contains("Press any key"));
    }
}
