use crate::calc::SizeClass;
use crate::ui::app::App;
use crate::ui::footer::{Footer, ReadoutStatus};
use crate::ui::header::Header;
use crate::ui::keypad::{Button, ButtonKind};
use crate::ui::layout::{keypad_cells, layout_regions};
use crate::ui::theme::{
    ACTION_BG, DIGIT_BG, GLOBAL_BORDER, HIGHLIGHT_BG, OPERATION_ORANGE, READOUT_TEXT,
    STATUS_ERROR,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let regions = layout_regions(frame.area());
    let policy = app.calculator().policy();

    frame.render_widget(Header::new(policy).widget(app.pending_expression()), regions.header);
    draw_readout(frame, app, regions.readout);
    draw_keypad(frame, app, regions.keypad);
    let status = if app.calculator().fault().is_some() {
        ReadoutStatus::Fault
    } else {
        ReadoutStatus::Ok(app.calculator().display().size_class())
    };
    frame.render_widget(Footer::new(status).widget(regions.footer.width), regions.footer);
}

fn draw_readout(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let faulted = app.calculator().fault().is_some();
    let text = app.readout();

    let mut style = Style::default().fg(if faulted { STATUS_ERROR } else { READOUT_TEXT });
    style = match app.calculator().display().size_class() {
        SizeClass::Large | SizeClass::Medium => style.add_modifier(Modifier::BOLD),
        SizeClass::Small | SizeClass::Tiny => style,
    };

    let inner_width = area.width.saturating_sub(2) as usize;
    let widget = Paragraph::new(Line::from(fit_right(&text, inner_width)))
        .style(style)
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );
    frame.render_widget(widget, area);
}

fn draw_keypad(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let recent = app.calculator().display().recent_operation;
    for (button, cell) in keypad_cells(area) {
        let highlighted = matches!(button, Button::Op(op) if Some(op) == recent);
        let style = button_style(button.kind(), highlighted, app.pressed() == Some(button));
        let label_row = cell.height.saturating_sub(2) / 2;

        let mut lines = vec![Line::from(""); label_row as usize];
        lines.push(Line::from(button.label()));
        let widget = Paragraph::new(lines)
            .style(style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(style));
        frame.render_widget(widget, cell);
    }
}

fn button_style(kind: ButtonKind, highlighted: bool, pressed: bool) -> Style {
    let (fg, bg) = match kind {
        ButtonKind::Action => (Color::Black, ACTION_BG),
        ButtonKind::Digit => (Color::White, DIGIT_BG),
        ButtonKind::Operation if highlighted => (OPERATION_ORANGE, HIGHLIGHT_BG),
        ButtonKind::Operation => (Color::White, OPERATION_ORANGE),
    };
    let style = Style::default().fg(fg).bg(bg);
    if pressed {
        style.add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        style
    }
}

/// Keeps the least significant end of `text` visible when it is too wide.
fn fit_right(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let tail: String = text.chars().skip(len - (width - 1)).collect();
    format!("…{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_right_keeps_short_text() {
        assert_eq!(fit_right("123", 5), "123");
    }

    #[test]
    fn fit_right_truncates_from_the_left() {
        assert_eq!(fit_right("123456", 4), "…456");
        assert_eq!(fit_right("123456", 0), "");
    }

    #[test]
    fn highlighted_operator_inverts_colors() {
        let plain = button_style(ButtonKind::Operation, false, false);
        let lit = button_style(ButtonKind::Operation, true, false);
        assert_eq!(plain.bg, Some(OPERATION_ORANGE));
        assert_eq!(lit.bg, Some(HIGHLIGHT_BG));
        assert_eq!(lit.fg, Some(OPERATION_ORANGE));
    }
}
