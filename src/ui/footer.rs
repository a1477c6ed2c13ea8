use crate::calc::SizeClass;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const KEY_HINTS: &str = " 0-9 . │ + - * / │ %: Percent │ n: ± │ Enter: = │ c: AC │ q: Quit";

/// Readout condition shown at the right end of the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadoutStatus {
    Ok(SizeClass),
    Fault,
}

impl ReadoutStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Ok(SizeClass::Large) => "large",
            Self::Ok(SizeClass::Medium) => "medium",
            Self::Ok(SizeClass::Small) => "small",
            Self::Ok(SizeClass::Tiny) => "tiny",
            Self::Fault => "error: press c",
        }
    }
}

/// Key hints plus the readout status.
pub struct Footer {
    status: ReadoutStatus,
}

impl Footer {
    pub fn new(status: ReadoutStatus) -> Self {
        Self { status }
    }

    /// `width` is the inner width available between the borders.
    pub fn line(&self, width: usize) -> Line<'static> {
        let hint_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let status_style = match self.status {
            ReadoutStatus::Fault => Style::default().fg(STATUS_ERROR),
            ReadoutStatus::Ok(_) => hint_style,
        };
        let status = format!("{} ", self.status.label());

        let padding = width
            .saturating_sub(KEY_HINTS.chars().count())
            .saturating_sub(status.chars().count());

        Line::from(vec![
            Span::styled(KEY_HINTS, hint_style),
            Span::styled(" ".repeat(padding), hint_style),
            Span::styled(status, status_style),
        ])
    }

    pub fn widget(&self, width: u16) -> Paragraph<'static> {
        Paragraph::new(self.line(width.saturating_sub(2) as usize)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
