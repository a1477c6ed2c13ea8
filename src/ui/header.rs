use crate::calc::{DivisionMode, EnginePolicy, OperatorChain};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Title bar showing the pending expression and active engine policies.
pub struct Header {
    policy: EnginePolicy,
}

impl Header {
    pub fn new(policy: EnginePolicy) -> Self {
        Self { policy }
    }

    pub fn widget(&self, pending: Option<String>) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let division = match self.policy.division {
            DivisionMode::Quotient => "÷ divides",
            DivisionMode::Product => "÷ multiplies",
        };
        let chain = match self.policy.operator_chain {
            OperatorChain::ImplicitZero => "chain: 0",
            OperatorChain::Replace => "chain: replace",
        };

        let mut spans = vec![
            Span::styled("  tapcalc", text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(division, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(chain, text_style),
        ];
        if let Some(pending) = pending {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(pending, text_style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
