use crate::ui::keypad::{Button, KEYPAD, KEYPAD_COLUMNS};
use ratatui::layout::{Constraint, Layout, Rect};

/// Height of the readout box, borders included.
const READOUT_HEIGHT: u16 = 4;

/// Screen regions, top to bottom.
pub struct Regions {
    pub header: Rect,
    pub readout: Rect,
    pub keypad: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> Regions {
    let [header, readout, keypad, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(READOUT_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(3),
    ])
    .areas(area);
    Regions {
        header,
        readout,
        keypad,
        footer,
    }
}

/// Splits the keypad area into one rect per button.
pub fn keypad_cells(area: Rect) -> Vec<(Button, Rect)> {
    let rows = Layout::vertical(KEYPAD.iter().map(|_| Constraint::Ratio(1, KEYPAD.len() as u32)))
        .split(area);

    let mut cells = Vec::new();
    for (row, row_area) in KEYPAD.iter().zip(rows.iter()) {
        let columns = Layout::horizontal(
            row.iter()
                .map(|(_, width)| Constraint::Ratio(*width, KEYPAD_COLUMNS)),
        )
        .split(*row_area);
        cells.extend(row.iter().map(|(button, _)| *button).zip(columns.iter().copied()));
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_stack_vertically() {
        let regions = layout_regions(Rect::new(0, 0, 40, 30));
        assert_eq!(regions.header.height, 3);
        assert_eq!(regions.readout.y, 3);
        assert_eq!(regions.readout.height, READOUT_HEIGHT);
        assert_eq!(regions.footer.y, 27);
        assert_eq!(regions.keypad.height, 30 - 3 - READOUT_HEIGHT - 3);
    }

    #[test]
    fn one_cell_per_button() {
        let cells = keypad_cells(Rect::new(0, 0, 40, 20));
        let buttons: usize = KEYPAD.iter().map(|row| row.len()).sum();
        assert_eq!(cells.len(), buttons);
    }

    #[test]
    fn zero_is_double_width() {
        let cells = keypad_cells(Rect::new(0, 0, 40, 20));
        let zero = cells
            .iter()
            .find(|(button, _)| *button == Button::Digit(0))
            .map(|(_, rect)| *rect)
            .unwrap();
        assert_eq!(zero.width, 20);
        assert_eq!(zero.x, 0);
    }
}
