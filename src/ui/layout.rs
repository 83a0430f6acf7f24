use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub nav_bar: Rect,
    pub content: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Vertical split: nav tabs | section content | status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Nav bar
            Constraint::Min(5),    // Section content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        nav_bar: chunks[0],
        content: chunks[1],
        status_bar: chunks[2],
    }
}

/// A rect of at most `width` x `height`, centered in `area`.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width - w) / 2;
    let y = area.y + (area.height - h) / 2;
    Rect::new(x, y, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_covers_the_terminal() {
        let area = Rect::new(0, 0, 80, 24);
        let l = compute_layout(area);
        assert_eq!(l.nav_bar.height, 3);
        assert_eq!(l.status_bar.height, 1);
        assert_eq!(
            l.nav_bar.height + l.content.height + l.status_bar.height,
            area.height
        );
    }

    #[test]
    fn centered_clamps_to_the_available_area() {
        let area = Rect::new(0, 0, 40, 10);
        let r = centered(area, 100, 100);
        assert_eq!(r, area);
        let r = centered(area, 20, 4);
        assert_eq!(r, Rect::new(10, 3, 20, 4));
    }
}
