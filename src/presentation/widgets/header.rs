use ratatui::{prelude::*, widgets::*};

/// Storefront title with the cart badge on the right
#[derive(Clone, Debug)]
pub struct HeaderWidget {
    pub title: String,
    pub count: usize,
    pub style: Style,
    pub badge_style: Style,
}

impl HeaderWidget {
    pub fn new(title: impl Into<String>, count: usize) -> Self {
        Self {
            title: title.into(),
            count,
            style: Style::default(),
            badge_style: Style::default(),
        }
    }

    pub fn styles(mut self, style: Style, badge_style: Style) -> Self {
        self.style = style;
        self.badge_style = badge_style;
        self
    }

    pub fn badge(&self) -> String {
        format!(" Cart {} ", self.count)
    }
}

impl Widget for HeaderWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let badge = Line::from(Span::styled(self.badge(), self.badge_style)).right_aligned();
        Block::default()
            .style(self.style)
            .title_top(Line::from(format!(" {}", self.title)))
            .title_top(badge)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_render_title_and_badge() {
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);

        HeaderWidget::new("Jewelry Store", 3).render(area, &mut buf);

        let row: String = (0..area.width).map(|x| buf[(x, 0)].symbol()).collect();
        assert_eq!(row, " Jewelry Store         Cart 3 ");
    }
}
