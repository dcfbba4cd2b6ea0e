use ratatui::{prelude::*, widgets::*};
use unicode_width::UnicodeWidthStr;

use crate::domain::{cart::LineView, text::truncate_to_width};

/// One cart entry; the `#n` tag is the position the remove affordance acts on
#[derive(Clone, Debug)]
pub struct CartLine {
    pub line: LineView,
    pub highlight: bool,
    pub selected_style: Style,
    pub price_style: Style,
    pub muted_style: Style,
}

impl CartLine {
    pub const HEIGHT: u16 = 2;

    pub fn new(line: LineView) -> Self {
        CartLine {
            line,
            highlight: false,
            selected_style: Style::default().add_modifier(Modifier::REVERSED),
            price_style: Style::default(),
            muted_style: Style::default(),
        }
    }

    pub fn styles(mut self, selected: Style, price: Style, muted: Style) -> Self {
        self.selected_style = selected;
        self.price_style = price;
        self.muted_style = muted;
        self
    }

    pub fn label(&self) -> String {
        format!("#{} {}", self.line.position + 1, self.line.name)
    }
}

impl Widget for CartLine {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = area.width as usize;
        let label_style = if self.highlight {
            self.selected_style
        } else {
            Style::default()
        };

        let label = Line::styled(truncate_to_width(&self.label(), width), label_style);

        let price = self.line.display_price.clone();
        let image_width = width.saturating_sub(price.as_str().width() + 2);
        let detail = Line::from(vec![
            Span::styled(price, self.price_style),
            Span::raw("  "),
            Span::styled(
                truncate_to_width(&self.line.image_ref, image_width),
                self.muted_style,
            ),
        ]);

        Paragraph::new(vec![label, detail]).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn ring_at(position: usize) -> LineView {
        LineView {
            position,
            image_ref: "images/ring.jpg".to_string(),
            name: "Diamond Ring".to_string(),
            display_price: "₹2,500".to_string(),
        }
    }

    fn rows(buf: &Buffer) -> Vec<String> {
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    #[test]
    fn test_label_is_one_indexed() {
        assert_eq!(CartLine::new(ring_at(0)).label(), "#1 Diamond Ring");
        assert_eq!(CartLine::new(ring_at(4)).label(), "#5 Diamond Ring");
    }

    #[test]
    fn test_render() {
        let area = Rect::new(0, 0, 30, CartLine::HEIGHT);
        let mut buf = Buffer::empty(area);

        CartLine::new(ring_at(1)).render(area, &mut buf);

        assert_eq!(
            rows(&buf),
            vec![
                "#2 Diamond Ring".to_string(),
                "₹2,500  images/ring.jpg".to_string()
            ]
        );
    }

    #[test]
    fn test_render_narrow_truncates() {
        let area = Rect::new(0, 0, 8, CartLine::HEIGHT);
        let mut buf = Buffer::empty(area);

        CartLine::new(ring_at(0)).render(area, &mut buf);

        assert_eq!(rows(&buf)[0], "#1 Diam…");
    }
}
