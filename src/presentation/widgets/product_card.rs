use ratatui::{prelude::*, widgets::*};
use unicode_width::UnicodeWidthStr;

use crate::domain::{catalog::Product, text::truncate_to_width};

#[derive(Clone, Debug)]
pub struct ProductCard {
    pub product: Product,
    /// How many lines of the cart currently carry this product's name
    pub in_cart: usize,
    pub highlight: bool,
    pub selected_style: Style,
    pub price_style: Style,
    pub muted_style: Style,
}

impl ProductCard {
    pub fn new(product: Product, in_cart: usize) -> Self {
        ProductCard {
            product,
            in_cart,
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

    pub fn height(&self) -> u16 {
        // name + price + image + separator
        let fixed = 4;
        if self.product.description.is_empty() {
            fixed
        } else {
            fixed + 1
        }
    }

    fn name_line(&self, width: usize) -> Line<'static> {
        let badge = if self.in_cart > 0 {
            format!("  ×{} in cart", self.in_cart)
        } else {
            String::new()
        };
        let name = truncate_to_width(
            &self.product.name,
            width.saturating_sub(badge.as_str().width()),
        );
        let name_style = if self.highlight {
            self.selected_style
        } else {
            Style::default().bold()
        };

        Line::from(vec![
            Span::styled(name, name_style),
            Span::styled(badge, self.muted_style),
        ])
    }
}

impl Widget for ProductCard {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = area.width as usize;
        let mut text = Text::default();

        text.lines.push(self.name_line(width));
        text.lines.push(Line::styled(
            self.product.price_text.clone(),
            self.price_style,
        ));
        text.lines.push(Line::styled(
            truncate_to_width(&format!("img: {}", self.product.image), width),
            self.muted_style,
        ));
        if !self.product.description.is_empty() {
            text.lines.push(Line::raw(truncate_to_width(
                &self.product.description,
                width,
            )));
        }
        text.lines
            .push(Line::styled("─".repeat(width), self.muted_style));

        Paragraph::new(text).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[fixture]
    fn necklace() -> Product {
        Product {
            name: "Gold Necklace".to_string(),
            price: 1500,
            image: "images/necklace.jpg".to_string(),
            price_text: "₹1,500".to_string(),
            description: String::new(),
        }
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol())
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    #[rstest]
    fn test_height_without_description(necklace: Product) {
        assert_eq!(ProductCard::new(necklace, 0).height(), 4);
    }

    #[rstest]
    fn test_height_with_description(mut necklace: Product) {
        necklace.description = "Floral pendant".to_string();
        assert_eq!(ProductCard::new(necklace, 0).height(), 5);
    }

    #[rstest]
    fn test_render_shows_price_text_verbatim(necklace: Product) {
        let area = Rect::new(0, 0, 30, 4);
        let mut buf = Buffer::empty(area);

        ProductCard::new(necklace, 0).render(area, &mut buf);

        assert_eq!(row(&buf, 0), "Gold Necklace");
        assert_eq!(row(&buf, 1), "₹1,500");
        assert_eq!(row(&buf, 2), "img: images/necklace.jpg");
        assert_eq!(row(&buf, 3), "─".repeat(30));
    }

    #[rstest]
    fn test_render_in_cart_badge(necklace: Product) {
        let area = Rect::new(0, 0, 30, 4);
        let mut buf = Buffer::empty(area);

        ProductCard::new(necklace, 2).render(area, &mut buf);

        assert_eq!(row(&buf, 0), "Gold Necklace  ×2 in cart");
    }

    #[rstest]
    fn test_highlight_uses_selected_style(necklace: Product) {
        let area = Rect::new(0, 0, 30, 4);
        let mut buf = Buffer::empty(area);
        let selected = Style::default().fg(Color::Black).bg(Color::Yellow);

        let mut card =
            ProductCard::new(necklace, 0).styles(selected, Style::default(), Style::default());
        card.highlight = true;
        card.render(area, &mut buf);

        assert_eq!(buf[(0, 0)].bg, Color::Yellow);
    }
}
