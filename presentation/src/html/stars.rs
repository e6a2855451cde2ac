//! Five-slot star rating

use super::builder::HtmlBuilder;

/// Number of star slots on a card
pub const STAR_SLOTS: usize = 5;

/// Star breakdown for an average rating
///
/// `full + half + empty` is always [`STAR_SLOTS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating {
    pub full: usize,
    pub half: usize,
    pub empty: usize,
}

impl StarRating {
    /// Full stars are the floor of the rating, a fractional part of 0.5 or
    /// more adds one half star. The rating is clamped to 0..=5.
    pub fn from_rating(rating: f64) -> Self {
        let rating = if rating.is_finite() {
            rating.clamp(0.0, STAR_SLOTS as f64)
        } else {
            0.0
        };
        let full = rating.floor() as usize;
        let half = usize::from(rating.fract() >= 0.5);
        Self {
            full,
            half,
            empty: STAR_SLOTS - full - half,
        }
    }

    pub fn write_html(&self, b: &mut HtmlBuilder) {
        for _ in 0..self.full {
            b.icon("fas fa-star");
        }
        for _ in 0..self.half {
            b.icon("fas fa-star-half-alt");
        }
        for _ in 0..self.empty {
            b.icon("far fa-star");
        }
    }

    /// Console form, e.g. `★★★⯪☆`
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(STAR_SLOTS * 3);
        out.extend(std::iter::repeat_n('★', self.full));
        out.extend(std::iter::repeat_n('⯪', self.half));
        out.extend(std::iter::repeat_n('☆', self.empty));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stars(rating: f64) -> (usize, usize, usize) {
        let s = StarRating::from_rating(rating);
        (s.full, s.half, s.empty)
    }

    #[test]
    fn test_star_breakdown() {
        assert_eq!(stars(3.7), (3, 1, 1));
        assert_eq!(stars(5.0), (5, 0, 0));
        assert_eq!(stars(0.0), (0, 0, 5));
        assert_eq!(stars(4.5), (4, 1, 0));
        assert_eq!(stars(2.49), (2, 0, 3));
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(stars(7.2), (5, 0, 0));
        assert_eq!(stars(-1.0), (0, 0, 5));
        assert_eq!(stars(f64::NAN), (0, 0, 5));
    }

    #[test]
    fn test_html_has_five_icons() {
        let mut b = HtmlBuilder::new();
        StarRating::from_rating(3.7).write_html(&mut b);
        let html = b.finish().into_string();
        assert_eq!(html.matches("<i ").count(), STAR_SLOTS);
        assert_eq!(html.matches("fa-star-half-alt").count(), 1);
        assert_eq!(html.matches("far fa-star").count(), 1);
    }

    #[test]
    fn test_text_form() {
        assert_eq!(StarRating::from_rating(3.7).to_text(), "★★★⯪☆");
    }
}
