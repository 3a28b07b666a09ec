//! Scroll Metrics
//!
//! Scroll-driven header and hero effects.

/// Header switches to its opaque style past this offset
pub const SCROLLED_THRESHOLD_PX: f64 = 20.0;

/// Hero finishes fading at this fraction of the page
const HERO_FADE_END: f64 = 0.2;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD_PX
}

/// Fraction of the document scrolled, in `[0, 1]`.
///
/// A page that fits in the viewport reports 0.
pub fn progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 || !scrollable.is_finite() {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

/// Hero opacity and scale for a scroll progress value
pub fn hero_fade(progress: f64) -> (f64, f64) {
    let t = (progress / HERO_FADE_END).clamp(0.0, 1.0);
    (1.0 - t, 1.0 - 0.05 * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrolled_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(20.0));
        assert!(is_scrolled(20.5));
    }

    #[test]
    fn test_progress_clamped() {
        assert_eq!(progress(0.0, 2000.0, 1000.0), 0.0);
        assert_eq!(progress(500.0, 2000.0, 1000.0), 0.5);
        assert_eq!(progress(1000.0, 2000.0, 1000.0), 1.0);
        // Overscroll (elastic scrolling) and negative offsets
        assert_eq!(progress(1200.0, 2000.0, 1000.0), 1.0);
        assert_eq!(progress(-30.0, 2000.0, 1000.0), 0.0);
    }

    #[test]
    fn test_progress_for_unscrollable_page() {
        assert_eq!(progress(0.0, 800.0, 1000.0), 0.0);
        assert_eq!(progress(0.0, 1000.0, 1000.0), 0.0);
    }

    #[test]
    fn test_hero_fade() {
        assert_eq!(hero_fade(0.0), (1.0, 1.0));
        let (opacity, scale) = hero_fade(0.1);
        assert!((opacity - 0.5).abs() < 1e-9);
        assert!((scale - 0.975).abs() < 1e-9);
        for p in [0.2, 0.9] {
            let (opacity, scale) = hero_fade(p);
            assert_eq!(opacity, 0.0);
            assert!((scale - 0.95).abs() < 1e-9);
        }
    }
}
