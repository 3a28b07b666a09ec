//! Animation Choreography
//!
//! Stagger delays for cascading reveals and the one-shot "entered the
//! viewport" flag. The actual transitions live in `style.css`.

/// Per-index delay for sibling animations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stagger {
    pub base_ms: u32,
    pub step_ms: u32,
}

impl Stagger {
    pub const FEATURED: Stagger = Stagger { base_ms: 0, step_ms: 150 };
    pub const SERVICES: Stagger = Stagger { base_ms: 0, step_ms: 100 };
    pub const TILES: Stagger = Stagger { base_ms: 0, step_ms: 50 };
    pub const REELS: Stagger = Stagger { base_ms: 0, step_ms: 100 };
    pub const MENU: Stagger = Stagger { base_ms: 200, step_ms: 80 };

    pub fn delay_ms(self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.base_ms.saturating_add(self.step_ms.saturating_mul(index))
    }

    /// For elements revealed by a class change
    pub fn style(self, index: usize) -> String {
        format!("transition-delay: {}ms;", self.delay_ms(index))
    }

    /// For elements that play a keyframe animation on mount
    pub fn animation_style(self, index: usize) -> String {
        format!("animation-delay: {}ms;", self.delay_ms(index))
    }
}

/// Set once when an element first intersects the viewport, never cleared
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InView(bool);

impl InView {
    /// Returns true only on the first intersection
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if intersecting && !self.0 {
            self.0 = true;
            return true;
        }
        false
    }
}

/// Class list for a reveal wrapper
pub fn reveal_class(base: &str, revealed: bool) -> String {
    if revealed {
        format!("{} reveal revealed", base)
    } else {
        format!("{} reveal", base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delays_increase_with_index() {
        for stagger in [Stagger::FEATURED, Stagger::SERVICES, Stagger::TILES, Stagger::MENU] {
            let delays: Vec<u32> = (0..6).map(|i| stagger.delay_ms(i)).collect();
            assert!(delays.windows(2).all(|w| w[0] < w[1]), "{:?}", stagger);
        }
    }

    #[test]
    fn test_menu_stagger_matches_choreography() {
        assert_eq!(Stagger::MENU.delay_ms(0), 200);
        assert_eq!(Stagger::MENU.delay_ms(3), 440);
        assert_eq!(Stagger::TILES.style(4), "transition-delay: 200ms;");
        assert_eq!(Stagger::MENU.animation_style(1), "animation-delay: 280ms;");
    }

    #[test]
    fn test_huge_index_saturates() {
        assert_eq!(Stagger::FEATURED.delay_ms(usize::MAX), u32::MAX);
    }

    #[test]
    fn test_in_view_fires_once() {
        let mut seen = InView::default();
        assert!(!seen.observe(false));
        assert!(seen.observe(true));
        assert!(!seen.observe(true));
        assert!(!seen.observe(false));
        assert_eq!(seen, InView(true));
    }

    #[test]
    fn test_reveal_class() {
        assert_eq!(reveal_class("card", false), "card reveal");
        assert_eq!(reveal_class("card", true), "card reveal revealed");
    }
}
