//! Pointer-Follow Glow
//!
//! Pointer position relative to a container, fed into a radial gradient.

/// Pointer position in container-local pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    /// From viewport coordinates and the container's bounding rect origin
    pub fn relative_to(client_x: f64, client_y: f64, left: f64, top: f64) -> Self {
        Self { x: client_x - left, y: client_y - top }
    }
}

/// Glow appearance: radius and inner colour
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub radius_px: u32,
    pub color: &'static str,
}

impl Glow {
    pub const PAGE: Glow = Glow { radius_px: 600, color: "rgba(251,191,36,0.06)" };
    pub const HEADER: Glow = Glow { radius_px: 500, color: "rgba(251,191,36,0.05)" };
    pub const BUTTON_PRIMARY: Glow = Glow { radius_px: 100, color: "rgba(255,255,255,0.3)" };
    pub const BUTTON_SECONDARY: Glow = Glow { radius_px: 150, color: "rgba(251,191,36,0.15)" };
    pub const CARD: Glow = Glow { radius_px: 200, color: "rgba(251,191,36,0.08)" };

    pub fn gradient(self, at: PointerPosition) -> String {
        format!(
            "radial-gradient(circle {}px at {}px {}px, {}, transparent)",
            self.radius_px, at.x, at.y, self.color
        )
    }

    /// Inline `background` declaration
    pub fn style(self, at: PointerPosition) -> String {
        format!("background: {};", self.gradient(at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_position() {
        let p = PointerPosition::relative_to(150.0, 80.0, 100.0, 20.0);
        assert_eq!(p, PointerPosition { x: 50.0, y: 60.0 });
    }

    #[test]
    fn test_position_outside_container_is_negative() {
        let p = PointerPosition::relative_to(10.0, 10.0, 100.0, 20.0);
        assert_eq!(p, PointerPosition { x: -90.0, y: -10.0 });
    }

    #[test]
    fn test_gradient_string() {
        let at = PointerPosition { x: 12.0, y: 34.5 };
        assert_eq!(
            Glow::CARD.gradient(at),
            "radial-gradient(circle 200px at 12px 34.5px, rgba(251,191,36,0.08), transparent)"
        );
        assert!(Glow::PAGE.style(at).starts_with("background: radial-gradient(circle 600px"));
    }
}
