/// Fraction of the element that has to be on screen before it is shown.
pub const REVEAL_THRESHOLD: f64 = 0.1;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Reveal {
    #[default]
    Hidden,
    Visible,
}

impl Reveal {
    /// Every report decides the state on its own, so an element scrolled back
    /// out of view hides again.
    pub fn from_ratio(intersection_ratio: f64) -> Self {
        if intersection_ratio >= REVEAL_THRESHOLD {
            Self::Visible
        } else {
            Self::Hidden
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Hidden => "reveal-hidden",
            Self::Visible => "reveal-visible",
        }
    }
}

pub fn transition_delay_style(delay_ms: u32) -> String {
    format!("transition-delay: {delay_ms}ms;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        assert_eq!(Reveal::default(), Reveal::Hidden);
        assert_eq!(Reveal::default().class(), "reveal-hidden");
    }

    #[test]
    fn threshold_is_inclusive() {
        assert_eq!(Reveal::from_ratio(0.0), Reveal::Hidden);
        assert_eq!(Reveal::from_ratio(0.099), Reveal::Hidden);
        assert_eq!(Reveal::from_ratio(0.1), Reveal::Visible);
        assert_eq!(Reveal::from_ratio(1.0), Reveal::Visible);
    }

    #[test]
    fn hides_again_when_ratio_drops() {
        let reports = [0.0, 0.4, 0.05, 0.2];
        let states: Vec<Reveal> = reports.iter().copied().map(Reveal::from_ratio).collect();

        assert_eq!(
            states,
            vec![Reveal::Hidden, Reveal::Visible, Reveal::Hidden, Reveal::Visible]
        );
    }

    #[test]
    fn delay_becomes_transition_delay() {
        assert_eq!(transition_delay_style(300), "transition-delay: 300ms;");
        assert_eq!(transition_delay_style(0), "transition-delay: 0ms;");
    }
}
