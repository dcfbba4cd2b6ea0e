/// Collapses bursts of render requests and resizes into one action per loop
pub struct Coalescer;

impl Coalescer {
    /// Render when any update asked for it or the terminal's frame timer fired
    #[inline]
    pub fn decide_render(queued_render_reqs: usize, saw_tui_render: bool) -> bool {
        queued_render_reqs > 0 || saw_tui_render
    }

    /// Only the most recent resize matters
    #[inline]
    pub fn decide_resize(
        last_seen: Option<(u16, u16)>,
        events: &[(u16, u16)],
    ) -> Option<(u16, u16)> {
        events.last().copied().or(last_seen)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::Coalescer;

    #[rstest]
    #[case(0, false, false)]
    #[case(1, false, true)]
    #[case(2, false, true)]
    #[case(0, true, true)]
    #[case(3, true, true)]
    fn test_decide_render(#[case] queued: usize, #[case] saw_tui: bool, #[case] expected: bool) {
        assert_eq!(Coalescer::decide_render(queued, saw_tui), expected);
    }

    #[rstest]
    #[case(None, &[], None)]
    #[case(None, &[(10, 10)], Some((10, 10)))]
    #[case(None, &[(10, 10), (20, 30)], Some((20, 30)))]
    #[case(Some((5, 5)), &[(100, 200)], Some((100, 200)))]
    #[case(Some((5, 5)), &[], Some((5, 5)))]
    fn test_decide_resize_keeps_last(
        #[case] last_seen: Option<(u16, u16)>,
        #[case] events: &[(u16, u16)],
        #[case] expected: Option<(u16, u16)>,
    ) {
        assert_eq!(Coalescer::decide_resize(last_seen, events), expected);
    }
}
