//! Scroll progress indicator math

/// Percentage of the scrollable range covered, clamped to [0, 100].
///
/// Pages that do not scroll (`document_height <= viewport_height`) report 0.
pub fn scroll_percent(scroll_top: f64, document_height: f64, viewport_height: f64) -> f64 {
    let range = document_height - viewport_height;
    if range.is_nan() || range <= 0.0 || !scroll_top.is_finite() {
        return 0.0;
    }
    (scroll_top / range * 100.0).clamp(0.0, 100.0)
}

/// CSS width value for the indicator bar
pub fn progress_width(percent: f64) -> String {
    format!("{}%", percent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_half_way() {
        assert_eq!(scroll_percent(50.0, 200.0, 100.0), 50.0);
    }

    #[test]
    fn test_top_and_bottom() {
        assert_eq!(scroll_percent(0.0, 3000.0, 800.0), 0.0);
        assert_eq!(scroll_percent(2200.0, 3000.0, 800.0), 100.0);
    }

    #[test]
    fn test_non_scrolling_page_is_zero() {
        // Equal heights would divide by zero; clamped to 0 instead
        assert_eq!(scroll_percent(0.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_percent(10.0, 600.0, 800.0), 0.0);
    }

    #[test]
    fn test_overscroll_is_clamped() {
        // Rubber-band scrolling can report values outside the range
        assert_eq!(scroll_percent(-40.0, 2000.0, 1000.0), 0.0);
        assert_eq!(scroll_percent(1100.0, 2000.0, 1000.0), 100.0);
    }

    #[test]
    fn test_progress_width() {
        assert_eq!(progress_width(50.0), "50%");
        assert_eq!(progress_width(12.5), "12.5%");
    }

    proptest! {
        #[test]
        fn prop_percent_in_range(
            top in -1e5f64..1e5,
            doc in 0.0f64..1e5,
            view in 0.0f64..1e5,
        ) {
            let p = scroll_percent(top, doc, view);
            prop_assert!((0.0..=100.0).contains(&p));
        }
    }
}
