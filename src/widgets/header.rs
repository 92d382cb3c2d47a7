pub const SCROLLED_CLASS: &str = "scrolled";

pub fn is_scrolled(scroll_y: f64, threshold_px: f64) -> bool {
    scroll_y > threshold_px
}
