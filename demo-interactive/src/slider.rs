//! Mouse-draggable horizontal slider
//!
//! The slider only tracks its on-screen track and drag state and turns a
//! mouse column into a position in `[0, 1]`. What the position means is up
//! to the caller.

use ratatui::layout::Rect;

#[derive(Debug, Default, Clone, Copy)]
pub struct Slider {
    track: Rect,
    dragging: bool,
}

impl Slider {
    /// Record where the track was drawn this frame
    pub fn set_track(&mut self, track: Rect) {
        self.track = track;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Mouse button pressed at `(column, row)`. Starts a drag and returns
    /// the new position if the press landed on the track.
    pub fn press(&mut self, column: u16, row: u16) -> Option<f64> {
        if self.hit(column, row) {
            self.dragging = true;
            Some(self.fraction_at(column))
        } else {
            None
        }
    }

    /// Mouse moved to `column` with the button held. Returns the new
    /// position while a drag is in progress; the row is ignored so the drag
    /// survives leaving the track vertically.
    pub fn drag(&self, column: u16) -> Option<f64> {
        self.dragging.then(|| self.fraction_at(column))
    }

    pub fn release(&mut self) {
        self.dragging = false;
    }

    fn hit(&self, column: u16, row: u16) -> bool {
        column >= self.track.x
            && column < self.track.right()
            && row >= self.track.y
            && row < self.track.bottom()
    }

    fn fraction_at(&self, column: u16) -> f64 {
        if self.track.width <= 1 {
            return 0.0;
        }
        let last = self.track.width - 1;
        let offset = column.saturating_sub(self.track.x).min(last);
        f64::from(offset) / f64::from(last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slider() -> Slider {
        let mut slider = Slider::default();
        slider.set_track(Rect::new(10, 5, 11, 1));
        slider
    }

    #[test]
    fn test_press_outside_track_is_ignored() {
        let mut slider = slider();
        assert_eq!(slider.press(9, 5), None);
        assert_eq!(slider.press(15, 6), None);
        assert!(!slider.is_dragging());
        assert_eq!(slider.drag(15), None);
    }

    #[test]
    fn test_press_maps_column_proportionally() {
        let mut slider = slider();
        assert_eq!(slider.press(10, 5), Some(0.0));
        assert_eq!(slider.press(15, 5), Some(0.5));
        assert_eq!(slider.press(20, 5), Some(1.0));
        assert!(slider.is_dragging());
    }

    #[test]
    fn test_drag_clamps_to_track() {
        let mut slider = slider();
        slider.press(12, 5);

        assert_eq!(slider.drag(0), Some(0.0));
        assert_eq!(slider.drag(200), Some(1.0));
        assert_eq!(slider.drag(18), Some(0.8));

        slider.release();
        assert_eq!(slider.drag(18), None);
    }

    #[test]
    fn test_degenerate_track() {
        let mut slider = Slider::default();
        slider.set_track(Rect::new(0, 0, 1, 1));
        assert_eq!(slider.press(0, 0), Some(0.0));
    }
}
