use egui::{Pos2, Rect};

/// Distance from `point` to the closest point of the segment `from`-`to`
pub fn distance_to_segment(point: Pos2, from: Pos2, to: Pos2) -> f32 {
    let along = to - from;
    let length_sq = along.length_sq();
    if length_sq == 0.0 {
        return point.distance(from);
    }
    let t = ((point - from).dot(along) / length_sq).clamp(0.0, 1.0);
    point.distance(from + along * t)
}

/// Box around a segment, grown by `padding` on every side
pub fn segment_bounds(from: Pos2, to: Pos2, padding: f32) -> Rect {
    Rect::from_two_pos(from, to).expand(padding)
}

/// Integer pixel span `[min, max)` of `rect` clipped to a `width`x`height` grid.
/// Returns `None` when nothing of the rect lies on the grid.
pub fn pixel_span(rect: Rect, width: u32, height: u32) -> Option<(u32, u32, u32, u32)> {
    if rect == Rect::NOTHING || width == 0 || height == 0 {
        return None;
    }
    let x0 = rect.min.x.floor().max(0.0);
    let y0 = rect.min.y.floor().max(0.0);
    let x1 = rect.max.x.ceil().min(width as f32);
    let y1 = rect.max.y.ceil().min(height as f32);
    if x0 >= x1 || y0 >= y1 {
        return None;
    }
    Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_distance_to_segment() {
        let a = pos2(0.0, 0.0);
        let b = pos2(10.0, 0.0);
        assert!((distance_to_segment(pos2(5.0, 3.0), a, b) - 3.0).abs() < 1e-5);
        // Beyond the end the distance is measured to the endpoint
        assert!((distance_to_segment(pos2(13.0, 4.0), a, b) - 5.0).abs() < 1e-5);
        // Degenerate segment
        assert!((distance_to_segment(pos2(3.0, 4.0), a, a) - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_pixel_span_clipping() {
        let rect = Rect::from_min_max(pos2(-4.5, 2.2), pos2(8.1, 50.0));
        assert_eq!(pixel_span(rect, 6, 10), Some((0, 2, 6, 10)));

        let outside = Rect::from_min_max(pos2(20.0, 20.0), pos2(30.0, 30.0));
        assert_eq!(pixel_span(outside, 6, 10), None);
        assert_eq!(pixel_span(Rect::NOTHING, 6, 10), None);
    }

    #[test]
    fn test_bounds_padding() {
        let rect = segment_bounds(pos2(20.0, 30.0), pos2(10.0, 10.0), 2.0);
        assert_eq!(rect.min, pos2(8.0, 8.0));
        assert_eq!(rect.max, pos2(22.0, 32.0));
    }
}
