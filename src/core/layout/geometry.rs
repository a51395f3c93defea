//! Pointer geometry for the layout controller. All values are CSS pixels.

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset_from(self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }
}

/// A column's bounding box as reported by the browser.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }
}

/// Measurements that change with the page and are read on every move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    pub container_width: f64,
    /// Size of one grid unit, the document's root font size.
    pub root_font_px: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitZone {
    ResizeHandle,
    Body,
}

/// Resize wins when the column is too narrow to hold both zones.
pub fn classify_hit(rect: &Rect, pointer_x: f64, margin: f64) -> HitZone {
    if rect.width < margin * 2.0 || pointer_x > rect.right() - margin {
        HitZone::ResizeHandle
    } else {
        HitZone::Body
    }
}

/// How many column slots a horizontal drag covers, using the average column
/// width of the container.
pub fn drag_shift(delta_x: f64, container_width: f64, column_count: usize) -> i64 {
    if column_count == 0 || container_width <= 0.0 || !delta_x.is_finite() {
        return 0;
    }
    let column_width = container_width / column_count as f64;
    (delta_x / column_width).round() as i64
}

/// `current + shift`, clamped to a valid index.
pub fn shifted_index(current: usize, shift: i64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let last = (len - 1) as i64;
    (current as i64).saturating_add(shift).clamp(0, last) as usize
}

/// Whole grid units covered by `delta_x`. Zero until a full unit is crossed.
pub fn resize_steps(delta_x: f64, unit_px: f64) -> i64 {
    if unit_px <= 0.0 || !delta_x.is_finite() {
        return 0;
    }
    (delta_x / unit_px).trunc() as i64
}
