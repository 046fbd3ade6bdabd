//! Pointer geometry for the connector line.
//!
//! The session model only ever stores drawing-surface-local coordinates.
//! Translation from page coordinates is owned by the rendering layer through
//! [`CanvasTransform`], so the model stays layout-agnostic.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Maps page coordinates to drawing-surface-local coordinates by subtracting
/// the surface's on-page origin, and back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    pub offset_x: f32,
    pub offset_y: f32,
}

impl CanvasTransform {
    pub fn new(offset_x: f32, offset_y: f32) -> Self {
        Self { offset_x, offset_y }
    }

    pub fn to_local(&self, page: Point) -> Point {
        Point::new(page.x - self.offset_x, page.y - self.offset_y)
    }

    pub fn to_page(&self, local: Point) -> Point {
        Point::new(local.x + self.offset_x, local.y + self.offset_y)
    }
}

/// One frame of connector geometry for the attempt in progress. The path is
/// always computed while an attempt is active; it is only stroked when
/// `visible` is set, i.e. while the pointer is over a right-column target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connector {
    pub from: Point,
    pub to: Point,
    pub visible: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_subtracts_surface_origin() {
        let transform = CanvasTransform::new(400.0, 40.0);
        let local = transform.to_local(Point::new(410.0, 50.0));
        assert_eq!(local, Point::new(10.0, 10.0));
    }

    #[test]
    fn to_page_inverts_to_local() {
        let transform = CanvasTransform::new(32.0, 8.0);
        let page = Point::new(123.5, 67.25);
        assert_eq!(transform.to_page(transform.to_local(page)), page);
    }
}
