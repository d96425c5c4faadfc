//! Records the geometry of a planning run as JSON for an external renderer.

use crate::math::Point2d;
use serde_json::json;

thread_local!(
    static DEBUG_FRAME: std::cell::RefCell<Vec<serde_json::Value>> = Default::default();
);

pub fn debug_line(name: &str, p1: Point2d, p2: Point2d) {
    DEBUG_FRAME.with(|frame| {
        frame.borrow_mut().push(json!({
            "type": "line",
            "name": name,
            "p1": [p1.x, p1.y],
            "p2": [p2.x, p2.y],
        }))
    })
}

pub fn debug_rect(name: &str, origin: Point2d, width: f64, height: f64) {
    DEBUG_FRAME.with(|frame| {
        frame.borrow_mut().push(json!({
            "type": "rect",
            "name": name,
            "origin": [origin.x, origin.y],
            "width": width,
            "height": height,
        }))
    })
}

pub fn debug_point(name: &str, pos: Point2d) {
    DEBUG_FRAME.with(|frame| {
        frame.borrow_mut().push(json!({
            "type": "point",
            "name": name,
            "pos": [pos.x, pos.y],
        }))
    })
}

/// Takes everything recorded on this thread since the last call, as a JSON array.
pub fn take_debug_frame() -> serde_json::Value {
    json!(DEBUG_FRAME.with(|frame| frame.take()))
}
