//! Pointer coordinate reading.
//!
//! Centralizes how an event turns into a pointer position so the start
//! and move paths can't disagree.

use crate::geometry::Point;
use crate::input::event::PointerEvent;

/// Host override mapping an event to coordinates (e.g. canvas space)
pub type PointerReader = Box<dyn Fn(&PointerEvent) -> Point>;

/// Read the pointer position of an event.
///
/// Uses the host override when configured, else the raw client coordinates.
#[inline]
pub fn read_pointer(event: &PointerEvent, reader: Option<&PointerReader>) -> Point {
    match reader {
        Some(read) => read(event),
        None => event.client,
    }
}

/// Parse a CSS length the way `parseFloat` does: the longest leading
/// numeric prefix, ignoring leading whitespace and any unit suffix.
///
/// A leading `Infinity` (optionally signed) parses as infinite. Returns
/// `None` when no number starts the string.
pub fn parse_css_number(value: &str) -> Option<f32> {
    let s = value.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        return Some(if bytes.first() == Some(&b'-') {
            f32::NEG_INFINITY
        } else {
            f32::INFINITY
        });
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if frac_end > frac_start || digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    // Exponent only counts when followed by at least one digit
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}
