//! Coordinate conversion from window sizes to wry rects.

/// A rect covering the whole client area, in logical coordinates.
pub fn fill_bounds(width: f64, height: f64) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(0.0, 0.0)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(width, height)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_bounds_starts_at_origin() {
        let rect = fill_bounds(900.0, 700.0);

        match rect.position {
            wry::dpi::Position::Logical(pos) => {
                assert!(pos.x.abs() < f64::EPSILON);
                assert!(pos.y.abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical position"),
        }

        match rect.size {
            wry::dpi::Size::Logical(size) => {
                assert!((size.width - 900.0).abs() < f64::EPSILON);
                assert!((size.height - 700.0).abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical size"),
        }
    }

    #[test]
    fn fill_bounds_zero() {
        let rect = fill_bounds(0.0, 0.0);
        match rect.size {
            wry::dpi::Size::Logical(size) => {
                assert_eq!(size.width, 0.0);
                assert_eq!(size.height, 0.0);
            }
            _ => panic!("Expected logical size"),
        }
    }
}
