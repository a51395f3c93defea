use crate::core::layout::{Point, Rect};

pub fn element_rect(element: &web_sys::Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

pub fn pointer(ev: &web_sys::MouseEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

// Grid unit: computed font size of <html>, e.g. "16px"
pub fn root_font_px(fallback: f64) -> f64 {
    let Some(window) = web_sys::window() else {
        return fallback;
    };
    let Some(root) = window.document().and_then(|d| d.document_element()) else {
        return fallback;
    };
    match window.get_computed_style(&root) {
        Ok(Some(style)) => style
            .get_property_value("font-size")
            .ok()
            .and_then(|size| parse_px(&size))
            .unwrap_or(fallback),
        _ => fallback,
    }
}

fn parse_px(value: &str) -> Option<f64> {
    value
        .trim()
        .trim_end_matches("px")
        .parse::<f64>()
        .ok()
        .filter(|px| px.is_finite() && *px > 0.0)
}

#[cfg(test)]
mod tests {
    use super::parse_px;

    #[test]
    fn parses_computed_font_size() {
        assert_eq!(parse_px("16px"), Some(16.0));
        assert_eq!(parse_px(" 18.5px "), Some(18.5));
        assert_eq!(parse_px(""), None);
        assert_eq!(parse_px("0px"), None);
        assert_eq!(parse_px("large"), None);
    }
}
