//! Snapshot helpers: the fake screen as plain text.

use crate::native::{keys, PropValue, PropertyBag};

use super::fake::FakeSurface;

/// Geometry keys, printed first and in this order.
const GEOMETRY: [&str; 4] = [keys::X, keys::Y, keys::W, keys::H];

/// Render every live widget of `surface` as one line, in handle order.
///
/// Each line is `#<handle> <kind>` followed by `key=value` pairs: geometry
/// first, then the remaining properties in key order. Lines are joined with
/// `'\n'`; an empty screen gives an empty string.
pub fn surface_to_string(surface: &FakeSurface) -> String {
    surface
        .live()
        .map(|(handle, widget)| {
            let mut line = format!("#{} {}", handle.0, widget.kind.name());
            let props = props_to_string(&widget.props);
            if !props.is_empty() {
                line.push(' ');
                line.push_str(&props);
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a property bag as space-separated `key=value` pairs.
pub fn props_to_string(props: &PropertyBag) -> String {
    let geometry = GEOMETRY
        .iter()
        .filter_map(|key| props.get(key).map(|v| (*key, v)));
    let rest = props
        .iter()
        .filter(|(key, _)| !GEOMETRY.contains(&key.as_str()))
        .map(|(key, v)| (key.as_str(), v));

    geometry
        .chain(rest)
        .map(|(key, value)| format!("{key}={}", value_to_string(value)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn value_to_string(value: &PropValue) -> String {
    match value {
        PropValue::Int(v) => v.to_string(),
        PropValue::Float(v) => v.to_string(),
        PropValue::Bool(v) => v.to_string(),
        PropValue::Text(v) => format!("{v:?}"),
        PropValue::Color(v) => v.to_string(),
        PropValue::Align(v) => format!("{v:?}").to_lowercase(),
        PropValue::TextStyle(v) => format!("{v:?}").to_lowercase(),
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::native::{Align, NativeKind, NativeSurface};

    #[test]
    fn empty_surface() {
        assert_eq!(surface_to_string(&FakeSurface::new(10.0, 10.0)), "");
    }

    #[test]
    fn geometry_comes_first() {
        let bag = PropertyBag::new()
            .with(keys::COLOR, Color(0x00ff00))
            .with(keys::H, 4)
            .with(keys::X, 1)
            .with(keys::TEXT, "hi")
            .with(keys::ALIGN_H, Align::Center);
        assert_eq!(
            props_to_string(&bag),
            "x=1 h=4 align_h=center color=0x00ff00 text=\"hi\""
        );
    }

    #[test]
    fn one_line_per_widget() {
        let mut s = FakeSurface::new(10.0, 10.0);
        s.create_widget(NativeKind::Circle, &PropertyBag::new().with(keys::RADIUS, 3.5_f32))
            .unwrap();
        s.create_widget(NativeKind::FillRect, &PropertyBag::new()).unwrap();
        assert_eq!(surface_to_string(&s), "#1 circle radius=3.5\n#2 fill_rect");
    }
}
