use svg::Document;
use svg::node::element::{Group, Rectangle, Text, Title};

use crate::entities::{ElementSpec, FenceLayout, Polyline};
use crate::geometry::HeadingReference;
use crate::geometry::primitives::Edge;
use crate::io::svg::svg_util;
use crate::io::svg::svg_util::SvgDrawOptions;

/// Draws the polyline and the elements placed along it, seen from above
pub fn layout_to_svg(
    layout: &FenceLayout,
    polyline: &Polyline,
    element: &ElementSpec,
    reference: &HeadingReference,
    options: SvgDrawOptions,
    title: &str,
) -> Document {
    let theme = &options.theme;

    let (x_min, y_min, x_max, y_max) = polyline
        .points
        .iter()
        .map(|p| svg_util::project(*p))
        .fold(None, |bbox: Option<(f32, f32, f32, f32)>, (x, y)| match bbox {
            None => Some((x, y, x, y)),
            Some((x0, y0, x1, y1)) => Some((x0.min(x), y0.min(y), x1.max(x), y1.max(y))),
        })
        .unwrap_or((0.0, 0.0, 1.0, 1.0));

    //pad the view box by 10% on every side, and never let it collapse
    let (width, height) = ((x_max - x_min).max(1.0), (y_max - y_min).max(1.0));
    let margin = 0.1 * f32::max(width, height);
    let vbox = (
        x_min - margin,
        y_min - margin,
        width + 2.0 * margin,
        height + 2.0 * margin,
    );

    let stroke_width = f32::min(vbox.2, vbox.3) * 0.001 * theme.stroke_width_multiplier;

    let label = {
        let label_content = format!(
            "anchors: {} | elements: {} | uncovered: {:.3} | height misses: {} | {}",
            polyline.n_points(),
            layout.n_placements(),
            layout.total_remainder(),
            layout.n_height_misses,
            title,
        );
        Text::new(label_content)
            .set("x", vbox.0)
            .set("y", vbox.1 + 0.5 * margin)
            .set("font-size", f32::min(vbox.2, vbox.3) * 0.025)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    let background = Rectangle::new()
        .set("x", vbox.0)
        .set("y", vbox.1)
        .set("width", vbox.2)
        .set("height", vbox.3)
        .set("fill", format!("{}", theme.background_fill));

    //the polyline as drawn, including the parts no element covers
    let polyline_group = Group::new().set("id", "polyline").add(svg_util::data_to_path(
        svg_util::polyline_data(&polyline.points, polyline.is_closed),
        &[
            ("fill", "none"),
            ("stroke", &*format!("{}", theme.polyline_stroke)),
            ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
            (
                "stroke-dasharray",
                &*format!("{} {}", 4.0 * stroke_width, 4.0 * stroke_width),
            ),
            ("stroke-linecap", "round"),
            ("stroke-linejoin", "round"),
        ],
    ));

    let elements_group = layout.placements.iter().enumerate().fold(
        Group::new().set("id", "elements"),
        |group, (i, placement)| {
            let forward = placement.rotation(reference).forward();
            let span = Edge::new(
                placement.position,
                placement.position + forward * element.length,
            );
            let title = Title::new(format!(
                "{}, {}",
                element.label(placement.element_index),
                placement
            ));
            let element_group = Group::new()
                .set("id", format!("element_{i}"))
                .add(svg_util::data_to_path(
                    svg_util::edge_data(span),
                    &[
                        ("stroke", &*format!("{}", theme.element_stroke)),
                        ("stroke-width", &*format!("{}", 4.0 * stroke_width)),
                        ("stroke-linecap", "butt"),
                    ],
                ))
                .add(title);
            let element_group = match options.element_ends {
                true => element_group.add(svg_util::point(
                    placement.position,
                    Some(&*format!("{}", theme.element_stroke)),
                    Some(3.0 * stroke_width),
                )),
                false => element_group,
            };
            group.add(element_group)
        },
    );

    let anchors_group = polyline.points.iter().enumerate().fold(
        Group::new().set("id", "anchors"),
        |group, (i, p)| {
            let fill = match i {
                0 => theme.first_anchor_fill,
                _ => theme.anchor_fill,
            };
            let group = group.add(svg_util::point(
                *p,
                Some(&*format!("{fill}")),
                Some(5.0 * stroke_width),
            ));
            match options.anchor_labels {
                false => group,
                true => {
                    let (x, y) = svg_util::project(*p);
                    group.add(
                        Text::new(format!("{i}"))
                            .set("x", x + 6.0 * stroke_width)
                            .set("y", y - 6.0 * stroke_width)
                            .set("font-size", 20.0 * stroke_width)
                            .set("font-family", "monospace"),
                    )
                }
            }
        },
    );

    Document::new()
        .set("viewBox", vbox)
        .set("xmlns:xlink", "http://www.w3.org/1999/xlink")
        .add(background)
        .add(polyline_group)
        .add(elements_group)
        .add(anchors_group)
        .add(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::Planner;
    use crate::surface::FlatSurface;

    #[test]
    fn draws_every_element_and_anchor() {
        let polyline = Polyline::closed([(0.0, 0.0, 0.0), (5.0, 0.0, 0.0), (5.0, 0.0, 5.0)]);
        let element = ElementSpec::named(1.0, "Panel");
        let layout = Planner::default()
            .plan_layout(&polyline, &element, &FlatSurface { height: 0.0 })
            .unwrap();

        let svg = layout_to_svg(
            &layout,
            &polyline,
            &element,
            &HeadingReference::default(),
            SvgDrawOptions::default(),
            "triangle",
        )
        .to_string();

        assert_eq!(svg.matches("id=\"element_").count(), layout.n_placements());
        assert!(svg.contains("Panel (0)"));
        assert!(svg.contains("triangle"));
    }
}
