use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use svg::node::element::path::Data;
use svg::node::element::{Circle, Path};

use crate::geometry::primitives::{Edge, Point};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgLayoutTheme,
    ///Mark the start of every element with a small dot
    #[serde(default = "default_true")]
    pub element_ends: bool,
    ///Write the index next to every anchor point
    #[serde(default)]
    pub anchor_labels: bool,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutTheme::default(),
            element_ends: true,
            anchor_labels: false,
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgLayoutTheme {
    pub stroke_width_multiplier: f32,
    pub background_fill: Color,
    pub polyline_stroke: Color,
    pub element_stroke: Color,
    pub anchor_fill: Color,
    pub first_anchor_fill: Color,
}

impl Default for SvgLayoutTheme {
    fn default() -> Self {
        SvgLayoutTheme::EARTH_TONES
    }
}

impl SvgLayoutTheme {
    pub const EARTH_TONES: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.0,
        background_fill: Color(0xF2, 0xE6, 0xD0),
        polyline_stroke: Color(0xCC, 0x82, 0x4A),
        element_stroke: Color(0x6B, 0x3E, 0x1F),
        anchor_fill: Color(0x2D, 0x2D, 0x2D),
        first_anchor_fill: Color(0x00, 0xA0, 0x00),
    };

    pub const GRAY: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.5,
        background_fill: Color(0xFF, 0xFF, 0xFF),
        polyline_stroke: Color(0xD3, 0xD3, 0xD3),
        element_stroke: Color(0x63, 0x63, 0x63),
        anchor_fill: Color(0x7A, 0x7A, 0x7A),
        first_anchor_fill: Color(0x00, 0x00, 0x00),
    };
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl TryFrom<&str> for Color {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        let channel = |i: usize| {
            hex.get(i..i + 2)
                .and_then(|c| u8::from_str_radix(c, 16).ok())
                .ok_or_else(|| format!("invalid color: {s}"))
        };
        match hex.len() {
            6 => Ok(Color(channel(0)?, channel(2)?, channel(4)?)),
            _ => Err(format!("invalid color: {s}")),
        }
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<<S as Serializer>::Ok, <S as Serializer>::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as Deserializer<'de>>::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::try_from(s.as_str()).map_err(serde::de::Error::custom)
    }
}

/// Top-down projection: world x becomes svg x, world z becomes svg y
pub fn project(p: Point) -> (f32, f32) {
    (p.0 as f32, p.2 as f32)
}

pub fn polyline_data(points: &[Point], closed: bool) -> Data {
    let Some((first, rest)) = points.split_first() else {
        return Data::new();
    };
    let data = rest
        .iter()
        .fold(Data::new().move_to(project(*first)), |data, p| {
            data.line_to(project(*p))
        });
    match closed {
        true => data.close(),
        false => data,
    }
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}

pub fn point(p: Point, fill: Option<&str>, rad: Option<f32>) -> Circle {
    let (x, y) = project(p);
    Circle::new()
        .set("cx", x)
        .set("cy", y)
        .set("r", rad.unwrap_or(0.5))
        .set("fill", fill.unwrap_or("black"))
}

pub fn edge_data(edge: Edge) -> Data {
    Data::new()
        .move_to(project(edge.start))
        .line_to(project(edge.end))
}
