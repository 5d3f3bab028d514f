use anyhow::{Context, Result, bail, ensure};
use log::warn;

use crate::entities::{ElementSpec, FenceInstance, MIN_PLANNABLE_POINTS, Polyline};
use crate::geometry::primitives::Point;
use crate::io::ext_repr::{ExtElement, ExtFence, ExtSurface};
use crate::surface::{FlatSurface, HeightField, HeightQuery, NoSurface};

/// Converts an [`ExtFence`] into a [`FenceInstance`], validating every part of it.
pub fn import_fence(ext_fence: &ExtFence) -> Result<FenceInstance> {
    let polyline = import_polyline(&ext_fence.points, ext_fence.closed)?;
    let element = import_element(&ext_fence.element).context("invalid element")?;
    let surface = import_surface(&ext_fence.surface).context("invalid surface")?;

    Ok(FenceInstance {
        name: ext_fence
            .name
            .clone()
            .unwrap_or_else(|| "fence".to_string()),
        polyline,
        element,
        surface,
    })
}

pub fn import_polyline(points: &[[f64; 3]], closed: bool) -> Result<Polyline> {
    if let Some((i, p)) = points
        .iter()
        .enumerate()
        .find(|(_, p)| p.iter().any(|c| !c.is_finite()))
    {
        bail!("anchor point {i} is not finite: {p:?}");
    }
    if points.len() < MIN_PLANNABLE_POINTS {
        warn!(
            "[IMPORT] only {} anchor point(s), no elements will be placed",
            points.len()
        );
    }
    Ok(Polyline::new(
        points.iter().copied().map(Point::from).collect(),
        closed,
    ))
}

pub fn import_element(ext_element: &ExtElement) -> Result<ElementSpec> {
    let length = match (ext_element.length, ext_element.bounds) {
        (Some(length), None) => length,
        (None, Some([min, max])) => ElementSpec::from_bounds(min.into(), max.into()).length,
        (Some(length), Some(_)) => {
            warn!("[IMPORT] element has both a length and bounds, using the length");
            length
        }
        (None, None) => bail!("element needs either a length or bounds"),
    };
    let element = ElementSpec {
        length,
        name: ext_element.name.clone(),
    };
    element.validate()?;
    Ok(element)
}

pub fn import_surface(ext_surface: &ExtSurface) -> Result<Box<dyn HeightQuery>> {
    let surface: Box<dyn HeightQuery> = match ext_surface {
        ExtSurface::None => Box::new(NoSurface),
        ExtSurface::Flat { height } => {
            ensure!(height.is_finite(), "flat surface height must be finite");
            Box::new(FlatSurface { height: *height })
        }
        ExtSurface::HeightField {
            origin,
            cell_size,
            resolution,
            heights,
        } => Box::new(HeightField::new(
            *origin,
            *cell_size,
            *resolution,
            heights.clone(),
        )?),
    };
    Ok(surface)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(length: Option<f64>, bounds: Option<[[f64; 3]; 2]>) -> ExtElement {
        ExtElement {
            length,
            bounds,
            name: None,
        }
    }

    #[test]
    fn element_from_bounds() {
        let e = import_element(&element(None, Some([[-1.0, 0.0, 0.0], [2.0, 1.0, 0.2]]))).unwrap();
        assert_eq!(e.length, 3.0);
    }

    #[test]
    fn length_wins_over_bounds() {
        let e = import_element(&element(Some(1.5), Some([[0.0; 3], [4.0, 1.0, 1.0]]))).unwrap();
        assert_eq!(e.length, 1.5);
    }

    #[test]
    fn invalid_elements_are_rejected() {
        assert!(import_element(&element(None, None)).is_err());
        assert!(import_element(&element(Some(-1.0), None)).is_err());
        assert!(import_element(&element(None, Some([[1.0, 0.0, 0.0], [1.0, 2.0, 2.0]]))).is_err());
    }

    #[test]
    fn non_finite_points_are_rejected() {
        assert!(import_polyline(&[[0.0; 3], [f64::NAN, 0.0, 0.0]], false).is_err());
        assert_eq!(import_polyline(&[[0.0; 3]], true).unwrap().n_points(), 1);
    }

    #[test]
    fn surfaces() {
        let flat = import_surface(&ExtSurface::Flat { height: 2.0 }).unwrap();
        assert_eq!(flat.query(10.0, -3.0), Some(2.0));
        let none = import_surface(&ExtSurface::None).unwrap();
        assert_eq!(none.query(0.0, 0.0), None);
        let broken = ExtSurface::HeightField {
            origin: (0.0, 0.0),
            cell_size: 1.0,
            resolution: (2, 2),
            heights: vec![0.0; 3],
        };
        assert!(import_surface(&broken).is_err());
        let oversized = ExtSurface::HeightField {
            origin: (0.0, 0.0),
            cell_size: 1.0,
            resolution: (usize::MAX / 2, 3),
            heights: vec![],
        };
        assert!(import_surface(&oversized).is_err());
    }
}
