use std::sync::LazyLock;
use std::time::Instant;

use anyhow::Result;
use fencer::entities::{FenceInstance, Polyline};
use fencer::session::FenceSession;
use fencer::util::SessionConfig;
use log::info;

pub mod config;
pub mod io;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Draws the instance's polyline again, point by point, through a [`FenceSession`].
/// Every anchor is treated as a pointer position, so snapping applies.
pub fn replay_through_session(instance: &FenceInstance, config: SessionConfig) -> Result<Polyline> {
    let mut session = FenceSession::new(instance.element.clone(), config);
    session.begin_edit()?;
    for p in &instance.polyline.points {
        session.add_pointer_point(*p)?;
    }
    let polyline = match instance.polyline.is_closed {
        true => session.close_as_polygon()?,
        false => session.finish_open()?,
    };
    info!(
        "[SESSION] replayed {} anchor point(s) through the editing session",
        polyline.n_points()
    );
    Ok(polyline.clone())
}
