use alttext_core::{CaptureError, PixelBuffer, PixelCapture};
use alttext_types::ScreenRect;
use anyhow::{Context, Result};
use xcap::Monitor;

/// Captures screen regions from whichever monitor contains them
#[derive(Debug, Default, Clone, Copy)]
pub struct ScreenCapture;

impl ScreenCapture {
    pub fn new() -> Self {
        ScreenCapture
    }
}

impl PixelCapture for ScreenCapture {
    fn capture(&self, region: ScreenRect) -> Result<PixelBuffer, CaptureError> {
        let monitors = Monitor::all().map_err(|e| CaptureError::Backend(e.to_string()))?;

        let monitor = monitors
            .iter()
            .find(|m| contains((m.x(), m.y(), m.width(), m.height()), region))
            .ok_or(CaptureError::OffScreen(region))?;

        let image = monitor
            .capture_image()
            .map_err(|e| CaptureError::Backend(e.to_string()))?;

        let cropped = xcap::image::imageops::crop_imm(
            &image,
            (region.x - monitor.x()) as u32,
            (region.y - monitor.y()) as u32,
            region.width,
            region.height,
        )
        .to_image();

        tracing::debug!("Captured {}x{} at ({}, {})", cropped.width(), cropped.height(), region.x, region.y);
        PixelBuffer::from_rgba(cropped.width(), cropped.height(), cropped.into_raw())
    }
}

/// Whether `region` lies inside the monitor bounds `(x, y, width, height)`.
///
/// Computed in i64 so profile-supplied extents cannot overflow.
fn contains(monitor: (i32, i32, u32, u32), region: ScreenRect) -> bool {
    let (mx, my, mw, mh) = monitor;
    let (mx, my) = (i64::from(mx), i64::from(my));
    let (rx, ry) = (i64::from(region.x), i64::from(region.y));

    rx >= mx
        && ry >= my
        && rx + i64::from(region.width) <= mx + i64::from(mw)
        && ry + i64::from(region.height) <= my + i64::from(mh)
}

/// Bounds of the primary monitor, used when no region is configured
pub fn primary_monitor_rect() -> Result<ScreenRect> {
    let monitors = Monitor::all().context("Failed to get monitors")?;
    let monitor = monitors
        .iter()
        .find(|m| m.is_primary())
        .or(monitors.first())
        .context("No monitor found")?;

    Ok(ScreenRect::new(monitor.x(), monitor.y(), monitor.width(), monitor.height()))
}
