//! Afterglow bookkeeping for radar blips between scans.
use beautiful_random::radar::PointOfInterest;

/// Dim every blip by `decay`, drop those at or below `floor`, and keep the newest `max`.
pub fn fade_blips(blips: &mut Vec<PointOfInterest>, decay: f64, floor: f64, max: usize) {
    for p in blips.iter_mut() {
        p.intensity *= decay;
    }
    blips.retain(|p| p.intensity > floor);
    if blips.len() > max {
        blips.drain(..blips.len() - max);
    }
}
