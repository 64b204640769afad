use super::placement::Placement;

pub const DEFAULT_ALPHA: f64 = 0.6;

/// EMA (Exponential Moving Average) smoother for placement rectangles.
///
/// Formula: `ema[t] = alpha * current + (1 - alpha) * ema[t-1]`
///
/// Opt-in: raw placements jitter with landmark noise, which is acceptable
/// for a try-on preview but distracting at small display sizes. The state
/// must be reset whenever tracking is lost so a reacquired face does not
/// glide in from its last known position.
pub struct PlacementSmoother {
    alpha: f64,
    state: Option<[f64; 4]>,
}

impl PlacementSmoother {
    pub fn new(alpha: f64) -> Self {
        Self { alpha, state: None }
    }

    pub fn smooth(&mut self, placement: Placement) -> Placement {
        let current = [
            placement.left,
            placement.top,
            placement.width,
            placement.height,
        ];

        let smoothed = match self.state {
            None => current,
            Some(prev) => {
                let mut result = [0.0; 4];
                for i in 0..4 {
                    result[i] = self.alpha * current[i] + (1.0 - self.alpha) * prev[i];
                }
                result
            }
        };

        self.state = Some(smoothed);
        Placement {
            left: smoothed[0],
            top: smoothed[1],
            width: smoothed[2],
            height: smoothed[3],
        }
    }

    pub fn reset(&mut self) {
        self.state = None;
    }
}

impl Default for PlacementSmoother {
    fn default() -> Self {
        Self::new(DEFAULT_ALPHA)
    }
}
