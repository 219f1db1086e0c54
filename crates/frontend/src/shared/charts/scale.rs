//! Linear value axis with "nice" rounded ticks

/// Number of ticks on every value axis
pub const TICK_COUNT: usize = 5;

/// Smallest of 1, 2, 2.5, 5, 10 times a power of ten that is >= `raw`
pub fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 2.5 {
        2.5
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Axis {
    /// Axis covering every value and zero. `None` when there is nothing finite.
    pub fn for_values<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let (lo, hi) = values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })?;

        let lo = lo.min(0.0);
        let hi = hi.max(0.0);
        let intervals = (TICK_COUNT - 1) as f64;

        let mut step = nice_step((hi - lo) / intervals);
        let mut min = (lo / step).floor() * step;
        // floor() can push the start down far enough that the top no longer fits
        while min + step * intervals < hi {
            step = nice_step(step * 1.001);
            min = (lo / step).floor() * step;
        }

        Some(Self {
            min,
            max: min + step * intervals,
            step,
        })
    }

    pub fn ticks(&self) -> Vec<f64> {
        (0..TICK_COUNT)
            .map(|i| self.min + self.step * i as f64)
            .collect()
    }

    /// Position of `value` inside the axis, 0.0 at `min` and 1.0 at `max`
    pub fn fraction(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        (value - self.min) / span
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_step() {
        assert_eq!(nice_step(50.0), 50.0);
        assert_eq!(nice_step(308.5), 500.0);
        assert_eq!(nice_step(0.7), 1.0);
        assert_eq!(nice_step(1.2), 2.0);
        assert_eq!(nice_step(22.0), 25.0);
        assert_eq!(nice_step(0.0), 1.0);
        assert_eq!(nice_step(f64::NAN), 1.0);
    }

    #[test]
    fn test_axis_starts_at_zero() {
        let axis = Axis::for_values([100.0, 200.0]).unwrap();
        assert_eq!(axis.ticks(), vec![0.0, 50.0, 100.0, 150.0, 200.0]);
        assert_eq!(axis.fraction(100.0), 0.5);
    }

    #[test]
    fn test_axis_rounds_top_up() {
        let axis = Axis::for_values([1234.0, 10.0]).unwrap();
        assert_eq!(axis.min, 0.0);
        assert_eq!(axis.max, 2000.0);
        assert!(axis.max >= 1234.0);
    }

    #[test]
    fn test_axis_with_negative_values() {
        let axis = Axis::for_values([-30.0, 90.0]).unwrap();
        assert!(axis.min <= -30.0);
        assert!(axis.max >= 90.0);
        assert_eq!(axis.ticks().len(), TICK_COUNT);
    }

    #[test]
    fn test_axis_all_zero() {
        let axis = Axis::for_values([0.0, 0.0]).unwrap();
        assert_eq!(axis.min, 0.0);
        assert_eq!(axis.max, 4.0);
        assert_eq!(axis.fraction(0.0), 0.0);
    }

    #[test]
    fn test_axis_without_values() {
        assert!(Axis::for_values(Vec::<f64>::new()).is_none());
        assert!(Axis::for_values([f64::NAN]).is_none());
    }
}
