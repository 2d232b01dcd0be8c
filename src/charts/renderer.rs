//! Forecast Chart Renderer
//! Turns forecast points into chart series and owns the single live chart.
//!
//! Series layout (all aligned on the forecast dates):
//! 1. "Forecast": predicted spend, drawn as a line
//! 2. "Uncertainty Range": upper bound, filled down to the next series
//! 3. "Lower Bound": lower bound, drawn invisibly as the band's lower edge

use crate::data::ForecastPoint;
use tracing::debug;

pub const FORECAST_SERIES: &str = "Forecast";
pub const UPPER_SERIES: &str = "Uncertainty Range";
pub const LOWER_SERIES: &str = "Lower Bound";

/// How a series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesStyle {
    Line,
    /// Filled band from this series down to the one after it.
    BandToNext,
    /// No line, no points, not in the legend.
    Hidden,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: &'static str,
    pub values: Vec<f64>,
    pub style: SeriesStyle,
}

/// Everything needed to build one forecast chart.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ForecastChartSpec {
    pub dates: Vec<String>,
    pub series: Vec<Series>,
}

impl ForecastChartSpec {
    pub fn from_points(points: &[ForecastPoint]) -> Self {
        Self {
            dates: points.iter().map(|p| p.date.clone()).collect(),
            series: vec![
                Series {
                    label: FORECAST_SERIES,
                    values: points.iter().map(|p| p.predicted).collect(),
                    style: SeriesStyle::Line,
                },
                Series {
                    label: UPPER_SERIES,
                    values: points.iter().map(|p| p.upper_bound).collect(),
                    style: SeriesStyle::BandToNext,
                },
                Series {
                    label: LOWER_SERIES,
                    values: points.iter().map(|p| p.lower_bound).collect(),
                    style: SeriesStyle::Hidden,
                },
            ],
        }
    }

    #[cfg(test)]
    pub fn series(&self, label: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.label == label)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// Creates and disposes chart instances.
pub trait ChartBackend {
    type Instance;

    fn create(&mut self, spec: ForecastChartSpec) -> Self::Instance;

    /// Release an instance. Must be finished before the next `create`.
    fn dispose(&mut self, instance: Self::Instance);
}

/// Owner of at most one live chart instance.
pub struct ChartRenderer<B: ChartBackend> {
    backend: B,
    live: Option<B::Instance>,
}

impl<B: ChartBackend> ChartRenderer<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            live: None,
        }
    }

    /// Replace the live chart with one built from `points`.
    pub fn render(&mut self, points: &[ForecastPoint]) {
        self.dispose();
        let spec = ForecastChartSpec::from_points(points);
        debug!(points = spec.len(), "Creating forecast chart");
        self.live = Some(self.backend.create(spec));
    }

    pub fn dispose(&mut self) {
        if let Some(instance) = self.live.take() {
            debug!("Disposing forecast chart");
            self.backend.dispose(instance);
        }
    }

    pub fn instance(&self) -> Option<&B::Instance> {
        self.live.as_ref()
    }

    #[cfg(test)]
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Backend that only counts instances.
    #[derive(Default)]
    pub(crate) struct CountingBackend {
        pub created: usize,
        pub disposed: usize,
        /// Live count seen at each `create`, before the new instance exists.
        pub live_at_create: Vec<usize>,
    }

    impl CountingBackend {
        pub fn live(&self) -> usize {
            self.created - self.disposed
        }
    }

    impl ChartBackend for CountingBackend {
        type Instance = ForecastChartSpec;

        fn create(&mut self, spec: ForecastChartSpec) -> Self::Instance {
            self.live_at_create.push(self.live());
            self.created += 1;
            spec
        }

        fn dispose(&mut self, _instance: Self::Instance) {
            self.disposed += 1;
        }
    }

    fn point(date: &str, predicted: f64, lower: f64, upper: f64) -> ForecastPoint {
        ForecastPoint {
            date: date.to_string(),
            predicted,
            lower_bound: lower,
            upper_bound: upper,
        }
    }

    #[test]
    fn builds_three_aligned_series() {
        let spec = ForecastChartSpec::from_points(&[
            point("2024-01-01", 100.0, 80.0, 120.0),
            point("2024-01-02", 110.0, 85.0, 130.0),
        ]);

        assert_eq!(spec.dates, vec!["2024-01-01", "2024-01-02"]);
        assert_eq!(spec.series(FORECAST_SERIES).unwrap().values, vec![100.0, 110.0]);
        assert_eq!(spec.series(UPPER_SERIES).unwrap().values, vec![120.0, 130.0]);
        assert_eq!(spec.series(LOWER_SERIES).unwrap().values, vec![80.0, 85.0]);

        let styles: Vec<SeriesStyle> = spec.series.iter().map(|s| s.style).collect();
        assert_eq!(
            styles,
            vec![SeriesStyle::Line, SeriesStyle::BandToNext, SeriesStyle::Hidden]
        );
    }

    #[test]
    fn empty_input_renders_empty_chart() {
        let mut renderer = ChartRenderer::new(CountingBackend::default());
        renderer.render(&[]);

        let chart = renderer.instance().unwrap();
        assert!(chart.is_empty());
        assert!(chart.series.iter().all(|s| s.values.is_empty()));
    }

    #[test]
    fn repeated_renders_keep_one_live_instance() {
        let mut renderer = ChartRenderer::new(CountingBackend::default());
        for day in 1..=5 {
            renderer.render(&[point(&format!("2024-01-0{}", day), day as f64, 0.0, 10.0)]);
            assert_eq!(renderer.backend().live(), 1);
        }

        // The previous chart is gone before each new one is built.
        assert_eq!(renderer.backend().live_at_create, vec![0; 5]);
        assert_eq!(renderer.instance().unwrap().dates, vec!["2024-01-05"]);
    }

    #[test]
    fn dispose_releases_live_instance() {
        let mut renderer = ChartRenderer::new(CountingBackend::default());
        renderer.render(&[point("2024-01-01", 1.0, 0.0, 2.0)]);
        renderer.dispose();
        renderer.dispose();

        assert!(renderer.instance().is_none());
        assert_eq!(renderer.backend().live(), 0);
        assert_eq!(renderer.backend().disposed, 1);
    }
}
