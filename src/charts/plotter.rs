//! Chart Plotter Module
//! egui_plot backend for the forecast chart.

use super::renderer::{ChartBackend, ForecastChartSpec, Series, SeriesStyle};
use egui::{Color32, Stroke};
use egui_plot::{Legend, Line, Plot, PlotPoints, Polygon};
use tracing::debug;

pub const FORECAST_COLOR: Color32 = Color32::from_rgb(10, 147, 150); // Greenish-blue
pub const BAND_FILL: Color32 = Color32::from_rgba_premultiplied(1, 15, 15, 26); // 10% of forecast color

const CHART_HEIGHT: f32 = 360.0;

/// One drawable forecast chart.
///
/// The generation is part of the plot id, so each new chart starts with
/// fresh zoom and pan state.
pub struct PlotChart {
    generation: u64,
    spec: ForecastChartSpec,
}

/// Creates [`PlotChart`] instances.
#[derive(Default)]
pub struct PlotBackend {
    next_generation: u64,
}

impl ChartBackend for PlotBackend {
    type Instance = PlotChart;

    fn create(&mut self, spec: ForecastChartSpec) -> PlotChart {
        let generation = self.next_generation;
        self.next_generation += 1;
        PlotChart { generation, spec }
    }

    fn dispose(&mut self, instance: PlotChart) {
        debug!(generation = instance.generation, "Dropping plot");
        drop(instance);
    }
}

impl PlotChart {
    /// Draw the chart: x axis is the date index, labelled with the dates.
    pub fn show(&self, ui: &mut egui::Ui) {
        let labels = self.spec.dates.clone();

        Plot::new(("forecast_chart", self.generation))
            .height(CHART_HEIGHT)
            .legend(Legend::default())
            .include_y(0.0)
            .allow_scroll(false)
            .x_axis_label("Date")
            .y_axis_label("Predicted Spend ($)")
            .x_axis_formatter(move |mark, _range| {
                let value = mark.value;
                if value < 0.0 || (value - value.round()).abs() > 1e-6 {
                    return String::new();
                }
                labels.get(value.round() as usize).cloned().unwrap_or_default()
            })
            .show(ui, |plot_ui| {
                for (i, series) in self.spec.series.iter().enumerate() {
                    if series.values.is_empty() {
                        continue;
                    }
                    match series.style {
                        SeriesStyle::Line => {
                            plot_ui.line(
                                Line::new(Self::points(series))
                                    .color(FORECAST_COLOR)
                                    .width(3.0)
                                    .name(series.label),
                            );
                        }
                        SeriesStyle::BandToNext => {
                            let Some(next) = self.spec.series.get(i + 1) else {
                                continue;
                            };
                            // Polygon fills convex shapes only, so the band goes
                            // out as one quad per day. Only the first is named.
                            for (n, quad) in Self::band(series, next).into_iter().enumerate() {
                                let polygon = Polygon::new(PlotPoints::from(quad.to_vec()))
                                    .fill_color(BAND_FILL)
                                    .stroke(Stroke::NONE);
                                plot_ui.polygon(if n == 0 {
                                    polygon.name(series.label)
                                } else {
                                    polygon
                                });
                            }
                        }
                        SeriesStyle::Hidden => {
                            // Unnamed, so it stays out of the legend.
                            plot_ui.line(
                                Line::new(Self::points(series))
                                    .color(Color32::TRANSPARENT)
                                    .width(0.0),
                            );
                        }
                    }
                }
            });
    }

    fn points(series: &Series) -> PlotPoints {
        series
            .values
            .iter()
            .enumerate()
            .map(|(i, &y)| [i as f64, y])
            .collect()
    }

    /// Band between two series as quads over each pair of adjacent dates.
    ///
    /// Each quad runs upper edge forward then lower edge back, and is convex
    /// as long as upper >= lower at both ends.
    fn band(upper: &Series, lower: &Series) -> Vec<[[f64; 2]; 4]> {
        let edges: Vec<(f64, f64)> = upper
            .values
            .iter()
            .zip(&lower.values)
            .map(|(&u, &l)| (u, l))
            .collect();

        edges
            .windows(2)
            .enumerate()
            .map(|(i, pair)| {
                let (x0, x1) = (i as f64, (i + 1) as f64);
                let ((u0, l0), (u1, l1)) = (pair[0], pair[1]);
                [[x0, u0], [x1, u1], [x1, l1], [x0, l0]]
            })
            .collect()
    }
}
