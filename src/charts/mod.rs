//! Charts module - Forecast chart rendering

mod plotter;
mod renderer;

pub use plotter::{PlotBackend, PlotChart};
pub use renderer::{ChartBackend, ChartRenderer};

#[cfg(test)]
pub(crate) use renderer::{tests::CountingBackend, LOWER_SERIES, UPPER_SERIES};
