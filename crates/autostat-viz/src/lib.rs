//! SVG charts for the automobile analysis
//!
//! Each chart takes a table, the columns to plot and a title, and returns a
//! standalone SVG document as a string. Rows with missing values in any
//! plotted column are left out.

mod charts;
mod error;
mod options;
pub mod prepare;

pub use charts::{box_plot, density_overlay, scatter_plot};
pub use error::{Error, Result};
pub use options::ChartOptions;
