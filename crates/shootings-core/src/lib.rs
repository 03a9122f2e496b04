//! shootings-core - Exploratory charts over police shooting incidents
//!
//! This crate turns a date-indexed table of incidents into chart
//! descriptions that can be exported as SVG (drawn with kuva) or JSON.
//!
//! # Key Components
//!
//! - **IncidentTable**: Date-ordered records with categorical attributes
//! - **Scope**: State/city and year-range filters shared by the reports
//! - **PivotTable**: Count aggregation over two attributes
//! - **Figure**: Layout, titles, and aggregated data of one chart
//! - **PlotStyle**: Process-wide figure size and theme
//!
//! # Reports
//!
//! - **count_total**: Deaths per state (or per city of a state)
//! - **show_trend**: Monthly deaths, optionally stacked by an attribute
//! - **age_dist**: Age histograms with density curves and box plots
//! - **race_pie**: Race proportions, optionally one pie per attribute value
//! - **top_arms**: Most frequent armed categories
//!
//! Reports never fail. Filters that match nothing produce figures
//! without data.

pub mod chart;
pub mod colormap;
pub mod error;
pub mod export;
pub mod filter;
pub mod pivot;
pub mod record;
pub mod render;
pub mod reports;
pub mod style;
pub mod table;

pub use chart::*;
pub use colormap::{Color, Palette};
pub use error::{
    ExportError, ExportResult, ReportError, ReportResult, StyleError, StyleResult,
};
pub use export::{export_figure, ExportConfig, ExportFormat};
pub use filter::{Jurisdiction, Scope, YearRange};
pub use pivot::{value_counts, PivotTable};
pub use record::{Attribute, IncidentRecord};
pub use reports::*;
pub use style::{
    global_style, reset_global_style, set_global_style, FigureSize, PlotStyle, Theme,
};
pub use table::{IncidentTable, MonthKey};
