//! Figures of sampled functions.
//!
//! A [`Figure`] pairs a title with the projected points of a
//! [`SampleSet`](fnplot_sampling::SampleSet), ready to hand to a renderer.
//!
//! # Features
//!
//! - `plot` — Enables [`Figure::show`], which draws the figure in an egui
//!   window. This feature adds dependencies on `eframe` and `egui_plot`.

mod figure;

#[cfg(feature = "plot")]
mod window;

pub use figure::Figure;

#[cfg(feature = "plot")]
pub use window::ShowConfig;
