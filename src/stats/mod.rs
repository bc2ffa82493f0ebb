pub mod aggregate;
pub mod exec;
pub mod grid;
pub mod render;

pub use aggregate::{aggregate, FailurePolicy};
pub use exec::exec;
pub use grid::build;
pub use render::{layout, month_header, render, write_grid, Cell, Grid, Palette, Row, Tier};
