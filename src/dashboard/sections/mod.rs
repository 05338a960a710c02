//! Dashboard section generators.
//!
//! Each module renders one region of the dashboard as markdown from the
//! built `DashboardView`; none of them touches the data store.

pub mod gis;
pub mod npk;
pub mod soil_cards;
pub mod vegetation;
