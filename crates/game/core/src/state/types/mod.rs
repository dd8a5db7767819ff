mod common;
mod unit;

pub use common::{Coordinate, PlayerId};
pub use unit::{UnitCategory, UnitType, UnknownUnitType};
