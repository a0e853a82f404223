//! Remote record types of the six collections and their upsert rules.

mod character;
mod film;
mod planet;
mod species;
mod starship;
mod vehicle;

pub use character::CharacterRecord;
pub use film::FilmRecord;
pub use planet::PlanetRecord;
pub use species::SpeciesRecord;
pub use starship::StarshipRecord;
pub use vehicle::VehicleRecord;
