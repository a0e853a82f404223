//! The six catalog entity types.
//!
//! Each entity carries its two identifiers, a block of scalar attributes that
//! is replaced wholesale on every sync, and its relation sets. Relations are
//! stored as sets of [`ExternalId`]s of the other kind, never as references to
//! the other records, so the bidirectional graph has no ownership cycles.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::Debug;

use crate::id::{ExternalId, LocalId};
use crate::kind::EntityKind;

/// Common surface of the six entity types.
pub trait Entity: Clone + Debug + PartialEq + Send + Sync + 'static {
    const KIND: EntityKind;

    /// Scalar attributes overwritten on every sync.
    type Attributes: Clone + Debug + Default + PartialEq + Send + Sync;

    /// A fresh, unsaved record with no attributes and no relations.
    fn new(external_id: ExternalId) -> Self;

    fn external_id(&self) -> ExternalId;

    /// `None` until the store saves the record for the first time.
    fn local_id(&self) -> Option<LocalId>;

    fn set_local_id(&mut self, local_id: LocalId);

    /// Name used by read-side search (the title for films).
    fn display_name(&self) -> &str;

    fn attributes(&self) -> &Self::Attributes;

    fn set_attributes(&mut self, attributes: Self::Attributes);

    /// Empty this record's own relation sets. Inverse sets held by other
    /// records are left alone.
    fn clear_relations(&mut self);
}

// ============================================================================
// Planet
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanetAttributes {
    pub name: String,
    pub rotation_period: String,
    pub orbital_period: String,
    pub diameter: String,
    pub climate: String,
    pub gravity: String,
    pub terrain: String,
    pub surface_water: String,
    pub population: String,
    pub created: Option<DateTime<Utc>>,
    pub edited: Option<DateTime<Utc>>,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Planet {
    pub local_id: Option<LocalId>,
    pub external_id: ExternalId,
    pub attributes: PlanetAttributes,
    /// Characters whose homeworld is this planet.
    pub residents: BTreeSet<ExternalId>,
    pub films: BTreeSet<ExternalId>,
}

impl Entity for Planet {
    const KIND: EntityKind = EntityKind::Planet;
    type Attributes = PlanetAttributes;

    fn new(external_id: ExternalId) -> Self {
        Self {
            local_id: None,
            external_id,
            attributes: PlanetAttributes::default(),
            residents: BTreeSet::new(),
            films: BTreeSet::new(),
        }
    }

    fn external_id(&self) -> ExternalId {
        self.external_id
    }

    fn local_id(&self) -> Option<LocalId> {
        self.local_id
    }

    fn set_local_id(&mut self, local_id: LocalId) {
        self.local_id = Some(local_id);
    }

    fn display_name(&self) -> &str {
        &self.attributes.name
    }

    fn attributes(&self) -> &PlanetAttributes {
        &self.attributes
    }

    fn set_attributes(&mut self, attributes: PlanetAttributes) {
        self.attributes = attributes;
    }

    fn clear_relations(&mut self) {
        self.residents.clear();
        self.films.clear();
    }
}

// ============================================================================
// Character
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterAttributes {
    pub name: String,
    pub birth_year: String,
    pub gender: String,
    pub height: String,
    pub mass: String,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
    pub created: Option<DateTime<Utc>>,
    pub edited: Option<DateTime<Utc>>,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub local_id: Option<LocalId>,
    pub external_id: ExternalId,
    pub attributes: CharacterAttributes,
    /// The one planet this character calls home.
    pub homeworld: Option<ExternalId>,
    pub films: BTreeSet<ExternalId>,
    pub species: BTreeSet<ExternalId>,
    /// Vehicles this character pilots.
    pub vehicles: BTreeSet<ExternalId>,
    /// Starships this character pilots.
    pub starships: BTreeSet<ExternalId>,
}

impl Entity for Character {
    const KIND: EntityKind = EntityKind::Character;
    type Attributes = CharacterAttributes;

    fn new(external_id: ExternalId) -> Self {
        Self {
            local_id: None,
            external_id,
            attributes: CharacterAttributes::default(),
            homeworld: None,
            films: BTreeSet::new(),
            species: BTreeSet::new(),
            vehicles: BTreeSet::new(),
            starships: BTreeSet::new(),
        }
    }

    fn external_id(&self) -> ExternalId {
        self.external_id
    }

    fn local_id(&self) -> Option<LocalId> {
        self.local_id
    }

    fn set_local_id(&mut self, local_id: LocalId) {
        self.local_id = Some(local_id);
    }

    fn display_name(&self) -> &str {
        &self.attributes.name
    }

    fn attributes(&self) -> &CharacterAttributes {
        &self.attributes
    }

    fn set_attributes(&mut self, attributes: CharacterAttributes) {
        self.attributes = attributes;
    }

    fn clear_relations(&mut self) {
        self.homeworld = None;
        self.films.clear();
        self.species.clear();
        self.vehicles.clear();
        self.starships.clear();
    }
}

// ============================================================================
// Film
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilmAttributes {
    pub title: String,
    pub episode_id: Option<i32>,
    pub opening_crawl: String,
    pub director: String,
    pub producer: String,
    pub release_date: Option<NaiveDate>,
    pub created: Option<DateTime<Utc>>,
    pub edited: Option<DateTime<Utc>>,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Film {
    pub local_id: Option<LocalId>,
    pub external_id: ExternalId,
    pub attributes: FilmAttributes,
    pub characters: BTreeSet<ExternalId>,
    pub planets: BTreeSet<ExternalId>,
    pub species: BTreeSet<ExternalId>,
    pub starships: BTreeSet<ExternalId>,
    pub vehicles: BTreeSet<ExternalId>,
}

impl Entity for Film {
    const KIND: EntityKind = EntityKind::Film;
    type Attributes = FilmAttributes;

    fn new(external_id: ExternalId) -> Self {
        Self {
            local_id: None,
            external_id,
            attributes: FilmAttributes::default(),
            characters: BTreeSet::new(),
            planets: BTreeSet::new(),
            species: BTreeSet::new(),
            starships: BTreeSet::new(),
            vehicles: BTreeSet::new(),
        }
    }

    fn external_id(&self) -> ExternalId {
        self.external_id
    }

    fn local_id(&self) -> Option<LocalId> {
        self.local_id
    }

    fn set_local_id(&mut self, local_id: LocalId) {
        self.local_id = Some(local_id);
    }

    fn display_name(&self) -> &str {
        &self.attributes.title
    }

    fn attributes(&self) -> &FilmAttributes {
        &self.attributes
    }

    fn set_attributes(&mut self, attributes: FilmAttributes) {
        self.attributes = attributes;
    }

    fn clear_relations(&mut self) {
        self.characters.clear();
        self.planets.clear();
        self.species.clear();
        self.starships.clear();
        self.vehicles.clear();
    }
}

// ============================================================================
// Species
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesAttributes {
    pub name: String,
    pub classification: String,
    pub designation: String,
    pub average_height: String,
    pub skin_colors: String,
    pub hair_colors: String,
    pub eye_colors: String,
    pub average_lifespan: String,
    pub language: String,
    /// Raw planet reference. Kept as text, not linked to a planet record.
    pub homeworld: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub edited: Option<DateTime<Utc>>,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Species {
    pub local_id: Option<LocalId>,
    pub external_id: ExternalId,
    pub attributes: SpeciesAttributes,
    pub people: BTreeSet<ExternalId>,
    pub films: BTreeSet<ExternalId>,
}

impl Entity for Species {
    const KIND: EntityKind = EntityKind::Species;
    type Attributes = SpeciesAttributes;

    fn new(external_id: ExternalId) -> Self {
        Self {
            local_id: None,
            external_id,
            attributes: SpeciesAttributes::default(),
            people: BTreeSet::new(),
            films: BTreeSet::new(),
        }
    }

    fn external_id(&self) -> ExternalId {
        self.external_id
    }

    fn local_id(&self) -> Option<LocalId> {
        self.local_id
    }

    fn set_local_id(&mut self, local_id: LocalId) {
        self.local_id = Some(local_id);
    }

    fn display_name(&self) -> &str {
        &self.attributes.name
    }

    fn attributes(&self) -> &SpeciesAttributes {
        &self.attributes
    }

    fn set_attributes(&mut self, attributes: SpeciesAttributes) {
        self.attributes = attributes;
    }

    fn clear_relations(&mut self) {
        self.people.clear();
        self.films.clear();
    }
}

// ============================================================================
// Starship
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarshipAttributes {
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    pub cost_in_credits: String,
    pub length: String,
    pub max_atmosphering_speed: String,
    pub crew: String,
    pub passengers: String,
    pub cargo_capacity: String,
    pub consumables: String,
    pub hyperdrive_rating: String,
    #[serde(rename = "MGLT")]
    pub mglt: String,
    pub starship_class: String,
    pub created: Option<DateTime<Utc>>,
    pub edited: Option<DateTime<Utc>>,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Starship {
    pub local_id: Option<LocalId>,
    pub external_id: ExternalId,
    pub attributes: StarshipAttributes,
    pub pilots: BTreeSet<ExternalId>,
    pub films: BTreeSet<ExternalId>,
}

impl Entity for Starship {
    const KIND: EntityKind = EntityKind::Starship;
    type Attributes = StarshipAttributes;

    fn new(external_id: ExternalId) -> Self {
        Self {
            local_id: None,
            external_id,
            attributes: StarshipAttributes::default(),
            pilots: BTreeSet::new(),
            films: BTreeSet::new(),
        }
    }

    fn external_id(&self) -> ExternalId {
        self.external_id
    }

    fn local_id(&self) -> Option<LocalId> {
        self.local_id
    }

    fn set_local_id(&mut self, local_id: LocalId) {
        self.local_id = Some(local_id);
    }

    fn display_name(&self) -> &str {
        &self.attributes.name
    }

    fn attributes(&self) -> &StarshipAttributes {
        &self.attributes
    }

    fn set_attributes(&mut self, attributes: StarshipAttributes) {
        self.attributes = attributes;
    }

    fn clear_relations(&mut self) {
        self.pilots.clear();
        self.films.clear();
    }
}

// ============================================================================
// Vehicle
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleAttributes {
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    pub cost_in_credits: String,
    pub length: String,
    pub max_atmosphering_speed: String,
    pub crew: String,
    pub passengers: String,
    pub cargo_capacity: String,
    pub consumables: String,
    pub vehicle_class: String,
    pub created: Option<DateTime<Utc>>,
    pub edited: Option<DateTime<Utc>>,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub local_id: Option<LocalId>,
    pub external_id: ExternalId,
    pub attributes: VehicleAttributes,
    pub pilots: BTreeSet<ExternalId>,
    pub films: BTreeSet<ExternalId>,
}

impl Entity for Vehicle {
    const KIND: EntityKind = EntityKind::Vehicle;
    type Attributes = VehicleAttributes;

    fn new(external_id: ExternalId) -> Self {
        Self {
            local_id: None,
            external_id,
            attributes: VehicleAttributes::default(),
            pilots: BTreeSet::new(),
            films: BTreeSet::new(),
        }
    }

    fn external_id(&self) -> ExternalId {
        self.external_id
    }

    fn local_id(&self) -> Option<LocalId> {
        self.local_id
    }

    fn set_local_id(&mut self, local_id: LocalId) {
        self.local_id = Some(local_id);
    }

    fn display_name(&self) -> &str {
        &self.attributes.name
    }

    fn attributes(&self) -> &VehicleAttributes {
        &self.attributes
    }

    fn set_attributes(&mut self, attributes: VehicleAttributes) {
        self.attributes = attributes;
    }

    fn clear_relations(&mut self) {
        self.pilots.clear();
        self.films.clear();
    }
}
