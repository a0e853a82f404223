//! Two-sided relation descriptors.
//!
//! A [`Relation`] names one relation field on a source kind and knows how to
//! record a link on both ends: the source's own set and the inverse set on
//! the target. The linker walks these descriptors; it never reaches into the
//! entity fields directly.
//!
//! | Source field            | Inverse field          |
//! |-------------------------|------------------------|
//! | `Planet.residents`      | `Character.homeworld`  |
//! | `Planet.films`          | `Film.planets`         |
//! | `Character.homeworld`   | `Planet.residents`     |
//! | `Character.films`       | `Film.characters`      |
//! | `Character.species`     | `Species.people`       |
//! | `Character.vehicles`    | `Vehicle.pilots`       |
//! | `Character.starships`   | `Starship.pilots`      |
//! | `Film.characters`       | `Character.films`      |
//! | `Film.planets`          | `Planet.films`         |
//! | `Film.species`          | `Species.films`        |
//! | `Film.starships`        | `Starship.films`       |
//! | `Film.vehicles`         | `Vehicle.films`        |
//! | `Species.people`        | `Character.species`    |
//! | `Species.films`         | `Film.species`         |
//! | `Starship.pilots`       | `Character.starships`  |
//! | `Starship.films`        | `Film.starships`       |
//! | `Vehicle.pilots`        | `Character.vehicles`   |
//! | `Vehicle.films`         | `Film.vehicles`        |

use crate::entity::{Character, Film, Planet, Species, Starship, Vehicle};
use crate::id::ExternalId;

pub struct Relation<S, T> {
    /// Remote field name on the source record.
    pub name: &'static str,
    /// Record the target on the source.
    pub attach: fn(&mut S, ExternalId),
    /// Record the source on the target.
    pub attach_inverse: fn(&mut T, ExternalId),
}

pub const PLANET_RESIDENTS: Relation<Planet, Character> = Relation {
    name: "residents",
    attach: |planet, id| {
        planet.residents.insert(id);
    },
    attach_inverse: |character, id| character.homeworld = Some(id),
};

pub const PLANET_FILMS: Relation<Planet, Film> = Relation {
    name: "films",
    attach: |planet, id| {
        planet.films.insert(id);
    },
    attach_inverse: |film, id| {
        film.planets.insert(id);
    },
};

pub const CHARACTER_HOMEWORLD: Relation<Character, Planet> = Relation {
    name: "homeworld",
    attach: |character, id| character.homeworld = Some(id),
    attach_inverse: |planet, id| {
        planet.residents.insert(id);
    },
};

pub const CHARACTER_FILMS: Relation<Character, Film> = Relation {
    name: "films",
    attach: |character, id| {
        character.films.insert(id);
    },
    attach_inverse: |film, id| {
        film.characters.insert(id);
    },
};

pub const CHARACTER_SPECIES: Relation<Character, Species> = Relation {
    name: "species",
    attach: |character, id| {
        character.species.insert(id);
    },
    attach_inverse: |species, id| {
        species.people.insert(id);
    },
};

pub const CHARACTER_VEHICLES: Relation<Character, Vehicle> = Relation {
    name: "vehicles",
    attach: |character, id| {
        character.vehicles.insert(id);
    },
    attach_inverse: |vehicle, id| {
        vehicle.pilots.insert(id);
    },
};

pub const CHARACTER_STARSHIPS: Relation<Character, Starship> = Relation {
    name: "starships",
    attach: |character, id| {
        character.starships.insert(id);
    },
    attach_inverse: |starship, id| {
        starship.pilots.insert(id);
    },
};

pub const FILM_CHARACTERS: Relation<Film, Character> = Relation {
    name: "characters",
    attach: |film, id| {
        film.characters.insert(id);
    },
    attach_inverse: |character, id| {
        character.films.insert(id);
    },
};

pub const FILM_PLANETS: Relation<Film, Planet> = Relation {
    name: "planets",
    attach: |film, id| {
        film.planets.insert(id);
    },
    attach_inverse: |planet, id| {
        planet.films.insert(id);
    },
};

pub const FILM_SPECIES: Relation<Film, Species> = Relation {
    name: "species",
    attach: |film, id| {
        film.species.insert(id);
    },
    attach_inverse: |species, id| {
        species.films.insert(id);
    },
};

pub const FILM_STARSHIPS: Relation<Film, Starship> = Relation {
    name: "starships",
    attach: |film, id| {
        film.starships.insert(id);
    },
    attach_inverse: |starship, id| {
        starship.films.insert(id);
    },
};

pub const FILM_VEHICLES: Relation<Film, Vehicle> = Relation {
    name: "vehicles",
    attach: |film, id| {
        film.vehicles.insert(id);
    },
    attach_inverse: |vehicle, id| {
        vehicle.films.insert(id);
    },
};

pub const SPECIES_PEOPLE: Relation<Species, Character> = Relation {
    name: "people",
    attach: |species, id| {
        species.people.insert(id);
    },
    attach_inverse: |character, id| {
        character.species.insert(id);
    },
};

pub const SPECIES_FILMS: Relation<Species, Film> = Relation {
    name: "films",
    attach: |species, id| {
        species.films.insert(id);
    },
    attach_inverse: |film, id| {
        film.species.insert(id);
    },
};

pub const STARSHIP_PILOTS: Relation<Starship, Character> = Relation {
    name: "pilots",
    attach: |starship, id| {
        starship.pilots.insert(id);
    },
    attach_inverse: |character, id| {
        character.starships.insert(id);
    },
};

pub const STARSHIP_FILMS: Relation<Starship, Film> = Relation {
    name: "films",
    attach: |starship, id| {
        starship.films.insert(id);
    },
    attach_inverse: |film, id| {
        film.starships.insert(id);
    },
};

pub const VEHICLE_PILOTS: Relation<Vehicle, Character> = Relation {
    name: "pilots",
    attach: |vehicle, id| {
        vehicle.pilots.insert(id);
    },
    attach_inverse: |character, id| {
        character.vehicles.insert(id);
    },
};

pub const VEHICLE_FILMS: Relation<Vehicle, Film> = Relation {
    name: "films",
    attach: |vehicle, id| {
        vehicle.films.insert(id);
    },
    attach_inverse: |film, id| {
        film.vehicles.insert(id);
    },
};
