// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt::{self, Display};

/// Heterogeneous payload for operator tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestData {
    Person { name: String, age: u32 },
    Animal { name: String, legs: u32 },
    Plant { species: String },
}

impl TestData {
    /// Name of the person or animal, species of the plant.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            TestData::Person { name, .. } | TestData::Animal { name, .. } => name,
            TestData::Plant { species } => species,
        }
    }

    #[must_use]
    pub const fn is_person(&self) -> bool {
        matches!(self, TestData::Person { .. })
    }
}

pub fn person(name: impl Into<String>, age: u32) -> TestData {
    TestData::Person {
        name: name.into(),
        age,
    }
}

pub fn person_alice() -> TestData {
    person("Alice", 25)
}

pub fn person_bob() -> TestData {
    person("Bob", 30)
}

pub fn person_charlie() -> TestData {
    person("Charlie", 35)
}

pub fn animal_dog() -> TestData {
    TestData::Animal {
        name: "Dog".to_string(),
        legs: 4,
    }
}

pub fn animal_bird() -> TestData {
    TestData::Animal {
        name: "Bird".to_string(),
        legs: 2,
    }
}

pub fn plant_rose() -> TestData {
    TestData::Plant {
        species: "Rose".to_string(),
    }
}

impl Display for TestData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestData::Person { name, age } => write!(f, "Person[name={name}, age={age}]"),
            TestData::Animal { name, legs } => write!(f, "Animal[name={name}, legs={legs}]"),
            TestData::Plant { species } => write!(f, "Plant[species={species}]"),
        }
    }
}
