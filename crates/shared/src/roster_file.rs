//! JSON roster files: an array of person objects.

use std::{collections::HashSet, fs, path::Path};

use crate::{domain::PersonRecord, error::RosterError};

pub fn load_roster_file(path: &Path) -> Result<Vec<PersonRecord>, RosterError> {
    let raw = fs::read_to_string(path).map_err(|source| RosterError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_roster(&raw)
}

pub fn parse_roster(raw: &str) -> Result<Vec<PersonRecord>, RosterError> {
    let people: Vec<PersonRecord> = serde_json::from_str(raw)?;
    ensure_unique_ids(&people)?;
    Ok(people)
}

pub fn write_roster_json(people: &[PersonRecord]) -> Result<String, RosterError> {
    Ok(serde_json::to_string_pretty(people)?)
}

fn ensure_unique_ids(people: &[PersonRecord]) -> Result<(), RosterError> {
    let mut seen = HashSet::with_capacity(people.len());
    for person in people {
        if !seen.insert(person.id) {
            return Err(RosterError::DuplicateId(person.id));
        }
    }
    Ok(())
}
