use shared::domain::Role;

/// Display tone for a role badge. Rendering layers map these to colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleTone {
    Blue,
    Green,
    Purple,
    Red,
    Neutral,
}

pub fn role_tone(role: Option<Role>) -> RoleTone {
    match role {
        Some(Role::Test) => RoleTone::Blue,
        Some(Role::Novice) => RoleTone::Green,
        Some(Role::Admin) => RoleTone::Purple,
        Some(Role::Banned) => RoleTone::Red,
        None => RoleTone::Neutral,
    }
}
