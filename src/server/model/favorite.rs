use crate::model::favorite::FavoriteKind;

/// The record a favorite points to, carrying the ID of the targeted row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteTarget {
    Person(i32),
    Planet(i32),
    Starship(i32),
}

impl FavoriteTarget {
    pub fn new(kind: FavoriteKind, id: i32) -> Self {
        match kind {
            FavoriteKind::People => Self::Person(id),
            FavoriteKind::Planets => Self::Planet(id),
            FavoriteKind::Starships => Self::Starship(id),
        }
    }

    pub fn id(&self) -> i32 {
        match *self {
            Self::Person(id) | Self::Planet(id) | Self::Starship(id) => id,
        }
    }

    /// The favorite column holding the ID of this target.
    pub fn column(&self) -> entity::favorite::Column {
        match self {
            Self::Person(_) => entity::favorite::Column::FavoritePersonId,
            Self::Planet(_) => entity::favorite::Column::FavoritePlanetId,
            Self::Starship(_) => entity::favorite::Column::FavoriteStarshipId,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Person(_) => "character",
            Self::Planet(_) => "planet",
            Self::Starship(_) => "starship",
        }
    }

    pub fn not_found_message(&self) -> String {
        capitalize(&format!("{} not found", self.label()))
    }

    pub fn duplicate_message(&self) -> String {
        format!("The {} is already on the favorites list", self.label())
    }

    pub fn added_message(&self) -> String {
        capitalize(&format!("{} added to favorites successfully", self.label()))
    }
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
