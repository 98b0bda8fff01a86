use crate::{
    collections::{GUESTS, USERS},
    screens::Screen,
};
use galley_core::search::{PrefixFacet, SearchFacets};

///
/// Audience
///
/// Members and guests are separate collections behind one screen.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Audience {
    #[default]
    Members,
    Guests,
}

///
/// UserSearchField
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum UserSearchField {
    #[default]
    Name,
    Email,
    Phone,
    Address,
}

impl UserSearchField {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address => "address",
        }
    }
}

///
/// UsersScreen
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UsersScreen {
    pub audience: Audience,
    pub search_field: UserSearchField,
    pub search_text: String,
}

impl Screen for UsersScreen {
    fn collection(&self) -> &'static str {
        match self.audience {
            Audience::Members => USERS,
            Audience::Guests => GUESTS,
        }
    }

    fn facets(&self) -> SearchFacets {
        SearchFacets::new().with_prefix(PrefixFacet::new(
            self.search_field.as_str(),
            self.search_text.as_str(),
        ))
    }
}
