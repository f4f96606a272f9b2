mod model;
mod store;

pub use model::{
    Book, BlogPost, ExperienceEntry, Hobby, HobbyIcon, MediaEntry, MediaKind, Paper, Profile,
    ProfileLink, Project, WatchStatus,
};
pub use store::ContentStore;
