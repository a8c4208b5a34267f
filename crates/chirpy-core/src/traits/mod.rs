//! Repository traits (ports)

mod repositories;

pub use repositories::{
    ChirpQuery, ChirpRepository, RefreshTokenRepository, RepoResult, SortDirection,
    UserRepository,
};
