pub use super::tv_shows::Entity as TvShows;
