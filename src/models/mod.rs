pub mod show;

pub use show::TvShow;
