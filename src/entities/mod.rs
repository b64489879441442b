pub mod prelude;

pub mod tv_shows;
