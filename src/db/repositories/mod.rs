pub mod tvshow;
