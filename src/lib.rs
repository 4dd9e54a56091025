pub mod pexels;

pub use pexels::{Client, Config, Error, Photo, Result, Video};
