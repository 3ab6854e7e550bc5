pub mod config;
pub mod flow;
pub mod map;
pub mod message;
pub mod photo;
pub mod place;
pub mod rating;
pub mod review;
pub mod validate;

pub use yplaces_boundary as boundary;
