pub mod video;

pub use video::{NewVideo, Video};
