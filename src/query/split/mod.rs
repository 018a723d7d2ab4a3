pub use self::split::FaceSplit;

mod split;
mod split_face;
