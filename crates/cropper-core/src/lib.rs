pub mod bitmap;
pub mod config;
pub mod consts;
pub mod crop;
pub mod cropper;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod io;
pub mod pick;
pub mod resize;
pub mod transform;
