pub mod mse;

pub use mse::{MseLoss, MseNormalization};
