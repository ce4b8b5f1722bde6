pub mod codebook;
pub mod packed;
