pub mod project_sample;
pub mod sampler;
