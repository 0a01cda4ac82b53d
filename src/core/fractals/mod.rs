pub mod escape_time;
pub mod fractal_kinds;
pub mod mandelbrot;
