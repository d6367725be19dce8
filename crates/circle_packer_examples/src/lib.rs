#![forbid(unsafe_code)]

mod rendering;

pub use rendering::{
    init_tracing, load_png, render_circles_to_png, render_circles_to_rgb, RenderConfig,
};
