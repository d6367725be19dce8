#![forbid(unsafe_code)]
//! circle_packer: Fill the opaque region of an RGBA image with non-overlapping circles.
//!
//! Modules:
//! - buffer, mask: RGBA8 pixel buffers and alpha-threshold occupancy queries
//! - collision: spacing-aware overlap checks against committed circles
//! - packing: radius pools, the greedy placement engine, configuration and run events
//! - dispatch: running a pack inline or on a worker thread behind one task type
//! - session: a reusable packer that owns config, pool and executor
//! - color, svg, source: fills, SVG export and procedural shapes
//!
//! For runnable binaries, see the `circle_packer_examples` crate.
pub mod buffer;
pub mod collision;
pub mod color;
pub mod dispatch;
pub mod error;
pub mod mask;
pub mod packing;
pub mod session;
pub mod source;
pub mod svg;

/// Convenient re-exports for common types. Import with `use circle_packer::prelude::*;`.
pub mod prelude {
    pub use crate::buffer::PixelBuffer;
    pub use crate::collision::CollisionIndex;
    pub use crate::color::{colorize, ColorPolicy, ColoredCircle, Rgb};
    pub use crate::dispatch::{
        offload_supported, select_executor, InlineExecutor, PackExecutor, PackJob, PackTask,
        PackWorker, WorkerExecutor,
    };
    pub use crate::error::{Error, Result};
    pub use crate::mask::{sample_points, AlphaMask, DIAGONAL_OFFSET};
    pub use crate::packing::events::{
        ChannelSink, EventSink, FnSink, PackEvent, PackEventKind, VecSink,
    };
    pub use crate::packing::{
        pack, pack_with_events, CirclePool, PackConfig, PackResult, PackStats, PlacedCircle,
        TRIAL_BUDGET,
    };
    pub use crate::session::CirclePacker;
    pub use crate::svg::{to_svg_string, SvgDocument};
}
