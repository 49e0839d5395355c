//! Repository methods, implemented as `impl CompassDb` blocks per entity.

pub mod roadmap;
