//! Import and export functions.

mod wavefront;
