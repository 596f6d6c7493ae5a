//! Progressive-reveal viewing over the lore graph.
//!
//! Provides the [`viewer::GraphViewer`] visibility window, the
//! snapshotable [`state::ViewerState`], and tree rendering of the visible
//! window. The viewer never mutates the graph it reads.

pub mod render;
pub mod state;
pub mod viewer;
