/// Viewer layer: panels around the plots. Rendering is fire-and-forget; the
/// numeric state is read-only here.
pub mod panels;
pub mod plot;
