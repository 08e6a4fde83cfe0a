/// Herringbone sweep and generator orchestration
pub mod executor;
/// Corner color assignment and repetition reduction
pub mod repetition;
/// Constrained weighted tile selection
pub mod selection;
/// Per-slot color weights
pub mod weighting;
