/// Identifier for a cell in a [`crate::model::Model`].
///
/// This is an index into `Model::population`, stable for the lifetime of the
/// model since the population never grows or shrinks after construction.
pub type CellId = usize;
