/// Index of a bar in a [`crate::bars::BarArray`].
///
/// This is an index into `BarArray::values`, and is only meaningful
/// within the lifetime of a given array instance.
pub type BarIndex = usize;
