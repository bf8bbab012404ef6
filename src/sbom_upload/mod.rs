/// Upload domain layer
///
/// Pure value types describing what gets uploaded and how each upload
/// ended. Nothing in here performs I/O beyond resolving a path to its
/// absolute form.
pub mod domain;
