/// Domain failures surfaced to clients through the response envelope.
///
/// The display strings are part of the wire contract: they are copied
/// verbatim into the envelope's `error` field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A required field is missing, empty, or zero.
    #[error("fields required")]
    FieldsRequired,

    /// A point lookup matched no row.
    #[error("no result")]
    NoResult,

    /// The promote target does not exist, or vanished before the update landed.
    #[error("no data to update")]
    NoDataToUpdate,

    /// A delete by id removed nothing.
    #[error("no data to delete")]
    NoDataToDelete,
}
