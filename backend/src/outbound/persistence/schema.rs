//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. The
//! `diesel print-schema` command can regenerate them from a live database.

diesel::table! {
    /// Documents table.
    ///
    /// `content` holds the serialised JSON form of the optional structured
    /// content, including the literal `null` when absent.
    documents (id) {
        /// Primary key assigned by a `BIGSERIAL` sequence.
        id -> Int8,
        /// Trimmed, non-empty title.
        title -> Text,
        /// Serialised `DocumentContent` or `null`.
        content -> Text,
        /// Trimmed, non-empty signee.
        signee -> Text,
    }
}
