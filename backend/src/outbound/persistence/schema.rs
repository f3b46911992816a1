//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `migrations/` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Todo items.
    ///
    /// `updated_at >= created_at` and a non-blank `title` are enforced by
    /// check constraints.
    todos (id) {
        id -> Uuid,
        title -> Text,
        description -> Nullable<Text>,
        is_complete -> Bool,
        priority -> Int4,
        due_date -> Nullable<Timestamptz>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}
