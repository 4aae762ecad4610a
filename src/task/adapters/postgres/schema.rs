//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Insertion position used to order tasks sharing a timestamp.
        position -> Int8,
        /// Trimmed task title.
        #[max_length = 80]
        title -> Varchar,
        /// Completion flag.
        completed -> Bool,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
