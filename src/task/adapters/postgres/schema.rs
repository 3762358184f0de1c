//! Diesel schema for task persistence.

diesel::table! {
    /// Task records indexed by owning user id.
    tasks (id) {
        /// Store-assigned task identifier.
        id -> Int4,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Completion flag.
        is_done -> Bool,
        /// Owning-user identifier, referenced by value only.
        user_id -> Int4,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
