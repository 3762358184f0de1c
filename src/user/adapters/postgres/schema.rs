//! Diesel schema for user account persistence.

diesel::table! {
    /// User accounts with unique email addresses.
    users (id) {
        /// Store-assigned user identifier.
        id -> Int4,
        /// Unique email address.
        #[max_length = 255]
        email -> Varchar,
        /// Hex-encoded password digest.
        #[max_length = 255]
        password_hash -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
