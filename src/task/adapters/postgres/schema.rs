//! Diesel schema for task store persistence.

diesel::table! {
    /// Task records with unique titles.
    tasks (id) {
        /// Task identifier drawn from the `BIGSERIAL` sequence.
        id -> BigInt,
        /// Unique task title.
        #[max_length = 100]
        title -> Varchar,
        /// Optional free-form description.
        #[max_length = 300]
        description -> Nullable<Varchar>,
        /// Task lifecycle status.
        #[max_length = 20]
        status -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
