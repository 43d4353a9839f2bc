use rand::{distributions::Alphanumeric, Rng};

/// Length of generated car ids
pub const ID_LENGTH: usize = 6;

/// Random alphanumeric token. Uniqueness is enforced by the store.
pub fn random_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(ID_LENGTH)
        .map(char::from)
        .collect()
}
