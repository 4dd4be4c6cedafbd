//! Demo login check
//!
//! A static table of demo accounts with plaintext secrets. This is a stand-in
//! for a real credential store and must not be treated as one: no hashing, no
//! sessions, no rate limiting.

pub const DEMO_USERS: &[(&str, &str)] = &[
    ("demo@nrtr.org", "demo123"),
    ("admin@nrtr.org", "adminpass"),
];

/// True iff the email exists in the demo table and the password matches
/// exactly. Callers surface failure with one generic message so an unknown
/// email is indistinguishable from a wrong password.
pub fn verify_credentials(email: &str, password: &str) -> bool {
    DEMO_USERS
        .iter()
        .any(|&(known_email, known_password)| known_email == email && known_password == password)
}
