use md5::Md5;
use sha1::{Digest, Sha1};

/// Login signature expected by the printer.
///
/// The printer hashes `password=<secret>&timestamp=<ms>` with SHA-1, then
/// MD5-hashes the lowercase hex text of that digest (not its raw bytes).
pub fn signature(secret: &str, timestamp_millis: i64) -> String {
    let payload = format!("password={}&timestamp={}", secret, timestamp_millis);
    let sha1_hex = hex::encode(Sha1::digest(payload.as_bytes()));
    hex::encode(Md5::digest(sha1_hex.as_bytes()))
}

pub fn timestamp_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vectors() {
        assert_eq!(
            signature("secret", 1713369600000),
            "3ec1472ef4061d223f675703fac130ed"
        );
        assert_eq!(
            signature("hunter2", 1700000000123),
            "1e7ee1ad08e2e304fc9e81ce5e307850"
        );
        assert_eq!(signature("", 0), "aec06dd3e379851adaff65487a8b6495");
    }

    #[test]
    fn hashes_the_hex_text_not_the_raw_digest() {
        // md5 over the raw sha1 bytes would give a different answer
        let raw = Sha1::digest(b"password=secret&timestamp=1713369600000");
        let wrong = hex::encode(Md5::digest(raw));
        assert_ne!(signature("secret", 1713369600000), wrong);
    }

    #[test]
    fn is_deterministic_and_time_dependent() {
        let a = signature("pw", 1);
        assert_eq!(a, signature("pw", 1));
        assert_ne!(a, signature("pw", 2));
        assert_eq!(a.len(), 32);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
