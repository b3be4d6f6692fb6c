use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        BoomerangError::surface("x")
            .to_string()
            .contains("surface error:")
    );
    assert!(
        BoomerangError::ticker("x")
            .to_string()
            .contains("ticker error:")
    );
    assert!(
        BoomerangError::config("x")
            .to_string()
            .contains("config error:")
    );
    assert!(
        BoomerangError::encode("x")
            .to_string()
            .contains("encode error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = BoomerangError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
