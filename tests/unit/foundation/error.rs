use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SwapError::configuration("x")
            .to_string()
            .contains("configuration error:")
    );
    assert!(SwapError::render("x").to_string().contains("render error:"));
    assert!(SwapError::encode("x").to_string().contains("encode error:"));
    assert!(
        SwapError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(
        SwapError::MissingSymbol
            .to_string()
            .contains("missing symbol error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SwapError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
