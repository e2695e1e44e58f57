use crcgen_core::{CrcError, Width};
use crcgen_emit::{validate_package, EmitConfig, Lang};

#[test]
fn test_default_file_names() {
    assert_eq!(Lang::Rust.default_file_name(Width::Crc8), "crc8_table.rs");
    assert_eq!(Lang::Go.default_file_name(Width::Crc16), "crc16_table.go");
}

#[test]
fn test_package_names() {
    for ok in ["crc", "examples", "_crc", "crc16_tables", "Crc8"] {
        assert!(validate_package(ok, Lang::Rust).is_ok(), "{}", ok);
        assert!(validate_package(ok, Lang::Go).is_ok(), "{}", ok);
    }
    for bad in ["8crc", "crc-16", "crc table", "_", "crc.go"] {
        assert!(matches!(validate_package(bad, Lang::Go), Err(CrcError::InvalidPackage)), "{}", bad);
    }
    assert!(matches!(validate_package("", Lang::Rust), Err(CrcError::MissingPackage)));
}

#[test]
fn test_keywords_are_language_specific() {
    assert!(validate_package("mod", Lang::Rust).is_err());
    assert!(validate_package("mod", Lang::Go).is_ok());
    assert!(validate_package("package", Lang::Go).is_err());
    assert!(validate_package("package", Lang::Rust).is_ok());

    for word in ["try", "Self", "box", "abstract", "become", "do", "final", "macro", "override", "priv", "typeof", "unsized", "virtual", "yield"] {
        assert!(matches!(validate_package(word, Lang::Rust), Err(CrcError::InvalidPackage)), "{}", word);
    }
    assert!(validate_package("box", Lang::Go).is_ok());
}

#[test]
fn test_config_keeps_fields() {
    let config = EmitConfig::new("crc", Lang::Rust, "crcgen --size 8 --poly 7").unwrap();
    assert_eq!(config.package, "crc");
    assert_eq!(config.lang, Lang::Rust);
    assert_eq!(config.generated_by, "crcgen --size 8 --poly 7");
    assert!(EmitConfig::new("", Lang::Rust, "crcgen").is_err());
}
