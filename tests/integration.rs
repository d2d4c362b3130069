//! Integration tests over complete Wine-style registry files.

use std::path::PathBuf;
use winereg::{parse, parse_file, parse_strict, RegistryError, ValueData};

fn test_data_path(filename: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_data")
        .join(filename)
}

fn load_system_reg() -> String {
    std::fs::read_to_string(test_data_path("system.reg")).expect("fixture missing")
}

#[test]
fn test_parse_file_system_reg() {
    let result = parse_file(test_data_path("system.reg"));
    assert!(result.is_ok(), "failed to parse system.reg: {:?}", result.err());

    let root = result.unwrap();
    assert_eq!(root.key_count(), 1);
    assert!(root.key("Software").is_some());
}

#[test]
fn test_parse_file_missing_file() {
    let err = parse_file(test_data_path("does-not-exist.reg")).unwrap_err();
    assert!(matches!(err, RegistryError::Io(_)));
}

#[test]
fn test_default_icon_query() {
    let root = parse(&load_system_reg());

    // The launcher resolves the icon resource from the URL scheme class
    let icon = root
        .find_value(r"Software\Classes\konaste.gitadora\DefaultIcon", "")
        .expect("DefaultIcon default value missing");

    let ValueData::String(data) = &icon.data else {
        panic!("DefaultIcon should be REG_SZ, got {:?}", icon.data);
    };

    let (path, index) = data.rsplit_once(',').expect("icon value has no index");
    assert_eq!(path, r"C:\Games\GITADORA\launcher\modules\launcher.exe");
    assert_eq!(index.parse::<u32>().unwrap(), 0);
}

#[test]
fn test_install_dir_query() {
    let root = parse(&load_system_reg());

    let install_dir = root
        .find_value(r"Software\KONAMI\GITADORA", "InstallDir")
        .expect("InstallDir missing");
    assert_eq!(install_dir.data, ValueData::String(r"C:\Games\GITADORA".to_string()));
}

#[test]
fn test_typed_values_from_fixture() {
    let root = parse(&load_system_reg());
    let key = root.find_key(r"Software\KONAMI\GITADORA").unwrap();

    assert_eq!(key.value("ResolutionWidth").unwrap().data, ValueData::Dword(1920));
    assert_eq!(key.value("ResolutionHeight").unwrap().data, ValueData::Dword(1080));
    assert_eq!(key.value("ContentSize").unwrap().data, ValueData::Qword(5_000_000_000));
    assert_eq!(
        key.value("InstallerCookie").unwrap().data,
        ValueData::Binary(vec![0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0x10])
    );
    assert_eq!(
        key.value("LauncherPath").unwrap().data,
        ValueData::ExpandString(r"C:\Games".to_string())
    );
    assert_eq!(
        key.value("SupportedModes").unwrap().data,
        ValueData::MultiString("fullwin".to_string())
    );
}

#[test]
fn test_escaped_command_line() {
    let root = parse(&load_system_reg());

    let command = root
        .find_value(r"Software\Classes\konaste.gitadora\shell\open\command", "")
        .expect("open command missing");
    assert_eq!(
        command.data,
        ValueData::String(r#""C:\Games\GITADORA\launcher\modules\launcher.exe" "%1""#.to_string())
    );
}

#[test]
fn test_intermediate_keys_materialized() {
    let root = parse(&load_system_reg());

    // Only leaf keys have explicit headers; every ancestor is still reachable
    let software = root.find_key("Software").expect("Software missing");
    let classes = software.subkey("Classes").expect("Classes missing");
    assert_eq!(classes.path(), r"Software\Classes");

    let scheme = classes.subkey("konaste.gitadora").expect("scheme key missing");
    assert_eq!(scheme.subkey_count(), 2); // DefaultIcon and shell
    assert!(scheme.subkey("shell").and_then(|k| k.subkey("open")).is_some());
}

#[test]
fn test_wrong_partial_path_returns_none() {
    let root = parse(&load_system_reg());

    // Skipping a segment never fuzzy-matches
    assert!(root.find_key(r"Software\konaste.gitadora").is_none());
    assert!(root.find_key(r"Software\Classes\shell").is_none());
}

#[test]
fn test_lookup_absence() {
    let root = parse(&load_system_reg());

    assert!(root.find_value(r"Software\Missing\Key", "InstallDir").is_none());
    assert!(root.find_value(r"Software\KONAMI\GITADORA", "NoSuchValue").is_none());
}

#[test]
fn test_parse_is_idempotent() {
    let text = load_system_reg();
    assert_eq!(parse(&text), parse(&text));
}

#[test]
fn test_banner_and_comment_tolerance() {
    let text = load_system_reg();

    let stripped: String = text
        .lines()
        .filter(|line| {
            let line = line.trim();
            !line.is_empty()
                && !line.starts_with(';')
                && !line.starts_with('#')
                && !line.starts_with("WINE REGISTRY")
        })
        .map(|line| format!("{line}\n"))
        .collect();

    assert_eq!(parse(&text), parse(&stripped));
}

#[test]
fn test_crlf_line_endings() {
    let text = load_system_reg();
    let crlf = text.replace('\n', "\r\n");
    assert_eq!(parse(&text), parse(&crlf));
}

#[test]
fn test_strict_mode_accepts_fixture() {
    let text = load_system_reg();
    assert_eq!(parse_strict(&text).unwrap(), parse(&text));
}

#[test]
fn test_unknown_constructs_skipped() {
    let text = "WINE REGISTRY Version 2\n\
                garbage line without meaning\n\
                [Software\\\\Vendor]\n\
                \"V\"=dword:00000001\n\
                some other noise\n";

    let root = parse(text);
    assert_eq!(root.key_count(), 1);
    assert_eq!(
        root.find_value(r"Software\Vendor", "V").unwrap().data,
        ValueData::Dword(1)
    );
}

#[test]
fn test_regedit_banner_variants() {
    for banner in ["Windows Registry Editor Version 5.00", "REGEDIT4"] {
        let text = format!("{banner}\n\n[Software\\\\Vendor]\n\"V\"=\"x\"\n");
        let root = parse(&text);
        assert!(root.find_value(r"Software\Vendor", "V").is_some(), "banner: {banner}");
    }
}

#[test]
fn test_key_header_without_values() {
    let root = parse("[Software\\\\Empty\\\\Leaf]\n");
    let leaf = root.find_key(r"Software\Empty\Leaf").expect("leaf missing");
    assert_eq!(leaf.value_count(), 0);
    assert_eq!(leaf.subkey_count(), 0);
}

#[test]
fn test_values_merge_across_repeated_headers() {
    let text = "[Software\\\\Vendor]\n\
                \"A\"=dword:00000001\n\
                [Software\\\\Other]\n\
                \"B\"=dword:00000002\n\
                [Software\\\\Vendor]\n\
                \"C\"=dword:00000003\n";

    let root = parse(text);
    let vendor = root.find_key(r"Software\Vendor").unwrap();
    assert_eq!(vendor.value_count(), 2);
    assert!(vendor.value("A").is_some());
    assert!(vendor.value("C").is_some());
}

#[cfg(feature = "serde")]
#[test]
fn test_serialize_tree_to_json() {
    let root = parse(&load_system_reg());
    let json = serde_json::to_string(&root).expect("serialization failed");
    assert!(json.contains("InstallDir"));

    let back: winereg::RegistryRoot = serde_json::from_str(&json).expect("deserialization failed");
    assert_eq!(back, root);
}
