use super::*;

#[test]
fn it_splits_drawing_names() {
    let entry = |name: &str| LypEntry {
        name: name.into(),
        ..Default::default()
    };
    assert_eq!(entry("Metal1.drawing").base_name(), Some("Metal1"));
    assert!(entry("Metal1.drawing").is_drawing());
    assert_eq!(entry("Metal1.pin").base_name(), None);
    assert_eq!(entry("Metal1").base_name(), None);
    assert_eq!(entry("Metal1.drawing.x").base_name(), None);
    assert_eq!(entry("").base_name(), None);
}
#[test]
fn it_parses_gds_pairs() -> LypResult<()> {
    let entry = |source: &str| LypEntry {
        name: "Metal1.drawing".into(),
        source: source.into(),
        ..Default::default()
    };
    assert_eq!(entry("8/0").gds_pair()?, (8, 0));
    assert_eq!(entry("126/12@1").gds_pair()?, (126, 12));
    assert_eq!(entry(" 19 / 0 ").gds_pair()?, (19, 0));
    assert!(entry("8").gds_pair().is_err());
    assert!(entry("8/0/1").gds_pair().is_err());
    assert!(entry("*/*@*").gds_pair().is_err());
    assert!(entry("").gds_pair().is_err());
    Ok(())
}
#[test]
fn it_parses_properties() -> LypResult<()> {
    let src = r#"<?xml version="1.0" encoding="utf-8"?>
        <layer-properties>
            <properties>
                <name>Metal1.drawing</name>
                <source>8/0@1</source>
                <fill-color>#39bfff</fill-color>
            </properties>
            <properties>
                <fill-color>#39bfff</fill-color>
                <name>Metal1.pin</name>
                <source>8/2@1</source>
            </properties>
        </layer-properties>
    "#;
    let all = parse_all(src)?;
    assert_eq!(all.len(), 2);
    let drawn = parse_str(src)?;
    assert_eq!(
        drawn,
        vec![LypEntry {
            name: "Metal1.drawing".into(),
            source: "8/0@1".into(),
            fill_color: "#39bfff".into(),
        }]
    );
    Ok(())
}
#[test]
fn it_defaults_missing_fields() -> LypResult<()> {
    let src = "<layer-properties><properties><name>Via1.drawing</name></properties></layer-properties>";
    let entries = parse_str(src)?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].source, "");
    assert_eq!(entries[0].fill_color, "");
    Ok(())
}
#[test]
fn it_accepts_empty_documents() -> LypResult<()> {
    assert!(parse_str("<layer-properties/>")?.is_empty());
    assert!(parse_str("<layer-properties></layer-properties>")?.is_empty());
    Ok(())
}
#[test]
fn it_rejects_other_roots() {
    let err = parse_str("<layers><properties><name>A.drawing</name></properties></layers>");
    assert!(matches!(err, Err(LypError::Parse { .. })));
    let err = parse_str("");
    assert!(matches!(err, Err(LypError::Parse { .. })));
    let err = parse_str("<layer-properties/><layer-properties/>");
    assert!(matches!(err, Err(LypError::Parse { .. })));
}
#[test]
fn it_rejects_malformed_xml() {
    let err = parse_str("<layer-properties><properties><name>A.drawing</source></properties>");
    assert!(matches!(err, Err(LypError::Parse { .. })));
    let err = parse_str("<layer-properties><properties>");
    assert!(matches!(err, Err(LypError::Parse { .. })));
}
#[test]
fn it_reads_lyp_files() -> LypResult<()> {
    let entries = parse_file(resource("layers.lyp"))?;
    // Pins, fillers, purpose-less names and grouped members are all dropped
    let names: Vec<&str> = entries.iter().filter_map(|e| e.base_name()).collect();
    assert_eq!(names, vec!["GatPoly", "Cont", "Metal1", "Via1", "Metal2"]);

    let via1 = &entries[3];
    assert_eq!(via1.source, "19/0");
    assert_eq!(via1.fill_color, "#ccccd9");
    assert_eq!(via1.gds_pair()?, (19, 0));
    assert_eq!(entries[0].gds_pair()?, (5, 0));
    Ok(())
}
#[test]
fn it_fails_on_missing_files() {
    let err = parse_file(resource("does_not_exist.lyp"));
    assert!(matches!(err, Err(LypError::Io(_))));
}

/// Helper function: Grab the full path of resource-file `fname`
fn resource(rname: &str) -> String {
    format!("{}/resources/{}", env!("CARGO_MANIFEST_DIR"), rname)
}
