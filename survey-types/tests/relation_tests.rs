use survey_types::Relation;

#[test]
fn codes_match_wire_format() {
    let codes: Vec<&str> = Relation::ALL.iter().map(|r| r.code()).collect();
    assert_eq!(codes, vec!["SELF", "PEER", "SUB", "SUP"]);
}

#[test]
fn labels() {
    assert_eq!(Relation::SelfReview.label(), "Self");
    assert_eq!(Relation::Subordinate.label(), "Subordinate");
    assert_eq!(Relation::Superior.label(), "Superior");
}

#[test]
fn parse_from_code() {
    assert_eq!("PEER".parse::<Relation>().unwrap(), Relation::Peer);
    assert_eq!("SUP".parse::<Relation>().unwrap(), Relation::Superior);
}

#[test]
fn parse_is_case_sensitive() {
    let err = "peer".parse::<Relation>().unwrap_err();
    assert!(format!("{err}").contains("invalid relation code: peer"));
}

#[test]
fn serde_uses_codes() {
    assert_eq!(serde_json::to_string(&Relation::SelfReview).unwrap(), "\"SELF\"");
    let r: Relation = serde_json::from_str("\"SUB\"").unwrap();
    assert_eq!(r, Relation::Subordinate);
}

#[test]
fn display_matches_code() {
    for r in Relation::ALL {
        assert_eq!(r.to_string(), r.code());
    }
}
