use abicheck_layout::{
    struct_layout, AbiStruct, CatalogEntry, FieldLayout, LayoutMismatch, LayoutValidator, Packing,
};
use abicheck_testsuite_core::{AlignedProbe, MissingFieldProbe, MovedFieldProbe, PaddedProbe, TaggedProbe};
use expect_test::expect;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn well_formed_struct_is_conformant() {
    let mut validator = LayoutValidator::new();

    assert!(validator.check::<AlignedProbe>());
    assert!(validator.check::<PaddedProbe>());

    let report = validator.finish();

    assert!(report.is_conformant());
    assert_eq!(report.structs_checked(), 2);
    assert_eq!(report.fields_checked(), 7);
    assert_eq!(report.lines().count(), 0);
    assert!(report.into_result().is_ok());
}

#[test]
fn moved_field_is_reported_once() {
    let mut validator = LayoutValidator::new();

    assert!(!validator.check::<MovedFieldProbe>());

    let report = validator.finish();
    let offset_mismatches: Vec<&LayoutMismatch> = report.mismatches().iter().filter(|m| m.is_offset()).collect();

    assert_eq!(offset_mismatches.len(), 1);
    assert_eq!(offset_mismatches[0].field(), Some("c"));
    assert_eq!(offset_mismatches[0].packing(), Packing::Pack4);

    assert_eq!(
        report.mismatches(),
        [
            LayoutMismatch::Size {
                structure: "Probe_MovedField",
                packing: Packing::Pack4,
                expected: 12,
                got: 8,
            },
            LayoutMismatch::Offset {
                structure: "Probe_MovedField",
                field: "c",
                packing: Packing::Pack4,
                expected: 8,
                got: Some(1),
            },
        ]
    );

    expect![[r#"
        Probe_MovedField has incorrect size with 4-byte alignment, expected 12, got 8
        Probe_MovedField.c has incorrect offset with 4-byte alignment, expected 8, got 1
    "#]]
    .assert_eq(&report.lines().map(|line| line + "\n").collect::<String>());
}

#[test]
fn missing_field_is_reported_as_offset_mismatch() {
    let mut validator = LayoutValidator::new();

    assert!(!validator.check::<MissingFieldProbe>());

    let report = validator.finish();

    assert_eq!(
        report.lines().collect::<Vec<_>>(),
        ["Probe_MissingField.c has incorrect offset with 8-byte alignment, expected 8, got missing"]
    );
}

#[cfg(target_pointer_width = "64")]
#[test]
fn implicit_padding_breaks_four_byte_packing() {
    use abicheck_testsuite_core::UnpaddedProbe;

    let mut validator = LayoutValidator::new();

    assert!(!validator.check::<UnpaddedProbe>());

    expect![[r#"
        Probe_Unpadded has incorrect size with 4-byte alignment, expected 16, got 12
        Probe_Unpadded.value has incorrect offset with 4-byte alignment, expected 8, got 4
    "#]]
    .assert_eq(&validator.finish().lines().map(|line| line + "\n").collect::<String>());
}

#[test]
fn checking_continues_after_a_mismatch() {
    let mut validator = LayoutValidator::new();

    let conformant = validator.check_all([
        CatalogEntry::of::<MovedFieldProbe>(),
        CatalogEntry::of::<AlignedProbe>(),
        CatalogEntry::of::<MissingFieldProbe>(),
    ]);

    assert!(!conformant);
    assert!(!validator.is_conformant());

    let report = validator.finish();

    assert_eq!(report.structs_checked(), 3);
    assert_eq!(report.fields_checked(), 10);
    assert_eq!(report.mismatches().len(), 3);

    let error = report.into_result().unwrap_err();

    assert_eq!(
        error.to_string(),
        "struct layouts differ between packings (3 structs, 10 fields checked, 3 mismatches)"
    );
    assert_eq!(error.into_report().mismatches()[2].structure(), "Probe_MissingField");
}

#[test]
fn raw_identifiers_are_reported_without_prefix() {
    let layout = TaggedProbe::layout(Packing::Default);
    let names: Vec<&str> = layout.fields().iter().map(FieldLayout::name).collect();

    assert_eq!(names, ["type", "mod", "padding"]);
    assert_eq!(layout.field("mod").map(FieldLayout::offset), Some(4));
    assert_eq!(layout.field("r#mod"), None);
    assert_eq!(FieldLayout::new("r#type", 0).name(), "type");
    assert_eq!(TaggedProbe::NAME, "Probe_Tagged");
}

#[rstest]
#[case(Packing::Default)]
#[case(Packing::Pack8)]
#[case(Packing::Pack4)]
fn declared_variants_agree(#[case] packing: Packing) {
    assert_eq!(AlignedProbe::layout(packing), AlignedProbe::layout(Packing::Default));
}

#[test]
fn struct_layout_lists_members_in_given_order() {
    #[repr(C)]
    struct Local {
        first: u8,
        second: u16,
        third: u32,
    }

    let layout = struct_layout!(Local { first, second, third });

    assert_eq!(layout.size(), 8);
    assert_eq!(layout.to_string(), "8 bytes\n     0  first\n     2  second\n     4  third");
}

#[rstest]
#[case(Packing::Default, None, "default alignment")]
#[case(Packing::Pack8, Some(8), "8-byte alignment")]
#[case(Packing::Pack4, Some(4), "4-byte alignment")]
fn packing_alignment(#[case] packing: Packing, #[case] alignment: Option<usize>, #[case] display: &str) {
    assert_eq!(packing.alignment(), alignment);
    assert_eq!(packing.is_forced(), alignment.is_some());
    assert_eq!(packing.to_string(), display);
}

#[test]
fn mismatch_renders_diagnostic_line() {
    let mismatch = LayoutMismatch::Offset {
        structure: "SDL_KeyboardEvent",
        field: "mod",
        packing: Packing::Pack8,
        expected: 32,
        got: Some(36),
    };

    assert_eq!(
        mismatch.to_string(),
        "SDL_KeyboardEvent.mod has incorrect offset with 8-byte alignment, expected 32, got 36"
    );
    assert_eq!(mismatch.structure(), "SDL_KeyboardEvent");
}

#[test]
fn packings_in_checking_order() {
    assert_eq!(Packing::ALL[0], Packing::Default);
    assert_eq!(Packing::ALL[1..], Packing::FORCED);
}
