mod common;

use salud_rustica::classifier::diseases::{disease_description, PHENOTYPES};
use salud_rustica::classifier::variant::sample_variants;
use salud_rustica::doctors::doctor::{
    filter_by_specialty, load_doctors, specialties, DOCTORS_FILE,
};

use common::doctor;

#[test]
fn seed_file_loads_every_doctor() {
    let doctors = load_doctors(DOCTORS_FILE).expect("seed file parses");
    assert_eq!(doctors.len(), 6);

    let mut ids: Vec<i32> = doctors.iter().map(|d| d.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);

    for d in &doctors {
        assert!((0.0..=5.0).contains(&d.rating));
        assert!(!d.phone.is_empty());
    }
}

#[test]
fn missing_seed_file_is_an_error_not_a_panic() {
    let err = load_doctors("no-such-file.json").unwrap_err();
    assert_eq!(err.get().0, 101);
}

#[test]
fn filtering_never_touches_the_source_list() {
    let doctors = vec![
        doctor(1, "Dr. Rajesh Sharma", "Cardiologist"),
        doctor(2, "Dr. Priya Patel", "General Physician"),
        doctor(3, "Dr. Amit Kumar", "Cardiologist"),
    ];

    let cardiologists = filter_by_specialty(&doctors, Some("Cardiologist"));
    assert_eq!(
        cardiologists.iter().map(|d| d.id).collect::<Vec<_>>(),
        vec![1, 3]
    );

    let everyone = filter_by_specialty(&doctors, None);
    assert_eq!(everyone.len(), 3);

    assert_eq!(doctors.len(), 3);
    assert_eq!(doctors[1].specialty, "General Physician");
}

#[test]
fn specialties_are_unique_in_first_seen_order() {
    let doctors = vec![
        doctor(1, "Dr. Rajesh Sharma", "Cardiologist"),
        doctor(2, "Dr. Priya Patel", "General Physician"),
        doctor(3, "Dr. Amit Kumar", "Cardiologist"),
    ];
    assert_eq!(
        specialties(&doctors),
        vec!["Cardiologist".to_string(), "General Physician".to_string()]
    );
}

#[test]
fn variants_serialize_with_the_classifier_field_names() {
    let variant = &sample_variants()[0];
    let value = serde_json::to_value(variant).expect("serializes");
    let object = value.as_object().expect("a JSON object");

    for key in [
        "Type",
        "GeneSymbol",
        "HGNC_ID",
        "Assembly",
        "ChromosomeAccession",
        "Chromosome",
        "Cytogenetic",
        "PositionVCF",
        "ReferenceAlleleVCF",
        "AlternateAlleleVCF",
    ] {
        assert!(object.contains_key(key), "missing field {}", key);
    }
    assert!(object["PositionVCF"].is_i64());
}

#[test]
fn sample_variants_are_complete() {
    let samples = sample_variants();
    assert_eq!(samples.len(), 8);
    for sample in &samples {
        assert!(!sample.gene_symbol.is_empty());
        assert!(sample.position_vcf > 0);
        assert!(["GRCh37", "GRCh38"].contains(&sample.assembly.as_str()));
    }
}

#[test]
fn every_known_phenotype_has_a_description() {
    for phenotype in PHENOTYPES {
        assert!(disease_description(phenotype).is_some(), "{}", phenotype);
    }
    assert!(disease_description("Something the model never returns").is_none());
}
