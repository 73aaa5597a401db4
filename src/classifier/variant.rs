use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
/// A genetic-variant descriptor, serialized with exactly the field names the
/// classifier endpoint expects.
pub struct VariantInput {
    #[serde(rename = "Type")]
    pub variant_type: String,
    #[serde(rename = "GeneSymbol")]
    pub gene_symbol: String,
    #[serde(rename = "HGNC_ID")]
    pub hgnc_id: String,
    #[serde(rename = "Assembly")]
    pub assembly: String,
    #[serde(rename = "ChromosomeAccession")]
    pub chromosome_accession: String,
    #[serde(rename = "Chromosome")]
    pub chromosome: String,
    #[serde(rename = "Cytogenetic")]
    pub cytogenetic: String,
    #[serde(rename = "PositionVCF")]
    pub position_vcf: i64,
    #[serde(rename = "ReferenceAlleleVCF")]
    pub reference_allele_vcf: String,
    #[serde(rename = "AlternateAlleleVCF")]
    pub alternate_allele_vcf: String,
}

/// Known variants covering every phenotype class, used by the "random
/// sample" button on the prediction form.
pub fn sample_variants() -> Vec<VariantInput> {
    vec![
        // Cardiovascular phenotype
        VariantInput {
            variant_type: "single nucleotide variant".to_string(),
            gene_symbol: "DSP".to_string(),
            hgnc_id: "HGNC:3052".to_string(),
            assembly: "GRCh37".to_string(),
            chromosome_accession: "NC_000006.11".to_string(),
            chromosome: "6".to_string(),
            cytogenetic: "6p24.3".to_string(),
            position_vcf: 7584161,
            reference_allele_vcf: "A".to_string(),
            alternate_allele_vcf: "G".to_string(),
        },
        VariantInput {
            variant_type: "single nucleotide variant".to_string(),
            gene_symbol: "SCN10A".to_string(),
            hgnc_id: "HGNC:10582".to_string(),
            assembly: "GRCh37".to_string(),
            chromosome_accession: "NC_000003.11".to_string(),
            chromosome: "3".to_string(),
            cytogenetic: "3p22.2".to_string(),
            position_vcf: 38835431,
            reference_allele_vcf: "A".to_string(),
            alternate_allele_vcf: "G".to_string(),
        },
        // Hereditary cancer-predisposing syndrome
        VariantInput {
            variant_type: "Deletion".to_string(),
            gene_symbol: "BRCA1".to_string(),
            hgnc_id: "HGNC:1100".to_string(),
            assembly: "GRCh38".to_string(),
            chromosome_accession: "NC_000017.11".to_string(),
            chromosome: "17".to_string(),
            cytogenetic: "17q21.31".to_string(),
            position_vcf: 43091818,
            reference_allele_vcf: "G".to_string(),
            alternate_allele_vcf: "T".to_string(),
        },
        VariantInput {
            variant_type: "single nucleotide variant".to_string(),
            gene_symbol: "PRKAR1A".to_string(),
            hgnc_id: "HGNC:9388".to_string(),
            assembly: "GRCh38".to_string(),
            chromosome_accession: "NC_000017.11".to_string(),
            chromosome: "17".to_string(),
            cytogenetic: "17q24.2".to_string(),
            position_vcf: 68525750,
            reference_allele_vcf: "T".to_string(),
            alternate_allele_vcf: "G".to_string(),
        },
        // Inborn genetic diseases
        VariantInput {
            variant_type: "single nucleotide variant".to_string(),
            gene_symbol: "KRT14".to_string(),
            hgnc_id: "HGNC:6416".to_string(),
            assembly: "GRCh38".to_string(),
            chromosome_accession: "NC_000017.11".to_string(),
            chromosome: "17".to_string(),
            cytogenetic: "17q21.2".to_string(),
            position_vcf: 41584300,
            reference_allele_vcf: "C".to_string(),
            alternate_allele_vcf: "T".to_string(),
        },
        VariantInput {
            variant_type: "single nucleotide variant".to_string(),
            gene_symbol: "ERCC2".to_string(),
            hgnc_id: "HGNC:3434".to_string(),
            assembly: "GRCh38".to_string(),
            chromosome_accession: "NC_000019.10".to_string(),
            chromosome: "19".to_string(),
            cytogenetic: "19q13.32".to_string(),
            position_vcf: 45364260,
            reference_allele_vcf: "C".to_string(),
            alternate_allele_vcf: "G".to_string(),
        },
        // Developmental and epileptic encephalopathy
        VariantInput {
            variant_type: "single nucleotide variant".to_string(),
            gene_symbol: "SCN1A".to_string(),
            hgnc_id: "HGNC:10585".to_string(),
            assembly: "GRCh37".to_string(),
            chromosome_accession: "NC_000002.11".to_string(),
            chromosome: "2".to_string(),
            cytogenetic: "2q24.3".to_string(),
            position_vcf: 166850411,
            reference_allele_vcf: "A".to_string(),
            alternate_allele_vcf: "G".to_string(),
        },
        VariantInput {
            variant_type: "single nucleotide variant".to_string(),
            gene_symbol: "KCNQ2".to_string(),
            hgnc_id: "HGNC:6295".to_string(),
            assembly: "GRCh37".to_string(),
            chromosome_accession: "NC_000020.11".to_string(),
            chromosome: "20".to_string(),
            cytogenetic: "20q13.33".to_string(),
            position_vcf: 63445631,
            reference_allele_vcf: "C".to_string(),
            alternate_allele_vcf: "T".to_string(),
        },
    ]
}
