use std::time::Duration;

use egui::{Color32, RichText, TextEdit, Ui};
use rand::seq::SliceRandom;
use threadpool::ThreadPool;

use crate::classifier::client::{classifier_url, spawn_prediction, PredictionRequest};
use crate::classifier::diseases::{disease_description, UNKNOWN_PHENOTYPE_NOTE};
use crate::classifier::variant::{sample_variants, VariantInput};
use crate::errors::error_types::ErrorTypes;

use super::chat::MiniChat;

const VARIANT_TYPES: [&str; 2] = ["single nucleotide variant", "Deletion"];
const ASSEMBLIES: [&str; 2] = ["GRCh37", "GRCh38"];
const ALLELES: [&str; 4] = ["A", "T", "G", "C"];

/// The variant form as the user types it; everything is a string until
/// submission, when it is validated into a `VariantInput`.
#[derive(Default, Clone)]
struct VariantForm {
    variant_type: String,
    gene_symbol: String,
    hgnc_id: String,
    assembly: String,
    chromosome_accession: String,
    chromosome: String,
    cytogenetic: String,
    position_vcf: String,
    reference_allele_vcf: String,
    alternate_allele_vcf: String,
}

impl VariantForm {
    fn from_variant(variant: &VariantInput) -> Self {
        Self {
            variant_type: variant.variant_type.clone(),
            gene_symbol: variant.gene_symbol.clone(),
            hgnc_id: variant.hgnc_id.clone(),
            assembly: variant.assembly.clone(),
            chromosome_accession: variant.chromosome_accession.clone(),
            chromosome: variant.chromosome.clone(),
            cytogenetic: variant.cytogenetic.clone(),
            position_vcf: variant.position_vcf.to_string(),
            reference_allele_vcf: variant.reference_allele_vcf.clone(),
            alternate_allele_vcf: variant.alternate_allele_vcf.clone(),
        }
    }

    fn to_variant(&self) -> Result<VariantInput, ErrorTypes> {
        let fields = [
            &self.variant_type,
            &self.gene_symbol,
            &self.hgnc_id,
            &self.assembly,
            &self.chromosome_accession,
            &self.chromosome,
            &self.cytogenetic,
            &self.position_vcf,
            &self.reference_allele_vcf,
            &self.alternate_allele_vcf,
        ];
        if fields.iter().any(|field| field.trim().is_empty()) {
            return Err(ErrorTypes::new(
                602,
                "Every field is required to run a prediction".to_string(),
            ));
        }
        Ok(VariantInput {
            variant_type: self.variant_type.clone(),
            gene_symbol: self.gene_symbol.trim().to_string(),
            hgnc_id: self.hgnc_id.trim().to_string(),
            assembly: self.assembly.clone(),
            chromosome_accession: self.chromosome_accession.trim().to_string(),
            chromosome: self.chromosome.clone(),
            cytogenetic: self.cytogenetic.trim().to_string(),
            position_vcf: parse_position(&self.position_vcf)?,
            reference_allele_vcf: self.reference_allele_vcf.clone(),
            alternate_allele_vcf: self.alternate_allele_vcf.clone(),
        })
    }
}

/// Validates the VCF position field.
fn parse_position(position: &str) -> Result<i64, ErrorTypes> {
    position
        .trim()
        .parse::<i64>()
        .map_err(|_| ErrorTypes::new(601, "Error parsing the VCF position".to_string()))
}

/// The "Health Prediction" page: the variant form, the in-flight request,
/// and the latest result with its disease description and chat box.
#[derive(Default)]
pub struct PredictPage {
    form: VariantForm,
    pending: Option<PredictionRequest>,
    prediction: Option<String>,
    explanation: Option<String>,
    error: Option<String>,
    chat: MiniChat,
}

impl PredictPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws the page. Returns `true` when the user asked to jump to the
    /// doctors page.
    pub fn ui(&mut self, ui: &mut Ui, pool: &ThreadPool) -> bool {
        self.poll_pending(ui);

        ui.heading("AI-Powered Health Prediction");
        ui.label("Enter your genetic variant details to get phenotype predictions");
        ui.add_space(8.0);

        if ui.button("Use Random Sample").clicked() {
            if let Some(sample) = sample_variants().choose(&mut rand::thread_rng()) {
                self.form = VariantForm::from_variant(sample);
                self.prediction = None;
                self.explanation = None;
                self.error = None;
            }
        }
        ui.add_space(8.0);

        self.form_ui(ui);
        ui.add_space(8.0);

        let busy = self.pending.is_some();
        if busy {
            ui.horizontal(|ui| {
                ui.add(egui::Spinner::new());
                ui.label("Analyzing...");
            });
        } else if ui.button(RichText::new("Get Prediction").heading()).clicked() {
            match self.form.to_variant() {
                Ok(variant) => {
                    self.error = None;
                    self.pending = Some(spawn_prediction(pool, classifier_url(), variant));
                }
                Err(e) => self.error = Some(e.get().1),
            }
        }

        if let Some(error) = &self.error {
            ui.add_space(4.0);
            ui.label(RichText::new(format!("Error: {}", error)).color(Color32::RED));
        }

        let mut go_to_doctors = false;
        if let Some(prediction) = self.prediction.clone() {
            ui.add_space(12.0);
            ui.group(|ui| {
                ui.label(RichText::new("AI Health Prediction").size(16.0));
                ui.label(format!("Predicted Phenotype: {}", prediction));
            });

            if let Some(explanation) = &self.explanation {
                ui.add_space(8.0);
                ui.group(|ui| {
                    ui.label(RichText::new("Understanding Your Condition").size(16.0));
                    ui.label(explanation);
                });
            }

            ui.add_space(8.0);
            self.chat.ui(ui, &prediction);

            ui.add_space(8.0);
            if ui.button("Consult a Doctor").clicked() {
                go_to_doctors = true;
            }
        }
        go_to_doctors
    }

    fn poll_pending(&mut self, ui: &Ui) {
        if let Some(request) = &self.pending {
            match request.try_result() {
                Some(Ok(phenotype)) => {
                    self.explanation = Some(
                        disease_description(&phenotype)
                            .unwrap_or(UNKNOWN_PHENOTYPE_NOTE)
                            .to_string(),
                    );
                    self.prediction = Some(phenotype);
                    self.error = None;
                    self.pending = None;
                }
                Some(Err(e)) => {
                    self.prediction = None;
                    self.explanation = None;
                    self.error = Some(e.get().1);
                    self.pending = None;
                }
                None => ui.ctx().request_repaint_after(Duration::from_millis(100)),
            }
        }
    }

    fn form_ui(&mut self, ui: &mut Ui) {
        egui::Grid::new("variant form")
            .num_columns(2)
            .spacing([16.0, 8.0])
            .show(ui, |ui| {
                option_combo(ui, "Type", &mut self.form.variant_type, &VARIANT_TYPES);
                text_field(ui, "Gene Symbol", "e.g. SCN10A", &mut self.form.gene_symbol);
                ui.end_row();

                text_field(ui, "HGNC ID", "e.g. HGNC:10582", &mut self.form.hgnc_id);
                option_combo(ui, "Assembly", &mut self.form.assembly, &ASSEMBLIES);
                ui.end_row();

                text_field(
                    ui,
                    "Chromosome Accession",
                    "e.g. NC_000003.11",
                    &mut self.form.chromosome_accession,
                );
                chromosome_combo(ui, &mut self.form.chromosome);
                ui.end_row();

                text_field(ui, "Cytogenetic", "e.g. 3p22.2", &mut self.form.cytogenetic);
                text_field(
                    ui,
                    "Position VCF",
                    "e.g. 38835431",
                    &mut self.form.position_vcf,
                );
                ui.end_row();

                option_combo(
                    ui,
                    "Reference Allele VCF",
                    &mut self.form.reference_allele_vcf,
                    &ALLELES,
                );
                option_combo(
                    ui,
                    "Alternate Allele VCF",
                    &mut self.form.alternate_allele_vcf,
                    &ALLELES,
                );
                ui.end_row();
            });
    }
}

fn text_field(ui: &mut Ui, label: &str, hint: &str, value: &mut String) {
    ui.vertical(|ui| {
        ui.label(label);
        ui.add(TextEdit::singleline(value).hint_text(hint));
    });
}

fn option_combo(ui: &mut Ui, label: &str, value: &mut String, options: &[&str]) {
    ui.vertical(|ui| {
        ui.label(label);
        egui::ComboBox::from_id_salt(label)
            .selected_text(if value.is_empty() {
                "Select".to_string()
            } else {
                value.clone()
            })
            .show_ui(ui, |ui| {
                for option in options {
                    ui.selectable_value(value, option.to_string(), *option);
                }
            });
    });
}

fn chromosome_combo(ui: &mut Ui, value: &mut String) {
    let mut options: Vec<String> = (1..=22).map(|n| n.to_string()).collect();
    options.push("X".to_string());
    options.push("Y".to_string());
    ui.vertical(|ui| {
        ui.label("Chromosome");
        egui::ComboBox::from_id_salt("Chromosome")
            .selected_text(if value.is_empty() {
                "Select".to_string()
            } else {
                value.clone()
            })
            .show_ui(ui, |ui| {
                for option in &options {
                    ui.selectable_value(value, option.clone(), option);
                }
            });
    });
}
