/// The phenotype classes the model can return, in the classifier's index order.
pub const PHENOTYPES: [&str; 5] = [
    "Cardiovascular phenotype",
    "Developmental and epileptic encephalopathy",
    "Fanconi anemia",
    "Hereditary cancer-predisposing syndrome",
    "Inborn genetic diseases",
];

/// Shown when the classifier returns a phenotype we have no text for.
pub const UNKNOWN_PHENOTYPE_NOTE: &str = "No detailed description available for this phenotype. \
    Please consult with a healthcare professional for more information.";

/// Returns the descriptive text for a predicted phenotype.
pub fn disease_description(phenotype: &str) -> Option<&'static str> {
    match phenotype {
        "Cardiovascular phenotype" => Some(
            "Cardiovascular phenotypes encompass a wide range of heart and blood vessel \
             conditions that can be influenced by genetic variants. These conditions may include \
             arrhythmias, cardiomyopathies, congenital heart defects, and predispositions to \
             coronary artery disease. Genetic variants in genes like SCN10A, DSP, TTN, MYH6, and \
             LMNA can affect heart rhythm, muscle function, and structural integrity. Early \
             detection through genetic testing allows for preventive measures, lifestyle \
             modifications, and targeted therapies to reduce cardiovascular risk.",
        ),
        "Hereditary cancer-predisposing syndrome" => Some(
            "Hereditary cancer-predisposing syndromes are genetic conditions that significantly \
             increase an individual's risk of developing certain types of cancer. These syndromes \
             are caused by inherited mutations in tumor suppressor genes or DNA repair genes such \
             as BRCA1, BRCA2, TP53, PTEN, and PRKAR1A. Individuals with these genetic variants \
             may have a substantially higher lifetime risk of developing breast, ovarian, \
             colorectal, or other cancers. Genetic counseling, enhanced screening protocols, and \
             preventive surgical options may be recommended based on the specific syndrome \
             identified.",
        ),
        "Inborn genetic diseases" => Some(
            "Inborn genetic diseases, also known as inherited metabolic disorders or genetic \
             syndromes, are conditions present from birth due to genetic mutations. These \
             disorders can affect various body systems and metabolic pathways, leading to a wide \
             spectrum of symptoms and severity levels. Genes like KRT14, ERCC2, COL7A1, ABCA1, \
             and CFTR when mutated can cause conditions ranging from skin disorders to cystic \
             fibrosis. Early diagnosis through genetic testing enables appropriate management \
             strategies, specialized treatments, and family planning considerations.",
        ),
        "Fanconi anemia" => Some(
            "Fanconi anemia is a rare inherited disorder characterized by bone marrow failure, \
             increased cancer susceptibility, and various physical abnormalities. It is caused by \
             mutations in genes involved in DNA repair, including FANCA, FANCB, FANCC, FANCD2, \
             and FANCE. Patients typically develop progressive bone marrow failure leading to low \
             blood cell counts, and have an increased risk of developing certain cancers, \
             particularly head and neck squamous cell carcinomas and gynecological cancers. \
             Treatment may include blood transfusions, bone marrow transplantation, and regular \
             cancer surveillance.",
        ),
        "Developmental and epileptic encephalopathy" => Some(
            "Developmental and epileptic encephalopathy (DEE) represents a group of severe \
             neurological conditions characterized by early-onset epilepsy and developmental \
             delays. These conditions are often caused by mutations in genes crucial for brain \
             development and neuronal function, such as SCN1A, SCN2A, KCNQ2, STXBP1, and CDKL5. \
             Patients typically experience frequent seizures that are difficult to control, along \
             with intellectual disability and developmental regression. Management requires a \
             multidisciplinary approach including anti-epileptic medications, developmental \
             therapies, and ongoing neurological monitoring.",
        ),
        _ => None,
    }
}
