mod heart;
mod parkinsons;

pub use heart::HeartForm;
pub use parkinsons::ParkinsonsForm;

use crate::core::Disease;
use crate::ui::types::schema::{FieldSpec, field_specs};
use anyhow::Result;

/// Ordered prompt specs for the given disease form.
pub fn form_specs(disease: Disease) -> Result<Vec<FieldSpec>> {
    match disease {
        Disease::HeartDisease => field_specs::<HeartForm>(),
        Disease::Parkinsons => field_specs::<ParkinsonsForm>(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_form_matches_its_domain_arity() {
        for disease in Disease::iter() {
            let specs = form_specs(disease).unwrap();
            assert_eq!(specs.len(), disease.arity(), "{disease}");
        }
    }

    #[test]
    fn heart_fields_are_in_positional_order() {
        let specs = form_specs(Disease::HeartDisease).unwrap();
        assert_eq!(specs.len(), 13);
        assert_eq!(specs[0].name, "age");
        assert_eq!(specs[1].name, "sex");
        assert_eq!(specs[12].name, "thal");
        assert_eq!(specs[0].title, "Age");
        assert_eq!(specs[1].help.as_deref(), Some("0: Female, 1: Male"));
    }

    #[test]
    fn parkinsons_fields_are_in_positional_order() {
        let specs = form_specs(Disease::Parkinsons).unwrap();
        assert_eq!(specs.len(), 22);
        assert_eq!(specs[0].title, "MDVP:Fo(Hz)");
        assert_eq!(specs[3].title, "MDVP:Jitter(%)");
        assert_eq!(specs[21].title, "PPE");
    }
}
